pub mod element;
pub mod error;
pub mod heap;
pub mod shared;

pub use element::Element;
pub use error::{ArgumentError, HeapError, Result};
pub use heap::Heap;
pub use shared::SharedHeap;
