use parking_lot::Mutex;

use crate::element::Element;
use crate::error::Result;
use crate::heap::Heap;

/// A [`Heap`] behind a lock, for callers that share one heap across threads.
///
/// Every method holds the lock for the whole operation, so percolation never
/// interleaves with another caller and the heap property is observed to hold
/// between calls. Use [`SharedHeap::with_heap`] when several operations must
/// happen atomically.
pub struct SharedHeap<T> {
    heap: Mutex<Heap<T>>,
}

impl<T> SharedHeap<T> {
    pub fn new(capacity: isize) -> Result<Self> {
        Ok(Self::from_heap(Heap::new(capacity)?))
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_heap(Heap::with_capacity(capacity))
    }

    pub fn from_heap(heap: Heap<T>) -> Self {
        Self {
            heap: Mutex::new(heap),
        }
    }

    pub fn into_inner(self) -> Heap<T> {
        self.heap.into_inner()
    }

    pub fn insert(&self, element: Element<T>) -> Result<()> {
        self.heap.lock().insert(element)
    }

    /// Returns a copy of the maximum; the lock is released before returning.
    pub fn find_max(&self) -> Result<Element<T>>
    where
        T: Clone,
    {
        self.heap.lock().find_max().map(Element::clone)
    }

    pub fn delete_max(&self) -> Result<Element<T>> {
        self.heap.lock().delete_max()
    }

    pub fn remove_kth_max(&self, k: usize) -> Result<Element<T>> {
        self.heap.lock().remove_kth_max(k)
    }

    pub fn increase_key(&self, index: usize, delta: i64) -> Result<()> {
        self.heap.lock().increase_key(index, delta)
    }

    pub fn decrease_key(&self, index: usize, delta: i64) -> Result<()> {
        self.heap.lock().decrease_key(index, delta)
    }

    pub fn delete(&self, index: usize) -> Result<Element<T>> {
        self.heap.lock().delete(index)
    }

    pub fn len(&self) -> usize {
        self.heap.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.heap.lock().capacity()
    }

    pub fn with_heap<R>(&self, f: impl FnOnce(&mut Heap<T>) -> R) -> R {
        f(&mut self.heap.lock())
    }
}

impl<T> std::fmt::Display for SharedHeap<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", *self.heap.lock())
    }
}
