use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeapError {
    #[error("capacity must not be negative, got {0}")]
    InvalidCapacity(isize),
    #[error("heap is full ({capacity} elements)")]
    HeapFull { capacity: usize },
    #[error("heap is empty")]
    HeapEmpty,
    #[error("index {index} is outside 1..={size}")]
    InvalidIndex { index: usize, size: usize },
    #[error(transparent)]
    InvalidArgument(#[from] ArgumentError),
    #[error("adjusting key {key} by {delta} overflows")]
    KeyOverflow { key: i64, delta: i64 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentError {
    #[error("delta must be positive, got {0}")]
    NonPositiveDelta(i64),
    #[error("k = {k} is outside 1..={size}")]
    KOutOfRange { k: usize, size: usize },
}

pub type Result<T> = std::result::Result<T, HeapError>;
