//! Memory store errors.

use thiserror::Error;

/// Errors raised when building a memory store or its entries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MemoryError {
    /// Short-term capacity must be positive.
    #[error("Short-term memory capacity must be greater than 0")]
    InvalidCapacity,

    /// Importance scores are bounded to 0..=10.
    #[error("Importance {value} is out of range (expected 0-10)")]
    InvalidImportance { value: i64 },
}

/// Result type alias for memory operations.
pub type MemoryResult<T> = Result<T, MemoryError>;
