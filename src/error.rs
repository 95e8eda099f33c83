//! Error types for container construction, indexing, and arithmetic.

use thiserror::Error;

/// Convenience alias for results of fallible container operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by [`DenseVector`](crate::DenseVector) and
/// [`SquareMatrix`](crate::SquareMatrix) operations.
///
/// The set is closed and every variant carries the offending values, so
/// callers branch on the exact violated precondition rather than on
/// message text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Requested element count or side length is zero or above the
    /// configured ceiling.
    #[error("invalid size {size}: must be between 1 and {max}")]
    InvalidSize {
        /// The size that was requested.
        size: usize,
        /// The ceiling it was checked against.
        max: usize,
    },

    /// A constructor was handed an unusable source buffer.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// Checked indexing outside `[0, len)`.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// The index that was requested.
        index: usize,
        /// The length of the container.
        len: usize,
    },

    /// Operand sizes disagree for an operation requiring equal shapes.
    #[error("size mismatch: {left} vs {right}")]
    SizeMismatch {
        /// Size of the left (receiver) operand.
        left: usize,
        /// Size of the right operand.
        right: usize,
    },
}

/// Validates a requested size against its ceiling.
pub(crate) fn check_size(size: usize, max: usize) -> Result<()> {
    if size == 0 || size > max {
        return Err(Error::InvalidSize { size, max });
    }
    Ok(())
}

/// Requires two operand sizes to agree.
pub(crate) fn check_same_size(left: usize, right: usize) -> Result<()> {
    if left != right {
        return Err(Error::SizeMismatch { left, right });
    }
    Ok(())
}
