//! Error types for aten-lite

use thiserror::Error;

/// Result type alias using aten-lite's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in tensor operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Shape is not usable for a tensor (e.g. it has no dimensions)
    #[error("Invalid shape: {reason}")]
    InvalidShape {
        /// Why the shape was rejected
        reason: &'static str,
    },

    /// Shape mismatch in an operation
    #[error("Shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        /// Expected shape
        expected: Vec<usize>,
        /// Actual shape
        got: Vec<usize>,
    },

    /// Payload is neither a flat sequence nor equal-length rows
    #[error("Unsupported data layout: {layout}")]
    UnsupportedDataType {
        /// Description of the rejected layout
        layout: String,
    },

    /// Index outside the selected storage axis
    #[error("Index {index} out of range for axis of size {size}")]
    OutOfRange {
        /// The invalid index
        index: usize,
        /// Size of the axis
        size: usize,
    },
}

impl Error {
    /// Create a shape mismatch error
    pub fn shape_mismatch(expected: &[usize], got: &[usize]) -> Self {
        Self::ShapeMismatch {
            expected: expected.to_vec(),
            got: got.to_vec(),
        }
    }

    /// Create an unsupported layout error
    pub fn unsupported(layout: impl Into<String>) -> Self {
        Self::UnsupportedDataType {
            layout: layout.into(),
        }
    }
}
