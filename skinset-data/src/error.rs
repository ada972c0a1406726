use std::fmt;
use thiserror::Error;

/// Identifies which of the two parallel sequences a lookup failed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sequence {
    Samples,
    Labels,
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sequence::Samples => write!(f, "samples"),
            Sequence::Labels => write!(f, "labels"),
        }
    }
}

/// Custom error type for the skinset data crate.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum DataError {
    #[error("Index out of bounds: index {index} for {sequence} of length {len}")]
    IndexOutOfBounds {
        index: usize,
        len: usize,
        sequence: Sequence,
    },

    #[error("Shape mismatch: expected {expected:?}, got {actual:?} during operation {operation}")]
    ShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
        operation: String,
    },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Transform failed: {0}")]
    TransformFailed(String),
}
