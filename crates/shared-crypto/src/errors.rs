//! Codec error types.

use thiserror::Error;

/// Errors raised while converting between hex text and bytes.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CodecError {
    /// Odd length or a character outside `[0-9a-fA-F]`
    #[error("Invalid hex: {0}")]
    InvalidHex(String),

    /// Decoded byte count differs from the required size
    #[error("Invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength {
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// The output buffer could not be reserved
    #[error("Allocation failure")]
    AllocationFailure,
}

impl From<hex::FromHexError> for CodecError {
    fn from(e: hex::FromHexError) -> Self {
        CodecError::InvalidHex(e.to_string())
    }
}
