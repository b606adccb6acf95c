//! # Signature Errors
//!
//! Error types for verification and recovery.
//!
//! The messages are the ones the scripting host surfaces to its users, so
//! they name the offending input and the expected shape.

use crate::ports::outbound::BackendError;
use shared_crypto::CodecError;
use thiserror::Error;

/// Errors that can occur during signature verification or key recovery.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SignatureError {
    /// Input text is not valid hex (odd length or non-hex character)
    #[error("Invalid hex: {0}")]
    InvalidHex(String),

    /// Signature bytes are neither DER-shaped nor 64-byte compact
    #[error("Invalid signature format: {len} bytes is neither DER nor 64-byte compact")]
    InvalidSignatureFormat { len: usize },

    /// Recoverable signature hex has the wrong number of characters
    #[error("Signature must be exactly {expected} hex characters, got {actual}")]
    InvalidSignatureLength { expected: usize, actual: usize },

    /// Message hash hex has the wrong number of characters
    #[error("Message hash must be exactly {expected} hex characters, got {actual}")]
    InvalidDigestLength { expected: usize, actual: usize },

    /// Public key has the wrong length or prefix for the operation
    #[error("Invalid public key format: {0}")]
    InvalidPublicKeyFormat(String),

    /// The curve library refused the signature encoding
    #[error("Failed to parse signature")]
    SignatureParseError,

    /// The curve library refused the public key encoding
    #[error("Failed to parse public key")]
    PublicKeyParseError,

    /// Recovery marker outside 27..=30
    #[error("Invalid recovery id in signature: marker {0} (must be 27, 28, 29 or 30)")]
    InvalidRecoveryId(u8),

    /// No valid point for this signature/hash pair
    #[error("Failed to recover public key")]
    RecoveryFailed,

    /// The curve library could not allocate a context
    #[error("Failed to create secp256k1 context")]
    ContextCreationFailed,

    /// The context was created without a capability the operation needs
    #[error("Context lacks the {0} capability")]
    MissingCapability(&'static str),

    /// A buffer could not be allocated
    #[error("Memory allocation failed")]
    AllocationFailure,
}

impl SignatureError {
    /// Translate a backend failure, using `rejected` when the library simply
    /// refused the input.
    pub(crate) fn from_backend(err: BackendError, rejected: SignatureError) -> Self {
        match err {
            BackendError::ContextUnavailable => SignatureError::ContextCreationFailed,
            BackendError::MissingCapability(capability) => {
                SignatureError::MissingCapability(capability)
            }
            BackendError::Rejected => rejected,
        }
    }
}

impl From<CodecError> for SignatureError {
    fn from(e: CodecError) -> Self {
        match e {
            CodecError::AllocationFailure => SignatureError::AllocationFailure,
            other => SignatureError::InvalidHex(other.to_string()),
        }
    }
}
