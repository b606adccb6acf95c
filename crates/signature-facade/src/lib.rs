//! # Signature Facade
//!
//! secp256k1 signature verification and public key recovery for scripting
//! hosts that pass everything around as hex text.
//!
//! ## Architecture
//!
//! This crate follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): input validation, format detection,
//!   context scoping, verify and recover pipelines
//! - **Ports Layer** (`ports/`): the host-facing API and the curve library port
//! - **Adapters Layer** (`adapters/`): the `k256` implementation of the port
//! - **Service Layer** (`service.rs`): wires domain logic to ports, logs outcomes
//!
//! ## Operations
//!
//! | Operation | Input | Output |
//! |-----------|-------|--------|
//! | [`verify_signature`] | message, DER or compact signature, compressed key | [`VerifyOutcome`] |
//! | [`recover_public_key`] | 65-byte recoverable signature, 32-byte digest | uncompressed key hex |
//!
//! Verification hashes the message with SHA-256 first. Recovery uses the
//! digest as given.
//!
//! ## Security Notes
//!
//! - Signatures with a high S value do not verify, but still recover the
//!   signer's key
//! - Every call creates and destroys its own context; nothing is pooled

#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;
pub mod telemetry;

// Re-export public API
pub use adapters::k256_backend::{K256Backend, K256Context};
pub use domain::entities::{
    KeyForm, PublicKey, RecoverableSignature, RecoveryId, Signature, VerifyOutcome,
};
pub use domain::errors::SignatureError;
pub use domain::format::{classify, SignatureFormat};
pub use ports::inbound::SignatureFacadeApi;
pub use ports::outbound::{BackendError, Capabilities, CurveBackend};
pub use service::SignatureFacadeService;
pub use telemetry::{init_logging, LoggingConfig, TelemetryError};

/// Verify a signature over `sha256(message)` with the default backend.
///
/// See [`SignatureFacadeApi::verify_signature`].
pub fn verify_signature(message: &str, signature_hex: &str, public_key_hex: &str) -> VerifyOutcome {
    SignatureFacadeService::<K256Backend>::default().verify_signature(
        message,
        signature_hex,
        public_key_hex,
    )
}

/// Recover an uncompressed public key with the default backend.
///
/// See [`SignatureFacadeApi::recover_public_key`].
pub fn recover_public_key(
    signature_hex: &str,
    message_hash_hex: &str,
    release_context: bool,
) -> Result<String, SignatureError> {
    SignatureFacadeService::<K256Backend>::default().recover_public_key(
        signature_hex,
        message_hash_hex,
        release_context,
    )
}
