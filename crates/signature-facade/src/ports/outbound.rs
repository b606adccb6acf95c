//! # Outbound Ports (Driven Ports / SPI)
//!
//! The secp256k1 library the facade delegates point arithmetic to.
//!
//! The shape follows the classic context-based secp256k1 API: a context is
//! created with capability flags, every parse/verify/recover call takes it,
//! and it is destroyed once at the end of the call.

use crate::domain::entities::{KeyForm, RecoveryId, COMPACT_SIGNATURE_LEN};
use shared_crypto::Digest;
use thiserror::Error;

/// Capability flags requested when creating a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Capabilities {
    /// Verification and recovery
    pub verify: bool,
    /// Signing
    pub sign: bool,
}

impl Capabilities {
    /// `{verify}`
    pub const VERIFY: Self = Self {
        verify: true,
        sign: false,
    };

    /// `{verify, sign}`
    pub const VERIFY_AND_SIGN: Self = Self {
        verify: true,
        sign: true,
    };
}

/// Error from the curve library.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BackendError {
    /// No context could be created, or the context is no longer live
    #[error("Context unavailable")]
    ContextUnavailable,

    /// The context was created without the needed capability
    #[error("Missing capability: {0}")]
    MissingCapability(&'static str),

    /// The library refused the input
    #[error("Input rejected")]
    Rejected,
}

/// Gateway to a secp256k1 implementation.
///
/// Parsed values are owned by the caller and carry no reference to the
/// context they were produced with.
pub trait CurveBackend: Send + Sync {
    /// Library context handle.
    type Context;
    /// Parsed (non-recoverable) signature.
    type Signature;
    /// Parsed recoverable signature.
    type RecoverableSignature;
    /// Parsed public key.
    type PublicKey;

    /// Create a context with the given capabilities.
    fn context_create(&self, capabilities: Capabilities) -> Result<Self::Context, BackendError>;

    /// Destroy a context. Called exactly once per created context.
    fn context_destroy(&self, context: &mut Self::Context);

    /// Parse a DER-encoded signature.
    fn signature_parse_der(
        &self,
        context: &Self::Context,
        input: &[u8],
    ) -> Result<Self::Signature, BackendError>;

    /// Parse a 64-byte compact signature.
    fn signature_parse_compact(
        &self,
        context: &Self::Context,
        input: &[u8; COMPACT_SIGNATURE_LEN],
    ) -> Result<Self::Signature, BackendError>;

    /// Parse a compact signature together with its recovery id.
    fn recoverable_signature_parse_compact(
        &self,
        context: &Self::Context,
        input: &[u8; COMPACT_SIGNATURE_LEN],
        recovery_id: RecoveryId,
    ) -> Result<Self::RecoverableSignature, BackendError>;

    /// Parse a SEC1 public key; the length (33 or 65) selects the encoding.
    fn public_key_parse(
        &self,
        context: &Self::Context,
        input: &[u8],
    ) -> Result<Self::PublicKey, BackendError>;

    /// Serialize a public key in the requested form.
    fn public_key_serialize(
        &self,
        context: &Self::Context,
        public_key: &Self::PublicKey,
        form: KeyForm,
    ) -> Result<Vec<u8>, BackendError>;

    /// ECDSA verify over a 32-byte digest. A signature that does not match is
    /// `Ok(false)`, not an error.
    fn verify(
        &self,
        context: &Self::Context,
        signature: &Self::Signature,
        digest: &Digest,
        public_key: &Self::PublicKey,
    ) -> Result<bool, BackendError>;

    /// ECDSA public key recovery over a 32-byte digest.
    fn recover(
        &self,
        context: &Self::Context,
        signature: &Self::RecoverableSignature,
        digest: &Digest,
    ) -> Result<Self::PublicKey, BackendError>;
}
