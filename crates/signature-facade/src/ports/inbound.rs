//! # Inbound Ports (Driving Ports / API)
//!
//! The two operations the scripting host binds.

use crate::domain::entities::VerifyOutcome;
use crate::domain::errors::SignatureError;

/// Signature facade API.
///
/// Implementations must be thread-safe (`Send + Sync`). Every call owns its
/// own curve context; nothing is shared between calls.
pub trait SignatureFacadeApi: Send + Sync {
    /// Verify a signature over `sha256(message)` against a compressed key.
    ///
    /// Never fails: malformed input and library failures come back as
    /// [`VerifyOutcome::Failed`].
    fn verify_signature(
        &self,
        message: &str,
        signature_hex: &str,
        public_key_hex: &str,
    ) -> VerifyOutcome;

    /// Recover the uncompressed public key (130 hex chars) from a 65-byte
    /// recoverable signature and a caller-supplied 32-byte digest.
    ///
    /// The digest is used as given; it is not rehashed.
    ///
    /// # Errors
    /// * `InvalidSignatureLength` / `InvalidDigestLength` - wrong hex length
    /// * `InvalidHex` - non-hex characters
    /// * `InvalidRecoveryId` - marker byte outside 27..=30
    /// * `SignatureParseError` / `RecoveryFailed` - rejected by the curve library
    fn recover_public_key(
        &self,
        signature_hex: &str,
        message_hash_hex: &str,
        release_context: bool,
    ) -> Result<String, SignatureError>;
}
