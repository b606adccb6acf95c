//! # Public Key Recovery
//!
//! Recover the uncompressed public key that produced a 65-byte recoverable
//! signature (r || s || marker) over a caller-supplied digest.
//!
//! The digest is used exactly as given. Callers that want to recover from a
//! message must hash it themselves.

use super::context::ContextGuard;
use super::entities::{KeyForm, PublicKey, RecoverableSignature, RECOVERABLE_SIGNATURE_LEN};
use super::errors::SignatureError;
use crate::ports::outbound::{Capabilities, CurveBackend};
use shared_crypto::{decode_hex_array, Digest, DIGEST_LEN};

/// Hex length of a recoverable signature.
pub const RECOVERABLE_SIGNATURE_HEX_LEN: usize = 2 * RECOVERABLE_SIGNATURE_LEN;

/// Hex length of a message digest.
pub const DIGEST_HEX_LEN: usize = 2 * DIGEST_LEN;

/// Recover the signer's public key as 130 lowercase hex characters.
///
/// With `release_context_immediately` the context is destroyed as soon as
/// the key is serialized; otherwise it goes when the call returns. Either
/// way it is destroyed exactly once.
///
/// # Errors
/// * `InvalidSignatureLength` - signature hex is not 130 characters
/// * `InvalidDigestLength` - digest hex is not 64 characters
/// * `InvalidHex` - non-hex characters
/// * `InvalidRecoveryId` - marker byte outside 27..=30
/// * `ContextCreationFailed` - no context available
/// * `SignatureParseError` - r or s out of range
/// * `RecoveryFailed` - no point matches the signature and digest
pub fn recover<B: CurveBackend>(
    backend: &B,
    signature_hex: &str,
    message_hash_hex: &str,
    release_context_immediately: bool,
) -> Result<String, SignatureError> {
    if signature_hex.len() != RECOVERABLE_SIGNATURE_HEX_LEN {
        return Err(SignatureError::InvalidSignatureLength {
            expected: RECOVERABLE_SIGNATURE_HEX_LEN,
            actual: signature_hex.len(),
        });
    }
    if message_hash_hex.len() != DIGEST_HEX_LEN {
        return Err(SignatureError::InvalidDigestLength {
            expected: DIGEST_HEX_LEN,
            actual: message_hash_hex.len(),
        });
    }

    let signature_bytes: [u8; RECOVERABLE_SIGNATURE_LEN] = decode_hex_array(signature_hex)?;
    let digest = Digest::from_hex(message_hash_hex)?;
    let signature = RecoverableSignature::from_bytes(&signature_bytes)?;

    let guard = ContextGuard::acquire(backend, Capabilities::VERIFY_AND_SIGN)?;
    let context = guard.context();

    let parsed = backend
        .recoverable_signature_parse_compact(context, signature.rs(), signature.recovery_id())
        .map_err(|e| SignatureError::from_backend(e, SignatureError::SignatureParseError))?;

    let recovered = backend
        .recover(context, &parsed, &digest)
        .map_err(|e| SignatureError::from_backend(e, SignatureError::RecoveryFailed))?;

    let serialized = backend
        .public_key_serialize(context, &recovered, KeyForm::Uncompressed)
        .map_err(|e| SignatureError::from_backend(e, SignatureError::RecoveryFailed))?;

    let public_key = PublicKey::from_bytes(&serialized)?;
    if public_key.form() != KeyForm::Uncompressed {
        return Err(SignatureError::InvalidPublicKeyFormat(format!(
            "Recovered key serialized to {} bytes instead of 65",
            serialized.len()
        )));
    }

    if release_context_immediately {
        guard.release();
    }

    Ok(public_key.to_hex())
}
