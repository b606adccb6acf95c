//! # Signature Verification
//!
//! Verify an ECDSA signature over `sha256(message)` against a compressed
//! secp256k1 public key.
//!
//! ## Pipeline
//!
//! 1. Hash the message with the in-crate SHA-256
//! 2. Decode signature and key hex
//! 3. Classify the signature (DER-shaped or 64-byte compact)
//! 4. Require a 33-byte compressed key
//! 5. Parse and verify inside one scoped context
//!
//! Everything up to step 4 fails without touching the curve library.

use super::context::ContextGuard;
use super::entities::{PublicKey, Signature};
use super::errors::SignatureError;
use crate::ports::outbound::{Capabilities, CurveBackend};
use shared_crypto::{decode_hex, sha256};

/// Verify `signature_hex` over `sha256(message)` with `public_key_hex`.
///
/// Returns `Ok(false)` when the inputs are well-formed but the signature
/// does not match.
///
/// # Errors
/// * `InvalidHex` - either input is not valid hex
/// * `InvalidSignatureFormat` - neither DER-shaped nor 64 bytes
/// * `InvalidPublicKeyFormat` - key is not 33 bytes with a 0x02/0x03 prefix
/// * `ContextCreationFailed` - no context available
/// * `SignatureParseError` / `PublicKeyParseError` - refused by the library
pub fn verify<B: CurveBackend>(
    backend: &B,
    message: &[u8],
    signature_hex: &str,
    public_key_hex: &str,
) -> Result<bool, SignatureError> {
    let digest = sha256(message);

    let signature_bytes = decode_hex(signature_hex)?;
    let public_key_bytes = decode_hex(public_key_hex)?;

    let signature = Signature::from_bytes(signature_bytes)?;
    let public_key = PublicKey::compressed_from_bytes(&public_key_bytes)?;

    let guard = ContextGuard::acquire(backend, Capabilities::VERIFY)?;
    let context = guard.context();

    let parsed_signature = match &signature {
        Signature::Canonical(der) => backend.signature_parse_der(context, der),
        Signature::Compact(rs) => backend.signature_parse_compact(context, rs),
    }
    .map_err(|e| SignatureError::from_backend(e, SignatureError::SignatureParseError))?;

    let parsed_key = backend
        .public_key_parse(context, public_key.as_bytes())
        .map_err(|e| SignatureError::from_backend(e, SignatureError::PublicKeyParseError))?;

    backend
        .verify(context, &parsed_signature, &digest, &parsed_key)
        .map_err(|e| SignatureError::from_backend(e, SignatureError::SignatureParseError))
}
