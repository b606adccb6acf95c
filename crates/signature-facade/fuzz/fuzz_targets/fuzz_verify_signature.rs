//! Fuzz target for signature verification.
//!
//! Arbitrary text and arbitrary bytes (hex-encoded, so the input reaches the
//! format detector and the curve library) must never panic.
//!
//! ## Running
//!
//! ```bash
//! cd crates/signature-facade
//! cargo +nightly fuzz run fuzz_verify_signature
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use signature_facade::verify_signature;

/// Fuzz input structure for verification.
#[derive(Debug, arbitrary::Arbitrary)]
struct FuzzInput {
    message: String,
    /// Raw text passed straight through as signature hex
    signature_text: String,
    /// Bytes hex-encoded into a well-formed signature argument
    signature_bytes: Vec<u8>,
    /// Bytes hex-encoded into a well-formed public key argument
    public_key_bytes: Vec<u8>,
}

fuzz_target!(|input: FuzzInput| {
    let public_key_hex = hex::encode(&input.public_key_bytes);

    let raw = verify_signature(&input.message, &input.signature_text, &public_key_hex);
    let encoded = verify_signature(
        &input.message,
        &hex::encode(&input.signature_bytes),
        &public_key_hex,
    );

    // Deterministic
    let again = verify_signature(
        &input.message,
        &hex::encode(&input.signature_bytes),
        &public_key_hex,
    );
    assert_eq!(encoded, again);

    // Outcomes stay in the three-valued range
    assert!((-1..=1).contains(&raw.code()));
    assert_eq!(encoded.is_valid(), encoded.code() == 1);
});
