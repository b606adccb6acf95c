//! Fuzz target for public key recovery.
//!
//! ## Running
//!
//! ```bash
//! cd crates/signature-facade
//! cargo +nightly fuzz run fuzz_recover_public_key
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use signature_facade::recover_public_key;

/// Fuzz input structure for recovery.
#[derive(Debug, arbitrary::Arbitrary)]
struct FuzzInput {
    rs: [u8; 64],
    marker: u8,
    digest: [u8; 32],
    release_context: bool,
}

fuzz_target!(|input: FuzzInput| {
    let mut signature = input.rs.to_vec();
    signature.push(input.marker);

    let result = recover_public_key(
        &hex::encode(&signature),
        &hex::encode(&input.digest),
        input.release_context,
    );

    // A recovered key is always 65 bytes, uncompressed, lowercase
    if let Ok(key) = &result {
        assert_eq!(key.len(), 130);
        assert!(key.starts_with("04"));
        assert!(!key.bytes().any(|b| b.is_ascii_uppercase()));
    }

    // Markers outside 27..=30 never reach the curve library
    if !(27..=30).contains(&input.marker) {
        assert!(result.is_err());
    }
});
