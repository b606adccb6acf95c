//! # Hex Codec
//!
//! Strict conversion between hexadecimal text and bytes, used at every
//! boundary of the facade.
//!
//! - Decoding accepts upper and lower case digits, rejects odd lengths,
//!   separators and `0x` prefixes.
//! - Encoding is lowercase, two digits per byte.

use crate::CodecError;

/// Decode hex text into an owned byte buffer.
///
/// The buffer is reserved fallibly so an oversized input surfaces as
/// [`CodecError::AllocationFailure`] instead of aborting the host.
pub fn decode_hex(text: &str) -> Result<Vec<u8>, CodecError> {
    if text.len() % 2 != 0 {
        return Err(hex::FromHexError::OddLength.into());
    }

    let len = text.len() / 2;
    let mut bytes = Vec::new();
    bytes
        .try_reserve_exact(len)
        .map_err(|_| CodecError::AllocationFailure)?;
    bytes.resize(len, 0);

    hex::decode_to_slice(text, &mut bytes)?;
    Ok(bytes)
}

/// Decode hex text that must describe exactly `N` bytes.
pub fn decode_hex_array<const N: usize>(text: &str) -> Result<[u8; N], CodecError> {
    if text.len() % 2 != 0 {
        return Err(hex::FromHexError::OddLength.into());
    }

    let actual = text.len() / 2;
    if actual != N {
        return Err(CodecError::InvalidLength {
            expected: N,
            actual,
        });
    }

    let mut out = [0u8; N];
    hex::decode_to_slice(text, &mut out)?;
    Ok(out)
}

/// Encode bytes as lowercase hex.
pub fn encode_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}
