//! # Signature Format Detection
//!
//! Structural probe that picks between the DER parser and the 64-byte
//! compact parser.
//!
//! This is not a DER validator. It checks just enough shape (sequence tag,
//! plausible length byte, two integer tags) to route the bytes; the curve
//! library's own parser stays authoritative and may still reject them.

use super::entities::COMPACT_SIGNATURE_LEN;

/// ASN.1 SEQUENCE tag.
pub const DER_SEQUENCE_TAG: u8 = 0x30;

/// ASN.1 INTEGER tag.
pub const DER_INTEGER_TAG: u8 = 0x02;

/// Smallest byte count that can hold a sequence of two integers.
pub const MIN_DER_SIGNATURE_LEN: usize = 7;

/// Encoding family of a signature byte sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignatureFormat {
    /// Variable-length DER sequence of two integers
    Canonical,
    /// Fixed 64-byte r || s
    Compact,
    /// Neither
    Invalid,
}

/// Classify signature bytes.
///
/// DER shape wins over length: a 64-byte input that looks like a DER
/// sequence is routed to the DER parser.
pub fn classify(bytes: &[u8]) -> SignatureFormat {
    if is_der_shaped(bytes) {
        SignatureFormat::Canonical
    } else if bytes.len() == COMPACT_SIGNATURE_LEN {
        SignatureFormat::Compact
    } else {
        SignatureFormat::Invalid
    }
}

fn is_der_shaped(bytes: &[u8]) -> bool {
    if bytes.len() < MIN_DER_SIGNATURE_LEN || bytes[0] != DER_SEQUENCE_TAG {
        return false;
    }

    // Declared content length must fit behind the two header bytes
    let declared_len = bytes[1] as usize;
    if declared_len > bytes.len() - 2 {
        return false;
    }

    if bytes[2] != DER_INTEGER_TAG {
        return false;
    }

    // Second INTEGER follows the first one's tag, length byte and body
    let second_tag_at = 4 + bytes[3] as usize;
    bytes.get(second_tag_at) == Some(&DER_INTEGER_TAG)
}
