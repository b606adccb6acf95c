//! # Domain Entities
//!
//! Core data structures for verification and recovery.

use super::errors::SignatureError;
use super::format::{classify, SignatureFormat};
use shared_crypto::encode_hex;

// =============================================================================
// Sizes and conventions
// =============================================================================

/// Compact signature size (r || s).
pub const COMPACT_SIGNATURE_LEN: usize = 64;

/// Recoverable signature size (r || s || recovery marker).
pub const RECOVERABLE_SIGNATURE_LEN: usize = 65;

/// Compressed SEC1 public key size.
pub const COMPRESSED_PUBLIC_KEY_LEN: usize = 33;

/// Uncompressed SEC1 public key size.
pub const UNCOMPRESSED_PUBLIC_KEY_LEN: usize = 65;

/// Ethereum-style offset added to the recovery id in the marker byte.
pub const RECOVERY_MARKER_OFFSET: u8 = 27;

// =============================================================================
// Signatures
// =============================================================================

/// Signature bytes tagged with the parser they should go to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Signature {
    /// Fixed 64-byte r || s
    Compact([u8; COMPACT_SIGNATURE_LEN]),
    /// DER-shaped sequence (at least 7 bytes)
    Canonical(Vec<u8>),
}

impl Signature {
    /// Classify decoded bytes and wrap them.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, SignatureError> {
        match classify(&bytes) {
            SignatureFormat::Canonical => Ok(Self::Canonical(bytes)),
            SignatureFormat::Compact => {
                let mut rs = [0u8; COMPACT_SIGNATURE_LEN];
                rs.copy_from_slice(&bytes);
                Ok(Self::Compact(rs))
            }
            SignatureFormat::Invalid => {
                Err(SignatureError::InvalidSignatureFormat { len: bytes.len() })
            }
        }
    }

    /// Encoding family of this signature.
    pub fn format(&self) -> SignatureFormat {
        match self {
            Self::Compact(_) => SignatureFormat::Compact,
            Self::Canonical(_) => SignatureFormat::Canonical,
        }
    }

    /// Raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Compact(rs) => rs,
            Self::Canonical(der) => der,
        }
    }
}

/// Recovery id in `0..=3`, selecting one of up to four candidate keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecoveryId(u8);

impl RecoveryId {
    /// Largest valid recovery id.
    pub const MAX: u8 = 3;

    /// Create from a raw id.
    pub fn new(id: u8) -> Option<Self> {
        (id <= Self::MAX).then_some(Self(id))
    }

    /// Decode an Ethereum-style marker byte (27..=30).
    pub fn from_marker(marker: u8) -> Result<Self, SignatureError> {
        marker
            .checked_sub(RECOVERY_MARKER_OFFSET)
            .and_then(Self::new)
            .ok_or(SignatureError::InvalidRecoveryId(marker))
    }

    /// Raw id.
    pub fn to_byte(self) -> u8 {
        self.0
    }

    /// Marker byte form (id + 27).
    pub fn to_marker(self) -> u8 {
        self.0 + RECOVERY_MARKER_OFFSET
    }
}

/// Compact signature plus recovery id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecoverableSignature {
    rs: [u8; COMPACT_SIGNATURE_LEN],
    recovery_id: RecoveryId,
}

impl RecoverableSignature {
    /// Split 65 bytes into r || s and the trailing recovery marker.
    pub fn from_bytes(bytes: &[u8; RECOVERABLE_SIGNATURE_LEN]) -> Result<Self, SignatureError> {
        let recovery_id = RecoveryId::from_marker(bytes[COMPACT_SIGNATURE_LEN])?;

        let mut rs = [0u8; COMPACT_SIGNATURE_LEN];
        rs.copy_from_slice(&bytes[..COMPACT_SIGNATURE_LEN]);

        Ok(Self { rs, recovery_id })
    }

    /// The r || s half.
    pub fn rs(&self) -> &[u8; COMPACT_SIGNATURE_LEN] {
        &self.rs
    }

    /// The recovery id.
    pub fn recovery_id(&self) -> RecoveryId {
        self.recovery_id
    }
}

// =============================================================================
// Public keys
// =============================================================================

/// SEC1 point encoding requested from the curve library.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyForm {
    /// 33 bytes, parity prefix + x
    Compressed,
    /// 65 bytes, 0x04 + x + y
    Uncompressed,
}

/// secp256k1 public key in one of its SEC1 encodings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PublicKey {
    /// 0x02/0x03 || x
    Compressed([u8; COMPRESSED_PUBLIC_KEY_LEN]),
    /// 0x04 || x || y
    Uncompressed([u8; UNCOMPRESSED_PUBLIC_KEY_LEN]),
}

impl PublicKey {
    /// Accept either encoding, checking length and prefix only.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SignatureError> {
        match bytes.len() {
            COMPRESSED_PUBLIC_KEY_LEN => Self::compressed_from_bytes(bytes),
            UNCOMPRESSED_PUBLIC_KEY_LEN => {
                if bytes[0] != 0x04 {
                    return Err(SignatureError::InvalidPublicKeyFormat(
                        "Uncompressed public key must start with 0x04".to_string(),
                    ));
                }
                let mut key = [0u8; UNCOMPRESSED_PUBLIC_KEY_LEN];
                key.copy_from_slice(bytes);
                Ok(Self::Uncompressed(key))
            }
            len => Err(SignatureError::InvalidPublicKeyFormat(format!(
                "Public key must be 33 or 65 bytes, got {len}"
            ))),
        }
    }

    /// Accept only the compressed encoding (verifier input).
    pub fn compressed_from_bytes(bytes: &[u8]) -> Result<Self, SignatureError> {
        if bytes.len() != COMPRESSED_PUBLIC_KEY_LEN {
            return Err(SignatureError::InvalidPublicKeyFormat(format!(
                "Public key must be 33 bytes (compressed format), got {}",
                bytes.len()
            )));
        }

        if bytes[0] != 0x02 && bytes[0] != 0x03 {
            return Err(SignatureError::InvalidPublicKeyFormat(
                "Public key must start with 0x02 or 0x03 (compressed format)".to_string(),
            ));
        }

        let mut key = [0u8; COMPRESSED_PUBLIC_KEY_LEN];
        key.copy_from_slice(bytes);
        Ok(Self::Compressed(key))
    }

    /// Raw SEC1 bytes.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Compressed(key) => key,
            Self::Uncompressed(key) => key,
        }
    }

    /// Encoding of this key.
    pub fn form(&self) -> KeyForm {
        match self {
            Self::Compressed(_) => KeyForm::Compressed,
            Self::Uncompressed(_) => KeyForm::Uncompressed,
        }
    }

    /// Lowercase hex of the SEC1 bytes.
    pub fn to_hex(&self) -> String {
        encode_hex(self.as_bytes())
    }
}

// =============================================================================
// Verification outcome
// =============================================================================

/// Result of a verification call.
///
/// Separates "evaluated to false" from "could not be evaluated". Hosts that
/// only understand a single boolean use [`VerifyOutcome::is_valid`]; hosts
/// that understand the numeric sentinel use [`VerifyOutcome::code`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VerifyOutcome {
    /// The signature authenticates the message under the key
    Valid,
    /// Inputs were well formed but the signature does not verify
    Invalid,
    /// Verification could not be evaluated
    Failed(SignatureError),
}

impl VerifyOutcome {
    /// Host sentinel for an outcome that could not be evaluated.
    pub const FAILURE_CODE: i32 = -1;

    /// Single-channel view: only `Valid` is true.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Whether evaluation failed before a cryptographic answer was reached.
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// The failure, if any.
    pub fn error(&self) -> Option<&SignatureError> {
        match self {
            Self::Failed(e) => Some(e),
            _ => None,
        }
    }

    /// Numeric view: 1 valid, 0 invalid, -1 failed.
    pub fn code(&self) -> i32 {
        match self {
            Self::Valid => 1,
            Self::Invalid => 0,
            Self::Failed(_) => Self::FAILURE_CODE,
        }
    }
}

impl From<Result<bool, SignatureError>> for VerifyOutcome {
    fn from(result: Result<bool, SignatureError>) -> Self {
        match result {
            Ok(true) => Self::Valid,
            Ok(false) => Self::Invalid,
            Err(e) => Self::Failed(e),
        }
    }
}
