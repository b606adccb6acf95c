//! # Shared Crypto - Hashing and Encoding Primitives
//!
//! Leaf primitives used by the signature facade.
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `hashing` | SHA-256 | Message digests for ECDSA |
//! | `encoding` | Base16 | Hex text at every API boundary |
//!
//! The SHA-256 engine is implemented in-crate; `sha2` is only used as a
//! reference in tests and benchmarks.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod encoding;
pub mod errors;
pub mod hashing;

// Re-exports
pub use encoding::{decode_hex, decode_hex_array, encode_hex};
pub use errors::CodecError;
pub use hashing::{sha256, Digest, DIGEST_LEN};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
