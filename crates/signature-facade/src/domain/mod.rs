//! # Domain Layer
//!
//! Verification and recovery logic, written against the [`CurveBackend`]
//! port so it never names a concrete curve library.
//!
//! [`CurveBackend`]: crate::ports::outbound::CurveBackend

pub mod context;
pub mod entities;
pub mod errors;
pub mod format;
pub mod recoverer;
pub mod verifier;

#[cfg(test)]
pub mod test_helpers;
