//! # Signature Facade Service
//!
//! Application service layer that implements the `SignatureFacadeApi` trait.
//!
//! ## Architecture
//!
//! This is the hexagonal "application service" that:
//! - Implements the inbound port (`SignatureFacadeApi`)
//! - Uses the outbound port (`CurveBackend`) for curve arithmetic
//! - Delegates input handling to the domain layer
//! - Reports every failure through `tracing`

use crate::adapters::k256_backend::K256Backend;
use crate::domain::entities::VerifyOutcome;
use crate::domain::errors::SignatureError;
use crate::domain::{recoverer, verifier};
use crate::ports::inbound::SignatureFacadeApi;
use crate::ports::outbound::CurveBackend;
use tracing::{debug, warn};

/// Signature Facade Service.
///
/// Holds no state besides the backend; each call creates and destroys its
/// own context.
#[derive(Debug, Clone)]
pub struct SignatureFacadeService<B: CurveBackend = K256Backend> {
    backend: B,
}

impl<B: CurveBackend> SignatureFacadeService<B> {
    /// Create a service over `backend`.
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// The curve backend in use.
    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl Default for SignatureFacadeService<K256Backend> {
    fn default() -> Self {
        Self::new(K256Backend::new())
    }
}

impl<B: CurveBackend> SignatureFacadeApi for SignatureFacadeService<B> {
    fn verify_signature(
        &self,
        message: &str,
        signature_hex: &str,
        public_key_hex: &str,
    ) -> VerifyOutcome {
        let outcome: VerifyOutcome =
            verifier::verify(&self.backend, message.as_bytes(), signature_hex, public_key_hex)
                .into();

        match &outcome {
            VerifyOutcome::Valid => debug!(message_len = message.len(), "signature valid"),
            VerifyOutcome::Invalid => debug!(message_len = message.len(), "signature invalid"),
            VerifyOutcome::Failed(e) => warn!(reason = %e, "signature verification failed"),
        }

        outcome
    }

    fn recover_public_key(
        &self,
        signature_hex: &str,
        message_hash_hex: &str,
        release_context: bool,
    ) -> Result<String, SignatureError> {
        recoverer::recover(
            &self.backend,
            signature_hex,
            message_hash_hex,
            release_context,
        )
        .inspect(|_| debug!(release_context, "public key recovered"))
        .inspect_err(|e| warn!(reason = %e, "public key recovery failed"))
    }
}
