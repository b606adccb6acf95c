//! # k256 Curve Backend
//!
//! Implements [`CurveBackend`] on the pure-Rust `k256` crate.
//!
//! `k256` has no precomputed context, so [`K256Context`] only records the
//! capability flags it was created with and whether it has been destroyed.
//! Every operation checks both, which keeps the context-based contract
//! honest: verify and recover need the verify capability, and a destroyed
//! context is unusable.

use crate::domain::entities::{KeyForm, RecoveryId, COMPACT_SIGNATURE_LEN};
use crate::ports::outbound::{BackendError, Capabilities, CurveBackend};
use k256::ecdsa::signature::hazmat::PrehashVerifier;
use k256::ecdsa::{RecoveryId as K256RecoveryId, Signature as K256Signature, VerifyingKey};
use shared_crypto::Digest;

/// Context handle for [`K256Backend`].
#[derive(Debug)]
pub struct K256Context {
    capabilities: Capabilities,
    live: bool,
}

impl K256Context {
    /// Capabilities this context was created with.
    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    /// Whether the context has not been destroyed yet.
    pub fn is_live(&self) -> bool {
        self.live
    }

    fn ensure_live(&self) -> Result<(), BackendError> {
        if self.live {
            Ok(())
        } else {
            Err(BackendError::ContextUnavailable)
        }
    }

    fn ensure_verify(&self) -> Result<(), BackendError> {
        self.ensure_live()?;
        if self.capabilities.verify {
            Ok(())
        } else {
            Err(BackendError::MissingCapability("verify"))
        }
    }
}

/// secp256k1 backend using `k256`.
#[derive(Debug, Clone, Copy, Default)]
pub struct K256Backend;

impl K256Backend {
    /// Create a new backend.
    pub fn new() -> Self {
        Self
    }
}

impl CurveBackend for K256Backend {
    type Context = K256Context;
    type Signature = K256Signature;
    type RecoverableSignature = (K256Signature, K256RecoveryId);
    type PublicKey = VerifyingKey;

    fn context_create(&self, capabilities: Capabilities) -> Result<K256Context, BackendError> {
        Ok(K256Context {
            capabilities,
            live: true,
        })
    }

    fn context_destroy(&self, context: &mut K256Context) {
        context.live = false;
    }

    fn signature_parse_der(
        &self,
        context: &K256Context,
        input: &[u8],
    ) -> Result<K256Signature, BackendError> {
        context.ensure_live()?;
        K256Signature::from_der(input).map_err(|_| BackendError::Rejected)
    }

    fn signature_parse_compact(
        &self,
        context: &K256Context,
        input: &[u8; COMPACT_SIGNATURE_LEN],
    ) -> Result<K256Signature, BackendError> {
        context.ensure_live()?;
        K256Signature::from_slice(input).map_err(|_| BackendError::Rejected)
    }

    fn recoverable_signature_parse_compact(
        &self,
        context: &K256Context,
        input: &[u8; COMPACT_SIGNATURE_LEN],
        recovery_id: RecoveryId,
    ) -> Result<(K256Signature, K256RecoveryId), BackendError> {
        context.ensure_live()?;
        let signature = K256Signature::from_slice(input).map_err(|_| BackendError::Rejected)?;
        let recovery_id =
            K256RecoveryId::from_byte(recovery_id.to_byte()).ok_or(BackendError::Rejected)?;
        Ok((signature, recovery_id))
    }

    fn public_key_parse(
        &self,
        context: &K256Context,
        input: &[u8],
    ) -> Result<VerifyingKey, BackendError> {
        context.ensure_live()?;
        VerifyingKey::from_sec1_bytes(input).map_err(|_| BackendError::Rejected)
    }

    fn public_key_serialize(
        &self,
        context: &K256Context,
        public_key: &VerifyingKey,
        form: KeyForm,
    ) -> Result<Vec<u8>, BackendError> {
        context.ensure_live()?;
        let point = public_key.to_encoded_point(form == KeyForm::Compressed);
        Ok(point.as_bytes().to_vec())
    }

    fn verify(
        &self,
        context: &K256Context,
        signature: &K256Signature,
        digest: &Digest,
        public_key: &VerifyingKey,
    ) -> Result<bool, BackendError> {
        context.ensure_verify()?;
        Ok(public_key
            .verify_prehash(digest.as_bytes(), signature)
            .is_ok())
    }

    fn recover(
        &self,
        context: &K256Context,
        signature: &(K256Signature, K256RecoveryId),
        digest: &Digest,
    ) -> Result<VerifyingKey, BackendError> {
        context.ensure_verify()?;
        let (signature, recovery_id) = signature;

        // recover_from_prehash re-verifies, which refuses high S. (r, n - s)
        // with the opposite R parity recovers the same key.
        let (signature, recovery_id) = match signature.normalize_s() {
            Some(low) => (
                low,
                K256RecoveryId::new(!recovery_id.is_y_odd(), recovery_id.is_x_reduced()),
            ),
            None => (*signature, *recovery_id),
        };

        VerifyingKey::recover_from_prehash(digest.as_bytes(), &signature, recovery_id)
            .map_err(|_| BackendError::Rejected)
    }
}
