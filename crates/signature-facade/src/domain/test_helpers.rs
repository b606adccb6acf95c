//! Shared fixtures for domain and adapter tests.

use crate::adapters::k256_backend::{K256Backend, K256Context};
use crate::domain::entities::{KeyForm, RecoveryId, COMPACT_SIGNATURE_LEN};
use crate::ports::outbound::{BackendError, Capabilities, CurveBackend};
use k256::ecdsa::{RecoveryId as K256RecoveryId, Signature as K256Signature, SigningKey, VerifyingKey};
use shared_crypto::{encode_hex, Digest};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Generate a random signing key.
pub fn generate_keypair() -> SigningKey {
    SigningKey::random(&mut rand::thread_rng())
}

/// Deterministic signing key.
pub fn fixed_signing_key() -> SigningKey {
    SigningKey::from_bytes((&[0xABu8; 32]).into()).expect("valid scalar")
}

/// Signing key for the scalar 1; its public key is the generator point.
pub fn unit_signing_key() -> SigningKey {
    let mut bytes = [0u8; 32];
    bytes[31] = 1;
    SigningKey::from_bytes((&bytes).into()).expect("valid scalar")
}

/// Sign a digest, returning compact r || s and the raw recovery id.
pub fn sign_digest(key: &SigningKey, digest: &Digest) -> ([u8; COMPACT_SIGNATURE_LEN], u8) {
    let (sig, recid) = key
        .sign_prehash_recoverable(digest.as_bytes())
        .expect("signing failed");
    let mut rs = [0u8; COMPACT_SIGNATURE_LEN];
    rs.copy_from_slice(&sig.to_bytes());
    (rs, recid.to_byte())
}

/// Compact signature over `digest` as hex.
pub fn compact_hex(key: &SigningKey, digest: &Digest) -> String {
    encode_hex(&sign_digest(key, digest).0)
}

/// DER signature over `digest` as hex.
pub fn der_hex(key: &SigningKey, digest: &Digest) -> String {
    let (sig, _) = key
        .sign_prehash_recoverable(digest.as_bytes())
        .expect("signing failed");
    encode_hex(sig.to_der().as_bytes())
}

/// 65-byte recoverable signature (r || s || marker) as hex.
pub fn recoverable_hex(key: &SigningKey, digest: &Digest) -> String {
    let (rs, recid) = sign_digest(key, digest);
    let mut bytes = rs.to_vec();
    bytes.push(recid + 27);
    encode_hex(&bytes)
}

/// Compressed public key as hex.
pub fn compressed_hex(key: &SigningKey) -> String {
    encode_hex(key.verifying_key().to_encoded_point(true).as_bytes())
}

/// Uncompressed public key as hex.
pub fn uncompressed_hex(key: &SigningKey) -> String {
    encode_hex(key.verifying_key().to_encoded_point(false).as_bytes())
}

/// Wraps [`K256Backend`] and counts context lifecycle calls.
#[derive(Debug, Default)]
pub struct CountingBackend {
    inner: K256Backend,
    created: AtomicUsize,
    destroyed: AtomicUsize,
    refuse_contexts: bool,
}

impl CountingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend whose context creation always fails.
    pub fn refusing_contexts() -> Self {
        Self {
            refuse_contexts: true,
            ..Self::default()
        }
    }

    pub fn created(&self) -> usize {
        self.created.load(Ordering::SeqCst)
    }

    pub fn destroyed(&self) -> usize {
        self.destroyed.load(Ordering::SeqCst)
    }

    /// Contexts created and not yet destroyed.
    pub fn live(&self) -> usize {
        self.created() - self.destroyed()
    }
}

impl CurveBackend for CountingBackend {
    type Context = K256Context;
    type Signature = K256Signature;
    type RecoverableSignature = (K256Signature, K256RecoveryId);
    type PublicKey = VerifyingKey;

    fn context_create(&self, capabilities: Capabilities) -> Result<K256Context, BackendError> {
        if self.refuse_contexts {
            return Err(BackendError::ContextUnavailable);
        }
        self.created.fetch_add(1, Ordering::SeqCst);
        self.inner.context_create(capabilities)
    }

    fn context_destroy(&self, context: &mut K256Context) {
        self.destroyed.fetch_add(1, Ordering::SeqCst);
        self.inner.context_destroy(context);
    }

    fn signature_parse_der(
        &self,
        context: &K256Context,
        input: &[u8],
    ) -> Result<K256Signature, BackendError> {
        self.inner.signature_parse_der(context, input)
    }

    fn signature_parse_compact(
        &self,
        context: &K256Context,
        input: &[u8; COMPACT_SIGNATURE_LEN],
    ) -> Result<K256Signature, BackendError> {
        self.inner.signature_parse_compact(context, input)
    }

    fn recoverable_signature_parse_compact(
        &self,
        context: &K256Context,
        input: &[u8; COMPACT_SIGNATURE_LEN],
        recovery_id: RecoveryId,
    ) -> Result<(K256Signature, K256RecoveryId), BackendError> {
        self.inner
            .recoverable_signature_parse_compact(context, input, recovery_id)
    }

    fn public_key_parse(
        &self,
        context: &K256Context,
        input: &[u8],
    ) -> Result<VerifyingKey, BackendError> {
        self.inner.public_key_parse(context, input)
    }

    fn public_key_serialize(
        &self,
        context: &K256Context,
        public_key: &VerifyingKey,
        form: KeyForm,
    ) -> Result<Vec<u8>, BackendError> {
        self.inner.public_key_serialize(context, public_key, form)
    }

    fn verify(
        &self,
        context: &K256Context,
        signature: &K256Signature,
        digest: &Digest,
        public_key: &VerifyingKey,
    ) -> Result<bool, BackendError> {
        self.inner.verify(context, signature, digest, public_key)
    }

    fn recover(
        &self,
        context: &K256Context,
        signature: &(K256Signature, K256RecoveryId),
        digest: &Digest,
    ) -> Result<VerifyingKey, BackendError> {
        self.inner.recover(context, signature, digest)
    }
}
