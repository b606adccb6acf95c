//! # Context Guard
//!
//! Scoped ownership of a curve library context.
//!
//! A guard is the only way the domain obtains a context. Destruction runs
//! exactly once: either through [`ContextGuard::release`] or when the guard
//! is dropped, whichever comes first, on every success and error path.

use super::errors::SignatureError;
use crate::ports::outbound::{Capabilities, CurveBackend};
use tracing::trace;

/// Owns one context for the duration of a single facade call.
pub struct ContextGuard<'a, B: CurveBackend> {
    backend: &'a B,
    context: B::Context,
    released: bool,
}

impl<'a, B: CurveBackend> ContextGuard<'a, B> {
    /// Create a context with `capabilities`.
    ///
    /// # Errors
    /// * `ContextCreationFailed` - the backend could not provide one
    pub fn acquire(backend: &'a B, capabilities: Capabilities) -> Result<Self, SignatureError> {
        let context = backend
            .context_create(capabilities)
            .map_err(|_| SignatureError::ContextCreationFailed)?;

        trace!(?capabilities, "secp256k1 context created");

        Ok(Self {
            backend,
            context,
            released: false,
        })
    }

    /// Borrow the live context.
    pub fn context(&self) -> &B::Context {
        &self.context
    }

    /// Destroy the context now rather than at scope exit.
    pub fn release(mut self) {
        self.destroy();
    }

    fn destroy(&mut self) {
        if !self.released {
            self.backend.context_destroy(&mut self.context);
            self.released = true;
            trace!("secp256k1 context destroyed");
        }
    }
}

impl<B: CurveBackend> Drop for ContextGuard<'_, B> {
    fn drop(&mut self) {
        self.destroy();
    }
}
