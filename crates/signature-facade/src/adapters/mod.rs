//! # Adapters Module
//!
//! Infrastructure adapters implementing the ports.

pub mod k256_backend;

pub use k256_backend::{K256Backend, K256Context};
