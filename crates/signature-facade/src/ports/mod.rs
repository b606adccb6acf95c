//! # Ports Layer
//!
//! Trait definitions for the hexagonal architecture.
//! - **Inbound (Driving)**: API that the scripting host calls
//! - **Outbound (Driven)**: the secp256k1 library this facade delegates to

pub mod inbound;
pub mod outbound;
