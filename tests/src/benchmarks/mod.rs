//! # Signature Facade Benchmarks
//!
//! Performance benchmarks for the facade operations.

pub mod signature_facade;
