//! Infrastructure Services
//!
//! - **client**: the sign-up HTTP client and the context handle the form reads it from
//! - **config**: endpoint configuration
//! - **errors**: client error type and result alias
//!
//! Traits are WASM-first: async methods without Send/Sync bounds.

pub mod client;
pub mod config;
pub mod errors;
