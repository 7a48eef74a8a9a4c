//! Utility Functions and Cross-Cutting Concerns
//!
//! - **console_macros**: logging macros that write to the browser console under wasm
//!   and to `tracing` everywhere else
//! - **platform**: browser environment lookups (page origin)

pub mod console_macros;
pub mod platform;

pub use platform::*;
