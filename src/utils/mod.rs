//! Utility modules
//!
//! Shared error and logging infrastructure for the registry.

/// Error types and the crate-wide `Result` alias
pub mod error;
/// Tracing subscriber setup
pub mod logging;
