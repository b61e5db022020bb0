//! # Nimbus Library
//!
//! Exposes the CLI and grid modules for the integration tests.
//!
//! The binary uses these through the `main.rs` entry point.

pub mod cli;
pub mod grid;

// Re-export nimbus_core for convenience
pub use nimbus_core;
