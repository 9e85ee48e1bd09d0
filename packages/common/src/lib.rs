//! Common infrastructure for the hashlab crates
//!
//! This crate provides shared functionality used across the playground:
//! - An error type carrying a user-facing kind, context and source chain
//! - A `Classify` seam so each crate's error can be routed onto that taxonomy
//! - `env_logger` setup and uniform log message helpers
//! - The retain-or-clear policy applied when an operation fails

pub mod error;
pub mod policy;

pub use error::*;
pub use policy::FailureMode;
