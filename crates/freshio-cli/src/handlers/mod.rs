//! Command handlers.
//!
//! Handlers follow the canonical pattern:
//! - Parse/validate CLI-specific input
//! - Drive the acquisition loop
//! - Format output for the terminal

pub mod fetch;
