//! Error handling
//!
//! Defines error types for the credential store.

pub mod types;

pub use types::*;
