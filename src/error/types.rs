//! Error types
//!
//! Domain-specific error types for the store layer. These stay internal to
//! the crate: the public operations absorb them and degrade to an empty
//! user set instead of propagating.

use std::fmt;
use std::io;

/// Store module errors
#[derive(Debug)]
pub enum StoreError {
    FileNotFound(String),
    IoError(io::Error),
    MalformedDocument(serde_json::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::FileNotFound(p) => write!(f, "Credential file not found: {}", p),
            StoreError::IoError(e) => write!(f, "IO error: {}", e),
            StoreError::MalformedDocument(e) => write!(f, "Malformed credential file: {}", e),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<io::Error> for StoreError {
    fn from(error: io::Error) -> Self {
        StoreError::IoError(error)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(error: serde_json::Error) -> Self {
        StoreError::MalformedDocument(error)
    }
}
