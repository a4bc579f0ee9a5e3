//! Credential persistence
//!
//! Owns the JSON credential file and the load/save/add operations on it.

pub mod document;
pub mod file;

pub use file::CredentialStore;
