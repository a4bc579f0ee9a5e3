pub mod auth;
pub mod config;
pub mod error;
pub mod store;

pub use auth::{hash_password, validate_user};
pub use store::CredentialStore;
