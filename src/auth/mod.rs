//! Authentication
//!
//! Password hashing and credential validation against the store.

pub mod hashing;
pub mod validator;

pub use hashing::hash_password;
pub use validator::validate_user;
