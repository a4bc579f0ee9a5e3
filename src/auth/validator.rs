//! Credential validation
//!
//! Checks a plaintext username/password pair against the hashed entries
//! held by the credential store.

use std::thread;
use std::time::Duration;

use subtle::ConstantTimeEq;

use super::hashing::hash_password;
use crate::store::CredentialStore;

/// Fixed delay applied to every validation attempt so the found and
/// not-found branches below it take the same time. The load and hash above
/// it are not constant-time, so this is not a full timing-attack guarantee.
const LOGIN_DELAY: Duration = Duration::from_millis(100);

/// Validate a plaintext username/password pair.
///
/// Returns false for unknown usernames, wrong passwords, and unreadable
/// stores alike; never panics. Blocks the calling thread for at least
/// [`LOGIN_DELAY`].
pub fn validate_user(store: &CredentialStore, username: &str, password: &str) -> bool {
    let users = store.load_users();
    // Hash the supplied password before the delay, whether or not the
    // username exists.
    let password_hash = hash_password(password);

    thread::sleep(LOGIN_DELAY);

    match users.get(username) {
        // Constant-time comparison: latency does not reveal how many
        // leading bytes of the digest matched.
        Some(stored_hash) => password_hash
            .as_bytes()
            .ct_eq(stored_hash.as_bytes())
            .into(),
        None => false,
    }
}
