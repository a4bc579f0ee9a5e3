//! File-backed credential store
//!
//! Every operation is a whole-file read or write: load parses the full
//! document, mutations rewrite it in its entirety. There is no locking and
//! no atomic rename; the store is meant for a single interactive caller,
//! and two concurrent writers can lose an update.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{info, warn};

use super::document::CredentialDocument;
use crate::auth::hash_password;
use crate::error::StoreError;

/// Accounts seeded when the credential file does not exist yet. Deployments
/// are expected to rotate these via `add_user` immediately.
const DEFAULT_ACCOUNTS: [(&str, &str); 2] = [("admin", "admin123"), ("user1", "password123")];

/// Handle to the JSON credential file. Constructed once at startup and
/// passed by reference wherever validation is needed.
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the credential file backing this store
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the username -> password-hash mapping from disk.
    ///
    /// A missing file is not an error: the default accounts are seeded,
    /// persisted, and returned. Any other failure (malformed JSON, missing
    /// `USERS` key, I/O error) is logged and degrades to an empty mapping,
    /// so callers see every login fail instead of a crash.
    pub fn load_users(&self) -> HashMap<String, String> {
        match self.try_load() {
            Ok(users) => users,
            Err(StoreError::FileNotFound(path)) => {
                info!("Credential file {} missing, seeding default accounts", path);
                let defaults = Self::default_users();
                self.save_users(&defaults);
                defaults
            }
            Err(e) => {
                warn!("Failed to load users: {}", e);
                HashMap::new()
            }
        }
    }

    /// Serialize `{"USERS": users}` as indented JSON and overwrite the file.
    /// Write failures are logged and absorbed.
    pub fn save_users(&self, users: &HashMap<String, String>) {
        if let Err(e) = self.try_save(users) {
            warn!("Failed to save users: {}", e);
        }
    }

    /// Insert or overwrite the entry for `username` with the hash of
    /// `password` and persist the full mapping. Reports success
    /// unconditionally; there is no duplicate-detection signal.
    pub fn add_user(&self, username: &str, password: &str) -> bool {
        let mut users = self.load_users();
        users.insert(username.to_string(), hash_password(password));
        self.save_users(&users);
        true
    }

    fn default_users() -> HashMap<String, String> {
        DEFAULT_ACCOUNTS
            .iter()
            .map(|(username, password)| (username.to_string(), hash_password(password)))
            .collect()
    }

    fn try_load(&self) -> Result<HashMap<String, String>, StoreError> {
        let raw = fs::read_to_string(&self.path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                StoreError::FileNotFound(self.path.display().to_string())
            } else {
                StoreError::IoError(e)
            }
        })?;

        let document: CredentialDocument = serde_json::from_str(&raw)?;
        Ok(document.users)
    }

    fn try_save(&self, users: &HashMap<String, String>) -> Result<(), StoreError> {
        let document = CredentialDocument {
            users: users.clone(),
        };
        let raw = serde_json::to_string_pretty(&document)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}
