//! Credential document model
//!
//! On-disk shape of the credential file: a single JSON object whose `USERS`
//! key maps usernames to 64-character hex SHA-256 digests. No version field,
//! no checksum.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Serialize, Deserialize)]
pub struct CredentialDocument {
    #[serde(rename = "USERS")]
    pub users: HashMap<String, String>,
}
