//! Password hashing

use sha2::{Digest, Sha256};

/// SHA-256 of the password's UTF-8 bytes as 64 characters of lowercase hex.
///
/// Unsalted, single round. Kept that way for compatibility with digests
/// already on disk; switching to a salted memory-hard hash needs a
/// migration step for existing entries.
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_deterministic() {
        assert_eq!(hash_password("s3cret"), hash_password("s3cret"));
    }

    #[test]
    fn test_hash_shape() {
        let digest = hash_password("anything");
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(digest, digest.to_lowercase());
    }

    #[test]
    fn test_known_digest() {
        assert_eq!(
            hash_password("admin123"),
            "240be518fabd2724ddb6f04eeb1da5967448d7e831c08c8fa822809f74c720a9"
        );
    }

    #[test]
    fn test_different_passwords_differ() {
        assert_ne!(hash_password("admin123"), hash_password("admin124"));
    }
}
