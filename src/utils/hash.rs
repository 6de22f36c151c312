use sha2::{Digest, Sha256};

/// Lowercase hex SHA-256 of raw bytes.
pub fn hash_bytes(bytes: &[u8]) -> String {
    format!("{:x}", Sha256::digest(bytes))
}

pub fn hash_text(input: &str) -> String {
    hash_bytes(input.as_bytes())
}
