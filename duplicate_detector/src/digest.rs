use sha2::{Digest, Sha256};

/// Calculates the SHA256 hash of the content as lowercase hex
pub fn sha256_hex(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    format!("{:x}", hasher.finalize())
}
