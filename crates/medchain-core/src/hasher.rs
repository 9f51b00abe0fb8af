//! SHA-256 hashing with lowercase hex output.

use sha2::{Digest, Sha256};

/// Hash a payload and return the lowercase hex digest (64 characters).
pub fn digest(payload: &[u8]) -> String {
    hex::encode(Sha256::digest(payload))
}

/// Check whether `s` looks like a digest produced by [`digest`].
pub fn is_hex_digest(s: &str) -> bool {
    s.len() == 64 && s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}
