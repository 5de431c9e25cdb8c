//! Cryptographic Utilities

use rand::Rng;
use sha2::{Digest, Sha256};

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Compute SHA-256 hash
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Random lowercase base36 string from the thread-local CSPRNG
pub fn random_base36(len: usize) -> String {
    let mut rng = rand::rng();
    (0..len)
        .map(|_| BASE36[rng.random_range(0..BASE36.len())] as char)
        .collect()
}

/// Constant-time comparison to prevent timing attacks
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut result = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        result |= x ^ y;
    }
    result == 0
}

/// Exact equality of two secrets without leaking their length
///
/// Both sides are hashed first so the comparison always runs over 32 bytes.
pub fn secret_eq(provided: &str, expected: &str) -> bool {
    constant_time_eq(&sha256(provided.as_bytes()), &sha256(expected.as_bytes()))
}
