use sha2::{Digest, Sha256};

/// Lowercase hex SHA-256 of `input`'s UTF-8 bytes.
///
/// Content keys are derived with this, and so are user tokens (from the
/// registration name), although the service treats tokens as opaque.
pub fn sha256_hex(input: &str) -> String {
    hex::encode(Sha256::digest(input.as_bytes()))
}
