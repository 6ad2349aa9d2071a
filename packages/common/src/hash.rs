//! Keccak256 hashing and 32-byte hex helpers.

use tiny_keccak::{Hasher, Keccak};

/// The all-zero 32-byte commitment. Rejected wherever a real commitment
/// or hash lock is required.
pub const ZERO_BYTES32: [u8; 32] = [0u8; 32];

/// Compute keccak256 hash of arbitrary data.
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// Convert a 32-byte hash to a 0x-prefixed hex string (for attributes).
pub fn bytes32_to_hex(bytes: &[u8; 32]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Parse a hex string (with or without 0x prefix) into a 32-byte array.
pub fn hex_to_bytes32(s: &str) -> Result<[u8; 32], &'static str> {
    let s = s.strip_prefix("0x").unwrap_or(s);
    let bytes = hex::decode(s).map_err(|_| "Invalid hex character")?;
    bytes
        .try_into()
        .map_err(|_| "Invalid hex length: expected 64 characters")
}
