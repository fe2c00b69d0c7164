//! Testing utilities and benchmarks for the edkeys library

pub mod vectors;

use edkeys_eddsa::Ed25519Seed;

/// Decode a hex string that is known to be valid
///
/// # Panics
///
/// Panics on malformed hex; only for use with the constant vectors in this crate.
pub fn decode_hex(hex_str: &str) -> Vec<u8> {
    hex::decode(hex_str).unwrap_or_else(|e| panic!("bad test vector {:?}: {}", hex_str, e))
}

/// Build a seed from a hex test vector
pub fn seed_from_hex(hex_str: &str) -> Ed25519Seed {
    Ed25519Seed::from_slice(&decode_hex(hex_str))
        .unwrap_or_else(|e| panic!("bad seed vector {:?}: {}", hex_str, e))
}
