//! Scalar expansion: seed → clamped 64-byte secret key
//!
//! ```text
//! digest      = H(seed)                  64 bytes
//! digest[0]  &= 0b1111_1000              multiple of the cofactor
//! digest[31] &= 0b0011_1111              below 2^254 before the next step
//! digest[31] |= 0b0100_0000              fixed top bit at position 254
//! ```
//!
//! Bytes 32..64 of the digest pass through untouched and become the nonce
//! prefix of the expanded key.

use crate::constants::{
    CLAMP_HIGH_BIT, CLAMP_HIGH_MASK, CLAMP_LOW_MASK, CLAMP_TOP_BITS,
    ED25519_EXPANDED_SECRET_KEY_SIZE, ED25519_SCALAR_SIZE,
};
use crate::keys::{Ed25519ExpandedSecretKey, Ed25519Seed};
use edkeys_api::Hash512;
use edkeys_common::SecretBuffer;
use edkeys_internal::constant_time::ct_bits_match;
use subtle::Choice;

/// Clamp the scalar half of an expanded key buffer in place
pub fn clamp(buffer: &mut [u8; ED25519_EXPANDED_SECRET_KEY_SIZE]) {
    buffer[0] &= CLAMP_LOW_MASK;
    buffer[31] &= CLAMP_HIGH_MASK;
    buffer[31] |= CLAMP_HIGH_BIT;
}

/// Whether `scalar` satisfies the clamping invariant, in constant time
pub fn is_clamped(scalar: &[u8; ED25519_SCALAR_SIZE]) -> Choice {
    ct_bits_match(scalar[0], !CLAMP_LOW_MASK, 0)
        & ct_bits_match(scalar[31], CLAMP_TOP_BITS, CLAMP_HIGH_BIT)
}

/// Expand `seed` with the hash backend `H`
///
/// The digest is written straight into the zeroizing buffer that becomes the
/// key, so no unprotected copy of it is left on the stack.
pub fn expand_with<H: Hash512>(seed: &Ed25519Seed) -> Ed25519ExpandedSecretKey {
    let mut buffer = SecretBuffer::<ED25519_EXPANDED_SECRET_KEY_SIZE>::zeroed();
    H::hash_into(seed.as_bytes(), &mut buffer);
    clamp(&mut buffer);
    Ed25519ExpandedSecretKey::from_clamped(buffer)
}
