//! Public key derivation: expanded secret key → compressed point

use crate::keys::{Ed25519ExpandedSecretKey, Ed25519PublicKey};
use edkeys_api::EdwardsBasepoint;

/// Derive the public key for `secret_key` with the group backend `G`
///
/// Only the scalar half is read. It is trusted to be clamped, which every
/// constructor of [`Ed25519ExpandedSecretKey`] guarantees, so it is not
/// checked again here.
pub fn derive_public_with<G: EdwardsBasepoint>(
    secret_key: &Ed25519ExpandedSecretKey,
) -> Ed25519PublicKey {
    let point = G::scalar_mult_base(secret_key.scalar_bytes());
    Ed25519PublicKey::new(G::encode(&point))
}
