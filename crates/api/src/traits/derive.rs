//! Deterministic key-pair derivation trait

use zeroize::Zeroize;

/// Core trait for schemes that derive a key pair from a fixed-size seed
///
/// Derivation is split in two so that an already-expanded secret key can be
/// persisted and its public key re-derived later without hashing the seed
/// again.
///
/// # Type Safety
///
/// The seed and the expanded secret key are distinct types. An expanded key
/// can never be passed where a seed is expected, which rules out expanding the
/// same material twice.
pub trait KeyDerivation {
    /// Seed type (caller-supplied randomness)
    type Seed: Zeroize;

    /// Expanded secret key type; must be zeroizable
    type ExpandedSecretKey: Zeroize;

    /// Public key type
    type PublicKey: Clone;

    /// Size of a seed in bytes
    const SEED_SIZE: usize;

    /// Size of an expanded secret key in bytes
    const EXPANDED_SECRET_KEY_SIZE: usize;

    /// Size of a public key in bytes
    const PUBLIC_KEY_SIZE: usize;

    /// Returns the name of this scheme
    fn name() -> &'static str;

    /// Expand a seed into the secret key representation used for signing
    fn expand(seed: &Self::Seed) -> Self::ExpandedSecretKey;

    /// Derive the public key belonging to an expanded secret key
    fn derive_public(secret_key: &Self::ExpandedSecretKey) -> Self::PublicKey;

    /// Expand `seed` and derive its public key
    fn create_keypair(seed: &Self::Seed) -> (Self::PublicKey, Self::ExpandedSecretKey) {
        let secret_key = Self::expand(seed);
        let public_key = Self::derive_public(&secret_key);
        (public_key, secret_key)
    }
}
