//! The Ed25519 key-derivation scheme, generic over its backends

use crate::backend::{DalekBackend, Sha512Hash};
use crate::constants::{
    ED25519_EXPANDED_SECRET_KEY_SIZE, ED25519_PUBLIC_KEY_SIZE, ED25519_SEED_SIZE,
};
use crate::derive::derive_public_with;
use crate::expand::expand_with;
use crate::keys::{Ed25519ExpandedSecretKey, Ed25519KeyPair, Ed25519PublicKey, Ed25519Seed};
use core::marker::PhantomData;
use edkeys_api::{EdwardsBasepoint, Hash512, KeyDerivation, Result};
use rand::{CryptoRng, RngCore};

/// Ed25519 key derivation over hash backend `H` and group backend `G`
///
/// This is a zero-sized marker; all operations are associated functions.
/// Use the [`Ed25519`] alias unless you are substituting a backend.
pub struct Ed25519Derivation<H = Sha512Hash, G = DalekBackend> {
    _backends: PhantomData<(H, G)>,
}

/// Ed25519 with SHA-512 from `sha2` and curve arithmetic from `curve25519-dalek`
pub type Ed25519 = Ed25519Derivation<Sha512Hash, DalekBackend>;

impl<H: Hash512, G: EdwardsBasepoint> KeyDerivation for Ed25519Derivation<H, G> {
    type Seed = Ed25519Seed;
    type ExpandedSecretKey = Ed25519ExpandedSecretKey;
    type PublicKey = Ed25519PublicKey;

    const SEED_SIZE: usize = ED25519_SEED_SIZE;
    const EXPANDED_SECRET_KEY_SIZE: usize = ED25519_EXPANDED_SECRET_KEY_SIZE;
    const PUBLIC_KEY_SIZE: usize = ED25519_PUBLIC_KEY_SIZE;

    fn name() -> &'static str {
        "Ed25519"
    }

    fn expand(seed: &Ed25519Seed) -> Ed25519ExpandedSecretKey {
        expand_with::<H>(seed)
    }

    fn derive_public(secret_key: &Ed25519ExpandedSecretKey) -> Ed25519PublicKey {
        derive_public_with::<G>(secret_key)
    }

    fn create_keypair(seed: &Ed25519Seed) -> (Ed25519PublicKey, Ed25519ExpandedSecretKey) {
        let secret_key = Self::expand(seed);
        let public_key = Self::derive_public(&secret_key);

        #[cfg(feature = "trace")]
        tracing::trace!(
            scheme = Self::name(),
            hash = H::NAME,
            group = G::NAME,
            public_key = ?public_key,
            "derived key pair from seed"
        );

        (public_key, secret_key)
    }
}

impl<H: Hash512, G: EdwardsBasepoint> Ed25519Derivation<H, G> {
    /// Generate a key pair from a fresh seed drawn from `rng`
    ///
    /// The seed is wiped before this returns; only the expanded key survives.
    ///
    /// # Errors
    ///
    /// [`edkeys_api::Error::RandomGenerationError`] if the RNG fails.
    pub fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Ed25519KeyPair> {
        let seed = Ed25519Seed::generate(rng);

        #[cfg(feature = "trace")]
        if let Err(e) = &seed {
            tracing::debug!(scheme = Self::name(), error = %e, "seed generation failed");
        }

        Ok(Self::keypair_from_seed(&seed?))
    }

    /// Expand `seed` and derive its public key, as a pair
    pub fn keypair_from_seed(seed: &Ed25519Seed) -> Ed25519KeyPair {
        let (public_key, secret_key) = Self::create_keypair(seed);
        Ed25519KeyPair::new(public_key, secret_key)
    }

    /// Rebuild a pair around a persisted expanded secret key
    ///
    /// The seed is not needed and nothing is re-hashed; only the public key is
    /// recomputed.
    pub fn keypair_from_expanded(secret_key: Ed25519ExpandedSecretKey) -> Ed25519KeyPair {
        let public_key = Self::derive_public(&secret_key);

        #[cfg(feature = "trace")]
        tracing::trace!(
            scheme = Self::name(),
            group = G::NAME,
            public_key = ?public_key,
            "re-derived public key from expanded secret key"
        );

        Ed25519KeyPair::new(public_key, secret_key)
    }
}

/// Expand a seed into the 64-byte secret key representation
pub fn expand(seed: &Ed25519Seed) -> Ed25519ExpandedSecretKey {
    Ed25519::expand(seed)
}

/// Derive the public key of an expanded secret key
pub fn derive_public(secret_key: &Ed25519ExpandedSecretKey) -> Ed25519PublicKey {
    Ed25519::derive_public(secret_key)
}

/// Expand `seed` and derive its public key
pub fn create_keypair(seed: &Ed25519Seed) -> (Ed25519PublicKey, Ed25519ExpandedSecretKey) {
    Ed25519::create_keypair(seed)
}

impl Ed25519KeyPair {
    /// Derive a pair from `seed` with the default backends
    pub fn from_seed(seed: &Ed25519Seed) -> Self {
        Ed25519::keypair_from_seed(seed)
    }

    /// Rebuild a pair around a persisted expanded secret key with the default backends
    pub fn from_expanded(secret_key: Ed25519ExpandedSecretKey) -> Self {
        Ed25519::keypair_from_expanded(secret_key)
    }
}
