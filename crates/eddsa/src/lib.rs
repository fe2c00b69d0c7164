//! Ed25519 key derivation
//!
//! This crate turns a 32-byte seed into an Ed25519 key pair:
//!
//! 1. **Expansion**: `SHA-512(seed)` is clamped into a 64-byte
//!    [`Ed25519ExpandedSecretKey`] (secret scalar || nonce prefix).
//! 2. **Derivation**: the scalar is multiplied with the base point and the
//!    result compressed into a 32-byte [`Ed25519PublicKey`].
//!
//! The expanded key is meant to be stored in place of the seed, so a signer
//! never has to hash the seed again. Signing and verification themselves are
//! not part of this crate.
//!
//! # Example
//!
//! ```
//! use edkeys_eddsa::{create_keypair, derive_public, Ed25519Seed};
//!
//! let seed = Ed25519Seed::new([7u8; 32]);
//! let (public_key, secret_key) = create_keypair(&seed);
//!
//! assert_eq!(public_key.as_bytes().len(), 32);
//! assert_eq!(secret_key.as_bytes().len(), 64);
//! assert_eq!(derive_public(&secret_key), public_key);
//! ```
//!
//! # Backends
//!
//! Hashing and curve arithmetic are reached through the
//! [`Hash512`](edkeys_api::Hash512) and
//! [`EdwardsBasepoint`](edkeys_api::EdwardsBasepoint) traits.
//! [`Ed25519`] fixes them to [`Sha512Hash`] and [`DalekBackend`];
//! [`Ed25519Derivation`] accepts any other pair.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod backend;
pub mod constants;
mod derive;
mod expand;
mod keys;
mod scheme;

pub use backend::{DalekBackend, Sha512Hash};
pub use constants::{
    ED25519_EXPANDED_SECRET_KEY_SIZE, ED25519_PREFIX_SIZE, ED25519_PUBLIC_KEY_SIZE,
    ED25519_SCALAR_SIZE, ED25519_SEED_SIZE,
};
pub use derive::derive_public_with;
pub use expand::{clamp, expand_with, is_clamped};
pub use keys::{Ed25519ExpandedSecretKey, Ed25519KeyPair, Ed25519PublicKey, Ed25519Seed};
pub use scheme::{create_keypair, derive_public, expand, Ed25519, Ed25519Derivation};
