//! Ed25519 key material types
//!
//! The seed and the expanded secret key are separate types on purpose. A seed
//! is hashed exactly once, by [`expand`](fn@crate::expand); the resulting
//! expanded key is what gets persisted and later handed to a signer.

use crate::constants::{
    ED25519_EXPANDED_SECRET_KEY_SIZE, ED25519_PREFIX_SIZE, ED25519_PUBLIC_KEY_SIZE,
    ED25519_SCALAR_SIZE, ED25519_SEED_SIZE,
};
use crate::expand::is_clamped;
use arrayref::array_refs;
use core::fmt;
use core::hash::{Hash, Hasher};
use edkeys_api::{Error, Result};
use edkeys_common::SecretBuffer;
use edkeys_internal::constant_time::ct_eq;
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

#[cfg(any(feature = "std", feature = "alloc"))]
use edkeys_api::{Serialize, SerializeSecret};
#[cfg(any(feature = "std", feature = "alloc"))]
use zeroize::Zeroizing;

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;

/// 32 bytes of caller-supplied randomness; the sole input to key derivation
#[derive(Debug, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Ed25519Seed(SecretBuffer<ED25519_SEED_SIZE>);

impl Ed25519Seed {
    /// Wrap a 32-byte seed
    pub fn new(bytes: [u8; ED25519_SEED_SIZE]) -> Self {
        Self(SecretBuffer::new(bytes))
    }

    /// Copy a seed out of a slice, failing fast unless it is exactly 32 bytes
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        SecretBuffer::from_slice(bytes)
            .map(Self)
            .map_err(|e| e.with_context("Ed25519Seed::from_slice"))
    }

    /// Draw a fresh seed from a cryptographically secure RNG
    pub fn generate<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self> {
        let mut buffer = SecretBuffer::<ED25519_SEED_SIZE>::zeroed();
        rng.try_fill_bytes(buffer.as_mut_slice()).map_err(|e| {
            #[cfg(not(feature = "std"))]
            let _ = e;
            Error::RandomGenerationError {
                context: "Ed25519Seed::generate",
                #[cfg(feature = "std")]
                message: e.to_string(),
            }
        })?;
        Ok(Self(buffer))
    }

    /// Borrow the raw seed bytes
    pub fn as_bytes(&self) -> &[u8; ED25519_SEED_SIZE] {
        &self.0
    }
}

impl From<[u8; ED25519_SEED_SIZE]> for Ed25519Seed {
    fn from(bytes: [u8; ED25519_SEED_SIZE]) -> Self {
        Self::new(bytes)
    }
}

/// Expanded Ed25519 secret key: `clamp(H(seed)[0..32]) || H(seed)[32..64]`
///
/// Bytes 0..32 hold the clamped secret scalar, bytes 32..64 the prefix a
/// signer hashes together with the message to derive its nonce. Unlike
/// RFC 8032, which keeps the 32-byte seed and re-hashes it for every
/// signature, this representation is computed once and kept, saving one
/// SHA-512 invocation per signature for 32 extra bytes of storage.
///
/// # Invariant
///
/// The scalar half is always clamped: bits 0..=2 of byte 0 are clear, bit 7
/// of byte 31 is clear and bit 6 of byte 31 is set. Every constructor
/// upholds this; [`from_slice`](Self::from_slice) rejects keys that do not.
/// Calling [`Zeroize::zeroize`] breaks it: a wiped key holds the scalar 0
/// and must not be passed to a signer or to `derive_public` again.
///
/// # Security Note
///
/// The type is neither `Copy` nor `Clone`, wipes itself on drop and never
/// prints its contents.
#[derive(PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Ed25519ExpandedSecretKey(SecretBuffer<ED25519_EXPANDED_SECRET_KEY_SIZE>);

impl Ed25519ExpandedSecretKey {
    /// Takes ownership of a buffer the caller has already clamped
    pub(crate) fn from_clamped(buffer: SecretBuffer<ED25519_EXPANDED_SECRET_KEY_SIZE>) -> Self {
        debug_assert!(bool::from(is_clamped(
            array_refs![&*buffer, ED25519_SCALAR_SIZE, ED25519_PREFIX_SIZE].0
        )));
        Self(buffer)
    }

    /// Import a persisted expanded secret key
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidLength`] unless `bytes` is exactly 64 bytes long
    /// - [`Error::InvalidKey`] if the scalar half is not clamped
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let buffer = SecretBuffer::<ED25519_EXPANDED_SECRET_KEY_SIZE>::from_slice(bytes)
            .map_err(|e| e.with_context("Ed25519ExpandedSecretKey::from_slice"))?;

        let (scalar, _) = array_refs![&*buffer, ED25519_SCALAR_SIZE, ED25519_PREFIX_SIZE];
        if !bool::from(is_clamped(scalar)) {
            return Err(Error::InvalidKey {
                context: "Ed25519ExpandedSecretKey::from_slice",
                #[cfg(feature = "std")]
                message: "secret scalar is not clamped".to_string(),
            });
        }

        Ok(Self(buffer))
    }

    /// The clamped secret scalar (bytes 0..32)
    pub fn scalar_bytes(&self) -> &[u8; ED25519_SCALAR_SIZE] {
        array_refs![&*self.0, ED25519_SCALAR_SIZE, ED25519_PREFIX_SIZE].0
    }

    /// The nonce-derivation prefix (bytes 32..64)
    pub fn prefix(&self) -> &[u8; ED25519_PREFIX_SIZE] {
        array_refs![&*self.0, ED25519_SCALAR_SIZE, ED25519_PREFIX_SIZE].1
    }

    /// Borrow the full 64-byte representation, e.g. to persist it
    pub fn as_bytes(&self) -> &[u8; ED25519_EXPANDED_SECRET_KEY_SIZE] {
        &self.0
    }
}

impl fmt::Debug for Ed25519ExpandedSecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Ed25519ExpandedSecretKey([REDACTED])")
    }
}

#[cfg(any(feature = "std", feature = "alloc"))]
impl SerializeSecret for Ed25519ExpandedSecretKey {
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_slice(bytes)
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.0.as_slice().to_vec())
    }
}

/// Compressed Ed25519 public key
///
/// Always equal to `Encode(scalar · B)` for the scalar of the expanded secret
/// key it was derived from.
#[derive(Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ed25519PublicKey([u8; ED25519_PUBLIC_KEY_SIZE]);

impl PartialEq for Ed25519PublicKey {
    fn eq(&self, other: &Self) -> bool {
        ct_eq(&self.0, &other.0)
    }
}

impl Eq for Ed25519PublicKey {}

impl Hash for Ed25519PublicKey {
    fn hash<S: Hasher>(&self, state: &mut S) {
        self.0.hash(state);
    }
}

impl Ed25519PublicKey {
    /// Wrap an encoded point
    ///
    /// The bytes are not decompressed or otherwise checked to be on the curve.
    pub fn new(bytes: [u8; ED25519_PUBLIC_KEY_SIZE]) -> Self {
        Self(bytes)
    }

    /// Copy a public key out of a slice, failing fast unless it is exactly 32 bytes
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != ED25519_PUBLIC_KEY_SIZE {
            return Err(Error::InvalidLength {
                context: "Ed25519PublicKey::from_slice",
                expected: ED25519_PUBLIC_KEY_SIZE,
                actual: bytes.len(),
            });
        }

        let mut key = [0u8; ED25519_PUBLIC_KEY_SIZE];
        key.copy_from_slice(bytes);
        Ok(Self(key))
    }

    /// Borrow the encoded point
    pub fn as_bytes(&self) -> &[u8; ED25519_PUBLIC_KEY_SIZE] {
        &self.0
    }

    /// Copy out the encoded point
    pub fn to_bytes(self) -> [u8; ED25519_PUBLIC_KEY_SIZE] {
        self.0
    }
}

impl From<[u8; ED25519_PUBLIC_KEY_SIZE]> for Ed25519PublicKey {
    fn from(bytes: [u8; ED25519_PUBLIC_KEY_SIZE]) -> Self {
        Self::new(bytes)
    }
}

impl AsRef<[u8]> for Ed25519PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Ed25519PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Ed25519PublicKey(")?;
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        f.write_str(")")
    }
}

#[cfg(any(feature = "std", feature = "alloc"))]
impl Serialize for Ed25519PublicKey {
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_slice(bytes)
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.0.to_vec()
    }
}

/// A public key together with the expanded secret key it was derived from
#[derive(Debug)]
pub struct Ed25519KeyPair {
    public_key: Ed25519PublicKey,
    secret_key: Ed25519ExpandedSecretKey,
}

impl Ed25519KeyPair {
    /// Pairs are only assembled by the derivation scheme, which guarantees
    /// `public_key` belongs to `secret_key`
    pub(crate) fn new(public_key: Ed25519PublicKey, secret_key: Ed25519ExpandedSecretKey) -> Self {
        Self {
            public_key,
            secret_key,
        }
    }

    /// The public half
    pub fn public_key(&self) -> &Ed25519PublicKey {
        &self.public_key
    }

    /// The expanded secret half
    pub fn secret_key(&self) -> &Ed25519ExpandedSecretKey {
        &self.secret_key
    }

    /// Split the pair, transferring ownership of the secret key to the caller
    pub fn into_parts(self) -> (Ed25519PublicKey, Ed25519ExpandedSecretKey) {
        (self.public_key, self.secret_key)
    }
}
