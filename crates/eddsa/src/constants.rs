//! Sizes and clamping masks for Ed25519 key material

/// Size of an Ed25519 seed in bytes
pub const ED25519_SEED_SIZE: usize = 32;

/// Size of the clamped scalar half of an expanded secret key
pub const ED25519_SCALAR_SIZE: usize = 32;

/// Size of the nonce-prefix half of an expanded secret key
pub const ED25519_PREFIX_SIZE: usize = 32;

/// Size of an expanded secret key (clamped scalar || nonce prefix)
pub const ED25519_EXPANDED_SECRET_KEY_SIZE: usize = ED25519_SCALAR_SIZE + ED25519_PREFIX_SIZE;

/// Size of a compressed Ed25519 public key in bytes
pub const ED25519_PUBLIC_KEY_SIZE: usize = 32;

/// Size of a SHA-512 digest; must cover the whole expanded key
pub const HASH512_OUTPUT_SIZE: usize = 64;

/// Applied to byte 0: clears bits 0..=2 so the scalar is a multiple of the cofactor 8
pub(crate) const CLAMP_LOW_MASK: u8 = 0b1111_1000;

/// Applied to byte 31: clears bits 254 and 255
pub(crate) const CLAMP_HIGH_MASK: u8 = 0b0011_1111;

/// OR-ed into byte 31: sets bit 254
pub(crate) const CLAMP_HIGH_BIT: u8 = 0b0100_0000;

/// The two top bits of byte 31 as they must read after clamping
pub(crate) const CLAMP_TOP_BITS: u8 = 0b1100_0000;

const _: () = assert!(HASH512_OUTPUT_SIZE == ED25519_EXPANDED_SECRET_KEY_SIZE);
