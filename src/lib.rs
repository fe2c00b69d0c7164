//! # edkeys
//!
//! Ed25519 key derivation: a 32-byte seed becomes a clamped 64-byte expanded
//! secret key and the matching 32-byte public key.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! edkeys = "0.3"
//! ```
//!
//! ## Features
//!
//! - `std` (default): Standard library support
//! - `alloc`: Byte-vector serialization without `std`
//! - `serde`: serde support for public keys
//! - `trace`: `tracing` events on key generation
//! - `getrandom`: Pulls in `rand` with an OS entropy source
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`edkeys-api`]: Error type and backend traits
//! - [`edkeys-common`]: Zeroizing secret containers
//! - [`edkeys-internal`]: Constant-time helpers
//! - [`edkeys-eddsa`]: Ed25519 expansion, derivation and key types

#![cfg_attr(not(feature = "std"), no_std)]

pub use edkeys_api as api;
pub use edkeys_common as common;
pub use edkeys_eddsa as eddsa;
pub use edkeys_internal as internal;

/// `rand` with OS entropy enabled, for [`Ed25519::keypair`](eddsa::Ed25519)
#[cfg(feature = "getrandom")]
pub use rand;

/// Common imports for edkeys users
pub mod prelude {
    pub use crate::api::{Error, Result, ResultExt};

    pub use crate::api::{EdwardsBasepoint, Hash512, KeyDerivation};

    #[cfg(any(feature = "std", feature = "alloc"))]
    pub use crate::api::{Serialize, SerializeSecret};

    pub use crate::common::{SecretBuffer, ZeroizeGuard};

    pub use crate::eddsa::{
        create_keypair, derive_public, expand, Ed25519, Ed25519ExpandedSecretKey, Ed25519KeyPair,
        Ed25519PublicKey, Ed25519Seed,
    };
}
