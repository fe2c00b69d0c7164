//! Public API traits and types for the edkeys library
//!
//! This crate provides the public API surface for the edkeys ecosystem: the
//! error type shared by every crate, the capability traits the key-derivation
//! core calls through, and the byte serialization traits for key material.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};

pub use traits::{EdwardsBasepoint, Hash512, KeyDerivation};

#[cfg(any(feature = "std", feature = "alloc"))]
pub use traits::{Serialize, SerializeSecret};
