//! Trait definitions for the edkeys library

pub mod backend;
pub mod derive;

#[cfg(any(feature = "std", feature = "alloc"))]
pub mod serialize;

pub use backend::{EdwardsBasepoint, Hash512};
pub use derive::KeyDerivation;

#[cfg(any(feature = "std", feature = "alloc"))]
pub use serialize::{Serialize, SerializeSecret};
