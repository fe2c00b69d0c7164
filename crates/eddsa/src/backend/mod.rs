//! Production backends for the hash and group capabilities
//!
//! - [`Sha512Hash`]: SHA-512 from the `sha2` crate
//! - [`DalekBackend`]: fixed-base multiplication and compression from
//!   `curve25519-dalek`, both constant time

mod dalek;
mod sha512;

pub use dalek::DalekBackend;
pub use sha512::Sha512Hash;
