//! Common implementations and shared functionality for the edkeys library
//!
//! This crate provides the zeroizing containers every key type in edkeys is
//! built on.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod security;

// Re-export core security types
pub use security::{SecretBuffer, ZeroizeGuard};
