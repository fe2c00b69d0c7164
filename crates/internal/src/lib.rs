//! Internal utilities for the edkeys library
//!
//! Nothing in this crate is part of the public API contract; it exists so the
//! key types in the other crates can share constant-time helpers.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod constant_time;

pub use constant_time::{ct_bits_match, ct_eq, ct_eq_choice};
