//! Security primitives and memory safety utilities
//!
//! This module provides foundational security types used throughout edkeys to
//! ensure seeds and expanded secret keys are wiped when they go out of scope.

pub mod secret;

// Re-export core security types
pub use secret::{SecretBuffer, ZeroizeGuard};
