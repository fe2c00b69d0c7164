//! Capability traits for the primitives key derivation is built on
//!
//! The derivation core never implements a hash compression function or curve
//! group law itself. It calls through these two traits, so a backend can be
//! swapped, or replaced by an instrumented one in tests, without touching the
//! derivation logic.
//!
//! Both traits use associated functions rather than `&self` methods: a
//! backend carries no state, and the scheme type is parameterised over the
//! backend types directly.

/// A hash function with a 512-bit digest
///
/// # Security Requirements
///
/// - Must be deterministic
/// - Must produce the full 64-byte digest (no truncation)
/// - Must write only into `out`; the digest of a seed is secret material
pub trait Hash512 {
    /// Short name used in diagnostics
    const NAME: &'static str;

    /// Hash `input` and write the 64-byte digest into `out`
    fn hash_into(input: &[u8], out: &mut [u8; 64]);
}

/// Fixed-base scalar multiplication and point encoding on the Edwards curve
///
/// # Security Requirements
///
/// - `scalar_mult_base` must run in constant time with respect to `scalar`
/// - `encode` must produce the canonical 32-byte compressed encoding
pub trait EdwardsBasepoint {
    /// Short name used in diagnostics
    const NAME: &'static str;

    /// Curve point in whatever internal coordinates the backend prefers
    type Point;

    /// Compute `scalar · B` where `scalar` is a 32-byte little-endian integer
    /// and `B` is the curve's fixed base point
    fn scalar_mult_base(scalar: &[u8; 32]) -> Self::Point;

    /// Compress `point` into its canonical 32-byte encoding
    fn encode(point: &Self::Point) -> [u8; 32];
}
