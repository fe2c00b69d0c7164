use curve25519_dalek::{EdwardsPoint, Scalar};
use edkeys_api::EdwardsBasepoint;
use edkeys_common::ZeroizeGuard;

/// Edwards25519 arithmetic from `curve25519-dalek`
#[derive(Debug, Clone, Copy, Default)]
pub struct DalekBackend;

impl EdwardsBasepoint for DalekBackend {
    const NAME: &'static str = "curve25519-dalek";

    type Point = EdwardsPoint;

    fn scalar_mult_base(scalar: &[u8; 32]) -> EdwardsPoint {
        // A clamped scalar lies in [2^254, 2^255), above the group order ℓ.
        // B has order ℓ, so reducing mod ℓ first leaves scalar · B unchanged.
        let mut reduced = Scalar::from_bytes_mod_order(*scalar);
        let reduced = ZeroizeGuard::new(&mut reduced);
        EdwardsPoint::mul_base(&reduced)
    }

    fn encode(point: &EdwardsPoint) -> [u8; 32] {
        point.compress().to_bytes()
    }
}
