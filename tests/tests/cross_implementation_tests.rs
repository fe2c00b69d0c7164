//! Agreement with the `ed25519-dalek` implementation of RFC 8032

use ed25519_dalek::SigningKey;
use edkeys::prelude::*;
use edkeys_tests::vectors::rfc8032::ED25519_KEY_VECTORS;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn dalek_public_key(seed: &[u8; 32]) -> [u8; 32] {
    SigningKey::from_bytes(seed).verifying_key().to_bytes()
}

#[test]
fn test_vectors_match_ed25519_dalek() {
    for kat in ED25519_KEY_VECTORS {
        let seed = edkeys_tests::seed_from_hex(kat.seed);
        let (public_key, _) = create_keypair(&seed);
        assert_eq!(public_key.to_bytes(), dalek_public_key(seed.as_bytes()), "{}", kat.name);
    }
}

#[test]
fn test_generated_keypairs_match_ed25519_dalek() {
    let mut rng = ChaCha20Rng::from_seed([9u8; 32]);
    let mut seed_rng = ChaCha20Rng::from_seed([9u8; 32]);

    for _ in 0..16 {
        let pair = Ed25519::keypair(&mut rng).unwrap();
        let seed = Ed25519Seed::generate(&mut seed_rng).unwrap();
        assert_eq!(
            pair.public_key().to_bytes(),
            dalek_public_key(seed.as_bytes())
        );
    }
}

proptest! {
    #[test]
    fn prop_public_key_matches_ed25519_dalek(seed in any::<[u8; 32]>()) {
        let (public_key, _) = create_keypair(&Ed25519Seed::new(seed));
        prop_assert_eq!(public_key.to_bytes(), dalek_public_key(&seed));
    }
}
