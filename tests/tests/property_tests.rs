use edkeys::prelude::*;
use edkeys_eddsa::is_clamped;
use proptest::prelude::*;
use sha2::{Digest, Sha512};

proptest! {
    #[test]
    fn prop_derivation_is_deterministic(seed in any::<[u8; 32]>()) {
        let (pk1, sk1) = create_keypair(&Ed25519Seed::new(seed));
        let (pk2, sk2) = create_keypair(&Ed25519Seed::new(seed));
        prop_assert_eq!(pk1, pk2);
        prop_assert!(sk1 == sk2);
    }

    #[test]
    fn prop_scalar_is_clamped(seed in any::<[u8; 32]>()) {
        let secret_key = expand(&Ed25519Seed::new(seed));
        let scalar = secret_key.scalar_bytes();
        prop_assert_eq!(scalar[0] & 0b0000_0111, 0);
        prop_assert_eq!(scalar[31] & 0b1000_0000, 0);
        prop_assert_eq!(scalar[31] & 0b0100_0000, 0b0100_0000);
        prop_assert!(bool::from(is_clamped(scalar)));
    }

    #[test]
    fn prop_expansion_only_touches_clamped_bits(seed in any::<[u8; 32]>()) {
        let digest = Sha512::digest(seed);
        let secret_key = expand(&Ed25519Seed::new(seed));
        let bytes = secret_key.as_bytes();

        prop_assert_eq!(bytes[0], digest[0] & 0b1111_1000);
        prop_assert_eq!(&bytes[1..31], &digest[1..31]);
        prop_assert_eq!(bytes[31], (digest[31] & 0b0011_1111) | 0b0100_0000);
        prop_assert_eq!(&bytes[32..], &digest[32..]);
    }

    #[test]
    fn prop_derive_public_matches_create_keypair(seed in any::<[u8; 32]>()) {
        let seed = Ed25519Seed::new(seed);
        let (public_key, _) = create_keypair(&seed);
        prop_assert_eq!(derive_public(&expand(&seed)), public_key);
    }

    #[test]
    fn prop_persisted_key_round_trips(seed in any::<[u8; 32]>()) {
        let (public_key, secret_key) = create_keypair(&Ed25519Seed::new(seed));

        let stored = secret_key.to_bytes_zeroizing();
        prop_assert_eq!(stored.len(), 64);
        let restored = Ed25519ExpandedSecretKey::from_bytes(&stored).unwrap();
        prop_assert!(restored == secret_key);

        let stored_public = Serialize::to_bytes(&public_key);
        prop_assert_eq!(stored_public.len(), 32);
        prop_assert_eq!(Ed25519PublicKey::from_bytes(&stored_public).unwrap(), public_key);
    }

    #[test]
    fn prop_unclamped_scalar_is_rejected(
        seed in any::<[u8; 32]>(),
        low in 1u8..8,
    ) {
        let mut stored = expand(&Ed25519Seed::new(seed)).as_bytes().to_vec();
        stored[0] |= low;

        let err = Ed25519ExpandedSecretKey::from_bytes(&stored).unwrap_err();
        prop_assert!(matches!(err, Error::InvalidKey { .. }), "unexpected error: {:?}", err);
    }

    #[test]
    fn prop_distinct_seeds_give_distinct_keys(
        a in any::<[u8; 32]>(),
        b in any::<[u8; 32]>(),
    ) {
        prop_assume!(a != b);
        let (pk_a, _) = create_keypair(&Ed25519Seed::new(a));
        let (pk_b, _) = create_keypair(&Ed25519Seed::new(b));
        prop_assert_ne!(pk_a, pk_b);
    }
}
