use edkeys::prelude::*;

#[test]
fn test_public_key_json_round_trip() {
    let (public_key, _) = create_keypair(&Ed25519Seed::new([0x11; 32]));

    let json = serde_json::to_string(&public_key).unwrap();
    let decoded: Ed25519PublicKey = serde_json::from_str(&json).unwrap();

    assert_eq!(decoded, public_key);
}

#[test]
fn test_public_key_json_rejects_short_array() {
    let json = serde_json::to_string(&[0u8; 31]).unwrap();
    assert!(serde_json::from_str::<Ed25519PublicKey>(&json).is_err());
}
