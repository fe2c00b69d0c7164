//! RFC 8032 §7.1 Ed25519 test vectors (key generation part only)

/// Known-answer test vector for Ed25519 key derivation
#[derive(Debug)]
pub struct Ed25519KeyKat {
    /// Name of the test in RFC 8032
    pub name: &'static str,
    /// 32-byte secret seed, hex
    pub seed: &'static str,
    /// Expected 32-byte public key, hex
    pub public_key: &'static str,
}

/// RFC 8032 §7.1 vectors
pub const ED25519_KEY_VECTORS: &[Ed25519KeyKat] = &[
    Ed25519KeyKat {
        name: "TEST 1",
        seed: "9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60",
        public_key: "d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a",
    },
    Ed25519KeyKat {
        name: "TEST 2",
        seed: "4ccd089b28ff96da9db6c346ec114e0f5b8a319f35aba624da8cf6ed4fb8a6fb",
        public_key: "3d4017c3e843895a92b70aa74d1b7ebc9c982ccf2ec4968cc0cd55f12af4660c",
    },
    Ed25519KeyKat {
        name: "TEST 3",
        seed: "c5aa8df43f9f837bedb7442f31dcb7b166d38535076f094b85ce3a2e0b4458f7",
        public_key: "fc51cd8e6218a1a38da47ed00230f0580816ed13ba3303ac5deb911548908025",
    },
];
