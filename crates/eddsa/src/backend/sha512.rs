use edkeys_api::Hash512;
use sha2::digest::generic_array::GenericArray;
use sha2::{Digest, Sha512};

/// SHA-512 (FIPS 180-4), the hash Ed25519 is specified with
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha512Hash;

impl Hash512 for Sha512Hash {
    const NAME: &'static str = "SHA-512";

    fn hash_into(input: &[u8], out: &mut [u8; 64]) {
        let mut hasher = Sha512::new();
        hasher.update(input);
        hasher.finalize_into(GenericArray::from_mut_slice(&mut out[..]));
    }
}
