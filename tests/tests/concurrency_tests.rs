use edkeys::prelude::*;
use std::sync::Arc;
use std::thread;

fn seed_for(i: u8) -> Ed25519Seed {
    let mut bytes = [0u8; 32];
    bytes[0] = i;
    bytes[31] = i.wrapping_mul(31);
    Ed25519Seed::new(bytes)
}

#[test]
fn test_parallel_derivation_matches_sequential() {
    let expected: Arc<Vec<Ed25519PublicKey>> =
        Arc::new((0..32u8).map(|i| create_keypair(&seed_for(i)).0).collect());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let expected = Arc::clone(&expected);
            thread::spawn(move || {
                for i in 0..32u8 {
                    let (public_key, secret_key) = create_keypair(&seed_for(i));
                    assert_eq!(public_key, expected[i as usize]);
                    assert_eq!(derive_public(&secret_key), public_key);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_keypair_moves_across_threads() {
    let pair = Ed25519::keypair_from_seed(&seed_for(7));
    let expected = *pair.public_key();

    let rederived = thread::spawn(move || derive_public(pair.secret_key()))
        .join()
        .unwrap();

    assert_eq!(rederived, expected);
}
