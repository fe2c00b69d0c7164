use criterion::{black_box, criterion_group, criterion_main, Criterion};
use edkeys::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn bench_ed25519_keys(c: &mut Criterion) {
    let mut group = c.benchmark_group("Ed25519");

    let seed = Ed25519Seed::new([42u8; 32]);
    let secret_key = expand(&seed);

    group.bench_function("expand", |b| {
        b.iter(|| expand(black_box(&seed)));
    });

    group.bench_function("derive_public", |b| {
        b.iter(|| derive_public(black_box(&secret_key)));
    });

    group.bench_function("create_keypair", |b| {
        b.iter(|| create_keypair(black_box(&seed)));
    });

    let mut rng = ChaCha20Rng::from_seed([42u8; 32]);
    group.bench_function("keypair", |b| {
        b.iter(|| Ed25519::keypair(&mut rng));
    });

    group.finish();
}

criterion_group!(benches, bench_ed25519_keys);
criterion_main!(benches);
