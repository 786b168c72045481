use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::RngCore;

use hashreg::{build_registry, computed_verify, hashes, Endianness, SeedMode};

fn benchmark_verification(c: &mut Criterion) {
    let registry = build_registry(hashes::BUILTIN).unwrap();
    let mut group = c.benchmark_group("verification");

    for d in registry.find_all_hashes().iter().filter(|d| !d.is_mock()) {
        group.bench_function(d.name(), |b| {
            b.iter(|| black_box(computed_verify(d, Endianness::Little).unwrap()));
        });
    }

    group.finish();
}

fn benchmark_hashing(c: &mut Criterion) {
    let registry = build_registry(hashes::BUILTIN).unwrap();
    let mut group = c.benchmark_group("hashing");

    for size in [16, 256, 4096, 65536].iter() {
        let mut data = vec![0u8; *size];
        rand::rng().fill_bytes(&mut data);

        group.throughput(Throughput::Bytes(*size as u64));

        for d in registry.find_all_hashes().iter().filter(|d| !d.is_mock()) {
            let seed = d.seed(0x5eed, SeedMode::Forced);
            let mut out = vec![0u8; d.hash_bytes()];
            d.init();
            group.bench_with_input(BenchmarkId::new(d.name(), size), &data, |b, data| {
                b.iter(|| {
                    d.hash(data, &seed, Endianness::Native, &mut out);
                    black_box(&out);
                });
            });
        }
    }

    group.finish();
}

criterion_group!(benches, benchmark_verification, benchmark_hashing);
criterion_main!(benches);
