//! Benchmarks for the playground's hash primitives
//!
//! Throughput for the xxHash family across input sizes, plus single-shot
//! latency for password hashing at the cheapest accepted cost.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use hashlab_hashing::{Argon2Params, Hash, XxhashVariant};
use tokio::runtime::Runtime;

fn benchmark_xxhash_variants(c: &mut Criterion) {
    let mut group = c.benchmark_group("xxhash_throughput");

    let sizes = [64, 1024, 65536, 1_048_576];

    for size in &sizes {
        group.throughput(Throughput::Bytes(*size as u64));
        let data = vec![0xA5u8; *size];

        for variant in XxhashVariant::ALL {
            group.bench_with_input(BenchmarkId::new(variant.as_str(), size), &data, |b, data| {
                b.iter(|| {
                    let digest = Hash::xxhash(variant)
                        .compute(data)
                        .expect("xxhash should succeed");
                    std::hint::black_box(digest);
                });
            });
        }
    }
    group.finish();
}

fn benchmark_password_hashing(c: &mut Criterion) {
    let rt = Runtime::new().expect("runtime should start");
    let mut group = c.benchmark_group("password_latency");
    group.sample_size(10);

    group.bench_function("argon2id_minimum", |b| {
        b.iter(|| {
            rt.block_on(async {
                let hash = Hash::argon2()
                    .with_params(Argon2Params::minimum())
                    .hash("correct horse battery staple")
                    .await
                    .expect("argon2 should succeed");
                std::hint::black_box(hash);
            });
        });
    });

    group.bench_function("bcrypt_cost_4", |b| {
        b.iter(|| {
            rt.block_on(async {
                let hash = Hash::bcrypt()
                    .cost(4)
                    .hash("correct horse battery staple")
                    .await
                    .expect("bcrypt should succeed");
                std::hint::black_box(hash);
            });
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_xxhash_variants, benchmark_password_hashing);
criterion_main!(benches);
