use criterion::{black_box, criterion_group, criterion_main, Criterion};
use scrypt_crack::{derive_key, CandidateGenerator, Mask};

fn bench_generator(c: &mut Criterion) {
    let mut group = c.benchmark_group("generator");

    let mask = Mask::parse("lldd").unwrap(); // 67,600 candidates

    group.bench_function("enumerate_lldd", |b| {
        b.iter(|| black_box(CandidateGenerator::new(&mask).count()))
    });

    group.bench_function("enumerate_mixed_prefix", |b| {
        let mask = Mask::parse("aaaaaa").unwrap();
        b.iter(|| black_box(CandidateGenerator::new(&mask).take(100_000).last()))
    });

    group.finish();
}

fn bench_oracle(c: &mut Criterion) {
    let mut group = c.benchmark_group("oracle");

    group.bench_function("scrypt_n16_r1_p1", |b| {
        b.iter(|| black_box(derive_key(b"42", b"bench-salt", 16, 1, 1, 32)))
    });

    group.bench_function("scrypt_n1024_r8_p1", |b| {
        b.iter(|| black_box(derive_key(b"42", b"bench-salt", 1024, 8, 1, 32)))
    });

    group.finish();
}

criterion_group!(benches, bench_generator, bench_oracle);
criterion_main!(benches);
