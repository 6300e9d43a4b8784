// benches/bit_copy.rs

use bitset::BitSet;
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::prelude::*;

fn pattern_bytes(len: usize) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..len).map(|_| rng.random()).collect()
}

fn bench_write_bits(c: &mut Criterion) {
    let sizes = vec![64, 1_024, 16_384];

    let mut group = c.benchmark_group("write_bits");
    for size in sizes {
        let src = pattern_bytes(size / 8 + 1);

        group.bench_with_input(BenchmarkId::new("aligned", size), &size, |b, &s| {
            let mut bits = BitSet::zeroed(s + 8).unwrap();
            b.iter(|| {
                bits.write_bits(0, black_box(&src), s);
            });
        });

        group.bench_with_input(BenchmarkId::new("unaligned", size), &size, |b, &s| {
            let mut bits = BitSet::zeroed(s + 8).unwrap();
            b.iter(|| {
                bits.write_bits(3, black_box(&src), s);
            });
        });
    }
    group.finish();
}

fn bench_read_bits(c: &mut Criterion) {
    let sizes = vec![64, 1_024, 16_384];

    let mut group = c.benchmark_group("read_bits");
    for size in sizes {
        let src = pattern_bytes(size / 8 + 1);
        let mut bits = BitSet::zeroed(size + 8).unwrap();
        bits.write_bits(3, &src, size);

        group.bench_with_input(BenchmarkId::new("aligned", size), &size, |b, &s| {
            let mut out = vec![0u8; s / 8 + 1];
            b.iter(|| {
                out.fill(0);
                bits.read_bits(0, black_box(&mut out), s);
            });
        });

        group.bench_with_input(BenchmarkId::new("unaligned", size), &size, |b, &s| {
            let mut out = vec![0u8; s / 8 + 1];
            b.iter(|| {
                out.fill(0);
                bits.read_bits(3, black_box(&mut out), s);
            });
        });
    }
    group.finish();
}

fn bench_clear(c: &mut Criterion) {
    let size = 16_384;
    let mut group = c.benchmark_group("clear");

    group.bench_function("clear_range_unaligned", |b| {
        let mut bits = BitSet::zeroed(size).unwrap();
        b.iter(|| {
            bits.clear_range(black_box(5), black_box(size - 3));
        });
    });

    group.bench_function("clear_all", |b| {
        let mut bits = BitSet::zeroed(size).unwrap();
        b.iter(|| {
            bits.clear_all();
        });
    });

    group.finish();
}

fn bench_single_bit(c: &mut Criterion) {
    use rand::prelude::*;

    let size = 16_384;
    let mut group = c.benchmark_group("single_bit");

    // Sequential access (cache-friendly)
    group.bench_function("set_sequential", |b| {
        let mut bits = BitSet::zeroed(size).unwrap();
        b.iter(|| {
            for i in 0..size {
                bits.set(i, i & 1 != 0);
            }
        });
    });

    // Random access (cache-unfriendly)
    group.bench_function("set_random", |b| {
        let mut bits = BitSet::zeroed(size).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let indices: Vec<usize> = (0..size).map(|_| rng.random_range(0..size)).collect();

        b.iter(|| {
            for &i in &indices {
                bits.set(i, true);
            }
        });
    });

    group.bench_function("get_sequential", |b| {
        let mut bits = BitSet::zeroed(size).unwrap();
        bits.write_bits(0, &pattern_bytes(size / 8), size);
        b.iter(|| {
            let mut count = 0usize;
            for i in 0..size {
                count += black_box(bits.get(i)) as usize;
            }
            count
        });
    });

    group.finish();
}

criterion_group!(copy_benches, bench_write_bits, bench_read_bits);
criterion_group!(bit_benches, bench_clear, bench_single_bit);

criterion_main!(copy_benches, bit_benches);
