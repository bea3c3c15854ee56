//! Benchmarks for bytevec append paths.
//!
//! Run with:
//!     cargo bench

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use bytevec::{ByteVec, ElementType, GrowthPolicy, VecConfig};

fn bench_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_i32");

    for count in [100usize, 2_000, 10_000] {
        group.throughput(Throughput::Elements(count as u64));

        // Default policy: one reallocation per append
        group.bench_with_input(BenchmarkId::new("incremental", count), &count, |b, &n| {
            b.iter(|| {
                let mut v = ByteVec::with_type(0, ElementType::I32).unwrap();
                for i in 0..n as i32 {
                    v.push_i32(black_box(i)).unwrap();
                }
                black_box(v.len())
            });
        });

        group.bench_with_input(BenchmarkId::new("doubling", count), &count, |b, &n| {
            let config = VecConfig::new(0, 4)
                .unwrap()
                .with_growth_policy(GrowthPolicy::Doubling);
            b.iter(|| {
                let mut v = ByteVec::from_config(config).unwrap();
                for i in 0..n as i32 {
                    v.push_i32(black_box(i)).unwrap();
                }
                black_box(v.len())
            });
        });

        group.bench_with_input(BenchmarkId::new("preallocated", count), &count, |b, &n| {
            b.iter(|| {
                let mut v = ByteVec::with_type(n + 1, ElementType::I32).unwrap();
                for i in 0..n as i32 {
                    v.push_i32(black_box(i)).unwrap();
                }
                black_box(v.len())
            });
        });
    }

    group.finish();
}

fn bench_read(c: &mut Criterion) {
    let mut group = c.benchmark_group("read");
    let n = 10_000usize;
    let mut v = ByteVec::with_type(n, ElementType::I32).unwrap();
    for i in 0..n as i32 {
        v.push_i32(i).unwrap();
    }

    group.throughput(Throughput::Elements(n as u64));
    group.bench_function("as_i32", |b| {
        b.iter(|| {
            let mut sum = 0i64;
            for i in 0..n {
                sum += v.as_i32(black_box(i)) as i64;
            }
            black_box(sum)
        });
    });

    group.bench_function("get_i32", |b| {
        b.iter(|| {
            let mut sum = 0i64;
            for i in 0..n {
                sum += v.get_i32(black_box(i)).unwrap_or(0) as i64;
            }
            black_box(sum)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_push, bench_read);
criterion_main!(benches);
