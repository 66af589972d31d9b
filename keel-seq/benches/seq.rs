//! Benchmarks for Seq against std's Vec on the hot paths.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use keel_core::{Cursor, IntoCursor};
use keel_seq::Seq;

const N: usize = 10_000;

fn bench_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("push");

    group.bench_function("seq", |b| {
        b.iter(|| {
            let mut seq = Seq::new();
            for i in 0..N {
                seq.push(black_box(i as u64));
            }
            seq
        })
    });

    group.bench_function("vec", |b| {
        b.iter(|| {
            let mut vec = Vec::new();
            for i in 0..N {
                vec.push(black_box(i as u64));
            }
            vec
        })
    });

    group.finish();
}

fn bench_cursor_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("sum");

    let seq: Seq<u64> = {
        let mut seq = Seq::with_capacity(N);
        for i in 0..N {
            seq.push(i as u64);
        }
        seq
    };
    let vec: Vec<u64> = (0..N as u64).collect();

    group.bench_function("seq_cursor", |b| {
        b.iter(|| {
            let total: u64 = (&seq).into_cursor().map(|n| n.wrapping_mul(3)).sum();
            black_box(total)
        })
    });

    group.bench_function("vec_iter", |b| {
        b.iter(|| {
            let total: u64 = vec.iter().map(|n| n.wrapping_mul(3)).sum();
            black_box(total)
        })
    });

    group.finish();
}

fn bench_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("drain_middle");

    group.bench_function("seq", |b| {
        b.iter_with_setup(
            || {
                let mut seq = Seq::with_capacity(N);
                for i in 0..N {
                    seq.push(i as u64);
                }
                seq
            },
            |mut seq| {
                seq.drain(N / 4..3 * N / 4);
                black_box(seq)
            },
        )
    });

    group.bench_function("vec", |b| {
        b.iter_with_setup(
            || (0..N as u64).collect::<Vec<_>>(),
            |mut vec| {
                vec.drain(N / 4..3 * N / 4);
                black_box(vec)
            },
        )
    });

    group.finish();
}

criterion_group!(benches, bench_push, bench_cursor_sum, bench_drain);
criterion_main!(benches);
