// SPDX-License-Identifier: MIT
//! Benchmark inflating and restoring bigzip containers

use bigzip::{ContainerReader, ContainerWriter, FillMode};
use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use std::hint::black_box;
use std::io::{self, Write};

/// 1MB of text-like input
fn create_test_data() -> Vec<u8> {
    b"The quick brown fox jumps over the lazy dog. "
        .iter()
        .copied()
        .cycle()
        .take(1024 * 1024)
        .collect()
}

fn benchmark_inflate(c: &mut Criterion) {
    let original = create_test_data();
    let target = original.len() as u64 * 5;

    let mut group = c.benchmark_group("inflate_5x");
    group.throughput(Throughput::Bytes(target));

    for &mode in FillMode::all() {
        let writer = ContainerWriter::new(mode).with_target_size(target);
        group.bench_function(mode.name(), |b| {
            b.iter(|| {
                let total = writer
                    .write_to(black_box(&original), &mut io::sink())
                    .unwrap();
                black_box(total);
            })
        });
    }

    group.finish();
}

fn benchmark_restore(c: &mut Criterion) {
    let original = create_test_data();
    let container = ContainerWriter::new(FillMode::Zero)
        .with_target_size(original.len() as u64 * 5)
        .finalize(&original)
        .unwrap();

    let mut group = c.benchmark_group("restore");
    group.throughput(Throughput::Bytes(original.len() as u64));

    group.bench_function("restore_to_sink", |b| {
        b.iter(|| {
            let reader = ContainerReader::open(black_box(&container[..])).unwrap();
            let copied = reader.copy_original_to(&mut io::sink()).unwrap();
            black_box(copied);
        })
    });

    group.bench_function("restore_to_vec", |b| {
        b.iter(|| {
            let reader = ContainerReader::open(black_box(&container[..])).unwrap();
            let mut out = Vec::with_capacity(original.len());
            reader.copy_original_to(&mut out).unwrap();
            out.flush().unwrap();
            black_box(out);
        })
    });

    group.finish();
}

criterion_group!(benches, benchmark_inflate, benchmark_restore);
criterion_main!(benches);
