//! CRC8 benchmarks.
//!
//! Run: `cargo bench -p crc8`
//!
//! This benchmarks:
//! - Named variants (memoized table, lookup-only per call)
//! - The custom path (rebuilds its 256-entry table per call)
//! - Accumulator checksums

use crc8::{Crc8Kind, Custom};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

/// Standard benchmark sizes.
const SIZES: [usize; 5] = [16, 64, 256, 1024, 4096];

/// Benchmark the memoized named-variant path.
fn bench_named(c: &mut Criterion) {
  let mut group = c.benchmark_group("crc8/maxim8");

  for size in SIZES {
    let data = vec![0xABu8; size];
    group.throughput(Throughput::Bytes(size as u64));

    group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
      b.iter(|| core::hint::black_box(Crc8Kind::Maxim8.checksum(data)));
    });
  }

  group.finish();
}

/// Benchmark the custom path, which pays a table build on every call.
fn bench_custom(c: &mut Criterion) {
  let mut group = c.benchmark_group("crc8/custom");
  let params = Custom {
    polynomial: 0x31,
    initial: 0x00,
    xor_out: 0x00,
    reflect: true,
  };

  for size in SIZES {
    let data = vec![0xABu8; size];
    group.throughput(Throughput::Bytes(size as u64));

    group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
      b.iter(|| core::hint::black_box(params.checksum(data)));
    });
  }

  group.finish();
}

/// Benchmark the table-less accumulators.
fn bench_accumulators(c: &mut Criterion) {
  let mut group = c.benchmark_group("crc8/accum");

  for size in SIZES {
    let data = vec![0xABu8; size];
    group.throughput(Throughput::Bytes(size as u64));

    group.bench_with_input(BenchmarkId::new("lrc", size), &data, |b, data| {
      b.iter(|| core::hint::black_box(crc8::lrc(data)));
    });
    group.bench_with_input(BenchmarkId::new("sum8", size), &data, |b, data| {
      b.iter(|| core::hint::black_box(crc8::sum8(data)));
    });
    group.bench_with_input(BenchmarkId::new("fletcher8", size), &data, |b, data| {
      b.iter(|| core::hint::black_box(crc8::fletcher8(data)));
    });
  }

  group.finish();
}

criterion_group!(benches, bench_named, bench_custom, bench_accumulators);
criterion_main!(benches);
