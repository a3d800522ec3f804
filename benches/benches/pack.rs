//! Benchmark suite for grid packing
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml

use std::{hint::black_box, num::NonZeroU32};

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use spritesheet_benches::{generate_frames, workloads};
use spritesheet_types::prelude::*;

/// Benchmark packing with the default five columns
fn bench_pack_default_grid(c: &mut Criterion) {
	let mut group = c.benchmark_group("pack_default_grid");

	for (name, (count, width, height)) in [
		("walk_cycle", workloads::WALK_CYCLE),
		("effect", workloads::EFFECT),
		("video", workloads::VIDEO),
	] {
		let frames = generate_frames(count, width, height);
		let pixels = count as u64 * u64::from(width) * u64::from(height);

		group.throughput(Throughput::Elements(pixels));
		group.bench_with_input(BenchmarkId::new("pack", name), &frames, |b, frames| {
			b.iter(|| {
				let sheet = pack(black_box(frames), &PackConfig::default());
				black_box(sheet)
			});
		});
	}

	group.finish();
}

/// Benchmark how the column count affects packing a fixed workload
fn bench_pack_columns(c: &mut Criterion) {
	let mut group = c.benchmark_group("pack_columns");

	let (count, width, height) = workloads::EFFECT;
	let frames = generate_frames(count, width, height);

	for columns in [1u32, 5, 10, 30] {
		let config = PackConfig::new(GridSpec::new(None, NonZeroU32::new(columns)));
		group.bench_with_input(BenchmarkId::from_parameter(columns), &config, |b, config| {
			b.iter(|| black_box(pack(&frames, config)));
		});
	}

	group.finish();
}

criterion_group!(benches, bench_pack_default_grid, bench_pack_columns);
criterion_main!(benches);
