// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use grove_garden::{CoordinateMapper, SlotAllocator, StoredPosition, ThoughtRecord};

/// A full garden of `n` thoughts with every `gap_every`-th slot deleted.
fn garden(mapper: &CoordinateMapper, n: usize, gap_every: usize) -> Vec<ThoughtRecord> {
    (0..n)
        .filter(|g| gap_every == 0 || g % gap_every != gap_every - 1)
        .map(|g| {
            let info = mapper.slot_info(g);
            ThoughtRecord::new(
                format!("t{g}"),
                mapper.slot_to_stored_position(info.island, info.local),
            )
        })
        .collect()
}

fn bench_next_available_slot(c: &mut Criterion) {
    let mapper = CoordinateMapper::default();
    let alloc = SlotAllocator::new(&mapper);
    let mut group = c.benchmark_group("allocation/next_available_slot");

    // Dense gardens force a scan to the end; sparse ones stop at the first gap.
    for n in [120usize, 1_200, 12_000] {
        let dense = garden(&mapper, n, 0);
        let islands = n / mapper.slots_per_island() + 1;
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("dense", n), &dense, |b, thoughts| {
            b.iter(|| black_box(alloc.next_available_slot(thoughts, islands)));
        });

        let holey = garden(&mapper, n, 7);
        group.bench_with_input(BenchmarkId::new("holey", n), &holey, |b, thoughts| {
            b.iter(|| black_box(alloc.next_available_slot(thoughts, islands)));
        });
    }
    group.finish();
}

fn bench_plant_sequence(c: &mut Criterion) {
    let mapper = CoordinateMapper::default();
    let alloc = SlotAllocator::new(&mapper);
    let mut group = c.benchmark_group("allocation/plant_sequence");

    for n in [24usize, 240] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(BenchmarkId::from_parameter(n), |b| {
            b.iter_batched(
                || Vec::with_capacity(n),
                |mut thoughts: Vec<ThoughtRecord>| {
                    for i in 0..n {
                        let planting = alloc.plant(&thoughts);
                        thoughts.push(ThoughtRecord::new(format!("t{i}"), planting.stored));
                    }
                    black_box(thoughts);
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_reverse_lookup(c: &mut Criterion) {
    let mapper = CoordinateMapper::default();
    let aligned: Vec<StoredPosition> = (0..1_000)
        .map(|g| {
            let info = mapper.slot_info(g);
            mapper.slot_to_stored_position(info.island, info.local)
        })
        .collect();
    let legacy: Vec<StoredPosition> = (0..1_000)
        .map(|i| StoredPosition::new(f64::from(i) * 0.37 % 400.0, 95.0))
        .collect();

    c.bench_function("mapper/reverse_lookup/aligned", |b| {
        b.iter(|| {
            for pos in &aligned {
                black_box(mapper.stored_position_to_global_index(*pos));
            }
        });
    });
    c.bench_function("mapper/reverse_lookup/legacy", |b| {
        b.iter(|| {
            for pos in &legacy {
                black_box(mapper.stored_position_to_global_index(*pos));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_next_available_slot,
    bench_plant_sequence,
    bench_reverse_lookup
);
criterion_main!(benches);
