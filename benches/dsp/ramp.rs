//! Benchmarks for the scheduled gain ramp.

use std::hint::black_box;

use airharp::dsp::GainSchedule;
use criterion::{BenchmarkId, Criterion};

use crate::BLOCK_SIZES;

pub fn bench_ramp(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/ramp");

    for &size in BLOCK_SIZES {
        // Steady state: queue drained, just holding the sustain value.
        let mut idle = GainSchedule::new(48_000.0);
        group.bench_with_input(BenchmarkId::new("held", size), &size, |b, _| {
            b.iter(|| {
                for _ in 0..size {
                    black_box(idle.next_sample());
                }
            })
        });

        // Worst case: a fresh strike schedule every block.
        let mut busy = GainSchedule::new(48_000.0);
        group.bench_with_input(BenchmarkId::new("restruck", size), &size, |b, _| {
            b.iter(|| {
                busy.cancel_scheduled();
                busy.set_value(0.0);
                busy.ramp_to(0.8, 0.15);
                busy.ramp_to(0.56, 0.15);
                for _ in 0..size {
                    black_box(busy.next_sample());
                }
            })
        });
    }

    group.finish();
}
