//! Benchmarks for oscillator waveform generation.

use std::hint::black_box;

use airharp::dsp::{OscillatorBlock, Waveform};
use criterion::{BenchmarkId, Criterion};

use crate::BLOCK_SIZES;

const SAMPLE_RATE: f32 = 48_000.0;

pub fn bench_oscillator(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/oscillator");

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        // Sine - uses sin() transcendental function
        let mut osc = OscillatorBlock::sine(440.0);
        group.bench_with_input(BenchmarkId::new("sine", size), &size, |b, _| {
            b.iter(|| {
                osc.render(black_box(&mut buffer), SAMPLE_RATE);
            })
        });

        // Saw - simple linear ramp
        let mut osc = OscillatorBlock::new(Waveform::Saw, 440.0, 0.0);
        group.bench_with_input(BenchmarkId::new("saw", size), &size, |b, _| {
            b.iter(|| {
                osc.render(black_box(&mut buffer), SAMPLE_RATE);
            })
        });

        // Square - branch per sample
        let mut osc = OscillatorBlock::new(Waveform::Square, 440.0, 0.0);
        group.bench_with_input(BenchmarkId::new("square", size), &size, |b, _| {
            b.iter(|| {
                osc.render(black_box(&mut buffer), SAMPLE_RATE);
            })
        });

        // Triangle - absolute value
        let mut osc = OscillatorBlock::new(Waveform::Triangle, 440.0, 0.0);
        group.bench_with_input(BenchmarkId::new("triangle", size), &size, |b, _| {
            b.iter(|| {
                osc.render(black_box(&mut buffer), SAMPLE_RATE);
            })
        });

        // Detuned sine - exercises the ratio multiply in the hot path
        let mut osc = OscillatorBlock::new(Waveform::Sine, 440.0, 18.0);
        group.bench_with_input(BenchmarkId::new("sine_detuned", size), &size, |b, _| {
            b.iter(|| {
                osc.render(black_box(&mut buffer), SAMPLE_RATE);
            })
        });
    }

    group.finish();
}
