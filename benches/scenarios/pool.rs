//! Full voice-pool benchmarks.

use std::collections::VecDeque;
use std::hint::black_box;

use airharp::synth::{SynthMessage, Voice, VoiceKey, VoicePool};
use criterion::{BenchmarkId, Criterion};
use rtrb::RingBuffer;

use crate::BLOCK_SIZES;

const SAMPLE_RATE: f32 = 48_000.0;

fn voices() -> Vec<Voice> {
    VoiceKey::all()
        .map(|key| Voice::new(220.0 + 20.0 * key.index() as f32, SAMPLE_RATE))
        .collect()
}

pub fn bench_pool(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/pool");

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        // All eight voices sustained: the steady-state cost of a full chord.
        let strikes: VecDeque<SynthMessage> = VoiceKey::all()
            .map(|key| SynthMessage::Strike { key, gain: 0.8 })
            .collect();
        let mut pool = VoicePool::new(voices(), strikes);
        pool.render_block(&mut buffer);

        group.bench_with_input(BenchmarkId::new("eight_sustained", size), &size, |b, _| {
            b.iter(|| {
                pool.render_block(black_box(&mut buffer));
            })
        });

        // Sustained chord plus a frame's worth of pitch-bend traffic per
        // block, arriving over the lock-free queue as in a live session.
        let (mut tx, rx) = RingBuffer::new(256);
        let mut bent_pool = VoicePool::new(voices(), rx);
        for key in VoiceKey::all() {
            let _ = tx.push(SynthMessage::Strike { key, gain: 0.8 });
        }
        bent_pool.render_block(&mut buffer);

        group.bench_with_input(BenchmarkId::new("eight_bending", size), &size, |b, _| {
            b.iter(|| {
                for key in VoiceKey::all() {
                    let _ = tx.push(SynthMessage::PitchBend {
                        key,
                        multiplier: 2.9,
                    });
                }
                bent_pool.render_block(black_box(&mut buffer));
            })
        });
    }

    group.finish();
}
