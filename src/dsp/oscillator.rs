use std::f32::consts::TAU;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/*
Audio Oscillator
================

An oscillator is the fundamental sound source in a synthesizer: a repeating
waveform at a specific frequency. Everything audible in this crate starts
here; envelopes and gestures only shape what the oscillators produce.

Two properties matter for gesture-driven playing:

  Continuous generation   An oscillator is created once, when its voice is
                          built, and then runs for the whole session. Notes
                          are made audible by the gain schedule, never by
                          starting or stopping generators. This avoids
                          per-note allocation in the audio path.

  Phase-continuous retune `set_frequency` changes the pitch without touching
                          the phase accumulator, so a pitch bend arriving on
                          every animation frame never clicks.

Detune is expressed in cents (100 cents = 1 semitone) and fixed at
construction. The effective frequency is `frequency * 2^(cents/1200)`, so a
bank of oscillators sharing one nominal frequency but different detunes stays
locked together under pitch bend while keeping its chorus-like beating.
*/

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Saw,
    Square,
    Triangle,
}

pub struct OscillatorBlock {
    waveform: Waveform,
    /// Nominal frequency in Hz, before detune. Retuned live by pitch bend.
    frequency: f32,
    /// Fixed offset from the nominal frequency, in cents.
    detune_cents: f32,
    /// Precomputed `2^(detune_cents / 1200)`.
    detune_ratio: f32,
    /// Normalized phase in `[0, 1)`.
    phase: f32,
}

impl OscillatorBlock {
    pub fn new(waveform: Waveform, frequency: f32, detune_cents: f32) -> Self {
        Self {
            waveform,
            frequency,
            detune_cents,
            detune_ratio: 2.0_f32.powf(detune_cents / 1200.0),
            phase: 0.0,
        }
    }

    pub fn sine(frequency: f32) -> Self {
        Self::new(Waveform::Sine, frequency, 0.0)
    }

    /// Retune without resetting phase.
    pub fn set_frequency(&mut self, frequency: f32) {
        self.frequency = frequency;
    }

    pub fn frequency(&self) -> f32 {
        self.frequency
    }

    pub fn detune_cents(&self) -> f32 {
        self.detune_cents
    }

    /// Produce one sample and advance the phase accumulator.
    pub fn next_sample(&mut self, sample_rate: f32) -> f32 {
        let value = match self.waveform {
            Waveform::Sine => (TAU * self.phase).sin(),
            Waveform::Saw => 2.0 * self.phase - 1.0,
            Waveform::Square => {
                if self.phase < 0.5 {
                    1.0
                } else {
                    -1.0
                }
            }
            Waveform::Triangle => 1.0 - 4.0 * (self.phase - 0.5).abs(),
        };

        let hz = self.frequency * self.detune_ratio;
        self.phase += hz / sample_rate;
        self.phase -= self.phase.floor();

        value
    }

    /// Fill a buffer with oscillator output.
    pub fn render(&mut self, out: &mut [f32], sample_rate: f32) {
        for sample in out.iter_mut() {
            *sample = self.next_sample(sample_rate);
        }
    }
}
