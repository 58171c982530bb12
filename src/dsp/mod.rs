//! Low-level DSP primitives used by the synthesis voices.
//!
//! These components are allocation-free after construction and realtime-safe,
//! making them safe to embed directly inside voice structs. They intentionally
//! stay focused on the signal-processing math; gesture handling and voice
//! orchestration live a layer up in `synth`.

/// Phase-accumulator oscillators with live, phase-continuous retuning.
pub mod oscillator;
/// Scheduled linear gain ramps with cancellation.
pub mod ramp;

pub use oscillator::{OscillatorBlock, Waveform};
pub use ramp::GainSchedule;
