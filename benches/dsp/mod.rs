//! Low-level DSP primitive benchmarks.

mod oscillator;
mod ramp;

pub use oscillator::bench_oscillator;
pub use ramp::bench_ramp;
