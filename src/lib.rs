pub mod dsp; // Realtime-safe signal primitives
pub mod gesture; // Hand landmarks, pinch classification, pitch mapping
pub mod io; // Audio device output and live session plumbing
pub mod synth; // Voices, the fixed voice pool, and the gesture engine

pub const MAX_BLOCK_SIZE: usize = 2048;
pub(crate) const MIN_TIME: f32 = 1.0 / 48_000.0;
