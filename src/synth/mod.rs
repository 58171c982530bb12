// Purpose: voices, the fixed voice pool, and the gesture-driven control engine.
// This layer turns gesture events into scheduled audio.

pub mod engine;
pub mod message;
pub mod pool;
pub mod voice;

pub use engine::{EngineConfig, SynthesisEngine};
pub use message::{SynthMessage, VoiceKey, VOICE_COUNT};
pub use pool::VoicePool;
pub use voice::{Voice, VoiceState};
