use crate::synth::message::{MessageReceiver, SynthMessage, VoiceKey, VOICE_COUNT};
use crate::synth::voice::{Voice, VoiceState};
use crate::MAX_BLOCK_SIZE;

/// The audio-side owner of all eight voices, indexed by `VoiceKey`.
///
/// Voices are created once at session start and never reallocated; there is
/// no voice stealing because each key *is* its voice. At every block
/// boundary the pool drains pending control messages (schedule mutations),
/// then renders and sums the voices onto the shared bus.
///
/// The bus is a plain arithmetic sum, as in the source instrument: with many
/// simultaneous voices it can exceed full scale. Deliberately not limited
/// here.
pub struct VoicePool<R: MessageReceiver> {
    voices: Vec<Voice>,
    rx: R,
    temp_buffer: Vec<f32>,
}

impl<R: MessageReceiver> VoicePool<R> {
    /// `voices` must be in `VoiceKey::index()` order.
    pub fn new(voices: Vec<Voice>, rx: R) -> Self {
        debug_assert_eq!(voices.len(), VOICE_COUNT);
        Self {
            voices,
            rx,
            temp_buffer: vec![0.0; MAX_BLOCK_SIZE],
        }
    }

    pub fn render_block(&mut self, out: &mut [f32]) {
        // Apply all control writes that arrived since the last block.
        while let Some(msg) = self.rx.pop() {
            match msg {
                SynthMessage::Strike { key, gain } => self.voices[key.index()].strike(gain),
                SynthMessage::Release { key } => self.voices[key.index()].release(),
                SynthMessage::PitchBend { key, multiplier } => {
                    self.voices[key.index()].set_pitch_bend(multiplier)
                }
            }
        }

        // Every voice renders every block: generators run continuously and
        // the gain schedule alone decides audibility.
        out.fill(0.0);
        for voice in &mut self.voices {
            let tbuf = &mut self.temp_buffer[..out.len()];
            voice.render_block(tbuf);

            for (o, v) in out.iter_mut().zip(tbuf.iter()) {
                *o += v;
            }
        }
    }

    /// Derived "all stopped" property: no separately mutable flag to drift
    /// out of sync with the voices.
    pub fn is_silent(&self) -> bool {
        self.voices.iter().all(|v| v.state() == VoiceState::Idle)
    }

    pub fn voice(&self, key: VoiceKey) -> &Voice {
        &self.voices[key.index()]
    }
}
