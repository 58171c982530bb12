use std::collections::VecDeque;

use rtrb::Consumer;

use crate::gesture::landmark::FINGERS_PER_HAND;
use crate::gesture::Hand;

/// Total playable note slots for a session: four fingers on each hand.
pub const VOICE_COUNT: usize = 2 * FINGERS_PER_HAND;

/// Stable identity of one playable note slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VoiceKey {
    pub hand: Hand,
    /// 0 = index through 3 = pinky.
    pub finger: u8,
}

impl VoiceKey {
    pub fn new(hand: Hand, finger: u8) -> Self {
        debug_assert!((finger as usize) < FINGERS_PER_HAND);
        Self { hand, finger }
    }

    /// Dense index into per-key arrays: `[0, VOICE_COUNT)`.
    pub fn index(self) -> usize {
        self.hand.index() * FINGERS_PER_HAND + self.finger as usize
    }

    /// All keys in `index()` order.
    pub fn all() -> impl Iterator<Item = VoiceKey> {
        [Hand::Left, Hand::Right].into_iter().flat_map(|hand| {
            (0..FINGERS_PER_HAND as u8).map(move |finger| VoiceKey::new(hand, finger))
        })
    }
}

/// Control-loop to audio-loop commands. Each is a schedule mutation applied
/// by the pool at the next block boundary.
#[derive(Debug, Copy, Clone)]
pub enum SynthMessage {
    Strike { key: VoiceKey, gain: f32 },
    Release { key: VoiceKey },
    PitchBend { key: VoiceKey, multiplier: f32 },
}

pub trait MessageReceiver {
    fn pop(&mut self) -> Option<SynthMessage>;
}

impl MessageReceiver for Consumer<SynthMessage> {
    fn pop(&mut self) -> Option<SynthMessage> {
        Consumer::pop(self).ok()
    }
}

/// Convenient receiver for tests and benchmarks.
impl MessageReceiver for VecDeque<SynthMessage> {
    fn pop(&mut self) -> Option<SynthMessage> {
        self.pop_front()
    }
}
