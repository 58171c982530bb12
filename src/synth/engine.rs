use rtrb::{Consumer, Producer, RingBuffer};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dsp::oscillator::Waveform;
use crate::gesture::landmark::FINGERS_PER_HAND;
use crate::gesture::{
    distance, GestureClassifier, GestureEvent, Hand, HandObservation, Landmark, PitchMapper,
};
use crate::synth::message::{SynthMessage, VoiceKey, VOICE_COUNT};
use crate::synth::pool::VoicePool;
use crate::synth::voice::{Voice, DEFAULT_DETUNE_SPREAD, DEFAULT_OSCILLATOR_COUNT};

pub const DEFAULT_STRIKE_GAIN: f32 = 0.8;

/// Plenty for one frame's worth of events: at most 8 strike/release plus
/// 8 bend messages per frame.
const MESSAGE_QUEUE_SIZE: usize = 256;

/// Convert MIDI note number to frequency in Hz. A4 = 440 Hz = MIDI note 69.
#[inline]
fn midi_note_to_freq(note: u8) -> f32 {
    440.0 * 2.0_f32.powf((note as f32 - 69.0) / 12.0)
}

/// Session-wide voice and tuning configuration.
///
/// Both hands play the same diatonic degree set, independently transposed:
/// the left hand around middle C, the right an octave up.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub waveform: Waveform,
    pub oscillator_count: usize,
    /// Detune of the outermost oscillator pair, in cents.
    pub detune_spread: f32,
    pub strike_gain: f32,
    /// Scale degrees as semitone offsets, one per finger (index..pinky).
    pub scale_degrees: [u8; FINGERS_PER_HAND],
    /// MIDI note the left hand's degree set is built on.
    pub left_transpose: u8,
    /// MIDI note the right hand's degree set is built on.
    pub right_transpose: u8,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            waveform: Waveform::Sine,
            oscillator_count: DEFAULT_OSCILLATOR_COUNT,
            detune_spread: DEFAULT_DETUNE_SPREAD,
            strike_gain: DEFAULT_STRIKE_GAIN,
            scale_degrees: [0, 2, 4, 5], // C D E F
            left_transpose: 60,          // C4
            right_transpose: 72,         // C5
        }
    }
}

impl EngineConfig {
    pub fn base_frequency(&self, key: VoiceKey) -> f32 {
        let transpose = match key.hand {
            Hand::Left => self.left_transpose,
            Hand::Right => self.right_transpose,
        };
        midi_note_to_freq(transpose + self.scale_degrees[key.finger as usize])
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct KeySlot {
    sounding: bool,
    /// Wrist landmark captured at the Idle -> Sounding transition; the pitch
    /// reference for this note. Cleared on release.
    wrist_at_strike: Option<Landmark>,
}

/// The control-side orchestrator: consumes one `HandObservation` per frame,
/// decides strikes and releases, and streams schedule mutations to the
/// audio-side `VoicePool` through a lock-free SPSC queue. Neither side ever
/// blocks on the other.
pub struct SynthesisEngine {
    classifier: GestureClassifier,
    pitch: PitchMapper,
    slots: [KeySlot; VOICE_COUNT],
    strike_gain: f32,
    tx: Producer<SynthMessage>,
}

impl SynthesisEngine {
    /// Build the engine and its paired audio-side pool. The pool moves to
    /// the audio thread; the engine stays with the frame loop.
    pub fn new(
        config: &EngineConfig,
        sample_rate: f32,
    ) -> (Self, VoicePool<Consumer<SynthMessage>>) {
        let (tx, rx) = RingBuffer::new(MESSAGE_QUEUE_SIZE);

        let voices = VoiceKey::all()
            .map(|key| {
                Voice::with_bank(
                    config.base_frequency(key),
                    sample_rate,
                    config.waveform,
                    config.oscillator_count,
                    config.detune_spread,
                )
            })
            .collect();

        let engine = Self {
            classifier: GestureClassifier::new(),
            pitch: PitchMapper::new(),
            slots: [KeySlot::default(); VOICE_COUNT],
            strike_gain: config.strike_gain,
            tx,
        };

        (engine, VoicePool::new(voices, rx))
    }

    /// Ingest one frame for one hand.
    ///
    /// Strike/release decisions for all four fingers are applied before the
    /// pitch-bend pass, so a voice struck this frame is bent against its
    /// fresh wrist reference in the same frame.
    pub fn process_frame(&mut self, observation: &HandObservation) {
        let hand = observation.hand();

        for finger in 0..FINGERS_PER_HAND {
            let key = VoiceKey::new(hand, finger as u8);
            let pinch = distance(observation.fingertip(finger), observation.thumb_tip());
            let slot = &mut self.slots[key.index()];

            match self.classifier.classify(pinch, slot.sounding) {
                Some(GestureEvent::Strike) => {
                    slot.sounding = true;
                    slot.wrist_at_strike = Some(*observation.wrist());
                    let _ = self.tx.push(SynthMessage::Strike {
                        key,
                        gain: self.strike_gain,
                    });
                }
                Some(GestureEvent::Release) => {
                    slot.sounding = false;
                    slot.wrist_at_strike = None;
                    let _ = self.tx.push(SynthMessage::Release { key });
                }
                None => {}
            }
        }

        for finger in 0..FINGERS_PER_HAND {
            let key = VoiceKey::new(hand, finger as u8);
            let slot = self.slots[key.index()];
            if let (true, Some(start)) = (slot.sounding, slot.wrist_at_strike) {
                let multiplier = self.pitch.bend_multiplier(start.y, observation.wrist().y);
                let _ = self.tx.push(SynthMessage::PitchBend { key, multiplier });
            }
        }
    }

    /// Release every sounding voice on both hands. Idempotent: keys already
    /// silent are skipped, so repeated calls schedule nothing new.
    pub fn stop_all(&mut self) {
        for key in VoiceKey::all() {
            let slot = &mut self.slots[key.index()];
            if slot.sounding {
                slot.sounding = false;
                slot.wrist_at_strike = None;
                let _ = self.tx.push(SynthMessage::Release { key });
            }
        }
    }

    /// Derived property: nothing currently sounding on the control side.
    pub fn is_silent(&self) -> bool {
        self.slots.iter().all(|slot| !slot.sounding)
    }

    pub fn key_sounding(&self, key: VoiceKey) -> bool {
        self.slots[key.index()].sounding
    }
}
