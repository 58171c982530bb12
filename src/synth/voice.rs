use crate::dsp::oscillator::{OscillatorBlock, Waveform};
use crate::dsp::ramp::GainSchedule;

/*
One voice = one finger's note: a bank of mutually detuned oscillators feeding
a single scheduled gain stage.

The oscillators are built once and run for the whole session; a "note" is
purely a gain trajectory. Strike resets the gain to zero and schedules
attack and decay-to-sustain ramps; release schedules a fade to silence.
Pitch bend retunes every oscillator to `base_frequency * multiplier` while
each keeps its own fixed detune (in cents) on top, so the bank's beating
character survives the bend.

Frequency and gain are independent control streams: a bend never disturbs a
scheduled ramp, and a ramp never resets a bend.
*/

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceState {
    Idle,      // Silent, no ramp in flight
    Sounding,  // Struck, envelope in attack/decay/sustain
    Releasing, // Fade-out ramp in flight
}

pub const DEFAULT_OSCILLATOR_COUNT: usize = 3;
pub const DEFAULT_DETUNE_SPREAD: f32 = 18.0;

// Envelope edges, in seconds from strike. The decay segment is scheduled to
// complete at DECAY_END, so its own duration is DECAY_END - ATTACK_TIME.
const ATTACK_TIME: f32 = 0.15;
const DECAY_END: f32 = 0.3;
const SUSTAIN_RATIO: f32 = 0.7;
const RELEASE_TIME: f32 = 0.5;

pub struct Voice {
    base_frequency: f32,
    current_frequency: f32,
    sample_rate: f32,
    oscillators: Vec<OscillatorBlock>,
    /// Equal-weight bank mix, so the gain schedule bounds the voice's
    /// amplitude regardless of oscillator count.
    mix_weight: f32,
    gain: GainSchedule,
    state: VoiceState,
}

/// Detune offset in cents for oscillator `i` of `count`, spaced linearly
/// around zero so the outermost pair sits at `±spread`.
pub(crate) fn detune_offset(i: usize, count: usize, spread: f32) -> f32 {
    if count <= 1 {
        return 0.0;
    }
    let half = (count - 1) as f32 / 2.0;
    (i as f32 - half) * (spread / half)
}

impl Voice {
    pub fn new(base_frequency: f32, sample_rate: f32) -> Self {
        Self::with_bank(
            base_frequency,
            sample_rate,
            Waveform::Sine,
            DEFAULT_OSCILLATOR_COUNT,
            DEFAULT_DETUNE_SPREAD,
        )
    }

    /// Oscillator count and detune spread are fixed here for the lifetime of
    /// the voice.
    pub fn with_bank(
        base_frequency: f32,
        sample_rate: f32,
        waveform: Waveform,
        oscillator_count: usize,
        detune_spread: f32,
    ) -> Self {
        let oscillator_count = oscillator_count.max(1);
        let oscillators = (0..oscillator_count)
            .map(|i| {
                let cents = detune_offset(i, oscillator_count, detune_spread);
                OscillatorBlock::new(waveform, base_frequency, cents)
            })
            .collect();

        Self {
            base_frequency,
            current_frequency: base_frequency,
            sample_rate,
            oscillators,
            mix_weight: 1.0 / oscillator_count as f32,
            gain: GainSchedule::new(sample_rate),
            state: VoiceState::Idle,
        }
    }

    /// Begin a note. A strike on an already-sounding voice is a no-op:
    /// the held note sustains (legato), there is no re-attack.
    pub fn strike(&mut self, gain: f32) {
        if self.state == VoiceState::Sounding {
            return;
        }

        // A pending release ramp must not survive into the new schedule.
        self.gain.cancel_scheduled();
        self.gain.set_value(0.0);
        self.gain.ramp_to(gain, ATTACK_TIME);
        self.gain.ramp_to(SUSTAIN_RATIO * gain, DECAY_END - ATTACK_TIME);
        self.state = VoiceState::Sounding;
    }

    /// Fade the note out. No-op unless the voice is sounding, so repeated
    /// releases never restart the fade ramp.
    pub fn release(&mut self) {
        if self.state != VoiceState::Sounding {
            return;
        }

        self.gain.cancel_scheduled();
        self.gain.ramp_to(0.0, RELEASE_TIME);
        self.state = VoiceState::Releasing;
    }

    /// Retune the whole bank to `base_frequency * multiplier`. Called every
    /// frame while the voice sounds; independent of the gain schedule.
    pub fn set_pitch_bend(&mut self, multiplier: f32) {
        let hz = self.base_frequency * multiplier;
        self.current_frequency = hz;
        for osc in &mut self.oscillators {
            osc.set_frequency(hz);
        }
    }

    /// Fill a block with this voice's output. Oscillators advance even when
    /// the voice is silent; only the gain decides audibility.
    pub fn render_block(&mut self, out: &mut [f32]) {
        for sample in out.iter_mut() {
            let mut mixed = 0.0;
            for osc in &mut self.oscillators {
                mixed += osc.next_sample(self.sample_rate);
            }
            *sample = mixed * self.mix_weight * self.gain.next_sample();
        }

        if self.state == VoiceState::Releasing && self.gain.is_silent() {
            self.state = VoiceState::Idle;
        }
    }

    pub fn state(&self) -> VoiceState {
        self.state
    }

    pub fn is_sounding(&self) -> bool {
        self.state == VoiceState::Sounding
    }

    pub fn base_frequency(&self) -> f32 {
        self.base_frequency
    }

    /// Nominal bank frequency after the last pitch bend.
    pub fn current_frequency(&self) -> f32 {
        self.current_frequency
    }

    pub fn gain_level(&self) -> f32 {
        self.gain.value()
    }

    pub fn oscillator_detunes(&self) -> Vec<f32> {
        self.oscillators
            .iter()
            .map(OscillatorBlock::detune_cents)
            .collect()
    }

    #[cfg(test)]
    fn pending_ramps(&self) -> usize {
        self.gain.pending_segments()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RATE: f32 = 1_000.0;

    fn render_seconds(voice: &mut Voice, seconds: f32) {
        let mut block = vec![0.0f32; (seconds * SAMPLE_RATE) as usize];
        voice.render_block(&mut block);
    }

    #[test]
    fn detune_bank_is_symmetric() {
        let voice = Voice::with_bank(220.0, SAMPLE_RATE, Waveform::Sine, 3, 18.0);
        assert_eq!(voice.oscillator_detunes(), vec![-18.0, 0.0, 18.0]);
    }

    #[test]
    fn single_oscillator_degenerates_to_zero_detune() {
        let voice = Voice::with_bank(220.0, SAMPLE_RATE, Waveform::Sine, 1, 18.0);
        assert_eq!(voice.oscillator_detunes(), vec![0.0]);
    }

    #[test]
    fn even_bank_spans_full_spread() {
        let voice = Voice::with_bank(220.0, SAMPLE_RATE, Waveform::Sine, 4, 18.0);
        assert_eq!(voice.oscillator_detunes(), vec![-18.0, -6.0, 6.0, 18.0]);
    }

    #[test]
    fn strike_runs_attack_then_settles_at_sustain() {
        let mut voice = Voice::new(220.0, SAMPLE_RATE);
        voice.strike(0.8);
        assert_eq!(voice.state(), VoiceState::Sounding);

        render_seconds(&mut voice, 0.15);
        assert!((voice.gain_level() - 0.8).abs() < 0.02);

        render_seconds(&mut voice, 0.3);
        assert!((voice.gain_level() - 0.56).abs() < 0.01);
    }

    #[test]
    fn double_strike_does_not_restart_envelope() {
        let mut voice = Voice::new(220.0, SAMPLE_RATE);
        voice.strike(0.8);
        render_seconds(&mut voice, 0.4);
        let sustained = voice.gain_level();

        voice.strike(0.8);
        assert_eq!(voice.pending_ramps(), 0, "second strike queued ramps");
        render_seconds(&mut voice, 0.1);
        assert_eq!(voice.gain_level(), sustained);
    }

    #[test]
    fn release_fades_to_idle() {
        let mut voice = Voice::new(220.0, SAMPLE_RATE);
        voice.strike(0.8);
        render_seconds(&mut voice, 0.4);

        voice.release();
        assert_eq!(voice.state(), VoiceState::Releasing);

        render_seconds(&mut voice, 0.51);
        assert_eq!(voice.state(), VoiceState::Idle);
        assert!(voice.gain_level() <= 1e-6);
    }

    #[test]
    fn release_on_idle_voice_is_a_no_op() {
        let mut voice = Voice::new(220.0, SAMPLE_RATE);
        voice.release();
        assert_eq!(voice.state(), VoiceState::Idle);
        assert_eq!(voice.pending_ramps(), 0);
    }

    #[test]
    fn strike_during_release_cancels_the_fade() {
        let mut voice = Voice::new(220.0, SAMPLE_RATE);
        voice.strike(0.8);
        render_seconds(&mut voice, 0.4);
        voice.release();
        render_seconds(&mut voice, 0.2); // partway through the 0.5s fade

        voice.strike(0.8);
        assert_eq!(voice.state(), VoiceState::Sounding);

        // Clean climb toward the new attack target: no residual ramp to zero.
        let mut block = vec![0.0f32; 1];
        let mut previous = voice.gain_level();
        for _ in 0..((0.15 * SAMPLE_RATE) as usize) {
            voice.render_block(&mut block);
            let level = voice.gain_level();
            assert!(level >= previous - 1e-6, "gain dipped during re-attack");
            previous = level;
        }
        assert!((previous - 0.8).abs() < 0.02);
    }

    #[test]
    fn pitch_bend_retunes_without_touching_gain() {
        let mut voice = Voice::new(220.0, SAMPLE_RATE);
        voice.strike(0.8);
        render_seconds(&mut voice, 0.4);
        let sustained = voice.gain_level();

        voice.set_pitch_bend(2.1);
        assert!((voice.current_frequency() - 462.0).abs() < 1e-3);
        assert_eq!(voice.gain_level(), sustained);

        render_seconds(&mut voice, 0.05);
        assert_eq!(voice.gain_level(), sustained);
    }
}
