/*
Pinch Hysteresis
================

A finger strikes its note when its tip closes on the thumb tip, and releases
when it opens again. Using one threshold for both directions makes the note
chatter whenever the measured distance hovers near it, because landmark
estimates jitter frame to frame. Two thresholds with a gap between them fix
that:

    distance
      0.12 ──────────────  release threshold
            (inert band: no transitions either way)
      0.07 ──────────────  strike threshold

A strike fires only when the distance drops below 0.07 while the voice is
silent; a release fires only when it rises above 0.12 while the voice is
sounding. Inside the band, and on frames that merely confirm the current
state, nothing happens. The gap is a required behavior, not a tuning choice.
*/

/// Pinch distance below which a silent voice strikes (normalized units).
pub const STRIKE_THRESHOLD: f32 = 0.07;

/// Pinch distance above which a sounding voice releases.
pub const RELEASE_THRESHOLD: f32 = 0.12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureEvent {
    Strike,
    Release,
}

pub struct GestureClassifier {
    strike_threshold: f32,
    release_threshold: f32,
}

impl Default for GestureClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureClassifier {
    pub fn new() -> Self {
        Self::with_thresholds(STRIKE_THRESHOLD, RELEASE_THRESHOLD)
    }

    /// Custom thresholds; `strike` must stay below `release` to keep the
    /// hysteresis band.
    pub fn with_thresholds(strike: f32, release: f32) -> Self {
        debug_assert!(strike < release);
        Self {
            strike_threshold: strike,
            release_threshold: release,
        }
    }

    /// Decide this frame's transition for one finger.
    ///
    /// `sounding` is the voice's current state as seen by the control loop;
    /// the classifier itself is stateless.
    pub fn classify(&self, pinch_distance: f32, sounding: bool) -> Option<GestureEvent> {
        if pinch_distance < self.strike_threshold && !sounding {
            Some(GestureEvent::Strike)
        } else if pinch_distance > self.release_threshold && sounding {
            Some(GestureEvent::Release)
        } else {
            None
        }
    }
}
