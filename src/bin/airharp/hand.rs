//! Keyboard-simulated hands.
//!
//! Produces the same `HandObservation`s a webcam hand tracker would, with
//! pinch distances and wrist height controlled by key presses. Terminals
//! don't report key releases reliably, so pinches toggle rather than hold.

use airharp::gesture::landmark::{FINGERS_PER_HAND, LANDMARK_COUNT};
use airharp::gesture::{Hand, HandObservation, Landmark};

/// Pinch distance while a finger is toggled closed (below strike threshold).
const PINCHED: f32 = 0.04;
/// Pinch distance while open (above release threshold).
const OPEN: f32 = 0.2;
/// Wrist movement per key press, normalized units. `y` grows downward.
const WRIST_STEP: f32 = 0.03;

pub struct SimulatedHand {
    hand: Hand,
    wrist_y: f32,
    pinched: [bool; FINGERS_PER_HAND],
}

impl SimulatedHand {
    pub fn new(hand: Hand) -> Self {
        Self {
            hand,
            wrist_y: 0.5,
            pinched: [false; FINGERS_PER_HAND],
        }
    }

    pub fn toggle_finger(&mut self, finger: usize) {
        if finger < FINGERS_PER_HAND {
            self.pinched[finger] = !self.pinched[finger];
        }
    }

    pub fn open_all(&mut self) {
        self.pinched = [false; FINGERS_PER_HAND];
    }

    pub fn raise(&mut self) {
        self.wrist_y = (self.wrist_y - WRIST_STEP).max(0.0);
    }

    pub fn lower(&mut self) {
        self.wrist_y = (self.wrist_y + WRIST_STEP).min(1.0);
    }

    pub fn wrist_y(&self) -> f32 {
        self.wrist_y
    }

    pub fn pinched(&self) -> &[bool; FINGERS_PER_HAND] {
        &self.pinched
    }

    /// Build this frame's observation: thumb fixed mid-frame, fingertips at
    /// their toggled pinch distance, wrist at the controlled height.
    pub fn observation(&self) -> HandObservation {
        let mut landmarks = vec![Landmark::new(0.5, 0.5, 0.0); LANDMARK_COUNT];
        landmarks[0] = Landmark::new(0.5, self.wrist_y, 0.0);

        for (finger, &closed) in self.pinched.iter().enumerate() {
            let d = if closed { PINCHED } else { OPEN };
            landmarks[8 + 4 * finger] = Landmark::new(0.5 + d, 0.5, 0.0);
        }

        // 21 landmarks by construction.
        HandObservation::from_landmarks(self.hand, &landmarks).expect("valid landmark count")
    }
}
