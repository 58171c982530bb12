use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Landmarks per hand, as produced by MediaPipe-style hand trackers.
pub const LANDMARK_COUNT: usize = 21;

/// Playable fingers per hand (index, middle, ring, pinky).
pub const FINGERS_PER_HAND: usize = 4;

const WRIST: usize = 0;
const THUMB_TIP: usize = 4;
const FINGERTIPS: [usize; FINGERS_PER_HAND] = [8, 12, 16, 20];

/// A 3D point in normalized hand space. Origin and scale are defined by the
/// upstream landmark model; immutable once observed.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Landmark {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Euclidean distance in 3D landmark space.
pub fn distance(a: &Landmark, b: &Landmark) -> f32 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    let dz = a.z - b.z;
    (dx * dx + dy * dy + dz * dz).sqrt()
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hand {
    Left,
    Right,
}

impl Hand {
    pub fn index(self) -> usize {
        match self {
            Hand::Left => 0,
            Hand::Right => 1,
        }
    }
}

#[derive(Debug, Error)]
pub enum ObservationError {
    #[error("expected {LANDMARK_COUNT} landmarks per hand, got {0}")]
    WrongLandmarkCount(usize),
}

/// One hand's landmarks for one frame, validated at construction.
///
/// The tracker contract is 21 landmarks in MediaPipe order; anything else is
/// rejected here so downstream code never indexes invalid data.
#[derive(Debug, Clone)]
pub struct HandObservation {
    hand: Hand,
    landmarks: [Landmark; LANDMARK_COUNT],
}

impl HandObservation {
    pub fn from_landmarks(hand: Hand, landmarks: &[Landmark]) -> Result<Self, ObservationError> {
        let landmarks: [Landmark; LANDMARK_COUNT] = landmarks
            .try_into()
            .map_err(|_| ObservationError::WrongLandmarkCount(landmarks.len()))?;
        Ok(Self { hand, landmarks })
    }

    pub fn hand(&self) -> Hand {
        self.hand
    }

    pub fn wrist(&self) -> &Landmark {
        &self.landmarks[WRIST]
    }

    pub fn thumb_tip(&self) -> &Landmark {
        &self.landmarks[THUMB_TIP]
    }

    /// Fingertip of a playable finger: 0 = index through 3 = pinky.
    pub fn fingertip(&self, finger: usize) -> &Landmark {
        &self.landmarks[FINGERTIPS[finger]]
    }

    pub fn landmarks(&self) -> &[Landmark] {
        &self.landmarks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean_3d() {
        let a = Landmark::new(0.0, 0.0, 0.0);
        let b = Landmark::new(1.0, 2.0, 2.0);
        assert!((distance(&a, &b) - 3.0).abs() < 1e-6);
    }

    #[test]
    fn rejects_wrong_landmark_count() {
        let landmarks = vec![Landmark::new(0.0, 0.0, 0.0); 20];
        let result = HandObservation::from_landmarks(Hand::Left, &landmarks);
        assert!(matches!(
            result,
            Err(ObservationError::WrongLandmarkCount(20))
        ));
    }

    #[test]
    fn accessors_pick_mediapipe_indices() {
        let mut landmarks = vec![Landmark::new(0.0, 0.0, 0.0); LANDMARK_COUNT];
        landmarks[0] = Landmark::new(0.0, 0.9, 0.0);
        landmarks[4] = Landmark::new(0.1, 0.0, 0.0);
        landmarks[12] = Landmark::new(0.5, 0.5, 0.5);

        let obs = HandObservation::from_landmarks(Hand::Right, &landmarks).unwrap();
        assert_eq!(obs.wrist().y, 0.9);
        assert_eq!(obs.thumb_tip().x, 0.1);
        assert_eq!(obs.fingertip(1).z, 0.5);
    }
}
