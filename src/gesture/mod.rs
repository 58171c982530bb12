//! Hand-gesture data model and the pure gesture-to-music mappers.
//!
//! Everything here is side-effect free: observations come in from an external
//! hand tracker, and these types decide what they mean musically. The synth
//! layer owns the consequences.

/// Pinch-distance evaluation with strike/release hysteresis.
pub mod classifier;
/// Landmarks, hand observations, and 3D distance.
pub mod landmark;
/// Wrist-displacement to pitch-bend mapping.
pub mod pitch;

pub use classifier::{GestureClassifier, GestureEvent};
pub use landmark::{distance, Hand, HandObservation, Landmark, ObservationError};
pub use pitch::PitchMapper;
