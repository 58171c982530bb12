/// Largest wrist displacement fed into the bend formula (normalized units).
pub const MAX_BEND: f32 = 1.0;

/// Fixed scaling applied to the bend term.
pub const BEND_GAIN: f32 = 3.0;

/// Maps wrist displacement since strike onto a frequency multiplier.
///
/// `multiplier = (1 - folded_delta) * BEND_GAIN`, where `folded_delta` is the
/// raw `wrist.y - wrist_at_strike.y` saturated by folding: displacement
/// beyond `±MAX_BEND` is reduced by exactly `MAX_BEND`, not clipped to it.
/// Both constants and the wrap-once fold reproduce the observed behavior of
/// the source instrument verbatim; they were tuned by ear, so there is no
/// musical model to derive them from.
///
/// `y` grows downward in tracker image space, so raising the wrist shrinks
/// `wrist.y` and raises the multiplier.
pub struct PitchMapper {
    max_bend: f32,
    gain: f32,
}

impl Default for PitchMapper {
    fn default() -> Self {
        Self::new()
    }
}

impl PitchMapper {
    pub fn new() -> Self {
        Self {
            max_bend: MAX_BEND,
            gain: BEND_GAIN,
        }
    }

    /// Frequency multiplier for a sounding voice, given the wrist height
    /// captured at its strike and the current wrist height.
    pub fn bend_multiplier(&self, wrist_at_strike_y: f32, wrist_y: f32) -> f32 {
        let raw = wrist_y - wrist_at_strike_y;
        (1.0 - self.fold(raw)) * self.gain
    }

    /// Wrap-once saturation: excess beyond the limit is folded back by
    /// exactly the limit amount.
    fn fold(&self, delta: f32) -> f32 {
        if delta > self.max_bend {
            delta - self.max_bend
        } else if delta < -self.max_bend {
            delta + self.max_bend
        } else {
            delta
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neutral_wrist_gives_gain_multiplier() {
        let m = PitchMapper::new();
        assert!((m.bend_multiplier(0.5, 0.5) - 3.0).abs() < 1e-6);
    }

    #[test]
    fn in_range_delta_passes_through() {
        let m = PitchMapper::new();
        // delta = -0.3 -> (1 - (-0.3)) * 3 = 3.9
        assert!((m.bend_multiplier(0.4, 0.1) - 3.9).abs() < 1e-6);
    }

    #[test]
    fn excess_folds_back_instead_of_clipping() {
        let m = PitchMapper::new();
        // delta = 1.3 exceeds the 1.0 limit by 0.3; folded delta is 0.3,
        // not 1.0 (hard clip) and not 1.3 (unclamped).
        let multiplier = m.bend_multiplier(0.5, 1.8);
        assert!((multiplier - 2.1).abs() < 1e-6, "got {multiplier}");
    }

    #[test]
    fn negative_excess_folds_symmetrically() {
        let m = PitchMapper::new();
        // delta = -1.4 -> folded to -0.4 -> (1 + 0.4) * 3 = 4.2
        let multiplier = m.bend_multiplier(1.8, 0.4);
        assert!((multiplier - 4.2).abs() < 1e-6, "got {multiplier}");
    }
}
