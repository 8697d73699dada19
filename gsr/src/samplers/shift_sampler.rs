use rand::Rng;

/// Samples displacements uniformly from `[-max_shift, max_shift]` on both axes, independently.
#[derive(Clone, Copy, Debug)]
pub struct ShiftSampler {
    pub max_shift: f64,
}

impl ShiftSampler {
    pub fn new(max_shift: f64) -> Self {
        assert!(
            max_shift.is_finite() && max_shift >= 0.0,
            "max shift should be non-negative, got {max_shift}"
        );
        Self { max_shift }
    }

    /// Draws `dx` first, then `dy`.
    pub fn sample(&self, rng: &mut impl Rng) -> (f64, f64) {
        let dx = rng.random_range(-self.max_shift..=self.max_shift);
        let dy = rng.random_range(-self.max_shift..=self.max_shift);
        (dx, dy)
    }
}
