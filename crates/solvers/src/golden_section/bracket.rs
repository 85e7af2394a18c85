use super::{Config, Error};

/// Golden ratio φ = (1 + √5) / 2.
const PHI: f64 = 1.618_033_988_749_895;

/// Inverse golden ratio 1/φ = φ - 1 ≈ 0.618.
const INV_PHI: f64 = PHI - 1.0;

/// Outer bounds plus the two golden-ratio interior points.
#[derive(Debug, Clone, Copy)]
pub(super) struct GoldenBracket {
    left: f64,
    right: f64,
    pub(super) inner_left: f64,
    pub(super) inner_right: f64,
}

impl GoldenBracket {
    /// Creates a bracket, ordering the endpoints if needed.
    pub(super) fn new(bracket: [f64; 2]) -> Result<Self, Error> {
        let [a, b] = bracket;
        if !a.is_finite() || !b.is_finite() {
            return Err(Error::InvalidBracket { left: a, right: b });
        }

        let (left, right) = if a <= b { (a, b) } else { (b, a) };
        let width = right - left;
        Ok(Self {
            left,
            right,
            inner_left: left + (1.0 - INV_PHI) * width,
            inner_right: left + INV_PHI * width,
        })
    }

    pub(super) fn outer(&self) -> [f64; 2] {
        [self.left, self.right]
    }

    fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Discards the region right of `inner_right`.
    ///
    /// The old `inner_left` becomes the new `inner_right`; a fresh
    /// `inner_left` must be evaluated.
    pub(super) fn shrink_right(&mut self) {
        self.right = self.inner_right;
        self.inner_right = self.inner_left;
        self.inner_left = self.left + (1.0 - INV_PHI) * self.width();
    }

    /// Discards the region left of `inner_left`.
    ///
    /// The old `inner_right` becomes the new `inner_left`; a fresh
    /// `inner_right` must be evaluated.
    pub(super) fn shrink_left(&mut self) {
        self.left = self.inner_left;
        self.inner_left = self.inner_right;
        self.inner_right = self.left + INV_PHI * self.width();
    }

    pub(super) fn is_converged(&self, config: &Config) -> bool {
        let gap = (self.inner_right - self.inner_left).abs();
        let mid = 0.5 * (self.inner_left + self.inner_right);
        gap <= config.x_abs_tol() + config.x_rel_tol() * mid.abs()
    }
}
