use crate::CesUtility;

/// Relative tolerance for treating `a/(1-a)` and `px/py` as equal when
/// utility is linear.
const DEGENERACY_TOL: f64 = 1e-12;

/// The tangency condition `∂U/∂x ÷ ∂U/∂y = px / py` for a CES utility.
///
/// Differentiating the CES expression and simplifying gives a marginal rate
/// of substitution that depends only on the ratio `x / y`:
///
/// ```text
/// MRS(x, y) = a / (1 - a) · (x / y)^(p - 1)
/// ```
///
/// which also holds at `p = 0`. The condition therefore pins down a ray
/// through the origin rather than a point; the budget constraint selects the
/// point on that ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TangencyCondition {
    utility: CesUtility,
    price_ratio: f64,
}

/// Where the tangency condition holds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExpansionPath {
    /// On the ray `x = ratio · y`, with `ratio` positive and finite.
    Ray(f64),
    /// At every bundle: linear utility parallel to the budget line.
    Everywhere,
    /// At no bundle: linear utility steeper or flatter than the budget line.
    Nowhere,
    /// A unique ray exists but its ratio over- or underflows `f64`.
    Unresolved,
}

impl TangencyCondition {
    pub(crate) fn new(utility: CesUtility, price_ratio: f64) -> Self {
        Self {
            utility,
            price_ratio,
        }
    }

    /// Returns `px / py`.
    #[must_use]
    pub fn price_ratio(&self) -> f64 {
        self.price_ratio
    }

    /// Marginal rate of substitution at `(x, y)`.
    #[must_use]
    pub fn mrs(&self, x: f64, y: f64) -> f64 {
        let (a, p) = (self.utility.a(), self.utility.p());
        a / (1.0 - a) * (x / y).powf(p - 1.0)
    }

    /// Returns `MRS(x, y) - px / py`, zero where the condition holds.
    #[must_use]
    pub fn residual(&self, x: f64, y: f64) -> f64 {
        self.mrs(x, y) - self.price_ratio
    }

    /// Solves the condition for the ratio `x / y`.
    #[must_use]
    pub fn expansion_path(&self) -> ExpansionPath {
        let (a, p) = (self.utility.a(), self.utility.p());
        let weight_ratio = a / (1.0 - a);

        if self.utility.is_linear() {
            let scale = weight_ratio.max(self.price_ratio);
            return if (weight_ratio - self.price_ratio).abs() <= DEGENERACY_TOL * scale {
                ExpansionPath::Everywhere
            } else {
                ExpansionPath::Nowhere
            };
        }

        let ratio = (self.price_ratio / weight_ratio).powf((p - 1.0).recip());
        if ratio.is_finite() && ratio > 0.0 {
            ExpansionPath::Ray(ratio)
        } else {
            ExpansionPath::Unresolved
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn mrs_is_ratio_of_marginal_utilities() {
        for (a, p) in [(0.5, 0.0), (0.3, 0.5), (0.8, -3.0), (0.3, 1.0)] {
            let utility = CesUtility::new(a, p).unwrap();
            let condition = utility.tangency_condition(1.0, 1.0);
            for (x, y) in [(1.0, 2.0), (5.0, 0.5)] {
                let (ux, uy) = utility.marginal_utility(x, y);
                assert_relative_eq!(condition.mrs(x, y), ux / uy, max_relative = 1e-12);
            }
        }
    }

    #[test]
    fn residual_vanishes_on_the_ray() {
        let utility = CesUtility::new(0.4, -0.5).unwrap();
        let condition = utility.tangency_condition(2.0, 3.0);

        let ExpansionPath::Ray(ratio) = condition.expansion_path() else {
            panic!("general CES should have a unique ray");
        };

        for y in [0.1, 1.0, 42.0] {
            assert_relative_eq!(condition.residual(ratio * y, y), 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn cobb_douglas_ray_is_closed_form() {
        // x / y = a·py / ((1 - a)·px)
        let utility = CesUtility::new(0.25, 0.0).unwrap();
        let condition = utility.tangency_condition(2.0, 4.0);

        assert_eq!(condition.price_ratio(), 0.5);
        match condition.expansion_path() {
            ExpansionPath::Ray(ratio) => {
                assert_relative_eq!(ratio, 0.25 * 4.0 / (0.75 * 2.0), max_relative = 1e-12);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn linear_utility_is_everywhere_or_nowhere() {
        let utility = CesUtility::new(0.5, 1.0).unwrap();
        assert_eq!(
            utility.tangency_condition(3.0, 3.0).expansion_path(),
            ExpansionPath::Everywhere
        );
        assert_eq!(
            utility.tangency_condition(1.0, 3.0).expansion_path(),
            ExpansionPath::Nowhere
        );

        // a/px == (1-a)/py with inexact decimal inputs.
        let utility = CesUtility::new(0.3, 1.0).unwrap();
        assert_eq!(
            utility.tangency_condition(0.3, 0.7).expansion_path(),
            ExpansionPath::Everywhere
        );
    }

    #[test]
    fn extreme_ratio_is_unresolved() {
        // Exponent 1/(p-1) = -1000 drives the ratio below the smallest subnormal.
        let utility = CesUtility::new(0.3, 0.999).unwrap();
        assert_eq!(
            utility.tangency_condition(1.0, 1.0).expansion_path(),
            ExpansionPath::Unresolved
        );
    }
}
