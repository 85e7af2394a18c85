use crate::{
    Parameter, ParameterError, TangencyCondition,
    constraint::{AtMostOne, OpenUnitInterval},
};

/// A CES utility function with fixed share `a` and substitution `p`.
///
/// - `p = 0` is the Cobb-Douglas case, evaluated exactly as `x^a · y^(1-a)`.
/// - `p = 1` is perfect substitutes, `a·x + (1-a)·y`.
/// - Every other `p < 1` uses `(a·x^p + (1-a)·y^p)^(1/p)`.
///
/// Inputs are expected to be non-negative; the model does not clamp.
///
/// The general case is evaluated as `s·U(x/s, y/s)` with `s = max(x, y)`,
/// which stays accurate for `p` near zero and for large negative `p` where
/// `x^p` alone would round to one or overflow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CesUtility {
    a: f64,
    p: f64,
}

impl CesUtility {
    /// Creates a utility function.
    ///
    /// # Errors
    ///
    /// Returns an error if `a` is not strictly between 0 and 1, or if `p` is
    /// greater than 1 or not finite.
    pub fn new(a: f64, p: f64) -> Result<Self, ParameterError> {
        let a = Parameter::A.constrain::<OpenUnitInterval>(a)?.into_inner();
        let p = Parameter::P.constrain::<AtMostOne>(p)?.into_inner();
        Ok(Self { a, p })
    }

    #[must_use]
    pub fn a(&self) -> f64 {
        self.a
    }

    #[must_use]
    pub fn p(&self) -> f64 {
        self.p
    }

    /// Returns `true` for the Cobb-Douglas case `p = 0`.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_cobb_douglas(&self) -> bool {
        self.p == 0.0
    }

    /// Returns `true` for the perfect-substitutes case `p = 1`.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_linear(&self) -> bool {
        self.p == 1.0
    }

    /// Evaluates `U(x, y)`.
    #[must_use]
    pub fn evaluate(&self, x: f64, y: f64) -> f64 {
        let Self { a, p } = *self;
        if self.is_cobb_douglas() {
            return x.powf(a) * y.powf(1.0 - a);
        }
        if self.is_linear() {
            return a * x + (1.0 - a) * y;
        }

        let scale = x.max(y);
        if !(x >= 0.0 && y >= 0.0 && scale.is_finite()) {
            return (a * x.powf(p) + (1.0 - a) * y.powf(p)).powf(p.recip());
        }
        if scale <= 0.0 {
            return 0.0;
        }

        scale * (self.log_weighted_sum(x / scale, y / scale) / p).exp()
    }

    /// Returns the partial derivatives `(∂U/∂x, ∂U/∂y)` at `(x, y)`.
    #[must_use]
    pub fn marginal_utility(&self, x: f64, y: f64) -> (f64, f64) {
        let Self { a, p } = *self;
        // ∂U/∂x = a·(U/x)^(1-p), which also covers p = 0 and p = 1.
        let u = self.evaluate(x, y);
        (
            a * (u / x).powf(1.0 - p),
            (1.0 - a) * (u / y).powf(1.0 - p),
        )
    }

    /// Returns the tangency condition `MRS(x, y) = px / py`.
    #[must_use]
    pub fn tangency_condition(&self, px: f64, py: f64) -> TangencyCondition {
        TangencyCondition::new(*self, px / py)
    }

    /// Samples the indifference curve `U(x, y) = target` at each `x`.
    ///
    /// The output has the same length and order as `x_values`. Points where
    /// the curve does not extend are [`CurvePoint::Undefined`].
    #[must_use]
    pub fn indifference_curve(&self, x_values: &[f64], target: f64) -> Vec<CurvePoint> {
        x_values
            .iter()
            .map(|&x| self.indifference_point(x, target))
            .collect()
    }

    /// Solves `U(x, y) = target` for `y` at a single `x`.
    ///
    /// Undefined wherever `target^p - a·x^p` is not positive.
    #[must_use]
    pub fn indifference_point(&self, x: f64, target: f64) -> CurvePoint {
        let Self { a, p } = *self;
        if self.is_cobb_douglas() {
            return CurvePoint::from_value((target * x.powf(-a)).powf((1.0 - a).recip()));
        }
        if self.is_linear() {
            let y = (target - a * x) / (1.0 - a);
            return if y > 0.0 {
                CurvePoint::from_value(y)
            } else {
                CurvePoint::Undefined
            };
        }

        // y = c·(1 + shift)^(1/p), where 1 + shift = (1 - a·(x/c)^p) / (1 - a).
        let shift = -a * pow_m1(x / target, p) / (1.0 - a);
        if shift > -1.0 {
            CurvePoint::from_value(target * (shift.ln_1p() / p).exp())
        } else {
            CurvePoint::Undefined
        }
    }

    /// Returns `ln(a·u^p + (1-a)·v^p)` for `u, v` in `[0, 1]`.
    fn log_weighted_sum(&self, u: f64, v: f64) -> f64 {
        let Self { a, p } = *self;
        let t = a * pow_m1(u, p) + (1.0 - a) * pow_m1(v, p);
        if t.is_finite() {
            return t.ln_1p();
        }

        // A power overflowed; combine the two terms in log space.
        let wu = a.ln() + p * u.ln();
        let wv = (1.0 - a).ln() + p * v.ln();
        let (hi, lo) = if wu >= wv { (wu, wv) } else { (wv, wu) };
        hi + (lo - hi).exp().ln_1p()
    }
}

/// Returns `r^p - 1`, using `exp_m1` when `r^p` is close to one.
fn pow_m1(r: f64, p: f64) -> f64 {
    let exponent = p * r.ln();
    if exponent.abs() < 0.5 {
        exponent.exp_m1()
    } else {
        r.powf(p) - 1.0
    }
}

/// A sampled `y` value that may not exist.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "Option<f64>", into = "Option<f64>")
)]
pub enum CurvePoint {
    Defined(f64),
    /// The curve does not reach this `x`.
    Undefined,
}

impl CurvePoint {
    /// Wraps a finite, non-negative value; anything else is undefined.
    fn from_value(y: f64) -> Self {
        if y.is_finite() && y >= 0.0 {
            Self::Defined(y)
        } else {
            Self::Undefined
        }
    }

    #[must_use]
    pub fn value(self) -> Option<f64> {
        match self {
            Self::Defined(y) => Some(y),
            Self::Undefined => None,
        }
    }

    #[must_use]
    pub fn is_defined(self) -> bool {
        matches!(self, Self::Defined(_))
    }
}

impl From<CurvePoint> for Option<f64> {
    fn from(point: CurvePoint) -> Self {
        point.value()
    }
}

impl From<Option<f64>> for CurvePoint {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Self::Undefined, Self::Defined)
    }
}
