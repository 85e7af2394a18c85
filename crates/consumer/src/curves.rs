use ndarray::Array1;
use thiserror::Error;

use crate::{Bundle, ConsumerProblem, CurvePoint, OptimalBundle, SolveError};

/// Utility levels of the plotted indifference curves, relative to the
/// reference utility.
pub const LEVEL_MULTIPLIERS: [f64; 5] = [1.0 / 3.0, 2.0 / 3.0, 1.0, 4.0 / 3.0, 5.0 / 3.0];

/// Sampling settings for [`SolutionCurves`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveConfig {
    samples: usize,
    x_min: f64,
    margin: f64,
}

/// Errors that can occur when validating a [`CurveConfig`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CurveConfigError {
    #[error("samples must be at least 2")]
    Samples,

    #[error("x_min must be finite and positive")]
    XMin,

    #[error("margin must be finite and at least 1")]
    Margin,
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            samples: 1_000,
            x_min: 1e-10,
            margin: 1.1,
        }
    }
}

impl CurveConfig {
    /// Creates a validated config.
    ///
    /// - `samples`: number of evenly spaced x values
    /// - `x_min`: first x value, kept off zero where curves are singular
    /// - `margin`: viewport edge as a multiple of the larger budget intercept
    ///
    /// # Errors
    ///
    /// Returns an error if any setting is out of range.
    pub fn new(samples: usize, x_min: f64, margin: f64) -> Result<Self, CurveConfigError> {
        if samples < 2 {
            return Err(CurveConfigError::Samples);
        }
        if !x_min.is_finite() || x_min <= 0.0 {
            return Err(CurveConfigError::XMin);
        }
        if !margin.is_finite() || margin < 1.0 {
            return Err(CurveConfigError::Margin);
        }

        Ok(Self {
            samples,
            x_min,
            margin,
        })
    }

    #[must_use]
    pub fn samples(&self) -> usize {
        self.samples
    }

    #[must_use]
    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    #[must_use]
    pub fn margin(&self) -> f64 {
        self.margin
    }
}

/// One sampled indifference curve.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndifferenceCurve {
    /// Utility level of the curve.
    pub level: f64,
    /// `y` value at each sample of [`SolutionCurves::x`].
    pub y: Vec<CurvePoint>,
}

/// Everything an external renderer needs to draw a solved problem.
///
/// All curves share the `x` grid. The viewport is the square
/// `[0, limit] × [0, limit]`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolutionCurves {
    pub limit: f64,
    /// Bundle whose utility anchors the indifference curve levels.
    pub reference: Bundle,
    pub x: Vec<f64>,
    pub budget_line: Vec<f64>,
    pub indifference_curves: [IndifferenceCurve; 5],
}

impl SolutionCurves {
    /// Returns the x and y axis ranges of the square viewport.
    #[must_use]
    pub fn axis_limits(&self) -> [[f64; 2]; 2] {
        [[0.0, self.limit], [0.0, self.limit]]
    }
}

pub(crate) fn assemble(
    problem: &ConsumerProblem,
    config: &CurveConfig,
) -> Result<SolutionCurves, SolveError> {
    let reference = match problem.solve_optimum()? {
        OptimalBundle::Interior(bundle) | OptimalBundle::Corner(bundle) => bundle,
        OptimalBundle::Degenerate {
            x_intercept,
            y_intercept,
        } => Bundle::new(x_intercept / 2.0, y_intercept / 2.0),
    };
    let reference_utility = problem.utility(reference.x, reference.y);

    let (x_intercept, y_intercept) = problem.budget_intercepts();
    let limit = config.margin() * x_intercept.max(y_intercept);

    let x = Array1::linspace(config.x_min(), limit, config.samples()).to_vec();
    let budget_line = problem.budget_line(&x);

    let model = problem.utility_model();
    let indifference_curves = LEVEL_MULTIPLIERS.map(|multiplier| {
        let level = multiplier * reference_utility;
        IndifferenceCurve {
            level,
            y: model.indifference_curve(&x, level),
        }
    });

    Ok(SolutionCurves {
        limit,
        reference,
        x,
        budget_line,
        indifference_curves,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn config_validation() {
        assert_eq!(CurveConfig::new(1, 1e-10, 1.1), Err(CurveConfigError::Samples));
        assert_eq!(CurveConfig::new(10, 0.0, 1.1), Err(CurveConfigError::XMin));
        assert_eq!(CurveConfig::new(10, 1e-10, 0.9), Err(CurveConfigError::Margin));
        assert_eq!(CurveConfig::new(1_000, 1e-10, 1.1), Ok(CurveConfig::default()));
    }

    #[test]
    fn curves_bracket_the_optimal_utility() {
        let problem = ConsumerProblem::new(0.5, 0.0, 1.0, 2.0, 10.0).unwrap();
        let curves = problem.solution_curves().unwrap();

        assert_relative_eq!(curves.limit, 11.0);
        let [x_axis, y_axis] = curves.axis_limits();
        assert_eq!(x_axis, y_axis);
        assert_eq!(x_axis, [0.0, curves.limit]);
        assert_eq!(curves.x.len(), 1_000);
        assert_eq!(curves.budget_line.len(), 1_000);
        assert_relative_eq!(curves.x[0], 1e-10);
        assert_relative_eq!(curves.x[999], 11.0, max_relative = 1e-12);

        let optimum = problem.solve_optimum().unwrap().bundle().unwrap();
        assert_eq!(curves.reference, optimum);

        let utility = problem.utility(optimum.x, optimum.y);
        for (curve, multiplier) in curves.indifference_curves.iter().zip(LEVEL_MULTIPLIERS) {
            assert_relative_eq!(curve.level, multiplier * utility);
            assert_eq!(curve.y.len(), curves.x.len());
        }

        // The middle curve touches the budget line at the optimum.
        let middle = &curves.indifference_curves[2];
        let y = problem
            .utility_model()
            .indifference_point(optimum.x, middle.level)
            .value()
            .unwrap();
        assert_relative_eq!(y, optimum.y, max_relative = 1e-9);
    }

    #[test]
    fn degenerate_problem_uses_budget_midpoint() {
        let problem = ConsumerProblem::new(0.5, 1.0, 1.0, 1.0, 10.0).unwrap();
        let curves = problem.solution_curves().unwrap();

        assert_eq!(curves.reference, Bundle::new(5.0, 5.0));
        assert_relative_eq!(curves.indifference_curves[2].level, 5.0);

        // Linear indifference curves end at the x axis.
        let last = curves.indifference_curves[2].y.last().unwrap();
        assert_eq!(*last, CurvePoint::Undefined);
    }

    #[test]
    fn custom_sampling() {
        let problem = ConsumerProblem::new(0.3, -0.5, 1.0, 1.0, 4.0).unwrap();
        let config = CurveConfig::new(5, 0.5, 2.0).unwrap();
        let curves = problem.solution_curves_with(&config).unwrap();

        assert_relative_eq!(curves.limit, 8.0);
        assert_eq!(curves.x, [0.5, 2.375, 4.25, 6.125, 8.0]);
        assert_eq!(curves.budget_line, [3.5, 1.625, -0.25, -2.125, -4.0]);
    }

    #[test]
    fn tiny_p_levels_follow_the_optimum() {
        let problem = ConsumerProblem::new(0.5, 1e-12, 1.0, 1.0, 10.0).unwrap();
        let curves = problem.solution_curves().unwrap();

        assert_eq!(curves.reference, Bundle::new(5.0, 5.0));
        for (curve, multiplier) in curves.indifference_curves.iter().zip(LEVEL_MULTIPLIERS) {
            assert_relative_eq!(curve.level, multiplier * 5.0, max_relative = 1e-12);
        }

        // Near Cobb-Douglas, the curve exists over the whole grid.
        let middle = &curves.indifference_curves[2];
        for (&x, point) in curves.x.iter().zip(&middle.y) {
            let y = point.value().unwrap();
            assert_relative_eq!(problem.utility(x, y), 5.0, max_relative = 1e-9);
        }
    }

    #[test]
    fn large_negative_p_curves_are_finite() {
        let problem = ConsumerProblem::new(0.5, -200.0, 1.0, 1.0, 1e5).unwrap();
        let curves = problem.solution_curves().unwrap();

        assert_eq!(curves.reference, Bundle::new(5e4, 5e4));
        let middle = &curves.indifference_curves[2];
        assert_relative_eq!(middle.level, 5e4, max_relative = 1e-12);

        let defined: Vec<(f64, f64)> = curves
            .x
            .iter()
            .zip(&middle.y)
            .filter_map(|(&x, point)| point.value().map(|y| (x, y)))
            .collect();
        assert!(defined.len() > curves.x.len() / 4);

        for (x, y) in defined {
            assert!(x > 4.9e4, "curve should start near the kink, got x = {x}");
            assert_relative_eq!(problem.utility(x, y), middle.level, max_relative = 1e-9);
        }
    }

    #[test]
    fn inapplicable_problem_has_no_curves() {
        let problem = ConsumerProblem::new(0.5, 0.5, 1e-300, 1.0, 1e300).unwrap();
        assert!(problem.solution_curves().is_err());
    }
}
