use thiserror::Error;
use tracing::info;

use crate::{
    Bundle, CurveConfig, OptimalBundle, ParameterError, Parameters, SolutionCurves, SolveError,
};

/// A solved problem ready for presentation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Report {
    pub bundle: Bundle,
    /// `true` if one good is not purchased at all.
    pub corner: bool,
    pub curves: SolutionCurves,
}

/// Every way a request can end without a unique optimal bundle.
///
/// Each variant maps to a distinct user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    InvalidParameter(#[from] ParameterError),

    #[error("unable to solve the consumer problem for these parameters")]
    SolverInapplicable(#[from] SolveError),

    #[error("all points on the budget line are optimal")]
    Degenerate { x_intercept: f64, y_intercept: f64 },
}

/// Validates `parameters`, solves the problem, and samples its curves.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] for out-of-domain inputs,
/// [`Error::Degenerate`] when every affordable bundle is optimal, and
/// [`Error::SolverInapplicable`] when no answer can be computed.
pub fn solve(parameters: &Parameters, config: &CurveConfig) -> Result<Report, Error> {
    let problem = parameters.problem()?;

    let (bundle, corner) = match problem.solve_optimum()? {
        OptimalBundle::Interior(bundle) => (bundle, false),
        OptimalBundle::Corner(bundle) => (bundle, true),
        OptimalBundle::Degenerate {
            x_intercept,
            y_intercept,
        } => {
            return Err(Error::Degenerate {
                x_intercept,
                y_intercept,
            });
        }
    };

    let curves = problem.solution_curves_with(config)?;
    info!(x = bundle.x, y = bundle.y, corner, "consumer problem solved");

    Ok(Report {
        bundle,
        corner,
        curves,
    })
}
