use std::cell::OnceCell;

use ces_solvers::golden_section::{self, Action, Config, Event};
use thiserror::Error;
use tracing::{debug, trace, warn};

use crate::{
    Bundle, CesUtility, CurveConfig, ExpansionPath, OptimalBundle, Parameter, ParameterError,
    Parameters, SolutionCurves, constraint::StrictlyPositive, curves,
};


/// The solver cannot produce an answer for these parameters.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SolveError {
    #[error("budget intercepts are not finite (x = {x_intercept}, y = {y_intercept})")]
    NonFiniteBudget { x_intercept: f64, y_intercept: f64 },

    #[error("budget line search failed: {0}")]
    Search(#[from] golden_section::Error),
}

/// A consumer maximizing CES utility subject to `px·x + py·y = m`.
///
/// Construction validates every parameter. The optimum is computed on first
/// request and cached, so repeated calls are cheap and return identical
/// results.
#[derive(Debug, Clone)]
pub struct ConsumerProblem {
    utility: CesUtility,
    px: f64,
    py: f64,
    m: f64,
    search: Config,
    optimum: OnceCell<Result<OptimalBundle, SolveError>>,
}

impl ConsumerProblem {
    /// Creates a consumer problem.
    ///
    /// # Errors
    ///
    /// Returns the first invalid parameter in the order `a, p, px, py, m`.
    pub fn new(a: f64, p: f64, px: f64, py: f64, m: f64) -> Result<Self, ParameterError> {
        let utility = CesUtility::new(a, p)?;
        let px = Parameter::Px.constrain::<StrictlyPositive>(px)?.into_inner();
        let py = Parameter::Py.constrain::<StrictlyPositive>(py)?.into_inner();
        let m = Parameter::M.constrain::<StrictlyPositive>(m)?.into_inner();

        Ok(Self {
            utility,
            px,
            py,
            m,
            search: Config::default(),
            optimum: OnceCell::new(),
        })
    }

    /// Creates a consumer problem from a [`Parameters`] record.
    ///
    /// # Errors
    ///
    /// See [`ConsumerProblem::new`].
    pub fn from_parameters(parameters: &Parameters) -> Result<Self, ParameterError> {
        parameters.problem()
    }

    /// Replaces the configuration of the numeric fallback search.
    #[must_use]
    pub fn with_search_config(self, search: Config) -> Self {
        Self {
            search,
            optimum: OnceCell::new(),
            ..self
        }
    }

    #[must_use]
    pub fn utility_model(&self) -> &CesUtility {
        &self.utility
    }

    #[must_use]
    pub fn price_x(&self) -> f64 {
        self.px
    }

    #[must_use]
    pub fn price_y(&self) -> f64 {
        self.py
    }

    #[must_use]
    pub fn income(&self) -> f64 {
        self.m
    }

    /// Evaluates the consumer's utility at `(x, y)`.
    #[must_use]
    pub fn utility(&self, x: f64, y: f64) -> f64 {
        self.utility.evaluate(x, y)
    }

    /// Returns the budget line `y = (m - px·x) / py` at a single `x`.
    #[must_use]
    pub fn budget_at(&self, x: f64) -> f64 {
        (self.m - self.px * x) / self.py
    }

    /// Evaluates the budget line at each `x`, preserving order.
    #[must_use]
    pub fn budget_line(&self, x_values: &[f64]) -> Vec<f64> {
        x_values.iter().map(|&x| self.budget_at(x)).collect()
    }

    /// Returns the `(x, y)` intercepts of the budget line, `(m/px, m/py)`.
    #[must_use]
    pub fn budget_intercepts(&self) -> (f64, f64) {
        (self.m / self.px, self.budget_at(0.0))
    }

    /// Returns the better of the two corner bundles.
    ///
    /// The x-corner wins only with strictly greater utility; ties go to the
    /// y-corner.
    #[must_use]
    pub fn best_corner(&self) -> Bundle {
        let (x_intercept, y_intercept) = self.budget_intercepts();
        let x_corner = Bundle::new(x_intercept, 0.0);
        let y_corner = Bundle::new(0.0, y_intercept);

        if self.utility_at(x_corner) > self.utility_at(y_corner) {
            x_corner
        } else {
            y_corner
        }
    }

    /// Returns the utility-maximizing bundle.
    ///
    /// The result is computed once and cached.
    ///
    /// # Errors
    ///
    /// Returns a [`SolveError`] if the budget is not representable or the
    /// numeric fallback cannot evaluate utility along the budget line.
    pub fn solve_optimum(&self) -> Result<OptimalBundle, SolveError> {
        *self.optimum.get_or_init(|| self.solve())
    }

    /// Samples the curves needed to draw the solution, using default settings.
    ///
    /// # Errors
    ///
    /// Returns a [`SolveError`] if the optimum cannot be computed.
    pub fn solution_curves(&self) -> Result<SolutionCurves, SolveError> {
        self.solution_curves_with(&CurveConfig::default())
    }

    /// Samples the curves needed to draw the solution.
    ///
    /// # Errors
    ///
    /// Returns a [`SolveError`] if the optimum cannot be computed.
    pub fn solution_curves_with(&self, config: &CurveConfig) -> Result<SolutionCurves, SolveError> {
        curves::assemble(self, config)
    }

    fn utility_at(&self, bundle: Bundle) -> f64 {
        self.utility.evaluate(bundle.x, bundle.y)
    }

    fn solve(&self) -> Result<OptimalBundle, SolveError> {
        let (x_intercept, y_intercept) = self.budget_intercepts();
        if !x_intercept.is_finite() || !y_intercept.is_finite() {
            return Err(SolveError::NonFiniteBudget {
                x_intercept,
                y_intercept,
            });
        }

        let tangency = self.utility.tangency_condition(self.px, self.py);
        let optimum = match tangency.expansion_path() {
            ExpansionPath::Everywhere => OptimalBundle::Degenerate {
                x_intercept,
                y_intercept,
            },
            ExpansionPath::Nowhere => OptimalBundle::Corner(self.best_corner()),
            ExpansionPath::Ray(ratio) => {
                if let Some(bundle) = self.bundle_on_ray(ratio) {
                    OptimalBundle::Interior(bundle)
                } else {
                    warn!(ratio, "tangency point is not representable, searching budget line");
                    self.search_budget_line()?
                }
            }
            ExpansionPath::Unresolved => {
                warn!(
                    a = self.utility.a(),
                    p = self.utility.p(),
                    "expansion path is not representable, searching budget line"
                );
                self.search_budget_line()?
            }
        };

        debug!(?optimum, "solved consumer problem");
        Ok(optimum)
    }

    /// Intersects the ray `x = ratio·y` with the budget line.
    fn bundle_on_ray(&self, ratio: f64) -> Option<Bundle> {
        let y = self.m / (self.px * ratio + self.py);
        let x = ratio * y;

        let interior = x.is_finite() && y.is_finite() && x > 0.0 && y > 0.0;
        interior.then(|| Bundle::new(x, y))
    }

    /// Maximizes utility along the budget line numerically.
    ///
    /// The search only sees the open segment, so its best point is compared
    /// against the better corner, which wins ties.
    fn search_budget_line(&self) -> Result<OptimalBundle, SolveError> {
        let (x_intercept, _) = self.budget_intercepts();
        let objective = |x: f64| self.utility(x, self.budget_at(x).max(0.0));

        let observer = |event: &Event| -> Option<Action> {
            trace!(
                iter = event.iter,
                x = event.best.x,
                utility = event.best.objective,
                "budget line search"
            );
            None
        };

        let solution =
            golden_section::maximize(objective, [0.0, x_intercept], &self.search, observer)?;
        debug!(
            status = ?solution.status,
            iters = solution.iters,
            x = solution.x,
            "budget line search finished"
        );

        let corner = self.best_corner();
        if self.utility_at(corner) >= solution.objective {
            Ok(OptimalBundle::Corner(corner))
        } else {
            let y = self.budget_at(solution.x).max(0.0);
            Ok(OptimalBundle::Interior(Bundle::new(solution.x, y)))
        }
    }
}
