//! Utility maximization for a two-good consumer with CES preferences.
//!
//! The consumer chooses a bundle `(x, y)` to maximize
//!
//! ```text
//! U(x, y) = (a·x^p + (1-a)·y^p)^(1/p)      (p ≠ 0)
//! U(x, y) = x^a · y^(1-a)                  (p = 0, Cobb-Douglas)
//! ```
//!
//! subject to `px·x + py·y = m`. Solutions come from closed forms chosen per
//! value of `p`, with a bounded numeric search only when a closed form cannot
//! be represented in `f64`.
//!
//! - [`CesUtility`] — evaluation, marginal utilities, the tangency condition,
//!   and indifference curves
//! - [`ConsumerProblem`] — budget line, intercepts, and the optimal bundle
//! - [`SolutionCurves`] — sampled curves for an external renderer
//! - [`solve`] — one-call entry point for front ends
//!
//! # Example
//!
//! ```
//! use ces_consumer::{Bundle, ConsumerProblem, OptimalBundle};
//!
//! let problem = ConsumerProblem::new(0.5, 0.0, 1.0, 1.0, 10.0).unwrap();
//! assert_eq!(
//!     problem.solve_optimum().unwrap(),
//!     OptimalBundle::Interior(Bundle::new(5.0, 5.0)),
//! );
//! ```
//!
//! # Features
//!
//! - `serde` — derives `Serialize`/`Deserialize` for [`Parameters`] and the
//!   solution records.

pub mod constraint;

mod bundle;
mod curves;
mod parameters;
mod problem;
mod solve;
mod tangency;
mod utility;

pub use bundle::{Bundle, OptimalBundle};
pub use curves::{
    CurveConfig, CurveConfigError, IndifferenceCurve, LEVEL_MULTIPLIERS, SolutionCurves,
};
pub use parameters::{Parameter, ParameterError, Parameters};
pub use problem::{ConsumerProblem, SolveError};
pub use solve::{Error, Report, solve};
pub use tangency::{ExpansionPath, TangencyCondition};
pub use utility::{CesUtility, CurvePoint};
