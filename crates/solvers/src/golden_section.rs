//! Golden section search for single-variable maximization.
//!
//! # Algorithm
//!
//! The search keeps two interior points positioned by the golden ratio,
//! compares their objectives, and shrinks the bracket toward the better one.
//! Each iteration reuses one interior point, so only one new evaluation is
//! needed per shrink.
//!
//! # When to Use
//!
//! - The objective is unimodal on the bracket
//! - Derivatives are unavailable or unreliable
//! - The optimum may sit at (or arbitrarily close to) a bracket endpoint
//!
//! The endpoints themselves are never evaluated. Callers that care about
//! boundary optima compare the returned interior best against the endpoints.
//!
//! # Observer Events
//!
//! One [`Event`] is emitted per shrink iteration. Observers can return
//! [`Action::StopEarly`] to halt with the best point found so far.

mod bracket;
mod config;
mod error;
mod event;
mod solution;


pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::{Action, Event, Point};
pub use solution::{Solution, Status};

use crate::Observer;

use bracket::GoldenBracket;

/// Finds the maximum of `objective` on `bracket` using golden section search.
///
/// # Errors
///
/// Returns an error if the bracket has a non-finite endpoint or the objective
/// is not finite at an evaluated point.
pub fn maximize<F, Obs>(
    objective: F,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Fn(f64) -> f64,
    Obs: Observer<Event, Action>,
{
    let mut bracket = GoldenBracket::new(bracket)?;

    let evaluate = |x: f64| {
        let value = objective(x);
        if value.is_finite() {
            Ok(Point::new(x, value))
        } else {
            Err(Error::NonFiniteObjective { x, value })
        }
    };

    let mut left = evaluate(bracket.inner_left)?;
    let mut right = evaluate(bracket.inner_right)?;
    let mut best = if left.objective >= right.objective {
        left
    } else {
        right
    };

    for iter in 1..=config.max_iters() {
        if bracket.is_converged(config) {
            return Ok(Solution::new(Status::Converged, best, iter - 1));
        }

        let point = if left.objective >= right.objective {
            // Maximum lies left of the right interior point.
            bracket.shrink_right();
            right = left;
            left = evaluate(bracket.inner_left)?;
            left
        } else {
            bracket.shrink_left();
            left = right;
            right = evaluate(bracket.inner_right)?;
            right
        };

        if point.objective > best.objective {
            best = point;
        }

        let event = Event {
            iter,
            bracket: bracket.outer(),
            point,
            best,
        };

        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution::new(Status::StoppedByObserver, best, iter));
        }
    }

    Ok(Solution::new(Status::MaxIters, best, config.max_iters()))
}

/// Finds the maximum of `objective` without observer support.
///
/// # Errors
///
/// See [`maximize`].
pub fn maximize_unobserved<F>(
    objective: F,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution, Error>
where
    F: Fn(f64) -> f64,
{
    maximize(objective, bracket, config, ())
}
