use thiserror::Error;

/// Errors that can occur during golden section search.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("bracket [{left}, {right}] must have finite endpoints")]
    InvalidBracket { left: f64, right: f64 },

    #[error("objective is not finite at x = {x} (got {value})")]
    NonFiniteObjective { x: f64, value: f64 },
}
