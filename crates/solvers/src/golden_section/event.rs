/// An evaluated point: location and objective value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub objective: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, objective: f64) -> Self {
        Self { x, objective }
    }
}

/// Iteration event emitted after each bracket shrink.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,
    /// Outer bracket after the shrink.
    pub bracket: [f64; 2],
    /// Point evaluated in this iteration.
    pub point: Point,
    /// Best point seen so far, including `point`.
    pub best: Point,
}

/// Control actions supported by the golden section solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop and return the best point found so far.
    StopEarly,
}
