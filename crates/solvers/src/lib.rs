//! Numerical solvers backing the CES consumer problem.
//!
//! The consumer crate prefers closed-form answers. When a closed form cannot
//! be represented in `f64` it falls back to the bounded one-dimensional search
//! provided here.
//!
//! - [`golden_section`] — derivative-free maximization of a unimodal objective
//!   over a bracketed interval
//! - [`Observer`] — receives solver events and optionally returns control actions

mod observer;

pub mod golden_section;

pub use observer::Observer;
