//! Plotting for solved CES consumer problems.
//!
//! [`polyline`] turns a [`SolutionCurves`] record into drawable line segments
//! and has no GUI dependencies.
//!
//! # Features
//!
//! - `plot` — Enables [`SolutionPlot`], a blocking egui window that draws the
//!   budget line, the five indifference curves, and the optimum.
//!   This feature adds dependencies on `eframe` and `egui_plot`.
//!
//! [`SolutionCurves`]: ces_consumer::SolutionCurves

pub mod polyline;

#[cfg(feature = "plot")]
mod app;

#[cfg(feature = "plot")]
pub use app::SolutionPlot;
