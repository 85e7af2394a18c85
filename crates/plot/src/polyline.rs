//! Conversion from sampled curves to drawable polylines.

use ces_consumer::{CurvePoint, SolutionCurves};

/// A named set of connected line segments.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    pub name: String,
    pub segments: Vec<Vec<[f64; 2]>>,
}

/// Splits a sampled curve into runs of consecutive defined points.
///
/// Undefined samples break the curve, and points with `y` outside
/// `[0, limit]` are dropped so lines stay inside the viewport.
#[must_use]
pub fn segments(x: &[f64], y: &[CurvePoint], limit: f64) -> Vec<Vec<[f64; 2]>> {
    let mut segments = Vec::new();
    let mut current = Vec::new();

    for (&x, point) in x.iter().zip(y) {
        match point.value() {
            Some(y) if (0.0..=limit).contains(&y) => current.push([x, y]),
            _ => {
                if !current.is_empty() {
                    segments.push(std::mem::take(&mut current));
                }
            }
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }

    segments
}

/// Returns the budget line followed by each indifference curve.
#[must_use]
pub fn traces(curves: &SolutionCurves) -> Vec<Trace> {
    let budget: Vec<CurvePoint> = curves
        .budget_line
        .iter()
        .map(|&y| CurvePoint::Defined(y))
        .collect();

    let mut traces = vec![Trace {
        name: "Budget line".to_owned(),
        segments: segments(&curves.x, &budget, curves.limit),
    }];

    traces.extend(curves.indifference_curves.iter().map(|curve| Trace {
        name: format!("U = {:.2}", curve.level),
        segments: segments(&curves.x, &curve.y, curves.limit),
    }));

    traces
}
