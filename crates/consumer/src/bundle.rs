/// Quantities of good X and good Y.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bundle {
    pub x: f64,
    pub y: f64,
}

impl Bundle {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The utility-maximizing choice on the budget line.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "kind", rename_all = "snake_case")
)]
pub enum OptimalBundle {
    /// Tangency point with both goods purchased.
    Interior(Bundle),

    /// All income spent on one good; the other coordinate is zero.
    Corner(Bundle),

    /// Every bundle on the budget line is optimal.
    ///
    /// Carries the endpoints of the optimal segment.
    Degenerate { x_intercept: f64, y_intercept: f64 },
}

impl OptimalBundle {
    /// Returns the unique optimal bundle, or `None` when degenerate.
    #[must_use]
    pub fn bundle(&self) -> Option<Bundle> {
        match self {
            Self::Interior(bundle) | Self::Corner(bundle) => Some(*bundle),
            Self::Degenerate { .. } => None,
        }
    }

    #[must_use]
    pub fn is_corner(&self) -> bool {
        matches!(self, Self::Corner(_))
    }
}
