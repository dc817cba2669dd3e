use serde::{Deserialize, Serialize};

use crate::point::Label;

/// Fixed linear decision rules, one per coordinate space.
///
/// A point is predicted [`Label::Positive`] only when it lies strictly above the
/// boundary line; points exactly on the line are [`Label::Negative`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rule {
    /// Raw coordinates, boundary `y = -x + 70000`.
    Original,
    /// Unit-square coordinates, boundary `y = -x + 1`.
    Normalized,
}

impl Rule {
    /// Boundary height at `x`.
    pub fn boundary(self, x: f64) -> f64 {
        match self {
            Rule::Original => -x + 70000.0,
            Rule::Normalized => -x + 1.0,
        }
    }

    pub fn predict(self, x: f64, y: f64) -> Label {
        if y > self.boundary(x) {
            Label::Positive
        } else {
            Label::Negative
        }
    }

    /// Tag used in report headings.
    pub fn space(self) -> &'static str {
        match self {
            Rule::Original => "Original",
            Rule::Normalized => "Normalized",
        }
    }

    /// Boundary as printed in the report legend.
    ///
    /// The original-space text is a fitted approximation and does not match the line
    /// [`Rule::predict`] evaluates.
    pub fn description(self) -> &'static str {
        match self {
            Rule::Original => {
                "y > -2.22*x + 107643 → Big Car (1), y ≤ -2.22*x + 107643 → Small Car (0)"
            }
            Rule::Normalized => "y > -x + 1 → Big Car (1), y ≤ -x + 1 → Small Car (0)",
        }
    }
}
