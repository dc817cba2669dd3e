//! Min-max scaling of point coordinates into the unit square.

use ndarray::{Array1, Array2, Axis};
use serde::{Deserialize, Serialize};

use crate::point::{Dataset, Point};

/// Observed range of one coordinate axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisBounds {
    pub min: f64,
    pub max: f64,
}

impl AxisBounds {
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Maps `v` to `(v - min) / (max - min)`.
    ///
    /// An axis with zero spread maps every value to `0.0` instead of dividing by zero.
    pub fn scale(&self, v: f64) -> f64 {
        let span = self.span();
        if span == 0.0 {
            0.0
        } else if span.is_finite() {
            (v - self.min) / span
        } else {
            // Spread overflowed f64; halving both ends keeps it representable.
            (v / 2.0 - self.min / 2.0) / (self.max / 2.0 - self.min / 2.0)
        }
    }
}

/// Per-axis bounds fitted over a whole dataset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub x: AxisBounds,
    pub y: AxisBounds,
}

fn coords(data: &Dataset) -> Array2<f64> {
    let flat: Vec<f64> = data.iter().flat_map(|p| [p.x, p.y]).collect();
    Array2::from_shape_vec((data.len(), 2), flat).expect("two coordinates per point")
}

impl Bounds {
    /// Scans the dataset for per-axis minima and maxima. `None` for an empty dataset.
    pub fn fit(data: &Dataset) -> Option<Self> {
        if data.is_empty() {
            return None;
        }
        let coords = coords(data);
        let mins: Array1<f64> = coords.fold_axis(Axis(0), f64::INFINITY, |&m, &v| m.min(v));
        let maxs: Array1<f64> = coords.fold_axis(Axis(0), f64::NEG_INFINITY, |&m, &v| m.max(v));

        Some(Bounds {
            x: AxisBounds {
                min: mins[0],
                max: maxs[0],
            },
            y: AxisBounds {
                min: mins[1],
                max: maxs[1],
            },
        })
    }

    /// Rescales every point with these bounds. Labels are carried over unchanged.
    pub fn apply(&self, data: &Dataset) -> Dataset {
        data.iter().map(|p| normalize_point(self, p)).collect()
    }
}

/// Min-max normalizes `data` against its own per-axis range.
///
/// An empty dataset comes back empty.
pub fn normalize(data: &Dataset) -> Dataset {
    match Bounds::fit(data) {
        Some(bounds) => bounds.apply(data),
        None => Dataset::default(),
    }
}

/// Convenience for a single point against already fitted bounds.
pub fn normalize_point(bounds: &Bounds, point: &Point) -> Point {
    point.with_coords(bounds.x.scale(point.x), bounds.y.scale(point.y))
}
