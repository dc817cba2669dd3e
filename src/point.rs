use serde::{Deserialize, Serialize};

/// Binary class label. `Positive` is the "big" category (class 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "i64")]
pub enum Label {
    Negative,
    Positive,
}

impl Label {
    /// Numeric class as written in data files.
    pub fn as_class(self) -> u8 {
        match self {
            Label::Negative => 0,
            Label::Positive => 1,
        }
    }
}

impl From<Label> for u8 {
    fn from(label: Label) -> Self {
        label.as_class()
    }
}

impl TryFrom<i64> for Label {
    type Error = String;

    fn try_from(class: i64) -> Result<Self, Self::Error> {
        match class {
            0 => Ok(Label::Negative),
            1 => Ok(Label::Positive),
            other => Err(format!("class {other} is not a binary label")),
        }
    }
}

/// A labeled point in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub class: Label,
}

impl Point {
    pub fn new(x: f64, y: f64, class: Label) -> Self {
        Point { x, y, class }
    }

    /// Same label, new coordinates.
    pub fn with_coords(&self, x: f64, y: f64) -> Self {
        Point { x, y, class: self.class }
    }
}

/// Ordered collection of points read from one data file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    points: Vec<Point>,
}

impl Dataset {
    pub fn new(points: Vec<Point>) -> Self {
        Dataset { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }
}

impl FromIterator<Point> for Dataset {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Dataset::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
