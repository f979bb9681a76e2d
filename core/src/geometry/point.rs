use super::{ApproxEq, Point2};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A sketch point in canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point reflection of `self` through `origin`: `O + (O - P)`
    pub fn symmetric_about(&self, origin: &Point) -> Point {
        Point::new(origin.x + (origin.x - self.x), origin.y + (origin.y - self.y))
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        nalgebra::distance(&self.to_na(), &other.to_na())
    }

    pub fn to_na(&self) -> Point2 {
        Point2::new(self.x, self.y)
    }
}

impl From<Point2> for Point {
    fn from(p: Point2) -> Self {
        Self::new(p.x, p.y)
    }
}

impl ApproxEq for Point {
    fn approx_eq(&self, other: &Self) -> bool {
        self.to_na().approx_eq(&other.to_na())
    }
}

/// Coordinate label, e.g. `(100, 50)`
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
