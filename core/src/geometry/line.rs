//! Line segment between two sketch points.
//!
//! The infinite line through the segment is kept in general form
//! `ax + by + c = 0`; its equations are evaluated through the formula engine.

use super::{Point, Vector2, EPSILON};
use crate::formula::{bind, Bindings, Expression, FormulaError};
use serde::{Deserialize, Serialize};

/// Distance from point `(x, y)` to the line `ax + by + c = 0`
///
/// ```text
/// |ax + by + c|
/// -------------
///  √(a² + b²)
/// ```
pub const DISTANCE_FORMULA: &str = "|ax + by + c| / √((a)**2 + (b)**2)";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub start: Point,
    pub end: Point,
}

impl Line {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Distance between the two endpoints
    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }

    /// `inf` for vertical lines, `NaN` for a degenerate segment
    pub fn slope(&self) -> f64 {
        (self.end.y - self.start.y) / (self.end.x - self.start.x)
    }

    /// General-form coefficients `(a, b, c)`.
    ///
    /// This is the slope form `m·x - y + (y1 - m·x1)` scaled by `x2 - x1`,
    /// which stays finite for vertical lines.
    pub fn coefficients(&self) -> (f64, f64, f64) {
        let (x1, y1) = (self.start.x, self.start.y);
        let (x2, y2) = (self.end.x, self.end.y);
        (y2 - y1, x1 - x2, x2 * y1 - x1 * y2)
    }

    pub fn midpoint(&self) -> Point {
        nalgebra::center(&self.start.to_na(), &self.end.to_na()).into()
    }

    /// The line's equation, e.g. `550x + -700y + -20000`
    pub fn formula(&self) -> Result<Expression, FormulaError> {
        let (a, b, c) = self.coefficients();
        self.equation(format!("{}x + {}y + {}", a, b, c))
    }

    /// `ax + by + c` at `point`: zero on the line, sign gives the side
    pub fn signed_value(&self, point: &Point) -> Result<f64, FormulaError> {
        self.formula()?.evaluate(&bind([("x", point.x), ("y", point.y)]))
    }

    /// y on the line for the given x
    pub fn y_at(&self, x: f64) -> Result<f64, FormulaError> {
        let (a, b, c) = self.coefficients();
        self.equation(format!("({}x - {}) / {}", -a, c, b))?
            .evaluate(&bind([("x", x)]))
    }

    /// x on the line for the given y
    pub fn x_at(&self, y: f64) -> Result<f64, FormulaError> {
        let (a, b, c) = self.coefficients();
        self.equation(format!("({}y - {}) / {}", -b, c, a))?
            .evaluate(&bind([("y", y)]))
    }

    /// Bindings for [`DISTANCE_FORMULA`]
    pub fn distance_bindings(&self, point: &Point) -> Bindings {
        let (a, b, c) = self.coefficients();
        bind([("a", a), ("b", b), ("c", c), ("x", point.x), ("y", point.y)])
    }

    /// Perpendicular distance from `point` to the infinite line
    pub fn distance_to_point(&self, point: &Point) -> Result<f64, FormulaError> {
        Expression::new(DISTANCE_FORMULA)?.evaluate(&self.distance_bindings(point))
    }

    /// [`DISTANCE_FORMULA`] with this line and `point` plugged in
    pub fn explain_distance(&self, point: &Point) -> Result<String, FormulaError> {
        Expression::new(DISTANCE_FORMULA)?.rewrite(&self.distance_bindings(point))
    }

    /// Whether `point` projects between the endpoints.
    ///
    /// Always false for a degenerate segment.
    pub fn projects_onto_segment(&self, point: &Point) -> bool {
        let start = self.start.to_na();
        let dir: Vector2 = self.end.to_na() - start;
        let len_sq = dir.norm_squared();

        if len_sq < EPSILON * EPSILON {
            return false;
        }

        let t = (point.to_na() - start).dot(&dir) / len_sq;
        (0.0..=1.0).contains(&t)
    }

    /// Distance from `point` to the segment.
    ///
    /// Points projecting beyond an end measure to the nearer endpoint; a
    /// degenerate segment measures to its start.
    pub fn segment_distance_to_point(&self, point: &Point) -> Result<f64, FormulaError> {
        if self.projects_onto_segment(point) {
            return self.distance_to_point(point);
        }
        Ok(self
            .start
            .distance_to(point)
            .min(self.end.distance_to(point)))
    }

    fn equation(&self, text: String) -> Result<Expression, FormulaError> {
        let (a, b, c) = self.coefficients();
        if !(a.is_finite() && b.is_finite() && c.is_finite()) {
            return Err(FormulaError::InvalidEquation(format!(
                "Non-finite line coefficients ({}, {}, {})",
                a, b, c
            )));
        }
        Expression::new(&text)
    }
}
