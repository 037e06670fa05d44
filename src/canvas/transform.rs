use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A point in either screen space or canvas space.
///
/// The same struct is used for both spaces; which space a value lives in is a
/// matter of where it came from. [`to_canvas`] and [`to_screen`] convert
/// between them.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Clamps both axes to zero or above. Stage positions are never negative.
    pub fn clamped_non_negative(self) -> Self {
        Self {
            x: self.x.max(0.0),
            y: self.y.max(0.0),
        }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Converts a screen-space pointer position into canvas space.
///
/// `origin` is the top-left corner of the canvas element's bounding box in
/// screen coordinates. The pan offset is deliberately absent from this
/// formula: panning translates the rendered layer, not the pointer math
/// baseline. Callers that track a drag subtract their own grab offset from
/// the result.
///
/// `zoom` is always positive because [`Viewport`](super::Viewport) clamps it
/// to a positive range, so the division cannot blow up.
pub fn to_canvas(screen: Point, origin: Point, zoom: f64) -> Point {
    Point::new((screen.x - origin.x) / zoom, (screen.y - origin.y) / zoom)
}

/// Inverse of [`to_canvas`]. Only rendering needs this direction.
pub fn to_screen(canvas: Point, origin: Point, zoom: f64) -> Point {
    Point::new(canvas.x * zoom + origin.x, canvas.y * zoom + origin.y)
}
