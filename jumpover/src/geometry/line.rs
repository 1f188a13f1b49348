//! Points and straight lines in screen space (y grows downward).
//!
//! Angles are in degrees. `theta` measures counter-clockwise as seen on
//! screen and `rotate` turns points by the same convention, so a point on
//! the +x axis of `origin` rotated by `origin.theta(p)` lands on the ray
//! toward `p`.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use super::intersect::intersect_segments;
use super::tolerance::{norm2, normalize_angle, to_rad};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn squared_distance(&self, p: Point) -> f64 {
        let dx = p.x - self.x;
        let dy = p.y - self.y;
        dx * dx + dy * dy
    }

    pub fn distance(&self, p: Point) -> f64 {
        self.squared_distance(p).sqrt()
    }

    /// `self - p`
    pub fn difference(&self, p: Point) -> Point {
        Point::new(self.x - p.x, self.y - p.y)
    }

    pub fn offset(&self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }

    /// Move along the ray from `reference` through `self` by `distance`.
    /// Negative distances move back toward `reference`. A coincident
    /// reference moves along +x.
    ///
    /// Uses the unit vector rather than `theta` + cos/sin, so moves along
    /// an axis stay exact.
    pub fn move_from(&self, reference: Point, distance: f64) -> Point {
        let ((ux, uy), _) = norm2(self.x - reference.x, self.y - reference.y)
            .unwrap_or(((1.0, 0.0), 0.0));
        self.offset(ux * distance, uy * distance)
    }

    /// Angle of the vector `self -> p` in degrees, in `[0, 360)`.
    pub fn theta(&self, p: Point) -> f64 {
        let y = -(p.y - self.y);
        let x = p.x - self.x;
        let mut rad = y.atan2(x);
        if rad < 0.0 {
            rad += 2.0 * PI;
        }
        180.0 * rad / PI
    }

    pub fn rotate(&self, origin: Point, angle: f64) -> Point {
        if angle == 0.0 {
            return *self;
        }
        let a = to_rad(normalize_angle(-angle));
        let (sin, cos) = a.sin_cos();
        let dx = self.x - origin.x;
        let dy = self.y - origin.y;
        Point::new(cos * dx - sin * dy + origin.x, sin * dx + cos * dy + origin.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

/// A straight segment. `is_jump` is set only on the pieces the carver
/// replaces with a jump.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub start: Point,
    pub end: Point,
    pub is_jump: bool,
}

impl Line {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end, is_jump: false }
    }

    pub fn jump(start: Point, end: Point) -> Self {
        Self { start, end, is_jump: true }
    }

    pub fn midpoint(&self) -> Point {
        Point::new((self.start.x + self.end.x) / 2.0, (self.start.y + self.end.y) / 2.0)
    }

    pub fn squared_length(&self) -> f64 {
        self.start.squared_distance(self.end)
    }

    pub fn point_at(&self, t: f64) -> Point {
        Point::new(
            self.start.x + t * (self.end.x - self.start.x),
            self.start.y + t * (self.end.y - self.start.y),
        )
    }

    pub fn rotate(&self, origin: Point, angle: f64) -> Line {
        Line { start: self.start.rotate(origin, angle), end: self.end.rotate(origin, angle), is_jump: self.is_jump }
    }

    pub fn intersection(&self, other: &Line) -> Option<Point> {
        intersect_segments(
            self.start.x, self.start.y, self.end.x, self.end.y,
            other.start.x, other.start.y, other.end.x, other.end.y,
        )
        .point()
        .map(Point::from)
    }
}
