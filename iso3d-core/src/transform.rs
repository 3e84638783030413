/// Affine transforms shared by points, paths and shapes, and rotation state
use crate::point::Point;

/// Scale factors, normalized from however many factors the caller gives.
///
/// - one factor scales every axis by it,
/// - two factors scale x and y and leave z alone,
/// - three factors scale each axis independently.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scale {
    Uniform(f64),
    Planar(f64, f64),
    Axes(f64, f64, f64),
}

impl Scale {
    /// Per-axis factors `(x, y, z)`
    pub fn factors(&self) -> (f64, f64, f64) {
        match *self {
            Scale::Uniform(f) => (f, f, f),
            Scale::Planar(dx, dy) => (dx, dy, 1.0),
            Scale::Axes(dx, dy, dz) => (dx, dy, dz),
        }
    }
}

impl From<f64> for Scale {
    fn from(f: f64) -> Self {
        Scale::Uniform(f)
    }
}

impl From<(f64, f64)> for Scale {
    fn from((dx, dy): (f64, f64)) -> Self {
        Scale::Planar(dx, dy)
    }
}

impl From<(f64, f64, f64)> for Scale {
    fn from((dx, dy, dz): (f64, f64, f64)) -> Self {
        Scale::Axes(dx, dy, dz)
    }
}

/// Value-returning affine transforms.
///
/// Every method leaves `self` untouched and builds a new value, so a shape
/// can be reused as a template for several scene instances.
pub trait Transform: Sized {
    fn translate(&self, dx: f64, dy: f64, dz: f64) -> Self;
    fn rotate_x(&self, origin: Point, angle: f64) -> Self;
    fn rotate_y(&self, origin: Point, angle: f64) -> Self;
    fn rotate_z(&self, origin: Point, angle: f64) -> Self;
    fn scale(&self, origin: Point, factors: impl Into<Scale>) -> Self;
}

impl Transform for Point {
    fn translate(&self, dx: f64, dy: f64, dz: f64) -> Self {
        Point::translate(self, dx, dy, dz)
    }

    fn rotate_x(&self, origin: Point, angle: f64) -> Self {
        Point::rotate_x(self, origin, angle)
    }

    fn rotate_y(&self, origin: Point, angle: f64) -> Self {
        Point::rotate_y(self, origin, angle)
    }

    fn rotate_z(&self, origin: Point, angle: f64) -> Self {
        Point::rotate_z(self, origin, angle)
    }

    fn scale(&self, origin: Point, factors: impl Into<Scale>) -> Self {
        Point::scale(self, origin, factors)
    }
}

/// Rotation state around three axes (in radians)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RotationState {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl RotationState {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    /// Rotate by delta amounts (in radians)
    pub fn rotate(&mut self, dx: f64, dy: f64, dz: f64) {
        self.x += dx;
        self.y += dy;
        self.z += dz;
    }

    /// Apply the rotation to `target` about `origin`, in order Z, Y, X
    pub fn apply<T: Transform>(&self, target: &T, origin: Point) -> T {
        target
            .rotate_z(origin, self.z)
            .rotate_y(origin, self.y)
            .rotate_x(origin, self.x)
    }
}
