/// Points in scene space and their affine operations
use nalgebra::Point3;

use crate::transform::Scale;

/// A position in scene space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point {
    pub const ORIGIN: Point = Point::new(0.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn translate(&self, dx: f64, dy: f64, dz: f64) -> Self {
        Self::new(self.x + dx, self.y + dy, self.z + dz)
    }

    /// Scale about `origin`.
    ///
    /// A single factor scales every axis, two factors leave z untouched.
    /// See [`Scale`] for the exact policy.
    pub fn scale(&self, origin: Point, factors: impl Into<Scale>) -> Self {
        let (sx, sy, sz) = factors.into().factors();
        let p = self.translate(-origin.x, -origin.y, -origin.z);

        Self::new(p.x * sx, p.y * sy, p.z * sz).translate(origin.x, origin.y, origin.z)
    }

    /// Rotate about `origin` in the y-z plane
    pub fn rotate_x(&self, origin: Point, angle: f64) -> Self {
        let p = self.translate(-origin.x, -origin.y, -origin.z);
        let (sin, cos) = angle.sin_cos();

        let z = p.z * cos - p.y * sin;
        let y = p.z * sin + p.y * cos;

        Self::new(p.x, y, z).translate(origin.x, origin.y, origin.z)
    }

    /// Rotate about `origin` in the x-z plane
    pub fn rotate_y(&self, origin: Point, angle: f64) -> Self {
        let p = self.translate(-origin.x, -origin.y, -origin.z);
        let (sin, cos) = angle.sin_cos();

        let x = p.x * cos - p.z * sin;
        let z = p.x * sin + p.z * cos;

        Self::new(x, p.y, z).translate(origin.x, origin.y, origin.z)
    }

    /// Rotate about `origin` in the x-y plane
    pub fn rotate_z(&self, origin: Point, angle: f64) -> Self {
        let p = self.translate(-origin.x, -origin.y, -origin.z);
        let (sin, cos) = angle.sin_cos();

        let x = p.x * cos - p.y * sin;
        let y = p.x * sin + p.y * cos;

        Self::new(x, y, p.z).translate(origin.x, origin.y, origin.z)
    }

    /// Estimated depth of the point in the isometric plane.
    ///
    /// Larger values are further from the viewer. This is not a true
    /// view-space depth: z counts double so that stacked `|_` arrangements
    /// sort the lower face behind the upper one. Some concave or steep
    /// geometry (stars, for one) will be mis-ordered by it.
    pub fn depth(&self) -> f64 {
        self.x + self.y - 2.0 * self.z
    }

    /// Euclidean distance between two points
    pub fn distance(p1: Point, p2: Point) -> f64 {
        let dx = p2.x - p1.x;
        let dy = p2.y - p1.y;
        let dz = p2.z - p1.z;

        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

impl From<Point3<f64>> for Point {
    fn from(p: Point3<f64>) -> Self {
        Self::new(p.x, p.y, p.z)
    }
}

impl From<Point> for Point3<f64> {
    fn from(p: Point) -> Self {
        Point3::new(p.x, p.y, p.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn assert_close(a: Point, b: Point) {
        assert!(Point::distance(a, b) < 1e-9, "{:?} != {:?}", a, b);
    }

    #[test]
    fn test_translate_round_trip() {
        let p = Point::new(3.0, -2.0, 7.0);
        let moved = p.translate(4.0, 5.0, -6.0);
        assert_eq!(moved, Point::new(7.0, 3.0, 1.0));
        assert_eq!(moved.translate(-4.0, -5.0, 6.0), p);
    }

    #[test]
    fn test_rotation_sign_conventions() {
        let origin = Point::ORIGIN;
        assert_close(Point::new(1.0, 0.0, 0.0).rotate_z(origin, FRAC_PI_2), Point::new(0.0, 1.0, 0.0));
        assert_close(Point::new(1.0, 0.0, 0.0).rotate_y(origin, FRAC_PI_2), Point::new(0.0, 0.0, 1.0));
        assert_close(Point::new(0.0, 0.0, 1.0).rotate_x(origin, FRAC_PI_2), Point::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_rotation_about_arbitrary_origin() {
        let origin = Point::new(1.0, 1.0, 0.0);
        let rotated = Point::new(2.0, 1.0, 5.0).rotate_z(origin, PI);
        assert_close(rotated, Point::new(0.0, 1.0, 5.0));
    }

    #[test]
    fn test_rotation_inverse() {
        let p = Point::new(1.5, -2.25, 3.0);
        let origin = Point::new(-1.0, 4.0, 0.5);
        for angle in [0.3, 1.0, -2.7, PI] {
            assert_close(p.rotate_x(origin, angle).rotate_x(origin, -angle), p);
            assert_close(p.rotate_y(origin, angle).rotate_y(origin, -angle), p);
            assert_close(p.rotate_z(origin, angle).rotate_z(origin, -angle), p);
        }
    }

    #[test]
    fn test_scale_policy() {
        let p = Point::new(1.0, 2.0, 3.0);
        assert_eq!(p.scale(Point::ORIGIN, 2.0), Point::new(2.0, 4.0, 6.0));
        assert_eq!(p.scale(Point::ORIGIN, (2.0, 3.0)), Point::new(2.0, 6.0, 3.0));
        assert_eq!(p.scale(Point::ORIGIN, (2.0, 3.0, 4.0)), Point::new(2.0, 6.0, 12.0));
    }

    #[test]
    fn test_scale_about_origin() {
        let origin = Point::new(1.0, 1.0, 1.0);
        assert_eq!(Point::new(2.0, 3.0, 1.0).scale(origin, 2.0), Point::new(3.0, 5.0, 1.0));
        assert_eq!(origin.scale(origin, 10.0), origin);
    }

    #[test]
    fn test_depth() {
        assert_eq!(Point::ORIGIN.depth(), 0.0);
        assert_eq!(Point::new(1.0, 2.0, 3.0).depth(), -3.0);
    }

    #[test]
    fn test_distance() {
        assert_eq!(Point::distance(Point::ORIGIN, Point::new(2.0, 3.0, 6.0)), 7.0);
    }

    #[test]
    fn test_nalgebra_interop() {
        let p: Point3<f64> = Point::new(1.0, 2.0, 3.0).into();
        assert_eq!(Point::from(p), Point::new(1.0, 2.0, 3.0));
    }
}
