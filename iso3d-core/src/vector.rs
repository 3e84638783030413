/// Direction vectors used for surface normals and lighting
use nalgebra::Vector3;

use crate::point::Point;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector {
    pub i: f64,
    pub j: f64,
    pub k: f64,
}

impl Vector {
    pub const fn new(i: f64, j: f64, k: f64) -> Self {
        Self { i, j, k }
    }

    /// The vector pointing from `p1` to `p2`
    pub fn from_two_points(p1: Point, p2: Point) -> Self {
        Self::new(p2.x - p1.x, p2.y - p1.y, p2.z - p1.z)
    }

    pub fn magnitude(&self) -> f64 {
        Vector3::from(*self).norm()
    }

    /// Unit vector in the same direction, or the zero vector when the
    /// magnitude is zero.
    pub fn normalize(&self) -> Self {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            return Self::default();
        }

        Self::new(self.i / magnitude, self.j / magnitude, self.k / magnitude)
    }

    /// Right-handed cross product
    pub fn cross_product(v1: Vector, v2: Vector) -> Self {
        Vector3::from(v1).cross(&Vector3::from(v2)).into()
    }

    pub fn dot_product(v1: Vector, v2: Vector) -> f64 {
        Vector3::from(v1).dot(&Vector3::from(v2))
    }
}

impl From<Vector3<f64>> for Vector {
    fn from(v: Vector3<f64>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vector> for Vector3<f64> {
    fn from(v: Vector) -> Self {
        Vector3::new(v.i, v.j, v.k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magnitude() {
        assert_eq!(Vector::new(2.0, 3.0, 6.0).magnitude(), 7.0);
    }

    #[test]
    fn test_normalize() {
        let v = Vector::new(0.0, 3.0, 4.0).normalize();
        assert!((v.magnitude() - 1.0).abs() < 1e-12);
        assert!((v.j - 0.6).abs() < 1e-12);
        assert!((v.k - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_normalize_zero_vector() {
        let v = Vector::default().normalize();
        assert_eq!(v, Vector::new(0.0, 0.0, 0.0));
        assert!(!v.i.is_nan() && !v.j.is_nan() && !v.k.is_nan());
    }

    #[test]
    fn test_from_two_points() {
        let v = Vector::from_two_points(Point::new(1.0, 1.0, 1.0), Point::new(2.0, 0.0, 4.0));
        assert_eq!(v, Vector::new(1.0, -1.0, 3.0));
    }

    #[test]
    fn test_cross_product() {
        let x = Vector::new(1.0, 0.0, 0.0);
        let y = Vector::new(0.0, 1.0, 0.0);
        assert_eq!(Vector::cross_product(x, y), Vector::new(0.0, 0.0, 1.0));
        assert_eq!(Vector::cross_product(y, x), Vector::new(0.0, 0.0, -1.0));

        let a = Vector::new(1.0, 2.0, 3.0);
        let b = Vector::new(4.0, 5.0, 6.0);
        // (j1k2 - j2k1, -(i1k2 - i2k1), i1j2 - i2j1)
        assert_eq!(Vector::cross_product(a, b), Vector::new(-3.0, 6.0, -3.0));
    }

    #[test]
    fn test_dot_product() {
        let a = Vector::new(1.0, 2.0, 3.0);
        let b = Vector::new(4.0, -5.0, 6.0);
        assert_eq!(Vector::dot_product(a, b), 12.0);
    }
}
