/// Ordered point sequences (polygons)
use crate::point::Point;
use crate::transform::{Scale, Transform};
use crate::vector::Vector;

/// An ordered list of points describing one planar polygon.
///
/// Point order is the polygon's winding; reversing it flips the face.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    pub points: Vec<Point>,
}

impl Path {
    pub fn new(points: impl Into<Path>) -> Self {
        points.into()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    /// Append a point in place
    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Same points, opposite winding
    pub fn reverse(&self) -> Self {
        self.points.iter().rev().copied().collect()
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

    /// Average depth of the path's points; an empty path has depth 0
    pub fn depth(&self) -> f64 {
        if self.points.is_empty() {
            return 0.0;
        }

        let total: f64 = self.points.iter().map(Point::depth).sum();
        total / self.points.len() as f64
    }

    /// Unit face normal from the first three points.
    ///
    /// Follows the winding: counter-clockwise when seen from above gives a
    /// normal pointing up. Paths with fewer than three points, or with
    /// collinear leading points, yield the zero vector.
    pub fn normal(&self) -> Vector {
        match self.points.as_slice() {
            [p0, p1, p2, ..] => {
                let v1 = Vector::from_two_points(*p1, *p0);
                let v2 = Vector::from_two_points(*p2, *p1);
                Vector::cross_product(v1, v2).normalize()
            }
            _ => Vector::default(),
        }
    }

    fn map_points(&self, f: impl Fn(&Point) -> Point) -> Self {
        self.points.iter().map(f).collect()
    }
}

impl Transform for Path {
    fn translate(&self, dx: f64, dy: f64, dz: f64) -> Self {
        self.map_points(|p| p.translate(dx, dy, dz))
    }

    fn rotate_x(&self, origin: Point, angle: f64) -> Self {
        self.map_points(|p| p.rotate_x(origin, angle))
    }

    fn rotate_y(&self, origin: Point, angle: f64) -> Self {
        self.map_points(|p| p.rotate_y(origin, angle))
    }

    fn rotate_z(&self, origin: Point, angle: f64) -> Self {
        self.map_points(|p| p.rotate_z(origin, angle))
    }

    fn scale(&self, origin: Point, factors: impl Into<Scale>) -> Self {
        let factors = factors.into();
        self.map_points(|p| p.scale(origin, factors))
    }
}

impl From<Point> for Path {
    fn from(point: Point) -> Self {
        Self {
            points: vec![point],
        }
    }
}

impl From<Vec<Point>> for Path {
    fn from(points: Vec<Point>) -> Self {
        Self { points }
    }
}

impl<const N: usize> From<[Point; N]> for Path {
    fn from(points: [Point; N]) -> Self {
        Self {
            points: points.to_vec(),
        }
    }
}

impl FromIterator<Point> for Path {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl Extend<Point> for Path {
    fn extend<I: IntoIterator<Item = Point>>(&mut self, iter: I) {
        self.points.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
