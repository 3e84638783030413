/// Parametric paths and solids
use std::f64::consts::PI;

use crate::path::Path;
use crate::point::Point;
use crate::shape::Shape;
use crate::transform::Transform;

/// Vertex count used by [`circle`] callers that don't care
pub const DEFAULT_CIRCLE_VERTICES: usize = 20;

/// An axis-aligned rectangle in the xy-plane with its corner at `origin`
pub fn rectangle(origin: Point, width: f64, height: f64) -> Path {
    Path::new([
        origin,
        Point::new(origin.x + width, origin.y, origin.z),
        Point::new(origin.x + width, origin.y + height, origin.z),
        Point::new(origin.x, origin.y + height, origin.z),
    ])
}

pub fn unit_rectangle(origin: Point) -> Path {
    rectangle(origin, 1.0, 1.0)
}

/// A regular polygon approximating a circle centered at `origin`
pub fn circle(origin: Point, radius: f64, vertices: usize) -> Path {
    let step = 2.0 * PI / vertices as f64;

    (0..vertices)
        .map(|i| {
            let angle = i as f64 * step;
            Point::new(radius * angle.cos(), radius * angle.sin(), 0.0)
        })
        .collect::<Path>()
        .translate(origin.x, origin.y, origin.z)
}

/// A star centered at `origin` alternating outer and inner radius.
///
/// Stars are concave, and the depth ordering does not handle concave faces:
/// expect artifacts when they are extruded.
pub fn star(origin: Point, outer_radius: f64, inner_radius: f64, points: usize) -> Path {
    let step = PI / points as f64;

    (0..points * 2)
        .map(|i| {
            let r = if i % 2 == 0 { outer_radius } else { inner_radius };
            let angle = i as f64 * step;
            Point::new(r * angle.cos(), r * angle.sin(), 0.0)
        })
        .collect::<Path>()
        .translate(origin.x, origin.y, origin.z)
}

/// An axis-aligned box with its corner at `origin`
pub fn prism(origin: Point, dx: f64, dy: f64, dz: f64) -> Shape {
    let mut prism = Shape::with_capacity(6);

    // Faces parallel to the x-axis
    let face1 = Path::new([
        origin,
        Point::new(origin.x + dx, origin.y, origin.z),
        Point::new(origin.x + dx, origin.y, origin.z + dz),
        Point::new(origin.x, origin.y, origin.z + dz),
    ]);
    let opposite1 = face1.reverse().translate(0.0, dy, 0.0);
    prism.push(face1);
    prism.push(opposite1);

    // Faces parallel to the y-axis
    let face2 = Path::new([
        origin,
        Point::new(origin.x, origin.y, origin.z + dz),
        Point::new(origin.x, origin.y + dy, origin.z + dz),
        Point::new(origin.x, origin.y + dy, origin.z),
    ]);
    let opposite2 = face2.reverse().translate(dx, 0.0, 0.0);
    prism.push(face2);
    prism.push(opposite2);

    // Faces parallel to the xy-plane; the bottom one is wound backwards
    let face3 = rectangle(origin, dx, dy);
    prism.push(face3.reverse());
    prism.push(face3.translate(0.0, 0.0, dz));

    prism
}

pub fn unit_prism(origin: Point) -> Shape {
    prism(origin, 1.0, 1.0, 1.0)
}

/// A four-sided pyramid on a `dx` by `dy` base with its apex `dz` above the
/// base center
pub fn pyramid(origin: Point, dx: f64, dy: f64, dz: f64) -> Shape {
    let mut pyramid = Shape::with_capacity(4);
    let apex = Point::new(origin.x + dx / 2.0, origin.y + dy / 2.0, origin.z + dz);
    let center = origin.translate(dx / 2.0, dy / 2.0, 0.0);

    // Each face and its opposite, rotated half a turn about the center
    let face1 = Path::new([origin, Point::new(origin.x + dx, origin.y, origin.z), apex]);
    let opposite1 = face1.rotate_z(center, PI);
    pyramid.push(face1);
    pyramid.push(opposite1);

    let face2 = Path::new([origin, apex, Point::new(origin.x, origin.y + dy, origin.z)]);
    let opposite2 = face2.rotate_z(center, PI);
    pyramid.push(face2);
    pyramid.push(opposite2);

    pyramid
}

pub fn unit_pyramid(origin: Point) -> Shape {
    pyramid(origin, 1.0, 1.0, 1.0)
}

/// An extruded circle standing on `origin`
pub fn cylinder(origin: Point, radius: f64, vertices: usize, height: f64) -> Shape {
    Shape::extrude(&circle(origin, radius, vertices), height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::Vector;

    fn assert_close(a: Point, b: Point) {
        assert!(Point::distance(a, b) < 1e-9, "{:?} != {:?}", a, b);
    }

    #[test]
    fn test_rectangle() {
        let path = rectangle(Point::new(1.0, 1.0, 2.0), 3.0, 2.0);
        assert_eq!(
            path.points,
            vec![
                Point::new(1.0, 1.0, 2.0),
                Point::new(4.0, 1.0, 2.0),
                Point::new(4.0, 3.0, 2.0),
                Point::new(1.0, 3.0, 2.0),
            ]
        );
    }

    #[test]
    fn test_circle_four_vertices() {
        let path = circle(Point::ORIGIN, 1.0, 4);
        assert_eq!(path.len(), 4);
        assert_close(path.points[0], Point::new(1.0, 0.0, 0.0));
        assert_close(path.points[1], Point::new(0.0, 1.0, 0.0));
        assert_close(path.points[2], Point::new(-1.0, 0.0, 0.0));
        assert_close(path.points[3], Point::new(0.0, -1.0, 0.0));
        assert!(path.iter().all(|p| p.z == 0.0));
    }

    #[test]
    fn test_circle_translated_to_origin() {
        let center = Point::new(2.0, 3.0, 4.0);
        let path = circle(center, 2.0, DEFAULT_CIRCLE_VERTICES);
        assert_eq!(path.len(), DEFAULT_CIRCLE_VERTICES);
        for p in &path {
            assert!((Point::distance(*p, center) - 2.0).abs() < 1e-9);
            assert_eq!(p.z, 4.0);
        }
    }

    #[test]
    fn test_star() {
        let path = star(Point::ORIGIN, 2.0, 1.0, 5);
        assert_eq!(path.len(), 10);
        for (i, p) in path.iter().enumerate() {
            let expected = if i % 2 == 0 { 2.0 } else { 1.0 };
            assert!((Point::distance(*p, Point::ORIGIN) - expected).abs() < 1e-9);
        }
        assert_close(path.points[5], Point::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn test_prism_faces() {
        let shape = prism(Point::ORIGIN, 1.0, 2.0, 3.0);
        assert_eq!(shape.len(), 6);
        assert!(shape.iter().all(|face| face.len() == 4));

        // every corner of the box is covered by exactly three faces
        for x in [0.0, 1.0] {
            for y in [0.0, 2.0] {
                for z in [0.0, 3.0] {
                    let corner = Point::new(x, y, z);
                    let count = shape.iter().filter(|f| f.points.contains(&corner)).count();
                    assert_eq!(count, 3, "corner {:?}", corner);
                }
            }
        }
    }

    #[test]
    fn test_prism_faces_point_outward() {
        let origin = Point::new(1.0, 1.0, 1.0);
        let shape = unit_prism(origin);
        let center = Point::new(1.5, 1.5, 1.5);

        for face in &shape {
            let normal = face.normal();
            let mid = face.points[0];
            let outward = Vector::from_two_points(center, mid);
            assert!(Vector::dot_product(normal, outward) > 0.0, "{:?}", face);
        }
    }

    #[test]
    fn test_pyramid() {
        let shape = pyramid(Point::ORIGIN, 2.0, 2.0, 1.0);
        assert_eq!(shape.len(), 4);

        let apex = Point::new(1.0, 1.0, 1.0);
        for face in &shape {
            assert_eq!(face.len(), 3);
            assert!(face.iter().any(|p| Point::distance(*p, apex) < 1e-9));
        }

        // the opposite of the y = 0 face lies on y = 2
        let opposite = &shape.paths[1];
        assert_close(opposite.points[0], Point::new(2.0, 2.0, 0.0));
        assert_close(opposite.points[1], Point::new(0.0, 2.0, 0.0));
    }

    #[test]
    fn test_cylinder() {
        let shape = cylinder(Point::ORIGIN, 1.0, 8, 2.0);
        assert_eq!(shape.len(), 10);
        assert!(shape.paths[1].iter().all(|p| p.z == 2.0));
    }
}
