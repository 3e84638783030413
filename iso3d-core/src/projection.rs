/// Isometric projection from scene space to screen space
use nalgebra::{Matrix2, Point2, Vector2};

use crate::path::Path;
use crate::point::Point;

/// Parallel projection with the x and y axes at `angle` above the horizontal.
///
/// Screen y grows downward, so scene z moves points up the screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IsometricProjection {
    pub origin_x: f64,
    pub origin_y: f64,
    /// Screen units per scene unit
    pub scale: f64,
    pub angle: f64,
}

impl IsometricProjection {
    pub fn new(origin_x: f64, origin_y: f64, scale: f64) -> Self {
        Self {
            origin_x,
            origin_y,
            scale,
            ..Self::default()
        }
    }

    /// Projection centered horizontally with the scene origin near the
    /// bottom of a `width` by `height` surface
    pub fn for_surface(width: f64, height: f64, scale: f64) -> Self {
        Self::new(width / 2.0, height * 0.9, scale)
    }

    /// Columns are the screen images of the scene x and y unit vectors
    fn transformation(&self) -> Matrix2<f64> {
        let (sin, cos) = self.angle.sin_cos();
        let (sin_opposite, cos_opposite) = (std::f64::consts::PI - self.angle).sin_cos();

        Matrix2::new(cos, cos_opposite, sin, sin_opposite) * self.scale
    }

    /// Project a point to screen coordinates
    pub fn project(&self, point: &Point) -> Point2<f64> {
        let mapped = self.transformation() * Vector2::new(point.x, point.y);

        Point2::new(
            self.origin_x + mapped.x,
            self.origin_y - mapped.y - point.z * self.scale,
        )
    }

    pub fn project_path(&self, path: &Path) -> Vec<Point2<f64>> {
        path.iter().map(|point| self.project(point)).collect()
    }
}

impl Default for IsometricProjection {
    fn default() -> Self {
        Self {
            origin_x: 0.0,
            origin_y: 0.0,
            scale: 70.0,
            angle: std::f64::consts::FRAC_PI_6,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: Point2<f64>, x: f64, y: f64) {
        assert!((a.x - x).abs() < 1e-9 && (a.y - y).abs() < 1e-9, "{:?} != ({}, {})", a, x, y);
    }

    #[test]
    fn test_origin_maps_to_screen_origin() {
        let projection = IsometricProjection::new(400.0, 300.0, 70.0);
        assert_close(projection.project(&Point::ORIGIN), 400.0, 300.0);
    }

    #[test]
    fn test_axes() {
        let projection = IsometricProjection::new(0.0, 0.0, 10.0);
        let half_sqrt3 = 3f64.sqrt() / 2.0;

        // x goes right and up, y goes left and up, z goes straight up
        assert_close(projection.project(&Point::new(1.0, 0.0, 0.0)), 10.0 * half_sqrt3, -5.0);
        assert_close(projection.project(&Point::new(0.0, 1.0, 0.0)), -10.0 * half_sqrt3, -5.0);
        assert_close(projection.project(&Point::new(0.0, 0.0, 1.0)), 0.0, -10.0);
    }

    #[test]
    fn test_project_path_matches_points() {
        let projection = IsometricProjection::for_surface(800.0, 600.0, 30.0);
        let path = Path::new(vec![Point::new(1.0, 2.0, 3.0), Point::new(-1.0, 0.5, 0.0)]);
        let projected = projection.project_path(&path);

        assert_eq!(projected.len(), 2);
        for (point, screen) in path.iter().zip(&projected) {
            let expected = projection.project(point);
            assert_close(*screen, expected.x, expected.y);
        }
    }
}
