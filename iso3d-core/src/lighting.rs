/// Flat shading of faces against a single directional light
use crate::color::Color;
use crate::path::Path;
use crate::vector::Vector;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lighting {
    /// Unit direction towards the light
    pub light_direction: Vector,
    pub light_color: Color,
    /// How much lighter a face pointing straight at the light gets
    pub color_difference: f64,
}

impl Lighting {
    pub fn new(light_position: Vector, light_color: Color, color_difference: f64) -> Self {
        Self {
            light_direction: light_position.normalize(),
            light_color,
            color_difference,
        }
    }

    /// Brightness of a face, from -1 (facing away) to 1 (facing the light)
    pub fn brightness(&self, path: &Path) -> f64 {
        Vector::dot_product(path.normal(), self.light_direction)
    }

    /// The color a face of `base` color is painted with
    pub fn shade(&self, path: &Path, base: Color) -> Color {
        base.lighten(self.brightness(path) * self.color_difference, self.light_color)
    }
}

impl Default for Lighting {
    fn default() -> Self {
        Self::new(Vector::new(2.0, -1.0, 3.0), Color::WHITE, 0.2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::Point;
    use crate::primitives::{rectangle, unit_prism};

    #[test]
    fn test_default_light_is_normalized() {
        let lighting = Lighting::default();
        assert!((lighting.light_direction.magnitude() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_top_face_is_lit() {
        let lighting = Lighting::default();
        let top = rectangle(Point::ORIGIN, 1.0, 1.0);
        let bottom = top.reverse();

        assert!(lighting.brightness(&top) > 0.0);
        assert!(lighting.brightness(&bottom) < 0.0);
    }

    #[test]
    fn test_shade_orders_visible_faces() {
        let lighting = Lighting::default();
        let base = Color::rgb(120, 120, 120);
        let prism = unit_prism(Point::ORIGIN);

        // top, the +x side and the -y side are the faces an isometric viewer sees
        let lightness = |i: usize| lighting.shade(&prism.paths[i], base).hsl().2;
        let top = lightness(5);
        let front_x = lightness(3);
        let front_y = lightness(0);

        assert!(top > front_x);
        assert!(front_x > front_y);
    }

    #[test]
    fn test_degenerate_face_keeps_base_lightness() {
        let lighting = Lighting::default();
        let base = Color::rgb(51, 51, 51);
        let line = Path::new(vec![Point::ORIGIN, Point::new(1.0, 0.0, 0.0)]);
        assert_eq!(lighting.shade(&line, base), base);
    }
}
