/// Colored shapes collected for painting
use crate::color::Color;
use crate::lighting::Lighting;
use crate::path::Path;
use crate::shape::Shape;

/// A face ready to be filled: its polygon and shaded color
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    pub path: Path,
    pub color: Color,
}

/// Shapes in the order they are painted.
///
/// Faces are only depth-sorted within a shape. Callers add shapes back to
/// front, the way they would hand them to any painter.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    items: Vec<(Shape, Color)>,
    pub lighting: Lighting,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lighting(lighting: Lighting) -> Self {
        Self {
            items: Vec::new(),
            lighting,
        }
    }

    pub fn add_shape(&mut self, shape: Shape, color: Color) {
        self.items.push((shape, color));
    }

    pub fn add_path(&mut self, path: Path, color: Color) {
        self.items.push((Shape::from(path), color));
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn shapes(&self) -> impl Iterator<Item = &Shape> {
        self.items.iter().map(|(shape, _)| shape)
    }

    /// Apply `f` to every shape, keeping colors and order
    pub fn map_shapes(&self, f: impl Fn(&Shape) -> Shape) -> Self {
        Self {
            items: self
                .items
                .iter()
                .map(|(shape, color)| (f(shape), *color))
                .collect(),
            lighting: self.lighting,
        }
    }

    /// Every face in paint order, shaded
    pub fn faces(&self) -> Vec<Face> {
        let faces: Vec<Face> = self
            .items
            .iter()
            .flat_map(|(shape, color)| {
                shape.ordered_paths().into_iter().map(|path| Face {
                    color: self.lighting.shade(&path, *color),
                    path,
                })
            })
            .collect();

        log::debug!("scene of {} shapes produced {} faces", self.items.len(), faces.len());
        faces
    }
}
