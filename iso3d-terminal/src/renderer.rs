/// Painter's-algorithm rasterizer for terminal rendering
use crossterm::{
    style::{Color as TermColor, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use iso3d_core::{Color, Face, IsometricProjection};
use nalgebra::Point2;
use std::io::Write;

/// Terminal cells are roughly twice as tall as they are wide
const CELL_ASPECT: f64 = 2.0;

/// Glyph used for filled cells
const FILL: char = '█';

#[derive(Debug, Clone, Copy, PartialEq)]
struct Cell {
    glyph: char,
    color: Option<Color>,
}

impl Cell {
    const EMPTY: Cell = Cell {
        glyph: ' ',
        color: None,
    };
}

/// Fills faces into a character grid in the order given.
///
/// There is no depth buffer: a later face overwrites an earlier one, so
/// faces must arrive back to front.
pub struct TextRenderer {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    projection: IsometricProjection,
}

impl TextRenderer {
    /// A renderer for a `width` by `height` cell grid, `scale` cells per
    /// scene unit horizontally
    pub fn new(width: usize, height: usize, scale: f64) -> Self {
        let projection =
            IsometricProjection::for_surface(width as f64, height as f64 * CELL_ASPECT, scale);

        Self {
            width,
            height,
            cells: vec![Cell::EMPTY; width * height],
            projection,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn resize(&mut self, width: usize, height: usize) {
        let scale = self.projection.scale;
        *self = Self::new(width, height, scale);
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::EMPTY);
    }

    /// Paint faces in order, later faces on top
    pub fn render_faces(&mut self, faces: &[Face]) {
        for face in faces {
            self.render_face(face);
        }
    }

    fn render_face(&mut self, face: &Face) {
        let polygon: Vec<Point2<f64>> = self
            .projection
            .project_path(&face.path)
            .into_iter()
            .map(|p| Point2::new(p.x, p.y / CELL_ASPECT))
            .collect();

        if polygon.len() < 3 {
            return;
        }

        self.fill_polygon(&polygon, face.color);
    }

    fn fill_polygon(&mut self, polygon: &[Point2<f64>], color: Color) {
        let (mut min_x, mut max_x) = (f64::INFINITY, f64::NEG_INFINITY);
        let (mut min_y, mut max_y) = (f64::INFINITY, f64::NEG_INFINITY);
        for p in polygon {
            min_x = min_x.min(p.x);
            max_x = max_x.max(p.x);
            min_y = min_y.min(p.y);
            max_y = max_y.max(p.y);
        }

        // Clip to screen bounds
        let min_x = (min_x.floor() as i64).max(0);
        let max_x = (max_x.ceil() as i64).min(self.width as i64 - 1);
        let min_y = (min_y.floor() as i64).max(0);
        let max_y = (max_y.ceil() as i64).min(self.height as i64 - 1);

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let center = Point2::new(x as f64 + 0.5, y as f64 + 0.5);
                if contains(polygon, center) {
                    let idx = y as usize * self.width + x as usize;
                    self.cells[idx] = Cell {
                        glyph: FILL,
                        color: Some(color),
                    };
                }
            }
        }
    }

    /// Color of the cell at `(x, y)`, if anything was painted there
    pub fn color_at(&self, x: usize, y: usize) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells[y * self.width + x].color
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        let mut current: Option<Color> = None;

        for y in 0..self.height {
            for x in 0..self.width {
                let cell = self.cells[y * self.width + x];

                if let Some(color) = cell.color {
                    if current != Some(color) {
                        writer.queue(SetForegroundColor(TermColor::Rgb {
                            r: color.r,
                            g: color.g,
                            b: color.b,
                        }))?;
                        current = Some(color);
                    }
                }
                writer.queue(Print(cell.glyph))?;
            }
            if y + 1 < self.height {
                writer.queue(Print("\r\n"))?;
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

/// Even-odd point in polygon test
fn contains(polygon: &[Point2<f64>], p: Point2<f64>) -> bool {
    let mut inside = false;
    let mut j = polygon.len() - 1;

    for i in 0..polygon.len() {
        let (a, b) = (polygon[i], polygon[j]);
        if (a.y > p.y) != (b.y > p.y) && p.x < (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x {
            inside = !inside;
        }
        j = i;
    }

    inside
}
