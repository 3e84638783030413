/// Collections of polygons and painter's-algorithm ordering
use crate::path::Path;
use crate::point::Point;
use crate::transform::{Scale, Transform};

/// Height used by [`Shape::extrude`] when the caller has no preference
pub const DEFAULT_EXTRUDE_HEIGHT: f64 = 1.0;

/// A solid described by its faces
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Shape {
    pub paths: Vec<Path>,
}

impl Shape {
    pub fn new(paths: impl Into<Shape>) -> Self {
        paths.into()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            paths: Vec::with_capacity(capacity),
        }
    }

    /// Append a face in place
    pub fn push(&mut self, path: Path) {
        self.paths.push(path);
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Path> {
        self.paths.iter()
    }

    /// The faces sorted back to front, ready to be painted in order.
    ///
    /// Faces are sorted by descending [`Path::depth`]. The sort is stable, so
    /// faces with equal depth keep their relative order from frame to frame.
    /// This is the only occlusion mechanism there is: whatever the depth
    /// heuristic gets wrong will be drawn wrong.
    pub fn ordered_paths(&self) -> Vec<Path> {
        self.clone().into_ordered_paths()
    }

    /// Like [`Shape::ordered_paths`], consuming the shape
    pub fn into_ordered_paths(self) -> Vec<Path> {
        let mut keyed: Vec<(f64, Path)> = self
            .paths
            .into_iter()
            .map(|path| (path.depth(), path))
            .collect();

        // Vec::sort_by is stable; total_cmp keeps the order total if a NaN slips in
        keyed.sort_by(|(a, _), (b, _)| b.total_cmp(a));

        log::trace!("ordered {} paths by depth", keyed.len());
        keyed.into_iter().map(|(_, path)| path).collect()
    }

    /// Raise a planar path along the z axis into a closed solid.
    ///
    /// The bottom face is the reversed path so that it faces outward, then
    /// the top face, then one quad per edge wound to match both caps.
    pub fn extrude(path: &Path, height: f64) -> Self {
        let top = path.translate(0.0, 0.0, height);
        let n = path.len();
        let mut shape = Self::with_capacity(n + 2);

        shape.push(path.reverse());
        shape.push(top.clone());

        for i in 0..n {
            let next = (i + 1) % n;
            shape.push(Path::new([
                top.points[i],
                path.points[i],
                path.points[next],
                top.points[next],
            ]));
        }

        shape
    }

    fn map_paths(&self, f: impl Fn(&Path) -> Path) -> Self {
        self.paths.iter().map(f).collect()
    }
}

impl Transform for Shape {
    fn translate(&self, dx: f64, dy: f64, dz: f64) -> Self {
        self.map_paths(|path| path.translate(dx, dy, dz))
    }

    fn rotate_x(&self, origin: Point, angle: f64) -> Self {
        self.map_paths(|path| path.rotate_x(origin, angle))
    }

    fn rotate_y(&self, origin: Point, angle: f64) -> Self {
        self.map_paths(|path| path.rotate_y(origin, angle))
    }

    fn rotate_z(&self, origin: Point, angle: f64) -> Self {
        self.map_paths(|path| path.rotate_z(origin, angle))
    }

    fn scale(&self, origin: Point, factors: impl Into<Scale>) -> Self {
        let factors = factors.into();
        self.map_paths(|path| path.scale(origin, factors))
    }
}

impl From<Path> for Shape {
    fn from(path: Path) -> Self {
        Self { paths: vec![path] }
    }
}

impl From<Vec<Path>> for Shape {
    fn from(paths: Vec<Path>) -> Self {
        Self { paths }
    }
}

impl FromIterator<Path> for Shape {
    fn from_iter<I: IntoIterator<Item = Path>>(iter: I) -> Self {
        Self {
            paths: iter.into_iter().collect(),
        }
    }
}

impl Extend<Path> for Shape {
    fn extend<I: IntoIterator<Item = Path>>(&mut self, iter: I) {
        self.paths.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Shape {
    type Item = &'a Path;
    type IntoIter = std::slice::Iter<'a, Path>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.iter()
    }
}
