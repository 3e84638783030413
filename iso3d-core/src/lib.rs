/// ISO3D Core Library - Isometric scene geometry and painter's ordering
///
/// This library provides the value types for building isometric scenes
/// (points, paths and shapes with their affine transforms), the depth
/// heuristic that orders faces back to front, the primitive generators, and
/// the small collaborators renderers need: projection, color, lighting and
/// OBJ import.

pub mod color;
pub mod lighting;
pub mod obj;
pub mod path;
pub mod point;
pub mod primitives;
pub mod projection;
pub mod scene;
pub mod shape;
pub mod transform;
pub mod vector;

// Re-export commonly used types
pub use color::Color;
pub use lighting::Lighting;
pub use obj::{parse_obj, ObjError};
pub use path::Path;
pub use point::Point;
pub use projection::IsometricProjection;
pub use scene::{Face, Scene};
pub use shape::Shape;
pub use transform::{RotationState, Scale, Transform};
pub use vector::Vector;
