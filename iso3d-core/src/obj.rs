/// Wavefront OBJ importer for the `v` and `f` records
use nom::{
    bytes::complete::is_not,
    character::complete::{char, i64 as index, space1},
    combinator::{all_consuming, opt, verify},
    multi::separated_list1,
    number::complete::double,
    sequence::{preceded, terminated},
    IResult,
};
use thiserror::Error;

use crate::path::Path;
use crate::point::Point;
use crate::shape::Shape;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ObjError {
    #[error("OBJ data is not valid UTF-8")]
    InvalidUtf8,
    #[error("line {line}: malformed vertex record")]
    MalformedVertex { line: usize },
    #[error("line {line}: malformed face record")]
    MalformedFace { line: usize },
    #[error("line {line}: vertex index {index} does not refer to one of the {count} vertices read so far")]
    IndexOutOfRange { line: usize, index: i64, count: usize },
}

/// Parse OBJ text into a shape with one path per face.
///
/// Only vertex positions and faces are read. Faces with fewer than three
/// vertices are skipped; texture, normal, group, object, smoothing and
/// material records are ignored.
pub fn parse_obj(input: &str) -> Result<Shape, ObjError> {
    let mut vertices: Vec<Point> = Vec::new();
    let mut shape = Shape::default();

    for (number, raw) in input.lines().enumerate() {
        let line = number + 1;
        let content = raw.split('#').next().unwrap_or_default().trim();
        if content.is_empty() {
            continue;
        }

        let (keyword, rest) = content
            .split_once(|c: char| c.is_whitespace())
            .map(|(keyword, rest)| (keyword, rest.trim()))
            .unwrap_or((content, ""));

        match keyword {
            "v" => {
                let (_, point) = all_consuming(vertex_coords)(rest)
                    .map_err(|_| ObjError::MalformedVertex { line })?;
                vertices.push(point);
            }
            "f" => {
                let (_, indices) = all_consuming(face_indices)(rest)
                    .map_err(|_| ObjError::MalformedFace { line })?;

                if indices.len() < 3 {
                    log::debug!("line {}: skipping face with {} vertices", line, indices.len());
                    continue;
                }

                let path = indices
                    .into_iter()
                    .map(|i| resolve(i, &vertices, line))
                    .collect::<Result<Path, ObjError>>()?;
                shape.push(path);
            }
            "vt" | "vn" | "vp" | "g" | "o" | "s" | "l" | "mtllib" | "usemtl" => {}
            other => log::debug!("line {}: ignoring unknown record {:?}", line, other),
        }
    }

    log::debug!(
        "parsed OBJ with {} vertices and {} faces",
        vertices.len(),
        shape.len()
    );
    Ok(shape)
}

/// Parse OBJ data from raw bytes
pub fn parse_obj_bytes(data: &[u8]) -> Result<Shape, ObjError> {
    let text = std::str::from_utf8(data).map_err(|_| ObjError::InvalidUtf8)?;
    parse_obj(text)
}

/// `x y z [w]`
fn vertex_coords(input: &str) -> IResult<&str, Point> {
    let (input, x) = coordinate(input)?;
    let (input, y) = preceded(space1, coordinate)(input)?;
    let (input, z) = preceded(space1, coordinate)(input)?;
    let (input, _) = opt(preceded(space1, coordinate))(input)?;
    Ok((input, Point::new(x, y, z)))
}

// `double` also accepts "nan" and "inf"
fn coordinate(input: &str) -> IResult<&str, f64> {
    verify(double, |value: &f64| value.is_finite())(input)
}

/// `v1 v2 v3 ...` where each entry may carry `/vt/vn` suffixes
fn face_indices(input: &str) -> IResult<&str, Vec<i64>> {
    separated_list1(space1, face_vertex)(input)
}

fn face_vertex(input: &str) -> IResult<&str, i64> {
    terminated(index, opt(preceded(char('/'), opt(is_not(" \t")))))(input)
}

/// OBJ indices are 1-based, negative ones count back from the last vertex
fn resolve(i: i64, vertices: &[Point], line: usize) -> Result<Point, ObjError> {
    let count = vertices.len();
    let position = match i {
        i if i > 0 => usize::try_from(i - 1).ok(),
        i if i < 0 => usize::try_from(i.unsigned_abs())
            .ok()
            .and_then(|back| count.checked_sub(back)),
        _ => None,
    };

    position
        .and_then(|p| vertices.get(p).copied())
        .ok_or(ObjError::IndexOutOfRange {
            line,
            index: i,
            count,
        })
}
