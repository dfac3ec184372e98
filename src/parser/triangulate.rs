//! Face triangulation.
//!
//! Runs once over every face collected by the line pass and produces the
//! single output [`Shape`]. Triangles pass through unchanged; quads are split
//! along their shorter diagonal.

use glam::Vec3;

use super::accumulator::{Face, GeometryAccumulator};
use super::index::BufferCounts;
use crate::error::{Result, WavefrontError};
use crate::types::VertexAttributes;
use crate::wavefront::Shape;

/// Triangulate every pending face into one shape.
///
/// Faces with fewer than three vertices, or that reference data outside the
/// buffers, are skipped with a warning. A face with more than four vertices
/// fails the whole document.
pub fn triangulate(accumulator: &GeometryAccumulator) -> Result<Shape> {
    let counts = accumulator.counts();
    let mut shape = Shape::new();

    for face in accumulator.faces() {
        match face.vertices.as_slice() {
            &[_, _, _, _, _, ..] => {
                return Err(WavefrontError::UnsupportedPolygon {
                    line: face.line,
                    vertex_count: face.vertices.len(),
                });
            }
            &[v0, v1, v2] if in_bounds(face, counts) => shape.push_triangle([v0, v1, v2]),
            &[v0, v1, v2, v3] if in_bounds(face, counts) => {
                let quad = [v0, v1, v2, v3];
                for triangle in split_quad(quad, quad_corners(accumulator, quad)) {
                    shape.push_triangle(triangle);
                }
            }
            &[_, _, _] | &[_, _, _, _] => {
                tracing::warn!(
                    line = face.line,
                    vertex_count = face.vertices.len(),
                    "skipping face that references missing vertex data"
                );
            }
            short => {
                tracing::warn!(
                    line = face.line,
                    vertex_count = short.len(),
                    "skipping degenerate face with fewer than 3 vertices"
                );
            }
        }
    }

    Ok(shape)
}

/// Whether every index in the face lies inside its buffer.
fn in_bounds(face: &Face, counts: BufferCounts) -> bool {
    face.vertices.iter().all(|v| {
        let position = v.position_index().is_some_and(|i| i < counts.positions);
        let normal = !v.has_normal() || v.normal_index().is_some_and(|i| i < counts.normals);
        let texcoord =
            !v.has_texcoord() || v.texcoord_index().is_some_and(|i| i < counts.texcoords);
        position && normal && texcoord
    })
}

/// Corner positions of a quad that passed [`in_bounds`].
fn quad_corners(accumulator: &GeometryAccumulator, quad: [VertexAttributes; 4]) -> [Vec3; 4] {
    quad.map(|vertex| {
        let start = vertex.position as usize * 3;
        Vec3::from_slice(&accumulator.positions[start..start + 3])
    })
}

/// Split the quad `v0-v1-v2-v3` along its shorter diagonal.
///
/// ```text
/// v3      v2      v3      v2
///  +-------+       +-------+
///  |     / |       | \     |
///  |   /   |  OR   |   \   |
///  | /     |       |     \ |
///  +-------+       +-------+
/// v0      v1      v0      v1
/// ```
///
/// Ties go to the `v1-v3` diagonal.
pub fn split_quad(
    quad: [VertexAttributes; 4],
    corners: [Vec3; 4],
) -> [[VertexAttributes; 3]; 2] {
    let [v0, v1, v2, v3] = quad;
    let d02 = (corners[2] - corners[0]).length_squared();
    let d13 = (corners[3] - corners[1]).length_squared();

    if d02 < d13 {
        [[v0, v1, v2], [v0, v2, v3]]
    } else {
        [[v0, v1, v3], [v1, v2, v3]]
    }
}
