//! Append-only geometry buffers filled during the line pass.

use super::index::BufferCounts;
use crate::types::VertexAttributes;

/// A face as written in the source, before triangulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Face {
    /// 1-based source line, kept for diagnostics.
    pub line: usize,
    pub vertices: Vec<VertexAttributes>,
}

/// Flat buffers and pending faces, in encounter order.
///
/// Nothing is deduplicated or reordered. Once the line pass is over the
/// accumulator is consumed by [`super::triangulate::triangulate`].
#[derive(Debug, Default)]
pub struct GeometryAccumulator {
    pub(crate) positions: Vec<f32>,
    pub(crate) normals: Vec<f32>,
    pub(crate) texcoords: Vec<f32>,
    pub(crate) faces: Vec<Face>,
}

impl GeometryAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_position(&mut self, position: [f32; 3]) {
        self.positions.extend_from_slice(&position);
    }

    pub fn push_normal(&mut self, normal: [f32; 3]) {
        self.normals.extend_from_slice(&normal);
    }

    pub fn push_texcoord(&mut self, texcoord: [f32; 2]) {
        self.texcoords.extend_from_slice(&texcoord);
    }

    pub fn push_face(&mut self, face: Face) {
        self.faces.push(face);
    }

    /// Buffer sizes in vertices, as consulted by the index resolver.
    pub fn counts(&self) -> BufferCounts {
        BufferCounts {
            positions: self.positions.len() / 3,
            normals: self.normals.len() / 3,
            texcoords: self.texcoords.len() / 2,
        }
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }
}
