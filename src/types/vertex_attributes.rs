//! Per-vertex index triples.

use serde::Serialize;

/// Indices of one face vertex into the position, normal and texcoord buffers.
///
/// Each index counts vertices, not floats: position `i` lives at
/// `positions[3 * i..3 * i + 3]`. An attribute that the face token did not
/// supply is stored as [`VertexAttributes::ABSENT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct VertexAttributes {
    pub position: isize,
    pub normal: isize,
    pub texcoord: isize,
}

impl VertexAttributes {
    /// Sentinel for an attribute that is not present.
    pub const ABSENT: isize = -1;

    pub fn new(position: isize, normal: isize, texcoord: isize) -> Self {
        Self {
            position,
            normal,
            texcoord,
        }
    }

    /// A vertex that only references a position.
    pub fn position_only(position: isize) -> Self {
        Self::new(position, Self::ABSENT, Self::ABSENT)
    }

    pub fn position_index(&self) -> Option<usize> {
        usize::try_from(self.position).ok()
    }

    pub fn normal_index(&self) -> Option<usize> {
        usize::try_from(self.normal).ok()
    }

    pub fn texcoord_index(&self) -> Option<usize> {
        usize::try_from(self.texcoord).ok()
    }

    pub fn has_normal(&self) -> bool {
        self.normal != Self::ABSENT
    }

    pub fn has_texcoord(&self) -> bool {
        self.texcoord != Self::ABSENT
    }
}
