//! De-indexed mesh data for custom rendering.
//!
//! OBJ indexes positions, normals and texcoords separately. Renderers usually
//! want one index per vertex, so each distinct attribute triple becomes one
//! output vertex.

use std::collections::HashMap;

use crate::error::{Result, WavefrontError};
use crate::types::VertexAttributes;
use crate::wavefront::Wavefront;

/// Raw mesh data for custom use.
#[derive(Debug, Default)]
pub struct RawMeshData {
    /// Vertex positions (3 floats per vertex).
    pub positions: Vec<[f32; 3]>,
    /// Vertex normals, zero when the source had none.
    pub normals: Vec<[f32; 3]>,
    /// Texture coordinates, zero when the source had none.
    pub uvs: Vec<[f32; 2]>,
    /// Triangle indices (3 per triangle).
    pub indices: Vec<u32>,
}

/// Flatten every shape of a document into one indexed mesh.
///
/// Fails if the mesh needs more distinct vertices than a `u32` index can
/// address.
pub fn export_raw(document: &Wavefront) -> Result<RawMeshData> {
    let mut raw = RawMeshData::default();
    let mut vertex_map: HashMap<VertexAttributes, u32> = HashMap::new();

    for shape in document.shapes() {
        for &attributes in shape.indices() {
            let index = match vertex_map.get(&attributes) {
                Some(&index) => index,
                None => {
                    let index = raw.push_vertex(document, attributes)?;
                    vertex_map.insert(attributes, index);
                    index
                }
            };
            raw.indices.push(index);
        }
    }

    Ok(raw)
}

/// Index of the next vertex appended after `len` existing ones.
fn next_index(len: usize) -> Result<u32> {
    u32::try_from(len).map_err(|_| {
        WavefrontError::Export(format!("raw mesh exceeds {} vertices", u32::MAX))
    })
}

impl RawMeshData {
    fn push_vertex(&mut self, document: &Wavefront, attributes: VertexAttributes) -> Result<u32> {
        let index = next_index(self.positions.len())?;
        self.positions.push(
            attributes
                .position_index()
                .and_then(|i| document.position(i))
                .unwrap_or_default(),
        );
        self.normals.push(
            attributes
                .normal_index()
                .and_then(|i| document.normal(i))
                .unwrap_or_default(),
        );
        self.uvs.push(
            attributes
                .texcoord_index()
                .and_then(|i| document.texcoord(i))
                .unwrap_or_default(),
        );
        Ok(index)
    }

    /// Positions as `x, y, z, x, y, z, ...`.
    pub fn positions_flat(&self) -> Vec<f32> {
        self.positions.iter().flatten().copied().collect()
    }

    /// Normals as `x, y, z, ...`.
    pub fn normals_flat(&self) -> Vec<f32> {
        self.normals.iter().flatten().copied().collect()
    }

    /// Texture coordinates as `u, v, u, v, ...`.
    pub fn uvs_flat(&self) -> Vec<f32> {
        self.uvs.iter().flatten().copied().collect()
    }

    /// Number of distinct output vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_str;

    #[test]
    fn test_export_raw_shares_identical_vertices() {
        let doc = parse_str(
            "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nvn 0 0 1\nf 1//1 2//1 3//1 4//1\n",
        )
        .unwrap();

        let raw = export_raw(&doc).unwrap();

        assert_eq!(raw.vertex_count(), 4);
        assert_eq!(raw.triangle_count(), 2);
        assert_eq!(raw.indices.len(), 6);
        assert!(raw.normals.iter().all(|n| *n == [0.0, 0.0, 1.0]));
        assert_eq!(raw.positions_flat().len(), 12);
    }

    #[test]
    fn test_export_raw_splits_on_differing_attributes() {
        let doc = parse_str(
            "v 0 0 0\nv 1 0 0\nv 1 1 0\nvt 0 0\nvt 1 1\nf 1/1 2/1 3/1\nf 1/2 2/1 3/1\n",
        )
        .unwrap();

        let raw = export_raw(&doc).unwrap();

        // Position 1 appears with two different texcoords.
        assert_eq!(raw.vertex_count(), 4);
        assert_eq!(raw.indices, vec![0, 1, 2, 3, 1, 2]);
        assert_eq!(raw.uvs[3], [1.0, 1.0]);
    }

    #[test]
    fn test_missing_attributes_are_zero() {
        let doc = parse_str("v 1 2 3\nv 4 5 6\nv 7 8 9\nf 1 2 3\n").unwrap();
        let raw = export_raw(&doc).unwrap();

        assert_eq!(raw.normals_flat(), vec![0.0; 9]);
        assert_eq!(raw.uvs_flat(), vec![0.0; 6]);
    }

    #[test]
    fn test_vertex_index_limit() {
        assert_eq!(next_index(0).unwrap(), 0);
        assert_eq!(next_index(u32::MAX as usize).unwrap(), u32::MAX);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_vertex_index_overflow_is_an_error() {
        let err = next_index(u32::MAX as usize + 1).unwrap_err();
        assert!(matches!(err, WavefrontError::Export(_)));
    }
}
