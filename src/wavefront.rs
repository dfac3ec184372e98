//! Parsed document types.
//!
//! A [`Wavefront`] owns three flat float buffers and the triangulated
//! [`Shape`]s that index into them. Buffers are laid out with a fixed stride:
//!
//! ```text
//! positions   | x y z | x y z | ... |   3 floats per vertex
//! normals     | x y z | x y z | ... |   3 floats per vertex
//! texcoords   | u v   | u v   | ... |   2 floats per vertex
//! ```

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{Result, WavefrontError};
use crate::parser::{parse_str, ParserConfig};
use crate::types::{BoundingBox, VertexAttributes};

/// A triangulated index stream.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Shape {
    indices: Vec<VertexAttributes>,
    vertex_counts: Vec<usize>,
}

impl Shape {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push_triangle(&mut self, triangle: [VertexAttributes; 3]) {
        self.indices.extend_from_slice(&triangle);
        self.vertex_counts.push(3);
    }

    /// Three entries per triangle, in output order.
    pub fn indices(&self) -> &[VertexAttributes] {
        &self.indices
    }

    /// Vertex count of each emitted face. Always 3 after triangulation.
    pub fn vertex_counts(&self) -> &[usize] {
        &self.vertex_counts
    }

    pub fn triangle_count(&self) -> usize {
        self.vertex_counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn triangles(&self) -> impl Iterator<Item = [VertexAttributes; 3]> + '_ {
        self.indices
            .chunks_exact(3)
            .map(|triangle| [triangle[0], triangle[1], triangle[2]])
    }
}

/// A parsed Wavefront OBJ document.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Wavefront {
    positions: Vec<f32>,
    normals: Vec<f32>,
    texcoords: Vec<f32>,
    shapes: Vec<Shape>,
}

impl Wavefront {
    pub(crate) fn from_parts(
        positions: Vec<f32>,
        normals: Vec<f32>,
        texcoords: Vec<f32>,
        shapes: Vec<Shape>,
    ) -> Self {
        Self {
            positions,
            normals,
            texcoords,
            shapes,
        }
    }

    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    pub fn normals(&self) -> &[f32] {
        &self.normals
    }

    pub fn texcoords(&self) -> &[f32] {
        &self.texcoords
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Number of positions (not floats).
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn normal_count(&self) -> usize {
        self.normals.len() / 3
    }

    pub fn texcoord_count(&self) -> usize {
        self.texcoords.len() / 2
    }

    pub fn position(&self, index: usize) -> Option<[f32; 3]> {
        stride_get(&self.positions, index)
    }

    pub fn normal(&self, index: usize) -> Option<[f32; 3]> {
        stride_get(&self.normals, index)
    }

    pub fn texcoord(&self, index: usize) -> Option<[f32; 2]> {
        stride_get(&self.texcoords, index)
    }

    pub fn total_triangles(&self) -> usize {
        self.shapes.iter().map(Shape::triangle_count).sum()
    }

    /// Bounding box of every position, referenced or not.
    pub fn bounds(&self) -> Option<BoundingBox> {
        BoundingBox::from_points((0..self.vertex_count()).filter_map(|i| self.position(i)))
    }
}

fn stride_get<const N: usize>(buffer: &[f32], index: usize) -> Option<[f32; N]> {
    let start = index.checked_mul(N)?;
    let slice = buffer.get(start..start.checked_add(N)?)?;
    slice.try_into().ok()
}

/// An OBJ file on disk together with how to read it.
#[derive(Debug, Clone)]
pub struct WavefrontFile {
    path: PathBuf,
    config: ParserConfig,
}

impl WavefrontFile {
    /// Read `path` as UTF-8.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self::with_config(path, ParserConfig::default())
    }

    pub fn with_config<P: AsRef<Path>>(path: P, config: ParserConfig) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            config,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Read, decode and parse the file.
    ///
    /// Every call starts from empty buffers, so parsing the same unchanged
    /// file twice gives equal documents.
    pub fn parse(&self) -> Result<Wavefront> {
        if !self.path.exists() {
            return Err(WavefrontError::FileNotFound(self.path.clone()));
        }

        let bytes = read_source(&self.path)?;
        let (text, encoding, had_errors) = self.config.encoding.decode(&bytes);
        if had_errors {
            return Err(WavefrontError::Decode {
                encoding: encoding.name(),
                path: self.path.clone(),
            });
        }

        let document = parse_str(&text)?;
        tracing::debug!(
            path = %self.path.display(),
            encoding = encoding.name(),
            vertices = document.vertex_count(),
            triangles = document.total_triangles(),
            "parsed wavefront file"
        );
        Ok(document)
    }
}

/// The handle is closed when `file` drops, including on early returns.
fn read_source(path: &Path) -> Result<Vec<u8>> {
    let mut file = File::open(path)?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;
    Ok(bytes)
}
