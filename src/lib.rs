//! # Wavefront Mesher
//!
//! A Rust library for reading Wavefront OBJ geometry into flat buffers.
//!
//! ## Overview
//!
//! Positions, normals and texture coordinates are collected into three flat
//! `f32` buffers in file order. Faces are resolved from OBJ's 1-based and
//! relative indices into 0-based [`VertexAttributes`] triples, and quads are
//! split into two triangles along their shorter diagonal. The result is a
//! [`Wavefront`] document holding the buffers and a single triangulated
//! [`Shape`].
//!
//! Materials, groups and objects are accepted but ignored; every face ends up
//! in the same shape.
//!
//! ## Quick Start
//!
//! ```ignore
//! use wavefront_mesher::{load_wavefront, export_obj};
//!
//! let document = load_wavefront("path/to/model.obj")?;
//!
//! let shape = &document.shapes()[0];
//! for [a, b, c] in shape.triangles() {
//!     let p = document.position(a.position as usize);
//!     // ...
//! }
//!
//! let obj = export_obj(&document, "model")?;
//! ```
//!
//! Files in other encodings go through [`WavefrontFile`]:
//!
//! ```ignore
//! use wavefront_mesher::{ParserConfig, WavefrontFile};
//!
//! let config = ParserConfig::default().with_encoding_label("latin1")?;
//! let document = WavefrontFile::with_config("legacy.obj", config).parse()?;
//! ```

pub mod error;
pub mod export;
pub mod parser;
pub mod types;
pub mod wavefront;

// Re-export main types for convenience
pub use error::{ParseErrorKind, Result, WavefrontError};
pub use export::{export_json, export_obj, export_raw, RawMeshData};
pub use parser::{parse_reader, parse_str, ParserConfig, Record, WavefrontParser};
pub use types::{BoundingBox, VertexAttributes};
pub use wavefront::{Shape, Wavefront, WavefrontFile};

/// Load a UTF-8 OBJ file from a path.
pub fn load_wavefront<P: AsRef<std::path::Path>>(path: P) -> Result<Wavefront> {
    WavefrontFile::new(path).parse()
}
