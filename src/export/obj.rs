//! Wavefront OBJ export.
//!
//! Writes a parsed document back out with every face already triangulated.
//! Parsing the result gives back the same buffers and index stream.

use crate::error::{Result, WavefrontError};
use crate::types::VertexAttributes;
use crate::wavefront::Wavefront;
use std::fmt::Write;

/// Export a document to OBJ text.
pub fn export_obj(document: &Wavefront, name: &str) -> Result<String> {
    let mut obj = String::with_capacity(
        256 + document.vertex_count() * 40 + document.total_triangles() * 40,
    );
    write_obj(&mut obj, document, name).map_err(|e| WavefrontError::Export(e.to_string()))?;
    Ok(obj)
}

fn write_obj(obj: &mut String, document: &Wavefront, name: &str) -> std::fmt::Result {
    writeln!(obj, "# wavefront-mesher OBJ export")?;
    writeln!(obj, "# Vertices: {}", document.vertex_count())?;
    writeln!(obj, "# Triangles: {}", document.total_triangles())?;
    writeln!(obj)?;

    writeln!(obj, "o {}", name)?;
    writeln!(obj)?;

    for p in document.positions().chunks_exact(3) {
        writeln!(obj, "v {} {} {}", p[0], p[1], p[2])?;
    }
    for t in document.texcoords().chunks_exact(2) {
        writeln!(obj, "vt {} {}", t[0], t[1])?;
    }
    for n in document.normals().chunks_exact(3) {
        writeln!(obj, "vn {} {} {}", n[0], n[1], n[2])?;
    }
    writeln!(obj)?;

    for shape in document.shapes() {
        for [a, b, c] in shape.triangles() {
            write!(obj, "f")?;
            for vertex in [a, b, c] {
                write!(obj, " ")?;
                write_vertex(obj, vertex)?;
            }
            writeln!(obj)?;
        }
    }

    Ok(())
}

/// Shortest token form that carries the attributes present.
fn write_vertex(obj: &mut String, vertex: VertexAttributes) -> std::fmt::Result {
    let position = vertex.position + 1;
    match (vertex.has_texcoord(), vertex.has_normal()) {
        (false, false) => write!(obj, "{}", position),
        (true, false) => write!(obj, "{}/{}", position, vertex.texcoord + 1),
        (false, true) => write!(obj, "{}//{}", position, vertex.normal + 1),
        (true, true) => write!(
            obj,
            "{}/{}/{}",
            position,
            vertex.texcoord + 1,
            vertex.normal + 1
        ),
    }
}
