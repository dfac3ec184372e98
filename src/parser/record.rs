//! Line classification and per-record parsing.
//!
//! Each line is split into whitespace-separated fields and dispatched on its
//! first field through [`RECORDS`]. Markers that are not in the table are
//! skipped.

use super::accumulator::{Face, GeometryAccumulator};
use super::index::resolve_vertex;
use crate::error::ParseErrorKind;

/// The kind of an OBJ line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Record {
    Comment,
    Position,
    Normal,
    TexCoord,
    Face,
    Object,
    Group,
    UseMaterial,
    MaterialLibrary,
    /// Blank line or a marker not in the table.
    Unknown,
}

type Handler = fn(&[&str], usize, &mut GeometryAccumulator) -> Result<(), ParseErrorKind>;

/// Marker → record kind and handler.
const RECORDS: &[(&str, Record, Handler)] = &[
    ("#", Record::Comment, ignore),
    ("v", Record::Position, parse_position),
    ("vn", Record::Normal, parse_normal),
    ("vt", Record::TexCoord, parse_texcoord),
    ("f", Record::Face, parse_face),
    // Materials and grouping are accepted but have no effect on the output.
    ("o", Record::Object, ignore),
    ("g", Record::Group, ignore),
    ("usemtl", Record::UseMaterial, ignore),
    ("mtllib", Record::MaterialLibrary, ignore),
];

impl Record {
    /// Classify a line by its leading marker.
    pub fn classify(marker: &str) -> Record {
        lookup(marker).map_or(Record::Unknown, |(record, _)| record)
    }
}

fn lookup(marker: &str) -> Option<(Record, Handler)> {
    RECORDS
        .iter()
        .find(|(m, _, _)| *m == marker)
        .map(|(_, record, handler)| (*record, *handler))
}

/// Parse one line into the accumulator and report what kind of line it was.
///
/// `line_number` is 1-based and is stored on faces for later diagnostics.
pub fn parse_line(
    line: &str,
    line_number: usize,
    accumulator: &mut GeometryAccumulator,
) -> Result<Record, ParseErrorKind> {
    let fields: Vec<&str> = line.split_ascii_whitespace().collect();
    let Some((marker, payload)) = fields.split_first() else {
        return Ok(Record::Unknown);
    };

    match lookup(marker) {
        Some((record, handler)) => {
            handler(payload, line_number, accumulator)?;
            Ok(record)
        }
        None => {
            tracing::debug!(line = line_number, marker = *marker, "skipping unsupported record");
            Ok(Record::Unknown)
        }
    }
}

fn ignore(_: &[&str], _: usize, _: &mut GeometryAccumulator) -> Result<(), ParseErrorKind> {
    Ok(())
}

fn parse_position(
    fields: &[&str],
    _: usize,
    accumulator: &mut GeometryAccumulator,
) -> Result<(), ParseErrorKind> {
    // A trailing `w` or vertex color is ignored.
    accumulator.push_position(parse_floats("vertex", fields)?);
    Ok(())
}

fn parse_normal(
    fields: &[&str],
    _: usize,
    accumulator: &mut GeometryAccumulator,
) -> Result<(), ParseErrorKind> {
    accumulator.push_normal(parse_floats("normal", fields)?);
    Ok(())
}

fn parse_texcoord(
    fields: &[&str],
    _: usize,
    accumulator: &mut GeometryAccumulator,
) -> Result<(), ParseErrorKind> {
    accumulator.push_texcoord(parse_floats("texcoord", fields)?);
    Ok(())
}

fn parse_face(
    fields: &[&str],
    line_number: usize,
    accumulator: &mut GeometryAccumulator,
) -> Result<(), ParseErrorKind> {
    // Indices resolve against what has been read up to this line.
    let counts = accumulator.counts();
    let vertices = fields
        .iter()
        .map(|token| resolve_vertex(token, counts))
        .collect::<Result<Vec<_>, _>>()?;

    accumulator.push_face(Face {
        line: line_number,
        vertices,
    });
    Ok(())
}

/// Parse the first `N` fields as floats.
fn parse_floats<const N: usize>(
    record: &'static str,
    fields: &[&str],
) -> Result<[f32; N], ParseErrorKind> {
    if fields.len() < N {
        return Err(ParseErrorKind::MissingComponents {
            record,
            expected: N,
            found: fields.len(),
        });
    }

    let mut values = [0.0; N];
    for (value, field) in values.iter_mut().zip(fields) {
        *value = field.parse::<f32>().map_err(|_| ParseErrorKind::InvalidFloat {
            record,
            value: field.to_string(),
        })?;
    }
    Ok(values)
}
