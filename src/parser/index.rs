//! Face vertex token resolution.
//!
//! A face vertex is written as `i`, `i/j`, `i/j/k` or `i//k`, where `i`
//! indexes positions, `j` texcoords and `k` normals. OBJ indices are 1-based
//! and negative values count back from the end of what has been read so far.

use crate::error::ParseErrorKind;
use crate::types::VertexAttributes;

/// Buffer sizes in vertices (not floats) at a point in the stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BufferCounts {
    pub positions: usize,
    pub normals: usize,
    pub texcoords: usize,
}

/// Convert a raw OBJ index into a 0-based one.
///
/// `count` is the number of elements of the referenced kind read so far and
/// only matters for negative (relative) indices. Positive indices are not
/// checked against it here.
pub fn fix_index(raw: i64, count: usize) -> Result<isize, ParseErrorKind> {
    let resolved = match raw {
        0 => return Err(ParseErrorKind::ZeroIndex),
        x if x > 0 => x - 1,
        x => {
            let result = i64::try_from(count).unwrap_or(i64::MAX).saturating_add(x);
            if result < 0 {
                return Err(ParseErrorKind::NegativeIndexOutOfRange { index: x, count });
            }
            result
        }
    };

    isize::try_from(resolved).map_err(|_| ParseErrorKind::InvalidIndex(raw.to_string()))
}

/// Resolve one face vertex token against the current buffer sizes.
pub fn resolve_vertex(
    token: &str,
    counts: BufferCounts,
) -> Result<VertexAttributes, ParseErrorKind> {
    let mut slots = token.split('/');
    let position = slots.next().unwrap_or_default();
    let texcoord = slots.next();
    let normal = slots.next();

    if slots.next().is_some() {
        return Err(ParseErrorKind::MalformedVertexToken(token.to_string()));
    }

    let position = fix_index(parse_slot(position, token)?, counts.positions)?;
    let Some(texcoord) = texcoord else {
        return Ok(VertexAttributes::position_only(position));
    };

    let texcoord = match texcoord {
        // `i//k`
        "" if normal.is_some() => VertexAttributes::ABSENT,
        slot => fix_index(parse_slot(slot, token)?, counts.texcoords)?,
    };

    let normal = match normal {
        None => VertexAttributes::ABSENT,
        Some(slot) => fix_index(parse_slot(slot, token)?, counts.normals)?,
    };

    Ok(VertexAttributes::new(position, normal, texcoord))
}

fn parse_slot(slot: &str, token: &str) -> Result<i64, ParseErrorKind> {
    if slot.is_empty() {
        return Err(ParseErrorKind::MalformedVertexToken(token.to_string()));
    }
    slot.parse::<i64>()
        .map_err(|_| ParseErrorKind::InvalidIndex(slot.to_string()))
}
