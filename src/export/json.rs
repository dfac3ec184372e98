//! JSON export.

use crate::error::Result;
use crate::wavefront::Wavefront;

/// Serialize a document as pretty-printed JSON.
pub fn export_json(document: &Wavefront) -> Result<String> {
    Ok(serde_json::to_string_pretty(document)?)
}
