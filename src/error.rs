//! Error types for Wavefront parsing.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using WavefrontError.
pub type Result<T> = std::result::Result<T, WavefrontError>;

/// Main error type for Wavefront operations.
///
/// Every variant is fatal: a document that fails with one of these is never
/// returned partially built. Recoverable problems (degenerate faces) are
/// reported through `tracing` instead.
#[derive(Error, Debug)]
pub enum WavefrontError {
    /// I/O error while reading the input.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input file does not exist.
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// The requested text encoding label is not known.
    #[error("Unknown text encoding: {0}")]
    UnknownEncoding(String),

    /// The input bytes are not valid in the selected encoding.
    #[error("Malformed {encoding} text in {}", .path.display())]
    Decode {
        encoding: &'static str,
        path: PathBuf,
    },

    /// A record could not be parsed.
    #[error("Parse error on line {line}: {kind} (\"{content}\")")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// The offending line as read.
        content: String,
        kind: ParseErrorKind,
    },

    /// A face has more vertices than the triangulator handles.
    #[error("Face on line {line} has {vertex_count} vertices, at most 4 are supported")]
    UnsupportedPolygon { line: usize, vertex_count: usize },

    /// Failed to export a document.
    #[error("Export error: {0}")]
    Export(String),

    /// Failed to serialize a document.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// What went wrong inside a single record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Fewer fields than the record needs.
    #[error("{record} record needs {expected} components, found {found}")]
    MissingComponents {
        record: &'static str,
        expected: usize,
        found: usize,
    },

    /// A component is not a float.
    #[error("invalid float '{value}' in {record} record")]
    InvalidFloat { record: &'static str, value: String },

    /// A face index is not an integer.
    #[error("invalid face index '{0}'")]
    InvalidIndex(String),

    /// A face vertex token has the wrong shape (slot count or empty slot).
    #[error("malformed face vertex '{0}'")]
    MalformedVertexToken(String),

    /// OBJ indices are 1-based; zero never refers to anything.
    #[error("face index 0 is invalid, OBJ indices are 1-based")]
    ZeroIndex,

    /// A relative index reaches before the first element.
    #[error("relative index {index} is out of range ({count} available)")]
    NegativeIndexOutOfRange { index: i64, count: usize },
}

impl WavefrontError {
    /// Attach line context to a record error.
    pub(crate) fn parse(line: usize, content: &str, kind: ParseErrorKind) -> Self {
        WavefrontError::Parse {
            line,
            content: content.to_string(),
            kind,
        }
    }

    /// The 1-based line the error points at, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            WavefrontError::Parse { line, .. } | WavefrontError::UnsupportedPolygon { line, .. } => {
                Some(*line)
            }
            _ => None,
        }
    }
}
