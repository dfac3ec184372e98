//! Wavefront OBJ parsing.
//!
//! Parsing is two passes. The line pass classifies each line and grows the
//! [`GeometryAccumulator`]; once input ends, [`triangulate`] turns the queued
//! faces into a single [`Shape`](crate::Shape). The accumulator is consumed by
//! [`WavefrontParser::finish`], so nothing can be appended after
//! triangulation has run.

pub mod accumulator;
pub mod index;
pub mod record;
pub mod triangulate;

pub use accumulator::{Face, GeometryAccumulator};
pub use index::{fix_index, resolve_vertex, BufferCounts};
pub use record::Record;
pub use triangulate::{split_quad, triangulate};

use std::io::BufRead;

use encoding_rs::{Encoding, UTF_8};

use crate::error::{Result, WavefrontError};
use crate::wavefront::Wavefront;

/// Parser configuration.
#[derive(Debug, Clone, Copy)]
pub struct ParserConfig {
    /// Text encoding of the source file. A byte order mark overrides it.
    pub encoding: &'static Encoding,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self { encoding: UTF_8 }
    }
}

impl ParserConfig {
    pub fn with_encoding(mut self, encoding: &'static Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Select the encoding by label, e.g. `"utf-8"`, `"latin1"` or `"utf-16le"`.
    pub fn with_encoding_label(self, label: &str) -> Result<Self> {
        let encoding = Encoding::for_label(label.trim().as_bytes())
            .ok_or_else(|| WavefrontError::UnknownEncoding(label.to_string()))?;
        Ok(self.with_encoding(encoding))
    }
}

/// Incremental line-by-line parser.
#[derive(Debug, Default)]
pub struct WavefrontParser {
    accumulator: GeometryAccumulator,
    lines: usize,
}

impl WavefrontParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the next line of input.
    ///
    /// A byte order mark in front of the first line is dropped.
    pub fn feed_line(&mut self, line: &str) -> Result<Record> {
        let line = if self.lines == 0 {
            line.strip_prefix('\u{FEFF}').unwrap_or(line)
        } else {
            line
        };
        self.lines += 1;
        record::parse_line(line, self.lines, &mut self.accumulator)
            .map_err(|kind| WavefrontError::parse(self.lines, line, kind))
    }

    pub fn lines_read(&self) -> usize {
        self.lines
    }

    /// Triangulate the queued faces and hand over the buffers.
    pub fn finish(self) -> Result<Wavefront> {
        let shape = triangulate(&self.accumulator)?;
        let GeometryAccumulator {
            positions,
            normals,
            texcoords,
            ..
        } = self.accumulator;

        Ok(Wavefront::from_parts(positions, normals, texcoords, vec![shape]))
    }
}

/// Parse OBJ text held in memory.
pub fn parse_str(source: &str) -> Result<Wavefront> {
    let mut parser = WavefrontParser::new();
    for line in source.lines() {
        parser.feed_line(line)?;
    }
    parser.finish()
}

/// Parse UTF-8 OBJ text from a reader.
pub fn parse_reader<R: BufRead>(reader: R) -> Result<Wavefront> {
    let mut parser = WavefrontParser::new();
    for line in reader.lines() {
        parser.feed_line(&line?)?;
    }
    parser.finish()
}
