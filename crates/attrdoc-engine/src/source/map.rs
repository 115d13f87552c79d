use xi_rope::Rope;

use super::span::{Location, SourcePosition, SourceSpan, Span};

/// Maps byte offsets in a piece of text to points in its source file.
///
/// The text is assumed to start at `origin`: offsets on its first line are
/// shifted by the origin column, later lines start at column 0, and line
/// numbers count on from the origin line.
pub struct SourceMap {
    rope: Rope,
    origin: Location,
}

impl SourceMap {
    pub fn new(text: &str, origin: Location) -> Self {
        Self {
            rope: Rope::from(text),
            origin,
        }
    }

    /// Converts a byte offset into a point. Offsets past the end clamp to it.
    pub fn position(&self, offset: usize) -> SourcePosition {
        let offset = offset.min(self.rope.len());
        let line = self.rope.line_of_offset(offset);
        let column = offset - self.rope.offset_of_line(line);
        if line == 0 {
            SourcePosition::new(self.origin.start.line, self.origin.start.column + column)
        } else {
            SourcePosition::new(self.origin.start.line + line, column)
        }
    }

    /// Converts a byte range into a file-qualified span.
    pub fn span(&self, span: Span) -> SourceSpan {
        SourceSpan {
            file: self.origin.file.clone(),
            start: self.position(span.start),
            end: self.position(span.end),
        }
    }

    /// The slice of text covered by `span`.
    pub fn slice(&self, span: Span) -> String {
        let end = span.end.min(self.rope.len());
        let start = span.start.min(end);
        self.rope.slice_to_cow(start..end).into_owned()
    }
}
