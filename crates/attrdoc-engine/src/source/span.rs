use relative_path::RelativePathBuf;

/// A byte range `[start, end)` into a piece of source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl From<std::ops::Range<usize>> for Span {
    fn from(range: std::ops::Range<usize>) -> Self {
        Span {
            start: range.start,
            end: range.end,
        }
    }
}

/// A point in a source file.
///
/// Lines count from 1, columns are byte offsets from the start of the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SourcePosition {
    pub line: usize,
    pub column: usize,
}

impl SourcePosition {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Moves the point `n` columns to the right on the same line.
    #[must_use]
    pub fn shifted(self, n: usize) -> Self {
        Self {
            line: self.line,
            column: self.column + n,
        }
    }
}

impl std::fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A file-qualified range of source positions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceSpan {
    pub file: RelativePathBuf,
    pub start: SourcePosition,
    pub end: SourcePosition,
}

impl SourceSpan {
    pub fn new(file: impl Into<RelativePathBuf>, start: SourcePosition, end: SourcePosition) -> Self {
        Self {
            file: file.into(),
            start,
            end,
        }
    }

    /// The parse hint that starts where this span starts.
    pub fn location(&self) -> Location {
        Location {
            file: self.file.clone(),
            start: self.start,
        }
    }
}

impl std::fmt::Display for SourceSpan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}-{}", self.file, self.start, self.end)
    }
}

/// Where a piece of text begins in its file.
///
/// Handed to the markup parser so that the spans it produces point back
/// into the original source rather than into the extracted text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub file: RelativePathBuf,
    pub start: SourcePosition,
}

impl Location {
    pub fn new(file: impl Into<RelativePathBuf>, start: SourcePosition) -> Self {
        Self {
            file: file.into(),
            start,
        }
    }

    /// Skips `n` opening delimiter characters on the first line.
    #[must_use]
    pub fn padded(self, n: usize) -> Self {
        Self {
            file: self.file,
            start: self.start.shifted(n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padded_location_moves_column_only() {
        let loc = Location::new("lib.ml", SourcePosition::new(4, 2)).padded(3);
        assert_eq!(loc.start, SourcePosition::new(4, 5));
    }

    #[test]
    fn source_span_display() {
        let span = SourceSpan::new(
            "src/a.ml",
            SourcePosition::new(1, 0),
            SourcePosition::new(2, 7),
        );
        assert_eq!(span.to_string(), "src/a.ml:1:0-2:7");
    }
}
