//! Source location tracking for path list files.
//!
//! Path data strings are stored one per line in a list file. Parser stop
//! offsets are relative to a single entry; these types lift them back to
//! line/column positions in the file for diagnostics.

use std::fmt;

/// A location in source text (byte offset, line, column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Location {
    /// Byte offset from start of file
    pub offset: usize,
    /// Line number (1-indexed)
    pub line: u32,
    /// Column number (1-indexed, in characters not bytes)
    pub column: u32,
}

impl Location {
    pub fn new(offset: usize, line: u32, column: u32) -> Self {
        Self { offset, line, column }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A span in source text (start inclusive, end exclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: Location,
    pub end: Location,
}

impl Span {
    pub fn new(start: Location, end: Location) -> Self {
        Self { start, end }
    }

    /// Create a span from byte offsets into `source`.
    pub fn from_offsets(source: &str, start_offset: usize, end_offset: usize) -> Self {
        Self {
            start: offset_to_location(source, start_offset),
            end: offset_to_location(source, end_offset),
        }
    }

    /// A span covering `len` characters at byte `offset` inside this span's
    /// text. `offset` must lie on a character boundary.
    ///
    /// Entries never contain newlines, so the column advances by the
    /// number of characters between the span start and `offset`.
    pub fn sub_span(&self, text: &str, offset: usize, len: usize) -> Span {
        let offset = offset.min(text.len());
        let end = text[offset..]
            .char_indices()
            .nth(len)
            .map_or(text.len(), |(i, _)| offset + i);
        let shift = |at: usize| Location {
            offset: self.start.offset + at,
            line: self.start.line,
            column: self.start.column + text[..at].chars().count() as u32,
        };
        Span::new(shift(offset), shift(end))
    }

    /// Byte length of the span.
    pub fn len(&self) -> usize {
        self.end.offset.saturating_sub(self.start.offset)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start.line == self.end.line {
            write!(f, "{}:{}-{}", self.start.line, self.start.column, self.end.column)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

/// A value with an associated source span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spanned<T> {
    pub value: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(value: T, span: Span) -> Self {
        Self { value, span }
    }
}

/// Convert a byte offset to a Location (line/column).
pub fn offset_to_location(source: &str, offset: usize) -> Location {
    let offset = offset.min(source.len());
    let before = &source[..offset];

    let line = before.bytes().filter(|&b| b == b'\n').count() as u32 + 1;
    let last_newline = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
    let column = before[last_newline..].chars().count() as u32 + 1;

    Location { offset, line, column }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_to_location() {
        let source = "M0 0\nL1 1";

        assert_eq!(offset_to_location(source, 0), Location::new(0, 1, 1));
        assert_eq!(offset_to_location(source, 4), Location::new(4, 1, 5));
        assert_eq!(offset_to_location(source, 5), Location::new(5, 2, 1));
        assert_eq!(offset_to_location(source, 99), Location::new(9, 2, 5));
    }

    #[test]
    fn test_sub_span_on_second_line() {
        let source = "# icons\n  M0 0,,1 1";
        let entry = "M0 0,,1 1";
        let span = Span::from_offsets(source, 10, source.len());

        let stop = span.sub_span(entry, 5, 1);

        assert_eq!(stop.start, Location::new(15, 2, 8));
        assert_eq!(stop.end, Location::new(16, 2, 9));
        assert_eq!(stop.to_string(), "2:8-9");
    }

    #[test]
    fn test_sub_span_covers_whole_character() {
        let entry = "M0 0 \u{2212}5";
        let span = Span::from_offsets(entry, 0, entry.len());

        let stop = span.sub_span(entry, 5, 1);

        assert_eq!(stop.start, Location::new(5, 1, 6));
        assert_eq!(stop.end, Location::new(8, 1, 7));
        assert_eq!(stop.len(), '\u{2212}'.len_utf8());
    }

    #[test]
    fn test_sub_span_clamps_at_end() {
        let source = "M0 0 1";
        let span = Span::from_offsets(source, 0, source.len());

        let stop = span.sub_span(source, source.len(), 1);

        assert!(stop.is_empty());
        assert_eq!(stop.start.column, 7);
    }
}
