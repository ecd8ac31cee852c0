//! Half-open line ranges produced by the resolver.
use crate::*;
use derive_more::Display;
use itertools::Itertools as _;

/// Lines `[start, end)` of a buffer.
///
/// Invariants:
/// - `start <= end`
/// - `end` may sit one past the last line; selecting such a range puts the
///   head at the start of a line that does not exist yet, which the surface
///   clamps to the end of the buffer.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[display("[{start}, {end})")]
pub struct LineRange {
    start: usize,
    end: usize,
}

impl LineRange {
    /// Construct a range, ordering the bounds so that `start <= end` holds.
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start: start.min(end),
            end: start.max(end),
        }
    }

    pub const fn start(&self) -> usize {
        self.start
    }

    pub const fn end(&self) -> usize {
        self.end
    }

    /// Number of lines covered.
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub const fn contains(&self, line: usize) -> bool {
        line >= self.start && line < self.end
    }

    /// Selection anchor: column zero of the first line.
    pub const fn anchor(&self) -> CursorPosition {
        CursorPosition::line_start(self.start)
    }

    /// Selection head: column zero of the line after the last one.
    pub const fn head(&self) -> CursorPosition {
        CursorPosition::line_start(self.end)
    }

    /// The lines of `lines` covered by this range, clamped to the buffer.
    pub fn slice<'a, S: AsRef<str>>(&self, lines: &'a [S]) -> &'a [S] {
        let end = self.end.min(lines.len());
        let start = self.start.min(end);
        &lines[start..end]
    }

    /// Text of the covered lines joined with `'\n'`.
    pub fn text<S: AsRef<str>>(&self, lines: &[S]) -> String {
        self.slice(lines).iter().map(AsRef::<str>::as_ref).join("\n")
    }
}

impl From<std::ops::Range<usize>> for LineRange {
    fn from(value: std::ops::Range<usize>) -> Self {
        Self::new(value.start, value.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_ordered() {
        let range = LineRange::new(4, 1);
        assert_eq!((range.start(), range.end()), (1, 4));
        assert_eq!(range.len(), 3);
    }

    #[test]
    fn selection_endpoints_sit_on_column_zero() {
        let range = LineRange::from(1..3);
        assert_eq!(range.anchor(), CursorPosition::new(1, 0));
        assert_eq!(range.head(), CursorPosition::new(3, 0));
        assert_eq!(range.to_string(), "[1, 3)");
    }

    #[test]
    fn contains_is_half_open() {
        let range = LineRange::from(2..4);
        assert!(!range.contains(1));
        assert!(range.contains(2));
        assert!(range.contains(3));
        assert!(!range.contains(4));
        assert!(LineRange::from(2..2).is_empty());
    }

    #[test]
    fn text_is_clamped_to_buffer() {
        let lines = ["SELECT 1", "FROM t;"];
        assert_eq!(LineRange::from(0..2).text(&lines), "SELECT 1\nFROM t;");
        assert_eq!(LineRange::from(1..3).text(&lines), "FROM t;");
        assert_eq!(LineRange::from(5..9).text(&lines), "");
    }
}
