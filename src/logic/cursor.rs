use derive_more::Display;

/// Caret position inside a buffer. `column` is carried for the surface and
/// plays no part in statement resolution.
#[derive(Debug, Display, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[display("{line}:{column}")]
pub struct CursorPosition {
    pub line: usize,
    pub column: usize,
}

impl CursorPosition {
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Column zero of `line`.
    pub const fn line_start(line: usize) -> Self {
        Self { line, column: 0 }
    }
}

impl From<(usize, usize)> for CursorPosition {
    fn from((line, column): (usize, usize)) -> Self {
        Self::new(line, column)
    }
}
