//! In-memory editing surface.
use crate::*;
use std::collections::BTreeMap;

/// A text widget held entirely in memory.
///
/// Positions handed in from outside are clamped into the buffer: a line past
/// the end lands on the last line, a column past the end of its line lands at
/// the end of that line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemorySurface {
    lines: Vec<String>,
    cursor: CursorPosition,
    selection: Option<(CursorPosition, CursorPosition)>,
    options: BTreeMap<&'static str, EditorOption>,
    focused: bool,
    refreshes: usize,
}

impl Default for MemorySurface {
    fn default() -> Self {
        Self::new("")
    }
}

impl MemorySurface {
    pub fn new(text: &str) -> Self {
        Self {
            lines: split_lines(text).into_iter().map(str::to_string).collect(),
            cursor: CursorPosition::default(),
            selection: None,
            options: BTreeMap::new(),
            focused: false,
            refreshes: 0,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Move the caret, dropping any selection.
    pub fn set_cursor(&mut self, pos: CursorPosition) {
        self.cursor = self.clamp(pos);
        self.selection = None;
    }

    /// Current selection as `(anchor, head)`.
    pub fn selection(&self) -> Option<(CursorPosition, CursorPosition)> {
        self.selection
    }

    /// Text between the selection's endpoints, in buffer order.
    pub fn selected_text(&self) -> Option<String> {
        let (anchor, head) = self.selection?;
        let (from, to) = (anchor.min(head), anchor.max(head));
        let from_byte = self.byte_offset(from);
        let to_byte = self.byte_offset(to);
        Some(self.lines.join("\n")[from_byte..to_byte].to_string())
    }

    pub fn option(&self, name: &str) -> Option<&EditorOption> {
        self.options.get(name)
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn refreshes(&self) -> usize {
        self.refreshes
    }

    fn clamp(&self, pos: CursorPosition) -> CursorPosition {
        let last = self.lines.len().saturating_sub(1);
        if pos.line > last {
            return CursorPosition::new(last, self.lines[last].len());
        }
        let line = &self.lines[pos.line];
        let mut column = pos.column.min(line.len());
        while !line.is_char_boundary(column) {
            column -= 1;
        }
        CursorPosition::new(pos.line, column)
    }

    /// Byte offset of a clamped position in the joined text.
    fn byte_offset(&self, pos: CursorPosition) -> usize {
        let pos = self.clamp(pos);
        self.lines[..pos.line].iter().map(|l| l.len() + 1).sum::<usize>() + pos.column
    }
}

impl EditorSurface for MemorySurface {
    fn full_text(&self) -> String {
        self.lines.join("\n")
    }

    fn set_full_text(&mut self, text: &str) {
        self.lines = split_lines(text).into_iter().map(str::to_string).collect();
        self.cursor = self.clamp(self.cursor);
        self.selection = None;
    }

    fn cursor(&self) -> CursorPosition {
        self.cursor
    }

    fn set_selection(&mut self, anchor: CursorPosition, head: CursorPosition) {
        let (anchor, head) = (self.clamp(anchor), self.clamp(head));
        trace!("Selecting {anchor} -> {head}");
        self.selection = Some((anchor, head));
        self.cursor = head;
    }

    fn replace_range(&mut self, text: &str, at: CursorPosition) {
        let at = self.clamp(at);
        let tail = self.lines[at.line].split_off(at.column);
        let mut inserted = split_lines(text).into_iter();
        // split_lines always yields at least one piece.
        self.lines[at.line].push_str(inserted.next().unwrap_or_default());
        let mut line = at.line;
        for piece in inserted {
            line += 1;
            self.lines.insert(line, piece.to_string());
        }
        let column = self.lines[line].len();
        self.lines[line].push_str(&tail);
        self.cursor = CursorPosition::new(line, column);
        self.selection = None;
    }

    fn focus(&mut self) {
        self.focused = true;
    }

    fn set_option(&mut self, option: EditorOption) {
        debug!("Setting option {option}");
        self.options.insert(option.name(), option);
    }

    fn refresh(&mut self) {
        self.refreshes += 1;
    }
}
