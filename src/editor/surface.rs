use crate::*;

/// Capabilities the editor core needs from a text-editing widget.
///
/// The widget owns the buffer. Implementations render the selection, focus
/// and options however they like; the core only issues the requests.
pub trait EditorSurface {
    /// Whole buffer, lines joined by `'\n'`.
    fn full_text(&self) -> String;

    /// Replace the whole buffer.
    fn set_full_text(&mut self, text: &str);

    fn cursor(&self) -> CursorPosition;

    /// Select from `anchor` to `head`; the head is where the caret ends up.
    fn set_selection(&mut self, anchor: CursorPosition, head: CursorPosition);

    /// Insert `text` at the zero-width range `at`.
    fn replace_range(&mut self, text: &str, at: CursorPosition);

    fn focus(&mut self);

    fn set_option(&mut self, option: EditorOption);

    /// Re-measure and redraw.
    fn refresh(&mut self) {}
}
