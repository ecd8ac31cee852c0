use crate::*;

/// SQL editor bound to a text widget.
///
/// Holds the bound value, the change/touched observers, and forwards text
/// primitives and option toggles to the surface. Statement selection reads
/// the widget's text and cursor fresh on every call.
#[derive(Debug)]
pub struct Editor<S> {
    surface: S,
    text: String,
    on_change: Callback<str>,
    on_touched: Callback<()>,
}

impl<S: EditorSurface> Editor<S> {
    /// Wrap `surface`, apply `config`'s toggles and adopt the widget's text.
    pub fn new(mut surface: S, config: &EditorConfig) -> Self {
        for option in config.options() {
            surface.set_option(option);
        }
        if config.auto_focus {
            surface.focus();
        }
        let text = surface.full_text();
        Self {
            surface,
            text,
            on_change: Callback::new("change"),
            on_touched: Callback::new("touched"),
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    // --- Value binding ---

    pub fn on_change(&mut self, handler: impl FnMut(&str) + 'static) -> Result {
        self.on_change.register(handler)
    }

    pub fn on_touched(&mut self, handler: impl FnMut(&()) + 'static) -> Result {
        self.on_touched.register(handler)
    }

    /// The bound value.
    pub fn value(&self) -> &str {
        &self.text
    }

    /// Bind a new value from the owning model, notifying the change observer
    /// when it differs from the current one.
    pub fn set_value(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text != self.text {
            self.text = text;
            self.on_change.notify(&self.text);
        }
    }

    /// Push `text` into the widget if it differs from the bound value.
    pub fn set_text(&mut self, text: &str) {
        if text != self.text {
            self.text = text.to_string();
            self.surface.set_full_text(&self.text);
        }
    }

    /// Adopt edits made in the widget: notify the change observer if the text
    /// moved, then the touched observer.
    pub fn sync_from_surface(&mut self) {
        let current = self.surface.full_text();
        if current != self.text {
            self.text = current;
            self.on_change.notify(&self.text);
        }
        self.on_touched.notify(&());
    }

    // --- Text primitives ---

    /// Whole buffer as held by the widget.
    pub fn all_text(&self) -> String {
        self.surface.full_text()
    }

    pub fn cursor(&self) -> CursorPosition {
        self.surface.cursor()
    }

    /// Insert `text` verbatim at the caret and focus the widget.
    pub fn insert_text(&mut self, text: &str) {
        let at = self.surface.cursor();
        debug!("Inserting {} byte(s) at {at}", text.len());
        self.surface.replace_range(text, at);
        self.surface.focus();
    }

    // --- Statement selection ---

    /// Resolve the statement under the caret and select its lines.
    ///
    /// On error nothing is selected and the error is returned as is.
    ///
    /// The selection head, and with it the caret, ends on the line after the
    /// statement. Calling this again without moving the caret back resolves
    /// the statement that follows.
    pub fn focus_selection(&mut self) -> Result<LineRange> {
        let text = self.surface.full_text();
        let cursor = self.surface.cursor();
        let range = resolve_text(&text, cursor.line)?;
        self.select_range(range);
        Ok(range)
    }

    /// Select `range` on the widget, anchored at its first line.
    pub fn select_range(&mut self, range: LineRange) {
        self.surface.set_selection(range.anchor(), range.head());
    }

    /// Select the statement under the caret and return its text.
    pub fn focused_statement(&mut self) -> Result<String> {
        let range = self.focus_selection()?;
        let text = self.surface.full_text();
        Ok(statement_text(&split_lines(&text), range))
    }

    // --- Options ---

    pub fn set_option(&mut self, option: EditorOption) {
        self.surface.set_option(option);
    }

    pub fn set_line_numbers(&mut self, enabled: bool) {
        self.set_option(EditorOption::LineNumbers(enabled));
    }

    pub fn set_auto_focus(&mut self, enabled: bool) {
        self.set_option(EditorOption::AutoFocus(enabled));
    }

    pub fn set_read_only(&mut self, enabled: bool) {
        self.set_option(EditorOption::ReadOnly(enabled));
    }

    /// Offer `values` as completions after `title`, projected through `key`
    /// when given.
    pub fn set_hint_options(
        &mut self,
        title: &str,
        values: &[HintEntry],
        key: Option<&str>,
    ) -> Result {
        let hints = HintOptions::from_values(title, values, key)?;
        self.set_option(EditorOption::HintOptions(hints));
        Ok(())
    }

    pub fn refresh(&mut self) {
        self.surface.refresh();
    }
}
