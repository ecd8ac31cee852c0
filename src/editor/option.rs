//! Widget options and the initial widget configuration.
use crate::*;
use derive_more::Display;
use std::collections::BTreeMap;

/// A single option toggle forwarded to the widget.
#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum EditorOption {
    #[display("lineNumbers={_0}")]
    LineNumbers(bool),
    #[display("readOnly={_0}")]
    ReadOnly(bool),
    #[display("autoFocus={_0}")]
    AutoFocus(bool),
    #[display("hintOptions")]
    HintOptions(HintOptions),
}

impl EditorOption {
    /// Option name as the widget knows it.
    pub const fn name(&self) -> &'static str {
        match self {
            EditorOption::LineNumbers(_) => "lineNumbers",
            EditorOption::ReadOnly(_) => "readOnly",
            EditorOption::AutoFocus(_) => "autoFocus",
            EditorOption::HintOptions(_) => "hintOptions",
        }
    }
}

/// Configuration a widget is created with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorConfig {
    /// Highlighting mode, fixed to SQL.
    pub mode: String,
    pub indent_with_tabs: bool,
    pub smart_indent: bool,
    pub line_numbers: bool,
    pub match_brackets: bool,
    pub read_only: bool,
    pub auto_focus: bool,
    /// Key chord to widget command, e.g. `Ctrl-Space` -> `autocomplete`.
    pub extra_keys: BTreeMap<String, String>,
    pub hint_options: Option<HintOptions>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            mode: "text/x-sql".into(),
            indent_with_tabs: true,
            smart_indent: true,
            line_numbers: true,
            match_brackets: true,
            read_only: false,
            auto_focus: true,
            extra_keys: BTreeMap::from([("Ctrl-Space".into(), "autocomplete".into())]),
            hint_options: None,
        }
    }
}

impl EditorConfig {
    /// The toggles of this configuration as widget options.
    pub fn options(&self) -> Vec<EditorOption> {
        let mut options = vec![
            EditorOption::LineNumbers(self.line_numbers),
            EditorOption::ReadOnly(self.read_only),
            EditorOption::AutoFocus(self.auto_focus),
        ];
        if let Some(hints) = &self.hint_options {
            options.push(EditorOption::HintOptions(hints.clone()));
        }
        options
    }
}
