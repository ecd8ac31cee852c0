use crate::*;
use test_context::TestContext;
pub use test_context::test_context;

/// Two statements, the second one spread over two lines.
pub const SAMPLE_SQL: &str =
    "SELECT * FROM information_schema.ALL_PLUGINS;\nSELECT * FROM\ninformation_schema.APPLICABLE_ROLES;";

pub struct EditorTest {
    pub editor: Editor<MemorySurface>,
}

impl EditorTest {
    /// Move the caret without going through the editor.
    pub fn place_cursor(&mut self, line: usize, column: usize) {
        self.editor
            .surface_mut()
            .set_cursor(CursorPosition::new(line, column));
    }
}

impl TestContext for EditorTest {
    fn setup() -> Self {
        crate::testing::common_init();
        let config = EditorConfig {
            auto_focus: false,
            ..EditorConfig::default()
        };
        Self {
            editor: Editor::new(MemorySurface::new(SAMPLE_SQL), &config),
        }
    }
}
