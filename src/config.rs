use crate::*;
use confique::Config as _;
use std::sync::OnceLock;

#[derive(confique::Config)]
pub struct Config {
    /// Fallback tracing filter when `RUST_LOG` is unset.
    #[config(env = "SQLFOCUS_LOG", default = "info")]
    pub log: String,
    #[config(env = "SQLFOCUS_LINE_NUMBERS", default = true)]
    pub line_numbers: bool,
    #[config(env = "SQLFOCUS_READ_ONLY", default = false)]
    pub read_only: bool,
    #[config(env = "SQLFOCUS_AUTO_FOCUS", default = true)]
    pub auto_focus: bool,
}

impl Config {
    pub fn load() -> Result<Self> {
        Ok(Config::builder().env().load()?)
    }

    /// Editor defaults with the environment's toggles applied.
    pub fn editor(&self) -> EditorConfig {
        EditorConfig {
            line_numbers: self.line_numbers,
            read_only: self.read_only,
            auto_focus: self.auto_focus,
            ..EditorConfig::default()
        }
    }
}

pub fn config() -> &'static Config {
    static CONFIG: OnceLock<Config> = OnceLock::new();
    CONFIG.get_or_init(|| {
        Config::load()
            .expect("Failed to load one or more value configuration from the current environment")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editor_config_carries_toggles() {
        let config = Config {
            log: "debug".into(),
            line_numbers: false,
            read_only: true,
            auto_focus: false,
        };
        let editor = config.editor();
        assert!(!editor.line_numbers);
        assert!(editor.read_only);
        assert!(!editor.auto_focus);
        assert_eq!(editor.mode, EditorConfig::default().mode);
    }
}
