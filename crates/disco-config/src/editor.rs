//! External editor selection.

use serde::{Deserialize, Serialize};

/// Editor used when neither the config nor `$EDITOR` names one.
#[cfg(windows)]
pub const DEFAULT_EDITOR: &str = "notepad";
#[cfg(not(windows))]
pub const DEFAULT_EDITOR: &str = "vi";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct EditorConfig {
    /// Editor command line, e.g. `code --wait`. Empty means "use `$EDITOR`".
    #[serde(default)]
    pub command: String,
}

impl EditorConfig {
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.command.trim().is_empty()
    }

    /// Pick the editor command: configured value, then `env_editor`
    /// (normally `$EDITOR`), then [`DEFAULT_EDITOR`].
    #[must_use]
    pub fn resolve(&self, env_editor: Option<&str>) -> String {
        if self.is_configured() {
            return self.command.trim().to_string();
        }
        env_editor
            .map(str::trim)
            .filter(|editor| !editor.is_empty())
            .unwrap_or(DEFAULT_EDITOR)
            .to_string()
    }
}
