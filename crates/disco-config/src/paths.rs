//! Filesystem layout of the bot project.

use std::path::{Path, PathBuf};

use disco_core::UnitKind;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_commands_dir() -> String {
    "src/commands".to_string()
}

fn default_events_dir() -> String {
    "src/events".to_string()
}

fn default_premium_config() -> String {
    "premium.json".to_string()
}

fn default_extension() -> String {
    "js".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PathsConfig {
    /// Command root, relative to the project root unless absolute.
    #[serde(default = "default_commands_dir")]
    pub commands_dir: String,

    /// Event root, relative to the project root unless absolute.
    #[serde(default = "default_events_dir")]
    pub events_dir: String,

    /// Premium entitlement JSON file.
    #[serde(default = "default_premium_config")]
    pub premium_config: String,

    /// Unit file extension, without the leading dot.
    #[serde(default = "default_extension")]
    pub extension: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            commands_dir: default_commands_dir(),
            events_dir: default_events_dir(),
            premium_config: default_premium_config(),
            extension: default_extension(),
        }
    }
}

impl PathsConfig {
    /// Root directory holding units of `kind`.
    #[must_use]
    pub fn unit_root(&self, project_root: &Path, kind: UnitKind) -> PathBuf {
        let dir = match kind {
            UnitKind::Commands => &self.commands_dir,
            UnitKind::Events => &self.events_dir,
        };
        project_root.join(dir)
    }

    #[must_use]
    pub fn premium_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.premium_config)
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        let extension = self.extension.trim_start_matches('.');
        if extension.is_empty() || extension.contains(['/', '\\']) {
            return Err(ConfigError::InvalidValue {
                field: "paths.extension".to_string(),
                reason: format!("'{}' is not a file extension", self.extension),
            });
        }
        for (field, value) in [
            ("paths.commands_dir", &self.commands_dir),
            ("paths.events_dir", &self.events_dir),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    reason: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Extension without a leading dot, as the scanner expects it.
    #[must_use]
    pub fn extension(&self) -> &str {
        self.extension.trim_start_matches('.')
    }
}
