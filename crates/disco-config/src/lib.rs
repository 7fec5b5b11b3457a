//! # disco-config
//!
//! Layered configuration loading for the Discobase manager using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`DISCOBASE_*` prefix, `__` as separator)
//! 2. Project-level `.discobase/config.toml`
//! 3. User-level `~/.config/discobase/config.toml`
//! 4. Built-in defaults
//!
//! Figment maps `DISCOBASE_PATHS__COMMANDS_DIR` -> `paths.commands_dir`,
//! `DISCOBASE_EDITOR__COMMAND` -> `editor.command`.
//!
//! The premium entitlement file is separate: a JSON document read with
//! [`load_premium`] each time a gate is checked, so edits apply without a
//! restart.
//!
//! ```no_run
//! use std::path::Path;
//! use disco_config::DiscoConfig;
//!
//! let root = Path::new(".");
//! let config = DiscoConfig::load_with_dotenv(root).expect("config");
//! let premium = disco_config::load_premium_or_disabled(&config.paths.premium_path(root));
//! println!("premium gating enabled: {}", premium.enabled);
//! ```

mod editor;
mod error;
mod paths;
mod premium;

pub use editor::{DEFAULT_EDITOR, EditorConfig};
pub use error::ConfigError;
pub use paths::PathsConfig;
pub use premium::{load_premium, load_premium_or_disabled};

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

/// Project-local config file, relative to the project root.
pub const PROJECT_CONFIG_FILE: &str = ".discobase/config.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DiscoConfig {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub editor: EditorConfig,
}

impl DiscoConfig {
    /// Load configuration for the project at `project_root` from TOML files
    /// and environment variables.
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] when a source fails to parse, or
    /// [`ConfigError::InvalidValue`] when a loaded value is unusable.
    pub fn load(project_root: &Path) -> Result<Self, ConfigError> {
        let config: Self = Self::figment(project_root).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration after reading the project's `.env` file.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv(project_root: &Path) -> Result<Self, ConfigError> {
        let env_path = project_root.join(".env");
        if env_path.exists() {
            if let Err(error) = dotenvy::from_path(&env_path) {
                tracing::warn!(path = %env_path.display(), %error, "failed to load .env");
            }
        } else {
            dotenvy::dotenv().ok();
        }
        Self::load(project_root)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or stack more providers.
    pub fn figment(project_root: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = project_root.join(PROJECT_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("DISCOBASE_").split("__"))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("discobase").join("config.toml"))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.paths.validate()
    }
}
