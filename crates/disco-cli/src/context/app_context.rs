use std::path::PathBuf;

use disco_config::DiscoConfig;
use disco_core::UnitKind;

use crate::navigator::UnitRoots;

/// Resolved project root plus loaded configuration, shared by every command.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub project_root: PathBuf,
    pub config: DiscoConfig,
}

impl AppContext {
    #[must_use]
    pub const fn new(project_root: PathBuf, config: DiscoConfig) -> Self {
        Self {
            project_root,
            config,
        }
    }

    #[must_use]
    pub fn unit_root(&self, kind: UnitKind) -> PathBuf {
        self.config.paths.unit_root(&self.project_root, kind)
    }

    #[must_use]
    pub fn unit_roots(&self) -> UnitRoots {
        UnitRoots {
            commands: self.unit_root(UnitKind::Commands),
            events: self.unit_root(UnitKind::Events),
            extension: self.config.paths.extension().to_string(),
        }
    }

    #[must_use]
    pub fn premium_path(&self) -> PathBuf {
        self.config.paths.premium_path(&self.project_root)
    }

    /// Resolve a user-supplied path against the project root.
    #[must_use]
    pub fn resolve(&self, path: &str) -> PathBuf {
        let path = PathBuf::from(path);
        if path.is_absolute() {
            path
        } else {
            self.project_root.join(path)
        }
    }
}
