use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum UnitError {
    #[error("unit directory not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("io error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("directory walk failed: {0}")]
    Walk(#[from] ignore::Error),
    #[error(transparent)]
    Core(#[from] disco_core::CoreError),
}

impl UnitError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
