//! Cross-cutting error types for Discobase.
//!
//! Domain-specific errors (`UnitError`, `ConfigError`) are defined in their
//! respective crates. The CLI converges everything into `anyhow`.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// A path handed to the unit model is not below the scan root.
    #[error("{path} is not inside scan root {root}")]
    OutsideRoot { path: PathBuf, root: PathBuf },

    /// A path has no usable file stem.
    #[error("Invalid unit path: {0}")]
    InvalidPath(PathBuf),
}
