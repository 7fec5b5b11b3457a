//! The unit-file entity.

use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::enums::EnabledMarker;
use crate::errors::CoreError;

/// Category assigned to files that sit directly under a scan root.
pub const ROOT_CATEGORY: &str = "Root";

/// One pluggable command or event discovered on disk.
///
/// Values are rebuilt on every scan; nothing about a `UnitFile` is trusted
/// after the file is mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitFile {
    /// File stem, e.g. `ping` for `util/ping.js`.
    pub name: String,
    /// Location on disk. Unique per scan.
    pub path: PathBuf,
    /// Location relative to the scan root.
    pub relative_path: PathBuf,
    /// First directory under the scan root, or [`ROOT_CATEGORY`].
    pub category: String,
    pub marker: EnabledMarker,
}

impl UnitFile {
    /// Build a unit from a file found under `root`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::OutsideRoot`] if `path` is not below `root`, or
    /// [`CoreError::InvalidPath`] if it has no file stem.
    pub fn from_scan(root: &Path, path: &Path, marker: EnabledMarker) -> Result<Self, CoreError> {
        let relative_path = path
            .strip_prefix(root)
            .map_err(|_| CoreError::OutsideRoot {
                path: path.to_path_buf(),
                root: root.to_path_buf(),
            })?
            .to_path_buf();

        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .filter(|stem| !stem.is_empty())
            .ok_or_else(|| CoreError::InvalidPath(path.to_path_buf()))?;

        Ok(Self {
            name,
            category: category_of(&relative_path),
            path: path.to_path_buf(),
            relative_path,
            marker,
        })
    }

    /// File name including extension, used in prompts.
    #[must_use]
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map_or_else(|| self.name.clone(), |name| name.to_string_lossy().into_owned())
    }
}

/// Category for a root-relative path: its first segment when the path has
/// more than one, otherwise [`ROOT_CATEGORY`].
#[must_use]
pub fn category_of(relative_path: &Path) -> String {
    let segments: Vec<_> = relative_path
        .components()
        .filter(|component| matches!(component, Component::Normal(_)))
        .collect();

    match segments.as_slice() {
        [first, _, ..] => first.as_os_str().to_string_lossy().into_owned(),
        _ => ROOT_CATEGORY.to_string(),
    }
}
