use std::ffi::OsStr;
use std::path::Path;

use disco_core::{EnabledMarker, UnitFile};
use ignore::WalkBuilder;

use crate::error::UnitError;
use crate::patterns::read_marker;

/// Walk `root` depth-first and collect every file ending in `.{extension}`.
///
/// Hidden files and ignore-file rules are not honored: every subdirectory
/// is visited, and symlinked files and directories are followed. Results
/// come back in walk order, which is not sorted. Dangling links and link
/// loops are skipped with a warning.
///
/// A file whose content cannot be read is still listed, as
/// [`EnabledMarker::Unmarked`], with a warning.
///
/// # Errors
///
/// Returns [`UnitError::NotFound`] if `root` is not a directory, or
/// [`UnitError::Walk`] if the walk itself fails.
pub fn scan(root: &Path, extension: &str) -> Result<Vec<UnitFile>, UnitError> {
    if !root.is_dir() {
        return Err(UnitError::NotFound(root.to_path_buf()));
    }

    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(true)
        .build();

    let mut units = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(error) if is_broken_link(&error) => {
                tracing::warn!(%error, "skipping unresolvable link");
                continue;
            }
            Err(error) => return Err(error.into()),
        };
        if !entry.file_type().is_some_and(|kind| kind.is_file()) {
            continue;
        }

        let path = entry.path();
        if path.extension() != Some(OsStr::new(extension)) {
            continue;
        }

        let marker = match std::fs::read(path) {
            Ok(bytes) => read_marker(&String::from_utf8_lossy(&bytes)),
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "failed to read unit file");
                EnabledMarker::Unmarked
            }
        };

        units.push(UnitFile::from_scan(root, path, marker)?);
    }

    tracing::debug!(root = %root.display(), count = units.len(), "scanned unit directory");
    Ok(units)
}

fn is_broken_link(error: &ignore::Error) -> bool {
    match error {
        ignore::Error::Loop { .. } => true,
        ignore::Error::WithPath { err, .. } | ignore::Error::WithDepth { err, .. } => {
            is_broken_link(err)
        }
        ignore::Error::Io(io) => io.kind() == std::io::ErrorKind::NotFound,
        _ => false,
    }
}
