//! Enable/disable toggling by text substitution.
//!
//! Disabling inserts `disabled: true,` right after the declaration opener
//! when the file has no `disabled:` key yet, otherwise flips every
//! `disabled: false` to `disabled: true`. Enabling only ever flips
//! `disabled: true` to `disabled: false`. Both directions are idempotent.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::UnitError;
use crate::patterns::{DECLARATION_OPEN, MARKER_FALSE, MARKER_KEY, MARKER_TRUE};

const INSERTED_MARKER: &str = "${1}\n    disabled: true,";

/// What a toggle did to the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// A new `disabled: true` field was inserted.
    Inserted,
    /// This many existing markers were rewritten.
    Flipped(usize),
    /// The text already had the requested state.
    Unchanged,
    /// No marker and no recognizable declaration to insert one into.
    NoDeclaration,
}

impl ToggleOutcome {
    #[must_use]
    pub const fn changed(self) -> bool {
        matches!(self, Self::Inserted | Self::Flipped(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toggled {
    pub text: String,
    pub outcome: ToggleOutcome,
}

/// Apply the toggle to unit text.
#[must_use]
pub fn apply_disabled(text: &str, disabled: bool) -> Toggled {
    if disabled && !MARKER_KEY.is_match(text) {
        if !DECLARATION_OPEN.is_match(text) {
            return Toggled {
                text: text.to_string(),
                outcome: ToggleOutcome::NoDeclaration,
            };
        }
        return Toggled {
            text: DECLARATION_OPEN.replace(text, INSERTED_MARKER).into_owned(),
            outcome: ToggleOutcome::Inserted,
        };
    }

    let (pattern, replacement) = if disabled {
        (&*MARKER_FALSE, "disabled: true")
    } else {
        (&*MARKER_TRUE, "disabled: false")
    };

    let count = pattern.find_iter(text).count();
    if count == 0 {
        return Toggled {
            text: text.to_string(),
            outcome: ToggleOutcome::Unchanged,
        };
    }

    Toggled {
        text: pattern.replace_all(text, replacement).into_owned(),
        outcome: ToggleOutcome::Flipped(count),
    }
}

/// Toggle the unit file at `path` in place.
///
/// The file is only rewritten when its text changes. The new content goes to
/// a temporary file next to the (symlink-resolved) target which then replaces
/// it, keeping the target's permissions.
///
/// # Errors
///
/// Returns [`UnitError::Io`] if the file cannot be read or replaced.
pub fn set_disabled(path: &Path, disabled: bool) -> Result<ToggleOutcome, UnitError> {
    let text = std::fs::read_to_string(path).map_err(|error| UnitError::io(path, error))?;
    let toggled = apply_disabled(&text, disabled);

    if toggled.outcome.changed() {
        write_replacing(path, &toggled.text)?;
    }

    tracing::debug!(
        path = %path.display(),
        disabled,
        outcome = ?toggled.outcome,
        "toggled unit marker"
    );
    Ok(toggled.outcome)
}

fn write_replacing(path: &Path, text: &str) -> Result<(), UnitError> {
    // Write through symlinks so a linked unit stays linked.
    let target = std::fs::canonicalize(path).map_err(|error| UnitError::io(path, error))?;
    let permissions = std::fs::metadata(&target)
        .map_err(|error| UnitError::io(&target, error))?
        .permissions();

    let dir = target.parent().unwrap_or_else(|| Path::new("."));
    let mut temp = NamedTempFile::new_in(dir).map_err(|error| UnitError::io(dir, error))?;
    temp.write_all(text.as_bytes())
        .map_err(|error| UnitError::io(temp.path(), error))?;
    temp.as_file()
        .set_permissions(permissions)
        .map_err(|error| UnitError::io(temp.path(), error))?;
    temp.persist(&target)
        .map_err(|error| UnitError::io(&target, error.error))?;
    Ok(())
}
