//! # disco-units
//!
//! Filesystem side of the Discobase manager.
//!
//! - [`scan`] walks a unit root and returns every unit file in walk order.
//! - [`build_tree`] groups scanned files by their top-level directory.
//! - [`set_disabled`] flips the `disabled` marker inside a unit file's
//!   exported declaration without parsing the file.
//! - [`read_gate`] reads a unit's premium gate flags from its text.
//!
//! Nothing here caches: callers re-scan after every mutation.

mod error;
mod gate;
mod patterns;
mod scan;
mod toggle;
mod tree;

pub use error::UnitError;
pub use gate::read_gate;
pub use patterns::read_marker;
pub use scan::scan;
pub use toggle::{ToggleOutcome, Toggled, apply_disabled, set_disabled};
pub use tree::{Category, CategoryTree, build_tree};

use std::path::Path;

/// Scan `root` and group the result into a [`CategoryTree`].
///
/// # Errors
///
/// Same as [`scan`].
pub fn scan_tree(root: &Path, extension: &str) -> Result<CategoryTree, UnitError> {
    scan(root, extension).map(build_tree)
}
