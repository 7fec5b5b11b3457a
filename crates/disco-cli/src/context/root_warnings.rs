use std::path::Path;

use disco_core::UnitKind;

use super::AppContext;

/// Log a warning for each unit root that does not exist yet.
pub fn warn_missing_roots(ctx: &AppContext) {
    for warning in collect_missing_root_warnings(ctx, Path::is_dir) {
        tracing::warn!("{warning}");
    }
}

fn collect_missing_root_warnings<F>(ctx: &AppContext, exists: F) -> Vec<String>
where
    F: Fn(&Path) -> bool,
{
    UnitKind::ALL
        .into_iter()
        .filter_map(|kind| {
            let root = ctx.unit_root(kind);
            (!exists(&root)).then(|| {
                format!(
                    "{} directory {} does not exist. Set paths.{}_dir in .discobase/config.toml if it lives elsewhere.",
                    kind.label(),
                    root.display(),
                    kind.as_str(),
                )
            })
        })
        .collect()
}
