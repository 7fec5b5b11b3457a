//! Premium entitlement file loading.

use std::path::Path;

use disco_premium::PremiumConfig;
use figment::{
    Figment,
    providers::{Format, Json},
};

use crate::error::ConfigError;

/// Read the premium config at `path`.
///
/// A missing file yields the default snapshot, which has gating disabled.
///
/// # Errors
///
/// Returns [`ConfigError::Premium`] when the file exists but is not a valid
/// premium document.
pub fn load_premium(path: &Path) -> Result<PremiumConfig, ConfigError> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no premium config; gating disabled");
        return Ok(PremiumConfig::default());
    }

    Figment::from(Json::file(path))
        .extract()
        .map_err(|source| ConfigError::Premium {
            path: path.to_path_buf(),
            source,
        })
}

/// Like [`load_premium`], but a broken file disables gating with a warning
/// instead of failing.
#[must_use]
pub fn load_premium_or_disabled(path: &Path) -> PremiumConfig {
    load_premium(path).unwrap_or_else(|error| {
        tracing::warn!(%error, "premium gating disabled");
        PremiumConfig::default()
    })
}
