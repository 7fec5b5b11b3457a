use serde::{Deserialize, Serialize};
use std::fmt;

/// Well-known tier names, highest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Vip,
    Premium,
    Basic,
}

impl Tier {
    /// Resolution priority: `vip > premium > basic`.
    pub const PRIORITY: [Self; 3] = [Self::Vip, Self::Premium, Self::Basic];

    /// Key used in the `tiers` section of the config.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Vip => "vip",
            Self::Premium => "premium",
            Self::Basic => "basic",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
