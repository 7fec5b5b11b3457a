//! Unit kinds and marker states.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// UnitKind
// ---------------------------------------------------------------------------

/// The two families of pluggable units the manager browses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitKind {
    Commands,
    Events,
}

impl UnitKind {
    /// All kinds in menu order.
    pub const ALL: [Self; 2] = [Self::Commands, Self::Events];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Commands => "commands",
            Self::Events => "events",
        }
    }

    /// Capitalized plural label used in menus ("Commands").
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Commands => "Commands",
            Self::Events => "Events",
        }
    }

    /// Lowercase singular noun ("command").
    #[must_use]
    pub const fn singular(self) -> &'static str {
        match self {
            Self::Commands => "command",
            Self::Events => "event",
        }
    }
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// EnabledMarker
// ---------------------------------------------------------------------------

/// Enable/disable state as written in a unit file.
///
/// ```text
/// disabled: false  -> Enabled
/// disabled: true   -> Disabled
/// (no marker)      -> Unmarked (runs as enabled)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnabledMarker {
    Enabled,
    Disabled,
    Unmarked,
}

impl EnabledMarker {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Enabled => "enabled",
            Self::Disabled => "disabled",
            Self::Unmarked => "unmarked",
        }
    }

    /// Whether the host application would load this unit.
    #[must_use]
    pub const fn is_enabled(self) -> bool {
        !matches!(self, Self::Disabled)
    }
}

impl fmt::Display for EnabledMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
