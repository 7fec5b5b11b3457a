//! Gate evaluation.
//!
//! Order of checks in [`evaluate`]:
//!
//! ```text
//! gating disabled            -> allow
//! gate has no flags          -> allow
//! no general access          -> deny (noPremium)
//! tier gate, tier unknown    -> allow
//! tier gate, tier not held   -> deny (wrongTier)
//! otherwise                  -> allow
//! ```
//!
//! The general access check runs before the tier check, so a requester
//! with no qualifying role at all always gets the `noPremium` message.

use serde::{Deserialize, Serialize};

use crate::config::PremiumConfig;
use crate::requester::Requester;
use crate::tier::Tier;

/// A unit's declared premium requirement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GateRequest {
    pub premium_only: bool,
    pub premium_tier: Option<String>,
}

impl GateRequest {
    /// A gate that requires any premium access.
    #[must_use]
    pub const fn premium_only() -> Self {
        Self {
            premium_only: true,
            premium_tier: None,
        }
    }

    /// A gate that requires the named tier.
    pub fn tier(name: impl Into<String>) -> Self {
        Self {
            premium_only: false,
            premium_tier: Some(name.into()),
        }
    }

    /// Whether the gate asks for anything at all.
    #[must_use]
    pub const fn is_gated(&self) -> bool {
        self.premium_only || self.premium_tier.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decision {
    pub allowed: bool,
    pub message: Option<String>,
}

impl Decision {
    #[must_use]
    pub const fn allow() -> Self {
        Self {
            allowed: true,
            message: None,
        }
    }

    fn deny(message: &str) -> Self {
        Self {
            allowed: false,
            message: Some(message.to_string()),
        }
    }
}

/// General premium check, independent of any tier.
///
/// True when gating is disabled, when the user is allow-listed, or when the
/// requester holds one of the premium roles.
#[must_use]
pub fn has_premium_access(requester: &Requester, config: &PremiumConfig) -> bool {
    !config.enabled
        || config.is_premium_user(&requester.user_id)
        || requester.holds_any(&config.premium_roles)
}

/// Decide whether `requester` may run a unit gated by `gate`.
#[must_use]
pub fn evaluate(gate: &GateRequest, requester: &Requester, config: &PremiumConfig) -> Decision {
    if !config.enabled || !gate.is_gated() {
        return Decision::allow();
    }

    // Outer `Some`: the gate names a tier. Inner `None`: the config lacks it.
    let tier = gate.premium_tier.as_deref().map(|name| config.tier(name));

    let has_access = has_premium_access(requester, config)
        || tier
            .flatten()
            .is_some_and(|definition| requester.holds_any(&definition.role_ids));

    if !has_access {
        return Decision::deny(config.no_premium_message());
    }

    match tier {
        Some(Some(definition))
            if !requester.holds_any(&definition.role_ids)
                && !config.is_premium_user(&requester.user_id) =>
        {
            Decision::deny(config.wrong_tier_message())
        }
        _ => Decision::allow(),
    }
}

/// Highest tier the requester holds, if any.
///
/// Allow-listed users always resolve to [`Tier::Vip`]. Returns `None` while
/// gating is disabled.
#[must_use]
pub fn resolve_tier(requester: &Requester, config: &PremiumConfig) -> Option<Tier> {
    if !config.enabled {
        return None;
    }
    if config.is_premium_user(&requester.user_id) {
        return Some(Tier::Vip);
    }

    Tier::PRIORITY.into_iter().find(|tier| {
        config
            .tier(tier.as_str())
            .is_some_and(|definition| requester.holds_any(&definition.role_ids))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_gate_is_not_gated() {
        assert!(!GateRequest::default().is_gated());
        assert!(GateRequest::premium_only().is_gated());
        assert!(GateRequest::tier("basic").is_gated());
    }

    #[test]
    fn guest_without_allow_list_has_no_access() {
        let config = PremiumConfig {
            enabled: true,
            premium_roles: ["R1".to_string()].into(),
            ..Default::default()
        };
        assert!(!has_premium_access(&Requester::guest("u1"), &config));
    }
}
