//! Premium configuration snapshot.
//!
//! Mirrors `premium.json`:
//!
//! ```json
//! {
//!   "enabled": true,
//!   "premiumUsers": ["1234"],
//!   "premiumRoles": ["R1"],
//!   "tiers": { "basic": { "roleIds": ["R1"] } },
//!   "messages": { "noPremium": "...", "wrongTier": "..." }
//! }
//! ```

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

pub const DEFAULT_NO_PREMIUM_MESSAGE: &str = "⭐ This command requires premium access.";
pub const DEFAULT_WRONG_TIER_MESSAGE: &str = "⭐ This command requires a higher premium tier.";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PremiumConfig {
    /// Master switch. When off, every unit is allowed.
    pub enabled: bool,

    /// User ids with unconditional access to every tier.
    pub premium_users: BTreeSet<String>,

    /// Role ids that grant general premium access.
    pub premium_roles: BTreeSet<String>,

    pub tiers: BTreeMap<String, TierDefinition>,

    pub messages: PremiumMessages,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TierDefinition {
    pub role_ids: BTreeSet<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PremiumMessages {
    pub no_premium: Option<String>,
    pub wrong_tier: Option<String>,
}

impl PremiumConfig {
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[must_use]
    pub fn tier(&self, name: &str) -> Option<&TierDefinition> {
        self.tiers.get(name)
    }

    #[must_use]
    pub fn is_premium_user(&self, user_id: &str) -> bool {
        self.premium_users.contains(user_id)
    }

    #[must_use]
    pub fn no_premium_message(&self) -> &str {
        self.messages
            .no_premium
            .as_deref()
            .unwrap_or(DEFAULT_NO_PREMIUM_MESSAGE)
    }

    #[must_use]
    pub fn wrong_tier_message(&self) -> &str {
        self.messages
            .wrong_tier
            .as_deref()
            .unwrap_or(DEFAULT_WRONG_TIER_MESSAGE)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parses_camel_case_document() {
        let config: PremiumConfig = serde_json::from_str(
            r#"{
                "enabled": true,
                "premiumUsers": ["u1"],
                "premiumRoles": ["R1", "R2"],
                "tiers": { "basic": { "roleIds": ["R1"] } },
                "messages": { "noPremium": "nope" }
            }"#,
        )
        .expect("config should parse");

        assert!(config.is_enabled());
        assert!(config.is_premium_user("u1"));
        assert_eq!(config.premium_roles.len(), 2);
        assert_eq!(
            config.tier("basic").map(|tier| tier.role_ids.len()),
            Some(1)
        );
        assert_eq!(config.no_premium_message(), "nope");
        assert_eq!(config.wrong_tier_message(), DEFAULT_WRONG_TIER_MESSAGE);
    }

    #[test]
    fn partial_document_fills_defaults() {
        let config: PremiumConfig =
            serde_json::from_str(r#"{ "enabled": true }"#).expect("config should parse");
        assert!(config.premium_users.is_empty());
        assert!(config.tiers.is_empty());
        assert_eq!(config.no_premium_message(), DEFAULT_NO_PREMIUM_MESSAGE);
    }

    #[test]
    fn default_is_disabled() {
        assert!(!PremiumConfig::default().is_enabled());
    }
}
