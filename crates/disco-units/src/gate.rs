use std::sync::LazyLock;

use disco_premium::GateRequest;
use regex::Regex;

static PREMIUM_ONLY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bpremiumOnly\s*:\s*(true|false)\b").expect("premiumOnly pattern")
});

static PREMIUM_TIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\bpremiumTier\s*:\s*['"`]([^'"`\n]+)['"`]"#).expect("premiumTier pattern")
});

/// Read the premium gate a unit declares.
///
/// Recognizes `premiumOnly: true|false` and `premiumTier: '<name>'` (any JS
/// quote style). Missing fields fall back to an open gate.
#[must_use]
pub fn read_gate(text: &str) -> GateRequest {
    let premium_only = PREMIUM_ONLY
        .captures(text)
        .and_then(|caps| caps.get(1))
        .is_some_and(|value| value.as_str() == "true");

    let premium_tier = PREMIUM_TIER
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|value| value.as_str().trim().to_string())
        .filter(|tier| !tier.is_empty());

    GateRequest {
        premium_only,
        premium_tier,
    }
}
