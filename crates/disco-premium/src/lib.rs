//! # disco-premium
//!
//! Premium gating for Discobase units.
//!
//! The resolver is a pure function of three inputs: the unit's
//! [`GateRequest`], the [`Requester`], and a [`PremiumConfig`] snapshot.
//! Loading and refreshing the snapshot is the caller's job (see
//! `disco-config`), so an evaluation never observes a half-edited config.
//!
//! ```
//! use disco_premium::{GateRequest, PremiumConfig, Requester, evaluate};
//!
//! let config = PremiumConfig::default();
//! let gate = GateRequest::tier("vip");
//! let decision = evaluate(&gate, &Requester::guest("42"), &config);
//! assert!(decision.allowed); // gating is off by default
//! ```

mod config;
mod requester;
mod resolver;
mod tier;

pub use config::{
    DEFAULT_NO_PREMIUM_MESSAGE, DEFAULT_WRONG_TIER_MESSAGE, PremiumConfig, PremiumMessages,
    TierDefinition,
};
pub use requester::{Membership, Requester};
pub use resolver::{Decision, GateRequest, evaluate, has_premium_access, resolve_tier};
pub use tier::Tier;
