use anyhow::Context;
use disco_premium::{Decision, GateRequest, PremiumConfig, Requester, Tier};

use crate::cli::CheckArgs;
use crate::context::AppContext;
use crate::ui;

/// Evaluate a unit's premium gate for one requester and print the outcome.
pub fn handle(args: &CheckArgs, ctx: &AppContext) -> anyhow::Result<()> {
    let unit = ctx.resolve(&args.unit);
    let text = std::fs::read_to_string(&unit)
        .with_context(|| format!("failed to read unit {}", unit.display()))?;

    let gate = disco_units::read_gate(&text);
    let config = disco_config::load_premium_or_disabled(&ctx.premium_path());
    let requester = requester(args);
    let report = Report::build(&gate, &requester, &config);

    tracing::debug!(unit = %unit.display(), ?gate, ?report, "premium check");
    for line in report.lines() {
        println!("{line}");
    }
    if report.decision.allowed {
        ui::success("Access granted");
    } else {
        ui::warn("Access denied");
    }
    Ok(())
}

fn requester(args: &CheckArgs) -> Requester {
    if args.guest {
        Requester::guest(args.user.as_str())
    } else {
        Requester::member(args.user.as_str(), args.roles.iter().map(String::as_str))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Report {
    gating_enabled: bool,
    gate: GateRequest,
    decision: Decision,
    tier: Option<Tier>,
}

impl Report {
    fn build(gate: &GateRequest, requester: &Requester, config: &PremiumConfig) -> Self {
        Self {
            gating_enabled: config.is_enabled(),
            gate: gate.clone(),
            decision: disco_premium::evaluate(gate, requester, config),
            tier: disco_premium::resolve_tier(requester, config),
        }
    }

    fn lines(&self) -> Vec<String> {
        let gate = match (self.gate.premium_only, self.gate.premium_tier.as_deref()) {
            (_, Some(tier)) => format!("tier '{tier}'"),
            (true, None) => "premium only".to_string(),
            (false, None) => "open".to_string(),
        };
        let mut lines = vec![
            format!(
                "gating:   {}",
                if self.gating_enabled { "enabled" } else { "disabled" }
            ),
            format!("gate:     {gate}"),
            format!(
                "tier:     {}",
                self.tier.map_or("none", |tier| tier.as_str())
            ),
            format!(
                "decision: {}",
                if self.decision.allowed { "allowed" } else { "denied" }
            ),
        ];
        if let Some(message) = &self.decision.message {
            lines.push(format!("message:  {message}"));
        }
        lines
    }
}
