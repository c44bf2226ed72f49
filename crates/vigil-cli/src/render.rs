//! Plain-text rendering for CLI output.
//!
//! Pure formatting helpers: every function takes wire/domain values and
//! returns a `String`. No styling, no I/O.

use std::fmt::Write as _;

use vigil_client::wire::{
    AgentTraceEntry, AnalysisReport, JurisdictionCompliance, KycStatus, PushResponse,
    UserWithState,
};
use vigil_rulebook::{RuleCategory, Rulebook};

fn kyc_label(status: KycStatus) -> &'static str {
    match status {
        KycStatus::Verified => "verified",
        KycStatus::Pending => "pending",
        KycStatus::Unknown => "unknown",
    }
}

/// The roster as fixed-width rows, in the order given.
pub fn roster_table(users: &[UserWithState]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<12} {:<24} {:>6}  {:<8} {:<9} {}",
        "USER", "NAME", "SCORE", "BAND", "KYC", "PROFILE"
    );
    for user in users {
        let _ = writeln!(
            out,
            "{:<12} {:<24} {:>6.1}  {:<8} {:<9} {}",
            user.profile.user_id,
            user.profile.full_name,
            user.current_risk_score,
            user.current_risk_band,
            kyc_label(user.profile.kyc_status),
            user.profile.risk_profile,
        );
    }
    out
}

/// One jurisdiction's compliance summary, optionally with the full
/// rulebook text appended.
pub fn compliance_summary(compliance: &JurisdictionCompliance, with_rulebook: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} ({}) — rulebook {}",
        compliance.jurisdiction, compliance.jurisdiction_code, compliance.current_version
    );
    let _ = writeln!(
        out,
        "incorporated regulations: {} original, {} pushed",
        compliance.old_regulations.len(),
        compliance.new_regulations.len()
    );
    if compliance.available_new_regulations.is_empty() {
        let _ = writeln!(out, "no regulations available to push");
    } else {
        let _ = writeln!(out, "available to push:");
        for reg in &compliance.available_new_regulations {
            let _ = writeln!(
                out,
                "  {} — {} (effective {})",
                reg.regulation_update_id, reg.update_title, reg.date_effective
            );
        }
    }
    if with_rulebook {
        let _ = writeln!(out);
        out.push_str(&rulebook_text(&compliance.rulebook));
    }
    out
}

/// The full rulebook: the four category lists, the scoring table, and the
/// band map.
pub fn rulebook_text(rulebook: &Rulebook) -> String {
    let mut out = String::new();
    for category in RuleCategory::all() {
        let _ = writeln!(out, "[{category}]");
        for rule in rulebook.rules(*category) {
            let _ = writeln!(out, "  - {rule}");
        }
    }
    let _ = writeln!(
        out,
        "[risk_score] range {}, {}",
        rulebook.risk_score.range, rulebook.risk_score.capping
    );
    for entry in &rulebook.risk_score.rules {
        let _ = writeln!(
            out,
            "  {:>4} pts  {} — {}",
            entry.points, entry.category, entry.rule
        );
    }
    let _ = writeln!(out, "[risk_bands]");
    for (band, description) in &rulebook.risk_bands {
        let _ = writeln!(out, "  {band}: {description}");
    }
    out
}

/// The ordered agent-execution trace, one line per stage.
pub fn agent_chain_text(chain: &[AgentTraceEntry]) -> String {
    let mut out = String::new();
    for entry in chain {
        let retry = match (entry.retry_count, entry.retry_kind) {
            (Some(count), Some(kind)) => format!(" (retried {count}x, {kind:?})"),
            (Some(count), None) => format!(" (retried {count}x)"),
            _ => String::new(),
        };
        let _ = writeln!(
            out,
            "  [{:?}] {} — {} ({:.0} ms){retry}",
            entry.status, entry.agent, entry.message, entry.duration_ms
        );
    }
    out
}

/// The push pipeline's output: summary, comparison, impact, changes, and
/// the agent trace.
pub fn push_summary(push: &PushResponse) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "push result for {} — proposed version {}",
        push.jurisdiction_code, push.new_version
    );
    let _ = writeln!(out, "\nsummary:\n  {}", push.summary);
    if !push.comparison_points.is_empty() {
        let _ = writeln!(out, "\ncomparison:");
        for point in &push.comparison_points {
            let _ = writeln!(out, "  - {point}");
        }
    }
    let _ = writeln!(out, "\nimpact:\n  {}", push.impact_analysis);
    let _ = writeln!(out, "\nrulebook changes:\n  {}", push.rulebook_changes);
    match &push.draft_id {
        Some(draft_id) => {
            let _ = writeln!(out, "\ndraft {draft_id} awaiting review");
        }
        None => {
            let _ = writeln!(out, "\napplied immediately (no review draft)");
        }
    }
    let _ = writeln!(out, "\nagent trace:");
    out.push_str(&agent_chain_text(&push.agent_chain));
    out
}

/// A batch-analysis report: verdict, reasoning, flags, and the trace.
pub fn analysis_text(report: &AnalysisReport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} ({}) — score {:.1}, band {}",
        report.user_name, report.user_id, report.risk_score, report.risk_band
    );
    let _ = writeln!(out, "\nreasoning:\n  {}", report.reasoning);
    if !report.flags.is_empty() {
        let _ = writeln!(out, "\nflags:");
        for flag in &report.flags {
            let _ = writeln!(out, "  - {flag}");
        }
    }
    if !report.regulations_violated.is_empty() {
        let _ = writeln!(out, "\nregulations violated:");
        for reg in &report.regulations_violated {
            let _ = writeln!(out, "  - {reg}");
        }
    }
    let _ = writeln!(out, "\nagent trace:");
    out.push_str(&agent_chain_text(&report.agent_chain));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::BTreeMap;

    use vigil_client::wire::AgentStatus;
    use vigil_rulebook::{RiskScoring, RuleEntry};

    fn sample_rulebook() -> Rulebook {
        Rulebook {
            amount_based: vec!["Flag transactions above 10,000 USD".to_string()],
            frequency_based: vec!["Flag more than 10 tx/hour".to_string()],
            location_based: Vec::new(),
            behavioural_pattern: Vec::new(),
            risk_score: RiskScoring {
                range: "0-100".to_string(),
                rules: vec![RuleEntry {
                    category: "Amount".to_string(),
                    rule: "Above threshold".to_string(),
                    points: 30,
                }],
                capping: "Capped at 100".to_string(),
            },
            risk_bands: BTreeMap::from([("HIGH".to_string(), "70-100".to_string())]),
        }
    }

    #[test]
    fn rulebook_text_lists_all_sections() {
        let text = rulebook_text(&sample_rulebook());
        for category in RuleCategory::all() {
            assert!(text.contains(&format!("[{category}]")), "missing {category}");
        }
        assert!(text.contains("Flag transactions above 10,000 USD"));
        assert!(text.contains("30 pts"));
        assert!(text.contains("HIGH: 70-100"));
    }

    #[test]
    fn agent_chain_text_includes_retry_annotations() {
        let chain = vec![AgentTraceEntry {
            agent: "Analyzer Agent".to_string(),
            icon: String::new(),
            status: AgentStatus::Alert,
            message: "Impact assessed".to_string(),
            duration_ms: 1250.5,
            retry_count: Some(2),
            retry_kind: Some(vigil_client::wire::RetryKind::Logical),
        }];
        let text = agent_chain_text(&chain);
        assert!(text.contains("Analyzer Agent"));
        assert!(text.contains("retried 2x"));
        assert!(text.contains("1250 ms"));
    }

    #[test]
    fn roster_table_has_header_and_rows() {
        let text = roster_table(&[]);
        assert!(text.starts_with("USER"));
        assert_eq!(text.lines().count(), 1);
    }
}
