//! Interpretation of a normalized index score into business meaning.
//!
//! Message tables are keyed by maturity stage only; archetype and dimension
//! values influence the numeric fields, never the wording.

use crate::archetype::ArchetypeProfile;
use crate::core::{Interpretation, MaturityStage, OperationalRisk, PeerBenchmark};

/// Downtime multiplier: exponential decay, so low scores mean much longer
/// outages.
fn downtime_multiplier(score: u8) -> f64 {
    (-f64::from(score) / 25.0).exp()
}

/// Estimated downtime for an incident, from the archetype's resilience
/// window scaled by the score.
pub fn estimated_downtime_hours(score: u8, resilience_window_hours: f64) -> u32 {
    (resilience_window_hours * downtime_multiplier(score)).round() as u32
}

/// Percentage of annual revenue exposed. Even strong postures keep a 5%
/// floor; no organization is risk-free.
pub fn revenue_at_risk_pct(score: u8) -> u8 {
    let risk = f64::from(100 - score.min(100)) * 0.8;
    risk.max(5.0).round() as u8
}

struct StageMessages {
    headline: &'static str,
    strengths: &'static [&'static str],
    vulnerabilities: &'static [&'static str],
}

fn stage_messages(stage: MaturityStage) -> StageMessages {
    match stage {
        MaturityStage::Fragile => StageMessages {
            headline: "Your digital immunity is critically low. Immediate action required.",
            strengths: &[
                "Awareness is the first step to improvement",
                "Significant opportunity for quick wins",
                "Can learn from many available best practices",
            ],
            vulnerabilities: &[
                "Highly vulnerable to commodity attacks",
                "Lack of basic security hygiene",
                "No resilience to sustained attacks",
                "Recovery will be costly and slow",
            ],
        },
        MaturityStage::Robust => StageMessages {
            headline: "Basic defenses in place, but significant gaps remain.",
            strengths: &[
                "Foundation security controls implemented",
                "Some incident response capability exists",
                "Can handle basic commodity attacks",
            ],
            vulnerabilities: &[
                "Vulnerable to targeted attacks",
                "Limited detection capabilities",
                "Recovery processes untested",
                "Human factor remains high risk",
            ],
        },
        MaturityStage::Resilient => StageMessages {
            headline: "Good security posture with proven recovery capability.",
            strengths: &[
                "Can withstand most common attacks",
                "Proven incident response processes",
                "Good security culture established",
                "Recovery time within business tolerance",
            ],
            vulnerabilities: &[
                "Advanced persistent threats still a risk",
                "Supply chain vulnerabilities exist",
                "Some legacy system exposure",
                "Insider threats need attention",
            ],
        },
        MaturityStage::Adaptive => StageMessages {
            headline: "Excellent cyber resilience with adaptive defense.",
            strengths: &[
                "Proactive threat hunting capability",
                "Rapid detection and response",
                "Strong security culture throughout",
                "Continuous improvement mindset",
                "Can handle advanced threats",
            ],
            vulnerabilities: &[
                "Nation-state actors remain a concern",
                "Zero-day exploits before patches",
                "Maintain vigilance against complacency",
            ],
        },
    }
}

/// Build the full interpretation for a normalized score.
pub fn interpret(score: u8, percentile: u8, profile: Option<&ArchetypeProfile>) -> Interpretation {
    const DEFAULT_RESILIENCE_WINDOW_HOURS: f64 = 24.0;

    let stage = MaturityStage::from_score(score);
    let messages = stage_messages(stage);

    let resilience_window = profile.map_or(DEFAULT_RESILIENCE_WINDOW_HOURS, |p| {
        p.resilience_window_hours
    });
    let peer_benchmark = profile.map_or(
        PeerBenchmark {
            average: 55,
            top_decile: 80,
            your_score: score,
        },
        |p| PeerBenchmark {
            average: p.benchmark.average.round() as u8,
            top_decile: p.benchmark.top_decile().round() as u8,
            your_score: score,
        },
    );

    Interpretation {
        stage,
        operational_risk: OperationalRisk::from_score(score),
        estimated_downtime_hours: estimated_downtime_hours(score, resilience_window),
        revenue_at_risk_pct: revenue_at_risk_pct(score),
        headline: messages.headline.to_string(),
        strengths: messages.strengths.iter().map(|s| s.to_string()).collect(),
        vulnerabilities: messages
            .vulnerabilities
            .iter()
            .map(|s| s.to_string())
            .collect(),
        better_than_pct: percentile,
        peer_benchmark,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archetype::ArchetypeRegistry;
    use crate::core::Archetype;

    #[test]
    fn downtime_decays_with_score() {
        // Base window 48h: score 0 keeps the full window, score 100 shrinks
        // it to under an hour.
        assert_eq!(estimated_downtime_hours(0, 48.0), 48);
        assert_eq!(estimated_downtime_hours(50, 48.0), 6);
        assert_eq!(estimated_downtime_hours(100, 48.0), 1);
    }

    #[test]
    fn revenue_at_risk_has_a_floor() {
        assert_eq!(revenue_at_risk_pct(0), 80);
        assert_eq!(revenue_at_risk_pct(50), 40);
        // (100 - 95) * 0.8 = 4, floored at 5.
        assert_eq!(revenue_at_risk_pct(95), 5);
        assert_eq!(revenue_at_risk_pct(100), 5);
    }

    #[test]
    fn wording_depends_on_stage_only() {
        let registry = ArchetypeRegistry::builtin();
        let commerce = registry.profile(Archetype::HybridCommerce);
        let finance = registry.profile(Archetype::FinancialServices);
        let a = interpret(20, 30, commerce);
        let b = interpret(20, 30, finance);
        assert_eq!(a.headline, b.headline);
        assert_eq!(a.strengths, b.strengths);
        // Numeric fields differ with the archetype's resilience window.
        assert_ne!(a.estimated_downtime_hours, b.estimated_downtime_hours);
    }

    #[test]
    fn peer_benchmark_comes_from_the_profile() {
        let registry = ArchetypeRegistry::builtin();
        let profile = registry.profile(Archetype::CriticalSoftware);
        let interpretation = interpret(60, 72, profile);
        assert_eq!(interpretation.peer_benchmark.average, 48);
        assert_eq!(interpretation.peer_benchmark.top_decile, 70);
        assert_eq!(interpretation.peer_benchmark.your_score, 60);
        assert_eq!(interpretation.better_than_pct, 72);
    }
}
