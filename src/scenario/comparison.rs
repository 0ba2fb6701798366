//! Side-by-side comparison of candidate scenarios.

use crate::errors::{EngineError, Result};
use serde::Serialize;

use super::ScenarioAnalysis;

/// Winners along each axis a decision-maker cares about. The same scenario
/// can win several axes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioComparison<'a> {
    pub fastest: &'a ScenarioAnalysis,
    pub cheapest: &'a ScenarioAnalysis,
    pub best_roi: &'a ScenarioAnalysis,
    pub most_impactful: &'a ScenarioAnalysis,
}

/// Compare scenarios along duration, cost, ROI, and index impact.
///
/// Fails with `EmptyInput` when given no scenarios. Ties keep the earliest
/// scenario in the slice, so the comparison is deterministic.
pub fn compare_scenarios(scenarios: &[ScenarioAnalysis]) -> Result<ScenarioComparison<'_>> {
    if scenarios.is_empty() {
        return Err(EngineError::EmptyInput);
    }

    let mut fastest = &scenarios[0];
    let mut cheapest = &scenarios[0];
    let mut best_roi = &scenarios[0];
    let mut most_impactful = &scenarios[0];
    for scenario in &scenarios[1..] {
        if scenario.duration_months < fastest.duration_months {
            fastest = scenario;
        }
        if scenario.total_cost < cheapest.total_cost {
            cheapest = scenario;
        }
        if scenario.roi_pct > best_roi.roi_pct {
            best_roi = scenario;
        }
        if scenario.impact.index_improvement > most_impactful.impact.index_improvement {
            most_impactful = scenario;
        }
    }

    Ok(ScenarioComparison {
        fastest,
        cheapest,
        best_roi,
        most_impactful,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archetype::ArchetypeRegistry;
    use crate::config::EngineConfig;
    use crate::core::{Archetype, DimensionScores};
    use crate::scenario::{ActionCatalog, ScenarioEngine};
    use pretty_assertions::assert_eq;

    fn scenarios() -> Vec<ScenarioAnalysis> {
        let registry = ArchetypeRegistry::builtin();
        let catalog = ActionCatalog::builtin();
        let config = EngineConfig::default();
        let engine = ScenarioEngine::new(registry, catalog, &config);
        let scores = DimensionScores::new(5.0, 6.0, 3.0, 4.0, 2.0);
        ["hfp-1-2", "bri-1-1", "rrg-1-2"]
            .iter()
            .map(|id| {
                engine
                    .build_scenario(id, "single action", &scores, Archetype::HybridCommerce, &[id])
                    .unwrap()
            })
            .collect()
    }

    #[test]
    fn winners_are_picked_per_axis() {
        let scenarios = scenarios();
        let comparison = compare_scenarios(&scenarios).unwrap();
        // Training is the 1-month, 15k option with outsized annual return.
        assert_eq!(comparison.fastest.name, "hfp-1-2");
        assert_eq!(comparison.cheapest.name, "hfp-1-2");
        assert_eq!(comparison.best_roi.name, "hfp-1-2");
        // Segmentation moves the index most from this posture.
        assert_eq!(comparison.most_impactful.name, "bri-1-1");
    }

    #[test]
    fn empty_comparison_is_an_error() {
        let err = compare_scenarios(&[]).unwrap_err();
        assert!(matches!(err, EngineError::EmptyInput));
    }

    #[test]
    fn single_scenario_wins_every_axis() {
        let scenarios = scenarios();
        let only = &scenarios[..1];
        let comparison = compare_scenarios(only).unwrap();
        assert_eq!(comparison.fastest.name, "hfp-1-2");
        assert_eq!(comparison.most_impactful.name, "hfp-1-2");
    }
}
