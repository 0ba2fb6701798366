//! Roadmap phasing: quick wins first, then core hardening, then strategic
//! transformation.

use crate::core::{Archetype, DimensionScores};
use serde::Serialize;

use super::{ImprovementAction, ScenarioEngine, StrategicValue};

/// One sequential phase of a roadmap. `expected_index` is cumulative, the
/// projected index once this phase and all earlier ones are done.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoadmapPhase {
    pub name: String,
    pub actions: Vec<ImprovementAction>,
    /// Longest action in the phase; actions within a phase run in parallel.
    pub duration_months: u32,
    pub cost: f64,
    pub expected_index: u8,
}

/// Split selected actions into up to three sequential phases.
///
/// Phase 1 collects quick wins, ordered fastest first. Phase 2 holds the
/// remaining non-critical work. Phase 3 holds critical strategic actions,
/// quick wins excluded so nothing is scheduled twice. Empty phases are
/// omitted.
pub fn build_phases(
    engine: &ScenarioEngine,
    scores: &DimensionScores,
    archetype: Archetype,
    selected: &[&ImprovementAction],
) -> Vec<RoadmapPhase> {
    let mut quick: Vec<&ImprovementAction> =
        selected.iter().copied().filter(|a| a.quick_win).collect();
    quick.sort_by_key(|a| a.time_to_implement_months);

    let core: Vec<&ImprovementAction> = selected
        .iter()
        .copied()
        .filter(|a| !a.quick_win && a.strategic_value != StrategicValue::Critical)
        .collect();

    let strategic: Vec<&ImprovementAction> = selected
        .iter()
        .copied()
        .filter(|a| !a.quick_win && a.strategic_value == StrategicValue::Critical)
        .collect();

    let mut phases = Vec::new();
    let mut done: Vec<&ImprovementAction> = Vec::new();
    let groups = [
        ("Quick Wins", quick),
        ("Core Hardening", core),
        ("Strategic Transformation", strategic),
    ];
    for (name, actions) in groups {
        if actions.is_empty() {
            continue;
        }
        done.extend(&actions);
        let impact = engine.impact_of(scores, archetype, &done);
        phases.push(RoadmapPhase {
            name: name.to_string(),
            duration_months: actions
                .iter()
                .map(|a| a.time_to_implement_months)
                .max()
                .unwrap_or(0),
            cost: actions.iter().map(|a| a.implementation_cost).sum(),
            expected_index: impact.projected_index,
            actions: actions.into_iter().cloned().collect(),
        });
    }
    phases
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archetype::ArchetypeRegistry;
    use crate::config::EngineConfig;
    use crate::scenario::ActionCatalog;
    use pretty_assertions::assert_eq;

    fn phases_for(ids: &[&str]) -> Vec<RoadmapPhase> {
        let registry = ArchetypeRegistry::builtin();
        let catalog = ActionCatalog::builtin();
        let config = EngineConfig::default();
        let engine = ScenarioEngine::new(registry, catalog, &config);
        let selected: Vec<&ImprovementAction> = ids
            .iter()
            .map(|id| catalog.find(Archetype::HybridCommerce, id).unwrap())
            .collect();
        build_phases(
            &engine,
            &DimensionScores::new(5.0, 6.0, 3.0, 4.0, 2.0),
            Archetype::HybridCommerce,
            &selected,
        )
    }

    #[test]
    fn actions_land_in_their_phase_exactly_once() {
        // hfp-1-1/hfp-1-2 are quick wins, rrg-1-1 is non-critical core
        // work, bri-1-1 is critical strategic.
        let phases = phases_for(&["hfp-1-1", "rrg-1-1", "bri-1-1", "hfp-1-2"]);
        assert_eq!(phases.len(), 3);
        assert_eq!(phases[0].name, "Quick Wins");
        assert_eq!(phases[1].name, "Core Hardening");
        assert_eq!(phases[2].name, "Strategic Transformation");

        let ids: Vec<Vec<&str>> = phases
            .iter()
            .map(|p| p.actions.iter().map(|a| a.id.as_str()).collect())
            .collect();
        // Quick wins are ordered fastest first.
        assert_eq!(ids[0], vec!["hfp-1-2", "hfp-1-1"]);
        assert_eq!(ids[1], vec!["rrg-1-1"]);
        assert_eq!(ids[2], vec!["bri-1-1"]);
    }

    #[test]
    fn expected_index_is_cumulative_and_non_decreasing() {
        let phases = phases_for(&["hfp-1-1", "rrg-1-1", "bri-1-1"]);
        let mut last = 0;
        for phase in &phases {
            assert!(phase.expected_index >= last);
            last = phase.expected_index;
        }
    }

    #[test]
    fn empty_phases_are_omitted() {
        let phases = phases_for(&["hfp-1-1"]);
        assert_eq!(phases.len(), 1);
        assert_eq!(phases[0].name, "Quick Wins");
    }

    #[test]
    fn phase_duration_is_the_longest_action() {
        let phases = phases_for(&["hfp-1-1", "hfp-1-2"]);
        assert_eq!(phases[0].duration_months, 2);
        assert_eq!(phases[0].cost, 40_000.0);
    }
}
