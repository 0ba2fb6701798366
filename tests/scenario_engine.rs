//! Scenario engine integration: assessment results feeding roadmaps and
//! scenario comparisons.

use immunemap::scenario::compare_scenarios;
use immunemap::{
    ActionCatalog, Archetype, ArchetypeRegistry, DimensionScores, EngineConfig, IndexCalculator,
    ScenarioEngine,
};
use pretty_assertions::assert_eq;

fn engine_parts() -> (&'static ArchetypeRegistry, &'static ActionCatalog, EngineConfig) {
    (
        ArchetypeRegistry::builtin(),
        ActionCatalog::builtin(),
        EngineConfig::default(),
    )
}

fn struggling_commerce() -> DimensionScores {
    DimensionScores::new(5.0, 6.0, 3.0, 4.0, 2.0)
}

#[test]
fn scenario_projection_matches_the_calculator() {
    let (registry, catalog, config) = engine_parts();
    let engine = ScenarioEngine::new(registry, catalog, &config);
    let calculator = IndexCalculator::new(registry, &config);
    let scores = struggling_commerce();

    let scenario = engine
        .build_scenario(
            "quick wins",
            "human-factor hardening",
            &scores,
            Archetype::HybridCommerce,
            &["hfp-1-1", "hfp-1-2"],
        )
        .unwrap();

    // The projected index must be exactly what the calculator reports for
    // the projected scores.
    let recomputed = calculator
        .calculate(&scenario.impact.projected_scores, Archetype::HybridCommerce)
        .unwrap();
    assert_eq!(scenario.impact.projected_index, recomputed.normalized);
    assert!(scenario.impact.index_improvement > 0);
}

#[test]
fn every_archetype_offers_a_roadmap_out_of_fragile() {
    let (registry, catalog, config) = engine_parts();
    let engine = ScenarioEngine::new(registry, catalog, &config);
    let weak = DimensionScores::new(4.0, 4.0, 6.0, 6.0, 5.0);

    for archetype in Archetype::ALL {
        let roadmap = engine.roadmap_to_target(&weak, archetype, 30);
        assert!(
            roadmap.projected_index > engine.impact_of(&weak, archetype, &[]).current_index,
            "no usable actions for {archetype}"
        );
        assert_eq!(
            roadmap.selected.len(),
            roadmap.phases.iter().map(|p| p.actions.len()).sum::<usize>()
        );
    }
}

#[test]
fn comparing_quick_wins_against_the_full_catalog() {
    let (registry, catalog, config) = engine_parts();
    let engine = ScenarioEngine::new(registry, catalog, &config);
    let scores = struggling_commerce();

    let wins = engine.quick_wins(Archetype::HybridCommerce, &scores);
    let quick_ids: Vec<&str> = wins.iter().map(|a| a.id.as_str()).collect();
    let available = engine.available_improvements(Archetype::HybridCommerce, &scores);
    let all_ids: Vec<&str> = available.iter().map(|a| a.id.as_str()).collect();

    let quick = engine
        .build_scenario(
            "quick wins",
            "low-cost actions only",
            &scores,
            Archetype::HybridCommerce,
            &quick_ids,
        )
        .unwrap();
    let full = engine
        .build_scenario(
            "full program",
            "everything currently applicable",
            &scores,
            Archetype::HybridCommerce,
            &all_ids,
        )
        .unwrap();

    let scenarios = vec![quick, full];
    let comparison = compare_scenarios(&scenarios).unwrap();
    assert_eq!(comparison.fastest.name, "quick wins");
    assert_eq!(comparison.cheapest.name, "quick wins");
    assert_eq!(comparison.most_impactful.name, "full program");
    assert!(comparison.most_impactful.total_cost > comparison.cheapest.total_cost);
}

#[test]
fn roadmap_phases_schedule_quick_wins_before_strategic_work() {
    let (registry, catalog, config) = engine_parts();
    let engine = ScenarioEngine::new(registry, catalog, &config);
    let weak = DimensionScores::new(4.0, 4.0, 6.0, 6.0, 5.0);

    let roadmap = engine.roadmap_to_target(&weak, Archetype::HybridCommerce, 90);
    assert!(roadmap.phases.len() >= 2);
    assert_eq!(roadmap.phases[0].name, "Quick Wins");
    assert!(roadmap.phases[0].actions.iter().all(|a| a.quick_win));
    let last = roadmap.phases.last().unwrap();
    assert_eq!(last.expected_index, roadmap.projected_index);
}
