//! Scenario engine: projects how improvement actions move the index.
//!
//! Builds what-if scenarios from the action catalog, ranks quick wins, and
//! plans phased roadmaps toward a target index. All projections reuse the
//! calculator's normalization so a scenario with no actions reproduces the
//! current index exactly.

pub mod catalog;
pub mod comparison;
pub mod phases;

pub use catalog::{ActionCatalog, EffortLevel, ImprovementAction, StrategicValue};
pub use comparison::{compare_scenarios, ScenarioComparison};
pub use phases::RoadmapPhase;

use crate::archetype::ArchetypeRegistry;
use crate::calculator::IndexCalculator;
use crate::config::EngineConfig;
use crate::core::{Archetype, Dimension, DimensionScores};
use crate::errors::{EngineError, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

/// Projected effect of applying a set of actions to the current posture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScenarioImpact {
    pub current_index: u8,
    pub projected_index: u8,
    pub index_improvement: i16,
    pub projected_scores: DimensionScores,
}

/// A named scenario with its full cost/benefit projection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioAnalysis {
    pub name: String,
    pub description: String,
    pub archetype: Archetype,
    pub created_at: DateTime<Utc>,
    pub last_modified: DateTime<Utc>,
    pub actions: Vec<ImprovementAction>,
    pub impact: ScenarioImpact,
    pub total_cost: f64,
    pub total_annual_benefit: f64,
    pub total_annual_maintenance: f64,
    /// Expected annual risk cost eliminated: each action's avoided cost
    /// weighted by its risk-reduction percentage.
    pub risk_reduction: f64,
    /// Longest single action; actions run in parallel.
    pub duration_months: u32,
    pub roi_pct: f64,
    /// Months to recover the implementation cost. Holds the configured
    /// sentinel when the net benefit is zero or negative.
    pub payback_months: f64,
    pub business_impact: String,
}

/// Phased plan toward a target index.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TargetRoadmap {
    pub target_index: u8,
    pub achievable: bool,
    pub projected_index: u8,
    pub selected: Vec<ImprovementAction>,
    pub phases: Vec<RoadmapPhase>,
    pub total_cost: f64,
    pub total_duration_months: u32,
}

/// Builds scenarios against an archetype registry, action catalog, and
/// engine config.
pub struct ScenarioEngine<'a> {
    registry: &'a ArchetypeRegistry,
    catalog: &'a ActionCatalog,
    config: &'a EngineConfig,
}

impl<'a> ScenarioEngine<'a> {
    pub fn new(
        registry: &'a ArchetypeRegistry,
        catalog: &'a ActionCatalog,
        config: &'a EngineConfig,
    ) -> Self {
        Self {
            registry,
            catalog,
            config,
        }
    }

    /// Catalog actions applicable to the current posture.
    ///
    /// An action is offered when its full gain fits in the score headroom
    /// left on its dimension and exceeds the materiality threshold.
    pub fn available_improvements(
        &self,
        archetype: Archetype,
        scores: &DimensionScores,
    ) -> Vec<&ImprovementAction> {
        self.catalog
            .actions_for(archetype)
            .iter()
            .filter(|action| {
                action.score_improvement <= headroom(scores, action.dimension)
                    && action.score_improvement > self.config.scenario.materiality_threshold
            })
            .collect()
    }

    /// Available improvements bucketed by dimension, in dimension order.
    /// Dimensions with nothing applicable are absent from the map.
    pub fn improvements_by_dimension(
        &self,
        archetype: Archetype,
        scores: &DimensionScores,
    ) -> BTreeMap<Dimension, Vec<&ImprovementAction>> {
        let mut grouped: BTreeMap<Dimension, Vec<&ImprovementAction>> = BTreeMap::new();
        for action in self.available_improvements(archetype, scores) {
            grouped.entry(action.dimension).or_default().push(action);
        }
        grouped
    }

    /// Apply a set of actions to the current scores, capping each dimension
    /// at its scale boundary. Improvements push numerator dimensions up and
    /// denominator dimensions down.
    pub fn apply_actions(
        &self,
        scores: &DimensionScores,
        actions: &[&ImprovementAction],
    ) -> DimensionScores {
        let mut projected = *scores;
        for action in actions {
            let current = projected.get(action.dimension);
            let next = if action.dimension.is_numerator() {
                (current + action.score_improvement).min(10.0)
            } else {
                (current - action.score_improvement).max(1.0)
            };
            projected.set(action.dimension, next);
        }
        projected
    }

    /// Project the index movement for a set of actions. An empty set
    /// reports the current index unchanged.
    pub fn impact_of(
        &self,
        scores: &DimensionScores,
        archetype: Archetype,
        actions: &[&ImprovementAction],
    ) -> ScenarioImpact {
        let calculator = IndexCalculator::new(self.registry, self.config);
        let current = calculator.normalize(IndexCalculator::raw_index(scores).value, archetype);
        let projected_scores = self.apply_actions(scores, actions);
        let projected = calculator.normalize(
            IndexCalculator::raw_index(&projected_scores).value,
            archetype,
        );
        ScenarioImpact {
            current_index: current,
            projected_index: projected,
            index_improvement: i16::from(projected) - i16::from(current),
            projected_scores,
        }
    }

    /// Build a named scenario from catalog action ids.
    ///
    /// Fails with `ActionNotFound` when an id is not in the archetype's
    /// catalog.
    pub fn build_scenario(
        &self,
        name: &str,
        description: &str,
        scores: &DimensionScores,
        archetype: Archetype,
        action_ids: &[&str],
    ) -> Result<ScenarioAnalysis> {
        let mut actions = Vec::with_capacity(action_ids.len());
        for id in action_ids {
            let action = self
                .catalog
                .find(archetype, id)
                .ok_or_else(|| EngineError::action_not_found(*id))?;
            actions.push(action);
        }
        Ok(self.analyze(name, description, scores, archetype, &actions))
    }

    fn analyze(
        &self,
        name: &str,
        description: &str,
        scores: &DimensionScores,
        archetype: Archetype,
        actions: &[&ImprovementAction],
    ) -> ScenarioAnalysis {
        let impact = self.impact_of(scores, archetype, actions);

        let total_cost: f64 = actions.iter().map(|a| a.implementation_cost).sum();
        let total_annual_benefit: f64 = actions.iter().map(|a| a.annual_risk_cost).sum();
        let total_annual_maintenance: f64 =
            actions.iter().filter_map(|a| a.maintenance_cost).sum();
        let risk_reduction: f64 = actions
            .iter()
            .map(|a| a.risk_reduction_pct * a.annual_risk_cost / 100.0)
            .sum();
        let duration_months = actions
            .iter()
            .map(|a| a.time_to_implement_months)
            .max()
            .unwrap_or(0);

        let net_annual = total_annual_benefit - total_annual_maintenance;
        let roi_pct = if total_cost > 0.0 && net_annual > 0.0 {
            (net_annual / total_cost) * 100.0
        } else {
            0.0
        };
        let payback_months = if net_annual > 0.0 && total_cost > 0.0 {
            total_cost / (net_annual / 12.0)
        } else {
            self.config.scenario.payback_sentinel_months
        };

        let now = Utc::now();
        ScenarioAnalysis {
            name: name.to_string(),
            description: description.to_string(),
            archetype,
            created_at: now,
            last_modified: now,
            actions: actions.iter().map(|&a| a.clone()).collect(),
            impact,
            total_cost,
            total_annual_benefit,
            total_annual_maintenance,
            risk_reduction,
            duration_months,
            roi_pct,
            payback_months,
            business_impact: business_impact(impact.index_improvement),
        }
    }

    /// Top quick wins for the archetype, ranked by annual benefit per
    /// dollar of implementation cost.
    pub fn quick_wins(
        &self,
        archetype: Archetype,
        scores: &DimensionScores,
    ) -> Vec<&ImprovementAction> {
        let mut wins: Vec<&ImprovementAction> = self
            .available_improvements(archetype, scores)
            .into_iter()
            .filter(|a| a.quick_win)
            .collect();
        wins.sort_by(|a, b| b.benefit_cost_ratio().total_cmp(&a.benefit_cost_ratio()));
        wins.truncate(self.config.scenario.quick_win_limit);
        wins
    }

    /// Greedy roadmap toward a target index: repeatedly takes the most
    /// cost-efficient remaining action until the projected index reaches
    /// the target or the catalog runs out.
    pub fn roadmap_to_target(
        &self,
        scores: &DimensionScores,
        archetype: Archetype,
        target_index: u8,
    ) -> TargetRoadmap {
        let mut remaining = self.available_improvements(archetype, scores);
        remaining.sort_by(|a, b| b.efficiency().total_cmp(&a.efficiency()));

        let mut selected: Vec<&ImprovementAction> = Vec::new();
        let mut impact = self.impact_of(scores, archetype, &selected);
        for action in remaining {
            if impact.projected_index >= target_index {
                break;
            }
            log::debug!(
                "roadmap selecting {} ({:+.1} on {})",
                action.id,
                action.score_improvement,
                action.dimension
            );
            selected.push(action);
            impact = self.impact_of(scores, archetype, &selected);
        }

        let phases = phases::build_phases(self, scores, archetype, &selected);
        let total_cost = selected.iter().map(|a| a.implementation_cost).sum();
        let total_duration_months = phases.iter().map(|p| p.duration_months).sum();

        TargetRoadmap {
            target_index,
            achievable: impact.projected_index >= target_index,
            projected_index: impact.projected_index,
            selected: selected.into_iter().cloned().collect(),
            phases,
            total_cost,
            total_duration_months,
        }
    }
}

/// Score points left before a dimension hits its scale boundary.
fn headroom(scores: &DimensionScores, dimension: Dimension) -> f64 {
    let current = scores.get(dimension);
    if dimension.is_numerator() {
        10.0 - current
    } else {
        current - 1.0
    }
}

fn business_impact(index_improvement: i16) -> String {
    let summary = match index_improvement {
        i if i >= 20 => "Transformational: moves the organization into a new resilience class",
        i if i >= 15 => "Major: materially changes the risk profile seen by insurers and boards",
        i if i >= 10 => "Significant: clearly measurable reduction in expected incident losses",
        i if i >= 5 => "Moderate: worthwhile hardening with visible operational benefit",
        _ => "Incremental: marginal movement, consider bundling with further actions",
    };
    summary.to_string()
}
