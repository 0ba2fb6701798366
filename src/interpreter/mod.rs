//! Dimension interpreter: converts raw categorical answers into normalized
//! 1-10 dimension scores.
//!
//! Four sequential stages: base interpretation (domain metric step function
//! or ordinal lookup), archetype adjustment, size-bracket adjustment, and
//! critical-infrastructure penalty. Every stage is additive; the result is
//! rounded and clamped to [1, 10]. Confidence is computed independently and
//! never affects the score.

pub mod adjustments;
pub mod defaults;
pub mod mappings;

use crate::archetype::ArchetypeRegistry;
use crate::config::EngineConfig;
use crate::core::{
    Archetype, CompanyContext, CompanyDataSource, Dimension, DimensionMetric, DimensionResponse,
};
use crate::errors::{EngineError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One raw answer as collected by the questionnaire layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    /// Ordinal answer code, 1-5.
    pub raw_code: u8,
    pub metric: Option<DimensionMetric>,
}

impl Answer {
    pub fn ordinal(raw_code: u8) -> Self {
        Self {
            raw_code,
            metric: None,
        }
    }

    pub fn with_metric(raw_code: u8, metric: DimensionMetric) -> Self {
        Self {
            raw_code,
            metric: Some(metric),
        }
    }
}

/// Interprets answers against an archetype registry and engine config.
pub struct DimensionInterpreter<'a> {
    registry: &'a ArchetypeRegistry,
    config: &'a EngineConfig,
}

impl<'a> DimensionInterpreter<'a> {
    pub fn new(registry: &'a ArchetypeRegistry, config: &'a EngineConfig) -> Self {
        Self { registry, config }
    }

    /// Interpret a single answer into a dimension response.
    ///
    /// Fails with `InvalidInput` when the raw code is outside [1, 5].
    pub fn interpret(
        &self,
        dimension: Dimension,
        answer: Answer,
        archetype: Archetype,
        context: &CompanyContext,
    ) -> Result<DimensionResponse> {
        if !(1..=5).contains(&answer.raw_code) {
            return Err(EngineError::invalid_code(dimension, answer.raw_code));
        }

        let base = answer
            .metric
            .and_then(|m| mappings::metric_lookup(dimension, m))
            .unwrap_or_else(|| mappings::base_lookup(dimension, answer.raw_code));

        let model_adjusted = base + self.registry.adjustments(archetype).get(dimension);
        let size_adjusted =
            model_adjusted + adjustments::size_adjustment(context.size_bracket(), dimension);
        let final_value = if context.critical_infra {
            size_adjusted + adjustments::critical_infra_penalty(dimension)
        } else {
            size_adjusted
        };

        let score = final_value.round().clamp(1.0, 10.0) as u8;
        let confidence = self.confidence(context);
        let reasoning = self.reasoning(dimension, answer.raw_code, score, archetype, context);

        Ok(DimensionResponse {
            dimension,
            raw_code: answer.raw_code,
            metric: answer.metric,
            score,
            confidence,
            reasoning,
        })
    }

    /// Interpret a full (possibly partial) answer map. Missing dimensions
    /// are filled with correlation-based defaults before interpretation, so
    /// the result always covers all five dimensions.
    pub fn interpret_all(
        &self,
        answers: &BTreeMap<Dimension, Answer>,
        archetype: Archetype,
        context: &CompanyContext,
    ) -> Result<im::HashMap<Dimension, DimensionResponse>> {
        let mut codes: BTreeMap<Dimension, u8> =
            answers.iter().map(|(d, a)| (*d, a.raw_code)).collect();
        defaults::fill_missing_answers(&mut codes, archetype);

        let mut responses = im::HashMap::new();
        for (dimension, raw_code) in codes {
            // Metrics only accompany explicitly answered dimensions.
            let answer = answers
                .get(&dimension)
                .copied()
                .unwrap_or(Answer::ordinal(raw_code));
            let response = self.interpret(dimension, answer, archetype, context)?;
            responses.insert(dimension, response);
        }
        Ok(responses)
    }

    /// Advisory confidence: grows with company data completeness, capped at
    /// 1.0. Never feeds back into the score.
    fn confidence(&self, context: &CompanyContext) -> f64 {
        let weights = &self.config.confidence;
        let mut confidence = weights.base;
        if context.employees.is_some() {
            confidence += weights.employees;
        }
        if context.revenue.is_some() {
            confidence += weights.revenue;
        }
        if context.industry.is_some() {
            confidence += weights.industry;
        }
        if context.data_source == CompanyDataSource::AiEnriched {
            confidence += weights.ai_sourced;
        }
        confidence.min(1.0)
    }

    fn reasoning(
        &self,
        dimension: Dimension,
        raw_code: u8,
        score: u8,
        archetype: Archetype,
        context: &CompanyContext,
    ) -> String {
        const ANSWER_LABELS: [&str; 5] = ["very poor", "poor", "average", "good", "excellent"];
        let answer_label = ANSWER_LABELS[usize::from(raw_code) - 1];
        let size_label = context.size_bracket().label();
        let critical_note = if context.critical_infra {
            " Critical infrastructure standards applied."
        } else {
            ""
        };
        format!(
            "\"{answer_label}\" answer interpreted as {score}/10 for {dimension}. \
             Adjusted for a {size_label} {archetype} organization.{critical_note}"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn interpreter_fixture() -> (&'static ArchetypeRegistry, EngineConfig) {
        (ArchetypeRegistry::builtin(), EngineConfig::default())
    }

    fn medium_context() -> CompanyContext {
        CompanyContext {
            employees: Some(400),
            revenue: Some(50_000_000.0),
            ..Default::default()
        }
    }

    #[test]
    fn rejects_out_of_range_answer_codes() {
        let (registry, config) = interpreter_fixture();
        let interpreter = DimensionInterpreter::new(registry, &config);
        for bad_code in [0, 6, 200] {
            let err = interpreter
                .interpret(
                    Dimension::TimeToRevenueDegradation,
                    Answer::ordinal(bad_code),
                    Archetype::HybridCommerce,
                    &medium_context(),
                )
                .unwrap_err();
            assert!(matches!(err, EngineError::InvalidInput { .. }));
        }
    }

    #[test]
    fn medium_org_neutral_archetype_keeps_base_value() {
        let (registry, config) = interpreter_fixture();
        let interpreter = DimensionInterpreter::new(registry, &config);
        // HybridCommerce has no AER adjustment; medium bracket is neutral.
        let response = interpreter
            .interpret(
                Dimension::AttackEconomicsRatio,
                Answer::ordinal(3),
                Archetype::HybridCommerce,
                &medium_context(),
            )
            .unwrap();
        assert_eq!(response.score, 6);
    }

    #[test]
    fn archetype_adjustment_shifts_the_score() {
        let (registry, config) = interpreter_fixture();
        let interpreter = DimensionInterpreter::new(registry, &config);
        // DataServices carries a -1.5 AER adjustment: 6 - 1.5 = 4.5 -> 5
        // (round half away from zero).
        let response = interpreter
            .interpret(
                Dimension::AttackEconomicsRatio,
                Answer::ordinal(3),
                Archetype::DataServices,
                &medium_context(),
            )
            .unwrap();
        assert_eq!(response.score, 5);
    }

    #[test]
    fn small_company_penalized_on_resilience() {
        let (registry, config) = interpreter_fixture();
        let interpreter = DimensionInterpreter::new(registry, &config);
        let small = CompanyContext {
            employees: Some(20),
            revenue: Some(2_000_000.0),
            ..Default::default()
        };
        // TRD base 5.5, HybridCommerce -0.5, small -0.5 => 4.5 -> 5
        let response = interpreter
            .interpret(
                Dimension::TimeToRevenueDegradation,
                Answer::ordinal(3),
                Archetype::HybridCommerce,
                &small,
            )
            .unwrap();
        assert_eq!(response.score, 5);
    }

    #[test]
    fn critical_infra_penalty_applies_only_when_flagged() {
        let (registry, config) = interpreter_fixture();
        let interpreter = DimensionInterpreter::new(registry, &config);
        let mut context = medium_context();
        let baseline = interpreter
            .interpret(
                Dimension::AttackEconomicsRatio,
                Answer::ordinal(4),
                Archetype::HybridCommerce,
                &context,
            )
            .unwrap();
        context.critical_infra = true;
        let flagged = interpreter
            .interpret(
                Dimension::AttackEconomicsRatio,
                Answer::ordinal(4),
                Archetype::HybridCommerce,
                &context,
            )
            .unwrap();
        assert_eq!(baseline.score, 8);
        assert_eq!(flagged.score, 7);
    }

    #[test]
    fn scores_stay_clamped_at_the_extremes() {
        let (registry, config) = interpreter_fixture();
        let interpreter = DimensionInterpreter::new(registry, &config);
        let small_critical = CompanyContext {
            employees: Some(10),
            revenue: Some(1_000_000.0),
            critical_infra: true,
            ..Default::default()
        };
        // AER answer 1 for DataServices: 2 - 1.5 + 0.5 - 1.0 = 0 -> clamp 1.
        let low = interpreter
            .interpret(
                Dimension::AttackEconomicsRatio,
                Answer::ordinal(1),
                Archetype::DataServices,
                &small_critical,
            )
            .unwrap();
        assert_eq!(low.score, 1);

        let large = CompanyContext {
            employees: Some(10_000),
            revenue: Some(1_000_000_000.0),
            ..Default::default()
        };
        // HFP answer 1 for LegacyInfrastructure: 9 - 1.0 + 0.5 = 8.5 -> 9;
        // the clamp also holds at the top for worse inputs.
        let high = interpreter
            .interpret(
                Dimension::HumanFailureProbability,
                Answer::ordinal(1),
                Archetype::LegacyInfrastructure,
                &large,
            )
            .unwrap();
        assert!(high.score <= 10);
    }

    #[test]
    fn metric_answer_overrides_ordinal_lookup() {
        let (registry, config) = interpreter_fixture();
        let interpreter = DimensionInterpreter::new(registry, &config);
        // Ordinal 5 would map to 9.5, but a 3-hour metric maps to 3.5.
        let response = interpreter
            .interpret(
                Dimension::TimeToRevenueDegradation,
                Answer::with_metric(5, DimensionMetric::Hours(3.0)),
                Archetype::SupplyChain,
                &medium_context(),
            )
            .unwrap();
        // 3.5 + 0.0 (SupplyChain TRD) = 3.5 -> 4
        assert_eq!(response.score, 4);
    }

    #[test]
    fn confidence_reflects_data_completeness() {
        let (registry, config) = interpreter_fixture();
        let interpreter = DimensionInterpreter::new(registry, &config);

        let sparse = CompanyContext::default();
        let full = CompanyContext {
            employees: Some(500),
            revenue: Some(80_000_000.0),
            industry: Some("logistics".to_string()),
            data_source: CompanyDataSource::AiEnriched,
            critical_infra: false,
        };

        let low = interpreter
            .interpret(
                Dimension::BlastRadiusIndex,
                Answer::ordinal(3),
                Archetype::SupplyChain,
                &sparse,
            )
            .unwrap();
        let high = interpreter
            .interpret(
                Dimension::BlastRadiusIndex,
                Answer::ordinal(3),
                Archetype::SupplyChain,
                &full,
            )
            .unwrap();

        assert_eq!(low.confidence, 0.7);
        assert!((high.confidence - 1.0).abs() < 1e-9);
    }

    #[test]
    fn interpret_all_fills_missing_dimensions() {
        let (registry, config) = interpreter_fixture();
        let interpreter = DimensionInterpreter::new(registry, &config);
        let answers = BTreeMap::from([(Dimension::TimeToRevenueDegradation, Answer::ordinal(4))]);
        let responses = interpreter
            .interpret_all(&answers, Archetype::FinancialServices, &medium_context())
            .unwrap();
        assert_eq!(responses.len(), 5);
        for dimension in Dimension::ALL {
            let response = &responses[&dimension];
            assert!((1..=10).contains(&response.score));
        }
    }
}
