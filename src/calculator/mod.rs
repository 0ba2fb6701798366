//! Index calculator: combines five normalized dimension scores into the
//! Digital Immunity Index.
//!
//! Formula: DII = (TRD x AER) / (HFP x BRI x RRG), normalized against the
//! archetype's baseline range onto the canonical 0-100 scale. Every
//! operation is a pure function of its inputs plus the static archetype
//! table.

pub mod interpretation;
pub mod percentile;

use crate::archetype::ArchetypeRegistry;
use crate::config::EngineConfig;
use crate::core::{Archetype, BenchmarkSample, Dimension, DimensionScores, IndexScore, RawIndex};
use crate::errors::{EngineError, Result};

/// Calculates index scores against an archetype registry and engine config.
pub struct IndexCalculator<'a> {
    registry: &'a ArchetypeRegistry,
    config: &'a EngineConfig,
}

impl<'a> IndexCalculator<'a> {
    pub fn new(registry: &'a ArchetypeRegistry, config: &'a EngineConfig) -> Self {
        Self { registry, config }
    }

    /// Raw multiplicative index. The [1, 10] clamp upstream guarantees a
    /// denominator of at least 1; the max() is a defensive floor only.
    pub fn raw_index(scores: &DimensionScores) -> RawIndex {
        let numerator = scores.trd * scores.aer;
        let denominator = (scores.hfp * scores.bri * scores.rrg).max(1.0);
        RawIndex {
            value: numerator / denominator,
            formula: format!(
                "({} x {}) / ({} x {} x {})",
                scores.trd, scores.aer, scores.hfp, scores.bri, scores.rrg
            ),
            dimensions: *scores,
        }
    }

    /// Normalize a raw index value onto 0-100 using the archetype baseline.
    /// A missing profile falls back to the default baseline, logged by the
    /// registry.
    pub fn normalize(&self, raw_value: f64, archetype: Archetype) -> u8 {
        let baseline = self.registry.baseline_or_default(archetype);
        let normalized = ((raw_value - baseline.min) / baseline.width()) * 100.0;
        normalized.round().clamp(0.0, 100.0) as u8
    }

    /// Calculate the complete index score.
    ///
    /// Fails with `InvalidInput` if any dimension score escaped the [1, 10]
    /// clamp; that is an assertion failure in the caller, not a user
    /// condition.
    pub fn calculate(&self, scores: &DimensionScores, archetype: Archetype) -> Result<IndexScore> {
        self.calculate_with_benchmarks(scores, archetype, &[])
    }

    /// Calculate with real peer samples for empirical percentile
    /// computation. An empty slice falls back to the normal-distribution
    /// approximation.
    pub fn calculate_with_benchmarks(
        &self,
        scores: &DimensionScores,
        archetype: Archetype,
        samples: &[BenchmarkSample],
    ) -> Result<IndexScore> {
        validate_scores(scores)?;

        let raw = Self::raw_index(scores);
        let normalized = self.normalize(raw.value, archetype);

        let profile = self.registry.profile(archetype);
        let percentile = match profile {
            Some(profile) => percentile::percentile(
                normalized,
                archetype,
                &profile.benchmark,
                samples,
                self.config.percentile,
            ),
            // No benchmark distribution to compare against: report median.
            None => 50,
        };

        let interpretation = interpretation::interpret(normalized, percentile, profile);

        Ok(IndexScore {
            raw,
            normalized,
            archetype,
            percentile,
            interpretation,
        })
    }
}

fn validate_scores(scores: &DimensionScores) -> Result<()> {
    for (dimension, value) in scores.iter() {
        if !(1.0..=10.0).contains(&value) {
            return Err(EngineError::score_out_of_range(dimension, value));
        }
    }
    Ok(())
}

/// Convenience: validate one dimension score on the 1-10 scale.
pub fn validate_dimension(dimension: Dimension, value: f64) -> Result<f64> {
    if (1.0..=10.0).contains(&value) {
        Ok(value)
    } else {
        Err(EngineError::score_out_of_range(dimension, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MaturityStage;
    use pretty_assertions::assert_eq;

    fn calculator_fixture() -> (&'static ArchetypeRegistry, EngineConfig) {
        (ArchetypeRegistry::builtin(), EngineConfig::default())
    }

    #[test]
    fn raw_index_formula_is_exact() {
        let scores = DimensionScores::new(5.0, 6.0, 3.0, 4.0, 2.0);
        let raw = IndexCalculator::raw_index(&scores);
        assert_eq!(raw.value, 1.25);
        assert_eq!(raw.formula, "(5 x 6) / (3 x 4 x 2)");
    }

    #[test]
    fn normalization_hits_the_baseline_boundaries() {
        let (registry, config) = calculator_fixture();
        let calculator = IndexCalculator::new(registry, &config);
        // HybridCommerce baseline is [0.01, 9].
        assert_eq!(calculator.normalize(9.0, Archetype::HybridCommerce), 100);
        assert_eq!(calculator.normalize(0.01, Archetype::HybridCommerce), 0);
    }

    #[test]
    fn normalization_clamps_outside_the_baseline() {
        let (registry, config) = calculator_fixture();
        let calculator = IndexCalculator::new(registry, &config);
        assert_eq!(calculator.normalize(50.0, Archetype::HybridCommerce), 100);
        assert_eq!(calculator.normalize(0.001, Archetype::HybridCommerce), 0);
    }

    #[test]
    fn critical_software_end_to_end() {
        let (registry, config) = calculator_fixture();
        let calculator = IndexCalculator::new(registry, &config);
        let scores = DimensionScores::new(6.0, 7.0, 4.0, 3.0, 2.0);
        let result = calculator
            .calculate(&scores, Archetype::CriticalSoftware)
            .unwrap();

        // raw = (6 x 7) / (4 x 3 x 2) = 1.75
        assert_eq!(result.raw.value, 1.75);
        // ((1.75 - 0.02) / 11.98) * 100 = 14.44 -> 14
        assert_eq!(result.normalized, 14);
        assert_eq!(result.interpretation.stage, MaturityStage::Fragile);
        assert!(result.percentile >= 1);
    }

    #[test]
    fn calculation_is_deterministic() {
        let (registry, config) = calculator_fixture();
        let calculator = IndexCalculator::new(registry, &config);
        let scores = DimensionScores::new(7.0, 8.0, 3.0, 2.0, 2.0);
        let first = calculator.calculate(&scores, Archetype::DataServices).unwrap();
        let second = calculator.calculate(&scores, Archetype::DataServices).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn out_of_range_dimension_is_an_input_error() {
        let (registry, config) = calculator_fixture();
        let calculator = IndexCalculator::new(registry, &config);
        let scores = DimensionScores::new(0.5, 6.0, 3.0, 4.0, 2.0);
        let err = calculator
            .calculate(&scores, Archetype::HybridCommerce)
            .unwrap_err();
        assert!(matches!(err, EngineError::InvalidInput { .. }));
    }

    #[test]
    fn missing_profile_falls_back_to_default_baseline() {
        let registry = ArchetypeRegistry::new(Vec::new());
        let config = EngineConfig::default();
        let calculator = IndexCalculator::new(&registry, &config);
        let scores = DimensionScores::new(5.0, 6.0, 3.0, 4.0, 2.0);
        let result = calculator
            .calculate(&scores, Archetype::HybridCommerce)
            .unwrap();
        // Default baseline [0.01, 10]: ((1.25 - 0.01) / 9.99) * 100 = 12.4
        assert_eq!(result.normalized, 12);
        assert_eq!(result.percentile, 50);
    }

    #[test]
    fn best_and_worst_postures_stay_in_range() {
        let (registry, config) = calculator_fixture();
        let calculator = IndexCalculator::new(registry, &config);

        let best = DimensionScores::new(10.0, 10.0, 1.0, 1.0, 1.0);
        let worst = DimensionScores::new(1.0, 1.0, 10.0, 10.0, 10.0);
        for archetype in Archetype::ALL {
            let high = calculator.calculate(&best, archetype).unwrap();
            let low = calculator.calculate(&worst, archetype).unwrap();
            assert!(high.normalized <= 100);
            assert_eq!(low.normalized, 0);
            assert!((1..=99).contains(&high.percentile));
            assert!((1..=99).contains(&low.percentile));
        }
    }
}
