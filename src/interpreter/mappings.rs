//! Base interpretation tables.
//!
//! Each dimension maps a 1-5 ordinal answer to a 1-10 score through its own
//! calibration array, or maps a domain metric through a step function when
//! one is supplied. Denominator dimensions (HFP, BRI, RRG) are calibrated so
//! a better answer yields a lower stored score; the index formula divides by
//! them.

use crate::core::{Dimension, DimensionMetric};

/// Ordinal lookup, indexed by raw code 1-5.
///
/// TRD/AER: answer 1 = very poor posture = low score.
/// HFP/BRI/RRG: answer 1 = very poor posture = high failure/exposure score.
pub fn base_lookup(dimension: Dimension, raw_code: u8) -> f64 {
    debug_assert!((1..=5).contains(&raw_code));
    let table: [f64; 5] = match dimension {
        Dimension::TimeToRevenueDegradation => [1.5, 3.5, 5.5, 7.5, 9.5],
        Dimension::AttackEconomicsRatio => [2.0, 4.0, 6.0, 8.0, 10.0],
        Dimension::HumanFailureProbability => [9.0, 7.0, 5.0, 3.0, 1.0],
        Dimension::BlastRadiusIndex => [8.5, 6.5, 4.5, 2.5, 1.0],
        Dimension::RecoveryRealityGap => [8.0, 6.0, 4.0, 2.0, 1.0],
    };
    table[usize::from(raw_code) - 1]
}

/// Metric step function. Returns `None` when the metric kind does not match
/// what the dimension measures, in which case the ordinal lookup applies.
pub fn metric_lookup(dimension: Dimension, metric: DimensionMetric) -> Option<f64> {
    match (dimension, metric) {
        // Hours until a 10% revenue loss; fewer hours is worse.
        (Dimension::TimeToRevenueDegradation, DimensionMetric::Hours(hours)) => Some(match hours {
            h if h <= 2.0 => 1.5,
            h if h <= 4.0 => 3.5,
            h if h <= 8.0 => 5.5,
            h if h <= 24.0 => 7.5,
            _ => 9.5,
        }),
        // Attacker value-extraction ratio; higher ratio is worse.
        (Dimension::AttackEconomicsRatio, DimensionMetric::Ratio(ratio)) => Some(match ratio {
            r if r >= 10.0 => 2.0,
            r if r >= 5.0 => 4.0,
            r if r >= 2.0 => 6.0,
            r if r >= 1.0 => 8.0,
            _ => 10.0,
        }),
        // Human failure percentage; higher percentage is worse.
        (Dimension::HumanFailureProbability, DimensionMetric::Percentage(pct)) => {
            Some(match pct {
                p if p >= 80.0 => 9.0,
                p if p >= 60.0 => 7.0,
                p if p >= 40.0 => 5.0,
                p if p >= 20.0 => 3.0,
                _ => 1.0,
            })
        }
        // Percentage of the organization a single incident reaches.
        (Dimension::BlastRadiusIndex, DimensionMetric::Percentage(pct)) => Some(match pct {
            p if p >= 80.0 => 8.5,
            p if p >= 60.0 => 6.5,
            p if p >= 40.0 => 4.5,
            p if p >= 20.0 => 2.5,
            _ => 1.0,
        }),
        // Actual recovery time as a multiple of the documented objective.
        (Dimension::RecoveryRealityGap, DimensionMetric::Multiplier(mult)) => Some(match mult {
            m if m >= 10.0 => 8.0,
            m if m >= 5.0 => 6.0,
            m if m >= 3.0 => 4.0,
            m if m >= 2.0 => 2.0,
            _ => 1.0,
        }),
        _ => None,
    }
}
