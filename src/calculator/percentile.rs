//! Peer percentile computation.
//!
//! Uses empirical peer scores when benchmark samples are available and a
//! normal-distribution approximation otherwise. The CDF uses the
//! Abramowitz-Stegun 7.1.26 rational-polynomial erf approximation.

use crate::archetype::PercentileBenchmark;
use crate::config::PercentileBounds;
use crate::core::{Archetype, BenchmarkSample};

/// Standard normal CDF via Abramowitz-Stegun 7.1.26.
pub fn normal_cdf(z: f64) -> f64 {
    const A1: f64 = 0.254829592;
    const A2: f64 = -0.284496736;
    const A3: f64 = 1.421413741;
    const A4: f64 = -1.453152027;
    const A5: f64 = 1.061405429;
    const P: f64 = 0.3275911;

    let sign = if z >= 0.0 { 1.0 } else { -1.0 };
    let z = z.abs() / std::f64::consts::SQRT_2;

    let t = 1.0 / (1.0 + P * z);
    let y = 1.0 - (((((A5 * t + A4) * t) + A3) * t + A2) * t + A1) * t * (-z * z).exp();

    0.5 * (1.0 + sign * y)
}

/// Percentile of `score` among peers of `archetype`.
///
/// Empirical when samples for the archetype exist: the fraction of peer
/// scores strictly below this one. Otherwise approximated against the
/// archetype benchmark distribution. Always clamped to the configured
/// bounds.
pub fn percentile(
    score: u8,
    archetype: Archetype,
    benchmark: &PercentileBenchmark,
    samples: &[BenchmarkSample],
    bounds: PercentileBounds,
) -> u8 {
    let peers: Vec<u8> = samples
        .iter()
        .filter(|s| s.archetype == archetype)
        .map(|s| s.score)
        .collect();

    let raw = if peers.is_empty() {
        approximate(score, benchmark)
    } else {
        let below = peers.iter().filter(|&&peer| peer < score).count();
        (below as f64 / peers.len() as f64) * 100.0
    };

    (raw.round() as i64).clamp(i64::from(bounds.floor), i64::from(bounds.ceiling)) as u8
}

fn approximate(score: u8, benchmark: &PercentileBenchmark) -> f64 {
    let sigma = benchmark.std_dev();
    if sigma <= 0.0 {
        return 50.0;
    }
    let z = (f64::from(score) - benchmark.average) / sigma;
    normal_cdf(z) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PercentileBounds;

    fn benchmark() -> PercentileBenchmark {
        PercentileBenchmark {
            average: 50.0,
            curve: [10.0, 20.0, 35.0, 50.0, 65.0, 80.0, 90.0],
        }
    }

    #[test]
    fn cdf_is_half_at_zero() {
        assert!((normal_cdf(0.0) - 0.5).abs() < 1e-7);
    }

    #[test]
    fn cdf_is_monotone_and_bounded() {
        let mut last = 0.0;
        let mut z = -4.0;
        while z <= 4.0 {
            let value = normal_cdf(z);
            assert!((0.0..=1.0).contains(&value));
            assert!(value >= last);
            last = value;
            z += 0.25;
        }
    }

    #[test]
    fn cdf_matches_known_values() {
        // Phi(1) ~ 0.8413, Phi(-1) ~ 0.1587; the approximation is good to
        // about 1e-7.
        assert!((normal_cdf(1.0) - 0.8413).abs() < 1e-3);
        assert!((normal_cdf(-1.0) - 0.1587).abs() < 1e-3);
    }

    #[test]
    fn score_at_peer_average_is_median() {
        let p = percentile(
            50,
            Archetype::HybridCommerce,
            &benchmark(),
            &[],
            PercentileBounds::default(),
        );
        assert_eq!(p, 50);
    }

    #[test]
    fn extreme_scores_are_clamped() {
        let bounds = PercentileBounds::default();
        let low = percentile(0, Archetype::HybridCommerce, &benchmark(), &[], bounds);
        let high = percentile(100, Archetype::HybridCommerce, &benchmark(), &[], bounds);
        assert_eq!(low, 1);
        assert_eq!(high, 99);
    }

    #[test]
    fn empirical_percentile_counts_strictly_below() {
        let samples: Vec<BenchmarkSample> = [30u8, 40, 50, 60, 70, 80, 90, 20, 10, 55]
            .iter()
            .map(|&score| BenchmarkSample {
                archetype: Archetype::SupplyChain,
                score,
            })
            .collect();
        // 6 of 10 peers score strictly below 60.
        let p = percentile(
            60,
            Archetype::SupplyChain,
            &benchmark(),
            &samples,
            PercentileBounds::default(),
        );
        assert_eq!(p, 60);
    }

    #[test]
    fn samples_for_other_archetypes_are_ignored() {
        let samples = vec![BenchmarkSample {
            archetype: Archetype::FinancialServices,
            score: 90,
        }];
        // No SupplyChain peers: falls back to the normal approximation.
        let p = percentile(
            50,
            Archetype::SupplyChain,
            &benchmark(),
            &samples,
            PercentileBounds::default(),
        );
        assert_eq!(p, 50);
    }
}
