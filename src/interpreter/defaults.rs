//! Correlation-based defaults for partial assessments.
//!
//! Organizations with a strong time-to-revenue answer tend to score
//! correlated values on the other dimensions; the correlation groups come
//! from the assessment dataset. Archetype deltas then shift the defaults
//! toward each model's structural profile. Everything here operates on the
//! raw 1-5 answer scale, before interpretation.

use crate::core::{Archetype, Dimension};
use std::collections::BTreeMap;

/// Default raw answers for the non-TRD dimensions, grouped by the TRD
/// answer: high performers (4-5), average (3), low performers (1-2).
fn correlation_defaults(trd_code: u8) -> [(Dimension, i8); 4] {
    let (aer, hfp, bri, rrg) = match trd_code {
        4..=5 => (4, 4, 3, 4),
        3 => (3, 3, 3, 3),
        _ => (2, 2, 2, 2),
    };
    [
        (Dimension::AttackEconomicsRatio, aer),
        (Dimension::HumanFailureProbability, hfp),
        (Dimension::BlastRadiusIndex, bri),
        (Dimension::RecoveryRealityGap, rrg),
    ]
}

/// Archetype shift applied to a defaulted raw answer.
fn archetype_default_delta(archetype: Archetype, dimension: Dimension) -> i8 {
    use Dimension::{
        AttackEconomicsRatio as Aer, BlastRadiusIndex as Bri, HumanFailureProbability as Hfp,
        RecoveryRealityGap as Rrg,
    };
    match (archetype, dimension) {
        // Omnichannel: complex blast radius, many touchpoints.
        (Archetype::HybridCommerce, Bri | Hfp) => -1,
        // Security is existential; automation is better than average.
        (Archetype::CriticalSoftware, Aer | Hfp) => 1,
        // Data concentration risk, insider threat critical.
        (Archetype::DataServices, Aer) => -2,
        (Archetype::DataServices, Hfp) => -1,
        // Third-party access and ecosystem amplification.
        (Archetype::DigitalEcosystem, Hfp) => -1,
        (Archetype::DigitalEcosystem, Bri) => -2,
        // Regulatory compliance and mandated DR.
        (Archetype::FinancialServices, Aer | Rrg) => 1,
        // Complex legacy systems, difficult recovery.
        (Archetype::LegacyInfrastructure, Bri) => -1,
        (Archetype::LegacyInfrastructure, Rrg) => -2,
        // Supply chain cascades, but assets are distributed.
        (Archetype::SupplyChain, Bri) => -1,
        (Archetype::SupplyChain, Aer) => 1,
        // High-value target, offset by compliance processes.
        (Archetype::RegulatedInformation, Aer) => -1,
        (Archetype::RegulatedInformation, Hfp) => 1,
        _ => 0,
    }
}

/// Fill unanswered dimensions with correlation defaults so a partial
/// assessment still produces a complete dimension map. The TRD answer (or
/// the scale midpoint if even that is missing) anchors the defaults.
pub fn fill_missing_answers(answers: &mut BTreeMap<Dimension, u8>, archetype: Archetype) {
    let trd_code = answers
        .get(&Dimension::TimeToRevenueDegradation)
        .copied()
        .unwrap_or(3);
    answers
        .entry(Dimension::TimeToRevenueDegradation)
        .or_insert(trd_code);

    for (dimension, default_code) in correlation_defaults(trd_code) {
        answers.entry(dimension).or_insert_with(|| {
            let shifted = default_code + archetype_default_delta(archetype, dimension);
            shifted.clamp(1, 5) as u8
        });
    }
}
