//! Static business-model archetype profiles.
//!
//! Eight archetypes, each with a baseline raw-index range used for
//! normalization, a peer benchmark table used for percentile approximation,
//! a per-dimension structural adjustment table, and descriptive loss/attack
//! reference data. Loaded once at process start, never mutated.

pub mod profiles;

use crate::core::{Archetype, DimensionDeltas};
use crate::errors::{EngineError, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Raw-index range an archetype's peers realistically span. Used to map the
/// raw multiplicative index onto the canonical 0-100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaselineRange {
    pub min: f64,
    pub max: f64,
    pub average: f64,
}

impl BaselineRange {
    pub fn width(&self) -> f64 {
        self.max - self.min
    }
}

/// Fallback baseline when an archetype has no registered profile. The
/// fallback is always logged; it recovers from data-quality issues without
/// masking them.
pub const DEFAULT_BASELINE: BaselineRange = BaselineRange {
    min: 0.01,
    max: 10.0,
    average: 4.0,
};

/// Peer score distribution for an archetype on the canonical 0-100 scale.
///
/// The curve holds the p5/p10/p25/p50/p75/p90/p95 peer scores observed in
/// assessment data. The normal-CDF percentile approximation uses the
/// average as mean and a quarter of the observed spread as sigma.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PercentileBenchmark {
    pub average: f64,
    pub curve: [f64; 7],
}

impl PercentileBenchmark {
    pub fn low(&self) -> f64 {
        self.curve[0]
    }

    pub fn high(&self) -> f64 {
        self.curve[6]
    }

    /// Top-decile peer score.
    pub fn top_decile(&self) -> f64 {
        self.curve[5]
    }

    /// Sigma for the normal approximation: a quarter of the observed spread.
    pub fn std_dev(&self) -> f64 {
        (self.high() - self.low()) / 4.0
    }
}

/// Which kind of value the archetype loses first in an incident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimaryImpact {
    Operations,
    Competitive,
    Trust,
    Compliance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecoveryDifficulty {
    Low,
    Medium,
    High,
    Terminal,
}

/// Typical loss profile for an archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LossProfile {
    pub primary_impact: PrimaryImpact,
    pub typical_loss_per_hour: &'static str,
    pub recovery_difficulty: RecoveryDifficulty,
    pub worst_case: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttackFrequency {
    Rare,
    Emerging,
    Regional,
    Common,
    VeryCommon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttackImpact {
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttackSophistication {
    Commodity,
    Intermediate,
    Advanced,
    NationState,
}

/// One attack pattern typically seen against an archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AttackPattern {
    pub vector: &'static str,
    pub method: &'static str,
    pub frequency: AttackFrequency,
    pub impact: AttackImpact,
    pub sophistication: AttackSophistication,
}

/// Complete static profile for one archetype.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArchetypeProfile {
    pub archetype: Archetype,
    pub description: &'static str,
    pub baseline: BaselineRange,
    pub benchmark: PercentileBenchmark,
    /// Hours the archetype can typically sustain degraded operation; base
    /// value for the downtime estimate.
    pub resilience_window_hours: f64,
    /// Structural exposure adjustments applied during interpretation.
    pub dimension_adjustments: DimensionDeltas,
    pub loss: LossProfile,
    pub strengths: &'static [&'static str],
    pub fatal_flaws: &'static [&'static str],
    pub typical_attacks: &'static [AttackPattern],
}

/// Lookup table over archetype profiles.
///
/// The builtin registry covers all eight archetypes; a registry constructed
/// from external data may not, which is where the strict accessor's
/// `UnknownArchetype` error comes in.
#[derive(Debug, Clone)]
pub struct ArchetypeRegistry {
    profiles: Vec<ArchetypeProfile>,
}

static BUILTIN: Lazy<ArchetypeRegistry> = Lazy::new(|| ArchetypeRegistry {
    profiles: profiles::builtin_profiles(),
});

impl ArchetypeRegistry {
    /// The builtin registry with all eight archetype profiles.
    pub fn builtin() -> &'static ArchetypeRegistry {
        &BUILTIN
    }

    /// Build a registry from an explicit profile list.
    pub fn new(profiles: Vec<ArchetypeProfile>) -> Self {
        Self { profiles }
    }

    pub fn profile(&self, archetype: Archetype) -> Option<&ArchetypeProfile> {
        self.profiles.iter().find(|p| p.archetype == archetype)
    }

    /// Strict lookup; fails with `UnknownArchetype` when the profile is
    /// missing.
    pub fn require(&self, archetype: Archetype) -> Result<&ArchetypeProfile> {
        self.profile(archetype)
            .ok_or_else(|| EngineError::unknown_archetype(archetype.label()))
    }

    /// Baseline for normalization, with an explicit logged fallback when the
    /// profile is missing.
    pub fn baseline_or_default(&self, archetype: Archetype) -> BaselineRange {
        match self.profile(archetype) {
            Some(profile) => profile.baseline,
            None => {
                log::warn!(
                    "no profile registered for archetype {archetype}; \
                     falling back to default baseline [{}, {}]",
                    DEFAULT_BASELINE.min,
                    DEFAULT_BASELINE.max
                );
                DEFAULT_BASELINE
            }
        }
    }

    /// Structural adjustment deltas, zero when the profile is missing.
    pub fn adjustments(&self, archetype: Archetype) -> DimensionDeltas {
        self.profile(archetype)
            .map_or(DimensionDeltas::ZERO, |p| p.dimension_adjustments)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ArchetypeProfile> {
        self.profiles.iter()
    }
}
