//! Core types shared across the scoring and scenario engine.

use serde::{Deserialize, Serialize};

/// The five measured risk dimensions of the Digital Immunity Index.
///
/// Stored scores keep the polarity of the source calibration tables:
/// numerator dimensions ([`Dimension::TimeToRevenueDegradation`],
/// [`Dimension::AttackEconomicsRatio`]) read "higher is better", denominator
/// dimensions read "higher is worse". The multiplicative index formula
/// depends on this convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Dimension {
    /// Hours of degraded operation before revenue loss becomes material.
    TimeToRevenueDegradation,
    /// How favorable the attacker's cost/benefit ratio is against this org.
    AttackEconomicsRatio,
    /// Probability that a human action opens the door to compromise.
    HumanFailureProbability,
    /// How far a single incident propagates through the organization.
    BlastRadiusIndex,
    /// Gap between documented recovery capability and operational reality.
    RecoveryRealityGap,
}

/// Whether a larger stored score means a stronger or weaker posture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Polarity {
    HigherIsBetter,
    HigherIsWorse,
}

impl Dimension {
    pub const ALL: [Dimension; 5] = [
        Dimension::TimeToRevenueDegradation,
        Dimension::AttackEconomicsRatio,
        Dimension::HumanFailureProbability,
        Dimension::BlastRadiusIndex,
        Dimension::RecoveryRealityGap,
    ];

    /// Short code used in action ids and reasoning text.
    pub fn code(&self) -> &'static str {
        match self {
            Dimension::TimeToRevenueDegradation => "TRD",
            Dimension::AttackEconomicsRatio => "AER",
            Dimension::HumanFailureProbability => "HFP",
            Dimension::BlastRadiusIndex => "BRI",
            Dimension::RecoveryRealityGap => "RRG",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Dimension::TimeToRevenueDegradation => "Time to Revenue Degradation",
            Dimension::AttackEconomicsRatio => "Attack Economics Ratio",
            Dimension::HumanFailureProbability => "Human Failure Probability",
            Dimension::BlastRadiusIndex => "Blast Radius Index",
            Dimension::RecoveryRealityGap => "Recovery Reality Gap",
        }
    }

    pub fn polarity(&self) -> Polarity {
        match self {
            Dimension::TimeToRevenueDegradation | Dimension::AttackEconomicsRatio => {
                Polarity::HigherIsBetter
            }
            Dimension::HumanFailureProbability
            | Dimension::BlastRadiusIndex
            | Dimension::RecoveryRealityGap => Polarity::HigherIsWorse,
        }
    }

    /// Numerator dimensions multiply into the index; the rest divide it.
    pub fn is_numerator(&self) -> bool {
        matches!(self.polarity(), Polarity::HigherIsBetter)
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// The eight business-model archetypes used to contextualize raw scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Archetype {
    HybridCommerce,
    CriticalSoftware,
    DataServices,
    DigitalEcosystem,
    FinancialServices,
    LegacyInfrastructure,
    SupplyChain,
    RegulatedInformation,
}

impl Archetype {
    pub const ALL: [Archetype; 8] = [
        Archetype::HybridCommerce,
        Archetype::CriticalSoftware,
        Archetype::DataServices,
        Archetype::DigitalEcosystem,
        Archetype::FinancialServices,
        Archetype::LegacyInfrastructure,
        Archetype::SupplyChain,
        Archetype::RegulatedInformation,
    ];

    /// Stable numeric id, used as the archetype segment of action ids.
    pub fn id(&self) -> u8 {
        match self {
            Archetype::HybridCommerce => 1,
            Archetype::CriticalSoftware => 2,
            Archetype::DataServices => 3,
            Archetype::DigitalEcosystem => 4,
            Archetype::FinancialServices => 5,
            Archetype::LegacyInfrastructure => 6,
            Archetype::SupplyChain => 7,
            Archetype::RegulatedInformation => 8,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Archetype::HybridCommerce => "Hybrid Commerce",
            Archetype::CriticalSoftware => "Critical Software",
            Archetype::DataServices => "Data Services",
            Archetype::DigitalEcosystem => "Digital Ecosystem",
            Archetype::FinancialServices => "Financial Services",
            Archetype::LegacyInfrastructure => "Legacy Infrastructure",
            Archetype::SupplyChain => "Supply Chain",
            Archetype::RegulatedInformation => "Regulated Information",
        }
    }
}

impl std::fmt::Display for Archetype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Where the company attributes came from. AI-enriched data slightly raises
/// interpretation confidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompanyDataSource {
    #[default]
    Manual,
    AiEnriched,
}

/// Company attributes supplied per calculation. Only used to pick a size
/// bracket, decide critical-infrastructure penalties, and grade confidence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyContext {
    pub employees: Option<u64>,
    /// Annual revenue in currency units.
    pub revenue: Option<f64>,
    pub industry: Option<String>,
    #[serde(default)]
    pub data_source: CompanyDataSource,
    #[serde(default)]
    pub critical_infra: bool,
}

/// Size bracket derived from employee count and revenue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeBracket {
    Small,
    Medium,
    Large,
}

impl SizeBracket {
    pub fn label(&self) -> &'static str {
        match self {
            SizeBracket::Small => "small",
            SizeBracket::Medium => "medium",
            SizeBracket::Large => "large",
        }
    }
}

impl CompanyContext {
    const DEFAULT_EMPLOYEES: u64 = 100;
    const DEFAULT_REVENUE: f64 = 10_000_000.0;

    /// Bracket by headcount and revenue. Unknown attributes fall back to a
    /// mid-market default so a sparse context still brackets deterministically.
    pub fn size_bracket(&self) -> SizeBracket {
        let employees = self.employees.unwrap_or(Self::DEFAULT_EMPLOYEES);
        let revenue = self.revenue.unwrap_or(Self::DEFAULT_REVENUE);

        if employees < 100 || revenue < 10_000_000.0 {
            SizeBracket::Small
        } else if employees < 1_000 || revenue < 100_000_000.0 {
            SizeBracket::Medium
        } else {
            SizeBracket::Large
        }
    }
}

/// A domain metric attached to an answer, used instead of the generic 1-5
/// lookup when present. Each dimension expects a specific kind; a mismatched
/// kind is ignored and the ordinal lookup applies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DimensionMetric {
    /// Hours until revenue impact becomes material.
    Hours(f64),
    /// A percentage in [0, 100] (failure rate, blast coverage).
    Percentage(f64),
    /// Attacker value-extraction ratio.
    Ratio(f64),
    /// Recovery time multiplier over documented objectives.
    Multiplier(f64),
}

/// Immutable record of one answered dimension. Superseded by a new response
/// if the user re-answers, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionResponse {
    pub dimension: Dimension,
    /// Raw ordinal answer, 1-5.
    pub raw_code: u8,
    pub metric: Option<DimensionMetric>,
    /// Normalized dimension score, 1-10 after rounding and clamping.
    pub score: u8,
    /// Advisory confidence in [0, 1]; never affects the score.
    pub confidence: f64,
    pub reasoning: String,
}

/// Additive per-dimension deltas used by the adjustment layers.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DimensionDeltas {
    pub trd: f64,
    pub aer: f64,
    pub hfp: f64,
    pub bri: f64,
    pub rrg: f64,
}

impl DimensionDeltas {
    pub const ZERO: DimensionDeltas = DimensionDeltas {
        trd: 0.0,
        aer: 0.0,
        hfp: 0.0,
        bri: 0.0,
        rrg: 0.0,
    };

    pub fn get(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::TimeToRevenueDegradation => self.trd,
            Dimension::AttackEconomicsRatio => self.aer,
            Dimension::HumanFailureProbability => self.hfp,
            Dimension::BlastRadiusIndex => self.bri,
            Dimension::RecoveryRealityGap => self.rrg,
        }
    }
}

/// The five normalized dimension scores feeding the index formula.
///
/// Values are kept as floats so scenario projections can apply fractional
/// improvements before clamping; interpreted responses always store whole
/// numbers in [1, 10].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionScores {
    pub trd: f64,
    pub aer: f64,
    pub hfp: f64,
    pub bri: f64,
    pub rrg: f64,
}

impl DimensionScores {
    pub fn new(trd: f64, aer: f64, hfp: f64, bri: f64, rrg: f64) -> Self {
        Self {
            trd,
            aer,
            hfp,
            bri,
            rrg,
        }
    }

    pub fn get(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::TimeToRevenueDegradation => self.trd,
            Dimension::AttackEconomicsRatio => self.aer,
            Dimension::HumanFailureProbability => self.hfp,
            Dimension::BlastRadiusIndex => self.bri,
            Dimension::RecoveryRealityGap => self.rrg,
        }
    }

    pub fn set(&mut self, dimension: Dimension, value: f64) {
        match dimension {
            Dimension::TimeToRevenueDegradation => self.trd = value,
            Dimension::AttackEconomicsRatio => self.aer = value,
            Dimension::HumanFailureProbability => self.hfp = value,
            Dimension::BlastRadiusIndex => self.bri = value,
            Dimension::RecoveryRealityGap => self.rrg = value,
        }
    }

    /// Collect scores from a full interpretation map. Missing dimensions
    /// default to the scale midpoint so the formula stays total.
    pub fn from_responses(responses: &im::HashMap<Dimension, DimensionResponse>) -> Self {
        let score = |d: Dimension| responses.get(&d).map_or(5.0, |r| f64::from(r.score));
        Self {
            trd: score(Dimension::TimeToRevenueDegradation),
            aer: score(Dimension::AttackEconomicsRatio),
            hfp: score(Dimension::HumanFailureProbability),
            bri: score(Dimension::BlastRadiusIndex),
            rrg: score(Dimension::RecoveryRealityGap),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Dimension, f64)> + '_ {
        Dimension::ALL.iter().map(move |d| (*d, self.get(*d)))
    }
}

/// Raw multiplicative index before archetype normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawIndex {
    pub value: f64,
    /// The instantiated formula, for audit trails.
    pub formula: String,
    pub dimensions: DimensionScores,
}

/// Four ordered resilience tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MaturityStage {
    Fragile,
    Robust,
    Resilient,
    Adaptive,
}

impl MaturityStage {
    /// Stage from a normalized 0-100 score. Boundaries are inclusive on the
    /// lower stage: 25 is still Fragile, 26 is Robust.
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=25 => MaturityStage::Fragile,
            26..=50 => MaturityStage::Robust,
            51..=75 => MaturityStage::Resilient,
            _ => MaturityStage::Adaptive,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MaturityStage::Fragile => "Fragile",
            MaturityStage::Robust => "Robust",
            MaturityStage::Resilient => "Resilient",
            MaturityStage::Adaptive => "Adaptive",
        }
    }
}

impl std::fmt::Display for MaturityStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Operational-risk bucket derived from the normalized score alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperationalRisk {
    Critical,
    High,
    Medium,
    Low,
}

impl OperationalRisk {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=30 => OperationalRisk::Critical,
            31..=50 => OperationalRisk::High,
            51..=70 => OperationalRisk::Medium,
            _ => OperationalRisk::Low,
        }
    }
}

/// Peer benchmark numbers attached to an interpretation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeerBenchmark {
    /// Peer average for the archetype, 0-100.
    pub average: u8,
    /// Top-decile peer score for the archetype, 0-100.
    pub top_decile: u8,
    pub your_score: u8,
}

/// Structured interpretation of a normalized index score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interpretation {
    pub stage: MaturityStage,
    pub operational_risk: OperationalRisk,
    pub estimated_downtime_hours: u32,
    /// Percentage of annual revenue exposed to a serious incident.
    pub revenue_at_risk_pct: u8,
    pub headline: String,
    pub strengths: im::Vector<String>,
    pub vulnerabilities: im::Vector<String>,
    /// Percentile against peers, 1-99.
    pub better_than_pct: u8,
    pub peer_benchmark: PeerBenchmark,
}

/// Complete index score: raw value, canonical 0-100 normalization,
/// percentile, and interpretation. Pure function of its inputs, computed
/// fresh on every request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexScore {
    pub raw: RawIndex,
    /// Canonical normalized score, 0-100.
    pub normalized: u8,
    pub archetype: Archetype,
    /// Percentile against peers, 1-99.
    pub percentile: u8,
    pub interpretation: Interpretation,
}

/// One peer score used for empirical percentile computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkSample {
    pub archetype: Archetype,
    pub score: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimension_codes_are_stable() {
        let codes: Vec<&str> = Dimension::ALL.iter().map(|d| d.code()).collect();
        assert_eq!(codes, vec!["TRD", "AER", "HFP", "BRI", "RRG"]);
    }

    #[test]
    fn numerator_dimensions_have_better_polarity() {
        assert!(Dimension::TimeToRevenueDegradation.is_numerator());
        assert!(Dimension::AttackEconomicsRatio.is_numerator());
        assert!(!Dimension::HumanFailureProbability.is_numerator());
        assert!(!Dimension::BlastRadiusIndex.is_numerator());
        assert!(!Dimension::RecoveryRealityGap.is_numerator());
    }

    #[test]
    fn size_bracket_uses_headcount_and_revenue() {
        let small = CompanyContext {
            employees: Some(40),
            revenue: Some(50_000_000.0),
            ..Default::default()
        };
        assert_eq!(small.size_bracket(), SizeBracket::Small);

        let medium = CompanyContext {
            employees: Some(400),
            revenue: Some(50_000_000.0),
            ..Default::default()
        };
        assert_eq!(medium.size_bracket(), SizeBracket::Medium);

        let large = CompanyContext {
            employees: Some(5_000),
            revenue: Some(900_000_000.0),
            ..Default::default()
        };
        assert_eq!(large.size_bracket(), SizeBracket::Large);
    }

    #[test]
    fn size_bracket_defaults_to_mid_market_inputs() {
        // Unknown headcount and revenue resolve to 100 employees / $10M,
        // which lands in the medium bracket.
        assert_eq!(CompanyContext::default().size_bracket(), SizeBracket::Medium);
    }

    #[test]
    fn maturity_stage_boundaries_are_lower_inclusive() {
        assert_eq!(MaturityStage::from_score(25), MaturityStage::Fragile);
        assert_eq!(MaturityStage::from_score(26), MaturityStage::Robust);
        assert_eq!(MaturityStage::from_score(50), MaturityStage::Robust);
        assert_eq!(MaturityStage::from_score(51), MaturityStage::Resilient);
        assert_eq!(MaturityStage::from_score(75), MaturityStage::Resilient);
        assert_eq!(MaturityStage::from_score(76), MaturityStage::Adaptive);
    }

    #[test]
    fn operational_risk_buckets() {
        assert_eq!(OperationalRisk::from_score(30), OperationalRisk::Critical);
        assert_eq!(OperationalRisk::from_score(31), OperationalRisk::High);
        assert_eq!(OperationalRisk::from_score(70), OperationalRisk::Medium);
        assert_eq!(OperationalRisk::from_score(71), OperationalRisk::Low);
    }
}
