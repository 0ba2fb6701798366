//! Builtin archetype profile data.
//!
//! Baseline ranges and benchmark curves are calibrated from assessment data;
//! the adjustment deltas encode each archetype's structural exposure per
//! dimension (negative = penalty). Benchmark curves are peer scores at
//! p5/p10/p25/p50/p75/p90/p95 on the 0-100 scale.

use super::{
    ArchetypeProfile, AttackFrequency, AttackImpact, AttackPattern, AttackSophistication,
    BaselineRange, LossProfile, PercentileBenchmark, PrimaryImpact, RecoveryDifficulty,
};
use crate::core::{Archetype, DimensionDeltas};

use AttackFrequency::{Common, Emerging, Rare, Regional, VeryCommon};
use AttackImpact::{Critical, High, Medium};
use AttackSophistication::{Advanced, Commodity, Intermediate, NationState};

pub(super) fn builtin_profiles() -> Vec<ArchetypeProfile> {
    vec![
        ArchetypeProfile {
            archetype: Archetype::HybridCommerce,
            description: "Retailers with physical stores and digital channels that can \
                          operate independently",
            baseline: BaselineRange {
                min: 0.01,
                max: 9.0,
                average: 4.9,
            },
            benchmark: PercentileBenchmark {
                average: 55.0,
                curve: [25.0, 38.0, 45.0, 55.0, 68.0, 75.0, 82.0],
            },
            resilience_window_hours: 48.0,
            dimension_adjustments: DimensionDeltas {
                trd: -0.5, // omnichannel complexity reduces resilience
                aer: 0.0,
                hfp: -0.5, // more touchpoints, more human exposure
                bri: -0.5, // physical + digital widens the blast radius
                rrg: 0.0,
            },
            loss: LossProfile {
                primary_impact: PrimaryImpact::Operations,
                typical_loss_per_hour: "$5-20K",
                recovery_difficulty: RecoveryDifficulty::Low,
                worst_case: "Prolonged inefficiency erodes margins",
            },
            strengths: &[
                "Physical channel provides fallback during digital outages",
                "Can process manual transactions indefinitely",
                "Customer relationships exist offline",
                "Inventory exists physically",
            ],
            fatal_flaws: &[
                "Integration complexity between channels",
                "Legacy POS systems often unpatched",
                "Seasonal peaks strain security",
                "Manual processes are inefficient and error-prone",
            ],
            typical_attacks: &[
                AttackPattern {
                    vector: "POS malware",
                    method: "RAM scraping on payment terminals",
                    frequency: VeryCommon,
                    impact: Medium,
                    sophistication: Commodity,
                },
                AttackPattern {
                    vector: "E-commerce skimming",
                    method: "Magecart attacks on checkout pages",
                    frequency: VeryCommon,
                    impact: Medium,
                    sophistication: Commodity,
                },
            ],
        },
        ArchetypeProfile {
            archetype: Archetype::CriticalSoftware,
            description: "ERPs, CRMs, and business management systems that transform data \
                          into decisions",
            baseline: BaselineRange {
                min: 0.02,
                max: 12.0,
                average: 5.8,
            },
            benchmark: PercentileBenchmark {
                average: 48.0,
                curve: [20.0, 35.0, 40.0, 48.0, 60.0, 70.0, 80.0],
            },
            resilience_window_hours: 6.0,
            dimension_adjustments: DimensionDeltas {
                trd: -1.0, // zero tolerance for downtime
                aer: -0.5, // high concentration of customer data
                hfp: 0.5,  // better automation and controls
                bri: 0.0,
                rrg: 0.0,
            },
            loss: LossProfile {
                primary_impact: PrimaryImpact::Competitive,
                typical_loss_per_hour: "$20-50K",
                recovery_difficulty: RecoveryDifficulty::High,
                worst_case: "A competitor copies the differentiating algorithm or process",
            },
            strengths: &[
                "IP protection through code obfuscation",
                "Regular updates push security patches",
                "Professional development practices",
                "Cloud infrastructure resilience",
            ],
            fatal_flaws: &[
                "Single codebase vulnerability affects all clients",
                "API keys often exposed in client implementations",
                "Update fatigue leads to unpatched instances",
                "Algorithm reverse engineering risk",
            ],
            typical_attacks: &[
                AttackPattern {
                    vector: "Supply chain compromise",
                    method: "Malicious updates or dependencies",
                    frequency: Common,
                    impact: Critical,
                    sophistication: Advanced,
                },
                AttackPattern {
                    vector: "API abuse",
                    method: "Credential stuffing and rate limit bypass",
                    frequency: VeryCommon,
                    impact: High,
                    sophistication: Intermediate,
                },
            ],
        },
        ArchetypeProfile {
            archetype: Archetype::DataServices,
            description: "Analytics, credit scoring, and market intelligence transforming \
                          raw data into insights",
            baseline: BaselineRange {
                min: 0.01,
                max: 8.0,
                average: 3.4,
            },
            benchmark: PercentileBenchmark {
                average: 42.0,
                curve: [18.0, 30.0, 35.0, 42.0, 55.0, 65.0, 78.0],
            },
            resilience_window_hours: 24.0,
            dimension_adjustments: DimensionDeltas {
                trd: 0.0,
                aer: -1.5, // the data is the product: extreme exposure
                hfp: -0.5, // insider threat is catastrophic
                bri: 0.0,
                rrg: -0.5, // a data breach is permanent damage
            },
            loss: LossProfile {
                primary_impact: PrimaryImpact::Competitive,
                typical_loss_per_hour: "$20-50K",
                recovery_difficulty: RecoveryDifficulty::High,
                worst_case: "Data poisoning destroys model credibility",
            },
            strengths: &[
                "Data validation pipelines",
                "Model versioning and rollback",
                "Anomaly detection built-in",
                "Statistical quality controls",
            ],
            fatal_flaws: &[
                "Model training data can be poisoned",
                "Insights can be reverse engineered",
                "Data sources may be compromised",
                "Competitive advantage is replicable",
            ],
            typical_attacks: &[
                AttackPattern {
                    vector: "Data poisoning",
                    method: "Feeding false data to skew models",
                    frequency: Common,
                    impact: High,
                    sophistication: Advanced,
                },
                AttackPattern {
                    vector: "Model extraction",
                    method: "API queries to replicate model behavior",
                    frequency: Emerging,
                    impact: Critical,
                    sophistication: Advanced,
                },
            ],
        },
        ArchetypeProfile {
            archetype: Archetype::DigitalEcosystem,
            description: "Marketplaces and platforms connecting buyers, sellers, and \
                          service providers",
            baseline: BaselineRange {
                min: 0.02,
                max: 11.0,
                average: 4.2,
            },
            benchmark: PercentileBenchmark {
                average: 38.0,
                curve: [15.0, 28.0, 32.0, 38.0, 50.0, 62.0, 75.0],
            },
            resilience_window_hours: 12.0,
            dimension_adjustments: DimensionDeltas {
                trd: 0.0,
                aer: -1.0, // the ecosystem is a bigger target
                hfp: -1.0, // third-party users multiply exposure
                bri: -1.5, // platform effects cascade failures
                rrg: 0.0,
            },
            loss: LossProfile {
                primary_impact: PrimaryImpact::Trust,
                typical_loss_per_hour: "$50-100K",
                recovery_difficulty: RecoveryDifficulty::High,
                worst_case: "Viral fraud triggers a mass user exodus",
            },
            strengths: &[
                "Network effects create stickiness",
                "Community self-polices fraud",
                "Multiple revenue streams",
                "Global best practices available",
            ],
            fatal_flaws: &[
                "Trust is fragile and viral",
                "Fraud scales with the platform",
                "User data honeypot",
                "Complex multi-party risks",
            ],
            typical_attacks: &[
                AttackPattern {
                    vector: "Account takeover",
                    method: "Credential stuffing at scale",
                    frequency: VeryCommon,
                    impact: High,
                    sophistication: Commodity,
                },
                AttackPattern {
                    vector: "Fraud rings",
                    method: "Coordinated seller/buyer fraud",
                    frequency: Common,
                    impact: High,
                    sophistication: Intermediate,
                },
            ],
        },
        ArchetypeProfile {
            archetype: Archetype::FinancialServices,
            description: "Banks, insurers, and fund administrators safeguarding financial \
                          assets",
            baseline: BaselineRange {
                min: 0.03,
                max: 15.0,
                average: 5.3,
            },
            benchmark: PercentileBenchmark {
                average: 35.0,
                curve: [12.0, 25.0, 30.0, 35.0, 48.0, 60.0, 72.0],
            },
            resilience_window_hours: 4.0,
            dimension_adjustments: DimensionDeltas {
                trd: -1.5, // real-time operations tolerate no downtime
                aer: -1.0, // financial data is a prime target
                hfp: 0.0,
                bri: 0.0,
                rrg: 0.5, // regulatory requirements force better DR
            },
            loss: LossProfile {
                primary_impact: PrimaryImpact::Compliance,
                typical_loss_per_hour: "$100K+",
                recovery_difficulty: RecoveryDifficulty::Terminal,
                worst_case: "A massive breach costs the banking license",
            },
            strengths: &[
                "Regulatory requirements drive security",
                "Mature fraud detection systems",
                "Insurance and capital reserves",
                "Industry information sharing",
            ],
            fatal_flaws: &[
                "Attractive target for all attackers",
                "Legacy core banking systems",
                "Regulatory penalties are massive",
                "Trust loss is often permanent",
            ],
            typical_attacks: &[
                AttackPattern {
                    vector: "SWIFT/wire fraud",
                    method: "Business email compromise for transfers",
                    frequency: Common,
                    impact: Critical,
                    sophistication: Intermediate,
                },
                AttackPattern {
                    vector: "ATM jackpotting",
                    method: "Malware causing cash dispensing",
                    frequency: Regional,
                    impact: High,
                    sophistication: Advanced,
                },
            ],
        },
        ArchetypeProfile {
            archetype: Archetype::LegacyInfrastructure,
            description: "Utilities, government, and industrial systems with decades-old \
                          foundations",
            baseline: BaselineRange {
                min: 0.01,
                max: 7.0,
                average: 2.0,
            },
            benchmark: PercentileBenchmark {
                average: 28.0,
                curve: [10.0, 20.0, 25.0, 28.0, 40.0, 52.0, 65.0],
            },
            resilience_window_hours: 72.0,
            dimension_adjustments: DimensionDeltas {
                trd: 1.0,  // manual fallbacks provide buffer
                aer: 0.0,
                hfp: -1.0, // legacy access controls are weak
                bri: 0.0,
                rrg: -1.5, // legacy recovery is complex and slow
            },
            loss: LossProfile {
                primary_impact: PrimaryImpact::Operations,
                typical_loss_per_hour: "$5-20K",
                recovery_difficulty: RecoveryDifficulty::Low,
                worst_case: "A blackout lasting weeks",
            },
            strengths: &[
                "Air-gapped critical systems",
                "Manual override capabilities",
                "Experienced operators",
                "Simple, proven technology",
            ],
            fatal_flaws: &[
                "Unpatchable legacy systems",
                "Tribal knowledge dependency",
                "Slow incident response",
                "Limited security expertise",
            ],
            typical_attacks: &[
                AttackPattern {
                    vector: "ICS/SCADA targeting",
                    method: "Exploiting industrial protocols",
                    frequency: Rare,
                    impact: Critical,
                    sophistication: NationState,
                },
                AttackPattern {
                    vector: "Ransomware",
                    method: "Encrypting IT systems",
                    frequency: Common,
                    impact: Medium,
                    sophistication: Commodity,
                },
            ],
        },
        ArchetypeProfile {
            archetype: Archetype::SupplyChain,
            description: "Logistics operators digitally connecting shippers, carriers, and \
                          receivers",
            baseline: BaselineRange {
                min: 0.02,
                max: 10.0,
                average: 4.0,
            },
            benchmark: PercentileBenchmark {
                average: 40.0,
                curve: [18.0, 30.0, 35.0, 40.0, 52.0, 65.0, 78.0],
            },
            resilience_window_hours: 24.0,
            dimension_adjustments: DimensionDeltas {
                trd: 0.0,
                aer: 0.5,  // distributed assets mean less concentration
                hfp: -0.5, // partner access multiplies exposure
                bri: -1.0, // supply chains cascade failures
                rrg: 0.0,
            },
            loss: LossProfile {
                primary_impact: PrimaryImpact::Trust,
                typical_loss_per_hour: "$50-100K",
                recovery_difficulty: RecoveryDifficulty::Medium,
                worst_case: "Massive cargo loss with no traceability",
            },
            strengths: &[
                "Physical verification possible",
                "Multiple tracking systems",
                "Insurance coverage",
                "Partner redundancy",
            ],
            fatal_flaws: &[
                "Complex multi-party systems",
                "Real-time pressure prevents security",
                "IoT devices often vulnerable",
                "Data sharing requirements",
            ],
            typical_attacks: &[
                AttackPattern {
                    vector: "GPS spoofing",
                    method: "Misdirecting shipments",
                    frequency: Emerging,
                    impact: High,
                    sophistication: Intermediate,
                },
                AttackPattern {
                    vector: "Cargo theft",
                    method: "Using system access for physical theft",
                    frequency: Common,
                    impact: High,
                    sophistication: Intermediate,
                },
            ],
        },
        ArchetypeProfile {
            archetype: Archetype::RegulatedInformation,
            description: "Healthcare, education, and organizations handling regulated \
                          personal data",
            baseline: BaselineRange {
                min: 0.02,
                max: 12.0,
                average: 4.5,
            },
            benchmark: PercentileBenchmark {
                average: 37.0,
                curve: [15.0, 28.0, 32.0, 37.0, 50.0, 63.0, 75.0],
            },
            resilience_window_hours: 12.0,
            dimension_adjustments: DimensionDeltas {
                trd: -0.5, // healthcare and government cannot afford downtime
                aer: -1.5, // regulated data is a high-value target
                hfp: -0.5, // compliance theater vs real security
                bri: 0.0,
                rrg: 0.0,
            },
            loss: LossProfile {
                primary_impact: PrimaryImpact::Compliance,
                typical_loss_per_hour: "$100K+",
                recovery_difficulty: RecoveryDifficulty::Terminal,
                worst_case: "Mass leak of medical or personal records",
            },
            strengths: &[
                "Compliance frameworks exist",
                "Data classification mature",
                "Audit trails mandatory",
                "Professional standards",
            ],
            fatal_flaws: &[
                "Data has permanent value",
                "Insider threat prevalent",
                "Complex privacy requirements",
                "Public trust critical",
            ],
            typical_attacks: &[
                AttackPattern {
                    vector: "Medical ransomware",
                    method: "Encrypting patient records",
                    frequency: VeryCommon,
                    impact: Critical,
                    sophistication: Commodity,
                },
                AttackPattern {
                    vector: "Data exfiltration",
                    method: "Stealing PII for identity theft",
                    frequency: Common,
                    impact: Critical,
                    sophistication: Intermediate,
                },
            ],
        },
    ]
}
