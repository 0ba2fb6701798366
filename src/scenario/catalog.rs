//! Improvement action catalog, keyed by (archetype, dimension).
//!
//! Static reference data, read-only at runtime. Each entry projects the
//! score gain, cost, and timeline of one concrete remediation. The builder
//! methods keep the catalog definitions compact and are also handy for
//! constructing custom catalogs in tests.

use crate::core::{Archetype, Dimension};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EffortLevel {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StrategicValue {
    Low,
    Medium,
    High,
    Critical,
}

/// One catalog entry: a concrete improvement with projected score impact
/// and cost/benefit numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImprovementAction {
    pub id: String,
    pub dimension: Dimension,
    pub title: String,
    pub description: String,
    pub business_justification: String,

    /// Points gained on the 0-10 dimension scale.
    pub score_improvement: f64,
    /// Implementation cost in USD.
    pub implementation_cost: f64,
    pub time_to_implement_months: u32,
    pub effort_level: EffortLevel,

    pub risk_reduction_pct: f64,
    /// USD of risk cost avoided per year.
    pub annual_risk_cost: f64,
    /// Annual maintenance cost in USD, if any.
    pub maintenance_cost: Option<f64>,

    pub prerequisites: Vec<String>,
    pub stakeholders: Vec<String>,

    pub quick_win: bool,
    pub strategic_value: StrategicValue,
    pub compliance_impact: Option<String>,
}

impl ImprovementAction {
    pub fn new(
        id: &str,
        dimension: Dimension,
        title: &str,
        description: &str,
        justification: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            dimension,
            title: title.to_string(),
            description: description.to_string(),
            business_justification: justification.to_string(),
            score_improvement: 0.0,
            implementation_cost: 0.0,
            time_to_implement_months: 0,
            effort_level: EffortLevel::Medium,
            risk_reduction_pct: 0.0,
            annual_risk_cost: 0.0,
            maintenance_cost: None,
            prerequisites: Vec::new(),
            stakeholders: Vec::new(),
            quick_win: false,
            strategic_value: StrategicValue::Medium,
            compliance_impact: None,
        }
    }

    pub fn gain(mut self, points: f64) -> Self {
        self.score_improvement = points;
        self
    }

    pub fn cost(mut self, usd: f64) -> Self {
        self.implementation_cost = usd;
        self
    }

    pub fn months(mut self, months: u32) -> Self {
        self.time_to_implement_months = months;
        self
    }

    pub fn effort(mut self, level: EffortLevel) -> Self {
        self.effort_level = level;
        self
    }

    pub fn risk(mut self, reduction_pct: f64, annual_usd: f64) -> Self {
        self.risk_reduction_pct = reduction_pct;
        self.annual_risk_cost = annual_usd;
        self
    }

    pub fn maintenance(mut self, annual_usd: f64) -> Self {
        self.maintenance_cost = Some(annual_usd);
        self
    }

    pub fn prerequisites(mut self, prerequisites: &[&str]) -> Self {
        self.prerequisites = prerequisites.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn stakeholders(mut self, stakeholders: &[&str]) -> Self {
        self.stakeholders = stakeholders.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn quick_win(mut self) -> Self {
        self.quick_win = true;
        self
    }

    pub fn strategic(mut self, value: StrategicValue) -> Self {
        self.strategic_value = value;
        self
    }

    pub fn compliance(mut self, impact: &str) -> Self {
        self.compliance_impact = Some(impact.to_string());
        self
    }

    /// Benefit per dollar spent, used for quick-win ranking.
    pub fn benefit_cost_ratio(&self) -> f64 {
        if self.implementation_cost <= 0.0 {
            return 0.0;
        }
        self.annual_risk_cost / self.implementation_cost
    }

    /// Score points per thousand dollars, used for greedy roadmap
    /// selection.
    pub fn efficiency(&self) -> f64 {
        if self.implementation_cost <= 0.0 {
            return 0.0;
        }
        self.score_improvement / (self.implementation_cost / 1000.0)
    }
}

/// Read-only catalog of improvement actions per archetype.
#[derive(Debug, Clone, Default)]
pub struct ActionCatalog {
    actions: HashMap<Archetype, Vec<ImprovementAction>>,
}

static BUILTIN: Lazy<ActionCatalog> = Lazy::new(builtin_catalog);

impl ActionCatalog {
    /// The builtin catalog covering all eight archetypes.
    pub fn builtin() -> &'static ActionCatalog {
        &BUILTIN
    }

    pub fn new(actions: HashMap<Archetype, Vec<ImprovementAction>>) -> Self {
        Self { actions }
    }

    pub fn actions_for(&self, archetype: Archetype) -> &[ImprovementAction] {
        self.actions.get(&archetype).map_or(&[], Vec::as_slice)
    }

    pub fn find(&self, archetype: Archetype, id: &str) -> Option<&ImprovementAction> {
        self.actions_for(archetype).iter().find(|a| a.id == id)
    }
}

fn builtin_catalog() -> ActionCatalog {
    use Dimension::{
        AttackEconomicsRatio as Aer, BlastRadiusIndex as Bri, HumanFailureProbability as Hfp,
        RecoveryRealityGap as Rrg, TimeToRevenueDegradation as Trd,
    };
    use EffortLevel as E;
    use ImprovementAction as A;
    use StrategicValue as S;

    let mut actions = HashMap::new();

    actions.insert(
        Archetype::HybridCommerce,
        vec![
            A::new(
                "trd-1-1",
                Trd,
                "Implement Real-time Revenue Monitoring",
                "Deploy automated systems to detect revenue impact within 30 minutes of incidents",
                "Reduces time to detect revenue loss from hours to minutes, enabling faster response",
            )
            .gain(2.5)
            .cost(75_000.0)
            .months(3)
            .effort(E::Medium)
            .risk(35.0, 250_000.0)
            .stakeholders(&["IT", "Finance", "Operations"])
            .strategic(S::High),
            A::new(
                "trd-1-2",
                Trd,
                "Automated Failover for Critical Systems",
                "Implement automatic switching to backup systems for revenue-critical applications",
                "Eliminates manual intervention delays during outages, maintaining revenue flow",
            )
            .gain(3.0)
            .cost(120_000.0)
            .months(6)
            .effort(E::High)
            .risk(45.0, 400_000.0)
            .prerequisites(&["System redundancy assessment"])
            .maintenance(15_000.0)
            .stakeholders(&["IT", "Engineering", "Business Units"])
            .strategic(S::Critical),
            A::new(
                "aer-1-1",
                Aer,
                "Advanced Customer Data Protection",
                "Implement zero-trust architecture and advanced encryption for customer data",
                "Protects high-value customer data that attracts sophisticated attackers",
            )
            .gain(2.0)
            .cost(95_000.0)
            .months(4)
            .effort(E::Medium)
            .risk(40.0, 300_000.0)
            .stakeholders(&["IT Security", "Compliance", "Customer Service"])
            .strategic(S::High)
            .compliance("GDPR, PCI-DSS compliance improvement"),
            A::new(
                "hfp-1-1",
                Hfp,
                "Multi-Factor Authentication (MFA)",
                "Deploy MFA across all business-critical systems and customer-facing applications",
                "Prevents most automated attacks and reduces human error impact",
            )
            .gain(2.5)
            .cost(25_000.0)
            .months(2)
            .effort(E::Low)
            .risk(60.0, 180_000.0)
            .maintenance(5_000.0)
            .stakeholders(&["IT", "HR", "All Users"])
            .quick_win()
            .strategic(S::High),
            A::new(
                "hfp-1-2",
                Hfp,
                "Quarterly Security Awareness Training",
                "Implement interactive security training with phishing simulations",
                "Reduces successful phishing attacks and builds security culture",
            )
            .gain(1.8)
            .cost(15_000.0)
            .months(1)
            .effort(E::Low)
            .risk(30.0, 85_000.0)
            .maintenance(12_000.0)
            .stakeholders(&["HR", "IT Security", "All Employees"])
            .quick_win()
            .strategic(S::Medium),
            A::new(
                "bri-1-1",
                Bri,
                "Network Segmentation",
                "Implement micro-segmentation to isolate critical business systems",
                "Limits blast radius of breaches, preventing cascade failures across business units",
            )
            .gain(3.2)
            .cost(85_000.0)
            .months(5)
            .effort(E::High)
            .risk(50.0, 350_000.0)
            .prerequisites(&["Network architecture review"])
            .stakeholders(&["IT", "Network Team", "Business Units"])
            .strategic(S::Critical),
            A::new(
                "rrg-1-1",
                Rrg,
                "Automated Backup and Recovery",
                "Deploy cloud-based automated backup with 1-hour recovery objectives",
                "Reduces recovery time from days to hours, minimizing business disruption",
            )
            .gain(2.8)
            .cost(65_000.0)
            .months(3)
            .effort(E::Medium)
            .risk(45.0, 200_000.0)
            .maintenance(18_000.0)
            .stakeholders(&["IT", "Operations", "Finance"])
            .strategic(S::High),
            A::new(
                "rrg-1-2",
                Rrg,
                "Business Continuity Automation",
                "Implement automated failover processes and recovery orchestration",
                "Eliminates manual recovery steps, reducing human error and recovery time",
            )
            .gain(3.5)
            .cost(110_000.0)
            .months(6)
            .effort(E::High)
            .risk(55.0, 450_000.0)
            .prerequisites(&["Business impact analysis", "Process documentation"])
            .maintenance(22_000.0)
            .stakeholders(&["IT", "Operations", "Business Continuity"])
            .strategic(S::Critical),
        ],
    );

    actions.insert(
        Archetype::CriticalSoftware,
        vec![
            A::new(
                "trd-2-1",
                Trd,
                "Zero-Downtime Deployment Pipeline",
                "Implement blue-green deployments with automated rollback capabilities",
                "Eliminates service interruptions during updates, maintaining critical system availability",
            )
            .gain(3.0)
            .cost(95_000.0)
            .months(4)
            .effort(E::High)
            .risk(60.0, 500_000.0)
            .stakeholders(&["DevOps", "Engineering", "Operations"])
            .strategic(S::Critical),
            A::new(
                "aer-2-1",
                Aer,
                "Advanced Threat Detection for Code",
                "Deploy automated code analysis and runtime threat detection",
                "Protects valuable IP and prevents code theft that could damage competitive advantage",
            )
            .gain(2.8)
            .cost(85_000.0)
            .months(3)
            .effort(E::Medium)
            .risk(50.0, 350_000.0)
            .stakeholders(&["Security", "Engineering", "Product"])
            .strategic(S::Critical),
            A::new(
                "hfp-2-1",
                Hfp,
                "Developer Security Training",
                "Implement secure coding practices and security-first development culture",
                "Prevents security vulnerabilities at source, reducing critical system exposure",
            )
            .gain(2.2)
            .cost(35_000.0)
            .months(2)
            .effort(E::Low)
            .risk(40.0, 180_000.0)
            .maintenance(15_000.0)
            .stakeholders(&["Engineering", "Security", "HR"])
            .quick_win()
            .strategic(S::High),
            A::new(
                "bri-2-1",
                Bri,
                "Microservices Security Architecture",
                "Implement service mesh with granular security controls",
                "Limits impact of compromised services, maintaining system integrity",
            )
            .gain(3.5)
            .cost(125_000.0)
            .months(6)
            .effort(E::High)
            .risk(55.0, 400_000.0)
            .stakeholders(&["Engineering", "Security", "Architecture"])
            .strategic(S::Critical),
            A::new(
                "rrg-2-1",
                Rrg,
                "Disaster Recovery Automation",
                "Implement automated DR with sub-minute recovery time objectives",
                "Ensures critical system availability, meeting SLA commitments to customers",
            )
            .gain(4.0)
            .cost(150_000.0)
            .months(6)
            .effort(E::Critical)
            .risk(70.0, 600_000.0)
            .maintenance(30_000.0)
            .stakeholders(&["Engineering", "Operations", "Customer Success"])
            .strategic(S::Critical),
        ],
    );

    actions.insert(
        Archetype::DataServices,
        vec![
            A::new(
                "trd-3-1",
                Trd,
                "Revenue-Critical Pipeline Monitoring",
                "Instrument data pipelines so delivery degradation is detected within minutes",
                "Insight delivery is the revenue stream; silent pipeline failures burn it directly",
            )
            .gain(2.2)
            .cost(55_000.0)
            .months(3)
            .effort(E::Medium)
            .risk(30.0, 200_000.0)
            .stakeholders(&["Data Engineering", "Operations"])
            .strategic(S::High),
            A::new(
                "aer-3-1",
                Aer,
                "Data Vault Segmentation and Encryption",
                "Partition high-value datasets with separate keys and access paths",
                "The data is the product; concentrated stores are the single most attractive target",
            )
            .gain(2.6)
            .cost(90_000.0)
            .months(5)
            .effort(E::High)
            .risk(45.0, 320_000.0)
            .maintenance(12_000.0)
            .stakeholders(&["Security", "Data Engineering"])
            .strategic(S::Critical),
            A::new(
                "hfp-3-1",
                Hfp,
                "Insider Threat Analytics",
                "Monitor for anomalous access patterns by employees and contractors",
                "A single insider can exfiltrate the entire product; early detection caps the loss",
            )
            .gain(2.0)
            .cost(40_000.0)
            .months(2)
            .effort(E::Low)
            .risk(35.0, 150_000.0)
            .maintenance(8_000.0)
            .stakeholders(&["Security", "HR"])
            .quick_win()
            .strategic(S::High),
            A::new(
                "bri-3-1",
                Bri,
                "Dataset Access Partitioning",
                "Scope every service and analyst to the minimum dataset slice they need",
                "A compromised credential should expose one slice, not the whole corpus",
            )
            .gain(2.4)
            .cost(70_000.0)
            .months(4)
            .effort(E::Medium)
            .risk(40.0, 260_000.0)
            .stakeholders(&["Data Engineering", "Security"])
            .strategic(S::High),
            A::new(
                "rrg-3-1",
                Rrg,
                "Immutable Backup for Training Data",
                "Keep versioned, immutable copies of source and training datasets",
                "Poisoned or encrypted data can be rolled back instead of rebuilt from scratch",
            )
            .gain(2.5)
            .cost(60_000.0)
            .months(3)
            .effort(E::Medium)
            .risk(40.0, 220_000.0)
            .maintenance(10_000.0)
            .stakeholders(&["Data Engineering", "Operations"])
            .strategic(S::High),
        ],
    );

    actions.insert(
        Archetype::DigitalEcosystem,
        vec![
            A::new(
                "trd-4-1",
                Trd,
                "Marketplace Degradation Playbooks",
                "Pre-approved playbooks to keep listings and checkout alive during incidents",
                "Every hour of marketplace downtime sends buyers and sellers to competitors",
            )
            .gain(2.0)
            .cost(45_000.0)
            .months(2)
            .effort(E::Low)
            .risk(30.0, 180_000.0)
            .stakeholders(&["Operations", "Product"])
            .quick_win()
            .strategic(S::High),
            A::new(
                "aer-4-1",
                Aer,
                "Platform-Wide Bot and Abuse Defense",
                "Deploy coordinated bot detection across login, listing, and payment flows",
                "Automated abuse scales with the platform; defense has to scale with it",
            )
            .gain(2.4)
            .cost(80_000.0)
            .months(4)
            .effort(E::Medium)
            .risk(45.0, 300_000.0)
            .maintenance(15_000.0)
            .stakeholders(&["Security", "Trust & Safety"])
            .strategic(S::Critical),
            A::new(
                "hfp-4-1",
                Hfp,
                "Seller Account Hardening Program",
                "Mandatory MFA and session controls for high-volume seller accounts",
                "Taken-over seller accounts are the main vehicle for viral marketplace fraud",
            )
            .gain(2.2)
            .cost(30_000.0)
            .months(2)
            .effort(E::Low)
            .risk(50.0, 200_000.0)
            .maintenance(6_000.0)
            .stakeholders(&["Trust & Safety", "Support"])
            .quick_win()
            .strategic(S::High),
            A::new(
                "bri-4-1",
                Bri,
                "Tenant Isolation Architecture",
                "Isolate merchant data and workloads so one compromised tenant cannot reach others",
                "Platform effects cascade failures; isolation converts a platform incident into a tenant incident",
            )
            .gain(3.0)
            .cost(110_000.0)
            .months(6)
            .effort(E::High)
            .risk(55.0, 380_000.0)
            .prerequisites(&["Platform architecture review"])
            .stakeholders(&["Engineering", "Architecture"])
            .strategic(S::Critical),
            A::new(
                "rrg-4-1",
                Rrg,
                "Cross-Region Platform Failover",
                "Automated failover of core marketplace services across regions",
                "Trust erodes in hours; recovery measured in days is not survivable",
            )
            .gain(2.8)
            .cost(95_000.0)
            .months(5)
            .effort(E::High)
            .risk(45.0, 320_000.0)
            .maintenance(20_000.0)
            .stakeholders(&["Engineering", "Operations"])
            .strategic(S::Critical),
        ],
    );

    actions.insert(
        Archetype::FinancialServices,
        vec![
            A::new(
                "trd-5-1",
                Trd,
                "Active-Active Core Processing",
                "Run core transaction processing active-active across sites",
                "Real-time financial operations tolerate no downtime window at all",
            )
            .gain(3.0)
            .cost(140_000.0)
            .months(6)
            .effort(E::Critical)
            .risk(60.0, 550_000.0)
            .prerequisites(&["Core platform assessment"])
            .maintenance(25_000.0)
            .stakeholders(&["IT", "Operations", "Risk"])
            .strategic(S::Critical),
            A::new(
                "aer-5-1",
                Aer,
                "Transaction Anomaly Detection",
                "Real-time scoring of transfers and payment flows for fraud patterns",
                "Wire fraud losses are immediate and rarely recoverable; detection must precede settlement",
            )
            .gain(2.4)
            .cost(85_000.0)
            .months(3)
            .effort(E::Medium)
            .risk(50.0, 400_000.0)
            .maintenance(18_000.0)
            .stakeholders(&["Fraud", "IT Security"])
            .strategic(S::Critical),
            A::new(
                "hfp-5-1",
                Hfp,
                "Privileged Access Management",
                "Vault, rotate, and record every privileged session on core systems",
                "Most catastrophic financial breaches start with a privileged credential",
            )
            .gain(2.5)
            .cost(45_000.0)
            .months(2)
            .effort(E::Low)
            .risk(55.0, 250_000.0)
            .maintenance(10_000.0)
            .stakeholders(&["IT Security", "Compliance"])
            .quick_win()
            .strategic(S::High),
            A::new(
                "bri-5-1",
                Bri,
                "Payment Network Micro-Segmentation",
                "Isolate payment rails from the corporate network and from each other",
                "A workstation compromise must never reach settlement infrastructure",
            )
            .gain(3.0)
            .cost(100_000.0)
            .months(5)
            .effort(E::High)
            .risk(50.0, 380_000.0)
            .stakeholders(&["IT", "Network Team"])
            .strategic(S::Critical),
            A::new(
                "rrg-5-1",
                Rrg,
                "Regulatory-Grade DR Exercises",
                "Quarterly full-scope recovery exercises with regulator-ready evidence",
                "Mandated DR only counts if it demonstrably works under examination",
            )
            .gain(2.2)
            .cost(35_000.0)
            .months(2)
            .effort(E::Low)
            .risk(35.0, 180_000.0)
            .stakeholders(&["Operations", "Compliance"])
            .quick_win()
            .strategic(S::Medium),
        ],
    );

    actions.insert(
        Archetype::LegacyInfrastructure,
        vec![
            A::new(
                "trd-6-1",
                Trd,
                "Manual Fallback Drill Program",
                "Regularly exercise the manual procedures that keep operations running",
                "Manual fallbacks are the archetype's biggest asset, but only if operators stay practiced",
            )
            .gain(1.8)
            .cost(20_000.0)
            .months(1)
            .effort(E::Low)
            .risk(25.0, 100_000.0)
            .stakeholders(&["Operations"])
            .quick_win()
            .strategic(S::Medium),
            A::new(
                "aer-6-1",
                Aer,
                "OT Asset Inventory and Exposure Review",
                "Build a complete inventory of industrial assets and their network exposure",
                "Unknown assets cannot be defended; most legacy estates have never been fully mapped",
            )
            .gain(2.0)
            .cost(50_000.0)
            .months(3)
            .effort(E::Medium)
            .risk(35.0, 160_000.0)
            .stakeholders(&["OT Engineering", "Security"])
            .strategic(S::High),
            A::new(
                "hfp-6-1",
                Hfp,
                "Operator Access Modernization",
                "Replace shared legacy accounts with individual, audited operator access",
                "Shared credentials make insider incidents both easier and untraceable",
            )
            .gain(2.4)
            .cost(65_000.0)
            .months(4)
            .effort(E::Medium)
            .risk(45.0, 210_000.0)
            .maintenance(8_000.0)
            .stakeholders(&["IT", "OT Engineering"])
            .strategic(S::High),
            A::new(
                "bri-6-1",
                Bri,
                "IT/OT Network Separation",
                "Enforce a hard boundary between enterprise IT and operational networks",
                "Ransomware in the office must never propagate to plant control systems",
            )
            .gain(3.2)
            .cost(120_000.0)
            .months(6)
            .effort(E::High)
            .risk(55.0, 400_000.0)
            .prerequisites(&["Network architecture review"])
            .stakeholders(&["IT", "OT Engineering", "Network Team"])
            .strategic(S::Critical),
            A::new(
                "rrg-6-1",
                Rrg,
                "Tested Restoration Runbooks",
                "Document and rehearse system restoration for every critical asset",
                "Legacy recovery depends on tribal knowledge that retires with the operators",
            )
            .gain(2.6)
            .cost(40_000.0)
            .months(3)
            .effort(E::Low)
            .risk(40.0, 190_000.0)
            .stakeholders(&["Operations", "IT"])
            .quick_win()
            .strategic(S::High),
        ],
    );

    actions.insert(
        Archetype::SupplyChain,
        vec![
            A::new(
                "trd-7-1",
                Trd,
                "Shipment Visibility Redundancy",
                "Run independent tracking feeds so shipment visibility survives a system outage",
                "Blind logistics stop moving; redundant visibility keeps freight and revenue flowing",
            )
            .gain(2.0)
            .cost(50_000.0)
            .months(3)
            .effort(E::Medium)
            .risk(30.0, 200_000.0)
            .stakeholders(&["Operations", "IT"])
            .strategic(S::High),
            A::new(
                "aer-7-1",
                Aer,
                "Partner API Credential Vaulting",
                "Vault and rotate the credentials partners use to reach shared systems",
                "Stolen partner credentials are the cheapest way into a logistics network",
            )
            .gain(2.2)
            .cost(35_000.0)
            .months(2)
            .effort(E::Low)
            .risk(40.0, 170_000.0)
            .maintenance(7_000.0)
            .stakeholders(&["IT Security", "Partner Management"])
            .quick_win()
            .strategic(S::High),
            A::new(
                "hfp-7-1",
                Hfp,
                "Carrier Onboarding Security Checks",
                "Security vetting and access scoping for every new carrier and broker",
                "Each partner onboarded without checks multiplies the human attack surface",
            )
            .gain(2.0)
            .cost(25_000.0)
            .months(2)
            .effort(E::Low)
            .risk(35.0, 140_000.0)
            .stakeholders(&["Partner Management", "Security"])
            .quick_win()
            .strategic(S::Medium),
            A::new(
                "bri-7-1",
                Bri,
                "Partner Network Segmentation",
                "Segment partner integrations so one compromised partner cannot reach the rest",
                "Supply chains cascade; segmentation stops a partner breach at the boundary",
            )
            .gain(3.0)
            .cost(90_000.0)
            .months(5)
            .effort(E::High)
            .risk(50.0, 340_000.0)
            .stakeholders(&["IT", "Network Team"])
            .strategic(S::Critical),
            A::new(
                "rrg-7-1",
                Rrg,
                "Logistics Continuity Orchestration",
                "Automate rerouting and partner failover when a hub or system goes down",
                "Recovery measured in days strands cargo; orchestration brings it to hours",
            )
            .gain(2.6)
            .cost(75_000.0)
            .months(4)
            .effort(E::Medium)
            .risk(45.0, 280_000.0)
            .maintenance(14_000.0)
            .stakeholders(&["Operations", "IT"])
            .strategic(S::High),
        ],
    );

    actions.insert(
        Archetype::RegulatedInformation,
        vec![
            A::new(
                "trd-8-1",
                Trd,
                "Clinical System Downtime Procedures",
                "Paper and offline procedures that keep care delivery running through outages",
                "Patient-facing operations cannot pause while systems recover",
            )
            .gain(2.0)
            .cost(30_000.0)
            .months(2)
            .effort(E::Low)
            .risk(30.0, 160_000.0)
            .stakeholders(&["Operations", "Clinical Staff"])
            .quick_win()
            .strategic(S::High),
            A::new(
                "aer-8-1",
                Aer,
                "Record-Level Encryption and Tokenization",
                "Encrypt regulated records individually and tokenize identifiers",
                "Stolen ciphertext without keys is a non-event to regulators and patients alike",
            )
            .gain(2.6)
            .cost(85_000.0)
            .months(4)
            .effort(E::Medium)
            .risk(50.0, 350_000.0)
            .maintenance(16_000.0)
            .stakeholders(&["Security", "Compliance"])
            .strategic(S::Critical)
            .compliance("HIPAA/GDPR exposure reduction"),
            A::new(
                "hfp-8-1",
                Hfp,
                "Role-Based Access Recertification",
                "Quarterly recertification of who can read which regulated records",
                "Access creep is how insiders and attackers alike reach data they should not",
            )
            .gain(2.2)
            .cost(40_000.0)
            .months(2)
            .effort(E::Low)
            .risk(45.0, 190_000.0)
            .maintenance(9_000.0)
            .stakeholders(&["Compliance", "IT"])
            .quick_win()
            .strategic(S::High),
            A::new(
                "bri-8-1",
                Bri,
                "Departmental Data Segmentation",
                "Segment record stores by department so one breach stays contained",
                "Regulators judge the size of the leak; segmentation caps it structurally",
            )
            .gain(2.8)
            .cost(95_000.0)
            .months(5)
            .effort(E::High)
            .risk(50.0, 330_000.0)
            .stakeholders(&["IT", "Security"])
            .strategic(S::Critical),
            A::new(
                "rrg-8-1",
                Rrg,
                "Ransomware-Resilient Backup Vault",
                "Offline, immutable backups of all regulated records with tested restores",
                "Ransomware against records is the archetype's most common worst case",
            )
            .gain(3.0)
            .cost(110_000.0)
            .months(5)
            .effort(E::High)
            .risk(55.0, 420_000.0)
            .maintenance(22_000.0)
            .stakeholders(&["IT", "Operations"])
            .strategic(S::Critical),
        ],
    );

    ActionCatalog::new(actions)
}
