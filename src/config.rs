//! Engine configuration.
//!
//! One explicit configuration object constructed at startup and passed by
//! reference into the engine's entry points. There is no global mutable
//! state; callers that want file-based configuration load a TOML file once
//! and hand the result to the constructors.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Weights for the advisory confidence attached to each interpretation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceWeights {
    /// Starting confidence before any company data is considered.
    #[serde(default = "default_confidence_base")]
    pub base: f64,

    /// Added when the employee count is known.
    #[serde(default = "default_confidence_employees")]
    pub employees: f64,

    /// Added when annual revenue is known.
    #[serde(default = "default_confidence_revenue")]
    pub revenue: f64,

    /// Added when the industry is known.
    #[serde(default = "default_confidence_industry")]
    pub industry: f64,

    /// Added when company data came from AI enrichment.
    #[serde(default = "default_confidence_ai")]
    pub ai_sourced: f64,
}

fn default_confidence_base() -> f64 {
    0.7
}
fn default_confidence_employees() -> f64 {
    0.1
}
fn default_confidence_revenue() -> f64 {
    0.1
}
fn default_confidence_industry() -> f64 {
    0.05
}
fn default_confidence_ai() -> f64 {
    0.05
}

impl Default for ConfidenceWeights {
    fn default() -> Self {
        Self {
            base: default_confidence_base(),
            employees: default_confidence_employees(),
            revenue: default_confidence_revenue(),
            industry: default_confidence_industry(),
            ai_sourced: default_confidence_ai(),
        }
    }
}

/// Knobs for the scenario engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// Minimum score improvement for an action to be offered at all.
    #[serde(default = "default_materiality_threshold")]
    pub materiality_threshold: f64,

    /// Sentinel payback period reported when net savings are non-positive.
    #[serde(default = "default_payback_sentinel")]
    pub payback_sentinel_months: f64,

    /// Number of quick wins surfaced by the quick-win query.
    #[serde(default = "default_quick_win_limit")]
    pub quick_win_limit: usize,
}

fn default_materiality_threshold() -> f64 {
    0.5
}
fn default_payback_sentinel() -> f64 {
    999.0
}
fn default_quick_win_limit() -> usize {
    5
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            materiality_threshold: default_materiality_threshold(),
            payback_sentinel_months: default_payback_sentinel(),
            quick_win_limit: default_quick_win_limit(),
        }
    }
}

/// Bounds for reported percentiles. A percentile is never reported as 0 or
/// 100; nobody is literally last or first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PercentileBounds {
    #[serde(default = "default_percentile_floor")]
    pub floor: u8,
    #[serde(default = "default_percentile_ceiling")]
    pub ceiling: u8,
}

fn default_percentile_floor() -> u8 {
    1
}
fn default_percentile_ceiling() -> u8 {
    99
}

impl Default for PercentileBounds {
    fn default() -> Self {
        Self {
            floor: default_percentile_floor(),
            ceiling: default_percentile_ceiling(),
        }
    }
}

/// Complete engine configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub confidence: ConfidenceWeights,

    #[serde(default)]
    pub scenario: ScenarioConfig,

    #[serde(default)]
    pub percentile: PercentileBounds,
}

impl EngineConfig {
    /// Load configuration from a TOML file. Missing keys take defaults.
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: EngineConfig = toml::from_str(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        config
            .validate()
            .map_err(|e| anyhow::anyhow!("invalid config {}: {e}", path.display()))?;
        Ok(config)
    }

    /// Validate value ranges. Collected as a single message so callers can
    /// report every problem at once.
    pub fn validate(&self) -> std::result::Result<(), String> {
        let mut problems = Vec::new();

        let weights = [
            ("confidence.base", self.confidence.base),
            ("confidence.employees", self.confidence.employees),
            ("confidence.revenue", self.confidence.revenue),
            ("confidence.industry", self.confidence.industry),
            ("confidence.ai_sourced", self.confidence.ai_sourced),
        ];
        for (name, value) in weights {
            if !(0.0..=1.0).contains(&value) {
                problems.push(format!("{name} must be between 0.0 and 1.0, got {value}"));
            }
        }

        if self.scenario.materiality_threshold < 0.0 {
            problems.push(format!(
                "scenario.materiality_threshold must be non-negative, got {}",
                self.scenario.materiality_threshold
            ));
        }
        if self.scenario.payback_sentinel_months <= 0.0 {
            problems.push(format!(
                "scenario.payback_sentinel_months must be positive, got {}",
                self.scenario.payback_sentinel_months
            ));
        }

        if self.percentile.floor >= self.percentile.ceiling {
            problems.push(format!(
                "percentile.floor ({}) must be below percentile.ceiling ({})",
                self.percentile.floor, self.percentile.ceiling
            ));
        }
        if self.percentile.ceiling > 100 {
            problems.push(format!(
                "percentile.ceiling must be at most 100, got {}",
                self.percentile.ceiling
            ));
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(problems.join("; "))
        }
    }
}
