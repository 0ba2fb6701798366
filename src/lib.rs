//! Immunemap scores an organization's cyber resilience as a Digital
//! Immunity Index.
//!
//! Five questionnaire answers become normalized dimension scores, the
//! scores combine into a 0-100 index benchmarked against the organization's
//! business archetype, and the scenario engine projects how concrete
//! improvement actions would move that index.

pub mod archetype;
pub mod calculator;
pub mod config;
pub mod core;
pub mod errors;
pub mod interpreter;
pub mod scenario;

pub use archetype::{ArchetypeProfile, ArchetypeRegistry, BaselineRange};
pub use calculator::IndexCalculator;
pub use config::EngineConfig;
pub use core::{
    Archetype, CompanyContext, Dimension, DimensionResponse, DimensionScores, IndexScore,
    MaturityStage,
};
pub use errors::{EngineError, Result};
pub use interpreter::{Answer, DimensionInterpreter};
pub use scenario::{
    ActionCatalog, ImprovementAction, ScenarioAnalysis, ScenarioEngine, TargetRoadmap,
};
