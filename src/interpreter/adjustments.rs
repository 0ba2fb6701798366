//! Size-bracket and critical-infrastructure adjustment layers.
//!
//! Archetype adjustments live in the archetype profiles; these two layers
//! depend only on the company context. All deltas are additive and the
//! final score is clamped after every layer has run.

use crate::core::{Dimension, DimensionDeltas, SizeBracket};

/// Per-dimension deltas by size bracket. Small organizations have fewer
/// resources but less to go wrong; large organizations mirror that.
pub fn size_adjustment(bracket: SizeBracket, dimension: Dimension) -> f64 {
    let deltas = match bracket {
        SizeBracket::Small => DimensionDeltas {
            trd: -0.5, // fewer resources for redundancy
            aer: 0.5,  // less worth extracting
            hfp: -0.5, // fewer hands on critical systems
            bri: 0.5,  // one incident touches everything
            rrg: -0.5, // less estate to rebuild
        },
        SizeBracket::Medium => DimensionDeltas::ZERO,
        SizeBracket::Large => DimensionDeltas {
            trd: 0.5,  // funded redundancy
            aer: -0.5, // richer target
            hfp: 0.5,  // more people, more failure points
            bri: -0.5, // segmented estates contain incidents
            rrg: 0.5,  // sprawling recovery surface
        },
    };
    deltas.get(dimension)
}

/// Critical infrastructure shifts every dimension: a richer, less
/// downtime-tolerant target, but operating under mandated controls.
pub fn critical_infra_penalty(dimension: Dimension) -> f64 {
    const PENALTIES: DimensionDeltas = DimensionDeltas {
        trd: -0.5, // no tolerance for degraded operation
        aer: -1.0, // prime target for capable attackers
        hfp: -0.5, // mandated training and drills
        bri: -1.0, // mandated segmentation
        rrg: -0.5, // regulator-tested recovery
    };
    PENALTIES.get(dimension)
}
