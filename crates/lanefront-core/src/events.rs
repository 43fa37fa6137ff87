//! Events emitted by the simulation for renderer and UI feedback.
//!
//! Events are cosmetic. Nothing in the rules reads them back.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Something observable that happened during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A level finished loading and the run is live.
    LevelStarted { level_id: u32 },
    /// A unit entered the lane.
    UnitSpawned { unit_id: u32, side: Side, kind: UnitKind },
    /// The enemy timer fired and released a wave.
    WaveSpawned { count: u32 },
    /// One unit hit another.
    UnitAttacked {
        attacker_id: u32,
        target_id: u32,
        damage: f64,
        style: AttackStyle,
    },
    /// A unit hit a headquarters.
    HqDamaged { side: Side, attacker_id: u32, damage: f64 },
    /// A unit's hp reached zero this tick.
    UnitKilled { unit_id: u32, side: Side },
    /// A headquarters fell and the run is over.
    RunEnded { outcome: RunOutcome, level_id: u32 },
}
