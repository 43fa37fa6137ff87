//! Player commands sent from a frontend to the simulation.
//!
//! Commands are either applied immediately between ticks or queued for
//! processing at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// All possible player actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Buy and deploy a unit at the player's end of the lane.
    SpawnUnit { kind: UnitKind },
    /// Buy the next tier of an upgrade track.
    BuyUpgrade { kind: UpgradeKind },
    /// Tear down the current run and start the given level.
    LoadLevel { id: u32 },
    /// Reload the current level from scratch.
    RestartLevel,
}
