//! Frame snapshot: the complete visible state handed to observers each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::SimEvent;
use crate::types::SimTime;

/// Read-only view of the simulation after a tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    /// Level currently loaded, if any.
    pub level_id: Option<u32>,
    pub economy: EconomyView,
    pub player_hq: HqView,
    pub enemy_hq: HqView,
    pub upgrades: Vec<UpgradeView>,
    /// Seconds until the next enemy wave.
    pub next_wave_in: f64,
    /// Live units, sorted by id.
    pub units: Vec<UnitView>,
    /// Events raised since the previous snapshot.
    pub events: Vec<SimEvent>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EconomyView {
    pub resources: f64,
    /// Resources per second at the current multiplier.
    pub income_rate: f64,
    pub income_multiplier: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HqView {
    pub hp: f64,
    pub max_hp: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UpgradeView {
    pub kind: UpgradeKind,
    pub level: u32,
    pub max_level: u32,
    /// Price of the next tier; `None` once maxed.
    pub next_cost: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitView {
    pub id: u32,
    pub side: Side,
    pub kind: UnitKind,
    pub position: f64,
    pub hp: f64,
    pub max_hp: f64,
}
