//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::{Side, UnitKind};

/// Identity of a combat unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    /// Monotonic id; also the unit's scan order in combat.
    pub id: u32,
    pub side: Side,
    pub kind: UnitKind,
}

/// Scalar position along the lane.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LanePosition(pub f64);

/// Hit points. `hp` never exceeds `max_hp` and never drops below zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Health {
    pub hp: f64,
    pub max_hp: f64,
}

/// Attack capability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    pub damage: f64,
    pub range: f64,
    /// Seconds between attacks.
    pub attack_interval: f64,
    /// Seconds until the next attack is allowed. Ready at or below zero.
    pub cooldown: f64,
}

/// Movement capability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Mobility {
    /// Lane units per second.
    pub speed: f64,
}

/// Marks a unit that reached zero hp. Cleanup despawns it at the end of the tick.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Dead;
