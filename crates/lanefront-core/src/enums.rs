//! Enumeration types used throughout the simulation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which force a unit or headquarters belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Player,
    Enemy,
}

impl Side {
    /// The side this one fights against.
    pub fn opponent(self) -> Self {
        match self {
            Side::Player => Side::Enemy,
            Side::Enemy => Side::Player,
        }
    }

    /// Direction of travel along the lane (+1 toward the enemy base, -1 toward ours).
    pub fn heading(self) -> f64 {
        match self {
            Side::Player => 1.0,
            Side::Enemy => -1.0,
        }
    }
}

/// Unit archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitKind {
    /// Short range, sturdy, fast attack cycle.
    Melee,
    /// Long range, fragile, slow attack cycle.
    Ranged,
}

impl UnitKind {
    pub const ALL: [UnitKind; 2] = [UnitKind::Melee, UnitKind::Ranged];

    /// Wave composition: even slots are melee, odd slots are ranged.
    pub fn for_wave_slot(index: u32) -> Self {
        if index % 2 == 0 {
            UnitKind::Melee
        } else {
            UnitKind::Ranged
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UnitKind::Melee => "melee",
            UnitKind::Ranged => "ranged",
        }
    }
}

impl FromStr for UnitKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "melee" => Ok(UnitKind::Melee),
            "ranged" => Ok(UnitKind::Ranged),
            _ => Err(UnknownKind(s.to_string())),
        }
    }
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Permanent upgrade track purchasable with resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpgradeKind {
    /// Multiplies the damage of newly spawned player units.
    Damage,
    /// Multiplies the hit points of newly spawned player units.
    Hp,
    /// Replaces the economy's income multiplier.
    Income,
}

impl UpgradeKind {
    pub const ALL: [UpgradeKind; 3] = [UpgradeKind::Damage, UpgradeKind::Hp, UpgradeKind::Income];

    pub fn as_str(&self) -> &'static str {
        match self {
            UpgradeKind::Damage => "damage",
            UpgradeKind::Hp => "hp",
            UpgradeKind::Income => "income",
        }
    }
}

impl FromStr for UpgradeKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "damage" => Ok(UpgradeKind::Damage),
            "hp" => Ok(UpgradeKind::Hp),
            "income" => Ok(UpgradeKind::Income),
            _ => Err(UnknownKind(s.to_string())),
        }
    }
}

impl fmt::Display for UpgradeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A unit or upgrade name that matched no known kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown kind: {0}")]
pub struct UnknownKind(pub String);

/// How an attack looks to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttackStyle {
    /// Close-quarters hit, no projectile.
    Strike,
    /// Projectile travelling from attacker to target.
    Shot,
}

/// Final result of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunOutcome {
    Victory,
    Defeat,
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "outcome")]
pub enum GamePhase {
    /// No level is loaded yet, or one is being rebuilt.
    #[default]
    Loading,
    Running,
    Ended(RunOutcome),
}

impl GamePhase {
    pub fn is_running(&self) -> bool {
        matches!(self, GamePhase::Running)
    }
}
