//! Balance tables and level definitions.
//!
//! These are immutable inputs to a run. Defaults reproduce the reference
//! balance in `constants`; JSON files may override any of it.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::{Side, UnitKind, UpgradeKind};

/// Errors raised while ingesting configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("level list is empty")]
    NoLevels,
    #[error("level id {0} is defined more than once")]
    DuplicateLevel(u32),
    #[error("level {id}: {reason}")]
    InvalidLevel { id: u32, reason: String },
    #[error("{kind} upgrade: {reason}")]
    InvalidUpgrade { kind: UpgradeKind, reason: String },
    #[error("{kind} unit: {reason}")]
    InvalidUnit { kind: UnitKind, reason: String },
    #[error("lane start ({start}) must lie before lane end ({end})")]
    InvertedLane { start: f64, end: f64 },
    #[error("{0} must be a finite, non-negative number")]
    Negative(&'static str),
}

/// Base stats for one unit type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitTemplate {
    /// Resource cost for the player. Enemies spawn for free.
    pub cost: f64,
    pub hp: f64,
    pub damage: f64,
    pub range: f64,
    /// Seconds between attacks.
    pub attack_interval: f64,
    /// Lane units per second.
    pub speed: f64,
}

/// Stats ready to be stamped onto a spawned unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitStats {
    pub hp: f64,
    pub max_hp: f64,
    pub damage: f64,
    pub range: f64,
    pub attack_interval: f64,
    pub speed: f64,
}

impl UnitTemplate {
    /// Unmodified stats for a fresh unit of this template.
    pub fn base_stats(&self) -> UnitStats {
        UnitStats {
            hp: self.hp,
            max_hp: self.hp,
            damage: self.damage,
            range: self.range,
            attack_interval: self.attack_interval,
            speed: self.speed,
        }
    }

    fn validate(&self, kind: UnitKind) -> Result<(), ConfigError> {
        let fields = [
            ("cost", self.cost),
            ("hp", self.hp),
            ("damage", self.damage),
            ("range", self.range),
            ("attackInterval", self.attack_interval),
            ("speed", self.speed),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidUnit {
                    kind,
                    reason: format!("{name} must be finite and non-negative, got {value}"),
                });
            }
        }
        if self.hp == 0.0 {
            return Err(ConfigError::InvalidUnit {
                kind,
                reason: "hp must be positive".into(),
            });
        }
        Ok(())
    }
}

/// Unit-type balance table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitBalance {
    pub melee: UnitTemplate,
    pub ranged: UnitTemplate,
}

impl UnitBalance {
    pub fn template(&self, kind: UnitKind) -> &UnitTemplate {
        match kind {
            UnitKind::Melee => &self.melee,
            UnitKind::Ranged => &self.ranged,
        }
    }
}

impl Default for UnitBalance {
    fn default() -> Self {
        Self {
            melee: UnitTemplate {
                cost: MELEE_COST,
                hp: MELEE_HP,
                damage: MELEE_DAMAGE,
                range: MELEE_RANGE,
                attack_interval: MELEE_ATTACK_INTERVAL,
                speed: MELEE_SPEED,
            },
            ranged: UnitTemplate {
                cost: RANGED_COST,
                hp: RANGED_HP,
                damage: RANGED_DAMAGE,
                range: RANGED_RANGE,
                attack_interval: RANGED_ATTACK_INTERVAL,
                speed: RANGED_SPEED,
            },
        }
    }
}

/// Cost and multiplier tables for one upgrade kind, indexed by level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpgradeTrack {
    pub max_level: u32,
    /// `costs[n]` buys the step from level `n` to `n + 1`.
    pub costs: Vec<f64>,
    /// `multipliers[n - 1]` is in effect at level `n`.
    pub multipliers: Vec<f64>,
}

impl UpgradeTrack {
    fn from_tables(costs: &[f64], multipliers: &[f64]) -> Self {
        Self {
            max_level: UPGRADE_MAX_LEVEL,
            costs: costs.to_vec(),
            multipliers: multipliers.to_vec(),
        }
    }

    /// Price of the next tier, or `None` once the track is maxed.
    pub fn cost_at(&self, level: u32) -> Option<f64> {
        if level >= self.max_level {
            return None;
        }
        self.costs.get(level as usize).copied()
    }

    /// Multiplier in effect at `level`. Level 0 is the identity.
    pub fn multiplier_at(&self, level: u32) -> f64 {
        match level {
            0 => 1.0,
            n => self.multipliers.get(n as usize - 1).copied().unwrap_or(1.0),
        }
    }

    fn validate(&self, kind: UpgradeKind) -> Result<(), ConfigError> {
        let needed = self.max_level as usize;
        if self.costs.len() < needed || self.multipliers.len() < needed {
            return Err(ConfigError::InvalidUpgrade {
                kind,
                reason: format!(
                    "max level {} needs {} costs and multipliers, got {} and {}",
                    self.max_level,
                    needed,
                    self.costs.len(),
                    self.multipliers.len()
                ),
            });
        }
        if self.costs.iter().chain(&self.multipliers).any(|v| !v.is_finite() || *v < 0.0) {
            return Err(ConfigError::InvalidUpgrade {
                kind,
                reason: "costs and multipliers must be finite and non-negative".into(),
            });
        }
        Ok(())
    }
}

/// Upgrade balance table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpgradeBalance {
    pub damage: UpgradeTrack,
    pub hp: UpgradeTrack,
    pub income: UpgradeTrack,
}

impl UpgradeBalance {
    pub fn track(&self, kind: UpgradeKind) -> &UpgradeTrack {
        match kind {
            UpgradeKind::Damage => &self.damage,
            UpgradeKind::Hp => &self.hp,
            UpgradeKind::Income => &self.income,
        }
    }
}

impl Default for UpgradeBalance {
    fn default() -> Self {
        Self {
            damage: UpgradeTrack::from_tables(&DAMAGE_UPGRADE_COSTS, &DAMAGE_UPGRADE_MULTIPLIERS),
            hp: UpgradeTrack::from_tables(&HP_UPGRADE_COSTS, &HP_UPGRADE_MULTIPLIERS),
            income: UpgradeTrack::from_tables(&INCOME_UPGRADE_COSTS, &INCOME_UPGRADE_MULTIPLIERS),
        }
    }
}

/// Starting values for a run, before level scaling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseValues {
    pub starting_resources: f64,
    pub income_per_second: f64,
    #[serde(rename = "playerHQHp")]
    pub player_hq_hp: f64,
    #[serde(rename = "enemyHQHp")]
    pub enemy_hq_hp: f64,
}

impl Default for BaseValues {
    fn default() -> Self {
        Self {
            starting_resources: STARTING_RESOURCES,
            income_per_second: INCOME_PER_SECOND,
            player_hq_hp: PLAYER_HQ_HP,
            enemy_hq_hp: ENEMY_HQ_HP,
        }
    }
}

/// Lane geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaneConfig {
    pub start_x: f64,
    pub end_x: f64,
    pub structure_damage_range: f64,
    pub hq_offset: f64,
    pub wave_spacing: f64,
}

impl LaneConfig {
    /// Lane coordinate where units of `side` enter.
    pub fn spawn_x(&self, side: Side) -> f64 {
        match side {
            Side::Player => self.start_x,
            Side::Enemy => self.end_x,
        }
    }

    /// Lane coordinate of the headquarters belonging to `side`.
    pub fn hq_x(&self, side: Side) -> f64 {
        match side {
            Side::Player => self.start_x - self.hq_offset,
            Side::Enemy => self.end_x + self.hq_offset,
        }
    }
}

impl Default for LaneConfig {
    fn default() -> Self {
        Self {
            start_x: LANE_START_X,
            end_x: LANE_END_X,
            structure_damage_range: STRUCTURE_DAMAGE_RANGE,
            hq_offset: HQ_OFFSET,
            wave_spacing: WAVE_SPACING,
        }
    }
}

/// Everything static about the rules, shared by all levels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Balance {
    pub units: UnitBalance,
    pub upgrades: UpgradeBalance,
    pub base: BaseValues,
    pub lane: LaneConfig,
    /// Ceiling applied to every frame delta.
    pub max_frame_dt: f64,
}

impl Default for Balance {
    fn default() -> Self {
        Self {
            units: UnitBalance::default(),
            upgrades: UpgradeBalance::default(),
            base: BaseValues::default(),
            lane: LaneConfig::default(),
            max_frame_dt: MAX_FRAME_DT,
        }
    }
}

impl Balance {
    /// Parse a balance table from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let balance: Balance = serde_json::from_str(json)?;
        balance.validate()?;
        Ok(balance)
    }

    /// Reject tables the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for kind in UnitKind::ALL {
            self.units.template(kind).validate(kind)?;
        }
        for kind in UpgradeKind::ALL {
            self.upgrades.track(kind).validate(kind)?;
        }

        let base = [
            ("startingResources", self.base.starting_resources),
            ("incomePerSecond", self.base.income_per_second),
            ("playerHQHp", self.base.player_hq_hp),
            ("enemyHQHp", self.base.enemy_hq_hp),
            ("structureDamageRange", self.lane.structure_damage_range),
            ("hqOffset", self.lane.hq_offset),
            ("waveSpacing", self.lane.wave_spacing),
            ("maxFrameDt", self.max_frame_dt),
        ];
        for (name, value) in base {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Negative(name));
            }
        }

        if !self.lane.start_x.is_finite()
            || !self.lane.end_x.is_finite()
            || self.lane.start_x >= self.lane.end_x
        {
            return Err(ConfigError::InvertedLane {
                start: self.lane.start_x,
                end: self.lane.end_x,
            });
        }
        Ok(())
    }
}

/// Per-level difficulty record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelConfig {
    pub id: u32,
    /// Scales both HQs' base hit points.
    pub structure_hp_multiplier: f64,
    /// Scales enemy hp and damage.
    pub enemy_stat_multiplier: f64,
    /// Seconds between enemy waves.
    pub enemy_spawn_interval: f64,
    pub enemy_wave_size: u32,
}

impl LevelConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |reason: &str| ConfigError::InvalidLevel {
            id: self.id,
            reason: reason.to_string(),
        };
        if !self.structure_hp_multiplier.is_finite() || self.structure_hp_multiplier <= 0.0 {
            return Err(invalid("structureHpMultiplier must be positive"));
        }
        if !self.enemy_stat_multiplier.is_finite() || self.enemy_stat_multiplier < 0.0 {
            return Err(invalid("enemyStatMultiplier must be non-negative"));
        }
        if !self.enemy_spawn_interval.is_finite() || self.enemy_spawn_interval <= 0.0 {
            return Err(invalid("enemySpawnInterval must be positive"));
        }
        Ok(())
    }
}

/// Ordered list of levels, as found in a levels file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelSet {
    pub levels: Vec<LevelConfig>,
}

impl LevelSet {
    /// Parse `{ "levels": [...] }` and validate every entry.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let set: LevelSet = serde_json::from_str(json)?;
        set.validate()?;
        Ok(set)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.levels.is_empty() {
            return Err(ConfigError::NoLevels);
        }
        for (i, level) in self.levels.iter().enumerate() {
            if self.levels[..i].iter().any(|l| l.id == level.id) {
                return Err(ConfigError::DuplicateLevel(level.id));
            }
            level.validate()?;
        }
        Ok(())
    }

    pub fn get(&self, id: u32) -> Option<&LevelConfig> {
        self.levels.iter().find(|l| l.id == id)
    }

    /// Id of the level following `id` in list order.
    pub fn next_after(&self, id: u32) -> Option<u32> {
        let idx = self.levels.iter().position(|l| l.id == id)?;
        self.levels.get(idx + 1).map(|l| l.id)
    }

    pub fn first_id(&self) -> Option<u32> {
        self.levels.first().map(|l| l.id)
    }
}

impl Default for LevelSet {
    /// Three-level campaign with escalating enemy pressure.
    fn default() -> Self {
        Self {
            levels: vec![
                LevelConfig {
                    id: 1,
                    structure_hp_multiplier: 1.0,
                    enemy_stat_multiplier: 1.0,
                    enemy_spawn_interval: 8.0,
                    enemy_wave_size: 2,
                },
                LevelConfig {
                    id: 2,
                    structure_hp_multiplier: 1.25,
                    enemy_stat_multiplier: 1.2,
                    enemy_spawn_interval: 7.0,
                    enemy_wave_size: 3,
                },
                LevelConfig {
                    id: 3,
                    structure_hp_multiplier: 1.5,
                    enemy_stat_multiplier: 1.45,
                    enemy_spawn_interval: 6.0,
                    enemy_wave_size: 4,
                },
            ],
        }
    }
}
