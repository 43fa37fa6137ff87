//! Simulation constants and the reference balance table.

// --- Frame stepping ---

/// Largest frame delta the loop will simulate in one tick (seconds).
/// Longer stalls are truncated rather than integrated.
pub const MAX_FRAME_DT: f64 = 0.05;

// --- Lane geometry ---

/// Lane coordinate where player units enter.
pub const LANE_START_X: f64 = 90.0;

/// Lane coordinate where enemy units enter.
pub const LANE_END_X: f64 = 930.0;

/// Distance of each HQ beyond its end of the lane.
pub const HQ_OFFSET: f64 = 30.0;

/// Minimum reach for hitting a headquarters, regardless of unit range.
pub const STRUCTURE_DAMAGE_RANGE: f64 = 28.0;

/// Lane spacing between consecutive units of one enemy wave.
pub const WAVE_SPACING: f64 = 16.0;

// --- Economy ---

pub const STARTING_RESOURCES: f64 = 100.0;

/// Base resource income per second, before upgrades.
pub const INCOME_PER_SECOND: f64 = 12.0;

// --- Headquarters ---

pub const PLAYER_HQ_HP: f64 = 600.0;
pub const ENEMY_HQ_HP: f64 = 600.0;

// --- Units ---

pub const MELEE_COST: f64 = 25.0;
pub const MELEE_HP: f64 = 120.0;
pub const MELEE_DAMAGE: f64 = 14.0;
pub const MELEE_RANGE: f64 = 18.0;
/// Seconds between melee attacks.
pub const MELEE_ATTACK_INTERVAL: f64 = 1.1;
/// Lane units per second.
pub const MELEE_SPEED: f64 = 46.0;

pub const RANGED_COST: f64 = 35.0;
pub const RANGED_HP: f64 = 80.0;
pub const RANGED_DAMAGE: f64 = 10.0;
pub const RANGED_RANGE: f64 = 70.0;
pub const RANGED_ATTACK_INTERVAL: f64 = 1.6;
pub const RANGED_SPEED: f64 = 38.0;

// --- Upgrades ---

/// Tiers per upgrade track.
pub const UPGRADE_MAX_LEVEL: u32 = 3;

pub const DAMAGE_UPGRADE_COSTS: [f64; 3] = [60.0, 90.0, 130.0];
pub const DAMAGE_UPGRADE_MULTIPLIERS: [f64; 3] = [1.15, 1.3, 1.5];

pub const HP_UPGRADE_COSTS: [f64; 3] = [60.0, 90.0, 130.0];
pub const HP_UPGRADE_MULTIPLIERS: [f64; 3] = [1.15, 1.3, 1.5];

pub const INCOME_UPGRADE_COSTS: [f64; 3] = [80.0, 120.0, 160.0];
pub const INCOME_UPGRADE_MULTIPLIERS: [f64; 3] = [1.25, 1.5, 1.9];
