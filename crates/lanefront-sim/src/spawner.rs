//! Unit creation for both sides and the enemy wave timer.
//!
//! The spawner only produces `UnitSpawn` records. Inserting them into the
//! world is the engine's job (see `world_setup::spawn_unit`).

use log::debug;

use lanefront_core::config::{LaneConfig, LevelConfig, UnitBalance, UnitStats};
use lanefront_core::enums::{Side, UnitKind};
use lanefront_core::types::UnitIdAllocator;

use crate::economy::Economy;
use crate::upgrades::Upgrades;

/// A freshly created unit, not yet placed in the world.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitSpawn {
    pub id: u32,
    pub side: Side,
    pub kind: UnitKind,
    pub position: f64,
    pub stats: UnitStats,
}

/// Creates units for one run.
#[derive(Debug, Clone)]
pub struct Spawner {
    level: LevelConfig,
    units: UnitBalance,
    lane: LaneConfig,
    enemy_spawn_timer: f64,
}

impl Spawner {
    pub fn new(level: LevelConfig, units: UnitBalance, lane: LaneConfig) -> Self {
        Self {
            level,
            units,
            lane,
            enemy_spawn_timer: 0.0,
        }
    }

    /// Create a unit for `side`.
    ///
    /// Player units must be paid for; `None` means the economy refused the
    /// spend. Enemy units are free and ignore `economy` and `upgrades`.
    pub fn spawn_unit(
        &self,
        side: Side,
        kind: UnitKind,
        economy: &mut Economy,
        upgrades: &Upgrades,
        ids: &mut UnitIdAllocator,
    ) -> Option<UnitSpawn> {
        match side {
            Side::Player => {
                let template = self.units.template(kind);
                if !economy.spend(template.cost) {
                    debug!(
                        "{kind} spawn rejected: costs {}, have {:.1}",
                        template.cost,
                        economy.resources()
                    );
                    return None;
                }
                Some(UnitSpawn {
                    id: ids.allocate(),
                    side,
                    kind,
                    position: self.lane.spawn_x(side),
                    stats: upgrades.apply_unit_stats(template),
                })
            }
            Side::Enemy => Some(self.spawn_enemy(kind, ids)),
        }
    }

    /// Advance the wave timer by `dt`. Once it reaches the level's spawn
    /// interval it resets and a full wave is returned; otherwise the result
    /// is empty. The caller owns placing the units.
    pub fn tick_enemy_spawner(&mut self, dt: f64, ids: &mut UnitIdAllocator) -> Vec<UnitSpawn> {
        self.enemy_spawn_timer += dt;
        if self.enemy_spawn_timer < self.level.enemy_spawn_interval {
            return Vec::new();
        }
        self.enemy_spawn_timer = 0.0;

        let wave: Vec<UnitSpawn> = (0..self.level.enemy_wave_size)
            .map(|i| {
                let mut unit = self.spawn_enemy(UnitKind::for_wave_slot(i), ids);
                unit.position += f64::from(i) * self.lane.wave_spacing;
                unit
            })
            .collect();
        debug!("level {} enemy wave of {}", self.level.id, wave.len());
        wave
    }

    /// Seconds left before the next wave.
    pub fn time_to_next_wave(&self) -> f64 {
        (self.level.enemy_spawn_interval - self.enemy_spawn_timer).max(0.0)
    }

    /// Enemy hp, max hp and damage are scaled flat by the level's stat multiplier.
    fn spawn_enemy(&self, kind: UnitKind, ids: &mut UnitIdAllocator) -> UnitSpawn {
        let base = self.units.template(kind).base_stats();
        let scale = self.level.enemy_stat_multiplier;
        UnitSpawn {
            id: ids.allocate(),
            side: Side::Enemy,
            kind,
            position: self.lane.spawn_x(Side::Enemy),
            stats: UnitStats {
                hp: base.hp * scale,
                max_hp: base.max_hp * scale,
                damage: base.damage * scale,
                ..base
            },
        }
    }
}
