//! Headquarters hit-point pools.

use lanefront_core::config::{BaseValues, LevelConfig};
use lanefront_core::enums::Side;
use lanefront_core::state::HqView;

/// One side's headquarters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hq {
    hp: f64,
    max_hp: f64,
}

impl Hq {
    fn new(max_hp: f64) -> Self {
        Self { hp: max_hp, max_hp }
    }

    pub fn hp(&self) -> f64 {
        self.hp
    }

    pub fn max_hp(&self) -> f64 {
        self.max_hp
    }

    pub fn view(&self) -> HqView {
        HqView {
            hp: self.hp,
            max_hp: self.max_hp,
        }
    }
}

/// Both headquarters for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Structures {
    player: Hq,
    enemy: Hq,
}

impl Structures {
    /// Base hit points scaled by the level's structure multiplier.
    pub fn new(base: &BaseValues, level: &LevelConfig) -> Self {
        Self {
            player: Hq::new(base.player_hq_hp * level.structure_hp_multiplier),
            enemy: Hq::new(base.enemy_hq_hp * level.structure_hp_multiplier),
        }
    }

    /// Subtract `amount` from `side`'s HQ, clamped at zero.
    /// Non-positive amounts leave the HQ untouched.
    pub fn damage_hq(&mut self, side: Side, amount: f64) {
        if amount.is_nan() || amount <= 0.0 {
            return;
        }
        let hq = self.hq_mut(side);
        hq.hp = (hq.hp - amount).max(0.0);
    }

    pub fn hq(&self, side: Side) -> &Hq {
        match side {
            Side::Player => &self.player,
            Side::Enemy => &self.enemy,
        }
    }

    pub fn is_destroyed(&self, side: Side) -> bool {
        self.hq(side).hp <= 0.0
    }

    fn hq_mut(&mut self, side: Side) -> &mut Hq {
        match side {
            Side::Player => &mut self.player,
            Side::Enemy => &mut self.enemy,
        }
    }
}
