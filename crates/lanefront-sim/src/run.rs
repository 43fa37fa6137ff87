//! Per-run state, rebuilt from scratch every time a level is (re)loaded.

use lanefront_core::config::{Balance, LevelConfig};

use crate::economy::Economy;
use crate::spawner::Spawner;
use crate::structures::Structures;
use crate::upgrades::Upgrades;

/// Economy, upgrades, HQs and the enemy spawner for the loaded level.
#[derive(Debug, Clone)]
pub struct LevelRun {
    pub level: LevelConfig,
    pub economy: Economy,
    pub upgrades: Upgrades,
    pub structures: Structures,
    pub spawner: Spawner,
}

impl LevelRun {
    pub fn new(level: LevelConfig, balance: &Balance) -> Self {
        Self {
            level,
            economy: Economy::new(&balance.base),
            upgrades: Upgrades::new(balance.upgrades.clone()),
            structures: Structures::new(&balance.base, &level),
            spawner: Spawner::new(level, balance.units.clone(), balance.lane),
        }
    }
}
