//! Permanent stat upgrades bought with resources.

use log::debug;

use lanefront_core::config::{UnitStats, UnitTemplate, UpgradeBalance};
use lanefront_core::enums::UpgradeKind;

use crate::economy::Economy;

/// Current tier of each upgrade track.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct UpgradeLevels {
    pub damage: u32,
    pub hp: u32,
    pub income: u32,
}

impl UpgradeLevels {
    pub fn level_for(&self, kind: UpgradeKind) -> u32 {
        match kind {
            UpgradeKind::Damage => self.damage,
            UpgradeKind::Hp => self.hp,
            UpgradeKind::Income => self.income,
        }
    }

    fn set_level(&mut self, kind: UpgradeKind, level: u32) {
        match kind {
            UpgradeKind::Damage => self.damage = level,
            UpgradeKind::Hp => self.hp = level,
            UpgradeKind::Income => self.income = level,
        }
    }
}

/// Upgrade purchases for one run.
#[derive(Debug, Clone)]
pub struct Upgrades {
    table: UpgradeBalance,
    levels: UpgradeLevels,
}

impl Upgrades {
    pub fn new(table: UpgradeBalance) -> Self {
        Self {
            table,
            levels: UpgradeLevels::default(),
        }
    }

    /// Buy the next tier of `kind`. Fails without side effects when the track
    /// is maxed or the economy cannot cover the price.
    pub fn buy(&mut self, kind: UpgradeKind, economy: &mut Economy) -> bool {
        let level = self.levels.level_for(kind);
        let Some(cost) = self.table.track(kind).cost_at(level) else {
            debug!("{kind} upgrade rejected: already at level {level}");
            return false;
        };
        if !economy.spend(cost) {
            debug!(
                "{kind} upgrade rejected: costs {cost}, have {:.1}",
                economy.resources()
            );
            return false;
        }

        let new_level = level + 1;
        self.levels.set_level(kind, new_level);
        if kind == UpgradeKind::Income {
            economy.set_income_multiplier(self.table.income.multiplier_at(new_level));
        }
        debug!("{kind} upgraded to level {new_level} for {cost}");
        true
    }

    /// Buy by name, as received from a string-typed frontend. Unknown names fail.
    pub fn buy_named(&mut self, name: &str, economy: &mut Economy) -> bool {
        match name.parse::<UpgradeKind>() {
            Ok(kind) => self.buy(kind, economy),
            Err(err) => {
                debug!("upgrade rejected: {err}");
                false
            }
        }
    }

    /// Stats for a new player unit: hp and damage scaled by the current tier
    /// multipliers. Only the current tier applies, never a product of tiers.
    pub fn apply_unit_stats(&self, template: &UnitTemplate) -> UnitStats {
        let hp = template.hp * self.multiplier(UpgradeKind::Hp);
        UnitStats {
            hp,
            max_hp: hp,
            damage: template.damage * self.multiplier(UpgradeKind::Damage),
            ..template.base_stats()
        }
    }

    pub fn level(&self, kind: UpgradeKind) -> u32 {
        self.levels.level_for(kind)
    }

    pub fn levels(&self) -> UpgradeLevels {
        self.levels
    }

    pub fn max_level(&self, kind: UpgradeKind) -> u32 {
        self.table.track(kind).max_level
    }

    /// Price of the next tier, `None` when maxed.
    pub fn next_cost(&self, kind: UpgradeKind) -> Option<f64> {
        self.table.track(kind).cost_at(self.level(kind))
    }

    /// Multiplier currently in effect for `kind`.
    pub fn multiplier(&self, kind: UpgradeKind) -> f64 {
        self.table.track(kind).multiplier_at(self.level(kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lanefront_core::config::{BaseValues, UnitBalance};

    fn rich_economy(resources: f64) -> Economy {
        Economy::new(&BaseValues {
            starting_resources: resources,
            ..BaseValues::default()
        })
    }

    #[test]
    fn test_buy_walks_cost_table() {
        let mut eco = rich_economy(1000.0);
        let mut upgrades = Upgrades::new(UpgradeBalance::default());

        assert!(upgrades.buy(UpgradeKind::Damage, &mut eco));
        assert_eq!(eco.resources(), 940.0);
        assert!(upgrades.buy(UpgradeKind::Damage, &mut eco));
        assert_eq!(eco.resources(), 850.0);
        assert!(upgrades.buy(UpgradeKind::Damage, &mut eco));
        assert_eq!(eco.resources(), 720.0);
        assert_eq!(upgrades.level(UpgradeKind::Damage), 3);
        assert_eq!(upgrades.next_cost(UpgradeKind::Damage), None);
    }

    #[test]
    fn test_buy_at_max_level_fails_without_mutation() {
        let mut eco = rich_economy(1000.0);
        let mut upgrades = Upgrades::new(UpgradeBalance::default());
        for _ in 0..3 {
            assert!(upgrades.buy(UpgradeKind::Hp, &mut eco));
        }
        let before = eco.resources();

        assert!(!upgrades.buy(UpgradeKind::Hp, &mut eco));
        assert_eq!(upgrades.level(UpgradeKind::Hp), 3);
        assert_eq!(eco.resources(), before);
    }

    #[test]
    fn test_buy_unaffordable_fails_without_mutation() {
        let mut eco = rich_economy(59.0);
        let mut upgrades = Upgrades::new(UpgradeBalance::default());

        assert!(!upgrades.buy(UpgradeKind::Damage, &mut eco));
        assert_eq!(upgrades.level(UpgradeKind::Damage), 0);
        assert_eq!(eco.resources(), 59.0);
    }

    #[test]
    fn test_buy_unknown_name_fails() {
        let mut eco = rich_economy(1000.0);
        let mut upgrades = Upgrades::new(UpgradeBalance::default());

        assert!(!upgrades.buy_named("armor", &mut eco));
        assert_eq!(eco.resources(), 1000.0);
        assert!(upgrades.buy_named("income", &mut eco));
        assert_eq!(upgrades.level(UpgradeKind::Income), 1);
    }

    #[test]
    fn test_income_upgrade_replaces_multiplier() {
        let mut eco = rich_economy(1000.0);
        let mut upgrades = Upgrades::new(UpgradeBalance::default());

        assert!(upgrades.buy(UpgradeKind::Income, &mut eco));
        assert_eq!(eco.income_multiplier(), 1.25);
        assert!(upgrades.buy(UpgradeKind::Income, &mut eco));
        assert_eq!(eco.income_multiplier(), 1.5);

        let before = eco.resources();
        eco.tick(1.0);
        assert!((eco.resources() - before - 12.0 * 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_unit_stats_identity_at_level_zero() {
        let upgrades = Upgrades::new(UpgradeBalance::default());
        let template = UnitBalance::default().melee;
        assert_eq!(upgrades.apply_unit_stats(&template), template.base_stats());
    }

    #[test]
    fn test_unit_stats_use_current_tier_only() {
        let mut eco = rich_economy(1000.0);
        let mut upgrades = Upgrades::new(UpgradeBalance::default());
        upgrades.buy(UpgradeKind::Hp, &mut eco);
        upgrades.buy(UpgradeKind::Hp, &mut eco);
        upgrades.buy(UpgradeKind::Damage, &mut eco);

        let template = UnitBalance::default().melee;
        let stats = upgrades.apply_unit_stats(&template);
        assert!((stats.hp - 120.0 * 1.3).abs() < 1e-9);
        assert_eq!(stats.hp, stats.max_hp);
        assert!((stats.damage - 14.0 * 1.15).abs() < 1e-9);
        assert_eq!(stats.range, template.range);
        assert_eq!(stats.speed, template.speed);
        assert_eq!(stats.attack_interval, template.attack_interval);
    }
}
