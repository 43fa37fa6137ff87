//! Player resource pool.

use lanefront_core::config::BaseValues;

/// Resources, income rate, and the multiplier raised by income upgrades.
#[derive(Debug, Clone, PartialEq)]
pub struct Economy {
    resources: f64,
    base_income: f64,
    income_multiplier: f64,
}

impl Economy {
    pub fn new(base: &BaseValues) -> Self {
        Self {
            resources: base.starting_resources.max(0.0),
            base_income: base.income_per_second.max(0.0),
            income_multiplier: 1.0,
        }
    }

    /// Accrue income for `dt` seconds. No upper bound.
    pub fn tick(&mut self, dt: f64) {
        if !dt.is_finite() || dt <= 0.0 {
            return;
        }
        self.resources += self.income_rate() * dt;
    }

    /// Deduct `cost` if affordable. All-or-nothing: on `false` nothing changed.
    pub fn spend(&mut self, cost: f64) -> bool {
        if !self.can_afford(cost) {
            return false;
        }
        self.resources -= cost;
        true
    }

    pub fn can_afford(&self, cost: f64) -> bool {
        cost.is_finite() && cost >= 0.0 && self.resources >= cost
    }

    pub fn resources(&self) -> f64 {
        self.resources
    }

    /// Resources per second at the current multiplier.
    pub fn income_rate(&self) -> f64 {
        self.base_income * self.income_multiplier
    }

    pub fn income_multiplier(&self) -> f64 {
        self.income_multiplier
    }

    /// Replace (not compound) the income multiplier.
    pub(crate) fn set_income_multiplier(&mut self, multiplier: f64) {
        self.income_multiplier = multiplier;
    }
}
