//! Experience-gated stat upgrades

use crate::stats::{Stat, StatTable};
use serde::{Deserialize, Serialize};

/// Growth constants applied on every successful upgrade
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UpgradeRules {
    /// Stat multiplier per upgrade
    pub growth: f32,
    /// Cost multiplier per upgrade
    pub cost_inflation: f32,
}

impl Default for UpgradeRules {
    fn default() -> Self {
        Self {
            growth: 1.15,
            cost_inflation: 1.45,
        }
    }
}

/// Current stat values, their next upgrade cost, and their caps.
///
/// Invariant: `0 <= value(k) <= cap(k)` for every stat.
#[derive(Debug, Clone, PartialEq)]
pub struct UpgradeLedger {
    values: StatTable,
    costs: StatTable,
    caps: StatTable,
    rules: UpgradeRules,
}

impl UpgradeLedger {
    /// Create a ledger. Starting values are clamped into `[0, cap]`.
    pub fn new(values: StatTable, costs: StatTable, caps: StatTable, rules: UpgradeRules) -> Self {
        let mut values = values;
        for stat in Stat::ALL {
            let cap = caps.get(stat);
            let v = values.get_mut(stat);
            *v = v.clamp(0.0, cap.max(0.0));
        }
        Self { values, costs, caps, rules }
    }

    pub fn value(&self, stat: Stat) -> f32 {
        self.values.get(stat)
    }

    pub fn cost(&self, stat: Stat) -> f32 {
        self.costs.get(stat)
    }

    pub fn cap(&self, stat: Stat) -> f32 {
        self.caps.get(stat)
    }

    pub fn values(&self) -> &StatTable {
        &self.values
    }

    pub fn costs(&self) -> &StatTable {
        &self.costs
    }

    pub fn caps(&self) -> &StatTable {
        &self.caps
    }

    pub fn is_capped(&self, stat: Stat) -> bool {
        self.value(stat) >= self.cap(stat)
    }

    /// Whether `experience` would pay for upgrading `stat` right now
    pub fn can_upgrade(&self, stat: Stat, experience: f32) -> bool {
        experience >= self.cost(stat) && !self.is_capped(stat)
    }

    /// Spend experience on one upgrade of `stat`.
    ///
    /// Fails silently (returns false, changes nothing) when the experience
    /// does not cover the cost or the stat is already at its cap.
    pub fn try_upgrade(&mut self, stat: Stat, experience: &mut f32) -> bool {
        if !self.can_upgrade(stat, *experience) {
            return false;
        }

        *experience -= self.cost(stat);
        let cap = self.cap(stat);
        let value = self.values.get_mut(stat);
        *value = (*value * self.rules.growth).min(cap);
        *self.costs.get_mut(stat) *= self.rules.cost_inflation;

        log::info!(
            "upgraded {} to {:.2} (next cost {:.2}, {:.2} exp left)",
            stat,
            self.value(stat),
            self.cost(stat),
            experience
        );
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ledger(value: f32, cost: f32, cap: f32) -> UpgradeLedger {
        UpgradeLedger::new(
            StatTable::uniform(value),
            StatTable::uniform(cost),
            StatTable::uniform(cap),
            UpgradeRules::default(),
        )
    }

    #[test]
    fn test_upgrade_success() {
        let mut ledger = ledger(10.0, 20.0, 20.0);
        let mut exp = 25.0;

        assert!(ledger.try_upgrade(Stat::Attack, &mut exp));
        assert_relative_eq!(ledger.value(Stat::Attack), 11.5, epsilon = 1e-4);
        assert_relative_eq!(ledger.cost(Stat::Attack), 29.0, epsilon = 1e-4);
        assert_relative_eq!(exp, 5.0, epsilon = 1e-4);

        // Other stats untouched
        assert_eq!(ledger.value(Stat::Magic), 10.0);
    }

    #[test]
    fn test_insufficient_experience_is_silent() {
        let mut ledger = ledger(10.0, 20.0, 20.0);
        let before = ledger.clone();
        let mut exp = 19.99;

        assert!(!ledger.try_upgrade(Stat::Health, &mut exp));
        assert_eq!(ledger, before);
        assert_eq!(exp, 19.99);
    }

    #[test]
    fn test_crossing_call_clamps_to_cap() {
        let mut ledger = ledger(10.0, 1.0, 14.0);
        let mut exp = 1_000.0;

        // 10 -> 11.5 -> 13.225 -> 15.2 (clamped to 14)
        assert!(ledger.try_upgrade(Stat::Speed, &mut exp));
        assert!(ledger.try_upgrade(Stat::Speed, &mut exp));
        assert!(ledger.value(Stat::Speed) < 14.0);
        assert!(ledger.try_upgrade(Stat::Speed, &mut exp));
        assert_eq!(ledger.value(Stat::Speed), 14.0);
    }

    #[test]
    fn test_capped_upgrade_is_idempotent() {
        let mut ledger = ledger(14.0, 1.0, 14.0);
        let mut exp = 1_000.0;

        for _ in 0..5 {
            assert!(!ledger.try_upgrade(Stat::Energy, &mut exp));
        }
        assert_eq!(ledger.value(Stat::Energy), 14.0);
        assert_eq!(ledger.cost(Stat::Energy), 1.0);
        assert_eq!(exp, 1_000.0);
    }

    #[test]
    fn test_new_clamps_into_range() {
        let ledger = UpgradeLedger::new(
            StatTable::new(500.0, -3.0, 10.0, 4.0, 5.0),
            StatTable::uniform(100.0),
            StatTable::new(300.0, 140.0, 20.0, 10.0, 10.0),
            UpgradeRules::default(),
        );
        assert_eq!(ledger.value(Stat::Health), 300.0);
        assert_eq!(ledger.value(Stat::Energy), 0.0);
    }
}
