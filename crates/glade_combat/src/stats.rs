//! Player stat names and per-stat tables

use serde::{Deserialize, Serialize};
use std::fmt;

/// Upgradeable player stat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stat {
    Health,
    Energy,
    Attack,
    Magic,
    Speed,
}

impl Stat {
    /// All stats, in menu order
    pub const ALL: [Stat; 5] = [Stat::Health, Stat::Energy, Stat::Attack, Stat::Magic, Stat::Speed];

    pub fn name(self) -> &'static str {
        match self {
            Stat::Health => "health",
            Stat::Energy => "energy",
            Stat::Attack => "attack",
            Stat::Magic => "magic",
            Stat::Speed => "speed",
        }
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One number per stat
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StatTable {
    pub health: f32,
    pub energy: f32,
    pub attack: f32,
    pub magic: f32,
    pub speed: f32,
}

impl StatTable {
    pub const fn new(health: f32, energy: f32, attack: f32, magic: f32, speed: f32) -> Self {
        Self { health, energy, attack, magic, speed }
    }

    /// Same value for every stat
    pub const fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value, value)
    }

    pub fn get(&self, stat: Stat) -> f32 {
        match stat {
            Stat::Health => self.health,
            Stat::Energy => self.energy,
            Stat::Attack => self.attack,
            Stat::Magic => self.magic,
            Stat::Speed => self.speed,
        }
    }

    pub fn get_mut(&mut self, stat: Stat) -> &mut f32 {
        match stat {
            Stat::Health => &mut self.health,
            Stat::Energy => &mut self.energy,
            Stat::Attack => &mut self.attack,
            Stat::Magic => &mut self.magic,
            Stat::Speed => &mut self.speed,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Stat, f32)> + '_ {
        Stat::ALL.iter().map(move |&stat| (stat, self.get(stat)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stat_table_access() {
        let mut table = StatTable::new(100.0, 60.0, 10.0, 4.0, 5.0);
        assert_eq!(table.get(Stat::Magic), 4.0);

        *table.get_mut(Stat::Speed) += 1.0;
        assert_eq!(table.speed, 6.0);

        let names: Vec<_> = table.iter().map(|(s, _)| s.name()).collect();
        assert_eq!(names, vec!["health", "energy", "attack", "magic", "speed"]);
    }
}
