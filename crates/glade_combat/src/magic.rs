//! Spell specifications

use glade_core::Millis;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Spells the player can learn. Each has its own casting behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpellKind {
    /// Row of flames ahead of the caster that damages enemies
    Flame,
    /// Restores health
    Heal,
    /// Absorbs the next few hits
    Shield,
    /// Stationary bolt that bursts on the first enemy it touches
    EnergyBall,
}

impl SpellKind {
    pub fn name(self) -> &'static str {
        match self {
            SpellKind::Flame => "flame",
            SpellKind::Heal => "heal",
            SpellKind::Shield => "shield",
            SpellKind::EnergyBall => "energy_ball",
        }
    }
}

impl fmt::Display for SpellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One row of the spell catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpellSpec {
    pub kind: SpellKind,
    /// Base power before the caster's magic stat
    pub strength: f32,
    /// Energy spent per cast
    pub cost: f32,
    /// Extra recovery added to the base attack cooldown
    #[serde(default)]
    pub cooldown: Millis,
    /// Inventory icon path
    pub graphic: String,
}

impl SpellSpec {
    pub fn new(kind: SpellKind, strength: f32, cost: f32) -> Self {
        Self {
            kind,
            strength,
            cost,
            cooldown: 0,
            graphic: format!("graphics/particles/{}/{}.png", kind.name(), kind.name()),
        }
    }

    /// Resolve the cast for a caster with the given magic stat
    pub fn cast(&self, magic_stat: f32) -> SpellCast {
        SpellCast {
            kind: self.kind,
            strength: self.strength + magic_stat,
            cost: self.cost,
        }
    }
}

/// A cast request handed to the magic collaborator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpellCast {
    pub kind: SpellKind,
    pub strength: f32,
    pub cost: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cast_adds_magic_stat() {
        let heal = SpellSpec::new(SpellKind::Heal, 20.0, 10.0);
        let cast = heal.cast(4.0);
        assert_eq!(cast.kind, SpellKind::Heal);
        assert_eq!(cast.strength, 24.0);
        assert_eq!(cast.cost, 10.0);
    }

    #[test]
    fn test_spell_kind_serde_names() {
        let kind: SpellKind = serde_json::from_str("\"energy_ball\"").unwrap();
        assert_eq!(kind, SpellKind::EnergyBall);
    }
}
