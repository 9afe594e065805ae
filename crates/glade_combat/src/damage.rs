//! Damage kinds and information

use glade_math::Vec2;
use serde::{Deserialize, Serialize};

/// How the player's attack was delivered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttackKind {
    /// Melee swing with the equipped weapon
    Weapon,
    /// Spell effect or projectile
    Magic,
}

/// Flavor of an enemy's strike (selects its particle and sound)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttackStyle {
    Slash,
    Claw,
    Thunder,
    LeafAttack,
}

/// Information about a damage instance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DamageInfo {
    /// Damage amount
    pub amount: f32,
    /// How it was delivered
    pub kind: AttackKind,
    /// Where the attacker stood (knockback pushes away from it)
    pub source: Vec2,
}

impl DamageInfo {
    /// Create new damage info
    pub fn new(amount: f32, kind: AttackKind, source: Vec2) -> Self {
        Self { amount, kind, source }
    }

    /// Melee damage: base attack stat plus the weapon's bonus
    pub fn melee(attack_stat: f32, weapon_damage: f32, source: Vec2) -> Self {
        Self::new(attack_stat + weapon_damage, AttackKind::Weapon, source)
    }

    /// Spell damage: base magic stat plus the spell's strength
    pub fn spell(magic_stat: f32, spell_strength: f32, source: Vec2) -> Self {
        Self::new(magic_stat + spell_strength, AttackKind::Magic, source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_damage_info() {
        let melee = DamageInfo::melee(10.0, 15.0, Vec2::ZERO);
        assert_eq!(melee.amount, 25.0);
        assert_eq!(melee.kind, AttackKind::Weapon);

        let spell = DamageInfo::spell(4.0, 5.0, Vec2::new(1.0, 2.0));
        assert_eq!(spell.amount, 9.0);
        assert_eq!(spell.kind, AttackKind::Magic);
        assert_eq!(spell.source, Vec2::new(1.0, 2.0));
    }

    #[test]
    fn test_attack_style_serde_names() {
        let parsed: AttackStyle = serde_json::from_str("\"claw\"").unwrap();
        assert_eq!(parsed, AttackStyle::Claw);
    }
}
