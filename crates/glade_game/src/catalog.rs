//! Weapon, spell and enemy tables
//!
//! A catalog is loaded once, validated, and then shared read-only (behind an
//! `Arc`) by the world and everything it spawns. Table order matters: the
//! player's weapon and spell slots index straight into it.

use crate::error::{CatalogError, Result};
use glade_ai::SenseRadii;
use glade_combat::{AttackStyle, SpellKind, SpellSpec, WeaponSpec};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One kind of enemy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemySpec {
    pub name: String,
    pub health: f32,
    /// Experience granted on death
    pub exp: f32,
    pub damage: f32,
    pub attack_style: AttackStyle,
    pub speed: f32,
    /// Knockback factor while recovering from a hit
    pub resistance: f32,
    pub attack_radius: f32,
    pub notice_radius: f32,
}

impl EnemySpec {
    pub fn radii(&self) -> SenseRadii {
        SenseRadii::new(self.attack_radius, self.notice_radius)
    }

    fn validate(&self) -> std::result::Result<(), CatalogError> {
        if !self.radii().is_valid() {
            return Err(CatalogError::InvalidRadii {
                name: self.name.clone(),
                attack: self.attack_radius,
                notice: self.notice_radius,
            });
        }
        for (field, value) in [("health", self.health), ("speed", self.speed)] {
            if value <= 0.0 {
                return Err(CatalogError::NonPositive {
                    name: self.name.clone(),
                    field,
                    value,
                });
            }
        }
        Ok(())
    }
}

/// All read-only game data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub weapons: Vec<WeaponSpec>,
    pub spells: Vec<SpellSpec>,
    pub enemies: Vec<EnemySpec>,
}

impl Catalog {
    /// The shipped tables
    pub fn standard() -> Self {
        let enemy = |name: &str, health, exp, damage, attack_style, speed, attack_radius, notice_radius| {
            EnemySpec {
                name: name.to_string(),
                health,
                exp,
                damage,
                attack_style,
                speed,
                resistance: 3.0,
                attack_radius,
                notice_radius,
            }
        };

        Self {
            weapons: vec![
                WeaponSpec::new("sword", 15.0, 100),
                WeaponSpec::new("lance", 30.0, 400).with_swing(56.0, 20.0),
                WeaponSpec::new("axe", 20.0, 300).with_swing(40.0, 32.0),
                WeaponSpec::new("rapier", 8.0, 50).with_swing(48.0, 16.0),
                WeaponSpec::new("sai", 10.0, 80).with_swing(32.0, 24.0),
            ],
            spells: vec![
                SpellSpec::new(SpellKind::Flame, 5.0, 20.0),
                SpellSpec::new(SpellKind::Heal, 20.0, 10.0),
                SpellSpec::new(SpellKind::Shield, 0.0, 15.0),
                SpellSpec::new(SpellKind::EnergyBall, 10.0, 25.0),
            ],
            enemies: vec![
                enemy("squid", 100.0, 100.0, 20.0, AttackStyle::Slash, 3.0, 80.0, 360.0),
                enemy("raccoon", 300.0, 250.0, 40.0, AttackStyle::Claw, 2.0, 120.0, 400.0),
                enemy("spirit", 100.0, 110.0, 8.0, AttackStyle::Thunder, 4.0, 60.0, 350.0),
                enemy("bamboo", 70.0, 120.0, 6.0, AttackStyle::LeafAttack, 3.0, 50.0, 300.0),
            ],
        }
    }

    /// Parse from JSON and validate
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: Self = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Reject tables the simulation cannot index safely
    pub fn validate(&self) -> std::result::Result<(), CatalogError> {
        let result = self.check();
        if let Err(err) = &result {
            log::warn!("rejecting catalog: {}", err);
        }
        result
    }

    fn check(&self) -> std::result::Result<(), CatalogError> {
        if self.weapons.is_empty() {
            return Err(CatalogError::NoWeapons);
        }
        if self.spells.is_empty() {
            return Err(CatalogError::NoSpells);
        }

        unique("weapon", self.weapons.iter().map(|w| w.name.as_str()))?;
        unique("spell", self.spells.iter().map(|s| s.kind.name()))?;
        unique("enemy", self.enemies.iter().map(|e| e.name.as_str()))?;

        if let Some(weapon) = self.weapons.iter().find(|w| w.reach <= 0.0 || w.width <= 0.0) {
            return Err(CatalogError::EmptySwing {
                name: weapon.name.clone(),
            });
        }
        self.enemies.iter().try_for_each(EnemySpec::validate)
    }

    pub fn weapon(&self, index: usize) -> Option<&WeaponSpec> {
        self.weapons.get(index)
    }

    pub fn spell(&self, index: usize) -> Option<&SpellSpec> {
        self.spells.get(index)
    }

    pub fn enemy(&self, name: &str) -> Option<&EnemySpec> {
        self.enemies.iter().find(|e| e.name == name)
    }

    pub fn weapon_index(&self, name: &str) -> Option<usize> {
        self.weapons.iter().position(|w| w.name == name)
    }

    pub fn spell_index(&self, kind: SpellKind) -> Option<usize> {
        self.spells.iter().position(|s| s.kind == kind)
    }
}

fn unique<'a>(
    table: &'static str,
    names: impl Iterator<Item = &'a str>,
) -> std::result::Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(CatalogError::Duplicate {
                table,
                name: name.to_string(),
            });
        }
    }
    Ok(())
}
