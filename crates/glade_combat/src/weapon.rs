//! Melee weapon specifications

use glade_core::Millis;
use serde::{Deserialize, Serialize};

fn default_reach() -> f32 {
    40.0
}

fn default_width() -> f32 {
    24.0
}

/// One row of the weapon catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeaponSpec {
    /// Weapon name (also its asset folder)
    pub name: String,
    /// Damage added to the wielder's attack stat
    pub damage: f32,
    /// Extra recovery added to the base attack cooldown
    pub cooldown: Millis,
    /// Inventory icon path
    pub graphic: String,
    /// Length of the swing's hitbox away from the wielder
    #[serde(default = "default_reach")]
    pub reach: f32,
    /// Breadth of the swing's hitbox
    #[serde(default = "default_width")]
    pub width: f32,
}

impl WeaponSpec {
    /// Create a weapon with the default swing size
    pub fn new(name: impl Into<String>, damage: f32, cooldown: Millis) -> Self {
        let name = name.into();
        let graphic = format!("graphics/weapons/{}/full.png", name);
        Self {
            name,
            damage,
            cooldown,
            graphic,
            reach: default_reach(),
            width: default_width(),
        }
    }

    /// Set the swing size
    pub fn with_swing(mut self, reach: f32, width: f32) -> Self {
        self.reach = reach;
        self.width = width;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weapon_creation() {
        let weapon = WeaponSpec::new("lance", 30.0, 400).with_swing(60.0, 20.0);
        assert_eq!(weapon.damage, 30.0);
        assert_eq!(weapon.cooldown, 400);
        assert_eq!(weapon.graphic, "graphics/weapons/lance/full.png");
        assert_eq!(weapon.reach, 60.0);
    }

    #[test]
    fn test_swing_size_defaults_when_missing() {
        let weapon: WeaponSpec = serde_json::from_str(
            r#"{ "name": "sai", "damage": 10.0, "cooldown": 80, "graphic": "sai.png" }"#,
        )
        .unwrap();
        assert_eq!(weapon.reach, 40.0);
        assert_eq!(weapon.width, 24.0);
    }
}
