//! Game configuration
//!
//! Every tunable constant of a session lives here. Missing JSON fields fall
//! back to the shipped defaults.

use crate::error::{ConfigError, Result};
use glade_combat::{Stat, StatTable, UpgradeRules};
use glade_core::Millis;
use serde::{Deserialize, Serialize};

/// Session-wide tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length of one map tile
    pub tile_size: f32,

    /// Vertical hitbox inset for the player sprite (negative shrinks)
    pub player_hitbox_inset: f32,
    /// Vertical hitbox inset for enemy sprites
    pub enemy_hitbox_inset: f32,
    /// Vertical hitbox inset for tall object tiles
    pub object_hitbox_inset: f32,
    /// Vertical hitbox inset for grass tiles
    pub grass_hitbox_inset: f32,

    /// Player stats at session start
    pub base_stats: StatTable,
    /// Upper bound for each stat
    pub max_stats: StatTable,
    /// First upgrade cost for each stat
    pub upgrade_costs: StatTable,
    /// Experience at session start
    pub starting_experience: f32,
    /// Stat growth and cost inflation per upgrade
    pub upgrade_rules: UpgradeRules,

    /// Base recovery after any attack, before the weapon/spell cooldown
    pub attack_cooldown_ms: Millis,
    /// Lock after switching weapon
    pub weapon_switch_ms: Millis,
    /// Lock after switching spell
    pub magic_switch_ms: Millis,
    /// Player invulnerability after taking damage
    pub dodge_ms: Millis,
    /// Energy regained per tick, as a fraction of the magic stat
    pub energy_regen_factor: f32,

    /// Delay between enemy strikes
    pub enemy_attack_cooldown_ms: Millis,
    /// Enemy invulnerability after taking damage
    pub enemy_invulnerability_ms: Millis,

    /// Live energy balls allowed per player
    pub max_projectiles: u32,
    /// Charges granted by the shield spell
    pub shield_charges: u32,
    /// How long flame bodies stay active
    pub flame_lifetime_ms: Millis,
    /// Flame bodies spawned per cast
    pub flame_count: u32,
    /// Side length of a flame body
    pub flame_size: f32,
    /// Side length of an energy ball
    pub projectile_size: f32,

    /// Navigation and confirm lock inside the upgrade menu
    pub menu_lock_ms: Millis,
    /// Leaf particles spawned when grass is cut (inclusive range)
    pub grass_particles: (u32, u32),

    /// Frames advanced per tick for the player
    pub player_animation_speed: f32,
    /// Frames advanced per tick for enemies
    pub enemy_animation_speed: f32,

    /// Seed for cosmetic randomness
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tile_size: 64.0,
            player_hitbox_inset: -26.0,
            enemy_hitbox_inset: -10.0,
            object_hitbox_inset: -40.0,
            grass_hitbox_inset: -10.0,
            base_stats: StatTable::new(100.0, 60.0, 10.0, 4.0, 5.0),
            max_stats: StatTable::new(300.0, 140.0, 20.0, 10.0, 10.0),
            upgrade_costs: StatTable::uniform(100.0),
            starting_experience: 120.0,
            upgrade_rules: UpgradeRules::default(),
            attack_cooldown_ms: 600,
            weapon_switch_ms: 350,
            magic_switch_ms: 350,
            dodge_ms: 500,
            energy_regen_factor: 0.01,
            enemy_attack_cooldown_ms: 400,
            enemy_invulnerability_ms: 300,
            max_projectiles: 3,
            shield_charges: 3,
            flame_lifetime_ms: 500,
            flame_count: 5,
            flame_size: 64.0,
            projectile_size: 48.0,
            menu_lock_ms: 400,
            grass_particles: (3, 6),
            player_animation_speed: 0.15,
            enemy_animation_speed: 0.15,
            seed: 0x6c61_6465,
        }
    }
}

impl GameConfig {
    /// Parse from JSON and validate
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the constants for values the simulation cannot run with
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        let invalid = |message: String| {
            log::warn!("rejecting config: {}", message);
            Err(ConfigError::Invalid(message))
        };

        if self.tile_size <= 0.0 {
            return invalid(format!("tile_size must be positive, got {}", self.tile_size));
        }
        if self.upgrade_rules.growth <= 0.0 || self.upgrade_rules.cost_inflation <= 0.0 {
            return invalid(format!(
                "upgrade factors must be positive, got growth {} and inflation {}",
                self.upgrade_rules.growth, self.upgrade_rules.cost_inflation
            ));
        }
        for stat in Stat::ALL {
            let base = self.base_stats.get(stat);
            let cap = self.max_stats.get(stat);
            if base < 0.0 || base > cap {
                return invalid(format!("{} starts at {} outside [0, {}]", stat, base, cap));
            }
        }
        if self.grass_particles.0 > self.grass_particles.1 {
            return invalid(format!(
                "grass_particles range {}..={} is empty",
                self.grass_particles.0, self.grass_particles.1
            ));
        }
        if self.flame_size <= 0.0 || self.projectile_size <= 0.0 {
            return invalid("spell body sizes must be positive".to_string());
        }
        Ok(())
    }

    /// Set the tile size
    pub fn with_tile_size(mut self, tile_size: f32) -> Self {
        self.tile_size = tile_size;
        self
    }

    /// Set starting stats
    pub fn with_base_stats(mut self, stats: StatTable) -> Self {
        self.base_stats = stats;
        self
    }

    /// Set starting experience
    pub fn with_starting_experience(mut self, experience: f32) -> Self {
        self.starting_experience = experience;
        self
    }

    /// Set the cosmetic RNG seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set enemy timing
    pub fn with_enemy_timing(mut self, attack_cooldown: Millis, invulnerability: Millis) -> Self {
        self.enemy_attack_cooldown_ms = attack_cooldown;
        self.enemy_invulnerability_ms = invulnerability;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.base_stats.get(Stat::Energy), 60.0);
        assert_eq!(config.max_stats.get(Stat::Health), 300.0);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = GameConfig::from_json(r#"{ "tile_size": 32.0, "dodge_ms": 250 }"#).unwrap();
        assert_eq!(config.tile_size, 32.0);
        assert_eq!(config.dodge_ms, 250);
        assert_eq!(config.attack_cooldown_ms, 600);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(GameConfig::default().with_tile_size(0.0).validate().is_err());

        let over_cap = GameConfig::default().with_base_stats(StatTable::uniform(50.0));
        assert!(over_cap.validate().is_err());

        let mut config = GameConfig::default();
        config.upgrade_rules.growth = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_json() {
        assert!(GameConfig::from_json("{ tile_size: }").is_err());
    }
}
