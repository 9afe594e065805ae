//! Error types for world setup
//!
//! Everything here is a load-time failure. Once a world is built, ticks
//! never fail: rejected actions are ordinary outcomes, not errors.

use glade_physics::PhysicsError;
use thiserror::Error;

/// Problems with the weapon, spell or enemy tables
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog has no weapons")]
    NoWeapons,

    #[error("Catalog has no spells")]
    NoSpells,

    #[error("Duplicate {table} entry: {name}")]
    Duplicate { table: &'static str, name: String },

    #[error("Enemy '{name}' has invalid radii (attack {attack}, notice {notice})")]
    InvalidRadii { name: String, attack: f32, notice: f32 },

    #[error("Enemy '{name}' has non-positive {field}: {value}")]
    NonPositive { name: String, field: &'static str, value: f32 },

    #[error("Weapon '{name}' has a swing with no area")]
    EmptySwing { name: String },
}

/// Problems with tunable constants
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Top-level error for building a world
#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Bad body geometry: {0}")]
    Physics(#[from] PhysicsError),

    #[error("Unknown enemy kind: {0}")]
    UnknownEnemyKind(String),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for world setup
pub type Result<T> = std::result::Result<T, GameError>;
