//! Glade Game - the simulation core of a top-down action game
//!
//! This crate wires the engine pieces into a playable world: a player
//! driven by input snapshots, enemies driven by state machines, and a
//! combat pass that turns overlapping attack bodies into damage, deaths
//! and experience.
//!
//! # Tick order
//!
//! ```text
//!   menu toggle ──► player ──► enemies (think, step) ──► flame expiry ──► combat ──► removals
//! ```
//!
//! Everything the presentation layer needs to know is reported through a
//! [`GameSink`] passed to [`World::tick`].
//!
//! # Example
//!
//! ```ignore
//! use glade_game::prelude::*;
//! use std::sync::Arc;
//!
//! let mut world = World::new(GameConfig::default(), Arc::new(Catalog::standard()), Vec2::new(128.0, 128.0))?;
//! world.add_tile(TileKind::Boundary, Vec2::ZERO)?;
//! world.spawn_enemy("squid", Vec2::new(512.0, 128.0))?;
//!
//! let mut events = EventLog::new();
//! let mut clock = TickClock::sixty_hz();
//! world.tick(clock.tick(), &InputSnapshot::idle().with_right(), &mut events);
//! ```

pub mod attack;
pub mod catalog;
pub mod config;
pub mod enemy;
pub mod entity;
pub mod error;
mod host;
pub mod input;
pub mod menu;
pub mod player;
pub mod sink;
pub mod tile;
pub mod world;

pub mod prelude {
    pub use crate::attack::{AttackSet, AttackerRef, Projectile, SpellEffect, WeaponSwing};
    pub use crate::catalog::{Catalog, EnemySpec};
    pub use crate::config::GameConfig;
    pub use crate::enemy::{Enemy, EnemyHost, EnemyState, HitOutcome};
    pub use crate::entity::ActionEntity;
    pub use crate::error::{CatalogError, ConfigError, GameError, Result};
    pub use crate::input::InputSnapshot;
    pub use crate::menu::{MenuEntry, UpgradeMenu};
    pub use crate::player::{Facing, Mode, Player, PlayerHit, PlayerHost, PlayerState};
    pub use crate::sink::{
        EffectSink, EntityRef, EventLog, GameSink, NullSink, ParticleKind, RewardSink, SinkEvent, SoundKind,
        SpawnSink,
    };
    pub use crate::tile::{Tile, TileKind};
    pub use crate::world::{TickReport, World};

    pub use glade_combat::{AttackKind, AttackStyle, SpellKind, SpellSpec, Stat, StatTable, WeaponSpec};
    pub use glade_core::{Handle, Millis, TickClock};
    pub use glade_math::{Rect, Vec2};
}

pub use prelude::*;
