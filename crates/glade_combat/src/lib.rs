//! Glade Combat - damage, invulnerability, loadouts and upgrades
//!
//! This crate provides the combat rules shared by the player and enemies.
//!
//! # Features
//!
//! - Attack kinds (weapon vs. magic) and damage records
//! - Timed invulnerability windows after taking a hit
//! - Weapon and spell specifications with slot cycling
//! - Experience-gated stat upgrades with exponential growth
//! - Attacker x target overlap scan with deferred removal
//!
//! # Example
//!
//! ```ignore
//! use glade_combat::prelude::*;
//!
//! let mut ledger = UpgradeLedger::new(values, costs, caps, UpgradeRules::default());
//! let mut experience = 250.0;
//! if ledger.try_upgrade(Stat::Attack, &mut experience) {
//!     // stat grew, experience was spent
//! }
//! ```

pub mod damage;
pub mod invulnerability;
pub mod loadout;
pub mod magic;
pub mod resolver;
pub mod stats;
pub mod upgrade;
pub mod weapon;

pub mod prelude {
    pub use crate::damage::{AttackKind, AttackStyle, DamageInfo};
    pub use crate::invulnerability::Invulnerability;
    pub use crate::loadout::SlotCycle;
    pub use crate::magic::{SpellCast, SpellKind, SpellSpec};
    pub use crate::resolver::{scan_contacts, Contact, RemovalSet};
    pub use crate::stats::{Stat, StatTable};
    pub use crate::upgrade::{UpgradeLedger, UpgradeRules};
    pub use crate::weapon::WeaponSpec;
}

pub use prelude::*;
