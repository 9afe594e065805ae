//! Outbound interfaces to the presentation layer
//!
//! The simulation never draws, plays audio or owns sprites. It reports what
//! happened through these traits and the front end reacts.

use crate::attack::{Projectile, SpellEffect, WeaponSwing};
use crate::enemy::Enemy;
use crate::player::Facing;
use crate::tile::Tile;
use glade_combat::{AttackStyle, SpellKind};
use glade_core::Handle;
use glade_math::Vec2;

/// Any world entity that can be despawned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityRef {
    Enemy(Handle<Enemy>),
    Tile(Handle<Tile>),
    Flame(Handle<SpellEffect>),
    Projectile(Handle<Projectile>),
}

/// Cosmetic particle effects
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParticleKind {
    /// Cut grass
    Leaf,
    /// Around the player on any heal
    Aura,
    /// Above the player on an unclamped heal
    Heal,
    Flame,
    Shield,
    /// An enemy strike landing on the player
    Attack(AttackStyle),
    /// Enemy death, by enemy kind name
    Death(String),
}

/// Sound cues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundKind {
    WeaponSwing,
    Heal,
    Flame,
    Hit,
    Death,
    EnemyAttack(AttackStyle),
}

/// Creation and removal of visible bodies
pub trait SpawnSink {
    /// A melee swing appeared beside the player
    fn spawn_weapon(&mut self, swing: &WeaponSwing);

    /// The current melee swing ended
    fn despawn_weapon(&mut self);

    /// A spell was cast successfully
    fn spawn_spell(&mut self, kind: SpellKind, strength: f32, cost: f32);

    /// An energy ball was placed
    fn spawn_projectile(&mut self, handle: Handle<Projectile>, position: Vec2);

    /// An entity left the world
    fn despawn_entity(&mut self, entity: EntityRef);
}

/// Fire-and-forget presentation effects
pub trait EffectSink {
    fn play_particle(&mut self, kind: ParticleKind, position: Vec2);

    fn play_sound(&mut self, kind: SoundKind);
}

/// Experience notifications
pub trait RewardSink {
    fn grant_experience(&mut self, amount: f32);
}

/// Everything the world reports during a tick
pub trait GameSink: SpawnSink + EffectSink + RewardSink {}

impl<T: SpawnSink + EffectSink + RewardSink + ?Sized> GameSink for T {}

/// One recorded sink call
#[derive(Debug, Clone, PartialEq)]
pub enum SinkEvent {
    SpawnWeapon { weapon: usize, facing: Facing },
    DespawnWeapon,
    SpawnSpell { kind: SpellKind, strength: f32, cost: f32 },
    SpawnProjectile { handle: Handle<Projectile>, position: Vec2 },
    DespawnEntity(EntityRef),
    Particle { kind: ParticleKind, position: Vec2 },
    Sound(SoundKind),
    Experience(f32),
}

/// Sink that records every call in order
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<SinkEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[SinkEvent] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of recorded events matching `predicate`
    pub fn count(&self, predicate: impl Fn(&SinkEvent) -> bool) -> usize {
        self.events.iter().filter(|e| predicate(e)).count()
    }

    /// Sum of all granted experience
    pub fn experience_granted(&self) -> f32 {
        self.events
            .iter()
            .filter_map(|e| match e {
                SinkEvent::Experience(amount) => Some(*amount),
                _ => None,
            })
            .sum()
    }

    /// Entities despawned, in order
    pub fn despawned(&self) -> Vec<EntityRef> {
        self.events
            .iter()
            .filter_map(|e| match e {
                SinkEvent::DespawnEntity(entity) => Some(*entity),
                _ => None,
            })
            .collect()
    }
}

impl SpawnSink for EventLog {
    fn spawn_weapon(&mut self, swing: &WeaponSwing) {
        self.events.push(SinkEvent::SpawnWeapon {
            weapon: swing.weapon,
            facing: swing.facing,
        });
    }

    fn despawn_weapon(&mut self) {
        self.events.push(SinkEvent::DespawnWeapon);
    }

    fn spawn_spell(&mut self, kind: SpellKind, strength: f32, cost: f32) {
        self.events.push(SinkEvent::SpawnSpell { kind, strength, cost });
    }

    fn spawn_projectile(&mut self, handle: Handle<Projectile>, position: Vec2) {
        self.events.push(SinkEvent::SpawnProjectile { handle, position });
    }

    fn despawn_entity(&mut self, entity: EntityRef) {
        self.events.push(SinkEvent::DespawnEntity(entity));
    }
}

impl EffectSink for EventLog {
    fn play_particle(&mut self, kind: ParticleKind, position: Vec2) {
        self.events.push(SinkEvent::Particle { kind, position });
    }

    fn play_sound(&mut self, kind: SoundKind) {
        self.events.push(SinkEvent::Sound(kind));
    }
}

impl RewardSink for EventLog {
    fn grant_experience(&mut self, amount: f32) {
        self.events.push(SinkEvent::Experience(amount));
    }
}

/// Sink that discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl SpawnSink for NullSink {
    fn spawn_weapon(&mut self, _swing: &WeaponSwing) {}
    fn despawn_weapon(&mut self) {}
    fn spawn_spell(&mut self, _kind: SpellKind, _strength: f32, _cost: f32) {}
    fn spawn_projectile(&mut self, _handle: Handle<Projectile>, _position: Vec2) {}
    fn despawn_entity(&mut self, _entity: EntityRef) {}
}

impl EffectSink for NullSink {
    fn play_particle(&mut self, _kind: ParticleKind, _position: Vec2) {}
    fn play_sound(&mut self, _kind: SoundKind) {}
}

impl RewardSink for NullSink {
    fn grant_experience(&mut self, _amount: f32) {}
}
