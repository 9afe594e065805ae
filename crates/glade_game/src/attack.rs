//! Attacking bodies: melee swings, flame bolts and energy balls

use crate::player::Facing;
use glade_combat::{SpellKind, WeaponSpec};
use glade_core::{Cooldown, Handle, HandleMap, Millis};
use glade_math::{Rect, Vec2};
use glade_physics::SpatialBody;
use rand::Rng;

/// Sideways offset of a horizontal swing from the player's mid-edge
const SWING_OFFSET_SIDE: Vec2 = Vec2::new(0.0, 16.0);
/// Offset of a vertical swing from the player's mid-edge
const SWING_OFFSET_VERTICAL: Vec2 = Vec2::new(-10.0, 0.0);

/// A melee swing beside the player
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeaponSwing {
    /// Catalog index of the weapon swung
    pub weapon: usize,
    pub facing: Facing,
    pub body: SpatialBody,
}

impl WeaponSwing {
    /// Place a swing of `spec` against the player's sprite `bounds`
    pub fn place(bounds: &Rect, facing: Facing, weapon: usize, spec: &WeaponSpec) -> Self {
        let size = if facing.is_vertical() {
            Vec2::new(spec.width, spec.reach)
        } else {
            Vec2::new(spec.reach, spec.width)
        };

        let top_left = match facing {
            Facing::Right => {
                let anchor = bounds.mid_right() + SWING_OFFSET_SIDE;
                Vec2::new(anchor.x, anchor.y - size.y / 2.0)
            }
            Facing::Left => {
                let anchor = bounds.mid_left() + SWING_OFFSET_SIDE;
                Vec2::new(anchor.x - size.x, anchor.y - size.y / 2.0)
            }
            Facing::Down => {
                let anchor = bounds.mid_bottom() + SWING_OFFSET_VERTICAL;
                Vec2::new(anchor.x - size.x / 2.0, anchor.y)
            }
            Facing::Up => {
                let anchor = bounds.mid_top() + SWING_OFFSET_VERTICAL;
                Vec2::new(anchor.x - size.x / 2.0, anchor.y - size.y)
            }
        };

        Self {
            weapon,
            facing,
            body: SpatialBody::from_hitbox(Rect::from_top_left(top_left, size)),
        }
    }

    pub fn hitbox(&self) -> &Rect {
        self.body.hitbox()
    }
}

/// A short-lived spell body (flame bolts)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpellEffect {
    pub kind: SpellKind,
    /// Spell strength including the caster's magic at cast time
    pub strength: f32,
    pub body: SpatialBody,
    lifetime: Cooldown,
}

impl SpellEffect {
    pub fn new(kind: SpellKind, strength: f32, center: Vec2, size: f32, now: Millis, lifetime: Millis) -> Self {
        let mut timer = Cooldown::new(lifetime);
        timer.start(now);
        Self {
            kind,
            strength,
            body: SpatialBody::from_hitbox(Rect::from_center(center, Vec2::splat(size))),
            lifetime: timer,
        }
    }

    pub fn is_expired(&self, now: Millis) -> bool {
        self.lifetime.is_ready(now)
    }
}

/// A placed energy ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projectile {
    /// Strength captured when it was cast
    pub strength: f32,
    pub body: SpatialBody,
}

impl Projectile {
    pub fn new(strength: f32, center: Vec2, size: f32) -> Self {
        Self {
            strength,
            body: SpatialBody::from_hitbox(Rect::from_center(center, Vec2::splat(size))),
        }
    }
}

/// Centers of a flame volley: `count` bolts one tile apart along `facing`,
/// each nudged diagonally by up to a third of a tile
pub fn flame_positions<R: Rng>(origin: Vec2, facing: Facing, count: u32, tile: f32, rng: &mut R) -> Vec<Vec2> {
    let spread = tile / 3.0;
    (1..=count)
        .map(|step| {
            let jitter = rng.gen_range(-spread..=spread);
            origin + facing.vector() * (step as f32 * tile) + Vec2::splat(jitter)
        })
        .collect()
}

/// Which attacking body touched a target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttackerRef {
    Swing,
    Flame(Handle<SpellEffect>),
    Projectile(Handle<Projectile>),
}

/// Every attacking body currently in the world
#[derive(Debug, Default)]
pub struct AttackSet {
    pub swing: Option<WeaponSwing>,
    pub flames: HandleMap<SpellEffect>,
    pub projectiles: HandleMap<Projectile>,
}

impl AttackSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hitboxes of all active attackers, for the contact scan
    pub fn bodies(&self) -> Vec<(AttackerRef, Rect)> {
        let swing = self.swing.iter().map(|s| (AttackerRef::Swing, *s.hitbox()));
        let flames = self.flames.iter().map(|(h, f)| (AttackerRef::Flame(h), *f.body.hitbox()));
        let balls = self
            .projectiles
            .iter()
            .map(|(h, p)| (AttackerRef::Projectile(h), *p.body.hitbox()));
        swing.chain(flames).chain(balls).collect()
    }

    /// Remove flames whose lifetime ran out, returning their handles
    pub fn expire_flames(&mut self, now: Millis) -> Vec<Handle<SpellEffect>> {
        let expired: Vec<_> = self
            .flames
            .iter()
            .filter(|(_, f)| f.is_expired(now))
            .map(|(h, _)| h)
            .collect();
        for handle in &expired {
            self.flames.remove(*handle);
        }
        expired
    }

    pub fn is_empty(&self) -> bool {
        self.swing.is_none() && self.flames.is_empty() && self.projectiles.is_empty()
    }
}
