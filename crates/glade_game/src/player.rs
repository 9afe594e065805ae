//! The player controller
//!
//! Input is mapped to a `{facing, mode}` state each tick. Attacks and casts
//! are handed to a [`PlayerHost`] so the world can spawn swing bodies and
//! resolve spells without the player owning any other entity.

use crate::catalog::Catalog;
use crate::config::GameConfig;
use crate::entity::ActionEntity;
use crate::error::Result;
use crate::input::InputSnapshot;
use glade_combat::{AttackKind, Invulnerability, SlotCycle, SpellCast, SpellSpec, Stat, UpgradeLedger, WeaponSpec};
use glade_core::{Cooldown, Millis};
use glade_math::{Rect, Vec2};
use glade_physics::{CollisionResolver, SpatialBody};
use std::fmt;
use std::sync::Arc;

/// Which way the player looks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facing {
    Up,
    Down,
    Left,
    Right,
}

impl Facing {
    /// Unit vector pointing the way the player faces
    pub fn vector(self) -> Vec2 {
        match self {
            Facing::Up => Vec2::NEG_Y,
            Facing::Down => Vec2::Y,
            Facing::Left => Vec2::NEG_X,
            Facing::Right => Vec2::X,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Facing::Up => "up",
            Facing::Down => "down",
            Facing::Left => "left",
            Facing::Right => "right",
        }
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Facing::Up | Facing::Down)
    }
}

/// What the player is doing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Idle,
    Moving,
    Attacking,
}

/// Compound player state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayerState {
    pub facing: Facing,
    pub mode: Mode,
}

impl fmt::Display for PlayerState {
    /// Animation key, e.g. `down_idle` or `left_attack`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mode {
            Mode::Moving => f.write_str(self.facing.name()),
            Mode::Idle => write!(f, "{}_idle", self.facing.name()),
            Mode::Attacking => write!(f, "{}_attack", self.facing.name()),
        }
    }
}

/// Result of an enemy strike on the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerHit {
    /// Invulnerable, nothing happened
    Ignored,
    /// A shield charge took the hit
    Absorbed,
    /// Health was lost
    Wounded,
}

/// World-side collaborator for the player's attacks
pub trait PlayerHost {
    /// A melee swing started; spawn the weapon body
    fn create_attack(&mut self, player: &Player);

    /// The melee swing recovered; remove the weapon body
    fn destroy_attack(&mut self);

    /// A spell was cast; apply its effect. Energy has not been checked.
    fn create_magic(&mut self, player: &mut Player, cast: SpellCast);
}

/// The player character
#[derive(Debug, Clone)]
pub struct Player {
    entity: ActionEntity,
    state: PlayerState,
    catalog: Arc<Catalog>,
    ledger: UpgradeLedger,
    health: f32,
    energy: f32,
    experience: f32,
    weapon: SlotCycle,
    magic: SlotCycle,
    attack: Option<AttackKind>,
    recovery: Cooldown,
    base_recovery: Millis,
    invulnerability: Invulnerability,
    shield_charges: u32,
    speed_boost: f32,
    active_projectiles: u32,
    energy_regen_factor: f32,
}

impl Player {
    /// Create the player with its sprite's top-left corner at `position`
    pub fn new(position: Vec2, config: &GameConfig, catalog: Arc<Catalog>) -> Result<Self> {
        let bounds = Rect::new(position.x, position.y, config.tile_size, config.tile_size);
        let body = SpatialBody::new(bounds, Vec2::new(0.0, config.player_hitbox_inset))?;
        let ledger = UpgradeLedger::new(
            config.base_stats,
            config.upgrade_costs,
            config.max_stats,
            config.upgrade_rules,
        );

        Ok(Self {
            entity: ActionEntity::new(body, config.player_animation_speed),
            state: PlayerState {
                facing: Facing::Down,
                mode: Mode::Idle,
            },
            health: ledger.value(Stat::Health),
            energy: ledger.value(Stat::Energy),
            experience: config.starting_experience,
            weapon: SlotCycle::new(catalog.weapons.len(), config.weapon_switch_ms),
            magic: SlotCycle::new(catalog.spells.len(), config.magic_switch_ms),
            catalog,
            ledger,
            attack: None,
            recovery: Cooldown::new(config.attack_cooldown_ms),
            base_recovery: config.attack_cooldown_ms,
            invulnerability: Invulnerability::new(config.dodge_ms),
            shield_charges: 0,
            speed_boost: 0.0,
            active_projectiles: 0,
            energy_regen_factor: config.energy_regen_factor,
        })
    }

    /// Run one tick: input, cooldowns, state, animation, movement, regeneration
    pub fn update(
        &mut self,
        now: Millis,
        input: &InputSnapshot,
        resolver: &CollisionResolver<'_>,
        host: &mut dyn PlayerHost,
    ) {
        self.health = self.health.max(0.0);
        self.energy = self.energy.max(0.0);

        self.handle_input(now, input, host);
        self.cooldowns(now, host);
        self.update_state();
        self.entity.animate();

        let speed = self.speed();
        self.entity.move_step(resolver, speed);
        self.regenerate_energy();
    }

    fn handle_input(&mut self, now: Millis, input: &InputSnapshot, host: &mut dyn PlayerHost) {
        if input.next_weapon {
            if let Some(index) = self.weapon.try_advance(now) {
                log::debug!("weapon slot -> {}", index);
            }
        }
        if input.next_spell {
            if let Some(index) = self.magic.try_advance(now) {
                log::debug!("spell slot -> {}", index);
            }
        }

        if self.attack.is_some() {
            return;
        }

        let direction = input.direction();
        if direction.x < 0.0 {
            self.state.facing = Facing::Left;
        } else if direction.x > 0.0 {
            self.state.facing = Facing::Right;
        }
        if direction.y < 0.0 {
            self.state.facing = Facing::Up;
        } else if direction.y > 0.0 {
            self.state.facing = Facing::Down;
        }
        self.entity.direction = direction;

        if input.attack {
            let cooldown = self.weapon().map_or(0, |w| w.cooldown);
            self.begin_attack(now, AttackKind::Weapon, cooldown);
            host.create_attack(self);
        } else if input.cast {
            let Some((cast, cooldown)) = self.spell().map(|s| (s.cast(self.magic()), s.cooldown)) else {
                return;
            };
            self.begin_attack(now, AttackKind::Magic, cooldown);
            host.create_magic(self, cast);
        }
    }

    fn begin_attack(&mut self, now: Millis, kind: AttackKind, extra: Millis) {
        self.attack = Some(kind);
        self.recovery.start_for(now, self.base_recovery + extra);
        self.entity.direction = Vec2::ZERO;
        self.entity.reset_frame();
    }

    fn cooldowns(&mut self, now: Millis, host: &mut dyn PlayerHost) {
        if self.attack.is_some() && self.recovery.expire(now) {
            if self.attack.take() == Some(AttackKind::Weapon) {
                host.destroy_attack();
            }
        }
        self.invulnerability.refresh(now);
    }

    fn update_state(&mut self) {
        self.state.mode = if self.attack.is_some() {
            self.entity.direction = Vec2::ZERO;
            Mode::Attacking
        } else if self.entity.direction.is_zero() {
            Mode::Idle
        } else {
            Mode::Moving
        };
    }

    fn regenerate_energy(&mut self) {
        let max = self.max_energy();
        if self.energy < max {
            self.energy += self.energy_regen_factor * self.magic();
        }
        self.energy = self.energy.min(max);
    }

    /// Apply an enemy strike at `now`
    pub fn take_damage(&mut self, amount: f32, now: Millis) -> PlayerHit {
        if !self.invulnerability.try_accept(now) {
            return PlayerHit::Ignored;
        }
        if self.shield_charges > 0 {
            self.shield_charges -= 1;
            log::debug!("shield absorbed {} damage, {} charges left", amount, self.shield_charges);
            PlayerHit::Absorbed
        } else {
            self.health -= amount;
            PlayerHit::Wounded
        }
    }

    /// Spend the upgrade ledger's price for `stat` if affordable
    pub fn try_upgrade(&mut self, stat: Stat) -> bool {
        self.ledger.try_upgrade(stat, &mut self.experience)
    }

    pub fn add_experience(&mut self, amount: f32) {
        self.experience += amount;
    }

    /// Add to movement speed on top of the speed stat
    pub fn grant_speed_boost(&mut self, amount: f32) {
        self.speed_boost += amount;
    }

    /// Spend `cost` energy if available
    pub fn spend_energy(&mut self, cost: f32) -> bool {
        if self.energy < cost {
            return false;
        }
        self.energy -= cost;
        true
    }

    /// Restore health up to the maximum.
    ///
    /// Returns false when the heal was clamped at the maximum.
    pub fn heal(&mut self, amount: f32) -> bool {
        let max = self.max_health();
        self.health += amount;
        if self.health >= max {
            self.health = max;
            return false;
        }
        true
    }

    pub fn raise_shield(&mut self, charges: u32) {
        self.shield_charges = charges;
    }

    pub(crate) fn projectile_spawned(&mut self) {
        self.active_projectiles += 1;
    }

    pub(crate) fn projectile_released(&mut self) {
        self.active_projectiles = self.active_projectiles.saturating_sub(1);
    }

    pub fn state(&self) -> PlayerState {
        self.state
    }

    pub fn facing(&self) -> Facing {
        self.state.facing
    }

    pub fn is_attacking(&self) -> bool {
        self.attack.is_some()
    }

    pub fn attack_kind(&self) -> Option<AttackKind> {
        self.attack
    }

    pub fn health(&self) -> f32 {
        self.health.max(0.0)
    }

    pub fn energy(&self) -> f32 {
        self.energy.max(0.0)
    }

    pub fn experience(&self) -> f32 {
        self.experience
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0.0
    }

    pub fn stat(&self, stat: Stat) -> f32 {
        self.ledger.value(stat)
    }

    pub fn ledger(&self) -> &UpgradeLedger {
        &self.ledger
    }

    pub fn max_health(&self) -> f32 {
        self.stat(Stat::Health)
    }

    pub fn max_energy(&self) -> f32 {
        self.stat(Stat::Energy)
    }

    pub fn attack_power(&self) -> f32 {
        self.stat(Stat::Attack)
    }

    pub fn magic(&self) -> f32 {
        self.stat(Stat::Magic)
    }

    /// Movement speed this tick
    pub fn speed(&self) -> f32 {
        self.stat(Stat::Speed) + self.speed_boost
    }

    pub fn weapon_index(&self) -> usize {
        self.weapon.index()
    }

    pub fn spell_index(&self) -> usize {
        self.magic.index()
    }

    pub fn weapon(&self) -> Option<&WeaponSpec> {
        self.catalog.weapon(self.weapon.index())
    }

    pub fn spell(&self) -> Option<&SpellSpec> {
        self.catalog.spell(self.magic.index())
    }

    pub fn can_switch_weapon(&self, now: Millis) -> bool {
        self.weapon.can_switch(now)
    }

    pub fn can_switch_spell(&self, now: Millis) -> bool {
        self.magic.can_switch(now)
    }

    pub fn is_vulnerable(&self, now: Millis) -> bool {
        self.invulnerability.is_vulnerable(now)
    }

    /// Sprite opacity for the damage flicker
    pub fn flicker_alpha(&self, now: Millis) -> u8 {
        self.invulnerability.flicker_alpha(now)
    }

    pub fn shield_charges(&self) -> u32 {
        self.shield_charges
    }

    pub fn active_projectiles(&self) -> u32 {
        self.active_projectiles
    }

    pub fn entity(&self) -> &ActionEntity {
        &self.entity
    }

    /// Let the render layer set the frame count of the current animation
    pub fn set_frame_count(&mut self, count: usize) {
        self.entity.set_frame_count(count);
    }

    pub fn center(&self) -> Vec2 {
        self.entity.center()
    }

    pub fn hitbox(&self) -> &Rect {
        self.entity.hitbox()
    }

    /// Sprite bounds (weapon swings are placed against these)
    pub fn bounds(&self) -> &Rect {
        self.entity.body().bounds()
    }
}
