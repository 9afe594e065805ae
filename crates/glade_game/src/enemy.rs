//! Enemy brains and hit reactions

use crate::catalog::EnemySpec;
use crate::config::GameConfig;
use crate::entity::ActionEntity;
use crate::error::Result;
use glade_ai::{knockback, seek, Perception, SenseRadii, State, StateMachine};
use glade_combat::{AttackStyle, DamageInfo, Invulnerability};
use glade_core::{Cooldown, Millis};
use glade_math::{Rect, Vec2};
use glade_physics::{CollisionResolver, SpatialBody};

/// Enemy AI states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnemyState {
    Idle,
    Pursue,
    Attack,
}

impl State for EnemyState {}

impl EnemyState {
    /// Animation key
    pub fn name(self) -> &'static str {
        match self {
            EnemyState::Idle => "idle",
            EnemyState::Pursue => "move",
            EnemyState::Attack => "attack",
        }
    }
}

/// What an enemy brain sees in one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemySenses {
    pub perception: Perception,
    pub radii: SenseRadii,
    pub attack_ready: bool,
}

/// World-side collaborator for enemy strikes
pub trait EnemyHost {
    fn damage_player(&mut self, amount: f32, style: AttackStyle);
}

/// Result of hitting an enemy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitOutcome {
    /// Invulnerable or already dead
    Ignored,
    Damaged,
    /// This hit killed it; reported once per enemy
    Killed,
}

/// An enemy on the map
#[derive(Debug)]
pub struct Enemy {
    entity: ActionEntity,
    spec: EnemySpec,
    health: f32,
    brain: StateMachine<EnemyState, EnemySenses>,
    attack_cooldown: Cooldown,
    invulnerability: Invulnerability,
    /// Heading toward the source of the last accepted hit
    hit_heading: Vec2,
    alive: bool,
}

fn brain() -> StateMachine<EnemyState, EnemySenses> {
    let mut brain = StateMachine::new(EnemyState::Idle, EnemyState::Idle);
    brain.add_rule_priority(
        EnemyState::Attack,
        |s: &EnemySenses| s.attack_ready && s.radii.in_attack_range(&s.perception),
        10,
    );
    brain.add_rule(EnemyState::Pursue, |s: &EnemySenses| {
        s.radii.in_notice_range(&s.perception)
    });
    brain
}

impl Enemy {
    /// Create an enemy of `spec`'s kind with its sprite's top-left at `position`
    pub fn new(spec: &EnemySpec, position: Vec2, config: &GameConfig) -> Result<Self> {
        let bounds = Rect::new(position.x, position.y, config.tile_size, config.tile_size);
        let body = SpatialBody::new(bounds, Vec2::new(0.0, config.enemy_hitbox_inset))?;
        Ok(Self {
            entity: ActionEntity::new(body, config.enemy_animation_speed),
            spec: spec.clone(),
            health: spec.health,
            brain: brain(),
            attack_cooldown: Cooldown::new(config.enemy_attack_cooldown_ms),
            invulnerability: Invulnerability::new(config.enemy_invulnerability_ms),
            hit_heading: Vec2::ZERO,
            alive: true,
        })
    }

    /// Pick this tick's state from the player's position and act on it.
    ///
    /// Rewrites the movement direction every tick; `step` overrides it with
    /// the knockback heading while the invulnerability window is open.
    pub fn think(&mut self, now: Millis, player: Vec2, host: &mut dyn EnemyHost) {
        if !self.alive {
            return;
        }

        let senses = EnemySenses {
            perception: Perception::between(self.center(), player),
            radii: self.spec.radii(),
            attack_ready: self.attack_cooldown.is_ready(now),
        };
        if let Some(entered) = self.brain.evaluate(&senses) {
            log::trace!("{} -> {:?}", self.spec.name, entered);
        }

        match self.brain.current() {
            EnemyState::Attack => {
                // The rule only admits this state while ready, so every tick
                // spent here is a fresh strike
                self.entity.reset_frame();
                self.attack_cooldown.start(now);
                self.entity.direction = Vec2::ZERO;
                host.damage_player(self.spec.damage, self.spec.attack_style);
            }
            EnemyState::Pursue => self.entity.direction = senses.perception.direction,
            EnemyState::Idle => self.entity.direction = Vec2::ZERO,
        }
    }

    /// Hit reaction, movement and animation.
    ///
    /// While invulnerable the enemy is pushed away from whatever hit it,
    /// whatever state its brain is in.
    pub fn step(&mut self, now: Millis, resolver: &CollisionResolver<'_>) {
        if !self.alive {
            return;
        }
        if !self.invulnerability.is_vulnerable(now) {
            self.entity.direction = knockback(self.hit_heading, self.spec.resistance);
        }
        self.entity.move_step(resolver, self.spec.speed);
        self.entity.animate();
        self.invulnerability.refresh(now);
    }

    /// Take a hit at `now`
    pub fn receive_hit(&mut self, damage: &DamageInfo, now: Millis) -> HitOutcome {
        if !self.alive {
            return HitOutcome::Ignored;
        }
        if !self.invulnerability.try_accept(now) {
            log::debug!("{} ignored hit while invulnerable", self.spec.name);
            return HitOutcome::Ignored;
        }

        self.health -= damage.amount;
        self.hit_heading = seek(self.center(), damage.source);
        self.entity.direction = self.hit_heading;

        if self.health <= 0.0 {
            self.alive = false;
            log::info!("{} died at {:?}", self.spec.name, self.center());
            HitOutcome::Killed
        } else {
            HitOutcome::Damaged
        }
    }

    pub fn kind(&self) -> &str {
        &self.spec.name
    }

    pub fn spec(&self) -> &EnemySpec {
        &self.spec
    }

    pub fn health(&self) -> f32 {
        self.health.max(0.0)
    }

    /// Experience granted on death
    pub fn exp(&self) -> f32 {
        self.spec.exp
    }

    pub fn state(&self) -> EnemyState {
        self.brain.current()
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn attack_ready(&self, now: Millis) -> bool {
        self.attack_cooldown.is_ready(now)
    }

    pub fn is_vulnerable(&self, now: Millis) -> bool {
        self.invulnerability.is_vulnerable(now)
    }

    pub fn flicker_alpha(&self, now: Millis) -> u8 {
        self.invulnerability.flicker_alpha(now)
    }

    pub fn direction(&self) -> Vec2 {
        self.entity.direction
    }

    pub fn entity(&self) -> &ActionEntity {
        &self.entity
    }

    pub fn set_frame_count(&mut self, count: usize) {
        self.entity.set_frame_count(count);
    }

    pub fn center(&self) -> Vec2 {
        self.entity.center()
    }

    pub fn hitbox(&self) -> &Rect {
        self.entity.hitbox()
    }
}
