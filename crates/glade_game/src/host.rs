//! World-side hosts handed to the player and enemies for one call
//!
//! Each context is a bundle of split borrows of the world's own fields, so
//! an entity can request spawns and effects without holding references
//! across ticks.

use crate::attack::{flame_positions, AttackSet, Projectile, SpellEffect, WeaponSwing};
use crate::config::GameConfig;
use crate::enemy::EnemyHost;
use crate::player::{Player, PlayerHit, PlayerHost};
use crate::sink::{GameSink, ParticleKind, SoundKind};
use glade_combat::{AttackStyle, SpellCast, SpellKind};
use glade_core::Millis;
use glade_math::Vec2;
use rand::rngs::SmallRng;

/// Where the heal sparkle sits relative to the player's center
const HEAL_PARTICLE_OFFSET: Vec2 = Vec2::new(0.0, -30.0);

pub(crate) struct PlayerContext<'a> {
    pub now: Millis,
    pub config: &'a GameConfig,
    pub attacks: &'a mut AttackSet,
    pub rng: &'a mut SmallRng,
    pub sink: &'a mut dyn GameSink,
}

impl PlayerHost for PlayerContext<'_> {
    fn create_attack(&mut self, player: &Player) {
        let Some(spec) = player.weapon() else {
            return;
        };
        let swing = WeaponSwing::place(player.bounds(), player.facing(), player.weapon_index(), spec);
        log::debug!("{} swing facing {:?} at {:?}", spec.name, swing.facing, swing.hitbox());

        self.sink.spawn_weapon(&swing);
        self.sink.play_sound(SoundKind::WeaponSwing);
        self.attacks.swing = Some(swing);
    }

    fn destroy_attack(&mut self) {
        if self.attacks.swing.take().is_some() {
            self.sink.despawn_weapon();
        }
    }

    fn create_magic(&mut self, player: &mut Player, cast: SpellCast) {
        let cast_ok = match cast.kind {
            SpellKind::Heal => self.heal(player, cast),
            SpellKind::Flame => self.flame(player, cast),
            SpellKind::Shield => self.shield(player, cast),
            SpellKind::EnergyBall => self.energy_ball(player, cast),
        };
        if cast_ok {
            self.sink.spawn_spell(cast.kind, cast.strength, cast.cost);
        } else {
            log::debug!("{} fizzled ({:.1} energy)", cast.kind, player.energy());
        }
    }
}

impl PlayerContext<'_> {
    fn heal(&mut self, player: &mut Player, cast: SpellCast) -> bool {
        if !player.spend_energy(cast.cost) {
            return false;
        }
        let below_max = player.heal(cast.strength);
        let center = player.center();

        self.sink.play_sound(SoundKind::Heal);
        self.sink.play_particle(ParticleKind::Aura, center);
        if below_max {
            self.sink.play_particle(ParticleKind::Heal, center + HEAL_PARTICLE_OFFSET);
        }
        true
    }

    fn flame(&mut self, player: &mut Player, cast: SpellCast) -> bool {
        if !player.spend_energy(cast.cost) {
            return false;
        }
        self.sink.play_sound(SoundKind::Flame);

        let positions = flame_positions(
            player.center(),
            player.facing(),
            self.config.flame_count,
            self.config.tile_size,
            &mut *self.rng,
        );
        for position in positions {
            self.attacks.flames.insert(SpellEffect::new(
                cast.kind,
                cast.strength,
                position,
                self.config.flame_size,
                self.now,
                self.config.flame_lifetime_ms,
            ));
            self.sink.play_particle(ParticleKind::Flame, position);
        }
        true
    }

    fn shield(&mut self, player: &mut Player, cast: SpellCast) -> bool {
        if !player.spend_energy(cast.cost) {
            return false;
        }
        player.raise_shield(self.config.shield_charges);
        self.sink.play_particle(ParticleKind::Shield, player.center());
        true
    }

    fn energy_ball(&mut self, player: &mut Player, cast: SpellCast) -> bool {
        if player.active_projectiles() >= self.config.max_projectiles || !player.spend_energy(cast.cost) {
            return false;
        }
        player.projectile_spawned();

        let position = player.center();
        let handle = self
            .attacks
            .projectiles
            .insert(Projectile::new(cast.strength, position, self.config.projectile_size));
        self.sink.spawn_projectile(handle, position);
        true
    }
}

pub(crate) struct EnemyContext<'a> {
    pub now: Millis,
    pub player: &'a mut Player,
    pub sink: &'a mut dyn GameSink,
}

impl EnemyHost for EnemyContext<'_> {
    fn damage_player(&mut self, amount: f32, style: AttackStyle) {
        self.sink.play_sound(SoundKind::EnemyAttack(style));
        match self.player.take_damage(amount, self.now) {
            PlayerHit::Ignored => {}
            PlayerHit::Absorbed | PlayerHit::Wounded => {
                self.sink.play_particle(ParticleKind::Attack(style), self.player.center());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::sink::{EventLog, SinkEvent};
    use glade_combat::SpellSpec;
    use rand::SeedableRng;
    use std::sync::Arc;

    struct Fixture {
        config: GameConfig,
        attacks: AttackSet,
        rng: SmallRng,
        log: EventLog,
        player: Player,
    }

    impl Fixture {
        fn new() -> Self {
            let config = GameConfig::default();
            let player = Player::new(Vec2::ZERO, &config, Arc::new(Catalog::standard())).unwrap();
            Self {
                attacks: AttackSet::new(),
                rng: SmallRng::seed_from_u64(config.seed),
                log: EventLog::new(),
                player,
                config,
            }
        }

        fn cast(&mut self, kind: SpellKind) {
            let catalog = Catalog::standard();
            let spell: &SpellSpec = &catalog.spells[catalog.spell_index(kind).unwrap()];
            let cast = spell.cast(self.player.magic());
            let mut host = PlayerContext {
                now: 1_000,
                config: &self.config,
                attacks: &mut self.attacks,
                rng: &mut self.rng,
                sink: &mut self.log,
            };
            host.create_magic(&mut self.player, cast);
        }
    }

    #[test]
    fn test_heal() {
        let mut fx = Fixture::new();
        fx.player.take_damage(50.0, 0);
        fx.cast(SpellKind::Heal);

        assert_eq!(fx.player.health(), 74.0);
        assert_eq!(fx.player.energy(), 50.0);
        assert_eq!(fx.log.count(|e| matches!(e, SinkEvent::Particle { kind: ParticleKind::Heal, .. })), 1);

        // Clamped heal still shows the aura but no sparkle
        fx.cast(SpellKind::Heal);
        fx.cast(SpellKind::Heal);
        assert_eq!(fx.player.health(), 100.0);
        assert_eq!(fx.log.count(|e| matches!(e, SinkEvent::Particle { kind: ParticleKind::Aura, .. })), 3);
        assert_eq!(fx.log.count(|e| matches!(e, SinkEvent::Particle { kind: ParticleKind::Heal, .. })), 2);
    }

    #[test]
    fn test_flame_spawns_bolts() {
        let mut fx = Fixture::new();
        fx.cast(SpellKind::Flame);

        assert_eq!(fx.attacks.flames.len(), 5);
        assert_eq!(fx.player.energy(), 40.0);
        assert!(fx.attacks.flames.values().all(|f| f.strength == 9.0));
        assert_eq!(fx.log.count(|e| matches!(e, SinkEvent::SpawnSpell { kind: SpellKind::Flame, .. })), 1);
    }

    #[test]
    fn test_shield_sets_charges() {
        let mut fx = Fixture::new();
        fx.cast(SpellKind::Shield);
        assert_eq!(fx.player.shield_charges(), 3);
        assert_eq!(fx.player.energy(), 45.0);
    }

    #[test]
    fn test_energy_ball_limit() {
        let mut fx = Fixture::new();
        fx.cast(SpellKind::EnergyBall);
        fx.cast(SpellKind::EnergyBall);
        assert_eq!(fx.player.active_projectiles(), 2);
        assert_eq!(fx.player.energy(), 10.0);

        // Out of energy: nothing happens
        fx.cast(SpellKind::EnergyBall);
        assert_eq!(fx.player.active_projectiles(), 2);
        assert_eq!(fx.attacks.projectiles.len(), 2);
        assert_eq!(fx.log.count(|e| matches!(e, SinkEvent::SpawnProjectile { .. })), 2);
        assert!(fx.attacks.projectiles.values().all(|p| p.strength == 14.0));
    }

    #[test]
    fn test_energy_ball_count_cap() {
        let mut fx = Fixture::new();
        for _ in 0..3 {
            fx.player.projectile_spawned();
        }
        fx.cast(SpellKind::EnergyBall);
        assert_eq!(fx.player.energy(), 60.0);
        assert!(fx.attacks.projectiles.is_empty());
    }

    #[test]
    fn test_enemy_strike_on_player() {
        let mut fx = Fixture::new();
        let mut host = EnemyContext {
            now: 0,
            player: &mut fx.player,
            sink: &mut fx.log,
        };
        host.damage_player(20.0, AttackStyle::Claw);
        host.damage_player(20.0, AttackStyle::Claw);

        assert_eq!(fx.player.health(), 80.0);
        assert_eq!(fx.log.count(|e| matches!(e, SinkEvent::Sound(SoundKind::EnemyAttack(_)))), 2);
        assert_eq!(
            fx.log.count(|e| matches!(e, SinkEvent::Particle { kind: ParticleKind::Attack(AttackStyle::Claw), .. })),
            1
        );
    }
}
