//! The world: entity collections and the fixed-order tick
//!
//! A tick runs, in order: pause toggle, player update, enemy think and
//! step, flame expiry, then the combat pass. Combat defers every removal
//! to the end of the pass so no handle is reused while contacts are still
//! being dispatched.

use crate::attack::{AttackSet, AttackerRef};
use crate::catalog::Catalog;
use crate::config::GameConfig;
use crate::enemy::{Enemy, HitOutcome};
use crate::error::{GameError, Result};
use crate::host::{EnemyContext, PlayerContext};
use crate::input::InputSnapshot;
use crate::menu::UpgradeMenu;
use crate::player::Player;
use crate::sink::{EntityRef, GameSink, ParticleKind, SoundKind};
use crate::tile::{Tile, TileKind};
use glade_combat::{scan_contacts, AttackKind, DamageInfo, RemovalSet, Stat};
use glade_core::{Handle, HandleMap, Millis};
use glade_math::{Rect, Vec2};
use glade_physics::CollisionResolver;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;

/// Leaves fall from above the cut grass
const LEAF_OFFSET: Vec2 = Vec2::new(0.0, -75.0);

/// Anything attacks can hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum TargetRef {
    Enemy(Handle<Enemy>),
    Tile(Handle<Tile>),
}

/// Summary of one tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickReport {
    /// The tick only ran the upgrade menu
    pub paused: bool,
    pub enemies_killed: usize,
    pub tiles_destroyed: usize,
    pub experience_gained: f32,
    /// Stat bought in the upgrade menu
    pub upgraded: Option<Stat>,
    pub player_dead: bool,
}

/// Owns every entity and runs the simulation
#[derive(Debug)]
pub struct World {
    config: GameConfig,
    catalog: Arc<Catalog>,
    player: Player,
    enemies: HandleMap<Enemy>,
    tiles: HandleMap<Tile>,
    attacks: AttackSet,
    obstacles: Vec<Rect>,
    obstacles_dirty: bool,
    menu: UpgradeMenu,
    paused: bool,
    menu_held: bool,
    rng: SmallRng,
}

impl World {
    /// Create a world with the player's sprite at `player_cell`
    pub fn new(config: GameConfig, catalog: Arc<Catalog>, player_cell: Vec2) -> Result<Self> {
        config.validate()?;
        catalog.validate()?;

        let player = Player::new(player_cell, &config, Arc::clone(&catalog))?;
        log::info!(
            "world created: {} weapons, {} spells, {} enemy kinds",
            catalog.weapons.len(),
            catalog.spells.len(),
            catalog.enemies.len()
        );

        Ok(Self {
            menu: UpgradeMenu::new(config.menu_lock_ms),
            rng: SmallRng::seed_from_u64(config.seed),
            player,
            enemies: HandleMap::new(),
            tiles: HandleMap::new(),
            attacks: AttackSet::new(),
            obstacles: Vec::new(),
            obstacles_dirty: true,
            paused: false,
            menu_held: false,
            config,
            catalog,
        })
    }

    /// Place a tile on the grid cell whose top-left corner is `cell`
    pub fn add_tile(&mut self, kind: TileKind, cell: Vec2) -> Result<Handle<Tile>> {
        let tile = Tile::new(kind, cell, &self.config)?;
        let handle = self.tiles.insert(tile);
        self.obstacles_dirty = true;
        log::trace!("{:?} tile at {:?}", kind, cell);
        Ok(handle)
    }

    /// Spawn an enemy of a catalog kind at `cell`
    pub fn spawn_enemy(&mut self, kind: &str, cell: Vec2) -> Result<Handle<Enemy>> {
        let spec = self.catalog.enemy(kind).ok_or_else(|| {
            log::warn!("unknown enemy kind '{}'", kind);
            GameError::UnknownEnemyKind(kind.to_string())
        })?;
        let enemy = Enemy::new(spec, cell, &self.config)?;
        let handle = self.enemies.insert(enemy);
        log::debug!("spawned {} as {:?}", kind, handle);
        Ok(handle)
    }

    /// Remove an enemy outside of combat (scripted despawn). No reward.
    pub fn despawn_enemy(&mut self, handle: Handle<Enemy>, sink: &mut dyn GameSink) -> bool {
        if self.enemies.remove(handle).is_none() {
            return false;
        }
        sink.despawn_entity(EntityRef::Enemy(handle));
        true
    }

    /// Advance the simulation to `now`
    pub fn tick(&mut self, now: Millis, input: &InputSnapshot, sink: &mut dyn GameSink) -> TickReport {
        let toggled = input.menu && !self.menu_held;
        self.menu_held = input.menu;
        if toggled {
            self.paused = !self.paused;
            log::info!("{}", if self.paused { "paused" } else { "resumed" });
        }

        if self.paused {
            let upgraded = self.menu.handle(now, input, &mut self.player);
            return TickReport {
                paused: true,
                upgraded,
                player_dead: self.player.is_dead(),
                ..Default::default()
            };
        }

        self.refresh_obstacles();
        let resolver = CollisionResolver::new(&self.obstacles);

        let mut host = PlayerContext {
            now,
            config: &self.config,
            attacks: &mut self.attacks,
            rng: &mut self.rng,
            sink: &mut *sink,
        };
        self.player.update(now, input, &resolver, &mut host);

        let target = self.player.center();
        for (_, enemy) in self.enemies.iter_mut() {
            let mut host = EnemyContext {
                now,
                player: &mut self.player,
                sink: &mut *sink,
            };
            enemy.think(now, target, &mut host);
            enemy.step(now, &resolver);
        }

        for flame in self.attacks.expire_flames(now) {
            sink.despawn_entity(EntityRef::Flame(flame));
        }

        let mut report = self.resolve_combat(now, sink);
        report.player_dead = self.player.is_dead();
        report
    }

    fn refresh_obstacles(&mut self) {
        if !self.obstacles_dirty {
            return;
        }
        self.obstacles.clear();
        self.obstacles.extend(self.tiles.values().map(|t| *t.hitbox()));
        self.obstacles_dirty = false;
    }

    fn resolve_combat(&mut self, now: Millis, sink: &mut dyn GameSink) -> TickReport {
        let mut report = TickReport::default();
        let attackers = self.attacks.bodies();
        if attackers.is_empty() {
            return report;
        }

        let enemies = self
            .enemies
            .iter()
            .filter(|(_, e)| e.is_alive())
            .map(|(h, e)| (TargetRef::Enemy(h), *e.hitbox()));
        let grass = self
            .tiles
            .iter()
            .filter(|(_, t)| t.kind.is_destructible())
            .map(|(h, t)| (TargetRef::Tile(h), *t.hitbox()));
        let targets: Vec<_> = enemies.chain(grass).collect();

        let mut dead = RemovalSet::new();
        let mut cut = RemovalSet::new();
        let mut spent = RemovalSet::new();

        for contact in scan_contacts(&attackers, &targets) {
            if let AttackerRef::Projectile(ball) = contact.attacker {
                if spent.is_marked(&ball) {
                    continue;
                }
            }

            match contact.target {
                TargetRef::Tile(tile) => {
                    if cut.mark(tile) {
                        if let Some(center) = self.tiles.get(tile).map(Tile::center) {
                            self.scatter_leaves(center, sink);
                        }
                    }
                }
                TargetRef::Enemy(handle) => {
                    if dead.is_marked(&handle) {
                        continue;
                    }
                    let Some(damage) = self.damage_from(contact.attacker) else {
                        continue;
                    };
                    if let AttackerRef::Projectile(ball) = contact.attacker {
                        spent.mark(ball);
                        self.player.projectile_released();
                    }
                    let Some(enemy) = self.enemies.get_mut(handle) else {
                        continue;
                    };

                    match enemy.receive_hit(&damage, now) {
                        HitOutcome::Ignored => {}
                        HitOutcome::Damaged => sink.play_sound(SoundKind::Hit),
                        HitOutcome::Killed => {
                            dead.mark(handle);
                            let exp = enemy.exp();
                            sink.play_sound(SoundKind::Death);
                            sink.play_particle(ParticleKind::Death(enemy.kind().to_string()), enemy.center());
                            self.player.add_experience(exp);
                            sink.grant_experience(exp);
                            report.experience_gained += exp;
                        }
                    }
                }
            }
        }

        for ball in spent.drain() {
            self.attacks.projectiles.remove(ball);
            sink.despawn_entity(EntityRef::Projectile(ball));
        }
        for tile in cut.drain() {
            self.tiles.remove(tile);
            self.obstacles_dirty = true;
            report.tiles_destroyed += 1;
            sink.despawn_entity(EntityRef::Tile(tile));
        }
        for enemy in dead.drain() {
            self.enemies.remove(enemy);
            report.enemies_killed += 1;
            sink.despawn_entity(EntityRef::Enemy(enemy));
        }
        report
    }

    fn damage_from(&self, attacker: AttackerRef) -> Option<DamageInfo> {
        match attacker {
            AttackerRef::Swing => {
                let swing = self.attacks.swing.as_ref()?;
                let weapon = self.catalog.weapon(swing.weapon)?;
                Some(DamageInfo::melee(
                    self.player.attack_power(),
                    weapon.damage,
                    self.player.center(),
                ))
            }
            AttackerRef::Flame(handle) => {
                let flame = self.attacks.flames.get(handle)?;
                Some(DamageInfo::new(flame.strength, AttackKind::Magic, flame.body.center()))
            }
            AttackerRef::Projectile(handle) => {
                let ball = self.attacks.projectiles.get(handle)?;
                Some(DamageInfo::new(ball.strength, AttackKind::Magic, ball.body.center()))
            }
        }
    }

    fn scatter_leaves(&mut self, center: Vec2, sink: &mut dyn GameSink) {
        let (min, max) = self.config.grass_particles;
        let count = self.rng.gen_range(min..=max);
        for _ in 0..count {
            sink.play_particle(ParticleKind::Leaf, center + LEAF_OFFSET);
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn enemy(&self, handle: Handle<Enemy>) -> Option<&Enemy> {
        self.enemies.get(handle)
    }

    pub fn enemy_mut(&mut self, handle: Handle<Enemy>) -> Option<&mut Enemy> {
        self.enemies.get_mut(handle)
    }

    pub fn enemies(&self) -> &HandleMap<Enemy> {
        &self.enemies
    }

    pub fn tile(&self, handle: Handle<Tile>) -> Option<&Tile> {
        self.tiles.get(handle)
    }

    pub fn tiles(&self) -> &HandleMap<Tile> {
        &self.tiles
    }

    pub fn attacks(&self) -> &AttackSet {
        &self.attacks
    }

    pub fn menu(&self) -> &UpgradeMenu {
        &self.menu
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }
}
