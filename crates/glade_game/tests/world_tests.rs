//! Integration tests for glade_game
//!
//! Drives whole ticks through `World` and checks what reaches the sink.

use approx::assert_relative_eq;
use glade_game::prelude::*;
use std::sync::Arc;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn training_dummy(name: &str, health: f32, exp: f32) -> EnemySpec {
    EnemySpec {
        name: name.to_string(),
        health,
        exp,
        damage: 0.0,
        attack_style: AttackStyle::Slash,
        speed: 1.0,
        resistance: 3.0,
        attack_radius: 0.0,
        notice_radius: 0.0,
    }
}

/// Standard tables plus a 13-damage club in the first slot and enemies
/// that never notice the player
fn arena_catalog() -> Catalog {
    let mut catalog = Catalog::standard();
    catalog.weapons.insert(0, WeaponSpec::new("club", 13.0, 100));
    catalog.enemies.push(training_dummy("dummy", 10.0, 42.0));
    catalog.enemies.push(training_dummy("wisp", 5.0, 7.0));
    catalog.enemies.push(training_dummy("post", 100.0, 1.0));
    catalog
}

fn arena() -> World {
    init_logging();
    let config = GameConfig::default().with_base_stats(StatTable::new(100.0, 60.0, 0.0, 4.0, 5.0));
    World::new(config, Arc::new(arena_catalog()), Vec2::ZERO).unwrap()
}

fn experience_events(log: &EventLog) -> usize {
    log.count(|e| matches!(e, SinkEvent::Experience(_)))
}

#[test]
fn test_melee_kill_dispatches_one_death() {
    let mut world = arena();
    let mut log = EventLog::new();
    let dummy = world.spawn_enemy("dummy", Vec2::new(0.0, 64.0)).unwrap();

    let report = world.tick(0, &InputSnapshot::idle().with_attack(), &mut log);
    assert_eq!(report.enemies_killed, 1);
    assert_eq!(report.experience_gained, 42.0);
    assert!(world.enemy(dummy).is_none());

    // The swing stays out until 600 + 100 ms; nothing else dies
    for now in (16..=720).step_by(16) {
        world.tick(now, &InputSnapshot::idle(), &mut log);
    }

    assert_eq!(experience_events(&log), 1);
    assert_eq!(log.experience_granted(), 42.0);
    assert_eq!(world.player().experience(), 162.0);
    assert_eq!(log.despawned(), vec![EntityRef::Enemy(dummy)]);
    assert_eq!(log.count(|e| matches!(e, SinkEvent::SpawnWeapon { weapon: 0, facing: Facing::Down })), 1);
    assert_eq!(log.count(|e| matches!(e, SinkEvent::DespawnWeapon)), 1);
    assert_eq!(log.count(|e| matches!(e, SinkEvent::Sound(SoundKind::Death))), 1);
}

#[test]
fn test_simultaneous_deaths_each_reward_once() {
    let mut world = arena();
    let mut log = EventLog::new();
    let handles: Vec<_> = (0..3)
        .map(|_| world.spawn_enemy("dummy", Vec2::new(0.0, 64.0)).unwrap())
        .collect();

    let report = world.tick(0, &InputSnapshot::idle().with_attack(), &mut log);
    assert_eq!(report.enemies_killed, 3);
    assert!(world.enemies().is_empty());
    assert_eq!(experience_events(&log), 3);
    assert_eq!(log.experience_granted(), 126.0);

    let despawned = log.despawned();
    assert_eq!(despawned.len(), 3);
    for handle in handles {
        assert!(despawned.contains(&EntityRef::Enemy(handle)));
    }

    // Freed slots come back with a new generation
    let fresh = world.spawn_enemy("post", Vec2::new(512.0, 512.0)).unwrap();
    assert!(!despawned.contains(&EntityRef::Enemy(fresh)));
}

#[test]
fn test_flame_volley_kills_once() {
    let mut world = arena();
    let mut log = EventLog::new();
    let wisp = world.spawn_enemy("wisp", Vec2::new(0.0, 64.0)).unwrap();

    let report = world.tick(0, &InputSnapshot::idle().with_cast(), &mut log);
    assert_eq!(report.enemies_killed, 1);
    assert_eq!(experience_events(&log), 1);
    assert!(world.enemy(wisp).is_none());
    assert_eq!(world.attacks().flames.len(), 5);
    assert_relative_eq!(world.player().energy(), 40.04, epsilon = 1e-4);

    // Flames burn out after their lifetime
    for now in (16..=512).step_by(16) {
        world.tick(now, &InputSnapshot::idle(), &mut log);
    }
    assert!(world.attacks().flames.is_empty());
    assert_eq!(log.count(|e| matches!(e, SinkEvent::DespawnEntity(EntityRef::Flame(_)))), 5);
}

#[test]
fn test_invulnerability_gates_repeat_hits() {
    let mut world = arena();
    let mut log = EventLog::new();
    let post = world.spawn_enemy("post", Vec2::new(0.0, 64.0)).unwrap();

    world.tick(0, &InputSnapshot::idle().with_attack(), &mut log);
    world.tick(16, &InputSnapshot::idle(), &mut log);
    world.tick(32, &InputSnapshot::idle(), &mut log);

    assert_eq!(world.enemy(post).map(Enemy::health), Some(87.0));
    assert_eq!(log.count(|e| matches!(e, SinkEvent::Sound(SoundKind::Hit))), 1);

    // The swing is still out when the window closes
    for now in (48..=304).step_by(16) {
        world.tick(now, &InputSnapshot::idle(), &mut log);
    }
    assert_eq!(world.enemy(post).map(Enemy::health), Some(74.0));
}

#[test]
fn test_grass_is_cut_on_first_contact() {
    let mut world = arena();
    let mut log = EventLog::new();
    let grass = world.add_tile(TileKind::Grass, Vec2::new(0.0, 64.0)).unwrap();

    let report = world.tick(0, &InputSnapshot::idle().with_attack(), &mut log);
    assert_eq!(report.tiles_destroyed, 1);
    assert!(world.tile(grass).is_none());
    assert_eq!(log.despawned(), vec![EntityRef::Tile(grass)]);

    let leaves = log.count(|e| matches!(e, SinkEvent::Particle { kind: ParticleKind::Leaf, .. }));
    assert!((3..=6).contains(&leaves));

    // The cleared cell no longer blocks movement
    for now in (16..=1_600).step_by(16) {
        world.tick(now, &InputSnapshot::idle().with_down(), &mut log);
    }
    assert!(world.player().hitbox().top() > 123.0);
}

#[test]
fn test_projectile_is_spent_on_hit() {
    let mut world = arena();
    let mut log = EventLog::new();

    for now in [0, 350, 700] {
        world.tick(now, &InputSnapshot::idle().with_next_spell(), &mut log);
    }
    assert_eq!(world.player().spell().map(|s| s.kind), Some(SpellKind::EnergyBall));

    let post = world.spawn_enemy("post", Vec2::new(10.0, 0.0)).unwrap();
    world.tick(1_000, &InputSnapshot::idle().with_cast(), &mut log);

    assert_eq!(world.enemy(post).map(Enemy::health), Some(86.0));
    assert_eq!(world.player().active_projectiles(), 0);
    assert!(world.attacks().projectiles.is_empty());

    let spawned: Vec<_> = log
        .events()
        .iter()
        .filter_map(|e| match e {
            SinkEvent::SpawnProjectile { handle, .. } => Some(*handle),
            _ => None,
        })
        .collect();
    assert_eq!(spawned.len(), 1);
    assert_eq!(log.despawned(), vec![EntityRef::Projectile(spawned[0])]);
}

#[test]
fn test_enemy_attack_priority_and_damage() {
    init_logging();
    let mut world = World::new(GameConfig::default(), Arc::new(Catalog::standard()), Vec2::ZERO).unwrap();
    let mut log = EventLog::new();
    let squid = world.spawn_enemy("squid", Vec2::new(40.0, 0.0)).unwrap();

    world.tick(0, &InputSnapshot::idle(), &mut log);
    assert_eq!(world.enemy(squid).map(Enemy::state), Some(EnemyState::Attack));
    assert_eq!(world.player().health(), 80.0);
    assert_eq!(
        log.count(|e| matches!(e, SinkEvent::Sound(SoundKind::EnemyAttack(AttackStyle::Slash)))),
        1
    );

    // Not ready yet: the squid closes in instead of striking
    world.tick(16, &InputSnapshot::idle(), &mut log);
    assert_eq!(world.enemy(squid).map(Enemy::state), Some(EnemyState::Pursue));
    assert_eq!(world.player().health(), 80.0);
}

#[test]
fn test_player_cannot_walk_through_walls() {
    let mut world = arena();
    let wall = world.add_tile(TileKind::Boundary, Vec2::new(128.0, 0.0)).unwrap();
    let wall_box = *world.tile(wall).unwrap().hitbox();

    for now in (0..600).step_by(16) {
        world.tick(now, &InputSnapshot::idle().with_right(), &mut NullSink);
        assert!(!world.player().hitbox().intersects(&wall_box));
    }
    assert_eq!(world.player().hitbox().right(), 128.0);
}

#[test]
fn test_upgrade_menu_while_paused() {
    let mut world = arena();
    let mut log = EventLog::new();

    assert!(world.tick(0, &InputSnapshot::idle().with_menu(), &mut log).paused);
    let report = world.tick(16, &InputSnapshot::idle().with_confirm(), &mut log);
    assert!(report.paused);
    assert_eq!(report.upgraded, Some(Stat::Health));
    assert_eq!(world.player().max_health(), 115.0);
    assert_eq!(world.player().experience(), 20.0);

    // Not enough experience left for another
    let report = world.tick(500, &InputSnapshot::idle().with_confirm(), &mut log);
    assert_eq!(report.upgraded, None);

    assert!(!world.tick(600, &InputSnapshot::idle().with_menu(), &mut log).paused);
    assert!(log.is_empty());
}
