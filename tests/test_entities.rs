use space_explorer::compute::init_state;
use space_explorer::constants::*;
use space_explorer::entities::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

// ── Rect ─────────────────────────────────────────────────────────────────────

#[test]
fn rect_overlap_is_strict() {
    let a = Rect::new(0, 0, 10, 10);
    assert!(a.intersects(&Rect::new(9, 9, 10, 10)));
    assert!(!a.intersects(&Rect::new(10, 0, 10, 10))); // touching edge
    assert!(!a.intersects(&Rect::new(0, 10, 10, 10)));
    assert!(!a.intersects(&Rect::new(5, 5, 0, 4))); // zero area
    assert!(a.intersects(&Rect::new(2, 2, 2, 2))); // contained
}

#[test]
fn rect_from_center_round_trips() {
    let r = Rect::from_center(100, 60, 30, 20);
    assert_eq!(r, Rect::new(85, 50, 30, 20));
    assert_eq!(r.center(), (100, 60));
    assert_eq!((r.right(), r.bottom()), (115, 70));
}

// ── Projectiles ──────────────────────────────────────────────────────────────

#[test]
fn projectile_kinds_carry_their_numbers() {
    assert_eq!(ProjectileKind::Plain.damage(), 1);
    assert_eq!(ProjectileKind::Power.damage(), 2);
    assert_eq!(ProjectileKind::Plain.asteroid_score(), 20);
    assert_eq!(ProjectileKind::Power.asteroid_score(), 30);
    assert!(ProjectileKind::Power.speed() > ProjectileKind::Plain.speed());
}

#[test]
fn player_missile_expires_above_screen() {
    let mut m = Projectile::missile(ProjectileKind::Plain, 50, 0);
    assert_eq!(m.rect.h, 15);
    assert!(!m.update()); // bottom still on screen
    assert_eq!(m.rect.y, -MISSILE_SPEED);
    assert!(m.update());
}

#[test]
fn alien_missile_expires_below_screen() {
    let mut m = Projectile::alien(50, SCREEN_HEIGHT - 6);
    assert!(!m.update());
    assert!(m.update());
}

// ── Player ───────────────────────────────────────────────────────────────────

#[test]
fn player_fire_is_rate_limited() {
    let mut p = Player::new();
    assert!(p.fire(ProjectileKind::Plain).is_some());
    assert_eq!(p.cooldown, PLAYER_COOLDOWN);
    assert!(p.fire(ProjectileKind::Plain).is_none());

    for _ in 0..PLAYER_COOLDOWN - 1 {
        p.update(&Controls::default());
        assert!(p.fire(ProjectileKind::Plain).is_none());
    }
    p.update(&Controls::default());
    let m = p.fire(ProjectileKind::Power).expect("cooldown elapsed");
    assert_eq!(m.kind, ProjectileKind::Power);
}

// ── Asteroids ────────────────────────────────────────────────────────────────

#[test]
fn spawned_asteroids_stay_in_range() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..200 {
        let a = Asteroid::spawn(&mut rng);
        assert!((ASTEROID_SIZE_MIN..=ASTEROID_SIZE_MAX).contains(&a.size));
        assert!((ASTEROID_SPEED_MIN..=ASTEROID_SPEED_MAX).contains(&a.speed));
        assert!(a.rect.x >= 0 && a.rect.right() <= SCREEN_WIDTH);
        assert_eq!(a.rect.bottom(), 0);
        assert!(a.rotation_speed.abs() <= ASTEROID_ROTATION_SPEED_MAX);

        let radius = a.size as f32 / 2.0;
        assert!((8..=12).contains(&a.outline.len()));
        assert!(a.outline.iter().all(|&(x, y)| x.hypot(y) <= radius + 0.01));
        assert!(a
            .craters
            .iter()
            .all(|c| c.dx.hypot(c.dy) < radius * 0.7));
    }
}

#[test]
fn asteroid_rotation_wraps() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut a = Asteroid::at(0, 0, 30, 2, &mut rng);
    a.rotation = 359.0;
    a.rotation_speed = 2.0;
    a.update();
    assert!((a.rotation - 1.0).abs() < 1e-3);

    a.rotation = 0.5;
    a.rotation_speed = -1.0;
    a.update();
    assert!((a.rotation - 359.5).abs() < 1e-3);
}

#[test]
fn tiny_asteroid_has_no_craters() {
    let a = Asteroid::at(0, 0, 1, 1, &mut StdRng::seed_from_u64(9));
    assert!(a.craters.is_empty());
}

// ── Pickups ──────────────────────────────────────────────────────────────────

#[test]
fn pickup_spawns_above_screen() {
    let mut rng = StdRng::seed_from_u64(5);
    let p = Pickup::spawn(PickupKind::PowerStar, &mut rng);
    assert_eq!(p.rect.w, POWER_STAR_SIZE);
    assert_eq!(p.rect.bottom(), 0);
    assert_eq!(p.speed, POWER_STAR_SPEED);
}

#[test]
fn pickup_falls_and_expires() {
    let mut p = Pickup::centered(PickupKind::Heart, 100, SCREEN_HEIGHT + HEART_SIZE / 2 - 3);
    assert!(!p.update());
    assert!(p.update());
}

// ── Boss ─────────────────────────────────────────────────────────────────────

#[test]
fn boss_bounces_off_edges() {
    let mut boss = AlienBoss::new(-1);
    boss.rect.x = 2;
    boss.update();
    assert_eq!(boss.rect.x, 0);
    assert_eq!(boss.direction, 1);

    boss.rect.x = SCREEN_WIDTH - BOSS_WIDTH - 1;
    boss.update();
    assert_eq!(boss.rect.right(), SCREEN_WIDTH);
    assert_eq!(boss.direction, -1);
}

#[test]
fn boss_fires_symmetric_pair() {
    let mut boss = AlienBoss::new(1);
    boss.cooldown = 1;
    assert!(boss.fire().is_none());
    assert_eq!(boss.cooldown, 0);

    let [left, right] = boss.fire().expect("ready to fire");
    let (cx, _) = boss.rect.center();
    assert_eq!(left.rect.center().0, cx - BOSS_GUN_OFFSET);
    assert_eq!(right.rect.center().0, cx + BOSS_GUN_OFFSET);
    assert_eq!(left.rect.top(), boss.rect.bottom());
    assert_eq!(boss.cooldown, BOSS_COOLDOWN);
}

#[test]
fn boss_health_never_underflows() {
    let mut boss = AlienBoss::new(1);
    boss.health = 1;
    assert!(boss.hit(ProjectileKind::Power));
    assert_eq!(boss.health, 0);
}

// ── Explosions & background ──────────────────────────────────────────────────

#[test]
fn explosion_runs_fixed_number_of_ticks() {
    let mut e = Explosion::new((10, 10), 30);
    let budget = EXPLOSION_STEPS * EXPLOSION_TICKS_PER_STEP;
    for _ in 1..budget {
        assert!(!e.update());
    }
    assert!(e.update());
    assert_eq!(e.progress(), 1.0);
}

#[test]
fn star_field_wraps_to_top() {
    let mut field = StarField {
        stars: vec![BackgroundStar {
            x: 10.0,
            y: SCREEN_HEIGHT as f32 - 0.5,
            speed: 1.0,
            size: 1,
            brightness: 200,
        }],
    };
    field.update();
    assert!((field.stars[0].y - 0.5).abs() < 1e-4);
    assert_eq!(field.stars[0].x, 10.0);
}

// ── State ────────────────────────────────────────────────────────────────────

#[test]
fn game_state_clone_is_independent() {
    let original = init_state(&mut StdRng::seed_from_u64(0));
    let mut cloned = original.clone();

    cloned.player.rect.x = 99;
    cloned.score = 999;
    cloned.boss = Some(AlienBoss::new(1));

    assert_eq!(original.player.rect.x, 375);
    assert_eq!(original.score, 0);
    assert!(original.boss.is_none());
}

#[test]
fn missile_kind_follows_power_up() {
    let mut s = init_state(&mut StdRng::seed_from_u64(0));
    assert_eq!(s.missile_kind(), ProjectileKind::Plain);
    s.power_up = Some(3);
    assert_eq!(s.missile_kind(), ProjectileKind::Power);
}
