/// Pure game-logic functions.
///
/// Every public function takes an immutable reference to the current
/// `GameState` (and, where needed, an RNG handle) and returns a brand-new
/// `GameState`.  Side effects are limited to the injected RNG and log output.
///
/// Internally each step works on the fresh copy and rebuilds the collections
/// it touches (take, filter, put back) rather than removing while iterating.

use rand::Rng;
use tracing::{debug, info};

use crate::constants::*;
use crate::entities::{
    AlienBoss, Asteroid, Controls, Explosion, GameState, GameStatus, Pickup, PickupKind, Player,
    StarField,
};

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build a fresh episode: full lives, empty sky, timers at zero.
pub fn init_state(rng: &mut impl Rng) -> GameState {
    GameState {
        player: Player::new(),
        missiles: Vec::new(),
        alien_missiles: Vec::new(),
        asteroids: Vec::new(),
        stars: Vec::new(),
        power_stars: Vec::new(),
        hearts: Vec::new(),
        boss: None,
        explosions: Vec::new(),
        star_field: StarField::new(rng),
        score: 0,
        lives: STARTING_LIVES,
        status: GameStatus::Playing,
        asteroid_timer: 0,
        star_timer: 0,
        power_star_timer: 0,
        boss_appears_at: BOSS_FIRST_APPEARANCE,
        power_up: None,
        frame: 0,
    }
}

/// Throw away the finished episode and start over.
pub fn restart(state: &GameState, rng: &mut impl Rng) -> GameState {
    info!(score = state.score, frame = state.frame, "restarting");
    init_state(rng)
}

// ── Input-driven transitions ─────────────────────────────────────────────────

/// Apply held directions to the ship and run its fire cooldown down.
pub fn move_player(state: &GameState, controls: &Controls) -> GameState {
    let mut next = state.clone();
    next.player.update(controls);
    next
}

/// Fire the current missile variant if the cooldown allows it.
pub fn player_fire(state: &GameState) -> GameState {
    let mut next = state.clone();
    fire(&mut next);
    next
}

fn fire(next: &mut GameState) {
    let kind = next.missile_kind();
    if let Some(missile) = next.player.fire(kind) {
        next.missiles.push(missile);
    }
}

// ── Spawning ─────────────────────────────────────────────────────────────────

/// Advance the spawn timers, adding whatever is due, and bring in a boss
/// once the score has reached the next threshold.
pub fn spawn_objects(state: &GameState, rng: &mut impl Rng) -> GameState {
    let mut next = state.clone();
    spawn(&mut next, rng);
    next
}

fn spawn(next: &mut GameState, rng: &mut impl Rng) {
    next.asteroid_timer += 1;
    if next.asteroid_timer >= ASTEROID_SPAWN_RATE {
        next.asteroids.push(Asteroid::spawn(rng));
        next.asteroid_timer = 0;
    }

    next.star_timer += 1;
    if next.star_timer >= STAR_SPAWN_RATE {
        next.stars.push(Pickup::spawn(PickupKind::Star, rng));
        next.star_timer = 0;
    }

    next.power_star_timer += 1;
    if next.power_star_timer >= POWER_STAR_SPAWN_RATE {
        next.power_stars.push(Pickup::spawn(PickupKind::PowerStar, rng));
        next.power_star_timer = 0;
    }

    if next.boss.is_none() && next.score >= next.boss_appears_at {
        let direction = if rng.gen_bool(0.5) { 1 } else { -1 };
        next.boss = Some(AlienBoss::new(direction));
        next.boss_appears_at += BOSS_SCORE_STEP;
        info!(
            score = next.score,
            next_threshold = next.boss_appears_at,
            "boss spawned"
        );
    }
}

// ── Per-frame tick (nearly pure — RNG is injected) ──────────────────────────

/// Advance the simulation by one tick.  All randomness comes through `rng`
/// so callers control determinism (useful for tests with a seeded RNG).
///
/// Once the game is over this returns an unchanged copy until the caller
/// replaces the state via `restart`.
pub fn tick(state: &GameState, controls: &Controls, rng: &mut impl Rng) -> GameState {
    if state.is_game_over() {
        return state.clone();
    }

    let mut next = state.clone();
    next.frame += 1;

    // ── 1. Player, power-up clock, firing ────────────────────────────────────
    next.player.update(controls);
    run_power_up(&mut next);
    if controls.fire {
        fire(&mut next);
    }

    // ── 2. Spawn ─────────────────────────────────────────────────────────────
    spawn(&mut next, rng);

    // ── 3. Move everything; drop whatever left the screen ────────────────────
    next.missiles.retain_mut(|m| !m.update());
    next.alien_missiles.retain_mut(|m| !m.update());
    next.asteroids.retain_mut(|a| !a.update());
    next.stars.retain_mut(|s| !s.update());
    next.power_stars.retain_mut(|s| !s.update());
    next.hearts.retain_mut(|h| !h.update());
    next.star_field.update();

    // ── 4. Collisions, in order; each step sees the previous one's result ────
    resolve_alien_missiles(&mut next);
    collect_hearts(&mut next);
    resolve_asteroids(&mut next);
    collect_stars(&mut next);
    collect_power_stars(&mut next);
    run_boss(&mut next);

    // ── 5. Explosions ────────────────────────────────────────────────────────
    next.explosions.retain_mut(|e| !e.update());

    next
}

/// Count the powered-up modality down; it switches off on the tick the
/// counter would reach zero.
fn run_power_up(next: &mut GameState) {
    next.power_up = match next.power_up {
        Some(remaining) if remaining > 1 => Some(remaining - 1),
        Some(_) => {
            debug!(frame = next.frame, "power-up expired");
            None
        }
        None => None,
    };
}

fn lose_life(next: &mut GameState, at: (i32, i32), size: i32) {
    next.explosions.push(Explosion::new(at, size));
    next.lives = next.lives.saturating_sub(1);
    if next.lives == 0 && next.status != GameStatus::GameOver {
        next.status = GameStatus::GameOver;
        info!(score = next.score, frame = next.frame, "game over");
    }
}

// ── Collision steps ──────────────────────────────────────────────────────────

fn resolve_alien_missiles(next: &mut GameState) {
    let player = next.player.rect;
    let (hits, misses): (Vec<_>, Vec<_>) = std::mem::take(&mut next.alien_missiles)
        .into_iter()
        .partition(|m| m.rect.intersects(&player));
    next.alien_missiles = misses;

    for _ in &hits {
        lose_life(next, player.center(), PLAYER_SIZE);
    }
}

fn collect_hearts(next: &mut GameState) {
    let player = next.player.rect;
    let (caught, falling): (Vec<_>, Vec<_>) = std::mem::take(&mut next.hearts)
        .into_iter()
        .partition(|h| h.rect.intersects(&player));
    next.hearts = falling;

    if !caught.is_empty() {
        next.lives += caught.len() as u32;
        debug!(lives = next.lives, "heart collected");
    }
}

/// Asteroids against the player first, then the survivors against missiles.
/// An asteroid that rams the ship is never also scored as a kill, and each
/// missile takes out at most one asteroid.
fn resolve_asteroids(next: &mut GameState) {
    let player = next.player.rect;
    let asteroids = std::mem::take(&mut next.asteroids);
    let mut survivors = Vec::with_capacity(asteroids.len());

    for asteroid in asteroids {
        if asteroid.rect.intersects(&player) {
            lose_life(next, asteroid.rect.center(), asteroid.size);
            continue;
        }

        let hit = next
            .missiles
            .iter()
            .position(|m| m.rect.intersects(&asteroid.rect));
        match hit {
            Some(i) => {
                let missile = next.missiles.remove(i);
                next.explosions
                    .push(Explosion::new(asteroid.rect.center(), asteroid.size));
                next.score += missile.kind.asteroid_score();
            }
            None => survivors.push(asteroid),
        }
    }

    next.asteroids = survivors;
}

fn collect_stars(next: &mut GameState) {
    let player = next.player.rect;
    let (caught, falling): (Vec<_>, Vec<_>) = std::mem::take(&mut next.stars)
        .into_iter()
        .partition(|s| s.rect.intersects(&player));
    next.stars = falling;
    next.score += SCORE_STAR * caught.len() as u32;
}

fn collect_power_stars(next: &mut GameState) {
    let player = next.player.rect;
    let (caught, falling): (Vec<_>, Vec<_>) = std::mem::take(&mut next.power_stars)
        .into_iter()
        .partition(|s| s.rect.intersects(&player));
    next.power_stars = falling;

    if !caught.is_empty() {
        next.power_up = Some(POWER_UP_DURATION);
        next.score += SCORE_POWER_STAR * caught.len() as u32;
        info!(frame = next.frame, "powered up");
    }
}

/// Move the boss, let it shoot, then apply every missile touching it.
fn run_boss(next: &mut GameState) {
    let Some(mut boss) = next.boss.take() else {
        return;
    };

    boss.update();
    if let Some(pair) = boss.fire() {
        next.alien_missiles.extend(pair);
    }

    let missiles = std::mem::take(&mut next.missiles);
    let mut survivors = Vec::with_capacity(missiles.len());
    let mut defeated = false;

    for missile in missiles {
        if defeated || !missile.rect.intersects(&boss.rect) {
            survivors.push(missile);
            continue;
        }
        next.explosions
            .push(Explosion::new(missile.rect.center(), BOSS_HIT_EXPLOSION_SIZE));
        defeated = boss.hit(missile.kind);
    }
    next.missiles = survivors;

    if defeated {
        let (cx, cy) = boss.rect.center();
        next.explosions.push(Explosion::new((cx, cy), boss.rect.w));
        next.hearts.push(Pickup::centered(PickupKind::Heart, cx, cy));
        next.score += SCORE_BOSS;
        info!(score = next.score, frame = next.frame, "boss defeated");
    } else {
        next.boss = Some(boss);
    }
}
