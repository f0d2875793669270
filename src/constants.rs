/// Game tunables.  All gameplay runs in logical screen units at a fixed
/// tick rate; the renderer scales these to whatever surface it draws on.

// ── Screen & timing ──────────────────────────────────────────────────────────

pub const SCREEN_WIDTH: i32 = 800;
pub const SCREEN_HEIGHT: i32 = 600;
pub const FPS: u32 = 60;

// ── Player ───────────────────────────────────────────────────────────────────

pub const PLAYER_SIZE: i32 = 50;
pub const PLAYER_SPEED: i32 = 5;
/// Ticks between shots.
pub const PLAYER_COOLDOWN: u32 = 15;
pub const STARTING_LIVES: u32 = 3;

// ── Projectiles ──────────────────────────────────────────────────────────────

pub const MISSILE_SPEED: i32 = 8;
pub const MISSILE_SIZE: i32 = 10;
pub const POWER_MISSILE_SPEED: i32 = 12;
pub const POWER_MISSILE_SIZE: i32 = 14;
pub const ALIEN_MISSILE_SPEED: i32 = 5;
pub const ALIEN_MISSILE_SIZE: i32 = 8;

// ── Asteroids ────────────────────────────────────────────────────────────────

pub const ASTEROID_SPEED_MIN: i32 = 2;
pub const ASTEROID_SPEED_MAX: i32 = 5;
pub const ASTEROID_SIZE_MIN: i32 = 20;
pub const ASTEROID_SIZE_MAX: i32 = 60;
pub const ASTEROID_BASE_SPAWN_RATE: u32 = 30;
/// Ticks between asteroid spawns (base rate stretched by 1.5).
pub const ASTEROID_SPAWN_RATE: u32 = ASTEROID_BASE_SPAWN_RATE * 3 / 2;
/// Degrees per tick, sampled from `-MAX..MAX`.
pub const ASTEROID_ROTATION_SPEED_MAX: f32 = 2.0;

// ── Pickups ──────────────────────────────────────────────────────────────────

pub const STAR_SIZE: i32 = 20;
pub const STAR_SPEED: i32 = 3;
pub const STAR_SPAWN_RATE: u32 = 90;

pub const POWER_STAR_SIZE: i32 = 24;
pub const POWER_STAR_SPEED: i32 = 2;
pub const POWER_STAR_SPAWN_RATE: u32 = 600;
/// Thirty seconds of powered-up fire.
pub const POWER_UP_DURATION: u32 = 30 * FPS;

pub const HEART_SIZE: i32 = 30;
pub const HEART_SPEED: i32 = 2;

/// Radians added to a pickup's glow phase every tick.
pub const PICKUP_PULSE_RATE: f32 = 0.1;

// ── Scoring ──────────────────────────────────────────────────────────────────

pub const SCORE_ASTEROID_PLAIN: u32 = 20;
pub const SCORE_ASTEROID_POWER: u32 = 30;
pub const SCORE_STAR: u32 = 10;
pub const SCORE_POWER_STAR: u32 = 25;
pub const SCORE_BOSS: u32 = 100;

// ── Boss ─────────────────────────────────────────────────────────────────────

pub const BOSS_WIDTH: i32 = 120;
pub const BOSS_HEIGHT: i32 = 80;
pub const BOSS_Y: i32 = 50;
pub const BOSS_SPEED: i32 = 3;
pub const BOSS_MAX_HEALTH: u32 = 20;
pub const BOSS_COOLDOWN: u32 = 60;
/// Horizontal distance of each gun mount from the boss centre.
pub const BOSS_GUN_OFFSET: i32 = 40;
pub const BOSS_FIRST_APPEARANCE: u32 = 700;
pub const BOSS_SCORE_STEP: u32 = 700;
pub const BOSS_PULSE_RATE: f32 = 0.08;

// ── Explosions ───────────────────────────────────────────────────────────────

pub const EXPLOSION_STEPS: u32 = 12;
pub const EXPLOSION_TICKS_PER_STEP: u32 = 2;
pub const BOSS_HIT_EXPLOSION_SIZE: i32 = 20;

// ── Background ───────────────────────────────────────────────────────────────

pub const STAR_FIELD_COUNT: usize = 100;
pub const STAR_FIELD_SPEED_MIN: f32 = 0.5;
pub const STAR_FIELD_SPEED_MAX: f32 = 2.0;
