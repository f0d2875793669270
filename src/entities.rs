/// All game entity types.
///
/// Entities are plain data plus the small amount of self-contained motion
/// each one owns: `update` advances a single entity by one tick and returns
/// `true` once it has expired (left the screen or finished animating).
/// Anything involving more than one entity lives in `compute`.

use std::f32::consts::TAU;

use rand::Rng;

use crate::constants::*;

// ── Geometry ─────────────────────────────────────────────────────────────────

/// Axis-aligned box in logical screen units.  Used both for placement when
/// drawing and for every collision test.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Rect { x, y, w, h }
    }

    pub fn from_center(cx: i32, cy: i32, w: i32, h: i32) -> Self {
        Rect::new(cx - w / 2, cy - h / 2, w, h)
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub fn center(&self) -> (i32, i32) {
        (self.x + self.w / 2, self.y + self.h / 2)
    }

    /// Strict overlap: touching edges do not count, and a zero-area box
    /// never intersects anything.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.w > 0
            && self.h > 0
            && other.w > 0
            && other.h > 0
            && self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

// ── Status & input ───────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

/// Held-key snapshot for one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Controls {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub fire: bool,
}

// ── Projectiles ──────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Owner {
    Player,
    Alien,
}

/// Missile variant.  Damage, score and ballistics are data on the variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectileKind {
    Plain,
    Power,
}

impl ProjectileKind {
    /// Health removed from the boss per hit.
    pub const fn damage(self) -> u32 {
        match self {
            ProjectileKind::Plain => 1,
            ProjectileKind::Power => 2,
        }
    }

    /// Score for destroying an asteroid with this variant.
    pub const fn asteroid_score(self) -> u32 {
        match self {
            ProjectileKind::Plain => SCORE_ASTEROID_PLAIN,
            ProjectileKind::Power => SCORE_ASTEROID_POWER,
        }
    }

    pub const fn speed(self) -> i32 {
        match self {
            ProjectileKind::Plain => MISSILE_SPEED,
            ProjectileKind::Power => POWER_MISSILE_SPEED,
        }
    }

    /// Width of the missile box; height is one and a half times this.
    pub const fn size(self) -> i32 {
        match self {
            ProjectileKind::Plain => MISSILE_SIZE,
            ProjectileKind::Power => POWER_MISSILE_SIZE,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Projectile {
    pub rect: Rect,
    /// Signed vertical speed: negative travels up (player), positive down (boss).
    pub vy: i32,
    pub owner: Owner,
    pub kind: ProjectileKind,
}

impl Projectile {
    /// Player missile launched from `(center_x, top)`.
    pub fn missile(kind: ProjectileKind, center_x: i32, top: i32) -> Self {
        let w = kind.size();
        Projectile {
            rect: Rect::new(center_x - w / 2, top, w, w * 3 / 2),
            vy: -kind.speed(),
            owner: Owner::Player,
            kind,
        }
    }

    /// Boss missile whose top edge starts at `top`.
    pub fn alien(center_x: i32, top: i32) -> Self {
        let w = ALIEN_MISSILE_SIZE;
        Projectile {
            rect: Rect::new(center_x - w / 2, top, w, w * 3 / 2),
            vy: ALIEN_MISSILE_SPEED,
            owner: Owner::Alien,
            kind: ProjectileKind::Plain,
        }
    }

    pub fn update(&mut self) -> bool {
        self.rect.y += self.vy;
        match self.owner {
            Owner::Player => self.rect.bottom() < 0,
            Owner::Alien => self.rect.top() > SCREEN_HEIGHT,
        }
    }
}

// ── Player ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Player {
    pub rect: Rect,
    pub speed: i32,
    /// Ticks remaining until the next shot is allowed.
    pub cooldown: u32,
}

impl Player {
    pub fn new() -> Self {
        Player {
            rect: Rect::from_center(
                SCREEN_WIDTH / 2,
                SCREEN_HEIGHT - 100,
                PLAYER_SIZE,
                PLAYER_SIZE,
            ),
            speed: PLAYER_SPEED,
            cooldown: 0,
        }
    }

    /// Move for every held direction, clamped to the screen, and run the
    /// fire cooldown down by one.
    pub fn update(&mut self, controls: &Controls) {
        let mut dx = 0;
        let mut dy = 0;
        if controls.left {
            dx -= self.speed;
        }
        if controls.right {
            dx += self.speed;
        }
        if controls.up {
            dy -= self.speed;
        }
        if controls.down {
            dy += self.speed;
        }
        self.rect.x = (self.rect.x + dx).clamp(0, SCREEN_WIDTH - self.rect.w);
        self.rect.y = (self.rect.y + dy).clamp(0, SCREEN_HEIGHT - self.rect.h);

        self.cooldown = self.cooldown.saturating_sub(1);
    }

    /// Launch a missile of `kind` if the cooldown has run out.
    pub fn fire(&mut self, kind: ProjectileKind) -> Option<Projectile> {
        if self.cooldown != 0 {
            return None;
        }
        self.cooldown = PLAYER_COOLDOWN;
        let (cx, _) = self.rect.center();
        Some(Projectile::missile(kind, cx, self.rect.top()))
    }
}

impl Default for Player {
    fn default() -> Self {
        Player::new()
    }
}

// ── Asteroids ────────────────────────────────────────────────────────────────

/// A surface pit, relative to the asteroid centre.
#[derive(Clone, Debug, PartialEq)]
pub struct Crater {
    pub dx: f32,
    pub dy: f32,
    pub radius: f32,
}

#[derive(Clone, Debug)]
pub struct Asteroid {
    pub rect: Rect,
    pub size: i32,
    pub speed: i32,
    /// Degrees, kept in `0..360`.  Cosmetic; the box never rotates.
    pub rotation: f32,
    pub rotation_speed: f32,
    /// Jagged outline, offsets from the centre at zero rotation.
    pub outline: Vec<(f32, f32)>,
    pub craters: Vec<Crater>,
}

impl Asteroid {
    /// Random asteroid entering just above the top edge.
    pub fn spawn(rng: &mut impl Rng) -> Self {
        let size = rng.gen_range(ASTEROID_SIZE_MIN..=ASTEROID_SIZE_MAX);
        let x = rng.gen_range(0..=SCREEN_WIDTH - size);
        let speed = rng.gen_range(ASTEROID_SPEED_MIN..=ASTEROID_SPEED_MAX);
        let mut asteroid = Asteroid::at(x, -size, size, speed, rng);
        asteroid.rotation_speed =
            rng.gen_range(-ASTEROID_ROTATION_SPEED_MAX..ASTEROID_ROTATION_SPEED_MAX);
        asteroid
    }

    /// Non-rotating asteroid at a fixed spot.  The shape is still generated
    /// from `rng`.
    pub fn at(x: i32, y: i32, size: i32, speed: i32, rng: &mut impl Rng) -> Self {
        let (outline, craters) = asteroid_shape(size, rng);
        Asteroid {
            rect: Rect::new(x, y, size, size),
            size,
            speed,
            rotation: 0.0,
            rotation_speed: 0.0,
            outline,
            craters,
        }
    }

    pub fn update(&mut self) -> bool {
        self.rect.y += self.speed;
        self.rotation = (self.rotation + self.rotation_speed).rem_euclid(360.0);
        self.rect.top() > SCREEN_HEIGHT
    }
}

/// Irregular 8–12 point outline with radial jitter, plus a handful of
/// craters that sit well inside it.
fn asteroid_shape(size: i32, rng: &mut impl Rng) -> (Vec<(f32, f32)>, Vec<Crater>) {
    let radius = size as f32 / 2.0;
    let points = rng.gen_range(8..=12);

    let outline: Vec<(f32, f32)> = (0..points)
        .map(|i| {
            let angle = TAU * i as f32 / points as f32;
            let distance = rng.gen_range(0.6..1.0) * radius;
            (distance * angle.cos(), distance * angle.sin())
        })
        .collect();

    let min_r = (size / 10).max(1);
    let max_r = (size / 6).max(min_r);
    if max_r as f32 >= radius {
        return (outline, Vec::new());
    }
    let craters = (0..points / 2)
        .filter_map(|_| {
            let r = rng.gen_range(min_r..=max_r) as f32;
            let dx = rng.gen_range(-radius + r..=radius - r);
            let dy = rng.gen_range(-radius + r..=radius - r);
            (dx.hypot(dy) < radius * 0.7).then_some(Crater { dx, dy, radius: r })
        })
        .collect();

    (outline, craters)
}

// ── Pickups ──────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PickupKind {
    Star,
    PowerStar,
    Heart,
}

impl PickupKind {
    pub const fn size(self) -> i32 {
        match self {
            PickupKind::Star => STAR_SIZE,
            PickupKind::PowerStar => POWER_STAR_SIZE,
            PickupKind::Heart => HEART_SIZE,
        }
    }

    pub const fn speed(self) -> i32 {
        match self {
            PickupKind::Star => STAR_SPEED,
            PickupKind::PowerStar => POWER_STAR_SPEED,
            PickupKind::Heart => HEART_SPEED,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Pickup {
    pub rect: Rect,
    pub speed: i32,
    pub kind: PickupKind,
    /// Glow phase in radians.  Cosmetic.
    pub phase: f32,
}

impl Pickup {
    /// Random pickup entering just above the top edge.
    pub fn spawn(kind: PickupKind, rng: &mut impl Rng) -> Self {
        let size = kind.size();
        Pickup {
            rect: Rect::new(rng.gen_range(0..=SCREEN_WIDTH - size), -size, size, size),
            speed: kind.speed(),
            kind,
            phase: rng.gen_range(0.0..TAU),
        }
    }

    /// Pickup of `kind` centred on `(cx, cy)`.
    pub fn centered(kind: PickupKind, cx: i32, cy: i32) -> Self {
        let size = kind.size();
        Pickup {
            rect: Rect::from_center(cx, cy, size, size),
            speed: kind.speed(),
            kind,
            phase: 0.0,
        }
    }

    pub fn update(&mut self) -> bool {
        self.rect.y += self.speed;
        self.phase = (self.phase + PICKUP_PULSE_RATE) % TAU;
        self.rect.top() > SCREEN_HEIGHT
    }
}

// ── Boss ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct AlienBoss {
    pub rect: Rect,
    pub speed: i32,
    /// `1` moving right, `-1` moving left.
    pub direction: i32,
    pub health: u32,
    pub cooldown: u32,
    pub pulse: f32,
}

impl AlienBoss {
    /// Fresh boss at full health, centred along the top of the screen.
    pub fn new(direction: i32) -> Self {
        AlienBoss {
            rect: Rect::new((SCREEN_WIDTH - BOSS_WIDTH) / 2, BOSS_Y, BOSS_WIDTH, BOSS_HEIGHT),
            speed: BOSS_SPEED,
            direction: if direction < 0 { -1 } else { 1 },
            health: BOSS_MAX_HEALTH,
            cooldown: BOSS_COOLDOWN,
            pulse: 0.0,
        }
    }

    /// Sweep sideways, bouncing off both screen edges.
    pub fn update(&mut self) {
        self.rect.x += self.speed * self.direction;
        if self.rect.left() <= 0 {
            self.rect.x = 0;
            self.direction = 1;
        } else if self.rect.right() >= SCREEN_WIDTH {
            self.rect.x = SCREEN_WIDTH - self.rect.w;
            self.direction = -1;
        }
        self.pulse = (self.pulse + BOSS_PULSE_RATE) % TAU;
    }

    /// Fire a pair of missiles from the two gun mounts once the cooldown has
    /// run out; otherwise count the cooldown down.
    pub fn fire(&mut self) -> Option<[Projectile; 2]> {
        if self.cooldown > 0 {
            self.cooldown -= 1;
            return None;
        }
        self.cooldown = BOSS_COOLDOWN;
        let (cx, _) = self.rect.center();
        let top = self.rect.bottom();
        Some([
            Projectile::alien(cx - BOSS_GUN_OFFSET, top),
            Projectile::alien(cx + BOSS_GUN_OFFSET, top),
        ])
    }

    /// Apply one hit.  Returns `true` when the boss is destroyed.
    pub fn hit(&mut self, kind: ProjectileKind) -> bool {
        self.health = self.health.saturating_sub(kind.damage());
        self.health == 0
    }
}

// ── Explosions ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Explosion {
    pub center: (i32, i32),
    pub size: i32,
    /// Animation step, `0..EXPLOSION_STEPS`.
    pub step: u32,
    pub ticks: u32,
}

impl Explosion {
    pub fn new(center: (i32, i32), size: i32) -> Self {
        Explosion {
            center,
            size,
            step: 0,
            ticks: 0,
        }
    }

    pub fn update(&mut self) -> bool {
        self.ticks += 1;
        if self.ticks >= EXPLOSION_TICKS_PER_STEP {
            self.step += 1;
            self.ticks = 0;
        }
        self.step >= EXPLOSION_STEPS
    }

    /// Fraction of the animation already played, `0.0..=1.0`.
    pub fn progress(&self) -> f32 {
        (self.step as f32 / EXPLOSION_STEPS as f32).min(1.0)
    }
}

// ── Background ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct BackgroundStar {
    pub x: f32,
    pub y: f32,
    pub speed: f32,
    pub size: u8,
    pub brightness: u8,
}

#[derive(Clone, Debug, Default)]
pub struct StarField {
    pub stars: Vec<BackgroundStar>,
}

impl StarField {
    pub fn new(rng: &mut impl Rng) -> Self {
        let stars = (0..STAR_FIELD_COUNT)
            .map(|_| BackgroundStar {
                x: rng.gen_range(0.0..SCREEN_WIDTH as f32),
                y: rng.gen_range(0.0..SCREEN_HEIGHT as f32),
                speed: rng.gen_range(STAR_FIELD_SPEED_MIN..STAR_FIELD_SPEED_MAX),
                size: rng.gen_range(1..=3),
                brightness: rng.gen_range(100..=255),
            })
            .collect();
        StarField { stars }
    }

    /// Drift every dot down; dots leaving the bottom reappear at the top.
    pub fn update(&mut self) {
        for star in &mut self.stars {
            star.y += star.speed;
            if star.y >= SCREEN_HEIGHT as f32 {
                star.y -= SCREEN_HEIGHT as f32;
            }
        }
    }
}

// ── Master game state ────────────────────────────────────────────────────────

/// The entire game state.  Cloneable so the update functions in `compute`
/// can return a new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct GameState {
    pub player: Player,
    /// Player missiles, both variants.
    pub missiles: Vec<Projectile>,
    pub alien_missiles: Vec<Projectile>,
    pub asteroids: Vec<Asteroid>,
    pub stars: Vec<Pickup>,
    pub power_stars: Vec<Pickup>,
    pub hearts: Vec<Pickup>,
    pub boss: Option<AlienBoss>,
    pub explosions: Vec<Explosion>,
    pub star_field: StarField,
    pub score: u32,
    pub lives: u32,
    pub status: GameStatus,
    pub asteroid_timer: u32,
    pub star_timer: u32,
    pub power_star_timer: u32,
    /// Score at which the next boss shows up.
    pub boss_appears_at: u32,
    /// Ticks of powered-up fire remaining, if active.
    pub power_up: Option<u32>,
    pub frame: u64,
}

impl GameState {
    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    /// Missile variant the player currently fires.
    pub fn missile_kind(&self) -> ProjectileKind {
        if self.power_up.is_some() {
            ProjectileKind::Power
        } else {
            ProjectileKind::Plain
        }
    }
}
