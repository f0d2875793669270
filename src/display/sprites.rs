/// Per-entity drawing.  Every sprite is built from primitives at draw time
/// from the entity's geometry; nothing is loaded from disk.

use std::f32::consts::{FRAC_PI_2, TAU};

use crate::constants::{BOSS_GUN_OFFSET, BOSS_MAX_HEALTH};
use crate::entities::{
    AlienBoss, Asteroid, Explosion, Owner, Pickup, PickupKind, Player, Projectile,
    ProjectileKind, Rect, StarField,
};

use super::canvas::{Canvas, Point, Rgba};

// ── Colour palette ───────────────────────────────────────────────────────────

const C_SHIP_BODY: Rgba = Rgba::rgb(30, 144, 255);
const C_SHIP_ENGINE: Rgba = Rgba::rgb(255, 50, 50);
const C_SHIP_ENGINE_POWER: Rgba = Rgba::rgb(255, 0, 255);
const C_SHIP_COCKPIT: Rgba = Rgba::rgb(135, 206, 250);
const C_SHIP_HIGHLIGHT: Rgba = Rgba::rgb(173, 216, 230);

const C_MISSILE: Rgba = Rgba::rgb(255, 100, 0);
const C_MISSILE_TIP: Rgba = Rgba::rgb(255, 200, 0);
const C_MISSILE_TRAIL: Rgba = Rgba::rgba(255, 200, 100, 128);
const C_POWER_MISSILE: Rgba = Rgba::rgb(0, 200, 255);
const C_POWER_MISSILE_TIP: Rgba = Rgba::rgb(200, 255, 255);
const C_POWER_MISSILE_TRAIL: Rgba = Rgba::rgba(150, 100, 255, 140);
const C_ALIEN_MISSILE: Rgba = Rgba::rgb(120, 255, 80);
const C_ALIEN_MISSILE_TIP: Rgba = Rgba::rgb(220, 255, 180);

const C_ASTEROID: Rgba = Rgba::rgb(139, 69, 19);
const C_CRATER: Rgba = Rgba::rgb(100, 50, 50);
const C_CRATER_HIGHLIGHT: Rgba = Rgba::rgb(169, 99, 49);

const C_STAR: Rgba = Rgba::rgb(255, 215, 0);
const C_STAR_GLOW: Rgba = Rgba::rgb(255, 255, 200);
const C_POWER_STAR: Rgba = Rgba::rgb(0, 255, 255);
const C_POWER_STAR_GLOW: Rgba = Rgba::rgb(255, 0, 255);
const C_HEART: Rgba = Rgba::rgb(255, 60, 90);

const C_BOSS_HULL: Rgba = Rgba::rgb(120, 0, 160);
const C_BOSS_DOME: Rgba = Rgba::rgb(180, 80, 220);
const C_BOSS_CORE: Rgba = Rgba::rgb(0, 255, 120);
const C_BOSS_GUN: Rgba = Rgba::rgb(90, 90, 110);
const C_HEALTH_BACK: Rgba = Rgba::rgb(80, 0, 0);
const C_HEALTH: Rgba = Rgba::rgb(255, 40, 40);

const C_BLAST: [Rgba; 3] = [
    Rgba::rgb(255, 0, 0),
    Rgba::rgb(255, 100, 0),
    Rgba::rgb(255, 200, 0),
];

fn fx(v: i32) -> f32 {
    v as f32
}

// ── Background ───────────────────────────────────────────────────────────────

pub fn draw_star_field(canvas: &mut impl Canvas, field: &StarField) {
    for star in &field.stars {
        let b = star.brightness;
        let color = Rgba::rgb(b, b, b.saturating_add(20));
        let size = star.size as i32;
        canvas.fill_rect(Rect::new(star.x as i32, star.y as i32, size, size), color);
    }
}

// ── Player ───────────────────────────────────────────────────────────────────

/// Arrowhead hull, twin engines, cockpit and wing highlights.  The engines
/// glow magenta while powered up.
pub fn draw_player(canvas: &mut impl Canvas, player: &Player, powered: bool) {
    let r = player.rect;
    let (x, y, s) = (fx(r.x), fx(r.y), fx(r.w));
    let at = |px: f32, py: f32| (x + px * s, y + py * s);

    canvas.fill_polygon(
        &[at(0.5, 0.0), at(0.0, 0.8), at(0.5, 0.6), at(1.0, 0.8)],
        C_SHIP_BODY,
    );

    let engine = if powered { C_SHIP_ENGINE_POWER } else { C_SHIP_ENGINE };
    let part = |px: f32, py: f32, pw: f32, ph: f32| {
        Rect::new(
            (x + px * s) as i32,
            (y + py * s) as i32,
            (pw * s) as i32,
            (ph * s) as i32,
        )
    };
    canvas.fill_rect(part(0.2, 0.8, 0.2, 0.2), engine);
    canvas.fill_rect(part(0.6, 0.8, 0.2, 0.2), engine);
    canvas.fill_ellipse(part(0.4, 0.25, 0.2, 0.2), C_SHIP_COCKPIT);

    canvas.line(at(0.5, 0.2), at(0.8, 0.7), C_SHIP_HIGHLIGHT);
    canvas.line(at(0.5, 0.2), at(0.2, 0.7), C_SHIP_HIGHLIGHT);
}

// ── Projectiles ──────────────────────────────────────────────────────────────

pub fn draw_projectile(canvas: &mut impl Canvas, projectile: &Projectile) {
    let r = projectile.rect;
    let (left, right, cx) = (fx(r.left()), fx(r.right()), fx(r.x) + fx(r.w) / 2.0);
    let tip_len = fx(r.w) * 0.5;

    match projectile.owner {
        Owner::Player => {
            let (body, tip, trail) = match projectile.kind {
                ProjectileKind::Plain => (C_MISSILE, C_MISSILE_TIP, C_MISSILE_TRAIL),
                ProjectileKind::Power => {
                    (C_POWER_MISSILE, C_POWER_MISSILE_TIP, C_POWER_MISSILE_TRAIL)
                }
            };
            canvas.fill_rect(r, body);
            let top = fx(r.top());
            canvas.fill_polygon(&[(left, top + tip_len), (cx, top), (right, top + tip_len)], tip);
            // Exhaust below the body.
            let bottom = fx(r.bottom());
            canvas.fill_polygon(&[(left, bottom), (cx, bottom + fx(r.w)), (right, bottom)], trail);
        }
        Owner::Alien => {
            canvas.fill_rect(r, C_ALIEN_MISSILE);
            let bottom = fx(r.bottom());
            canvas.fill_polygon(
                &[(left, bottom - tip_len), (cx, bottom), (right, bottom - tip_len)],
                C_ALIEN_MISSILE_TIP,
            );
        }
    }
}

// ── Asteroids ────────────────────────────────────────────────────────────────

/// Rotate `(dx, dy)` by `degrees` counter-clockwise on screen.
fn rotate((dx, dy): Point, degrees: f32) -> Point {
    let (sin, cos) = degrees.to_radians().sin_cos();
    (dx * cos + dy * sin, -dx * sin + dy * cos)
}

pub fn draw_asteroid(canvas: &mut impl Canvas, asteroid: &Asteroid) {
    let (cx, cy) = asteroid.rect.center();
    let (cx, cy) = (fx(cx), fx(cy));

    let outline: Vec<Point> = asteroid
        .outline
        .iter()
        .map(|&p| {
            let (dx, dy) = rotate(p, asteroid.rotation);
            (cx + dx, cy + dy)
        })
        .collect();
    canvas.fill_polygon(&outline, C_ASTEROID);

    for crater in &asteroid.craters {
        let (dx, dy) = rotate((crater.dx, crater.dy), asteroid.rotation);
        let (x, y) = (cx + dx, cy + dy);
        canvas.fill_circle((x, y), crater.radius, C_CRATER);
        let q = crater.radius / 4.0;
        canvas.fill_circle((x - q, y - q), q, C_CRATER_HIGHLIGHT);
    }
}

// ── Pickups ──────────────────────────────────────────────────────────────────

/// Ten-point outline of a five-pointed star, tip up.
pub fn star_points(center: Point, outer: f32, inner: f32) -> Vec<Point> {
    (0..10)
        .map(|i| {
            let angle = FRAC_PI_2 + TAU * i as f32 / 10.0;
            let radius = if i % 2 == 0 { outer } else { inner };
            (center.0 + radius * angle.cos(), center.1 - radius * angle.sin())
        })
        .collect()
}

pub fn draw_pickup(canvas: &mut impl Canvas, pickup: &Pickup) {
    let (cx, cy) = pickup.rect.center();
    let center = (fx(cx), fx(cy));
    let half = fx(pickup.rect.w) / 2.0;
    // Glow breathes between roughly 40 and 140 alpha.
    let glow_alpha = (90.0 + 50.0 * pickup.phase.sin()) as u8;

    match pickup.kind {
        PickupKind::Star => {
            canvas.fill_circle(center, half + 5.0, C_STAR_GLOW.with_alpha(glow_alpha));
            canvas.fill_polygon(&star_points(center, half, half / 2.0), C_STAR);
        }
        PickupKind::PowerStar => {
            canvas.fill_circle(center, half + 7.0, C_POWER_STAR_GLOW.with_alpha(glow_alpha));
            canvas.fill_polygon(&star_points(center, half, half / 2.5), C_POWER_STAR);
        }
        PickupKind::Heart => {
            let lobe = half / 2.0;
            canvas.fill_circle((center.0 - lobe, center.1 - lobe / 2.0), lobe, C_HEART);
            canvas.fill_circle((center.0 + lobe, center.1 - lobe / 2.0), lobe, C_HEART);
            canvas.fill_polygon(
                &[
                    (center.0 - half, center.1 - lobe / 4.0),
                    (center.0 + half, center.1 - lobe / 4.0),
                    (center.0, center.1 + half),
                ],
                C_HEART,
            );
        }
    }
}

// ── Boss ─────────────────────────────────────────────────────────────────────

/// Saucer hull, dome, pulsing core, gun mounts and a health bar above.
pub fn draw_boss(canvas: &mut impl Canvas, boss: &AlienBoss) {
    let r = boss.rect;
    let (cx, cy) = r.center();

    canvas.fill_ellipse(Rect::new(r.x, r.y + r.h / 3, r.w, r.h * 2 / 3), C_BOSS_HULL);
    canvas.fill_ellipse(Rect::new(r.x + r.w / 4, r.y, r.w / 2, r.h / 2), C_BOSS_DOME);

    for dx in [-BOSS_GUN_OFFSET, BOSS_GUN_OFFSET] {
        canvas.fill_rect(Rect::new(cx + dx - 4, r.bottom() - 10, 8, 10), C_BOSS_GUN);
    }

    let pulse = 0.5 + 0.5 * boss.pulse.sin();
    let core_radius = fx(r.h) / 8.0 + pulse * fx(r.h) / 10.0;
    let core_alpha = (150.0 + 105.0 * pulse) as u8;
    canvas.fill_circle((fx(cx), fx(cy)), core_radius, C_BOSS_CORE.with_alpha(core_alpha));

    let bar = Rect::new(r.x, r.y - 12, r.w, 6);
    canvas.fill_rect(bar, C_HEALTH_BACK);
    let filled = r.w * boss.health.min(BOSS_MAX_HEALTH) as i32 / BOSS_MAX_HEALTH as i32;
    canvas.fill_rect(Rect { w: filled, ..bar }, C_HEALTH);
}

// ── Explosions ───────────────────────────────────────────────────────────────

/// Three concentric fading discs that shrink as the animation plays.
pub fn draw_explosion(canvas: &mut impl Canvas, explosion: &Explosion) {
    let progress = explosion.progress();
    let current = fx(explosion.size) * (1.0 - progress);
    if current <= 0.0 {
        return;
    }
    let center = (fx(explosion.center.0), fx(explosion.center.1));

    let layers = [(1.0, 150.0), (0.8, 200.0), (0.6, 255.0)];
    for (color, (factor, alpha)) in C_BLAST.iter().zip(layers) {
        let a = (alpha * (1.0 - progress)) as u8;
        canvas.fill_circle(center, current * factor, color.with_alpha(a));
    }
}
