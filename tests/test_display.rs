use space_explorer::compute::init_state;
use space_explorer::constants::*;
use space_explorer::display::{self, Canvas, Point, Rgba, TerminalCanvas};
use space_explorer::entities::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Canvas that only remembers what was asked of it.
#[derive(Default)]
struct RecordingCanvas {
    clears: usize,
    shapes: usize,
    texts: Vec<String>,
}

impl Canvas for RecordingCanvas {
    fn size(&self) -> (f32, f32) {
        (SCREEN_WIDTH as f32, SCREEN_HEIGHT as f32)
    }
    fn clear(&mut self, _: Rgba) {
        self.clears += 1;
    }
    fn fill_rect(&mut self, _: Rect, _: Rgba) {
        self.shapes += 1;
    }
    fn fill_polygon(&mut self, _: &[Point], _: Rgba) {
        self.shapes += 1;
    }
    fn fill_circle(&mut self, _: Point, _: f32, _: Rgba) {
        self.shapes += 1;
    }
    fn fill_ellipse(&mut self, _: Rect, _: Rgba) {
        self.shapes += 1;
    }
    fn line(&mut self, _: Point, _: Point, _: Rgba) {
        self.shapes += 1;
    }
    fn text(&mut self, _: Point, text: &str, _: Rgba) {
        self.texts.push(text.to_string());
    }
    fn text_extent(&self, text: &str) -> (f32, f32) {
        (text.chars().count() as f32 * 8.0, 16.0)
    }
}

fn state() -> GameState {
    init_state(&mut StdRng::seed_from_u64(1))
}

// ── Scene ────────────────────────────────────────────────────────────────────

#[test]
fn render_paints_hud() {
    let mut canvas = RecordingCanvas::default();
    display::render(&mut canvas, &state());

    assert_eq!(canvas.clears, 1);
    assert!(canvas.shapes > STAR_FIELD_COUNT);
    assert!(canvas.texts.contains(&"Score: 0".to_string()));
    assert!(canvas.texts.contains(&"Lives: 3".to_string()));
    assert!(canvas.texts.contains(&display::CONTROLS_HINT.to_string()));
    assert!(!canvas.texts.contains(&display::GAME_OVER_TEXT.to_string()));
}

#[test]
fn render_shows_power_and_boss() {
    let mut s = state();
    s.power_up = Some(POWER_UP_DURATION);
    s.boss = Some(AlienBoss::new(1));

    let mut canvas = RecordingCanvas::default();
    display::render(&mut canvas, &s);
    assert!(canvas.texts.contains(&"POWER: 30s".to_string()));
    assert!(canvas.texts.contains(&format!("BOSS {0}/{0}", BOSS_MAX_HEALTH)));
}

#[test]
fn render_game_over_overlay() {
    let mut s = state();
    s.status = GameStatus::GameOver;
    s.lives = 0;
    s.score = 340;

    let mut canvas = RecordingCanvas::default();
    display::render(&mut canvas, &s);
    assert!(canvas.texts.contains(&display::GAME_OVER_TEXT.to_string()));
    assert!(canvas.texts.contains(&"Final Score: 340".to_string()));
}

#[test]
fn every_entity_draws_something() {
    let mut rng = StdRng::seed_from_u64(2);
    let mut s = state();
    let mut empty = RecordingCanvas::default();
    display::render(&mut empty, &s);

    s.asteroids.push(Asteroid::spawn(&mut rng));
    s.stars.push(Pickup::spawn(PickupKind::Star, &mut rng));
    s.hearts.push(Pickup::centered(PickupKind::Heart, 100, 100));
    s.missiles
        .push(Projectile::missile(ProjectileKind::Power, 200, 300));
    s.alien_missiles.push(Projectile::alien(300, 200));
    s.explosions.push(Explosion::new((400, 300), 40));

    let mut full = RecordingCanvas::default();
    display::render(&mut full, &s);
    assert!(full.shapes >= empty.shapes + 6);
}

// ── Terminal back end ────────────────────────────────────────────────────────

const RED: Rgba = Rgba::rgb(255, 0, 0);
const BLACK: Rgba = Rgba::rgb(0, 0, 0);

#[test]
fn terminal_fill_rect_covers_pixels() {
    let mut canvas = TerminalCanvas::new(80, 30);
    canvas.clear(BLACK);
    // 10 logical units per pixel on both axes.
    canvas.fill_rect(Rect::new(100, 100, 20, 20), RED);

    assert_eq!(canvas.pixel(10, 10), Some(RED));
    assert_eq!(canvas.pixel(11, 11), Some(RED));
    assert_eq!(canvas.pixel(12, 10), Some(BLACK));
    assert_eq!(canvas.pixel(9, 10), Some(BLACK));
    assert_eq!(canvas.pixel(80, 0), None);
}

#[test]
fn terminal_blends_alpha() {
    let mut canvas = TerminalCanvas::new(80, 30);
    canvas.clear(BLACK);
    canvas.fill_rect(Rect::new(0, 0, 800, 600), RED.with_alpha(128));
    assert_eq!(canvas.pixel(0, 0), Some(Rgba::rgb(128, 0, 0)));
}

#[test]
fn terminal_tiny_circle_still_visible() {
    let mut canvas = TerminalCanvas::new(80, 30);
    canvas.clear(BLACK);
    canvas.fill_circle((405.0, 305.0), 1.0, RED);
    assert_eq!(canvas.pixel(40, 30), Some(RED));
}

#[test]
fn terminal_polygon_fills_interior_only() {
    let mut canvas = TerminalCanvas::new(80, 30);
    canvas.clear(BLACK);
    canvas.fill_polygon(&[(0.0, 0.0), (400.0, 0.0), (0.0, 300.0)], RED);
    assert_eq!(canvas.pixel(1, 1), Some(RED));
    assert_eq!(canvas.pixel(38, 28), Some(BLACK));
}

#[test]
fn terminal_text_lands_in_cells() {
    let mut canvas = TerminalCanvas::new(80, 30);
    canvas.clear(BLACK);
    canvas.text((100.0, 40.0), "Hi", RED);
    // 10 logical units per column, 20 per row.
    assert_eq!(canvas.glyph(10, 2), Some('H'));
    assert_eq!(canvas.glyph(11, 2), Some('i'));
    assert_eq!(canvas.glyph(12, 2), None);
    assert_eq!(canvas.text_extent("Hi"), (20.0, 20.0));

    canvas.clear(BLACK);
    assert_eq!(canvas.glyph(10, 2), None);
}

#[test]
fn terminal_renders_player_ship() {
    let mut canvas = TerminalCanvas::new(80, 30);
    display::render(&mut canvas, &state());
    // Hull centre, just above the notch at (400, 505).
    assert_ne!(canvas.pixel(40, 50), Some(display::C_BACKGROUND));
    assert_eq!(canvas.glyph(1, 0), Some('S'));
}

#[test]
fn terminal_present_writes_frame() {
    let mut canvas = TerminalCanvas::new(20, 4);
    canvas.clear(BLACK);
    canvas.text((0.0, 0.0), "SCORE", RED);

    let mut out = Vec::new();
    canvas.present(&mut out).expect("writing to a Vec cannot fail");
    let text = String::from_utf8_lossy(&out);
    assert!(text.contains('▀'));
    assert!(text.contains("SCORE"));
}

#[test]
fn terminal_resize_reports_change() {
    let mut canvas = TerminalCanvas::new(80, 24);
    assert!(!canvas.resize(80, 24));
    assert!(canvas.resize(100, 30));
    assert_eq!((canvas.cols(), canvas.rows()), (100, 30));
}
