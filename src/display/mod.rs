/// Rendering layer.
///
/// `render` receives a canvas and an immutable view of the game state.  No
/// game logic is performed; this module only translates state into drawing
/// calls.  The terminal back end lives in `terminal`.

pub mod canvas;
pub mod sprites;
pub mod terminal;

use crate::constants::{BOSS_MAX_HEALTH, FPS};
use crate::entities::GameState;

use self::sprites::*;

pub use self::canvas::{Canvas, Point, Rgba};
pub use self::terminal::TerminalCanvas;

// ── Colour palette ───────────────────────────────────────────────────────────

pub const C_BACKGROUND: Rgba = Rgba::rgb(0, 0, 30);
const C_HUD: Rgba = Rgba::rgb(255, 255, 255);
const C_HINT: Rgba = Rgba::rgb(200, 200, 200);
const C_POWER: Rgba = Rgba::rgb(255, 0, 255);
const C_GAME_OVER: Rgba = Rgba::rgb(255, 0, 0);
const C_FINAL_SCORE: Rgba = Rgba::rgb(255, 215, 0);

pub const CONTROLS_HINT: &str = "← → ↑ ↓: Move   SPACE: Fire";
pub const GAME_OVER_TEXT: &str = "GAME OVER - Press R to Restart";

const MARGIN: f32 = 10.0;

// ── Public entry point ───────────────────────────────────────────────────────

/// Paint one complete frame, back to front.
pub fn render(canvas: &mut impl Canvas, state: &GameState) {
    canvas.clear(C_BACKGROUND);
    draw_star_field(canvas, &state.star_field);

    for pickup in state
        .stars
        .iter()
        .chain(&state.power_stars)
        .chain(&state.hearts)
    {
        draw_pickup(canvas, pickup);
    }
    for missile in state.missiles.iter().chain(&state.alien_missiles) {
        draw_projectile(canvas, missile);
    }
    for asteroid in &state.asteroids {
        draw_asteroid(canvas, asteroid);
    }
    if let Some(boss) = &state.boss {
        draw_boss(canvas, boss);
    }
    for explosion in &state.explosions {
        draw_explosion(canvas, explosion);
    }

    draw_player(canvas, &state.player, state.power_up.is_some());
    draw_hud(canvas, state);

    if state.is_game_over() {
        draw_game_over(canvas, state);
    }
}

// ── HUD ──────────────────────────────────────────────────────────────────────

fn draw_hud(canvas: &mut impl Canvas, state: &GameState) {
    let (_, line_h) = canvas.text_extent("Score");
    let line = line_h.max(1.0) * 1.5;

    canvas.text((MARGIN, MARGIN), &format!("Score: {}", state.score), C_HUD);
    canvas.text((MARGIN, MARGIN + line), &format!("Lives: {}", state.lives), C_HUD);

    if let Some(remaining) = state.power_up {
        let seconds = remaining.div_ceil(FPS);
        canvas.text(
            (MARGIN, MARGIN + 2.0 * line),
            &format!("POWER: {}s", seconds),
            C_POWER,
        );
    }

    let (screen_w, _) = canvas.size();
    let (hint_w, _) = canvas.text_extent(CONTROLS_HINT);
    canvas.text((screen_w - hint_w - MARGIN, MARGIN), CONTROLS_HINT, C_HINT);

    if let Some(boss) = &state.boss {
        let label = format!("BOSS {}/{}", boss.health, BOSS_MAX_HEALTH);
        let (label_w, _) = canvas.text_extent(&label);
        canvas.text((screen_w - label_w - MARGIN, MARGIN + line), &label, C_GAME_OVER);
    }
}

// ── Game-over overlay ────────────────────────────────────────────────────────

fn draw_game_over(canvas: &mut impl Canvas, state: &GameState) {
    let (screen_w, screen_h) = canvas.size();

    let (w, h) = canvas.text_extent(GAME_OVER_TEXT);
    let top = (screen_h - h) / 2.0;
    canvas.text(((screen_w - w) / 2.0, top), GAME_OVER_TEXT, C_GAME_OVER);

    let score_line = format!("Final Score: {}", state.score);
    let (sw, _) = canvas.text_extent(&score_line);
    canvas.text(
        ((screen_w - sw) / 2.0, top + h.max(1.0) * 2.0),
        &score_line,
        C_FINAL_SCORE,
    );
}
