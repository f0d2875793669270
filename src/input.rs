/// Keyboard state for the frame driver.
///
/// Instead of acting on each key event individually, `KeyTracker` records the
/// frame number of the last press/repeat event for every key.  Each frame the
/// driver asks which keys are still "fresh" (within `HOLD_WINDOW` frames) and
/// turns them into a `Controls` snapshot, so Space and the arrows can be held
/// together.
///
/// Works on two classes of terminal:
/// * **Keyboard-enhancement capable** (kitty protocol): proper
///   `Press` / `Repeat` / `Release` events, keys are removed on release.
/// * **Classic terminals**: only `Press` events (OS key-repeat shows as
///   repeated `Press`).  Keys expire after `HOLD_WINDOW` frames of silence,
///   which is longer than the OS repeat interval.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::entities::Controls;

/// A key is considered held if its last press/repeat arrived within this
/// many frames (≈130 ms at 60 FPS).
pub const HOLD_WINDOW: u64 = 8;

/// One-shot actions triggered by a key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Quit,
    Restart,
}

#[derive(Debug, Default)]
pub struct KeyTracker {
    last_seen: HashMap<KeyCode, u64>,
}

impl KeyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one key event seen during `frame`.  Returns the command it
    /// triggers, if any.  `R` only restarts while `game_over` is set.
    pub fn record(&mut self, event: &KeyEvent, frame: u64, game_over: bool) -> Option<Command> {
        match event.kind {
            KeyEventKind::Press => {
                self.last_seen.insert(event.code, frame);
                match event.code {
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
                    KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => {
                        Some(Command::Quit)
                    }
                    KeyCode::Char('r') | KeyCode::Char('R') if game_over => Some(Command::Restart),
                    _ => None,
                }
            }
            KeyEventKind::Repeat => {
                self.last_seen.insert(event.code, frame);
                None
            }
            KeyEventKind::Release => {
                self.last_seen.remove(&event.code);
                None
            }
        }
    }

    /// Returns true if `key` was seen within the last `HOLD_WINDOW` frames.
    pub fn is_held(&self, key: &KeyCode, frame: u64) -> bool {
        self.last_seen
            .get(key)
            .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
            .unwrap_or(false)
    }

    fn any_held(&self, keys: &[KeyCode], frame: u64) -> bool {
        keys.iter().any(|k| self.is_held(k, frame))
    }

    /// Arrows or WASD to move, Space to fire.
    pub fn controls(&self, frame: u64) -> Controls {
        Controls {
            left: self.any_held(
                &[KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')],
                frame,
            ),
            right: self.any_held(
                &[KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')],
                frame,
            ),
            up: self.any_held(&[KeyCode::Up, KeyCode::Char('w'), KeyCode::Char('W')], frame),
            down: self.any_held(
                &[KeyCode::Down, KeyCode::Char('s'), KeyCode::Char('S')],
                frame,
            ),
            fire: self.is_held(&KeyCode::Char(' '), frame),
        }
    }

    /// Forget every held key.
    pub fn clear(&mut self) {
        self.last_seen.clear();
    }
}
