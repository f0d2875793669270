//! Space Explorer: a single-screen arcade shooter.
//!
//! `compute` holds the pure per-tick game logic, `entities` the data it
//! works on, `display` turns a state into drawing calls on a `Canvas`.
//! The binary in `main.rs` owns the terminal and drives the loop.

pub mod clock;
pub mod compute;
pub mod constants;
pub mod display;
pub mod entities;
pub mod input;
