//! Grid snake: a tick-driven snake simulation with obstacles, timed bonus
//! food and a persisted high score, plus the terminal client pieces that
//! render it.

pub mod client;
pub mod config;
pub mod engine;
pub mod food;
pub mod game;
pub mod input;
pub mod logging;
pub mod notify;
pub mod renderer;
pub mod scheduler;
pub mod snake;
pub mod store;
pub mod terminal_runtime;
pub mod theme;
pub mod ui;
