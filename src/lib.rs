//! Pong against a reactive AI, played in the terminal.
//!
//! Physics and match rules live in [`engine`], [`ball`] and [`paddle`] and run
//! in 800x600 court units with no I/O. The terminal front end ([`ui`],
//! [`input`], [`audio`]) sits on top and is driven by the binary.

pub mod audio;
pub mod ball;
pub mod config;
pub mod engine;
pub mod error;
pub mod event;
pub mod game_theme;
pub mod geometry;
pub mod helpers;
pub mod input;
pub mod logging;
pub mod paddle;
pub mod ui;

pub use config::{Config, MatchLength};
pub use engine::{GameEngine, MatchState, MenuChoice, Phase, PlayerInput, Scene};
pub use event::{GameEvent, Side};
