//! Keyboard mapping for the terminal front end.
//!
//! Paddle movement needs "is the key down right now", which most terminals do
//! not report: they send a press, then auto-repeat presses, and no release.
//! [`HeldKeys`] treats a direction as held until a release arrives or, on
//! terminals without release events, until no press has been seen for a
//! short timeout.

use std::{
    io::{self, Write},
    time::{Duration, Instant},
};

use crossterm::{
    event::{
        KeyCode, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    ExecutableCommand,
};

use crate::{
    config::MatchLength,
    engine::{MenuChoice, PlayerInput},
};

const RELEASE_TIMEOUT: Duration = Duration::from_millis(150);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Up,
    Down,
}

fn direction(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Direction::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Direction::Down),
        _ => None,
    }
}

/// Replay menu keys: 3, 5, 7 pick the match length, Esc quits.
pub fn menu_choice(code: KeyCode) -> Option<MenuChoice> {
    match code {
        KeyCode::Char('3') => Some(MenuChoice::BestOf(MatchLength::BestOf3)),
        KeyCode::Char('5') => Some(MenuChoice::BestOf(MatchLength::BestOf5)),
        KeyCode::Char('7') => Some(MenuChoice::BestOf(MatchLength::BestOf7)),
        KeyCode::Esc => Some(MenuChoice::Quit),
        _ => None,
    }
}

/// Run `body` with key release reporting switched on when `enabled`.
/// A failed push is returned without running `body`; a failed pop is only
/// logged so the body's result survives.
pub fn with_key_release_reporting<W: Write, T>(
    out: &mut W,
    enabled: bool,
    body: impl FnOnce() -> io::Result<T>,
) -> io::Result<T> {
    if !enabled {
        return body();
    }

    out.execute(PushKeyboardEnhancementFlags(
        KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
    ))?;
    let result = body();
    if let Err(e) = out.execute(PopKeyboardEnhancementFlags) {
        log::warn!("could not pop keyboard enhancement flags: {}", e);
    }
    result
}

#[derive(Debug, Clone)]
pub struct HeldKeys {
    up: Option<Instant>,
    down: Option<Instant>,
    reports_release: bool,
    release_timeout: Duration,
}

impl Default for HeldKeys {
    fn default() -> Self {
        Self::new(false)
    }
}

impl HeldKeys {
    /// `reports_release` is true when the terminal sends key release events.
    pub fn new(reports_release: bool) -> Self {
        Self {
            up: None,
            down: None,
            reports_release,
            release_timeout: RELEASE_TIMEOUT,
        }
    }

    /// Record a press or repeat. Returns false for keys that are not
    /// paddle controls.
    pub fn press(&mut self, code: KeyCode, now: Instant) -> bool {
        match direction(code) {
            Some(Direction::Up) => {
                self.up = Some(now);
                true
            }
            Some(Direction::Down) => {
                self.down = Some(now);
                true
            }
            None => false,
        }
    }

    pub fn release(&mut self, code: KeyCode) {
        match direction(code) {
            Some(Direction::Up) => self.up = None,
            Some(Direction::Down) => self.down = None,
            None => {}
        }
    }

    pub fn clear(&mut self) {
        self.up = None;
        self.down = None;
    }

    fn is_held(&self, pressed_at: Option<Instant>, now: Instant) -> bool {
        match pressed_at {
            Some(_) if self.reports_release => true,
            Some(at) => now.saturating_duration_since(at) <= self.release_timeout,
            None => false,
        }
    }

    pub fn player_input(&self, now: Instant) -> PlayerInput {
        PlayerInput {
            up: self.is_held(self.up, now),
            down: self.is_held(self.down, now),
        }
    }
}
