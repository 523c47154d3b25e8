use std::{path::PathBuf, time::Duration};

use clap::{Parser, ValueEnum};

use crate::{event::GameEvent, game_theme::GameTheme};

/// Physics space dimensions. Everything in the engine is expressed in these
/// court units; the renderer scales them to terminal cells.
pub const COURT_WIDTH: f32 = 800.0;
pub const COURT_HEIGHT: f32 = 600.0;

pub const PADDLE_WIDTH: f32 = 10.0;
pub const PADDLE_HEIGHT: f32 = 100.0;
/// Gap between the left wall and the player's paddle.
pub const PADDLE_MARGIN: f32 = 10.0;

pub const BALL_SIZE: f32 = 7.0;
pub const BALL_SPEED_X: f32 = 5.0;
pub const BALL_SPEED_Y: f32 = 3.0;

/// Player paddle travel per tick while a direction key is held.
pub const PLAYER_STEP: f32 = 10.0;
/// AI paddle travel per tick. Slower than the ball's vertical speed so long
/// diagonals can beat it.
pub const AI_STEP: f32 = 2.5;
/// The AI stops following once the ball's centre is this close to its own.
pub const AI_DEAD_ZONE: f32 = 10.0;

/// How long the winner banner stays up before the replay menu appears.
pub const GAME_OVER_DELAY: Duration = Duration::from_millis(1500);

pub const DEFAULT_FPS: u32 = 60;

/// Smallest terminal the court is drawn in.
pub const MIN_TERMINAL_WIDTH: u16 = 80;
pub const MIN_TERMINAL_HEIGHT: u16 = 24;

/// Match formats offered by the replay menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MatchLength {
    #[value(name = "3")]
    BestOf3,
    #[value(name = "5")]
    BestOf5,
    #[value(name = "7")]
    BestOf7,
}

impl MatchLength {
    pub fn games(&self) -> u32 {
        match self {
            MatchLength::BestOf3 => 3,
            MatchLength::BestOf5 => 5,
            MatchLength::BestOf7 => 7,
        }
    }

    /// Points needed to take the match: ceil(N / 2).
    pub fn wins_needed(&self) -> u32 {
        self.games().div_ceil(2)
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "terminal-pong", version, about = "Pong in your terminal, you against the computer")]
pub struct Config {
    /// Length of the first match; later matches are chosen from the replay menu
    #[arg(long, value_enum, default_value_t = MatchLength::BestOf5)]
    pub best_of: MatchLength,

    /// Seed for the serve direction generator (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Simulation and render rate
    #[arg(long, default_value_t = DEFAULT_FPS, value_parser = clap::value_parser!(u32).range(15..=240))]
    pub fps: u32,

    #[arg(long, value_enum, default_value_t = GameTheme::Monokai)]
    pub theme: GameTheme,

    /// Disable the terminal bell entirely
    #[arg(long)]
    pub mute: bool,

    /// Which events ring the terminal bell
    #[arg(long, value_enum, value_delimiter = ',', default_values_t = [GameEvent::Scored])]
    pub bell_on: Vec<GameEvent>,

    /// Where log output goes; stdout is taken by the game screen
    #[arg(long, default_value = "pong.log")]
    pub log_file: PathBuf,

    /// Do not write a log file
    #[arg(long)]
    pub no_log: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            best_of: MatchLength::BestOf5,
            seed: None,
            fps: DEFAULT_FPS,
            theme: GameTheme::Monokai,
            mute: false,
            bell_on: vec![GameEvent::Scored],
            log_file: PathBuf::from("pong.log"),
            no_log: false,
        }
    }
}

impl Config {
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.fps.max(1) as f64)
    }

    /// Number of ticks the winner banner is held for at this frame rate.
    pub fn game_over_frames(&self) -> u32 {
        (GAME_OVER_DELAY.as_secs_f64() * self.fps as f64).ceil() as u32
    }
}
