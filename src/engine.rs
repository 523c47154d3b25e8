//! Match state machine and the per-tick update.
//!
//! The engine owns both paddles and the ball. Each tick it moves the ball,
//! resolves paddle hits, awards points, lets the AI follow the ball and
//! checks whether the match is over. Sound cues come back to the caller as
//! [`GameEvent`]s and the renderer reads a [`MatchState`] snapshot.

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    ball::Ball,
    config::{
        MatchLength, BALL_SIZE, COURT_HEIGHT, COURT_WIDTH, PADDLE_HEIGHT, PADDLE_MARGIN,
        PADDLE_WIDTH, PLAYER_STEP,
    },
    event::{GameEvent, Side},
    geometry::Rect,
    paddle::Paddle,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    /// Winner banner on screen; counts down to the replay menu.
    GameOver { winner: Side, frames_left: u32 },
    ReplayMenu,
    Exited,
}

/// Held-direction state for the player's paddle on one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlayerInput {
    pub up: bool,
    pub down: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    BestOf(MatchLength),
    Quit,
}

/// Scores and phase, handed to the UI instead of the engine itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchState {
    pub player_score: u32,
    pub ai_score: u32,
    pub winning_score: u32,
    pub match_length: MatchLength,
    pub phase: Phase,
    pub paused: bool,
}

impl MatchState {
    pub fn winner(&self) -> Option<Side> {
        match self.phase {
            Phase::GameOver { winner, .. } => Some(winner),
            _ => None,
        }
    }
}

/// Positions of everything drawn on the court, in court units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scene {
    pub court_width: f32,
    pub court_height: f32,
    pub player: Rect,
    pub ai: Rect,
    pub ball: Rect,
}

#[derive(Debug)]
pub struct GameEngine<R: Rng = StdRng> {
    width: f32,
    height: f32,
    player: Paddle,
    ai: Paddle,
    ball: Ball,
    player_score: u32,
    ai_score: u32,
    match_length: MatchLength,
    phase: Phase,
    paused: bool,
    game_over_frames: u32,
    rng: R,
}

impl GameEngine<StdRng> {
    /// Standard 800x600 court with a reproducible serve sequence.
    pub fn seeded(match_length: MatchLength, game_over_frames: u32, seed: u64) -> Self {
        Self::new(
            COURT_WIDTH,
            COURT_HEIGHT,
            match_length,
            game_over_frames,
            StdRng::seed_from_u64(seed),
        )
    }
}

impl<R: Rng> GameEngine<R> {
    pub fn new(
        width: f32,
        height: f32,
        match_length: MatchLength,
        game_over_frames: u32,
        mut rng: R,
    ) -> Self {
        let paddle_y = height / 2.0 - PADDLE_HEIGHT / 2.0;
        let player = Paddle::new(PADDLE_MARGIN, paddle_y, PADDLE_WIDTH, PADDLE_HEIGHT);
        let ai = Paddle::new(
            width - PADDLE_MARGIN - PADDLE_WIDTH,
            paddle_y,
            PADDLE_WIDTH,
            PADDLE_HEIGHT,
        );
        let ball = Ball::new(
            width / 2.0,
            height / 2.0,
            BALL_SIZE,
            BALL_SIZE,
            width,
            height,
            &mut rng,
        );

        log::info!(
            "new match on {}x{} court, best of {}",
            width,
            height,
            match_length.games()
        );

        Self {
            width,
            height,
            player,
            ai,
            ball,
            player_score: 0,
            ai_score: 0,
            match_length,
            phase: Phase::Playing,
            paused: false,
            game_over_frames,
            rng,
        }
    }

    pub fn player(&self) -> &Paddle {
        &self.player
    }

    pub fn ai(&self) -> &Paddle {
        &self.ai
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn ball_mut(&mut self) -> &mut Ball {
        &mut self.ball
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_exited(&self) -> bool {
        self.phase == Phase::Exited
    }

    pub fn winning_score(&self) -> u32 {
        self.match_length.wins_needed()
    }

    /// Overwrite both scores. Does not check the win condition until the
    /// next tick. Scores that tie at or above the winning score have no
    /// winner and are rejected in debug builds when that check runs.
    pub fn set_scores(&mut self, player: u32, ai: u32) {
        self.player_score = player;
        self.ai_score = ai;
    }

    pub fn match_state(&self) -> MatchState {
        MatchState {
            player_score: self.player_score,
            ai_score: self.ai_score,
            winning_score: self.winning_score(),
            match_length: self.match_length,
            phase: self.phase,
            paused: self.paused,
        }
    }

    pub fn scene(&self) -> Scene {
        Scene {
            court_width: self.width,
            court_height: self.height,
            player: self.player.rect(),
            ai: self.ai.rect(),
            ball: self.ball.rect(),
        }
    }

    /// Move the player's paddle. Only acts while a rally is running.
    pub fn handle_input(&mut self, input: PlayerInput) {
        if self.phase != Phase::Playing || self.paused {
            return;
        }
        if input.up {
            self.player.move_by(-PLAYER_STEP, self.height);
        }
        if input.down {
            self.player.move_by(PLAYER_STEP, self.height);
        }
    }

    pub fn toggle_pause(&mut self) {
        if self.phase == Phase::Playing {
            self.paused = !self.paused;
            log::debug!("paused: {}", self.paused);
        }
    }

    /// Advance the match by one tick and return the sound cues it raised.
    pub fn update(&mut self) -> Vec<GameEvent> {
        let mut events = Vec::new();

        match self.phase {
            Phase::Playing if !self.paused => self.play_tick(&mut events),
            Phase::GameOver {
                winner,
                frames_left,
            } => {
                let frames_left = frames_left.saturating_sub(1);
                self.phase = if frames_left == 0 {
                    log::info!("showing replay menu");
                    Phase::ReplayMenu
                } else {
                    Phase::GameOver {
                        winner,
                        frames_left,
                    }
                };
            }
            _ => {}
        }

        events
    }

    fn play_tick(&mut self, events: &mut Vec<GameEvent>) {
        events.extend(self.ball.advance());
        events.extend(self.ball.check_collision(&self.player, &self.ai));

        if self.ball.exited_left() {
            self.ai_score += 1;
            events.push(self.ball.reset(&mut self.rng));
            log::info!("AI scores: {}-{}", self.player_score, self.ai_score);
        } else if self.ball.exited_right() {
            self.player_score += 1;
            events.push(self.ball.reset(&mut self.rng));
            log::info!("player scores: {}-{}", self.player_score, self.ai_score);
        }

        self.ai.auto_track(&self.ball, self.height);

        self.check_game_over();
    }

    fn check_game_over(&mut self) {
        let winning_score = self.winning_score();
        if self.player_score >= winning_score || self.ai_score >= winning_score {
            debug_assert_ne!(
                self.player_score, self.ai_score,
                "match over with tied scores"
            );
            let winner = if self.player_score > self.ai_score {
                Side::Player
            } else {
                Side::Ai
            };
            log::info!(
                "{} wins {}-{}",
                winner.label(),
                self.player_score,
                self.ai_score
            );
            self.phase = Phase::GameOver {
                winner,
                frames_left: self.game_over_frames,
            };
        }
    }

    /// Apply a replay menu selection. Ignored outside the menu. Starting a
    /// new match serves the ball, and the serve's cue is returned.
    pub fn select(&mut self, choice: MenuChoice) -> Option<GameEvent> {
        if self.phase != Phase::ReplayMenu {
            return None;
        }

        match choice {
            MenuChoice::BestOf(length) => {
                log::info!("starting best of {}", length.games());
                self.match_length = length;
                self.player_score = 0;
                self.ai_score = 0;
                let cue = self.ball.reset(&mut self.rng);
                self.player.center(self.height);
                self.ai.center(self.height);
                self.paused = false;
                self.phase = Phase::Playing;
                Some(cue)
            }
            MenuChoice::Quit => {
                self.quit();
                None
            }
        }
    }

    /// Leave the game from any phase.
    pub fn quit(&mut self) {
        log::info!("quit at {}-{}", self.player_score, self.ai_score);
        self.phase = Phase::Exited;
    }
}
