//! End-to-end match behaviour through the public engine API.

use rand::{rngs::StdRng, RngCore, SeedableRng};
use terminal_pong::{
    ball::Ball,
    config::{COURT_HEIGHT, COURT_WIDTH},
    paddle::Paddle,
    GameEngine, GameEvent, MatchLength, MenuChoice, Phase, PlayerInput, Side,
};

const GAME_OVER_FRAMES: u32 = 5;

fn engine(seed: u64) -> GameEngine {
    GameEngine::seeded(MatchLength::BestOf5, GAME_OVER_FRAMES, seed)
}

fn score_for_player(engine: &mut GameEngine) {
    let ball = engine.ball_mut();
    ball.x = 790.0;
    ball.y = 100.0;
    ball.velocity_x = 5.0;
    ball.velocity_y = 3.0;
    engine.update();
}

fn score_for_ai(engine: &mut GameEngine) {
    let ball = engine.ball_mut();
    ball.x = 2.0;
    ball.y = 100.0;
    ball.velocity_x = -5.0;
    ball.velocity_y = 3.0;
    engine.update();
}

fn run_to_menu(engine: &mut GameEngine) {
    for _ in 0..GAME_OVER_FRAMES {
        engine.update();
    }
    assert_eq!(engine.phase(), Phase::ReplayMenu);
}

#[test]
fn free_flight_matches_closed_form() {
    let mut e = engine(3);
    {
        let ball = e.ball_mut();
        ball.velocity_x = 5.0;
        ball.velocity_y = 3.0;
    }

    for _ in 0..60 {
        let events = e.update();
        assert!(events.is_empty(), "unexpected events: {:?}", events);
    }

    assert_eq!(e.ball().x, 700.0);
    assert_eq!(e.ball().y, 480.0);
}

#[test]
fn wall_bounce_flips_vertical_velocity() {
    let mut e = engine(3);
    {
        let ball = e.ball_mut();
        ball.y = 595.0;
        ball.velocity_x = 5.0;
        ball.velocity_y = 3.0;
    }
    let events = e.update();
    assert_eq!(events, vec![GameEvent::WallBounce]);
    assert_eq!(e.ball().velocity_y, -3.0);
}

#[test]
fn paddle_hit_flips_once_and_snaps() {
    let mut e = engine(3);
    {
        let ball = e.ball_mut();
        ball.x = 24.0;
        ball.y = 295.0;
        ball.velocity_x = -5.0;
        ball.velocity_y = 0.0;
    }
    let events = e.update();

    assert_eq!(events, vec![GameEvent::PaddleHit]);
    assert_eq!(e.ball().x, 20.0);
    assert_eq!(e.ball().velocity_x, 5.0);
}

#[test]
fn overlapping_both_paddles_resolves_against_player_only() {
    let mut rng = StdRng::seed_from_u64(0);
    let player = Paddle::new(0.0, 0.0, 50.0, 100.0);
    let ai = Paddle::new(40.0, 0.0, 50.0, 100.0);
    let mut ball = Ball::new(45.0, 10.0, 7.0, 7.0, 800.0, 600.0, &mut rng);
    ball.velocity_x = -5.0;

    assert_eq!(ball.check_collision(&player, &ai), Some(GameEvent::PaddleHit));
    assert_eq!(ball.x, 50.0);
    assert_eq!(ball.velocity_x, 5.0);
}

#[test]
fn each_exit_scores_exactly_one_point() {
    let mut e = engine(11);

    score_for_ai(&mut e);
    let state = e.match_state();
    assert_eq!((state.player_score, state.ai_score), (0, 1));
    assert_eq!((e.ball().x, e.ball().y), e.ball().spawn());
    assert_eq!(e.ball().velocity_x.abs(), 5.0);
    assert_eq!(e.ball().velocity_y.abs(), 3.0);

    score_for_player(&mut e);
    let state = e.match_state();
    assert_eq!((state.player_score, state.ai_score), (1, 1));
    assert_eq!(state.phase, Phase::Playing);
}

#[test]
fn same_seed_serves_identically() {
    let mut a = engine(2024);
    let mut b = engine(2024);
    for _ in 0..5 {
        score_for_ai(&mut a);
        score_for_ai(&mut b);
        assert_eq!(a.ball().velocity_x, b.ball().velocity_x);
        assert_eq!(a.ball().velocity_y, b.ball().velocity_y);
        a.set_scores(0, 0);
        b.set_scores(0, 0);
    }
}

/// Replays a fixed list of raw draws. A coin flip at p = 0.5 comes up true
/// for 0 and false for `u64::MAX`.
struct ScriptedRng {
    draws: Vec<u64>,
    next: usize,
}

impl ScriptedRng {
    fn new(draws: Vec<u64>) -> Self {
        Self { draws, next: 0 }
    }
}

impl RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        let value = self.draws[self.next % self.draws.len()];
        self.next += 1;
        value
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

#[test]
fn scripted_generator_pins_serve_velocities() {
    let rng = ScriptedRng::new(vec![0, u64::MAX, u64::MAX, 0]);
    let mut e = GameEngine::new(COURT_WIDTH, COURT_HEIGHT, MatchLength::BestOf5, 5, rng);
    assert_eq!((e.ball().velocity_x, e.ball().velocity_y), (5.0, -3.0));

    {
        let ball = e.ball_mut();
        ball.x = 2.0;
        ball.y = 100.0;
        ball.velocity_x = -5.0;
        ball.velocity_y = 3.0;
    }
    e.update();

    assert_eq!(e.match_state().ai_score, 1);
    assert_eq!((e.ball().x, e.ball().y), (400.0, 300.0));
    assert_eq!((e.ball().velocity_x, e.ball().velocity_y), (-5.0, 3.0));
}

#[test]
fn match_ends_exactly_at_winning_score() {
    let mut e = engine(5);
    score_for_player(&mut e);
    score_for_player(&mut e);
    assert_eq!(e.phase(), Phase::Playing);

    score_for_player(&mut e);
    let state = e.match_state();
    assert_eq!(state.player_score, 3);
    assert_eq!(state.winner(), Some(Side::Player));
}

#[test]
fn full_cycle_through_replay_menu() {
    let mut e = engine(9);
    e.set_scores(1, 2);
    score_for_ai(&mut e);
    assert_eq!(e.match_state().winner(), Some(Side::Ai));

    // Input and choices are ignored until the menu is up.
    let paddle_y = e.player().y;
    e.handle_input(PlayerInput {
        up: true,
        down: false,
    });
    assert_eq!(e.player().y, paddle_y);
    e.select(MenuChoice::BestOf(MatchLength::BestOf7));
    assert!(matches!(e.phase(), Phase::GameOver { .. }));

    run_to_menu(&mut e);
    e.select(MenuChoice::BestOf(MatchLength::BestOf7));

    let state = e.match_state();
    assert_eq!(state.phase, Phase::Playing);
    assert_eq!((state.player_score, state.ai_score), (0, 0));
    assert_eq!(state.winning_score, 4);
    assert_eq!(state.match_length, MatchLength::BestOf7);
    assert_eq!((e.ball().x, e.ball().y), (400.0, 300.0));
    assert_eq!(e.player().y, 250.0);
    assert_eq!(e.ai().y, 250.0);
}

#[test]
fn best_of_three_needs_two_wins() {
    let mut e = engine(9);
    e.set_scores(5, 0);
    e.update();
    run_to_menu(&mut e);
    e.select(MenuChoice::BestOf(MatchLength::BestOf3));
    assert_eq!(e.match_state().winning_score, 2);

    score_for_ai(&mut e);
    score_for_ai(&mut e);
    assert_eq!(e.match_state().winner(), Some(Side::Ai));
}

#[test]
fn quit_from_menu_is_terminal() {
    let mut e = engine(1);
    e.set_scores(3, 1);
    e.update();
    run_to_menu(&mut e);

    e.select(MenuChoice::Quit);
    assert!(e.is_exited());
    assert!(e.update().is_empty());
    e.select(MenuChoice::BestOf(MatchLength::BestOf3));
    assert!(e.is_exited());
}

#[test]
fn ai_paddle_stays_on_court_over_long_rally() {
    let mut e = engine(77);
    for _ in 0..5_000 {
        e.handle_input(PlayerInput {
            up: false,
            down: true,
        });
        e.update();
        if e.phase() != Phase::Playing {
            break;
        }
        assert!(e.ai().y >= 0.0 && e.ai().y <= 500.0);
        assert!(e.player().y >= 0.0 && e.player().y <= 500.0);
    }
}
