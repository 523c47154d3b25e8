use std::{
    io,
    time::{Duration, Instant},
};

use anyhow::Context;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::supports_keyboard_enhancement,
};
use rand::{rngs::StdRng, SeedableRng};
use ratatui::DefaultTerminal;

use terminal_pong::{
    audio::{self, AudioSink},
    config::{Config, COURT_HEIGHT, COURT_WIDTH, MIN_TERMINAL_HEIGHT, MIN_TERMINAL_WIDTH},
    engine::{GameEngine, Phase},
    error::PongError,
    game_theme::GameTheme,
    input::{menu_choice, with_key_release_reporting, HeldKeys},
    logging, ui,
};

struct App {
    engine: GameEngine,
    held: HeldKeys,
    theme: GameTheme,
    audio: Box<dyn AudioSink>,
    frame_duration: Duration,
}

impl App {
    fn new(config: &Config, reports_release: bool) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Self {
            engine: GameEngine::new(
                COURT_WIDTH,
                COURT_HEIGHT,
                config.best_of,
                config.game_over_frames(),
                rng,
            ),
            held: HeldKeys::new(reports_release),
            theme: config.theme,
            audio: audio::from_config(config),
            frame_duration: config.frame_duration(),
        }
    }

    pub fn run(&mut self, mut terminal: DefaultTerminal) -> io::Result<()> {
        let mut last_tick = Instant::now();
        let mut too_small = false;

        while !self.engine.is_exited() {
            let size = terminal.size()?;
            if size.width < MIN_TERMINAL_WIDTH || size.height < MIN_TERMINAL_HEIGHT {
                if !too_small {
                    log::warn!("terminal too small: {}x{}", size.width, size.height);
                    too_small = true;
                    self.held.clear();
                }
                self.handle_events(Duration::from_millis(50))?;
                terminal.draw(|frame| {
                    ui::draw_resize_warning(frame, self.theme, MIN_TERMINAL_WIDTH, MIN_TERMINAL_HEIGHT)
                })?;
                continue;
            }
            if too_small {
                too_small = false;
                last_tick = Instant::now();
            }

            self.handle_events(self.frame_duration.saturating_sub(last_tick.elapsed()))?;

            if last_tick.elapsed() >= self.frame_duration {
                last_tick = Instant::now();
                self.tick(last_tick);
            }

            let state = self.engine.match_state();
            let scene = self.engine.scene();
            terminal.draw(|frame| ui::draw(frame, &state, &scene, self.theme))?;
        }

        Ok(())
    }

    fn tick(&mut self, now: Instant) {
        self.engine.handle_input(self.held.player_input(now));
        for cue in self.engine.update() {
            self.audio.play(cue);
        }
    }

    /// Wait up to `timeout` for input, then drain everything already queued.
    fn handle_events(&mut self, timeout: Duration) -> io::Result<()> {
        if !event::poll(timeout)? {
            return Ok(());
        }
        loop {
            if let Event::Key(key_event) = event::read()? {
                self.handle_key_event(key_event);
            }
            if !event::poll(Duration::ZERO)? {
                break;
            }
        }
        Ok(())
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) {
        if key_event.kind == KeyEventKind::Release {
            self.held.release(key_event.code);
            return;
        }
        if key_event.code == KeyCode::Char('c') && key_event.modifiers.contains(KeyModifiers::CONTROL) {
            self.engine.quit();
            return;
        }

        let is_press = key_event.kind == KeyEventKind::Press;
        match self.engine.phase() {
            Phase::ReplayMenu => {
                if let Some(choice) = menu_choice(key_event.code).filter(|_| is_press) {
                    self.held.clear();
                    if let Some(cue) = self.engine.select(choice) {
                        self.audio.play(cue);
                    }
                }
            }
            Phase::Playing if self.engine.match_state().paused => match key_event.code {
                KeyCode::Char('p') | KeyCode::Enter if is_press => self.engine.toggle_pause(),
                KeyCode::Char('t') if is_press => self.theme = self.theme.next(),
                KeyCode::Esc | KeyCode::Char('q') => self.engine.quit(),
                _ => {}
            },
            _ => match key_event.code {
                KeyCode::Esc | KeyCode::Char('q') => self.engine.quit(),
                KeyCode::Char('p') if is_press => {
                    self.held.clear();
                    self.engine.toggle_pause();
                }
                code => {
                    self.held.press(code, Instant::now());
                }
            },
        }
    }
}

fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    logging::init(&config).context("failed to set up logging")?;

    let reports_release = matches!(supports_keyboard_enhancement(), Ok(true));
    log::info!("key release events: {}", reports_release);

    let mut app = App::new(&config, reports_release);

    // Every path after init, including a failed flag push, ends in restore.
    let terminal = ratatui::init();
    let app_result =
        with_key_release_reporting(&mut io::stdout(), reports_release, || app.run(terminal));
    ratatui::restore();

    let state = app.engine.match_state();
    match &app_result {
        Ok(()) => {
            println!("Thanks for playing terminal.pong! 🏓");
            println!("Final Score: {} - {}", state.player_score, state.ai_score);
        }
        Err(e) => {
            log::error!("game loop failed: {}", e);
        }
    }

    app_result
        .map_err(PongError::from)
        .context("game ended with an error")
}
