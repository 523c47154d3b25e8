use std::io::{self, Write};

use crate::{config::Config, event::GameEvent};

/// Consumer of the sound cues raised by the engine. Playback is
/// fire-and-forget: failures are logged, never reported back.
pub trait AudioSink {
    fn play(&mut self, cue: GameEvent);

    fn name(&self) -> &str;
}

#[derive(Debug, Default)]
pub struct Silent;

impl AudioSink for Silent {
    fn play(&mut self, _cue: GameEvent) {}

    fn name(&self) -> &str {
        "silent"
    }
}

/// Rings the terminal bell (BEL) for the selected cues.
#[derive(Debug)]
pub struct TerminalBell<W: Write> {
    out: W,
    cues: Vec<GameEvent>,
}

impl<W: Write> TerminalBell<W> {
    pub fn new(out: W, cues: Vec<GameEvent>) -> Self {
        Self { out, cues }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> AudioSink for TerminalBell<W> {
    fn play(&mut self, cue: GameEvent) {
        if !self.cues.contains(&cue) {
            return;
        }
        if let Err(e) = self.out.write_all(b"\x07").and_then(|_| self.out.flush()) {
            log::warn!("bell for {:?} failed: {}", cue, e);
        }
    }

    fn name(&self) -> &str {
        "bell"
    }
}

pub fn from_config(config: &Config) -> Box<dyn AudioSink> {
    let sink: Box<dyn AudioSink> = if config.mute || config.bell_on.is_empty() {
        Box::new(Silent)
    } else {
        Box::new(TerminalBell::new(io::stdout(), config.bell_on.clone()))
    };
    log::info!("audio: {}", sink.name());
    sink
}
