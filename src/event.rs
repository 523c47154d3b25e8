use clap::ValueEnum;

/// Physics events raised during a tick. The engine hands them to whoever
/// plays sounds; the physics code itself never does I/O.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum GameEvent {
    /// Ball bounced off the top or bottom wall.
    WallBounce,
    /// Ball bounced off a paddle.
    PaddleHit,
    /// Ball left the court and was served again from the centre.
    Scored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Player,
    Ai,
}

impl Side {
    pub fn label(&self) -> &'static str {
        match self {
            Side::Player => "Player",
            Side::Ai => "AI",
        }
    }
}
