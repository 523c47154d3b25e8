use crate::{
    ball::Ball,
    config::{AI_DEAD_ZONE, AI_STEP},
    geometry::Rect,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    /// Fixed for the lifetime of the paddle; only `y` moves.
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Shift the paddle vertically, staying inside `[0, court_height - height]`.
    pub fn move_by(&mut self, delta: f32, court_height: f32) {
        let max_y = (court_height - self.height).max(0.0);
        self.y = (self.y + delta).clamp(0.0, max_y);
    }

    /// Reactive AI: step toward the ball's centre at a fixed speed.
    pub fn auto_track(&mut self, ball: &Ball, court_height: f32) {
        let gap = ball.center_y() - self.center_y();
        let step = if gap > AI_DEAD_ZONE {
            AI_STEP
        } else if gap < -AI_DEAD_ZONE {
            -AI_STEP
        } else {
            0.0
        };
        self.move_by(step, court_height);
    }

    pub fn center(&mut self, court_height: f32) {
        self.y = (court_height / 2.0 - self.height / 2.0).max(0.0);
    }
}
