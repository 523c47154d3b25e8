use rand::Rng;

use crate::{
    config::{BALL_SPEED_X, BALL_SPEED_Y},
    event::GameEvent,
    geometry::Rect,
    paddle::Paddle,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub velocity_x: f32,
    pub velocity_y: f32,
    spawn: (f32, f32),
    court_width: f32,
    court_height: f32,
}

/// Serve velocity: fixed speeds, random direction on each axis.
fn serve_velocity<R: Rng>(rng: &mut R) -> (f32, f32) {
    let vx = if rng.random_bool(0.5) {
        BALL_SPEED_X
    } else {
        -BALL_SPEED_X
    };
    let vy = if rng.random_bool(0.5) {
        BALL_SPEED_Y
    } else {
        -BALL_SPEED_Y
    };
    (vx, vy)
}

impl Ball {
    pub fn new<R: Rng>(
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        court_width: f32,
        court_height: f32,
        rng: &mut R,
    ) -> Self {
        let (velocity_x, velocity_y) = serve_velocity(rng);
        Self {
            x,
            y,
            width,
            height,
            velocity_x,
            velocity_y,
            spawn: (x, y),
            court_width,
            court_height,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn spawn(&self) -> (f32, f32) {
        self.spawn
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// True once the ball has touched or crossed the left wall.
    pub fn exited_left(&self) -> bool {
        self.x <= 0.0
    }

    pub fn exited_right(&self) -> bool {
        self.x + self.width >= self.court_width
    }

    /// Integrate one tick of motion. Reflects off the top and bottom walls
    /// without losing speed.
    pub fn advance(&mut self) -> Option<GameEvent> {
        self.x += self.velocity_x;
        self.y += self.velocity_y;

        if self.y <= 0.0 || self.y + self.height >= self.court_height {
            self.velocity_y = -self.velocity_y;
            return Some(GameEvent::WallBounce);
        }
        None
    }

    /// Resolve against the paddles by snapping the ball to the face it hit.
    /// At most one paddle is resolved per call, the player's first.
    pub fn check_collision(&mut self, player: &Paddle, ai: &Paddle) -> Option<GameEvent> {
        let rect = self.rect();
        if rect.overlaps(&player.rect()) {
            self.x = player.x + player.width;
            self.velocity_x = -self.velocity_x;
            Some(GameEvent::PaddleHit)
        } else if rect.overlaps(&ai.rect()) {
            self.x = ai.x - self.width;
            self.velocity_x = -self.velocity_x;
            Some(GameEvent::PaddleHit)
        } else {
            None
        }
    }

    /// Serve again from the spawn point with a fresh random direction.
    pub fn reset<R: Rng>(&mut self, rng: &mut R) -> GameEvent {
        (self.x, self.y) = self.spawn;
        (self.velocity_x, self.velocity_y) = serve_velocity(rng);
        GameEvent::Scored
    }
}
