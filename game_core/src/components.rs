use glam::Vec2;
use rand::Rng;

use crate::{Config, GameRng};

/// Which edge of the field a paddle guards
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Side {
    Left,  // Player, pointer controlled
    Right, // Opponent, tracking controlled
}

/// Paddle component - a vertically movable rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub x: f32, // Left edge, fixed after spawn
    pub y: f32, // Top edge, clamped to the field
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    pub fn new(side: Side, x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            side,
            x,
            y,
            width,
            height,
        }
    }

    /// Paddle at its configured X, centered vertically
    pub fn spawn(config: &Config, side: Side) -> Self {
        Self::new(
            side,
            config.paddle_x(side),
            config.paddle_spawn_y(),
            config.paddle_width,
            config.paddle_height,
        )
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Open-interval test: a point level with either edge is outside
    pub fn spans_y(&self, y: f32) -> bool {
        y > self.y && y < self.y + self.height
    }

    /// Offset of `y` from the paddle center, normalized to the half-height
    pub fn collide_point(&self, y: f32) -> f32 {
        (y - self.center_y()) / (self.height / 2.0)
    }
}

/// Ball component
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2, // Units per tick
    pub radius: f32,
    pub speed: f32, // Magnitude restored on every paddle hit
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, speed: f32) -> Self {
        Self {
            pos,
            vel,
            radius,
            speed,
        }
    }

    /// Ball at the field center with the configured opening velocity
    pub fn spawn(config: &Config) -> Self {
        Self::new(
            config.field_center(),
            config.ball_initial_vel,
            config.ball_radius,
            config.ball_speed,
        )
    }

    /// Send the ball back to `center` with a random serve
    ///
    /// `dx` is `±speed` and `dy` is drawn independently from
    /// `[-dy_spread / 2, dy_spread / 2)`, so the resulting magnitude is
    /// generally not `speed`.
    pub fn reset(&mut self, center: Vec2, dy_spread: f32, rng: &mut GameRng) {
        self.pos = center;

        let dx = if rng.0.gen_bool(0.5) {
            self.speed
        } else {
            -self.speed
        };
        let dy = (rng.0.gen::<f32>() - 0.5) * dy_spread;

        self.vel = Vec2::new(dx, dy);
    }

    /// Leave a paddle at exactly `speed`, angled by where it was struck
    ///
    /// `direction` is +1 to send the ball right, -1 to send it left.
    pub fn deflect(&mut self, paddle: &Paddle, direction: f32, max_angle: f32) {
        let angle = paddle.collide_point(self.pos.y) * max_angle;
        self.vel = Vec2::new(
            direction * self.speed * angle.cos(),
            self.speed * angle.sin(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_4;

    fn player_paddle() -> Paddle {
        Paddle::new(Side::Left, 20.0, 250.0, 10.0, 100.0)
    }

    #[test]
    fn test_paddle_span_is_open_interval() {
        let paddle = player_paddle();
        assert!(!paddle.spans_y(250.0), "Top edge is outside");
        assert!(!paddle.spans_y(350.0), "Bottom edge is outside");
        assert!(paddle.spans_y(250.01));
        assert!(paddle.spans_y(300.0));
    }

    #[test]
    fn test_collide_point_range() {
        let paddle = player_paddle();
        assert_eq!(paddle.collide_point(300.0), 0.0);
        assert_eq!(paddle.collide_point(250.0), -1.0);
        assert_eq!(paddle.collide_point(350.0), 1.0);
        assert_eq!(paddle.collide_point(325.0), 0.5);
    }

    #[test]
    fn test_deflect_from_edge_is_steep() {
        let paddle = player_paddle();
        let mut ball = Ball::new(Vec2::new(40.0, 349.0), Vec2::new(-6.0, 0.0), 10.0, 6.0);
        ball.deflect(&paddle, 1.0, FRAC_PI_4);

        assert!(ball.vel.x > 0.0);
        assert!(ball.vel.y > 0.0, "Lower half sends the ball down");
        assert!((ball.vel.length() - 6.0).abs() < 1e-4);
        let angle = ball.vel.y.atan2(ball.vel.x);
        assert!((angle - 0.98 * FRAC_PI_4).abs() < 1e-4);
    }

    #[test]
    fn test_reset_keeps_dx_at_speed() {
        let mut rng = GameRng::new(7);
        let mut ball = Ball::new(Vec2::new(-5.0, 20.0), Vec2::new(-6.0, 2.0), 10.0, 6.0);
        for _ in 0..50 {
            ball.reset(Vec2::new(400.0, 300.0), 8.0, &mut rng);
            assert_eq!(ball.pos, Vec2::new(400.0, 300.0));
            assert_eq!(ball.vel.x.abs(), 6.0);
            assert!(ball.vel.y >= -4.0 && ball.vel.y <= 4.0);
        }
    }
}
