use glam::Vec2;

use crate::{Params, Side};

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub field_width: f32,
    pub field_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_margin: f32,
    pub ball_radius: f32,
    pub ball_speed: f32,
    pub ball_initial_vel: Vec2,
    pub max_deflection: f32,
    pub reset_dy_spread: f32,
    pub ai_dead_zone: f32,
    pub ai_step: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: Params::FIELD_WIDTH,
            field_height: Params::FIELD_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_margin: Params::PADDLE_MARGIN,
            ball_radius: Params::BALL_RADIUS,
            ball_speed: Params::BALL_SPEED,
            ball_initial_vel: Vec2::new(Params::BALL_INITIAL_DX, Params::BALL_INITIAL_DY),
            max_deflection: Params::MAX_DEFLECTION,
            reset_dy_spread: Params::RESET_DY_SPREAD,
            ai_dead_zone: Params::AI_DEAD_ZONE,
            ai_step: Params::AI_STEP,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Left edge X of the paddle on the given side
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_margin,
            Side::Right => self.field_width - self.paddle_margin - self.paddle_width,
        }
    }

    /// Clamp a paddle's top edge into `[0, field_height - paddle_height]`
    ///
    /// Falls back to 0 when the paddle is taller than the field.
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.min(self.field_height - self.paddle_height).max(0.0)
    }

    /// Top edge Y that centers a paddle vertically
    pub fn paddle_spawn_y(&self) -> f32 {
        self.field_height / 2.0 - self.paddle_height / 2.0
    }

    pub fn field_center(&self) -> Vec2 {
        Vec2::new(self.field_width / 2.0, self.field_height / 2.0)
    }
}
