use crate::{Ball, Config, Events, GameRng};
use hecs::World;

/// Reset the ball once it has fully left the field on either side
///
/// No score is kept; the reset is the only consequence of a miss.
pub fn check_ball_exit(world: &mut World, config: &Config, events: &mut Events, rng: &mut GameRng) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let exited_left = ball.pos.x - ball.radius < 0.0;
        let exited_right = ball.pos.x + ball.radius > config.field_width;

        if exited_left || exited_right {
            ball.reset(config.field_center(), config.reset_dy_spread, rng);
            events.ball_reset = true;
            log::debug!(
                "Ball left the field on the {} side, serving ({:.2}, {:.2})",
                if exited_left { "left" } else { "right" },
                ball.vel.x,
                ball.vel.y
            );
        }
    }
}

/// Serve the ball from the center regardless of where it is
pub fn reset_ball(world: &mut World, config: &Config, rng: &mut GameRng) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.reset(config.field_center(), config.reset_dy_spread, rng);
    }
}
