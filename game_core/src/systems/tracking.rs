use crate::{Ball, Config, Paddle, Side};
use hecs::World;

/// Vertical move for a tracking paddle centered at `center_y`
///
/// Steps a fixed amount toward `ball_y`, or holds inside the dead zone.
pub fn tracking_delta(center_y: f32, ball_y: f32, dead_zone: f32, step: f32) -> f32 {
    if ball_y < center_y - dead_zone {
        -step
    } else if ball_y > center_y + dead_zone {
        step
    } else {
        0.0
    }
}

/// Move the opponent paddle toward the ball, then clamp it to the field
pub fn track_ball(world: &mut World, config: &Config) {
    let ball_y = {
        let mut ball_query = world.query::<&Ball>();
        ball_query.iter().next().map(|(_e, ball)| ball.pos.y)
    };

    let Some(ball_y) = ball_y else {
        return; // No ball in world
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side != Side::Right {
            continue;
        }

        paddle.y += tracking_delta(paddle.center_y(), ball_y, config.ai_dead_zone, config.ai_step);
        paddle.y = config.clamp_paddle_y(paddle.y);
    }
}
