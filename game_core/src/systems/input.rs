use crate::{Config, Paddle, Side};
use hecs::World;

/// Place the player paddle under the pointer
///
/// `pointer_y` is relative to the top of the field. The paddle is centered on
/// it and clamped; non-finite coordinates are dropped.
pub fn apply_pointer(world: &mut World, config: &Config, pointer_y: f32) {
    if !pointer_y.is_finite() {
        return;
    }

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == Side::Left {
            paddle.y = config.clamp_paddle_y(pointer_y - paddle.height / 2.0);
        }
    }
}
