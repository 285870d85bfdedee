pub mod components;
pub mod config;
pub mod game;
pub mod params;
pub mod render;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use game::*;
pub use params::*;
pub use render::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// Run one fixed tick of the rally simulation
///
/// The order matters: the ball moves, then bounces off walls, then paddles,
/// then is reset if it escaped; the opponent reacts last to the final ball
/// position.
pub fn step(world: &mut World, config: &Config, events: &mut Events, rng: &mut GameRng) {
    // Clear events at start of tick
    events.clear();

    // 1. Integrate ball position
    move_ball(world);

    // 2. Top/bottom walls
    bounce_walls(world, config, events);

    // 3-4. Player then opponent paddle
    check_paddle_collisions(world, config, events);

    // 5. Ball exited the field
    check_ball_exit(world, config, events, rng);

    // 6-7. Opponent tracking and clamp
    track_ball(world, config);
}

/// Helper to create a paddle entity with its top edge at `y`
pub fn create_paddle(world: &mut World, config: &Config, side: Side, y: f32) -> hecs::Entity {
    let mut paddle = Paddle::spawn(config, side);
    paddle.y = config.clamp_paddle_y(y);
    world.spawn((paddle,))
}

/// Helper to create the ball entity
pub fn create_ball(
    world: &mut World,
    config: &Config,
    pos: glam::Vec2,
    vel: glam::Vec2,
) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel, config.ball_radius, config.ball_speed),))
}
