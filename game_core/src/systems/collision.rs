use crate::{Ball, Config, Events, Paddle, Side};
use hecs::World;

/// Reflect the ball off the top and bottom walls
///
/// The ball is clamped back inside the field and `dy` flips sign with its
/// magnitude unchanged.
pub fn bounce_walls(world: &mut World, config: &Config, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.y - ball.radius < 0.0 {
            ball.pos.y = ball.radius;
            ball.vel.y = -ball.vel.y;
            events.wall_bounce = true;
        } else if ball.pos.y + ball.radius > config.field_height {
            ball.pos.y = config.field_height - ball.radius;
            ball.vel.y = -ball.vel.y;
            events.wall_bounce = true;
        }
    }
}

/// Check the ball against both paddles, player first
pub fn check_paddle_collisions(world: &mut World, config: &Config, events: &mut Events) {
    // Copy paddles out so the ball can be borrowed mutably
    let mut paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();
    paddles.sort_by_key(|paddle| paddle.side);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        for paddle in &paddles {
            if !paddle.spans_y(ball.pos.y) {
                continue;
            }

            match paddle.side {
                Side::Left if ball.pos.x - ball.radius < paddle.right() => {
                    // Flush against the face so the next tick can't re-trigger
                    ball.pos.x = paddle.right() + ball.radius;
                    ball.deflect(paddle, 1.0, config.max_deflection);
                    events.player_hit = true;
                    log::debug!("Player paddle hit at y={:.1}", ball.pos.y);
                }
                Side::Right if ball.pos.x + ball.radius > paddle.x => {
                    ball.pos.x = paddle.x - ball.radius;
                    ball.deflect(paddle, -1.0, config.max_deflection);
                    events.opponent_hit = true;
                    log::debug!("Opponent paddle hit at y={:.1}", ball.pos.y);
                }
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, Ball, Config, Events};
    use glam::Vec2;

    fn setup_world() -> (hecs::World, Config, Events) {
        (hecs::World::new(), Config::new(), Events::new())
    }

    fn read_ball(world: &hecs::World) -> Ball {
        let mut query = world.query::<&Ball>();
        let (_e, ball) = query.iter().next().expect("ball exists");
        *ball
    }

    #[test]
    fn test_ball_bounces_off_top_wall() {
        let (mut world, config, mut events) = setup_world();
        create_ball(&mut world, &config, Vec2::new(200.0, 4.0), Vec2::new(6.0, -5.0));

        bounce_walls(&mut world, &config, &mut events);

        let ball = read_ball(&world);
        assert_eq!(ball.pos.y, config.ball_radius, "Clamped to the top wall");
        assert_eq!(ball.vel.y, 5.0, "dy flips with the same magnitude");
        assert_eq!(ball.vel.x, 6.0, "dx is unchanged");
        assert!(events.wall_bounce);
    }

    #[test]
    fn test_ball_bounces_off_bottom_wall() {
        let (mut world, config, mut events) = setup_world();
        create_ball(&mut world, &config, Vec2::new(200.0, 595.0), Vec2::new(-6.0, 3.5));

        bounce_walls(&mut world, &config, &mut events);

        let ball = read_ball(&world);
        assert_eq!(ball.pos.y, config.field_height - config.ball_radius);
        assert_eq!(ball.vel.y, -3.5);
        assert!(events.wall_bounce);
    }

    #[test]
    fn test_ball_touching_wall_does_not_bounce() {
        let (mut world, config, mut events) = setup_world();
        create_ball(&mut world, &config, Vec2::new(200.0, 10.0), Vec2::new(6.0, -5.0));

        bounce_walls(&mut world, &config, &mut events);

        assert_eq!(read_ball(&world).vel.y, -5.0);
        assert!(!events.wall_bounce);
    }

    #[test]
    fn test_center_hit_on_player_paddle_is_horizontal() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, &config, Side::Left, 250.0);
        create_ball(&mut world, &config, Vec2::new(35.0, 300.0), Vec2::new(-6.0, 2.0));

        check_paddle_collisions(&mut world, &config, &mut events);

        let ball = read_ball(&world);
        assert_eq!(ball.vel.x, config.ball_speed);
        assert_eq!(ball.vel.y, 0.0);
        assert_eq!(ball.pos.x, 20.0 + 10.0 + config.ball_radius, "Flush with paddle face");
        assert!(events.player_hit);
        assert!(!events.opponent_hit);
    }

    #[test]
    fn test_ball_collides_with_opponent_paddle() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, &config, Side::Right, 250.0);
        create_ball(&mut world, &config, Vec2::new(765.0, 275.0), Vec2::new(6.0, 0.0));

        check_paddle_collisions(&mut world, &config, &mut events);

        let ball = read_ball(&world);
        assert!(ball.vel.x < 0.0, "Ball should head back left");
        assert!(ball.vel.y < 0.0, "Upper half deflects upward");
        assert!((ball.vel.length() - config.ball_speed).abs() < 1e-4);
        assert_eq!(ball.pos.x, 770.0 - config.ball_radius);
        assert!(events.opponent_hit);
    }

    #[test]
    fn test_ball_level_with_paddle_edge_passes() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, &config, Side::Left, 250.0);
        create_ball(&mut world, &config, Vec2::new(35.0, 250.0), Vec2::new(-6.0, 0.0));

        check_paddle_collisions(&mut world, &config, &mut events);
        assert!(!events.player_hit, "Top edge is not part of the paddle");

        for (_e, ball) in world.query_mut::<&mut Ball>() {
            ball.pos.y = 350.0;
        }
        check_paddle_collisions(&mut world, &config, &mut events);
        assert!(!events.player_hit, "Bottom edge is not part of the paddle");
        assert_eq!(read_ball(&world).vel, Vec2::new(-6.0, 0.0));
    }

    #[test]
    fn test_ball_short_of_paddle_does_not_collide() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, &config, Side::Left, 250.0);
        create_paddle(&mut world, &config, Side::Right, 250.0);
        create_ball(&mut world, &config, Vec2::new(400.0, 300.0), Vec2::new(-6.0, 0.0));

        check_paddle_collisions(&mut world, &config, &mut events);

        assert!(!events.player_hit && !events.opponent_hit);
        assert_eq!(read_ball(&world).pos, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_no_collision_when_no_ball() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, &config, Side::Left, 250.0);

        check_paddle_collisions(&mut world, &config, &mut events);
        bounce_walls(&mut world, &config, &mut events);

        assert!(!events.any());
    }
}
