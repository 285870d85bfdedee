//! Game controller owning the whole simulation state

use hecs::World;

use crate::systems::{apply_pointer, reset_ball};
use crate::{create_ball, create_paddle, step, Ball, Config, Events, GameRng, Paddle, Side};

/// Read-only copy of everything the renderer needs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    pub tick: u64,
    pub field_width: f32,
    pub field_height: f32,
    pub ball: Ball,
    pub player: Paddle,
    pub opponent: Paddle,
}

/// Single owner of the rally: every mutation goes through [`Game::advance`]
/// or [`Game::set_pointer_y`].
pub struct Game {
    world: World,
    config: Config,
    events: Events,
    rng: GameRng,
    tick: u64,
}

impl Game {
    pub fn new(seed: u64) -> Self {
        Self::with_config(Config::new(), seed)
    }

    pub fn with_config(config: Config, seed: u64) -> Self {
        let mut world = World::new();

        // Create paddles
        let spawn_y = config.paddle_spawn_y();
        create_paddle(&mut world, &config, Side::Left, spawn_y);
        create_paddle(&mut world, &config, Side::Right, spawn_y);

        // Create ball
        create_ball(
            &mut world,
            &config,
            config.field_center(),
            config.ball_initial_vel,
        );

        log::info!(
            "Game created: field {}x{}, seed {}",
            config.field_width,
            config.field_height,
            seed
        );

        Self {
            world,
            config,
            events: Events::new(),
            rng: GameRng::new(seed),
            tick: 0,
        }
    }

    /// Advance the simulation by one tick
    pub fn advance(&mut self) {
        step(&mut self.world, &self.config, &mut self.events, &mut self.rng);
        self.tick += 1;

        if self.events.ball_reset {
            log::debug!("Tick {}: ball reset", self.tick);
        }
    }

    /// Move the player paddle to follow a field-relative pointer Y
    pub fn set_pointer_y(&mut self, pointer_y: f32) {
        apply_pointer(&mut self.world, &self.config, pointer_y);
    }

    /// Serve from the center with a fresh random direction
    pub fn reset_ball(&mut self) {
        reset_ball(&mut self.world, &self.config, &mut self.rng);
    }

    pub fn snapshot(&self) -> Snapshot {
        let mut player = Paddle::spawn(&self.config, Side::Left);
        let mut opponent = Paddle::spawn(&self.config, Side::Right);
        for (_e, paddle) in self.world.query::<&Paddle>().iter() {
            match paddle.side {
                Side::Left => player = *paddle,
                Side::Right => opponent = *paddle,
            }
        }

        let ball = self
            .world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
            .unwrap_or_else(|| Ball::spawn(&self.config));

        Snapshot {
            tick: self.tick,
            field_width: self.config.field_width,
            field_height: self.config.field_height,
            ball,
            player,
            opponent,
        }
    }

    /// Events raised by the most recent tick
    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn world(&self) -> &World {
        &self.world
    }
}
