/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this step
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Events {
    pub wall_bounce: bool,
    pub player_hit: bool,
    pub opponent_hit: bool,
    pub ball_reset: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.wall_bounce = false;
        self.player_hit = false;
        self.opponent_hit = false;
        self.ball_reset = false;
    }

    pub fn any(&self) -> bool {
        self.wall_bounce || self.player_hit || self.opponent_hit || self.ball_reset
    }
}
