/// Game tuning parameters for the rally
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_MARGIN: f32 = 20.0; // Gap between field edge and paddle

    // Ball
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_SPEED: f32 = 6.0; // Units per tick after a paddle hit
    pub const BALL_INITIAL_DX: f32 = 6.0;
    pub const BALL_INITIAL_DY: f32 = 3.0;
    pub const MAX_DEFLECTION: f32 = std::f32::consts::FRAC_PI_4; // 45° at the paddle tip
    pub const RESET_DY_SPREAD: f32 = 8.0; // dy in [-4, 4) after a reset

    // Opponent tracking
    pub const AI_DEAD_ZONE: f32 = 10.0;
    pub const AI_STEP: f32 = 4.0; // Units per tick

    // Net
    pub const NET_SEGMENT: f32 = 15.0;
    pub const NET_GAP: f32 = 15.0;
}
