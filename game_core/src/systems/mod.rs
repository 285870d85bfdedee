pub mod collision;
pub mod input;
pub mod movement;
pub mod respawn;
pub mod tracking;

pub use collision::*;
pub use input::*;
pub use movement::*;
pub use respawn::*;
pub use tracking::*;
