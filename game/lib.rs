//! Game logic, kept free of engine dependencies.

mod animation;
mod config;
mod sim;
mod wheel;

pub use self::animation::{Animation, FrameCounter};
pub use self::config::{Config, ConfigError, Palette};
pub use self::sim::{Ball, SimulationState};
pub use self::wheel::{Sprite, Sprites, Wheel};

pub fn create_game(config: Config) -> Wheel {
    Wheel::new(config)
}
