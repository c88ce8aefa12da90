use ::interface::game::{try_hex, Color};
use crate::animation::Animation;

use thiserror::Error;

/// Colors as rrggbb[aa] hex strings.
#[derive(Debug, Clone,Copy, PartialEq)]
pub struct Palette {
    pub background: &'static str,
    pub door: &'static str,
    pub wall: &'static str,
    pub ball: &'static str,
    pub text: &'static str,
}

#[derive(Debug, Clone,Copy, PartialEq)]
pub struct Config {
    pub title: &'static str,
    pub screen: [f32;2],
    pub door_size: [f32;2],
    pub wall_width: f32,
    pub include_ball: bool,
    pub ball_size: [f32;2],
    /// how far the ball moves along each axis per tick
    pub step: f32,
    /// Added to the ball position when drawing.
    /// `[20.0, 20.0]` reproduces the original demo, where the ball could go partly off screen.
    pub ball_draw_offset: [f32;2],
    /// Pulses the brightness of the ball.
    pub animate_ball: Option<Animation>,
    pub palette: Palette,
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{what} must be positive and finite, got {value}")]
    NotPositive { what: &'static str, value: f32 },
    #[error("a {ball:?} ball doesn't fit on a {screen:?} screen")]
    BallDoesntFit { ball: [f32;2], screen: [f32;2] },
    #[error("step {step} would jump past the {bound} wide range the ball bounces in")]
    StepTooLarge { step: f32, bound: f32 },
    #[error("{what} color {value:?} is not rrggbb or rrggbbaa")]
    Color { what: &'static str, value: &'static str },
    #[error("animation must have at least one frame and a nonzero frame duration")]
    EmptyAnimation,
    #[error("animation of {frame_count} frames of {ticks_per_frame} ticks is too long")]
    AnimationTooLong { frame_count: u32, ticks_per_frame: u32 },
}

impl Config {
    /// Door, wall and a bouncing ball.
    pub const WHEEL: Config = Config {
        title: "Wheel (Ebitengine Demo)",
        screen: [1152.0, 720.0],
        door_size: [10.0, 120.0],
        wall_width: 10.0,
        include_ball: true,
        ball_size: [20.0, 20.0],
        step: 2.0,
        ball_draw_offset: [0.0, 0.0],
        animate_ball: Some(Animation { frame_count: 8, ticks_per_frame: 5 }),
        palette: Palette {
            background: "000000",
            // same as the background, so only the wall shows where it is
            door: "000000",
            wall: "ff0000",
            ball: "0000ff",
            text: "ffffff",
        },
    };

    /// Only the door and the wall.
    pub const DOOR_ONLY: Config = Config {
        title: "Wheel (Ebitengine Demo)",
        screen: [640.0, 480.0],
        door_size: [10.0, 120.0],
        wall_width: 10.0,
        include_ball: false,
        ball_size: [20.0, 20.0],
        step: 2.0,
        ball_draw_offset: [0.0, 0.0],
        animate_ball: None,
        palette: Palette {
            background: "000000",
            door: "ffffff",
            wall: "ff0000",
            ball: "0000ff",
            text: "ffffff",
        },
    };

    /// The largest x and y the top left corner of the ball can have.
    pub fn ball_bounds(&self) -> [f32;2] {
        [self.screen[0]-self.ball_size[0], self.screen[1]-self.ball_size[1]]
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        fn positive(what: &'static str,  value: f32) -> Result<(), ConfigError> {
            if value > 0.0 && value.is_finite() {
                Ok(())
            } else {
                Err(ConfigError::NotPositive { what, value })
            }
        }
        fn color(what: &'static str,  value: &'static str) -> Result<Color, ConfigError> {
            try_hex(value).ok_or(ConfigError::Color { what, value })
        }

        positive("screen width", self.screen[0])?;
        positive("screen height", self.screen[1])?;
        positive("door width", self.door_size[0])?;
        positive("door height", self.door_size[1])?;
        positive("wall width", self.wall_width)?;
        color("background", self.palette.background)?;
        color("door", self.palette.door)?;
        color("wall", self.palette.wall)?;
        color("text", self.palette.text)?;
        if !self.include_ball {
            return Ok(());
        }

        positive("ball width", self.ball_size[0])?;
        positive("ball height", self.ball_size[1])?;
        positive("step", self.step)?;
        color("ball", self.palette.ball)?;
        let bounds = self.ball_bounds();
        if bounds[0] < 0.0 || bounds[1] < 0.0 {
            return Err(ConfigError::BallDoesntFit { ball: self.ball_size, screen: self.screen });
        }
        for bound in bounds {
            if self.step > bound {
                return Err(ConfigError::StepTooLarge { step: self.step, bound });
            }
        }
        match self.animate_ball {
            Some(animation) if animation.frame_count == 0 || animation.ticks_per_frame == 0 => {
                Err(ConfigError::EmptyAnimation)
            }
            Some(animation) if animation.period().is_none() => {
                Err(ConfigError::AnimationTooLong {
                    frame_count: animation.frame_count,
                    ticks_per_frame: animation.ticks_per_frame,
                })
            }
            _ => Ok(())
        }
    }
}
