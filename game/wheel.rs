/* Copyright 2018 Torbjørn Birch Moltu
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see <http://www.gnu.org/licenses/>.
 */

use ::interface::game::*;
use crate::animation::FrameCounter;
use crate::config::Config;
use crate::sim::SimulationState;

use std::mem;

/// font size in logical pixels
const TEXT_SIZE: f32 = 16.0;
const TEXT_MARGIN: f32 = 4.0;
const LINE_SPACING: f32 = 1.25;
const HINT: &str = "Move the red point by mouse wheel";
/// how much darker the ball gets at the dimmest animation frame
const PULSE_DEPTH: f32 = 0.5;

#[derive(Debug, Clone,Copy, PartialEq)]
pub struct Sprite {
    pub size: [f32;2],
    pub color: Color,
}

impl Sprite {
    fn draw_at(&self,  pos: [f32;2],  gfx: &mut Graphics) {
        gfx.rectangle(self.color, [pos[0], pos[1], self.size[0], self.size[1]]);
    }
}

/// Everything that is drawn but never changes.
#[derive(Debug, Clone,Copy, PartialEq)]
pub struct Sprites {
    pub background: Sprite,
    pub door: Sprite,
    pub wall: Sprite,
    pub ball: Sprite,
    pub text: Color,
}

impl Sprites {
    /// Panics on invalid colors, which `Config::validate()` would have rejected.
    pub fn new(config: &Config) -> Self {
        let palette = &config.palette;
        Sprites {
            background: Sprite { size: config.screen, color: hex(palette.background) },
            door: Sprite { size: config.door_size, color: hex(palette.door) },
            wall: Sprite { size: [config.wall_width, config.screen[1]], color: hex(palette.wall) },
            ball: Sprite {
                size: config.ball_size,
                color: match config.include_ball {
                    true => hex(palette.ball),
                    false => [0.0; 4],
                },
            },
            text: hex(palette.text),
        }
    }
}

/// Dim a color towards black by `fraction`, keeping alpha.
fn dim([r, g, b, a]: Color,  fraction: f32) -> Color {
    let keep = 1.0 - fraction;
    [r*keep, g*keep, b*keep, a]
}

pub struct Wheel {
    config: Config,
    sprites: Sprites,
    state: SimulationState,
    /// scrolled since the last update
    wheel: f32,
    ball_frames: FrameCounter,
}

impl Wheel {
    pub fn new(config: Config) -> Self {
        Wheel {
            sprites: Sprites::new(&config),
            state: SimulationState::new(&config),
            config,
            wheel: 0.0,
            ball_frames: FrameCounter::default(),
        }
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    fn debug_text(&self) -> String {
        let [width, height] = self.config.screen;
        match &self.state.ball {
            Some(ball) => format!(
                "({:.2}, {:.2}, {}, {}, directionX: {}, directionY: {})",
                ball.pos[0], ball.pos[1], width, height, ball.rightward, ball.downward,
            ),
            None => format!("({:.2}, {:.2})", self.state.door[0], self.state.door[1]),
        }
    }
}

impl Game for Wheel {
    fn layout(&self) -> [f32;2] {
        self.config.screen
    }

    fn update(&mut self,  _: f32) -> Result<(), UpdateError> {
        let dy = mem::take(&mut self.wheel);
        self.state.step(&self.config, dy);
        if let Some(animation) = &self.config.animate_ball {
            self.ball_frames.advance(animation);
        }
        Ok(())
    }

    fn render(&mut self,  gfx: &mut Graphics) {
        let [width, height] = self.config.screen;
        let sprites = &self.sprites;
        sprites.background.draw_at([0.0, 0.0], gfx);
        sprites.wall.draw_at([width/2.0, 0.0], gfx);
        let door = self.state.door;
        sprites.door.draw_at([door[0] + width/2.0, door[1] + height/2.0], gfx);

        if let Some(ball) = &self.state.ball {
            let mut sprite = sprites.ball;
            if let Some(animation) = &self.config.animate_ball {
                let frame = animation.frame_index(self.ball_frames.count());
                let fraction = frame as f32 / animation.frame_count as f32;
                sprite.color = dim(sprite.color, fraction*PULSE_DEPTH);
            }
            let offset = self.config.ball_draw_offset;
            sprite.draw_at([ball.pos[0] + offset[0], ball.pos[1] + offset[1]], gfx);
        }

        gfx.text(
                sprites.text,
                [TEXT_MARGIN, TEXT_MARGIN],
                [Align::Left, Align::Left],
                TEXT_SIZE,
                HINT,
        );
        gfx.text(
                sprites.text,
                [TEXT_MARGIN, TEXT_MARGIN + TEXT_SIZE*LINE_SPACING],
                [Align::Left, Align::Left],
                TEXT_SIZE,
                self.debug_text(),
        );
    }

    fn mouse_wheel(&mut self,  delta: [f32; 2]) {
        self.wheel += delta[1];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Ball;

    fn rectangles(gfx: &Graphics) -> Vec<[f32;4]> {
        gfx.shapes().iter().filter_map(|shape| match shape {
            Shape::Rectangle { area, .. } => Some(*area),
            _ => None,
        }).collect()
    }

    fn text(gfx: &Graphics) -> &str {
        gfx.shapes().iter().find_map(|shape| match shape {
            Shape::DynamicText { text, .. } => Some(text.as_str()),
            _ => None,
        }).expect("debug text")
    }

    #[test]
    fn draws_background_wall_door_and_ball() {
        let mut game = Wheel::new(Config::WHEEL);
        let mut gfx = Graphics::default();
        game.render(&mut gfx);
        assert_eq!(rectangles(&gfx), vec![
            [0.0, 0.0, 1152.0, 720.0],
            [576.0, 0.0, 10.0, 720.0],
            [576.0, 360.0, 10.0, 120.0],
            [0.0, 0.0, 20.0, 20.0],
        ]);
    }

    #[test]
    fn ball_axes_are_drawn_independently() {
        let mut game = Wheel::new(Config::WHEEL);
        game.state.ball = Some(Ball { pos: [100.0, 30.0], rightward: true, downward: false });
        let mut gfx = Graphics::default();
        game.render(&mut gfx);
        assert_eq!(rectangles(&gfx)[3], [100.0, 30.0, 20.0, 20.0]);
    }

    #[test]
    fn ball_draw_offset_is_applied() {
        let mut game = Wheel::new(Config { ball_draw_offset: [20.0, 20.0], ..Config::WHEEL });
        let mut gfx = Graphics::default();
        game.render(&mut gfx);
        assert_eq!(rectangles(&gfx)[3], [20.0, 20.0, 20.0, 20.0]);
    }

    #[test]
    fn ball_pulse_follows_ticks_not_draws() {
        let ball_color = |game: &mut Wheel| {
            let mut gfx = Graphics::default();
            game.render(&mut gfx);
            match gfx.shapes()[3] {
                Shape::Rectangle { color, .. } => color,
                _ => panic!("expected the ball"),
            }
        };
        let blue = hex("0000ff");

        let mut game = Wheel::new(Config::WHEEL);
        for _ in 0..20 {
            assert_eq!(ball_color(&mut game), blue);
        }
        for _ in 0..4 {
            game.update(1.0/60.0).unwrap();
        }
        assert_eq!(ball_color(&mut game), blue);
        game.update(1.0/60.0).unwrap();
        let dimmed = ball_color(&mut game);
        assert!(dimmed[2] < 1.0);
        assert_eq!(ball_color(&mut game), dimmed);

        let mut still = Wheel::new(Config { animate_ball: None, ..Config::WHEEL });
        for _ in 0..5 {
            still.update(1.0/60.0).unwrap();
        }
        assert_eq!(ball_color(&mut still), blue);
    }

    #[test]
    fn door_only_draws_no_ball() {
        let mut game = Wheel::new(Config::DOOR_ONLY);
        let mut gfx = Graphics::default();
        game.render(&mut gfx);
        assert_eq!(rectangles(&gfx), vec![
            [0.0, 0.0, 640.0, 480.0],
            [320.0, 0.0, 10.0, 480.0],
            [320.0, 240.0, 10.0, 120.0],
        ]);
        assert!(matches!(
            gfx.shapes()[3],
            Shape::StaticText { text: "Move the red point by mouse wheel", .. }
        ));
        assert_eq!(text(&gfx), "(0.00, 0.00)");
    }

    #[test]
    fn wheel_is_consumed_by_the_next_update() {
        let mut game = Wheel::new(Config::DOOR_ONLY);
        game.mouse_wheel([0.0, 5.0]);
        game.mouse_wheel([1.0, -3.0]);
        game.update(1.0/60.0).unwrap();
        assert_eq!(game.state().door, [0.0, 2.0]);
        game.update(1.0/60.0).unwrap();
        assert_eq!(game.state().door, [0.0, 2.0]);
        game.mouse_wheel([0.0, 2.0]);
        game.update(1.0/60.0).unwrap();
        assert_eq!(game.state().door, [0.0, 4.0]);

        let mut gfx = Graphics::default();
        game.render(&mut gfx);
        assert_eq!(rectangles(&gfx)[2], [320.0, 244.0, 10.0, 120.0]);
    }

    #[test]
    fn debug_text_shows_ball_state() {
        let mut game = Wheel::new(Config::WHEEL);
        game.update(1.0/60.0).unwrap();
        let mut gfx = Graphics::default();
        game.render(&mut gfx);
        assert_eq!(
            text(&gfx),
            "(2.00, 2.00, 1152, 720, directionX: true, directionY: true)",
        );
    }

    #[test]
    fn layout_is_the_screen_size() {
        assert_eq!(Wheel::new(Config::WHEEL).layout(), [1152.0, 720.0]);
        assert_eq!(Wheel::new(Config::DOOR_ONLY).layout(), [640.0, 480.0]);
    }
}
