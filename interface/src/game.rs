use std::borrow::Cow;
use std::error::Error;
use std::vec::Drain;

pub type Color = [f32;4];

/// Parse a hex string of 6 or 8 bytes into a color.
/// Format is rrggbbaa, where the aa is optional.
pub fn try_hex(color: &str) -> Option<Color> {
    // from_str_radix() would also accept a sign
    if !color.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let a = match color.len() {
        8 => u8::from_str_radix(&color[6..], 16).ok()?,
        6 => 255,
        _ => return None
    };
    let r = u8::from_str_radix(&color[..2], 16).ok()?;
    let g = u8::from_str_radix(&color[2..4], 16).ok()?;
    let b = u8::from_str_radix(&color[4..6], 16).ok()?;
    Some([r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a as f32 / 255.0])
}

/// Like `try_hex()`, but for color literals that are known to be valid.
#[track_caller]
pub fn hex(color: &str) -> Color {
    match try_hex(color) {
        Some(color) => color,
        None => panic!("color string must be 6 or 8 hex characters, got {:?}", color)
    }
}

#[derive(Debug, Clone,Copy, PartialEq,Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

/// Everything is in logical screen coordinates, as returned by `Game::layout()`.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// area is [x, y, width, height]
    Rectangle { color: Color,  area: [f32;4] },
    StaticText {
        color: Color,
        size: f32,
        position: [f32;2],
        center: [Align;2],
        text: &'static str,
    },
    DynamicText {
        color: Color,
        size: f32,
        position: [f32;2],
        center: [Align;2],
        text: String,
    },
}

/// Records shapes for the engine to draw after `Game::render()` returns.
#[derive(Debug, Default)]
pub struct Graphics {
    shapes: Vec<Shape>,
}

impl Graphics {
    pub fn rectangle(&mut self,  color: Color,  area: [f32;4]) {
        self.shapes.push(Shape::Rectangle { color, area });
    }
    /// `size` is the font size, in the same units as positions.
    pub fn text(&mut self,
            color: Color,
            position: [f32;2],
            center: [Align;2],
            size: f32,
            text: impl Into<Cow<'static, str>>,
    ) {
        self.shapes.push(match text.into() {
            Cow::Borrowed(text) => Shape::StaticText { color, size, position, center, text },
            Cow::Owned(text) => Shape::DynamicText { color, size, position, center, text },
        });
    }
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }
    pub fn drain(&mut self) -> Drain<'_, Shape> {
        self.shapes.drain(..)
    }
}

/// Returned by `Game::update()` to stop the game.
pub type UpdateError = Box<dyn Error + Send + Sync>;

pub trait Game {
    /// The logical screen size, which the engine scales to fit the window.
    fn layout(&self) -> [f32;2];
    /// Called at a fixed rate, `dt` is the measured time since the previous call.
    fn update(&mut self,  dt: f32) -> Result<(), UpdateError>;
    fn render(&mut self,  gfx: &mut Graphics);
    /// Scroll distance in lines, positive y is away from the user.
    fn mouse_wheel(&mut self,  delta: [f32; 2]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_with_and_without_alpha() {
        assert_eq!(try_hex("ff0000"), Some([1.0, 0.0, 0.0, 1.0]));
        assert_eq!(try_hex("0000ff00"), Some([0.0, 0.0, 1.0, 0.0]));
        assert_eq!(hex("000000"), [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn hex_rejects_garbage() {
        assert_eq!(try_hex("fff"), None);
        assert_eq!(try_hex("gg0000"), None);
        assert_eq!(try_hex("ff00ff0"), None);
        assert_eq!(try_hex("ææææ"), None);
        assert_eq!(try_hex("+f0000"), None);
        assert_eq!(try_hex("00ff00-1"), None);
    }

    #[test]
    #[should_panic]
    fn hex_panics_on_invalid_literal() {
        hex("red");
    }

    #[test]
    fn text_keeps_static_strings_static() {
        let mut gfx = Graphics::default();
        let white = hex("ffffff");
        gfx.text(white, [0.0, 0.0], [Align::Left, Align::Left], 10.0, "static");
        gfx.text(white, [0.0, 0.0], [Align::Left, Align::Left], 10.0, format!("{}", 1));
        assert!(matches!(gfx.shapes()[0], Shape::StaticText { text: "static", .. }));
        assert!(matches!(&gfx.shapes()[1], Shape::DynamicText { text, .. } if text == "1"));
        assert_eq!(gfx.drain().count(), 2);
        assert!(gfx.shapes().is_empty());
    }
}
