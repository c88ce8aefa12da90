use interface::game::*;
use crate::EngineError;

use std::collections::HashMap;
use std::rc::Rc;
#[cfg(not(target_arch = "wasm32"))]
use std::thread;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

extern crate speedy2d;
use speedy2d::Graphics2D;
use speedy2d::color::Color as spColor;
use speedy2d::dimen::Vector2;
use speedy2d::font::{Font, TextLayout, TextOptions, FormattedTextBlock};
use speedy2d::shape::Rectangle;
use speedy2d::time::Stopwatch;
use speedy2d::window::{MouseScrollDistance, WindowHandler, WindowHelper};
#[cfg(target_arch="wasm32")]
use speedy2d::WebCanvas;
#[cfg(not(target_arch = "wasm32"))]
use speedy2d::Window;
#[cfg(not(target_arch="wasm32"))]
use speedy2d::window::{WindowCreationOptions, WindowSize};

extern crate fxhash;
use fxhash::FxBuildHasher;

#[cfg(not(target_arch="wasm32"))]
const UPDATE_RATE: u32 = 60; // ticks per second
#[cfg(not(target_arch="wasm32"))]
const ICON_COLOR: Color = [0.0, 0.0, 1.0, 1.0];
#[cfg(target_arch="wasm32")]
const CANVAS_ID: &str = "wheel_game";
/// Touchpads report pixels, the game wants wheel notches.
const PIXELS_PER_LINE: f64 = 16.0;
const LINES_PER_PAGE: f64 = 20.0;
const FONT: &[u8] = include_bytes!("../../font/font.ttf");

fn map_color([r, g, b, a]: [f32; 4]) -> spColor {
    spColor::from_rgba(r, g, b, a)
}

fn map_scroll(distance: MouseScrollDistance) -> [f32; 2] {
    let (x, y) = match distance {
        MouseScrollDistance::Lines { x, y, .. } => (x, y),
        MouseScrollDistance::Pixels { x, y, .. } => (x/PIXELS_PER_LINE, y/PIXELS_PER_LINE),
        MouseScrollDistance::Pages { x, y, .. } => (x*LINES_PER_PAGE, y*LINES_PER_PAGE),
    };
    [x as f32, y as f32]
}

/// Scales the logical screen uniformly to fit the window, and centers it.
fn letterbox_and_scale(window_size: [f32; 2],  logical_size: [f32; 2]) -> (Vector2<f32>, f32) {
    let scale = f32::min(window_size[0]/logical_size[0], window_size[1]/logical_size[1]);
    let offset = Vector2 {
        x: (window_size[0] - logical_size[0]*scale) / 2.0,
        y: (window_size[1] - logical_size[1]*scale) / 2.0,
    };
    (offset, scale)
}

/// Where the left or top edge of something `extent` long should be.
fn align(position: f32,  extent: f32,  align: Align) -> f32 {
    match align {
        Align::Left => position,
        Align::Center => position - extent/2.0,
        Align::Right => position - extent,
    }
}

struct TextCache {
    font: Font,
    statics: HashMap<(&'static str, i32), Rc<FormattedTextBlock>, FxBuildHasher>,
}

impl TextCache {
    fn new() -> Result<Self, EngineError> {
        Ok(TextCache {
            font: Font::new(FONT).map_err(|e| EngineError::Font(format!("{:?}", e)))?,
            statics: HashMap::default(),
        })
    }
    fn create(&self,  text: &str,  scaled_size: f32) -> Rc<FormattedTextBlock> {
        self.font.layout_text(text, scaled_size, TextOptions::new()).into()
    }
    fn get_static(&mut self,  text: &'static str,  scaled_size: f32) -> Rc<FormattedTextBlock> {
        let key = (text, scaled_size as i32);
        let font = &self.font;
        self.statics.entry(key).or_insert_with(|| {
            font.layout_text(text, scaled_size, TextOptions::new()).into()
        }).clone()
    }
}

fn draw_text(
        g: &mut Graphics2D,
        text: &Rc<FormattedTextBlock>,
        color: Color,
        position: Vector2<f32>,
        center: [Align; 2],
) {
    let position = Vector2 {
        x: align(position.x, text.width(), center[0]),
        y: align(position.y, text.height(), center[1]),
    };
    g.draw_text(position, map_color(color), text);
}

#[derive(Debug, Clone,Copy, PartialEq,Eq)]
enum AfterUpdate {
    Continue,
    Stop,
}

/// Logs why the game failed, if it did.
fn after_update(result: Result<(), UpdateError>) -> AfterUpdate {
    match result {
        Ok(()) => AfterUpdate::Continue,
        Err(e) => {
            log::error!("game stopped: {}", e);
            AfterUpdate::Stop
        }
    }
}

#[cfg(not(target_arch="wasm32"))]
fn stop(_: &mut WindowHelper<()>) -> ! {
    std::process::exit(1)
}

#[cfg(target_arch="wasm32")]
fn stop(h: &mut WindowHelper<()>) {
    h.terminate_loop();
}

struct GameWrapper<G: Game> {
    game: G,
    window_size: [f32; 2], // changes if window is resized
    stopwatch: Stopwatch,
    last_physics: f64,
    shapes: Graphics,
    text: TextCache,
}

impl<G: Game> GameWrapper<G> {
    fn new(game: G,  initial_size: [f32; 2]) -> Result<Self, EngineError> {
        Ok(GameWrapper {
            game,
            window_size: initial_size,
            stopwatch: Stopwatch::new().map_err(|e| EngineError::Stopwatch(format!("{:?}", e)))?,
            last_physics: 0.0,
            shapes: Graphics::default(),
            text: TextCache::new()?,
        })
    }

    fn update(&mut self) -> AfterUpdate {
        let prev = self.last_physics;
        self.last_physics = self.stopwatch.secs_elapsed();
        let elapsed = self.last_physics - prev;
        after_update(self.game.update(elapsed as f32))
    }

    fn tick(&mut self,  h: &mut WindowHelper<()>) {
        if self.update() == AfterUpdate::Stop {
            stop(h);
        }
    }
}

impl<G: Game> WindowHandler for GameWrapper<G> {
    fn on_start(&mut self,
            h: &mut WindowHelper<()>,
            info: speedy2d::window::WindowStartupInfo
    ) {
        let size = info.viewport_size_pixels().into_f32();
        self.window_size = [size.x, size.y];
        h.set_cursor_visible(true);

        // icon is not used in wasm, and threads don't work there.
        #[cfg(not(target_arch="wasm32"))]
        {
            let size = Vector2::new(crate::icon::SIZE, crate::icon::SIZE);
            if let Err(e) = h.set_icon_from_rgba_pixels(crate::icon::pixels(ICON_COLOR), size) {
                log::warn!("cannot set window icon: {:?}", e);
            }

            let sender = h.create_user_event_sender();
            thread::spawn(move || {
                let period = Duration::from_secs_f32((UPDATE_RATE as f32).recip());
                while sender.send_event(()).is_ok() {
                    thread::sleep(period);
                }
                log::warn!("event loop closed, no more ticks");
            });
        }
    }

    fn on_user_event(&mut self,  h: &mut WindowHelper<()>,  _: ()) {
        self.tick(h);
    }

    fn on_draw(&mut self,  h: &mut WindowHelper<()>,  g: &mut Graphics2D) {
        #[cfg(target_arch="wasm32")]
        self.tick(h);

        g.clear_screen(spColor::BLACK);
        self.game.render(&mut self.shapes);

        let (offset, scale) = letterbox_and_scale(self.window_size, self.game.layout());
        for shape in self.shapes.drain() {
            match shape {
                Shape::Rectangle { color, area } => {
                    let rect = Rectangle::new(
                        Vector2 { x: area[0],  y: area[1] }*scale + offset,
                        Vector2 { x: area[0]+area[2],  y: area[1]+area[3] }*scale + offset,
                    );
                    g.draw_rectangle(rect, map_color(color));
                }
                Shape::StaticText{ color, size, position, center, text } => {
                    let text = self.text.get_static(text, size * scale);
                    let position = Vector2 { x: position[0], y: position[1] } * scale + offset;
                    draw_text(g, &text, color, position, center);
                }
                Shape::DynamicText{ color, size, position, center, text } => {
                    let text = self.text.create(&text, size * scale);
                    let position = Vector2 { x: position[0], y: position[1] } * scale + offset;
                    draw_text(g, &text, color, position, center);
                }
            }
        }

        // Required to make the screen update.
        // Surprisingly doesn't cause 100% CPU usage.
        h.request_redraw();
    }

    fn on_resize(&mut self,  _: &mut WindowHelper<()>,  size: speedy2d::dimen::UVec2) {
        log::debug!("window resized to {}x{}", size.x, size.y);
        self.window_size[0] = size.into_f32().x;
        self.window_size[1] = size.into_f32().y;
    }

    fn on_mouse_wheel_scroll(&mut self,  _: &mut WindowHelper<()>,  distance: MouseScrollDistance) {
        self.game.mouse_wheel(map_scroll(distance));
    }
}

/// Opens a window and runs the game until the window is closed.
///
/// Only returns if the window or canvas could not be set up,
/// except on wasm where the browser drives the loop after this returns.
#[inline(never)]
pub fn start<G:Game+'static>(game: G,  name: &'static str,  initial_size: [f32; 2])
-> Result<(), EngineError> {
    let wrapper = GameWrapper::new(game, initial_size)?;
    run(wrapper, name, initial_size)
}

#[cfg(target_arch="wasm32")]
fn run<G:Game+'static>(wrapper: GameWrapper<G>,  name: &'static str,  _: [f32; 2])
-> Result<(), EngineError> {
    log::info!("starting {} in canvas {:?}", name, CANVAS_ID);
    // .unregister_when_dropped() would make the game end immediately.
    WebCanvas::new_for_id(CANVAS_ID, wrapper)
        .map_err(|e| EngineError::Canvas { id: CANVAS_ID, reason: format!("{:?}", e) })?;
    Ok(())
}

#[cfg(not(target_arch="wasm32"))]
fn run<G:Game+'static>(wrapper: GameWrapper<G>,  name: &'static str,  initial_size: [f32; 2])
-> Result<(), EngineError> {
    log::info!("opening {}x{} window {:?}", initial_size[0], initial_size[1], name);
    let window_size = Vector2 { x: initial_size[0], y: initial_size[1] };
    let window_size = WindowSize::ScaledPixels(window_size);
    let options = WindowCreationOptions::new_windowed(window_size, None)
            .with_always_on_top(false)
            .with_decorations(true)
            .with_resizable(true)
            .with_transparent(false)
            .with_vsync(true);
    let window = Window::new_with_options(name, options)
        .map_err(|e| EngineError::Window(format!("{:?}", e)))?;
    window.run_loop(wrapper)
}
