//! Parts that might be reused between games: the window, the tick loop and text.

extern crate interface;

#[cfg(not(target_arch="wasm32"))]
mod icon;
mod window;

pub use self::window::start;

use thiserror::Error;

/// Problems that prevent the game from running at all.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("cannot create window: {0}")]
    Window(String),
    #[error("cannot parse the bundled font: {0}")]
    Font(String),
    #[error("cannot measure time: {0}")]
    Stopwatch(String),
    #[error("cannot bind to canvas {id:?}: {reason}")]
    Canvas { id: &'static str, reason: String },
}
