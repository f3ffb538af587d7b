//! Block-character text banners and terminal text animations.
//!
//! [`BlockRenderer`] turns a string into a large banner built from a 5x5
//! bitmap font. [`Animation`] redraws such a banner in place at a fixed
//! interval, hiding or corrupting letters according to an
//! [`AnimationStyle`].

mod animation;
mod font;
pub mod launch;
mod render;
pub mod terminal;

pub use animation::{
    config::{AnimationConfig, DEFAULT_GLITCH_GLYPHS},
    frames::{pulse_rate, FrameGenerator, GLITCH_CELL_CHANCE, TYPING_PAUSE_FRAMES},
    style::{AnimationStyle, UnknownStyle, FRAME_STYLES},
    Animation,
};
pub use font::{
    glyph::{GlyphPattern, GLYPH_HEIGHT, GLYPH_WIDTH},
    table::{is_supported, lookup, SUPPORTED},
};
pub use render::{
    color::{Color, RESET},
    config::{RenderConfig, DEFAULT_FILL, DEFAULT_SPACE},
    effect::{FramePlan, GlitchCells, LetterEffect},
    BlockRenderer,
};

#[derive(Debug, thiserror::Error)]
pub enum AnimationError {
    #[error("failed to write to the terminal: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to register signal handlers: {0}")]
    Signal(#[source] std::io::Error),
    #[error("animation is already running")]
    AlreadyRunning,
}
