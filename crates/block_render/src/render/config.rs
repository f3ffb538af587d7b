use log::warn;

use super::color::Color;

/// Glyph used for filled cells when none is configured.
pub const DEFAULT_FILL: &str = "█";
/// Glyph used for blank cells when none is configured.
pub const DEFAULT_SPACE: &str = " ";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderConfig {
    /// Replication factor applied to every glyph cell, horizontally and vertically.
    pub scale: usize,
    /// Output for filled cells.
    pub fill: String,
    /// Output for blank cells and letter separators.
    pub space: String,
    /// Escape sequence wrapped around the whole rendering.
    pub color: Option<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { scale: 1, fill: DEFAULT_FILL.to_owned(), space: DEFAULT_SPACE.to_owned(), color: None }
    }
}

impl RenderConfig {
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color.code().to_owned());
        self
    }

    /// Replace out-of-range values with their defaults.
    pub fn normalized(mut self) -> Self {
        self.scale = normalize_scale(self.scale);
        if self.fill.is_empty() {
            warn!("empty fill glyph, using {DEFAULT_FILL:?}");
            self.fill = DEFAULT_FILL.to_owned();
        }
        if self.space.is_empty() {
            warn!("empty space glyph, using {DEFAULT_SPACE:?}");
            self.space = DEFAULT_SPACE.to_owned();
        }
        if self.color.as_deref() == Some("") {
            self.color = None;
        }
        self
    }
}

pub(crate) fn normalize_scale(scale: usize) -> usize {
    if scale < 1 {
        warn!("scale {scale} is below 1, using 1");
        1
    } else {
        scale
    }
}
