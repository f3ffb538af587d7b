pub mod color;
pub mod config;
pub mod effect;

use crate::font::glyph::{GlyphPattern, GLYPH_HEIGHT, GLYPH_WIDTH};
use crate::font::table;

use color::{Color, RESET};
use config::{normalize_scale, RenderConfig, DEFAULT_FILL, DEFAULT_SPACE};
use effect::{GlitchCells, LetterEffect};

/// Turns text into block-character banners.
#[derive(Clone, Debug, Default)]
pub struct BlockRenderer {
    config: RenderConfig,
}

impl BlockRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config: config.normalized() }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Output line count: glyph height times scale.
    pub fn height(&self) -> usize {
        GLYPH_HEIGHT * self.config.scale
    }

    /// Scaled glyph width in cells, excluding the separator.
    pub fn glyph_width(&self) -> usize {
        GLYPH_WIDTH * self.config.scale
    }

    pub fn set_scale(&mut self, scale: usize) {
        self.config.scale = normalize_scale(scale);
    }

    pub fn set_fill(&mut self, fill: impl Into<String>) {
        let fill = fill.into();
        self.config.fill = if fill.is_empty() { DEFAULT_FILL.to_owned() } else { fill };
    }

    pub fn set_space(&mut self, space: impl Into<String>) {
        let space = space.into();
        self.config.space = if space.is_empty() { DEFAULT_SPACE.to_owned() } else { space };
    }

    pub fn set_color(&mut self, color: Option<Color>) {
        self.config.color = color.map(|color| color.code().to_owned());
    }

    /// Render `text` upper-cased with every letter shown.
    pub fn render(&self, text: &str) -> String {
        let letters: Vec<char> = text.to_uppercase().chars().collect();
        self.render_letters(&letters, &[])
    }

    /// Render `letters` as-is, applying `effects` by index.
    ///
    /// Letters without a matching effect are shown. Literal spaces ignore
    /// their effect since they already render blank.
    pub fn render_letters(&self, letters: &[char], effects: &[LetterEffect]) -> String {
        let mut lines = vec![String::new(); self.height()];
        let separator = self.config.space.repeat(self.config.scale);

        for (index, &ch) in letters.iter().enumerate() {
            match effects.get(index) {
                Some(LetterEffect::Hide) if ch != ' ' => self.push_blank(&mut lines),
                Some(LetterEffect::Glitch(cells)) if ch != ' ' => self.push_glitch(&mut lines, cells),
                _ => self.push_glyph(&mut lines, table::lookup(ch)),
            }
            for line in &mut lines {
                line.push_str(&separator);
            }
        }

        let body = lines.join("\n");
        match self.config.color.as_deref() {
            Some(color) => format!("{color}{body}{RESET}"),
            None => body,
        }
    }

    fn push_glyph(&self, lines: &mut [String], pattern: GlyphPattern) {
        let scale = self.config.scale;
        for row in 0..GLYPH_HEIGHT {
            let mut scaled = String::new();
            for filled in pattern.row_cells(row) {
                let cell = if filled { &self.config.fill } else { &self.config.space };
                for _ in 0..scale {
                    scaled.push_str(cell);
                }
            }
            for line in &mut lines[row * scale..(row + 1) * scale] {
                line.push_str(&scaled);
            }
        }
    }

    fn push_blank(&self, lines: &mut [String]) {
        let blank = self.config.space.repeat(self.glyph_width());
        for line in lines {
            line.push_str(&blank);
        }
    }

    /// Noise cells repeat their glyph to the fill's width so a glitched
    /// letter stays as wide as a shown one.
    fn push_glitch(&self, lines: &mut [String], cells: &GlitchCells) {
        let width = self.glyph_width();
        let cell_width = self.config.fill.chars().count();
        for (row, line) in lines.iter_mut().enumerate() {
            for column in 0..width {
                match cells.get(row, column) {
                    Some(ch) => line.extend(std::iter::repeat(ch).take(cell_width)),
                    None => line.push_str(&self.config.space),
                }
            }
        }
    }
}
