/// Rows in every glyph before scaling.
pub const GLYPH_HEIGHT: usize = 5;
/// Cells per glyph row before scaling.
pub const GLYPH_WIDTH: usize = 5;

const FILL_MARK: char = '#';

/// A 5x5 bitmap describing which cells of a character are drawn.
///
/// Rows are stored as `'#'` (fill) and `' '` (blank) so the table in
/// [`super::table`] reads like the glyphs it describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GlyphPattern {
    rows: [&'static str; GLYPH_HEIGHT],
}

impl GlyphPattern {
    pub const BLANK: Self = Self::new(["     ", "     ", "     ", "     ", "     "]);

    pub(crate) const fn new(rows: [&'static str; GLYPH_HEIGHT]) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[&'static str; GLYPH_HEIGHT] {
        &self.rows
    }

    /// Cells of a single row, `true` where the glyph is filled.
    pub fn row_cells(&self, row: usize) -> impl Iterator<Item = bool> + '_ {
        self.rows.get(row).copied().unwrap_or("").chars().map(|ch| ch == FILL_MARK)
    }

    pub fn is_filled(&self, row: usize, column: usize) -> bool {
        self.row_cells(row).nth(column).unwrap_or(false)
    }

    pub fn is_blank(&self) -> bool {
        (0..GLYPH_HEIGHT).all(|row| self.row_cells(row).all(|filled| !filled))
    }
}

impl Default for GlyphPattern {
    fn default() -> Self {
        Self::BLANK
    }
}
