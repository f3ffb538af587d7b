pub mod glyph;
pub mod table;
