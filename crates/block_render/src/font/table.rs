//! Fixed-width block font.
//!
//! Every supported character maps to a 5x5 pattern. Lower-case input is
//! expected to be upper-cased by the caller; anything outside the table falls
//! back to the blank glyph.

use super::glyph::GlyphPattern;

/// Every character with a dedicated glyph, in table order.
pub const SUPPORTED: &[char] = &[
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9',
    ' ', '!', '?', '.', ',', ':', '-', '_', '/', '(', ')', '<', '>', '=', '+', '#', '@', '*',
    '%', '$', '&', '\'', '"',
];

/// Pattern for `ch`, or the blank glyph when the character is not in the font.
pub fn lookup(ch: char) -> GlyphPattern {
    glyph(ch).map(GlyphPattern::new).unwrap_or(GlyphPattern::BLANK)
}

pub fn is_supported(ch: char) -> bool {
    glyph(ch).is_some()
}

#[rustfmt::skip]
fn glyph(ch: char) -> Option<[&'static str; 5]> {
    let rows = match ch {
        'A' => [" ### ", "#   #", "#####", "#   #", "#   #"],
        'B' => ["#### ", "#   #", "#### ", "#   #", "#### "],
        'C' => [" ####", "#    ", "#    ", "#    ", " ####"],
        'D' => ["#### ", "#   #", "#   #", "#   #", "#### "],
        'E' => ["#####", "#    ", "#### ", "#    ", "#####"],
        'F' => ["#####", "#    ", "#### ", "#    ", "#    "],
        'G' => [" ####", "#    ", "# ###", "#   #", " ### "],
        'H' => ["#   #", "#   #", "#####", "#   #", "#   #"],
        'I' => ["#####", "  #  ", "  #  ", "  #  ", "#####"],
        'J' => ["  ###", "   # ", "   # ", "#  # ", " ##  "],
        'K' => ["#   #", "#  # ", "###  ", "#  # ", "#   #"],
        'L' => ["#    ", "#    ", "#    ", "#    ", "#####"],
        'M' => ["#   #", "## ##", "# # #", "#   #", "#   #"],
        'N' => ["#   #", "##  #", "# # #", "#  ##", "#   #"],
        'O' => [" ### ", "#   #", "#   #", "#   #", " ### "],
        'P' => ["#### ", "#   #", "#### ", "#    ", "#    "],
        'Q' => [" ### ", "#   #", "#   #", "#  # ", " ## #"],
        'R' => ["#### ", "#   #", "#### ", "#  # ", "#   #"],
        'S' => [" ####", "#    ", " ### ", "    #", "#### "],
        'T' => ["#####", "  #  ", "  #  ", "  #  ", "  #  "],
        'U' => ["#   #", "#   #", "#   #", "#   #", " ### "],
        'V' => ["#   #", "#   #", "#   #", " # # ", "  #  "],
        'W' => ["#   #", "#   #", "# # #", "## ##", "#   #"],
        'X' => ["#   #", " # # ", "  #  ", " # # ", "#   #"],
        'Y' => ["#   #", " # # ", "  #  ", "  #  ", "  #  "],
        'Z' => ["#####", "   # ", "  #  ", " #   ", "#####"],
        '0' => [" ### ", "#  ##", "# # #", "##  #", " ### "],
        '1' => ["  #  ", " ##  ", "  #  ", "  #  ", "#####"],
        '2' => [" ### ", "#   #", "  ## ", " #   ", "#####"],
        '3' => ["#### ", "    #", " ### ", "    #", "#### "],
        '4' => ["#   #", "#   #", "#####", "    #", "    #"],
        '5' => ["#####", "#    ", "#### ", "    #", "#### "],
        '6' => [" ### ", "#    ", "#### ", "#   #", " ### "],
        '7' => ["#####", "    #", "   # ", "  #  ", "  #  "],
        '8' => [" ### ", "#   #", " ### ", "#   #", " ### "],
        '9' => [" ### ", "#   #", " ####", "    #", " ### "],
        ' ' => ["     ", "     ", "     ", "     ", "     "],
        '!' => ["  #  ", "  #  ", "  #  ", "     ", "  #  "],
        '?' => [" ### ", "#   #", "   # ", "     ", "  #  "],
        '.' => ["     ", "     ", "     ", "     ", "  #  "],
        ',' => ["     ", "     ", "     ", "  #  ", " #   "],
        ':' => ["     ", "  #  ", "     ", "  #  ", "     "],
        '-' => ["     ", "     ", "#####", "     ", "     "],
        '_' => ["     ", "     ", "     ", "     ", "#####"],
        '/' => ["    #", "   # ", "  #  ", " #   ", "#    "],
        '(' => ["  #  ", " #   ", " #   ", " #   ", "  #  "],
        ')' => ["  #  ", "   # ", "   # ", "   # ", "  #  "],
        '<' => ["   # ", "  #  ", " #   ", "  #  ", "   # "],
        '>' => [" #   ", "  #  ", "   # ", "  #  ", " #   "],
        '=' => ["     ", "#####", "     ", "#####", "     "],
        '+' => ["     ", "  #  ", " ### ", "  #  ", "     "],
        '#' => [" # # ", "#####", " # # ", "#####", " # # "],
        '@' => [" ### ", "# # #", "# ###", "#    ", " ####"],
        '*' => ["     ", "# # #", "  #  ", "# # #", "     "],
        '%' => ["##  #", "## # ", "  #  ", " # ##", "#  ##"],
        '$' => [" ####", "# #  ", " ### ", "  # #", "#### "],
        '&' => [" ##  ", "#  # ", " ## #", "#  # ", " ## #"],
        '\'' => ["  #  ", "  #  ", "     ", "     ", "     "],
        '"' => [" # # ", " # # ", "     ", "     ", "     "],        _ => return None,
    };
    Some(rows)
}
