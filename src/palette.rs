// filepath: src/palette.rs
//! The standard drawing palette
//!
//! Entries come in pairs because the layout places two swatches per row.
//! The final entry is not a drawing color: it backs the Clear control.

use crate::color::{self, rgb8, Color};

pub const STANDARD_PALETTE: [Color; 27] = [
    color::BLACK,
    color::GRAY,
    rgb8!(136, 0, 21), // dark red
    color::RED,
    color::ORANGE,
    rgb8!(255, 201, 14), // gold
    Color {
        r: 0.95,
        g: 0.9,
        b: 0.0,
    }, // darker yellow, readable on white
    rgb8!(239, 228, 176), // light yellow
    color::CORNSILK,
    color::CORAL,
    color::GREEN,
    rgb8!(181, 230, 29), // lime
    rgb8!(0, 64, 64), // darker green
    color::TEAL,
    rgb8!(0, 162, 232), // turquoise
    rgb8!(153, 217, 234), // light turquoise
    rgb8!(163, 73, 164), // purple
    rgb8!(200, 191, 231), // lavender
    color::CYAN,
    color::BLUE,
    rgb8!(63, 72, 204), // indigo
    color::MAGENTA,
    rgb8!(185, 99, 128), // brown
    rgb8!(255, 174, 201), // rose
    color::WHITE,
    rgb8!(195, 195, 195), // gray 25%
    color::WHITE, // Clear
];

/// Index of the Clear entry for a palette of `len` entries.
pub fn clear_index(len: usize) -> Option<usize> {
    len.checked_sub(1)
}

/// Number of entries usable as drawing colors.
pub fn drawable_len(len: usize) -> usize {
    len.saturating_sub(1)
}
