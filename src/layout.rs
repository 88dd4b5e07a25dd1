// filepath: src/layout.rs
//! Grid placement of the canvas and the palette controls
//!
//! The window is a three column grid. The canvas takes one outer column and
//! spans every row; swatches fill the two remaining columns two per row, and
//! the Clear control sits alone on the last row spanning both columns.

use serde::{Deserialize, Serialize};

/// Side length of a color swatch
pub const SWATCH_SIZE: u32 = 28;
pub const CLEAR_WIDTH: u32 = SWATCH_SIZE * 2;
pub const CLEAR_HEIGHT: u32 = 34;
pub const GRID_COLUMNS: u32 = 3;

/// Rectangle used for layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x as f64
            && y >= self.y as f64
            && x < (self.x + self.width as i32) as f64
            && y < (self.y + self.height as i32) as f64
    }
}

/// Which side of the canvas the palette goes on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PalettePos {
    #[default]
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Canvas,
    /// Palette entry by index
    Swatch(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub control: Control,
    pub column: u32,
    pub row: u32,
    pub column_span: u32,
    pub row_span: u32,
    /// Preferred size, `None` for the canvas which brings its own
    pub size: Option<(u32, u32)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteLayout {
    pub canvas: Placement,
    /// One placement per palette entry, in palette order
    pub swatches: Vec<Placement>,
    pub rows: u32,
}

/// Pixel rectangles for a [`PaletteLayout`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLayout {
    pub canvas: Rect,
    pub swatches: Vec<Rect>,
    pub width: u32,
    pub height: u32,
}

impl PaletteLayout {
    pub fn compute(swatch_count: usize, position: PalettePos) -> Self {
        let rows = swatch_count.max(1) as u32;
        let (canvas_column, swatch_column) = match position {
            PalettePos::Left => (2, 0),
            PalettePos::Right => (0, 1),
        };

        let canvas = Placement {
            control: Control::Canvas,
            column: canvas_column,
            row: 0,
            column_span: 1,
            row_span: rows,
            size: None,
        };

        let mut swatches = Vec::with_capacity(swatch_count);
        let clear = swatch_count.checked_sub(1);
        for index in 0..swatch_count {
            let placement = if Some(index) == clear {
                Placement {
                    control: Control::Swatch(index),
                    column: swatch_column,
                    row: index as u32,
                    column_span: 2,
                    row_span: 1,
                    size: Some((CLEAR_WIDTH, CLEAR_HEIGHT)),
                }
            } else {
                let pair_offset = (index % 2) as u32;
                Placement {
                    control: Control::Swatch(index),
                    column: swatch_column + pair_offset,
                    row: index as u32 - pair_offset,
                    column_span: 1,
                    row_span: 1,
                    size: Some((SWATCH_SIZE, SWATCH_SIZE)),
                }
            };
            swatches.push(placement);
        }

        Self {
            canvas,
            swatches,
            rows,
        }
    }

    /// Turn grid cells into pixel rectangles for a canvas of the given size.
    pub fn resolve(&self, canvas_width: u32, canvas_height: u32) -> ResolvedLayout {
        let mut column_widths = vec![0u32; GRID_COLUMNS as usize];
        let mut row_heights = vec![0u32; self.rows as usize];

        let size_of = |p: &Placement| p.size.unwrap_or((canvas_width, canvas_height));

        for placement in std::iter::once(&self.canvas).chain(self.swatches.iter()) {
            let (w, h) = size_of(placement);
            if placement.column_span == 1 {
                let column = &mut column_widths[placement.column as usize];
                *column = (*column).max(w);
            }
            if placement.row_span == 1 {
                let row = &mut row_heights[placement.row as usize];
                *row = (*row).max(h);
            }
        }

        let column_x: Vec<i32> = offsets(&column_widths);
        let row_y: Vec<i32> = offsets(&row_heights);

        let place = |p: &Placement| {
            let (w, h) = size_of(p);
            Rect::new(column_x[p.column as usize], row_y[p.row as usize], w, h)
        };

        let width = column_widths.iter().sum::<u32>();
        let height = row_heights.iter().sum::<u32>().max(canvas_height);

        ResolvedLayout {
            canvas: place(&self.canvas),
            swatches: self.swatches.iter().map(&place).collect(),
            width,
            height,
        }
    }
}

fn offsets(sizes: &[u32]) -> Vec<i32> {
    sizes
        .iter()
        .scan(0i32, |acc, &size| {
            let start = *acc;
            *acc += size as i32;
            Some(start)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_palette_grid_on_the_left() {
        let layout = PaletteLayout::compute(27, PalettePos::Left);
        assert_eq!(layout.rows, 27);
        assert_eq!(layout.canvas.column, 2);
        assert_eq!(layout.canvas.row_span, 27);

        let clear = layout.swatches[26];
        assert_eq!((clear.column, clear.row), (0, 26));
        assert_eq!((clear.column_span, clear.row_span), (2, 1));
        assert_eq!(clear.size, Some((56, 34)));

        for (index, placement) in layout.swatches[..26].iter().enumerate() {
            assert_eq!(placement.control, Control::Swatch(index));
            assert_eq!(placement.column, (index % 2) as u32);
            assert_eq!(placement.row, (index - index % 2) as u32);
            assert_eq!(placement.column_span, 1);
        }
    }

    #[test]
    fn right_placement_moves_canvas_to_first_column() {
        let layout = PaletteLayout::compute(27, PalettePos::Right);
        assert_eq!(layout.canvas.column, 0);
        assert_eq!(layout.swatches[0].column, 1);
        assert_eq!(layout.swatches[1].column, 2);
        assert_eq!(layout.swatches[26].column, 1);
    }

    #[test]
    fn odd_color_count_never_pairs_with_clear() {
        // three colors plus Clear
        let layout = PaletteLayout::compute(4, PalettePos::Left);
        assert_eq!(layout.swatches[2].row, 2);
        assert_eq!(layout.swatches[2].column, 0);
        assert_eq!(layout.swatches[3].row, 3);
        assert_eq!(layout.swatches[3].column_span, 2);
    }

    #[test]
    fn resolve_stacks_swatch_rows_and_collapses_empty_rows() {
        let resolved = PaletteLayout::compute(27, PalettePos::Left).resolve(600, 400);
        assert_eq!(resolved.width, 600 + 56);
        assert_eq!(resolved.height, 400);
        assert_eq!(resolved.canvas, Rect::new(56, 0, 600, 400));
        assert_eq!(resolved.swatches[0], Rect::new(0, 0, 28, 28));
        assert_eq!(resolved.swatches[1], Rect::new(28, 0, 28, 28));
        assert_eq!(resolved.swatches[2], Rect::new(0, 28, 28, 28));
        assert_eq!(resolved.swatches[25], Rect::new(28, 12 * 28, 28, 28));
        assert_eq!(resolved.swatches[26], Rect::new(0, 13 * 28, 56, 34));
    }

    #[test]
    fn resolve_grows_past_a_short_canvas() {
        let resolved = PaletteLayout::compute(27, PalettePos::Right).resolve(200, 100);
        assert_eq!(resolved.canvas, Rect::new(0, 0, 200, 100));
        assert_eq!(resolved.swatches[0].x, 200);
        assert_eq!(resolved.height, 13 * 28 + 34);
    }

    #[test]
    fn rect_contains_is_half_open() {
        let rect = Rect::new(10, 10, 5, 5);
        assert!(rect.contains(10.0, 10.0));
        assert!(rect.contains(14.9, 14.9));
        assert!(!rect.contains(15.0, 12.0));
        assert!(!rect.contains(9.9, 12.0));
    }

    #[test]
    fn palette_position_parses_lowercase() {
        #[derive(Deserialize)]
        struct Holder {
            pos: PalettePos,
        }
        let holder: Holder = toml::from_str("pos = \"right\"").unwrap();
        assert_eq!(holder.pos, PalettePos::Right);
    }
}
