// filepath: src/swatch.rs
//! Palette controls
//!
//! A swatch knows which palette entry it stands for through `index`; the
//! label and colors are cosmetic only.

use crate::color::{Color, BLACK, GRAY, WHITE};
use crate::layout::Rect;

pub const CLEAR_LABEL: &str = "CLEAR";

/// Visual style of a swatch, see [`Swatch::style`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwatchStyle {
    pub text_color: Color,
    pub background: Color,
    pub border_width: u32,
    pub border_color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Swatch {
    pub index: usize,
    pub color: Color,
    pub label: String,
    pub is_clear: bool,
    pub highlighted: bool,
    pub bounds: Rect,
}

impl Swatch {
    pub fn new(index: usize, color: Color, is_clear: bool, bounds: Rect) -> Self {
        let label = if is_clear {
            CLEAR_LABEL.to_string()
        } else {
            index.to_string()
        };
        Self {
            index,
            color,
            label,
            is_clear,
            highlighted: false,
            bounds,
        }
    }

    pub fn set_highlight(&mut self, highlighted: bool) {
        self.highlighted = highlighted;
    }

    pub fn style(&self) -> SwatchStyle {
        let (border_width, border_color) = if self.highlighted {
            (2, WHITE)
        } else {
            (1, GRAY)
        };

        if self.is_clear {
            SwatchStyle {
                text_color: BLACK,
                background: WHITE,
                border_width,
                border_color,
            }
        } else {
            // label blends into the background
            SwatchStyle {
                text_color: self.color,
                background: self.color,
                border_width,
                border_color,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::RED;

    #[test]
    fn color_swatch_hides_its_label() {
        let swatch = Swatch::new(3, RED, false, Rect::default());
        assert_eq!(swatch.label, "3");
        let style = swatch.style();
        assert_eq!(style.text_color, style.background);
        assert_eq!(style.background, RED);
        assert_eq!((style.border_width, style.border_color), (1, GRAY));
    }

    #[test]
    fn highlight_thickens_border() {
        let mut swatch = Swatch::new(0, BLACK, false, Rect::default());
        swatch.set_highlight(true);
        let style = swatch.style();
        assert_eq!((style.border_width, style.border_color), (2, WHITE));
        assert_eq!(style.background, BLACK);
    }

    #[test]
    fn clear_swatch_is_always_black_on_white() {
        let mut swatch = Swatch::new(26, WHITE, true, Rect::default());
        assert_eq!(swatch.label, CLEAR_LABEL);
        for highlighted in [false, true] {
            swatch.set_highlight(highlighted);
            let style = swatch.style();
            assert_eq!(style.text_color, BLACK);
            assert_eq!(style.background, WHITE);
        }
    }
}
