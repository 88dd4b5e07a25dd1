// filepath: src/text.rs
//! Swatch label rendering with fontdue

use crate::color::Color;
use crate::draw::Canvas;
use crate::layout::Rect;
use fontdue::{Font, FontSettings};
use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// Fonts tried when the config does not name one
const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
];

pub struct TextRenderer {
    font: Font,
    size: f32,
}

impl TextRenderer {
    pub fn from_bytes(bytes: &[u8], size: f32) -> Result<Self, Box<dyn std::error::Error>> {
        let font = Font::from_bytes(bytes, FontSettings::default())?;
        Ok(Self { font, size })
    }

    /// Load the configured font, or the first system font found.
    pub fn load(configured: Option<&Path>, size: f32) -> Option<Self> {
        let candidates: Vec<PathBuf> = match configured {
            Some(path) => vec![path.to_path_buf()],
            None => FONT_CANDIDATES.iter().map(PathBuf::from).collect(),
        };

        for path in &candidates {
            let bytes = match fs::read(path) {
                Ok(bytes) => bytes,
                Err(_) => continue,
            };
            match Self::from_bytes(&bytes, size) {
                Ok(renderer) => {
                    info!("Loaded label font {}", path.display());
                    return Some(renderer);
                }
                Err(e) => warn!("Failed to parse font {}: {}", path.display(), e),
            }
        }

        warn!("No usable font found, swatch labels disabled");
        None
    }

    pub fn measure(&self, text: &str) -> f32 {
        text.chars()
            .map(|c| self.font.metrics(c, self.size).advance_width)
            .sum()
    }

    /// Draw `text` centered in `area`
    pub fn draw_centered(&self, canvas: &mut Canvas, area: Rect, text: &str, color: Color) {
        let ascent = self
            .font
            .horizontal_line_metrics(self.size)
            .map(|m| m.ascent)
            .unwrap_or(self.size * 0.8);
        let text_width = self.measure(text);

        let mut pen_x = area.x as f32 + (area.width as f32 - text_width) / 2.0;
        let baseline = area.y as f32 + (area.height as f32 + ascent * 0.7) / 2.0;

        for c in text.chars() {
            let (metrics, coverage) = self.font.rasterize(c, self.size);
            let glyph_x = (pen_x + metrics.xmin as f32).round() as i32;
            let glyph_y = (baseline - metrics.height as f32 - metrics.ymin as f32).round() as i32;

            for row in 0..metrics.height {
                for col in 0..metrics.width {
                    let alpha = coverage[row * metrics.width + col];
                    if alpha > 0 {
                        canvas.blend_pixel(
                            glyph_x + col as i32,
                            glyph_y + row as i32,
                            color,
                            alpha as f32 / 255.0,
                        );
                    }
                }
            }
            pen_x += metrics.advance_width;
        }
    }
}
