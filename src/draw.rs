// filepath: src/draw.rs
//! Frame composition for hypr-paint
//!
//! Each frame is built from scratch in the shared-memory buffer: the window
//! background, the retained canvas raster and the palette swatches on top.

use crate::color::{Color, GRAY};
use crate::layout::Rect;
use crate::raster::Raster;
use crate::surface::PaintSurface;
use crate::swatch::Swatch;
use crate::text::TextRenderer;

/// Window background behind the palette column
pub const WINDOW_BACKGROUND: Color = GRAY;

/// Canvas abstraction over an `Argb8888` frame buffer
pub struct Canvas<'a> {
    buffer: &'a mut [u8],
    width: u32,
    height: u32,
}

impl<'a> Canvas<'a> {
    /// Create a new canvas from a raw buffer
    pub fn new(buffer: &'a mut [u8], width: u32, height: u32) -> Self {
        Self {
            buffer,
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn clear(&mut self, color: [u8; 4]) {
        for pixel in self.buffer.chunks_exact_mut(4) {
            pixel.copy_from_slice(&color);
        }
    }

    /// Draw a filled rectangle
    pub fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: [u8; 4]) {
        // Ensure the rectangle is within bounds
        let x_start = x.max(0) as u32;
        let y_start = y.max(0) as u32;
        let x_end = (x + width as i32).clamp(0, self.width as i32) as u32;
        let y_end = (y + height as i32).clamp(0, self.height as i32) as u32;

        if x_end <= x_start || y_end <= y_start {
            return; // Nothing to draw
        }

        for y in y_start..y_end {
            for x in x_start..x_end {
                let idx = (y * self.width + x) as usize * 4;
                if idx + 3 < self.buffer.len() {
                    self.buffer[idx..idx + 4].copy_from_slice(&color);
                }
            }
        }
    }

    /// Border drawn inside `rect`
    pub fn outline_rect(&mut self, rect: Rect, border: u32, color: [u8; 4]) {
        if border == 0 {
            return;
        }
        let Rect {
            x,
            y,
            width,
            height,
        } = rect;
        self.fill_rect(x, y, width, border, color);
        self.fill_rect(x, y + height as i32 - border as i32, width, border, color);
        self.fill_rect(x, y, border, height, color);
        self.fill_rect(x + width as i32 - border as i32, y, border, height, color);
    }

    /// Copy a raster with its top-left corner at (x, y)
    pub fn blit(&mut self, raster: &Raster, x: i32, y: i32) {
        let src_width = raster.pixel_width() as i32;
        let src = raster.pixels();

        for row in 0..raster.pixel_height() as i32 {
            let dst_y = y + row;
            if dst_y < 0 || dst_y >= self.height as i32 {
                continue;
            }
            let col_start = (-x).max(0);
            let col_end = src_width.min(self.width as i32 - x);
            if col_end <= col_start {
                return;
            }
            let src_idx = ((row * src_width + col_start) * 4) as usize;
            let dst_idx = ((dst_y * self.width as i32 + x + col_start) * 4) as usize;
            let len = ((col_end - col_start) * 4) as usize;
            self.buffer[dst_idx..dst_idx + len].copy_from_slice(&src[src_idx..src_idx + len]);
        }
    }

    /// Mix `color` into the pixel at (x, y) by `coverage` in `0.0..=1.0`
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: Color, coverage: f32) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let idx = (y as u32 * self.width + x as u32) as usize * 4;
        let src = color.to_bgra();
        let a = coverage.clamp(0.0, 1.0);
        for channel in 0..3 {
            let dst = self.buffer[idx + channel] as f32;
            self.buffer[idx + channel] = (dst + (src[channel] as f32 - dst) * a).round() as u8;
        }
        self.buffer[idx + 3] = 0xff;
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y * self.width + x) as usize * 4;
        let mut out = [0u8; 4];
        out.copy_from_slice(&self.buffer[idx..idx + 4]);
        Some(out)
    }
}

pub fn draw_swatch(canvas: &mut Canvas, swatch: &Swatch, text: Option<&TextRenderer>) {
    let style = swatch.style();
    let bounds = swatch.bounds;

    canvas.fill_rect(
        bounds.x,
        bounds.y,
        bounds.width,
        bounds.height,
        style.background.to_bgra(),
    );
    canvas.outline_rect(bounds, style.border_width, style.border_color.to_bgra());

    // a label in the background color would be invisible anyway
    if style.text_color == style.background {
        return;
    }
    if let Some(text) = text {
        text.draw_centered(canvas, bounds, &swatch.label, style.text_color);
    }
}

/// Paint a whole window frame for `surface`
pub fn compose_frame(
    canvas: &mut Canvas,
    surface: &PaintSurface<Raster>,
    text: Option<&TextRenderer>,
) {
    canvas.clear(WINDOW_BACKGROUND.to_bgra());

    let area = surface.canvas_rect();
    canvas.blit(surface.graphics(), area.x, area.y);

    for swatch in surface.swatches() {
        draw_swatch(canvas, swatch, text);
    }
}
