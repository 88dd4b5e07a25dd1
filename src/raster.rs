// filepath: src/raster.rs
//! Retained drawing surface
//!
//! [`GraphicsContext`] is the small set of stroke/fill calls the paint
//! surface needs. [`Raster`] implements it on an owned `Argb8888` pixel
//! buffer, so the drawing survives between frames and gets copied into each
//! shared-memory buffer.

use crate::color::{Color, BLACK, WHITE};

pub trait GraphicsContext {
    fn width(&self) -> f64;
    fn height(&self) -> f64;
    fn set_fill(&mut self, color: Color);
    fn set_stroke(&mut self, color: Color);
    fn set_line_width(&mut self, width: f64);
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    /// Outline centered on the rectangle edges
    fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64);
}

pub struct Raster {
    pixels: Vec<u8>,
    width: u32,
    height: u32,
    fill: Color,
    stroke: Color,
    line_width: f64,
}

impl Raster {
    pub fn new(width: u32, height: u32) -> Self {
        let mut pixels = vec![0u8; width as usize * height as usize * 4];
        for pixel in pixels.chunks_exact_mut(4) {
            pixel.copy_from_slice(&WHITE.to_bgra());
        }
        Self {
            pixels,
            width,
            height,
            fill: WHITE,
            stroke: BLACK,
            line_width: 1.0,
        }
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn pixel_width(&self) -> u32 {
        self.width
    }

    pub fn pixel_height(&self) -> u32 {
        self.height
    }

    /// Pixel at (x, y) in `Argb8888` byte order, `None` outside the raster
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y * self.width + x) as usize * 4;
        let mut out = [0u8; 4];
        out.copy_from_slice(&self.pixels[idx..idx + 4]);
        Some(out)
    }

    /// Fill the half-open pixel span `[x0, x1) x [y0, y1)`, clipped.
    fn fill_span(&mut self, x0: i64, y0: i64, x1: i64, y1: i64, color: [u8; 4]) {
        let x_start = x0.max(0);
        let y_start = y0.max(0);
        let x_end = x1.min(self.width as i64);
        let y_end = y1.min(self.height as i64);

        if x_end <= x_start || y_end <= y_start {
            return; // Nothing to draw
        }

        for y in y_start..y_end {
            let row = (y * self.width as i64) as usize * 4;
            for x in x_start..x_end {
                let idx = row + x as usize * 4;
                self.pixels[idx..idx + 4].copy_from_slice(&color);
            }
        }
    }

    fn fill_rect_with(&mut self, x: f64, y: f64, width: f64, height: f64, color: [u8; 4]) {
        self.fill_span(
            x.round() as i64,
            y.round() as i64,
            (x + width).round() as i64,
            (y + height).round() as i64,
            color,
        );
    }

    /// Square pen stamp of the current line width centered at (x, y).
    fn stamp(&mut self, x: i64, y: i64, color: [u8; 4]) {
        let size = (self.line_width.round() as i64).max(1);
        let x0 = x - size / 2;
        let y0 = y - size / 2;
        self.fill_span(x0, y0, x0 + size, y0 + size, color);
    }
}

impl GraphicsContext for Raster {
    fn width(&self) -> f64 {
        self.width as f64
    }

    fn height(&self) -> f64 {
        self.height as f64
    }

    fn set_fill(&mut self, color: Color) {
        self.fill = color;
    }

    fn set_stroke(&mut self, color: Color) {
        self.stroke = color;
    }

    fn set_line_width(&mut self, width: f64) {
        self.line_width = width.max(0.0);
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let color = self.fill.to_bgra();
        self.fill_rect_with(x, y, width, height, color);
    }

    fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let color = self.stroke.to_bgra();
        let lw = self.line_width;
        let half = lw / 2.0;
        let (left, top) = (x - half, y - half);
        let (outer_w, outer_h) = (width + lw, height + lw);

        self.fill_rect_with(left, top, outer_w, lw, color);
        self.fill_rect_with(left, y + height - half, outer_w, lw, color);
        self.fill_rect_with(left, top, lw, outer_h, color);
        self.fill_rect_with(x + width - half, top, lw, outer_h, color);
    }

    fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        let color = self.stroke.to_bgra();

        // Bresenham with a square pen at each step
        let mut x0 = x1.round() as i64;
        let mut y0 = y1.round() as i64;
        let x_end = x2.round() as i64;
        let y_end = y2.round() as i64;

        let dx = (x_end - x0).abs();
        let dy = (y_end - y0).abs();
        let sx = if x0 < x_end { 1 } else { -1 };
        let sy = if y0 < y_end { 1 } else { -1 };
        let mut err = dx - dy;

        loop {
            self.stamp(x0, y0, color);

            if x0 == x_end && y0 == y_end {
                break;
            }

            let e2 = 2 * err;
            if e2 > -dy {
                err -= dy;
                x0 += sx;
            }
            if e2 < dx {
                err += dx;
                y0 += sy;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{GRAY, RED};

    #[test]
    fn new_raster_is_white() {
        let raster = Raster::new(4, 3);
        assert_eq!(raster.pixels().len(), 4 * 3 * 4);
        assert_eq!(raster.pixel(3, 2), Some(WHITE.to_bgra()));
        assert_eq!(raster.pixel(4, 0), None);
    }

    #[test]
    fn fill_rect_is_clipped() {
        let mut raster = Raster::new(10, 10);
        raster.set_fill(RED);
        raster.fill_rect(-5.0, 8.0, 8.0, 10.0);
        assert_eq!(raster.pixel(0, 9), Some(RED.to_bgra()));
        assert_eq!(raster.pixel(2, 8), Some(RED.to_bgra()));
        assert_eq!(raster.pixel(3, 8), Some(WHITE.to_bgra()));
        assert_eq!(raster.pixel(0, 7), Some(WHITE.to_bgra()));
    }

    #[test]
    fn stroke_rect_centers_the_border_on_the_edges() {
        let mut raster = Raster::new(20, 10);
        raster.set_stroke(GRAY);
        raster.set_line_width(3.0);
        raster.stroke_rect(1.5, 1.5, 17.0, 7.0);

        for x in 0..20 {
            assert_eq!(raster.pixel(x, 0), Some(GRAY.to_bgra()));
            assert_eq!(raster.pixel(x, 2), Some(GRAY.to_bgra()));
            assert_eq!(raster.pixel(x, 9), Some(GRAY.to_bgra()));
        }
        assert_eq!(raster.pixel(19, 5), Some(GRAY.to_bgra()));
        assert_eq!(raster.pixel(3, 3), Some(WHITE.to_bgra()));
        assert_eq!(raster.pixel(16, 6), Some(WHITE.to_bgra()));
        assert_eq!(raster.pixel(17, 6), Some(GRAY.to_bgra()));
    }

    #[test]
    fn stroke_line_covers_endpoints_with_pen_width() {
        let mut raster = Raster::new(20, 20);
        raster.set_stroke(RED);
        raster.set_line_width(2.0);
        raster.stroke_line(5.0, 5.0, 12.0, 9.0);

        assert_eq!(raster.pixel(5, 5), Some(RED.to_bgra()));
        assert_eq!(raster.pixel(4, 4), Some(RED.to_bgra()));
        assert_eq!(raster.pixel(12, 9), Some(RED.to_bgra()));
        assert_eq!(raster.pixel(15, 5), Some(WHITE.to_bgra()));
    }

    #[test]
    fn degenerate_line_is_a_dot() {
        let mut raster = Raster::new(8, 8);
        raster.set_stroke(BLACK);
        raster.set_line_width(1.0);
        raster.stroke_line(3.0, 3.0, 3.0, 3.0);
        assert_eq!(raster.pixel(3, 3), Some(BLACK.to_bgra()));
        assert_eq!(raster.pixel(4, 3), Some(WHITE.to_bgra()));
    }
}
