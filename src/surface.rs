// filepath: src/surface.rs
//! The paint surface
//!
//! Owns the drawing context, the palette swatches and the drag state, and
//! turns pointer gestures into stroke segments. Pointer coordinates passed to
//! the `handle_pointer_*` methods are canvas-local; [`PaintSurface::swatch_at`]
//! and [`PaintSurface::canvas_rect`] work in window coordinates.

use crate::color::{Color, GRAY, WHITE};
use crate::drag::DragTracker;
use crate::layout::{PaletteLayout, PalettePos, Rect, ResolvedLayout};
use crate::palette;
use crate::raster::GraphicsContext;
use crate::swatch::Swatch;
use log::{debug, info, warn};

pub const STROKE_WIDTH: f64 = 2.0;
pub const BORDER_WIDTH: f64 = 3.0;
pub const BACKGROUND: Color = WHITE;
pub const BORDER_COLOR: Color = GRAY;

/// Distance kept from the near (left/top) edges while drawing
const NEAR_MARGIN: f64 = 3.0;
/// Distance kept from the far (right/bottom) edges while drawing
const FAR_MARGIN: f64 = 4.0;

/// Outcome of [`PaintSurface::handle_swatch_click`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwatchClick {
    /// Same swatch as before, or an unknown index
    Unchanged,
    Selected(usize),
    Cleared,
}

pub struct PaintSurface<G: GraphicsContext> {
    graphics: G,
    palette: Vec<Color>,
    layout: PaletteLayout,
    resolved: ResolvedLayout,
    swatches: Vec<Swatch>,
    tracker: DragTracker,
    selected: usize,
}

impl<G: GraphicsContext> PaintSurface<G> {
    pub fn new(graphics: G, palette: impl Into<Vec<Color>>, position: PalettePos) -> Self {
        let palette = palette.into();
        let layout = PaletteLayout::compute(palette.len(), position);
        let resolved = layout.resolve(graphics.width() as u32, graphics.height() as u32);

        let mut surface = Self {
            graphics,
            palette,
            layout,
            resolved,
            swatches: Vec::new(),
            tracker: DragTracker::new(),
            selected: 0,
        };
        surface.initialize();
        surface
    }

    /// Blank the canvas, redraw the border and rebuild the swatches with the
    /// first color selected. Also what the Clear control does.
    pub fn initialize(&mut self) {
        let width = self.graphics.width();
        let height = self.graphics.height();
        debug!("Initializing paint surface {}x{}", width, height);

        self.graphics.set_fill(BACKGROUND);
        self.graphics.fill_rect(0.0, 0.0, width, height);

        self.graphics.set_stroke(BORDER_COLOR);
        self.graphics.set_line_width(BORDER_WIDTH);
        let half = BORDER_WIDTH / 2.0;
        self.graphics
            .stroke_rect(half, half, width - BORDER_WIDTH, height - BORDER_WIDTH);

        self.swatches = self
            .palette
            .iter()
            .zip(self.resolved.swatches.iter())
            .enumerate()
            .map(|(index, (color, bounds))| {
                Swatch::new(index, *color, self.is_clear_swatch(index), *bounds)
            })
            .collect();

        self.selected = 0;
        if self.current_color().is_some() {
            self.swatches[0].set_highlight(true);
        }
    }

    /// Returns `true` when the press was ignored because a stroke is already
    /// in progress.
    pub fn handle_pointer_press(&mut self, x: f64, y: f64) -> bool {
        if self.tracker.on_press(x, y) {
            debug!("Ignoring press at ({:.1}, {:.1}) during a stroke", x, y);
            return true;
        }

        self.tracker.begin_stroke();
        self.graphics.set_line_width(STROKE_WIDTH);
        if let Some(color) = self.current_color() {
            self.graphics.set_stroke(color);
        }
        false
    }

    /// Returns `true` when a segment was drawn.
    pub fn handle_pointer_drag(&mut self, x: f64, y: f64) -> bool {
        if !self.tracker.on_drag(x, y) {
            return false;
        }

        let (x, y) = self.clamp_to_drawable(x, y);
        self.graphics
            .stroke_line(self.tracker.prev_x(), self.tracker.prev_y(), x, y);
        self.tracker.advance_to(x, y);
        true
    }

    pub fn handle_pointer_release(&mut self) {
        self.tracker.on_release();
    }

    pub fn handle_swatch_click(&mut self, index: usize) -> SwatchClick {
        if index >= self.swatches.len() {
            warn!("Click on unknown swatch {}", index);
            return SwatchClick::Unchanged;
        }
        if index == self.selected {
            return SwatchClick::Unchanged;
        }

        if let Some(current) = self.swatches.get_mut(self.selected) {
            current.set_highlight(false);
        }

        if self.is_clear_swatch(index) {
            info!("Clearing canvas");
            self.initialize();
            return SwatchClick::Cleared;
        }

        self.selected = index;
        self.swatches[index].set_highlight(true);
        debug!("Selected color {} ({})", index, self.palette[index]);
        SwatchClick::Selected(index)
    }

    /// Keep a point clear of the border: at least 3 units from the left/top
    /// edges and 4 from the right/bottom.
    pub fn clamp_to_drawable(&self, x: f64, y: f64) -> (f64, f64) {
        let mut x = x;
        let mut y = y;
        if x < NEAR_MARGIN {
            x = NEAR_MARGIN;
        }
        if x > self.graphics.width() - FAR_MARGIN {
            x = self.graphics.width() - FAR_MARGIN;
        }
        if y < NEAR_MARGIN {
            y = NEAR_MARGIN;
        }
        if y > self.graphics.height() - FAR_MARGIN {
            y = self.graphics.height() - FAR_MARGIN;
        }
        (x, y)
    }

    /// The selected drawing color, `None` if the index is outside the
    /// drawable part of the palette.
    pub fn current_color(&self) -> Option<Color> {
        if self.selected < palette::drawable_len(self.palette.len()) {
            self.palette.get(self.selected).copied()
        } else {
            None
        }
    }

    pub fn current_swatch(&self) -> Option<&Swatch> {
        self.swatches.get(self.selected)
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn is_clear_swatch(&self, index: usize) -> bool {
        palette::clear_index(self.palette.len()) == Some(index)
    }

    pub fn is_dragging(&self) -> bool {
        self.tracker.is_dragging()
    }

    pub fn tracker(&self) -> &DragTracker {
        &self.tracker
    }

    pub fn swatches(&self) -> &[Swatch] {
        &self.swatches
    }

    /// Swatch under a window-coordinate point
    pub fn swatch_at(&self, x: f64, y: f64) -> Option<usize> {
        self.swatches
            .iter()
            .find(|swatch| swatch.bounds.contains(x, y))
            .map(|swatch| swatch.index)
    }

    /// Where the canvas sits in the window
    pub fn canvas_rect(&self) -> Rect {
        self.resolved.canvas
    }

    pub fn window_size(&self) -> (u32, u32) {
        (self.resolved.width, self.resolved.height)
    }

    pub fn layout(&self) -> &PaletteLayout {
        &self.layout
    }

    pub fn palette(&self) -> &[Color] {
        &self.palette
    }

    pub fn graphics(&self) -> &G {
        &self.graphics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{BLACK, RED};
    use crate::palette::STANDARD_PALETTE;
    use crate::raster::Raster;

    #[derive(Debug, Clone, PartialEq)]
    enum Op {
        Fill(Color),
        Stroke(Color),
        LineWidth(f64),
        FillRect(f64, f64, f64, f64),
        StrokeRect(f64, f64, f64, f64),
        Line(f64, f64, f64, f64),
    }

    struct Recorder {
        width: f64,
        height: f64,
        ops: Vec<Op>,
    }

    impl Recorder {
        fn new(width: f64, height: f64) -> Self {
            Self {
                width,
                height,
                ops: Vec::new(),
            }
        }
    }

    impl GraphicsContext for Recorder {
        fn width(&self) -> f64 {
            self.width
        }
        fn height(&self) -> f64 {
            self.height
        }
        fn set_fill(&mut self, color: Color) {
            self.ops.push(Op::Fill(color));
        }
        fn set_stroke(&mut self, color: Color) {
            self.ops.push(Op::Stroke(color));
        }
        fn set_line_width(&mut self, width: f64) {
            self.ops.push(Op::LineWidth(width));
        }
        fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
            self.ops.push(Op::FillRect(x, y, width, height));
        }
        fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
            self.ops.push(Op::StrokeRect(x, y, width, height));
        }
        fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
            self.ops.push(Op::Line(x1, y1, x2, y2));
        }
    }

    fn surface() -> PaintSurface<Recorder> {
        PaintSurface::new(Recorder::new(600.0, 400.0), STANDARD_PALETTE, PalettePos::Left)
    }

    fn lines(surface: &PaintSurface<Recorder>) -> Vec<Op> {
        surface
            .graphics()
            .ops
            .iter()
            .filter(|op| matches!(op, Op::Line(..)))
            .cloned()
            .collect()
    }

    #[test]
    fn initialize_paints_background_and_border() {
        let surface = surface();
        assert_eq!(
            surface.graphics().ops,
            vec![
                Op::Fill(WHITE),
                Op::FillRect(0.0, 0.0, 600.0, 400.0),
                Op::Stroke(GRAY),
                Op::LineWidth(3.0),
                Op::StrokeRect(1.5, 1.5, 597.0, 397.0),
            ]
        );
        assert_eq!(surface.selected_index(), 0);
        assert_eq!(surface.current_color(), Some(BLACK));
        assert_eq!(surface.swatches().len(), 27);
        assert!(surface.swatches()[0].highlighted);
        assert!(surface.swatches()[26].is_clear);
        assert_eq!(surface.window_size(), (656, 400));
    }

    #[test]
    fn clamps_to_inside_the_border() {
        let surface = surface();
        assert_eq!(surface.clamp_to_drawable(0.0, 0.0), (3.0, 3.0));
        assert_eq!(surface.clamp_to_drawable(597.0, 397.0), (596.0, 396.0));
        assert_eq!(surface.clamp_to_drawable(300.0, 200.0), (300.0, 200.0));
        assert_eq!(surface.clamp_to_drawable(-50.0, 1000.0), (3.0, 396.0));
    }

    #[test]
    fn press_and_drag_draws_clamped_segments() {
        let mut surface = surface();
        surface.handle_swatch_click(3);
        assert!(!surface.handle_pointer_press(10.4, 20.9));
        assert!(surface.is_dragging());
        assert!(surface.handle_pointer_drag(50.0, 60.0));
        assert!(surface.handle_pointer_drag(-10.0, 500.0));

        let ops = &surface.graphics().ops;
        assert!(ops.contains(&Op::Stroke(RED)));
        assert!(ops.contains(&Op::LineWidth(2.0)));
        assert_eq!(
            lines(&surface),
            vec![
                Op::Line(10.0, 20.0, 50.0, 60.0),
                Op::Line(50.0, 60.0, 3.0, 396.0),
            ]
        );
    }

    #[test]
    fn drag_without_press_or_after_release_draws_nothing() {
        let mut surface = surface();
        assert!(!surface.handle_pointer_drag(50.0, 60.0));

        surface.handle_pointer_press(5.0, 5.0);
        assert!(surface.handle_pointer_drag(6.0, 6.0));
        surface.handle_pointer_release();
        assert!(!surface.handle_pointer_drag(70.0, 70.0));
        assert_eq!(lines(&surface).len(), 1);
    }

    #[test]
    fn second_press_during_stroke_is_ignored() {
        let mut surface = surface();
        assert!(!surface.handle_pointer_press(5.0, 5.0));
        assert!(surface.handle_pointer_press(100.0, 100.0));
        surface.handle_pointer_drag(10.0, 10.0);
        assert_eq!(lines(&surface), vec![Op::Line(5.0, 5.0, 10.0, 10.0)]);
    }

    #[test]
    fn clicking_selected_swatch_is_a_no_op() {
        let mut surface = surface();
        let before = surface.swatches().to_vec();
        assert_eq!(surface.handle_swatch_click(0), SwatchClick::Unchanged);
        assert_eq!(surface.handle_swatch_click(0), SwatchClick::Unchanged);
        assert_eq!(surface.swatches(), &before[..]);
    }

    #[test]
    fn selecting_moves_the_highlight() {
        let mut surface = surface();
        assert_eq!(surface.handle_swatch_click(5), SwatchClick::Selected(5));
        assert_eq!(surface.selected_index(), 5);
        assert!(!surface.swatches()[0].highlighted);
        assert!(surface.swatches()[5].highlighted);
        assert_eq!(surface.current_swatch().map(|s| s.index), Some(5));
        assert_eq!(surface.current_color(), Some(STANDARD_PALETTE[5]));
        assert_eq!(surface.handle_swatch_click(5), SwatchClick::Unchanged);
    }

    #[test]
    fn unknown_swatch_is_ignored() {
        let mut surface = surface();
        assert_eq!(surface.handle_swatch_click(99), SwatchClick::Unchanged);
        assert_eq!(surface.selected_index(), 0);
    }

    #[test]
    fn clear_restores_blank_canvas_and_selection() {
        let fresh = PaintSurface::new(Raster::new(600, 400), STANDARD_PALETTE, PalettePos::Left);
        let mut surface =
            PaintSurface::new(Raster::new(600, 400), STANDARD_PALETTE, PalettePos::Left);

        surface.handle_swatch_click(3);
        surface.handle_pointer_press(100.0, 100.0);
        surface.handle_pointer_drag(200.0, 150.0);
        surface.handle_pointer_drag(0.0, 0.0);
        surface.handle_pointer_release();
        assert_ne!(surface.graphics().pixels(), fresh.graphics().pixels());

        assert_eq!(surface.handle_swatch_click(26), SwatchClick::Cleared);
        assert_eq!(surface.selected_index(), 0);
        assert_eq!(surface.graphics().pixels(), fresh.graphics().pixels());
        assert_eq!(surface.swatches(), fresh.swatches());
    }

    #[test]
    fn strokes_stay_off_the_border() {
        let mut surface =
            PaintSurface::new(Raster::new(600, 400), STANDARD_PALETTE, PalettePos::Left);
        surface.handle_swatch_click(3);
        surface.handle_pointer_press(300.0, 200.0);
        surface.handle_pointer_drag(-100.0, 200.0);
        surface.handle_pointer_drag(1000.0, 200.0);

        let raster = surface.graphics();
        assert_eq!(raster.pixel(1, 200), Some(GRAY.to_bgra()));
        assert_eq!(raster.pixel(598, 200), Some(GRAY.to_bgra()));
        assert_eq!(raster.pixel(3, 200), Some(RED.to_bgra()));
        assert_eq!(raster.pixel(596, 200), Some(RED.to_bgra()));
    }

    #[test]
    fn hit_testing_uses_window_coordinates() {
        let surface = surface();
        assert_eq!(surface.canvas_rect(), Rect::new(56, 0, 600, 400));
        assert_eq!(surface.swatch_at(1.0, 1.0), Some(0));
        assert_eq!(surface.swatch_at(30.0, 30.0), Some(3));
        assert_eq!(surface.swatch_at(40.0, 13.0 * 28.0 + 5.0), Some(26));
        assert_eq!(surface.swatch_at(100.0, 100.0), None);
    }

    #[test]
    fn clear_only_palette_has_no_drawing_color() {
        let surface = PaintSurface::new(Recorder::new(50.0, 50.0), vec![WHITE], PalettePos::Right);
        assert_eq!(surface.current_color(), None);
        assert!(surface.is_clear_swatch(0));
        assert!(!surface.swatches()[0].highlighted);
    }
}
