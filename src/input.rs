// filepath: src/input.rs
//! Pointer input routing
//!
//! Window-level pointer events are mapped onto the paint surface: presses
//! over a swatch select a color (or clear), presses over the canvas start a
//! stroke, and motion while a stroke is active extends it.

use crate::layout::Rect;
use crate::raster::GraphicsContext;
use crate::surface::{PaintSurface, SwatchClick};
use log::debug;

/// Pointer events in window coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerInput {
    Press { button: u32, x: f64, y: f64 },
    Motion { x: f64, y: f64 },
    Release { button: u32 },
}

/// Convert from wayland pointer events to paint input
pub fn convert_pointer_event(
    event: &smithay_client_toolkit::seat::pointer::PointerEvent,
) -> Option<PointerInput> {
    use smithay_client_toolkit::seat::pointer::PointerEventKind;

    let (x, y) = event.position;
    match event.kind {
        PointerEventKind::Press { button, .. } => Some(PointerInput::Press { button, x, y }),
        PointerEventKind::Motion { .. } => Some(PointerInput::Motion { x, y }),
        PointerEventKind::Release { button, .. } => Some(PointerInput::Release { button }),
        _ => None,
    }
}

fn to_local(area: Rect, x: f64, y: f64) -> (f64, f64) {
    (x - area.x as f64, y - area.y as f64)
}

/// Apply one input to the surface. Returns `true` if the window needs a redraw.
pub fn route_pointer<G: GraphicsContext>(surface: &mut PaintSurface<G>, input: PointerInput) -> bool {
    match input {
        PointerInput::Press { button, x, y } => {
            if surface.is_dragging() {
                debug!("Press of button {} ignored while drawing", button);
                return false;
            }
            if let Some(index) = surface.swatch_at(x, y) {
                return surface.handle_swatch_click(index) != SwatchClick::Unchanged;
            }
            let area = surface.canvas_rect();
            if area.contains(x, y) {
                let (lx, ly) = to_local(area, x, y);
                surface.handle_pointer_press(lx, ly);
            }
            false
        }
        PointerInput::Motion { x, y } => {
            if !surface.is_dragging() {
                return false;
            }
            let (lx, ly) = to_local(surface.canvas_rect(), x, y);
            surface.handle_pointer_drag(lx, ly)
        }
        PointerInput::Release { .. } => {
            surface.handle_pointer_release();
            false
        }
    }
}
