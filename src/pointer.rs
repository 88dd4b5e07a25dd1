// filepath: src/pointer.rs
//! Pointer (mouse) event handling for hypr-paint

use crate::app::AppData;
use hypr_paint::input::convert_pointer_event;
use log::debug;
use smithay_client_toolkit::seat::pointer::{PointerEvent, PointerEventKind};

pub fn handle_pointer_events(events: &[PointerEvent], app: &mut AppData) {
    debug!("handle_pointer_events: {} events", events.len());
    for event in events {
        match event.kind {
            PointerEventKind::Enter { .. } => {
                debug!(
                    "Pointer entered window at ({:.2}, {:.2})",
                    event.position.0, event.position.1
                );
            }
            PointerEventKind::Leave { .. } => {
                debug!("Pointer left window");
            }
            _ => {}
        }

        if let Some(input) = convert_pointer_event(event) {
            app.handle_input(input);
        }
    }
}
