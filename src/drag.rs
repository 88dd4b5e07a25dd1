// filepath: src/drag.rs
//! Pointer drag tracking
//!
//! A press only records where it happened. Whoever receives the press
//! decides whether it starts a stroke and calls [`DragTracker::begin_stroke`];
//! presses on palette controls never do.

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragTracker {
    dragging: bool,
    current_x: i32,
    current_y: i32,
    prev_x: f64,
    prev_y: f64,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a press. Returns `true` when the press is ignored because a
    /// drag is already running (e.g. a second button went down).
    pub fn on_press(&mut self, x: f64, y: f64) -> bool {
        if self.dragging {
            return true;
        }
        self.current_x = x as i32;
        self.current_y = y as i32;
        false
    }

    /// Start a stroke at the last pressed position.
    pub fn begin_stroke(&mut self) {
        self.prev_x = self.current_x as f64;
        self.prev_y = self.current_y as f64;
        self.dragging = true;
    }

    /// Record pointer motion. Returns `false` when no drag is active.
    ///
    /// On `true` the caller draws from [`prev_x`](Self::prev_x)/[`prev_y`](Self::prev_y)
    /// and then calls [`advance_to`](Self::advance_to).
    pub fn on_drag(&mut self, x: f64, y: f64) -> bool {
        if !self.dragging {
            return false;
        }
        self.current_x = x as i32;
        self.current_y = y as i32;
        true
    }

    pub fn advance_to(&mut self, x: f64, y: f64) {
        self.prev_x = x;
        self.prev_y = y;
    }

    pub fn on_release(&mut self) {
        self.dragging = false;
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn current_x(&self) -> i32 {
        self.current_x
    }

    pub fn current_y(&self) -> i32 {
        self.current_y
    }

    pub fn prev_x(&self) -> f64 {
        self.prev_x
    }

    pub fn prev_y(&self) -> f64 {
        self.prev_y
    }
}
