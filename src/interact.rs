//! Pointer interaction on the project previews.
//!
//! Each preview carries a two-state drag toggle: pointer-down on the preview
//! starts a drag, pointer-up anywhere ends it. Movement only rotates while
//! dragging. Handlers return an [`Action`] for the host to carry out.

use glam::Vec2;

#[cfg(test)]
#[path = "interact_test.rs"]
mod interact_test;

pub const CURSOR_IDLE: &str = "grab";
pub const CURSOR_DRAGGING: &str = "grabbing";

/// Pointer travel (CSS pixels) during the last press beyond which a
/// double-click no longer counts as a request to open the project.
pub const CLICK_TOLERANCE: f32 = 4.0;

/// Side effects the host should perform after an input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    None,
    SetCursor(&'static str),
    Navigate(String),
}

/// Drag toggle plus the last pointer position seen over the preview.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragState {
    dragging: bool,
    /// Last pointer position in container offset coordinates
    last: Vec2,
    /// Distance travelled since the last press
    travel: f32,
}

impl DragState {
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Pointer-down on the preview: idle -> dragging.
    pub fn press(&mut self) -> Action {
        self.dragging = true;
        self.travel = 0.0;
        Action::SetCursor(CURSOR_DRAGGING)
    }

    /// Pointer-up anywhere on the page: dragging -> idle.
    pub fn release(&mut self) -> Action {
        if !self.dragging {
            return Action::None;
        }
        self.dragging = false;
        Action::SetCursor(CURSOR_IDLE)
    }

    /// Pointer-move over the preview. Returns the delta since the previous
    /// move while dragging, `None` otherwise. The position is recorded in
    /// both states so a drag never jumps on its first move.
    pub fn motion(&mut self, x: f32, y: f32) -> Option<Vec2> {
        let pos = Vec2::new(x, y);
        let delta = pos - self.last;
        self.last = pos;
        if !self.dragging {
            return None;
        }
        self.travel += delta.length();
        Some(delta)
    }

    /// Whether a double-click should navigate, given how far the pointer
    /// moved during the press that completed it.
    #[must_use]
    pub fn is_click(&self) -> bool {
        self.travel <= CLICK_TOLERANCE
    }
}
