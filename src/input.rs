// input.rs - Pointer position in normalized device coordinates
//
// x grows right, y grows up, both in [-1, 1]. A pointer outside the viewport
// (window edges, captured drags) is clamped rather than extrapolated.

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Pointer {
    pub x: f32,
    pub y: f32,
}

impl Pointer {
    /// Normalize a client-space position against the viewport size.
    /// A viewport with no area maps everything to the centre.
    pub fn from_client(client_x: f32, client_y: f32, viewport_w: f32, viewport_h: f32) -> Self {
        if !(viewport_w > 0.0 && viewport_h > 0.0) {
            return Self::default();
        }
        let x = (client_x / viewport_w) * 2.0 - 1.0;
        let y = -(client_y / viewport_h) * 2.0 + 1.0;
        Self { x: clamp_unit(x), y: clamp_unit(y) }
    }

    pub fn track(&mut self, client_x: f32, client_y: f32, viewport_w: f32, viewport_h: f32) {
        *self = Self::from_client(client_x, client_y, viewport_w, viewport_h);
    }
}

#[inline]
fn clamp_unit(v: f32) -> f32 {
    if v.is_nan() { 0.0 } else { v.clamp(-1.0, 1.0) }
}
