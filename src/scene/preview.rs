// preview.rs - Interactive per-project previews
//
// One parametric object per container. While idle each kind runs its own
// ambient animation; while dragged the animation pauses and the pointer
// rotates the object instead.

use std::f32::consts::PI;

use glam::{Vec2, Vec3};

use super::{Camera, Transform, aspect};
use crate::config::{ProjectConfig, ProjectKind};
use crate::error::Result;
use crate::geometry::{self, Mesh};
use crate::interact::{Action, DragState};
use crate::render::VertexBuffer;

// Drag sensitivity, radians per CSS pixel
const DRAG_SPEED: f32 = 0.01;
const POOL_DRAG_SPEED: f32 = 0.005;

// Pool ripple
const POOL_SIZE: f32 = 3.5;
const POOL_SEGMENTS: u32 = 20;
const POOL_AMPLITUDE: f32 = 0.15;
const POOL_RATE: f32 = 0.002;

// Signal trace
const SIGNAL_POINTS: usize = 100;
const SIGNAL_SPAN: f32 = 5.0;
const SIGNAL_AMPLITUDE: f32 = 0.8;
const SIGNAL_RATE: f32 = 0.003;
const SIGNAL_SWAY: f32 = 0.3;
const SIGNAL_SWAY_RATE: f32 = 0.0005;

/// What the host draws for a preview.
pub enum Shape {
    /// Wireframe triangle mesh
    Mesh(Mesh),
    /// Open polyline
    Line(VertexBuffer),
}

impl Shape {
    pub fn positions(&self) -> &VertexBuffer {
        match self {
            Shape::Mesh(mesh) => &mesh.positions,
            Shape::Line(line) => line,
        }
    }
}

pub struct ProjectPreview {
    pub config: ProjectConfig,
    pub camera: Camera,
    pub object: Transform,
    pub shape: Shape,
    drag: DragState,
}

impl ProjectPreview {
    pub fn new(config: &ProjectConfig, width: u32, height: u32) -> Result<Self> {
        let camera = Camera::perspective(45.0, aspect(width, height)?, 0.1, 100.0)
            .at(Vec3::new(0.0, 0.0, 5.0));

        let mut object = Transform::default();
        let shape = match config.kind {
            ProjectKind::Heart => Shape::Mesh(geometry::icosahedron(1.5, 1)),
            ProjectKind::Wave => Shape::Mesh(geometry::torus_knot(0.9, 0.3, 100, 16, 2, 3)),
            ProjectKind::Pool => {
                object.rotation.x = -PI / 3.0;
                Shape::Mesh(geometry::plane_grid(POOL_SIZE, POOL_SIZE, POOL_SEGMENTS, POOL_SEGMENTS))
            }
            ProjectKind::Signal => Shape::Line(geometry::polyline(SIGNAL_POINTS, SIGNAL_SPAN)),
        };

        log::debug!("preview {}: {:?} in {width}x{height}", config.id, config.kind);

        Ok(Self { config: config.clone(), camera, object, shape, drag: DragState::default() })
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Advance the ambient animation to time `t` (milliseconds).
    /// Paused while the preview is being dragged.
    pub fn update(&mut self, t: f32) {
        if self.drag.is_dragging() {
            return;
        }

        let object = &mut self.object;
        match self.config.kind {
            ProjectKind::Heart => {
                object.scale = heartbeat(t);
                object.rotation.y += 0.005;
            }
            ProjectKind::Wave => {
                object.rotation.z += 0.01;
                object.rotation.y += 0.005;
            }
            ProjectKind::Pool => {
                object.rotation.z += 0.002;
                if let Shape::Mesh(mesh) = &mut self.shape {
                    for i in 0..mesh.vertex_count() {
                        let v = mesh.positions.get(i);
                        mesh.positions.set_z(i, ripple(v.x, v.y, t));
                    }
                    mesh.compute_vertex_normals();
                }
            }
            ProjectKind::Signal => {
                if let Shape::Line(line) = &mut self.shape {
                    for i in 0..line.vertex_count() {
                        let x = line.get(i).x;
                        line.set_y(i, signal_height(x, t));
                    }
                }
                object.rotation.y = (t * SIGNAL_SWAY_RATE).sin() * SIGNAL_SWAY;
            }
        }
    }

    // --- Input ---

    pub fn pointer_down(&mut self) -> Action {
        self.drag.press()
    }

    pub fn pointer_up(&mut self) -> Action {
        self.drag.release()
    }

    /// Pointer moved to `(x, y)` in container offset coordinates.
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        if let Some(delta) = self.drag.motion(x, y) {
            self.rotate_by(delta);
        }
    }

    pub fn double_click(&self) -> Action {
        if !self.drag.is_click() {
            log::debug!("preview {}: double-click ended a drag, not navigating", self.config.id);
            return Action::None;
        }
        Action::Navigate(self.config.link.clone())
    }

    pub fn cursor(&self) -> &'static str {
        if self.drag.is_dragging() {
            crate::interact::CURSOR_DRAGGING
        } else {
            crate::interact::CURSOR_IDLE
        }
    }

    fn rotate_by(&mut self, delta: Vec2) {
        let r = &mut self.object.rotation;
        if self.config.kind == ProjectKind::Pool {
            // The pool lies tilted, so horizontal drags spin it about its normal
            r.z += delta.x * POOL_DRAG_SPEED;
            r.x += delta.y * POOL_DRAG_SPEED;
        } else {
            r.y += delta.x * DRAG_SPEED;
            r.x += delta.y * DRAG_SPEED;
        }
    }
}

/// Mostly flat with a sharp beat: sin^10 spikes briefly near each peak
#[inline]
pub fn heartbeat(t: f32) -> f32 {
    (t * 0.006).sin().powi(10) * 0.1 + 1.0
}

#[inline]
pub fn ripple(x: f32, y: f32, t: f32) -> f32 {
    (x * 2.0 + t * POOL_RATE).sin() * POOL_AMPLITUDE + (y * 1.5 + t * POOL_RATE).cos() * POOL_AMPLITUDE
}

#[inline]
pub fn signal_height(x: f32, t: f32) -> f32 {
    (x * 2.0 + t * SIGNAL_RATE).sin() * SIGNAL_AMPLITUDE
}

#[cfg(test)]
#[path = "preview_test.rs"]
mod preview_test;
