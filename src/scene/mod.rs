// scene/ - One record per page container
//
// Each scene owns its camera and visual objects and advances them once per
// frame. Nothing here touches the DOM or issues a draw call; the host reads
// the transforms and vertex buffers after `update`.

mod background;
mod logo;
mod preview;

pub use background::{BackgroundScene, Particles, MAX_PARTICLES};
pub use logo::{LogoScene, MAX_LOGO_NODES};
pub use preview::{ProjectPreview, Shape};

use glam::Vec3;

use crate::error::{Error, Result};

/// Perspective camera, looking at `target`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
    pub target: Vec3,
}

impl Camera {
    pub fn perspective(fov: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self { fov, aspect, near, far, position: Vec3::ZERO, target: Vec3::ZERO }
    }

    pub fn at(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Refit the aspect ratio to a container
    pub fn fit(&mut self, width: u32, height: u32) -> Result<()> {
        self.aspect = aspect(width, height)?;
        Ok(())
    }

    /// `[fov, aspect, near, far, px, py, pz, tx, ty, tz]`
    pub fn to_array(&self) -> [f32; 10] {
        let (p, t) = (self.position, self.target);
        [self.fov, self.aspect, self.near, self.far, p.x, p.y, p.z, t.x, t.y, t.z]
    }
}

/// Position, Euler rotation (XYZ order, radians) and uniform scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self { position: Vec3::ZERO, rotation: Vec3::ZERO, scale: 1.0 }
    }
}

impl Transform {
    /// `[px, py, pz, rx, ry, rz, scale]`
    pub fn to_array(&self) -> [f32; 7] {
        let (p, r) = (self.position, self.rotation);
        [p.x, p.y, p.z, r.x, r.y, r.z, self.scale]
    }

    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.rotation.is_finite() && self.scale.is_finite()
    }
}

pub(crate) fn aspect(width: u32, height: u32) -> Result<f32> {
    if width == 0 || height == 0 {
        return Err(Error::EmptyViewport(width, height));
    }
    Ok(width as f32 / height as f32)
}
