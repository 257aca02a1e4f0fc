// background.rs - Drifting particle field behind the page
//
// Structure-of-Arrays layout for cache-friendly iteration; the pairwise link
// pass is O(n^2) and dominates the frame.

use glam::Vec3;

use super::{Camera, aspect};
use crate::config::BackgroundConfig;
use crate::error::Result;
use crate::input::Pointer;
use crate::render::VertexBuffer;
use crate::rng::Rng;

pub const MAX_PARTICLES: usize = 512;

pub struct Particles {
    // Position
    pub x: [f32; MAX_PARTICLES],
    pub y: [f32; MAX_PARTICLES],
    pub z: [f32; MAX_PARTICLES],

    // Velocity, units per frame
    pub vx: [f32; MAX_PARTICLES],
    pub vy: [f32; MAX_PARTICLES],
    pub vz: [f32; MAX_PARTICLES],

    // Count
    pub n: usize,
}

impl Particles {
    pub fn new() -> Self {
        Self {
            x: [0.0; MAX_PARTICLES],
            y: [0.0; MAX_PARTICLES],
            z: [0.0; MAX_PARTICLES],
            vx: [0.0; MAX_PARTICLES],
            vy: [0.0; MAX_PARTICLES],
            vz: [0.0; MAX_PARTICLES],
            n: 0,
        }
    }

    /// Scatter `count` particles through the field volume
    pub fn spawn(&mut self, count: usize, config: &BackgroundConfig, rng: &mut Rng) {
        for _ in 0..count {
            if self.n >= MAX_PARTICLES { return; }

            let i = self.n;
            self.x[i] = rng.range(-config.half_width, config.half_width);
            self.y[i] = rng.range(-config.half_height, config.half_height);
            self.z[i] = rng.range(-config.half_depth, config.half_depth);

            let s = config.max_speed * 2.0;
            self.vx[i] = rng.centered(s);
            self.vy[i] = rng.centered(s);
            self.vz[i] = rng.centered(s);

            self.n += 1;
        }
    }

    #[inline]
    pub fn position(&self, i: usize) -> Vec3 {
        Vec3::new(self.x[i], self.y[i], self.z[i])
    }

    /// Drift, bounce off the x/y walls, and shy away from `repel_from`
    pub fn update(&mut self, config: &BackgroundConfig, repel_from: Vec3) {
        for i in 0..self.n {
            self.x[i] += self.vx[i];
            self.y[i] += self.vy[i];
            self.z[i] += self.vz[i];

            if self.x[i] < -config.half_width || self.x[i] > config.half_width {
                self.vx[i] = -self.vx[i];
            }
            if self.y[i] < -config.half_height || self.y[i] > config.half_height {
                self.vy[i] = -self.vy[i];
            }

            let p = self.position(i);
            if p.distance(repel_from) < config.repel_radius {
                let push = (p - repel_from).normalize_or_zero() * config.repel_strength;
                self.x[i] += push.x;
                self.y[i] += push.y;
                self.z[i] += push.z;
            }
        }
    }
}

impl Default for Particles {
    fn default() -> Self {
        Self::new()
    }
}

pub struct BackgroundScene {
    pub camera: Camera,
    config: BackgroundConfig,
    particles: Particles,
    positions: VertexBuffer,
    links: VertexBuffer,
}

impl BackgroundScene {
    pub fn new(config: &BackgroundConfig, width: u32, height: u32, rng: &mut Rng) -> Result<Self> {
        let camera = Camera::perspective(75.0, aspect(width, height)?, 0.1, 1000.0)
            .at(Vec3::new(0.0, 0.0, 80.0));

        let mut particles = Particles::new();
        particles.spawn(config.particle_count, config, rng);

        let mut scene = Self {
            camera,
            config: config.clone(),
            particles,
            positions: VertexBuffer::with_capacity(config.particle_count),
            links: VertexBuffer::default(),
        };
        scene.rebuild();
        Ok(scene)
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        self.camera.fit(width, height)?;
        log::debug!("background: resized to {width}x{height}");
        Ok(())
    }

    pub fn update(&mut self, pointer: Pointer) {
        // Ease the camera towards the pointer, always facing the origin
        let c = &self.config;
        let goal = Vec3::new(pointer.x * c.camera_range, pointer.y * c.camera_range, 0.0);
        self.camera.position.x += (goal.x - self.camera.position.x) * c.camera_follow;
        self.camera.position.y += (goal.y - self.camera.position.y) * c.camera_follow;
        self.camera.target = Vec3::ZERO;

        // Pointer projected onto the z = 0 plane of the field
        let repel_from = Vec3::new(pointer.x * c.half_width, pointer.y * c.half_height, 0.0);
        self.particles.update(&self.config, repel_from);

        self.rebuild();
    }

    fn rebuild(&mut self) {
        let p = &self.particles;
        let limit = self.config.link_distance;

        self.positions.clear();
        self.links.clear();
        for i in 0..p.n {
            let a = p.position(i);
            self.positions.push(a);
            for j in i + 1..p.n {
                let b = p.position(j);
                if a.distance(b) < limit {
                    self.links.push_segment(a, b);
                }
            }
        }
    }

    pub fn particles(&self) -> &Particles {
        &self.particles
    }

    pub fn positions(&self) -> &VertexBuffer {
        &self.positions
    }

    /// Segment pairs between nearby particles, rebuilt every frame
    pub fn links(&self) -> &VertexBuffer {
        &self.links
    }
}
