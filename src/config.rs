// config.rs - Parameter tables for every scene and the contact form
//
// `Default` reproduces the live page. Hosts may override any subset by
// passing JSON to `SiteConfig::from_json`; missing keys keep their defaults.

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::scene::{MAX_LOGO_NODES, MAX_PARTICLES};

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Which parametric object a project preview shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectKind {
    /// Pulsing wireframe icosahedron.
    Heart,
    /// Spinning torus knot.
    Wave,
    /// Rippling plane grid.
    Pool,
    /// Sine polyline.
    Signal,
}

impl ProjectKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectKind::Heart => "heart",
            ProjectKind::Wave => "wave",
            ProjectKind::Pool => "pool",
            ProjectKind::Signal => "signal",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProjectConfig {
    pub id: String,
    pub color: u32,
    pub kind: ProjectKind,
    pub link: String,
}

impl ProjectConfig {
    fn new(id: &str, color: u32, kind: ProjectKind, link: &str) -> Self {
        Self { id: id.into(), color, kind, link: link.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LogoConfig {
    pub container: String,
    /// Square viewport edge in CSS pixels
    pub size: u32,
    pub node_count: usize,
    /// Edge of the cube nodes are scattered in
    pub spread: f32,
    pub link_distance: f32,
    pub node_color: u32,
    pub link_color: u32,
    pub link_opacity: f32,
}

impl Default for LogoConfig {
    fn default() -> Self {
        Self {
            container: "logo-3d".into(),
            size: 50,
            node_count: 12,
            spread: 2.2,
            link_distance: 1.8,
            node_color: 0x06b6d4,
            link_color: 0x8b5cf6,
            link_opacity: 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BackgroundConfig {
    pub container: String,
    pub particle_count: usize,
    /// Particles bounce off x = +-half_width
    pub half_width: f32,
    /// Particles bounce off y = +-half_height
    pub half_height: f32,
    /// Spawn range on z; no bounce on this axis
    pub half_depth: f32,
    /// Largest per-axis speed in units per frame
    pub max_speed: f32,
    pub link_distance: f32,
    pub repel_radius: f32,
    pub repel_strength: f32,
    /// Fraction of the remaining distance the camera covers each frame
    pub camera_follow: f32,
    /// Camera offset at full pointer deflection
    pub camera_range: f32,
    pub particle_color: u32,
    pub link_color: u32,
    pub link_opacity: f32,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            container: "particles-js".into(),
            particle_count: 120,
            half_width: 100.0,
            half_height: 50.0,
            half_depth: 50.0,
            max_speed: 0.025,
            link_distance: 25.0,
            repel_radius: 20.0,
            repel_strength: 0.2,
            camera_follow: 0.05,
            camera_range: 10.0,
            particle_color: 0x3b82f6,
            link_color: 0x2563eb,
            link_opacity: 0.15,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RelayConfig {
    pub form_id: String,
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    /// How long the success/failure label stays on the button
    pub reset_delay_ms: u32,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            form_id: "contactForm".into(),
            endpoint: "https://api.emailjs.com/api/v1.0/email/send".into(),
            service_id: "service_b1dktuq".into(),
            template_id: "template_aqv1m2g".into(),
            public_key: String::new(),
            reset_delay_ms: 3000,
        }
    }
}

impl RelayConfig {
    /// EmailJS rejects every request without one.
    pub fn has_public_key(&self) -> bool {
        !self.public_key.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub logo: LogoConfig,
    pub background: BackgroundConfig,
    pub projects: Vec<ProjectConfig>,
    pub relay: RelayConfig,
    pub log_level: String,
    pub seed: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            logo: LogoConfig::default(),
            background: BackgroundConfig::default(),
            projects: vec![
                ProjectConfig::new("project-heart", 0xef4444, ProjectKind::Heart, "project-heart.html"),
                ProjectConfig::new("project-eog", 0x10b981, ProjectKind::Wave, "project-eog.html"),
                ProjectConfig::new("project-stormy", 0x06b6d4, ProjectKind::Pool, "project-stormy.html"),
                ProjectConfig::new("project-signal", 0x8b5cf6, ProjectKind::Signal, "project-signal.html"),
            ],
            relay: RelayConfig::default(),
            log_level: "info".into(),
            seed: crate::rng::DEFAULT_SEED,
        }
    }
}

impl SiteConfig {
    /// Parse a JSON override and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let (l, b) = (&self.logo, &self.background);
        if b.particle_count > MAX_PARTICLES {
            return Err(Error::Invalid("background.particle_count exceeds particle capacity"));
        }
        if l.node_count > MAX_LOGO_NODES {
            return Err(Error::Invalid("logo.node_count exceeds node capacity"));
        }
        if l.size == 0 {
            return Err(Error::Invalid("logo.size must be non-zero"));
        }
        if !(b.half_width > 0.0 && b.half_height > 0.0 && b.half_depth >= 0.0)
            || !(b.half_width.is_finite() && b.half_height.is_finite() && b.half_depth.is_finite())
        {
            return Err(Error::Invalid("background bounds must be positive"));
        }

        non_negative(l.spread, "logo.spread")?;
        non_negative(l.link_distance, "logo.link_distance")?;
        non_negative(b.max_speed, "background.max_speed")?;
        non_negative(b.link_distance, "background.link_distance")?;
        non_negative(b.repel_radius, "background.repel_radius")?;
        non_negative(b.repel_strength, "background.repel_strength")?;
        non_negative(b.camera_range, "background.camera_range")?;

        let colors = [l.node_color, l.link_color, b.particle_color, b.link_color];
        if colors.into_iter().chain(self.projects.iter().map(|p| p.color)).any(|c| c > 0xffffff) {
            return Err(Error::Invalid("colours must be 0xRRGGBB"));
        }

        // Easing past the goal overshoots further every frame
        if !(0.0..=1.0).contains(&b.camera_follow) {
            return Err(Error::Invalid("background.camera_follow must be within [0, 1]"));
        }
        for (i, p) in self.projects.iter().enumerate() {
            if self.projects[..i].iter().any(|q| q.id == p.id) {
                return Err(Error::Invalid("project ids must be unique"));
            }
        }
        Ok(())
    }

    pub fn project(&self, id: &str) -> Option<&ProjectConfig> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Unparseable levels fall back to `Info`.
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

fn non_negative(value: f32, field: &'static str) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(Error::Negative(field))
    }
}
