//! The page-wide owner of every scene and of the shared pointer.
//!
//! Scenes are mounted once per container the host finds on the page; a
//! missing container simply never gets mounted. [`Stage::frame`] is the
//! per-refresh entry point: it reads the pointer and the clock, advances each
//! mounted scene, and leaves the buffers ready for the host's draw calls.

use crate::config::{ProjectConfig, SiteConfig};
use crate::error::{Error, Result};
use crate::input::Pointer;
use crate::interact::Action;
use crate::rng::Rng;
use crate::scene::{BackgroundScene, LogoScene, ProjectPreview};

#[cfg(test)]
#[path = "stage_test.rs"]
mod stage_test;

pub struct Stage {
    config: SiteConfig,
    pointer: Pointer,
    rng: Rng,
    logo: Option<LogoScene>,
    background: Option<BackgroundScene>,
    /// Slots follow `config.projects` order
    projects: Vec<Option<ProjectPreview>>,
}

impl Stage {
    #[must_use]
    pub fn new(config: SiteConfig) -> Self {
        let slots = config.projects.len();
        Self {
            rng: Rng::new(config.seed),
            config,
            pointer: Pointer::default(),
            logo: None,
            background: None,
            projects: std::iter::repeat_with(|| None).take(slots).collect(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    // --- Bootstrapping ---

    /// Mount (or re-mount) the header logo.
    pub fn mount_logo(&mut self) {
        self.logo = Some(LogoScene::new(&self.config.logo, &mut self.rng));
    }

    /// Mount (or re-mount) the full-window particle background.
    pub fn mount_background(&mut self, width: u32, height: u32) -> Result<()> {
        let scene = BackgroundScene::new(&self.config.background, width, height, &mut self.rng)?;
        self.background = Some(scene);
        Ok(())
    }

    /// Mount (or re-mount) the preview for container `id`.
    pub fn mount_project(&mut self, id: &str, width: u32, height: u32) -> Result<()> {
        let slot = self.slot(id)?;
        let preview = ProjectPreview::new(&self.config.projects[slot], width, height)?;
        self.projects[slot] = Some(preview);
        Ok(())
    }

    /// Container ids of every project the config knows about, mounted or not.
    pub fn project_ids(&self) -> impl Iterator<Item = &str> {
        self.config.projects.iter().map(|p| p.id.as_str())
    }

    // --- Per-frame ---

    pub fn pointer_move(&mut self, client_x: f32, client_y: f32, viewport_w: f32, viewport_h: f32) {
        self.pointer.track(client_x, client_y, viewport_w, viewport_h);
    }

    #[must_use]
    pub fn pointer(&self) -> Pointer {
        self.pointer
    }

    /// Advance every mounted scene to time `t` (milliseconds).
    pub fn frame(&mut self, t: f32) {
        if let Some(logo) = &mut self.logo {
            logo.update();
        }
        if let Some(background) = &mut self.background {
            background.update(self.pointer);
        }
        for preview in self.projects.iter_mut().flatten() {
            preview.update(t);
        }
    }

    /// The window changed size; only the background tracks the window.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        match &mut self.background {
            Some(background) => background.resize(width, height),
            None => Ok(()),
        }
    }

    // --- Preview input ---

    pub fn project_pointer_down(&mut self, id: &str) -> Result<Action> {
        Ok(self.mounted_mut(id)?.map_or(Action::None, ProjectPreview::pointer_down))
    }

    pub fn project_pointer_move(&mut self, id: &str, offset_x: f32, offset_y: f32) -> Result<()> {
        if let Some(preview) = self.mounted_mut(id)? {
            preview.pointer_move(offset_x, offset_y);
        }
        Ok(())
    }

    pub fn project_double_click(&self, id: &str) -> Result<Action> {
        let slot = self.slot(id)?;
        Ok(self.projects[slot].as_ref().map_or(Action::None, ProjectPreview::double_click))
    }

    /// Pointer released anywhere on the page: every preview stops dragging.
    pub fn pointer_up(&mut self) -> Vec<(String, Action)> {
        self.projects
            .iter_mut()
            .flatten()
            .map(|p| {
                let action = p.pointer_up();
                (p.config.id.clone(), action)
            })
            .filter(|(_, action)| *action != Action::None)
            .collect()
    }

    // --- Queries ---

    #[must_use]
    pub fn logo(&self) -> Option<&LogoScene> {
        self.logo.as_ref()
    }

    #[must_use]
    pub fn background(&self) -> Option<&BackgroundScene> {
        self.background.as_ref()
    }

    /// The mounted preview for `id`, if any.
    #[must_use]
    pub fn project(&self, id: &str) -> Option<&ProjectPreview> {
        let slot = self.slot(id).ok()?;
        self.projects[slot].as_ref()
    }

    pub fn project_config(&self, id: &str) -> Result<&ProjectConfig> {
        self.config.project(id).ok_or_else(|| Error::UnknownProject(id.into()))
    }

    fn slot(&self, id: &str) -> Result<usize> {
        self.config
            .projects
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| Error::UnknownProject(id.into()))
    }

    fn mounted_mut(&mut self, id: &str) -> Result<Option<&mut ProjectPreview>> {
        let slot = self.slot(id)?;
        Ok(self.projects[slot].as_mut())
    }
}
