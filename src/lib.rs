use wasm_bindgen::prelude::*;

// ============================================================================
// PORTFOLIO SCENES - Decorative 3D visuals and contact form for the site
// ============================================================================
//
// The host page owns the 3D library and the animation frame callback. Each
// frame it calls `frame(t)` and then reads transforms and vertex buffers
// straight out of wasm memory:
//
//   new Float32Array(memory.buffer, p.logo_links_ptr(), p.logo_links_len())
//
// Views must be re-created after `frame` since buffers may have grown.

pub mod config;
pub mod error;
pub mod form;
pub mod geometry;
pub mod input;
pub mod interact;
pub mod render;
pub mod rng;
pub mod scene;
pub mod stage;

#[cfg(target_arch = "wasm32")]
mod web;

use config::SiteConfig;
use interact::Action;
use render::VertexBuffer;
use scene::ProjectPreview;
use stage::Stage;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    web::init_logging(log::Level::Info);
}

#[wasm_bindgen]
pub struct Portfolio {
    stage: Stage,
}

#[wasm_bindgen]
impl Portfolio {
    /// `config_json` overrides any subset of the defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<Portfolio, JsError> {
        let config = match config_json.as_deref() {
            Some(json) => SiteConfig::from_json(json)?,
            None => SiteConfig::default(),
        };
        log::set_max_level(config.log_level().to_level_filter());
        Ok(Self { stage: Stage::new(config) })
    }

    // --- Bootstrapping ---

    pub fn mount_logo(&mut self) {
        self.stage.mount_logo();
    }

    pub fn mount_background(&mut self, width: u32, height: u32) -> Result<(), JsError> {
        Ok(self.stage.mount_background(width, height)?)
    }

    pub fn mount_project(&mut self, id: &str, width: u32, height: u32) -> Result<(), JsError> {
        Ok(self.stage.mount_project(id, width, height)?)
    }

    /// Container ids the host should look for
    pub fn logo_container(&self) -> String {
        self.stage.config().logo.container.clone()
    }

    pub fn background_container(&self) -> String {
        self.stage.config().background.container.clone()
    }

    pub fn project_containers(&self) -> Vec<String> {
        self.stage.project_ids().map(String::from).collect()
    }

    // --- Events ---

    pub fn pointer_move(&mut self, client_x: f32, client_y: f32, viewport_w: f32, viewport_h: f32) {
        self.stage.pointer_move(client_x, client_y, viewport_w, viewport_h);
    }

    /// Page-wide pointer-up. Returns the ids of previews that stopped dragging.
    pub fn pointer_up(&mut self) -> Vec<String> {
        self.stage.pointer_up().into_iter().map(|(id, _)| id).collect()
    }

    /// Returns the cursor the container should show.
    pub fn project_pointer_down(&mut self, id: &str) -> Result<String, JsError> {
        self.stage.project_pointer_down(id)?;
        Ok(self.cursor(id))
    }

    pub fn project_pointer_move(&mut self, id: &str, offset_x: f32, offset_y: f32) -> Result<(), JsError> {
        Ok(self.stage.project_pointer_move(id, offset_x, offset_y)?)
    }

    /// Navigates on wasm; returns the target URL, if any.
    pub fn project_double_click(&self, id: &str) -> Result<Option<String>, JsError> {
        let Action::Navigate(url) = self.stage.project_double_click(id)? else {
            return Ok(None);
        };
        #[cfg(target_arch = "wasm32")]
        if let Err(e) = web::navigate(&url) {
            log::warn!("navigation to {url} failed: {e:?}");
        }
        Ok(Some(url))
    }

    pub fn cursor(&self, id: &str) -> String {
        self.stage.project(id).map_or(interact::CURSOR_IDLE, ProjectPreview::cursor).into()
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), JsError> {
        Ok(self.stage.resize(width, height)?)
    }

    /// Advance every mounted scene; `t` is the animation timestamp in ms.
    pub fn frame(&mut self, t: f32) {
        self.stage.frame(t);
    }

    pub fn pointer_x(&self) -> f32 { self.stage.pointer().x }
    pub fn pointer_y(&self) -> f32 { self.stage.pointer().y }

    // --- Logo ---

    pub fn logo_size(&self) -> u32 {
        self.stage.logo().map_or(0, |l| l.size())
    }

    pub fn logo_camera(&self) -> Vec<f32> {
        self.stage.logo().map(|l| l.camera.to_array().to_vec()).unwrap_or_default()
    }

    pub fn logo_transform(&self) -> Vec<f32> {
        self.stage.logo().map(|l| l.group.to_array().to_vec()).unwrap_or_default()
    }

    /// `[node_color, link_color, link_opacity]`; colours are 0xRRGGBB
    pub fn logo_style(&self) -> Vec<f32> {
        let l = &self.stage.config().logo;
        vec![l.node_color as f32, l.link_color as f32, l.link_opacity]
    }

    pub fn logo_nodes_ptr(&self) -> *const f32 { ptr(self.stage.logo().map(|l| l.nodes())) }
    pub fn logo_nodes_len(&self) -> usize { len(self.stage.logo().map(|l| l.nodes())) }
    pub fn logo_links_ptr(&self) -> *const f32 { ptr(self.stage.logo().map(|l| l.links())) }
    pub fn logo_links_len(&self) -> usize { len(self.stage.logo().map(|l| l.links())) }

    // --- Background ---

    pub fn background_camera(&self) -> Vec<f32> {
        self.stage.background().map(|b| b.camera.to_array().to_vec()).unwrap_or_default()
    }

    /// `[particle_color, link_color, link_opacity]`; colours are 0xRRGGBB
    pub fn background_style(&self) -> Vec<f32> {
        let b = &self.stage.config().background;
        vec![b.particle_color as f32, b.link_color as f32, b.link_opacity]
    }

    pub fn background_positions_ptr(&self) -> *const f32 { ptr(self.stage.background().map(|b| b.positions())) }
    pub fn background_positions_len(&self) -> usize { len(self.stage.background().map(|b| b.positions())) }
    pub fn background_links_ptr(&self) -> *const f32 { ptr(self.stage.background().map(|b| b.links())) }
    pub fn background_links_len(&self) -> usize { len(self.stage.background().map(|b| b.links())) }

    // --- Project previews ---

    /// `"heart" | "wave" | "pool" | "signal"`, or empty if unknown
    pub fn project_kind(&self, id: &str) -> String {
        self.stage.project_config(id).map_or(String::new(), |p| p.kind.as_str().into())
    }

    pub fn project_color(&self, id: &str) -> u32 {
        self.stage.project_config(id).map_or(0, |p| p.color)
    }

    pub fn project_camera(&self, id: &str) -> Vec<f32> {
        self.stage.project(id).map(|p| p.camera.to_array().to_vec()).unwrap_or_default()
    }

    pub fn project_transform(&self, id: &str) -> Vec<f32> {
        self.stage.project(id).map(|p| p.object.to_array().to_vec()).unwrap_or_default()
    }

    pub fn project_positions_ptr(&self, id: &str) -> *const f32 {
        ptr(self.stage.project(id).map(|p| p.shape.positions()))
    }

    pub fn project_positions_len(&self, id: &str) -> usize {
        len(self.stage.project(id).map(|p| p.shape.positions()))
    }

    pub fn project_normals_ptr(&self, id: &str) -> *const f32 {
        ptr(self.mesh(id).map(|m| &m.normals))
    }

    pub fn project_normals_len(&self, id: &str) -> usize {
        len(self.mesh(id).map(|m| &m.normals))
    }

    /// Triangle indices; empty for non-indexed meshes and lines
    pub fn project_indices(&self, id: &str) -> Vec<u32> {
        self.mesh(id).map(|m| m.indices.clone()).unwrap_or_default()
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl Portfolio {
    /// Hook the contact form if the page has one.
    pub fn attach_contact_form(&self) -> Result<bool, JsValue> {
        web::contact::attach(&self.stage.config().relay)
    }
}

impl Portfolio {
    fn mesh(&self, id: &str) -> Option<&geometry::Mesh> {
        match &self.stage.project(id)?.shape {
            scene::Shape::Mesh(mesh) => Some(mesh),
            scene::Shape::Line(_) => None,
        }
    }
}

#[inline]
fn ptr(buf: Option<&VertexBuffer>) -> *const f32 {
    buf.map_or(std::ptr::null(), VertexBuffer::ptr)
}

#[inline]
fn len(buf: Option<&VertexBuffer>) -> usize {
    buf.map_or(0, VertexBuffer::len)
}
