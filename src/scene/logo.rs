// logo.rs - Rotating node graph in the header
//
// Nodes are scattered once; links join every pair closer than the link
// distance. Only the group transform changes per frame.

use glam::Vec3;

use super::{Camera, Transform};
use crate::config::LogoConfig;
use crate::render::VertexBuffer;
use crate::rng::Rng;

/// Node capacity; the link pass is quadratic in the node count.
pub const MAX_LOGO_NODES: usize = 64;

/// Per-frame rotation increment (x, y, z)
const SPIN: Vec3 = Vec3::new(0.004, 0.008, 0.002);

pub struct LogoScene {
    pub camera: Camera,
    pub group: Transform,
    size: u32,
    nodes: VertexBuffer,
    links: VertexBuffer,
}

impl LogoScene {
    pub fn new(config: &LogoConfig, rng: &mut Rng) -> Self {
        let nodes = VertexBuffer::from_vertices((0..config.node_count).map(|_| {
            Vec3::new(
                rng.centered(config.spread),
                rng.centered(config.spread),
                rng.centered(config.spread),
            )
        }));

        let mut links = VertexBuffer::default();
        for i in 0..nodes.vertex_count() {
            for j in i + 1..nodes.vertex_count() {
                let (a, b) = (nodes.get(i), nodes.get(j));
                if a.distance(b) < config.link_distance {
                    links.push_segment(a, b);
                }
            }
        }

        log::debug!(
            "logo: {} nodes, {} links",
            nodes.vertex_count(),
            links.vertex_count() / 2
        );

        Self {
            camera: Camera::perspective(60.0, 1.0, 0.1, 1000.0).at(Vec3::new(0.0, 0.0, 4.0)),
            group: Transform::default(),
            size: config.size,
            nodes,
            links,
        }
    }

    pub fn update(&mut self) {
        self.group.rotation += SPIN;
    }

    /// Edge of the square viewport in CSS pixels
    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn nodes(&self) -> &VertexBuffer {
        &self.nodes
    }

    /// Segment pairs, two vertices per link
    pub fn links(&self) -> &VertexBuffer {
        &self.links
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene() -> LogoScene {
        LogoScene::new(&LogoConfig::default(), &mut Rng::default())
    }

    #[test]
    fn nodes_inside_spread_cube() {
        let logo = scene();
        assert_eq!(logo.nodes().vertex_count(), 12);
        for v in logo.nodes().iter() {
            assert!(v.abs().max_element() <= 1.1);
        }
    }

    #[test]
    fn links_only_join_close_nodes() {
        let logo = scene();
        let links = logo.links();
        assert_eq!(links.vertex_count() % 2, 0);
        for s in 0..links.vertex_count() / 2 {
            assert!(links.get(s * 2).distance(links.get(s * 2 + 1)) < 1.8);
        }

        let nodes: Vec<Vec3> = logo.nodes().iter().collect();
        let expected = (0..nodes.len())
            .flat_map(|i| (i + 1..nodes.len()).map(move |j| (i, j)))
            .filter(|&(i, j)| nodes[i].distance(nodes[j]) < 1.8)
            .count();
        assert_eq!(links.vertex_count() / 2, expected);
    }

    #[test]
    fn spins_every_frame() {
        let mut logo = scene();
        for _ in 0..10 {
            logo.update();
        }
        let r = logo.group.rotation;
        assert!((r.x - 0.04).abs() < 1e-5);
        assert!((r.y - 0.08).abs() < 1e-5);
        assert!((r.z - 0.02).abs() < 1e-5);
    }

    #[test]
    fn seed_is_reproducible() {
        let a = LogoScene::new(&LogoConfig::default(), &mut Rng::new(9));
        let b = LogoScene::new(&LogoConfig::default(), &mut Rng::new(9));
        assert_eq!(a.nodes().as_slice(), b.nodes().as_slice());
    }
}
