// render.rs - Flat vertex buffers shared with the host renderer
//
// Layout: tightly packed xyz triples. The host reads them as a Float32Array
// view over wasm memory via `ptr()` / `len()`. Views must be re-created after
// any call that may grow the buffer (link rebuilds), since growth can move it.

use glam::Vec3;

#[derive(Debug, Clone, Default)]
pub struct VertexBuffer {
    out: Vec<f32>,
}

impl VertexBuffer {
    pub fn with_capacity(vertices: usize) -> Self {
        Self { out: Vec::with_capacity(vertices * 3) }
    }

    pub fn from_vertices(vertices: impl IntoIterator<Item = Vec3>) -> Self {
        let mut buf = Self::default();
        for v in vertices {
            buf.push(v);
        }
        buf
    }

    pub fn clear(&mut self) {
        self.out.clear();
    }

    #[inline]
    pub fn push(&mut self, v: Vec3) {
        self.out.extend_from_slice(&[v.x, v.y, v.z]);
    }

    /// Append one line segment (two vertices)
    #[inline]
    pub fn push_segment(&mut self, a: Vec3, b: Vec3) {
        self.push(a);
        self.push(b);
    }

    #[inline]
    pub fn get(&self, i: usize) -> Vec3 {
        Vec3::from_slice(&self.out[i * 3..i * 3 + 3])
    }

    #[inline]
    pub fn set_y(&mut self, i: usize, y: f32) {
        self.out[i * 3 + 1] = y;
    }

    #[inline]
    pub fn set_z(&mut self, i: usize, z: f32) {
        self.out[i * 3 + 2] = z;
    }

    pub fn vertex_count(&self) -> usize {
        self.out.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.out.chunks_exact(3).map(Vec3::from_slice)
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.out
    }

    pub fn ptr(&self) -> *const f32 {
        self.out.as_ptr()
    }

    /// Length in floats, not vertices
    pub fn len(&self) -> usize {
        self.out.len()
    }
}
