// geometry.rs - Parametric meshes for the project previews
//
// Vertex order and winding follow the conventions of common WebGL scene
// libraries so the host can upload the buffers unchanged:
//   - icosahedron: non-indexed triangle list, subdivided then projected
//   - torus knot:  indexed, (tubular + 1) x (radial + 1) vertices
//   - plane grid:  indexed, rows top to bottom, facing +z

use std::f32::consts::TAU;

use glam::Vec3;

use crate::render::VertexBuffer;

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

#[derive(Debug, Clone, Default)]
pub struct Mesh {
    pub positions: VertexBuffer,
    pub normals: VertexBuffer,
    /// Empty for non-indexed meshes
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn vertex_count(&self) -> usize {
        self.positions.vertex_count()
    }

    pub fn triangle_count(&self) -> usize {
        if self.indices.is_empty() {
            self.vertex_count() / 3
        } else {
            self.indices.len() / 3
        }
    }

    /// Area-weighted smooth normals for indexed meshes, flat normals otherwise.
    pub fn compute_vertex_normals(&mut self) {
        let n = self.vertex_count();
        let mut acc = vec![Vec3::ZERO; n];

        if self.indices.is_empty() {
            for f in 0..n / 3 {
                let (a, b, c) = (f * 3, f * 3 + 1, f * 3 + 2);
                let face = self.face_normal(a, b, c);
                acc[a] = face;
                acc[b] = face;
                acc[c] = face;
            }
        } else {
            for tri in self.indices.chunks_exact(3) {
                let (a, b, c) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
                let face = self.face_normal(a, b, c);
                acc[a] += face;
                acc[b] += face;
                acc[c] += face;
            }
        }

        self.normals = VertexBuffer::from_vertices(acc.into_iter().map(Vec3::normalize_or_zero));
    }

    // Unnormalized: length is twice the triangle area
    #[inline]
    fn face_normal(&self, a: usize, b: usize, c: usize) -> Vec3 {
        let (va, vb, vc) = (self.positions.get(a), self.positions.get(b), self.positions.get(c));
        (vc - vb).cross(va - vb)
    }
}

// ============================================================================
// Icosahedron
// ============================================================================

const PHI: f32 = 1.618_034;

const ICO_VERTICES: [[f32; 3]; 12] = [
    [-1.0, PHI, 0.0], [1.0, PHI, 0.0], [-1.0, -PHI, 0.0], [1.0, -PHI, 0.0],
    [0.0, -1.0, PHI], [0.0, 1.0, PHI], [0.0, -1.0, -PHI], [0.0, 1.0, -PHI],
    [PHI, 0.0, -1.0], [PHI, 0.0, 1.0], [-PHI, 0.0, -1.0], [-PHI, 0.0, 1.0],
];

const ICO_FACES: [[usize; 3]; 20] = [
    [0, 11, 5], [0, 5, 1], [0, 1, 7], [0, 7, 10], [0, 10, 11],
    [1, 5, 9], [5, 11, 4], [11, 10, 2], [10, 7, 6], [7, 1, 8],
    [3, 9, 4], [3, 4, 2], [3, 2, 6], [3, 6, 8], [3, 8, 9],
    [4, 9, 5], [2, 4, 11], [6, 2, 10], [8, 6, 7], [9, 8, 1],
];

/// Geodesic sphere: each icosahedron face split into (detail + 1)^2 triangles
pub fn icosahedron(radius: f32, detail: u32) -> Mesh {
    let cols = detail as usize + 1;
    let mut positions = VertexBuffer::with_capacity(20 * cols * cols * 3);

    for [ia, ib, ic] in ICO_FACES {
        let a = Vec3::from_array(ICO_VERTICES[ia]);
        let b = Vec3::from_array(ICO_VERTICES[ib]);
        let c = Vec3::from_array(ICO_VERTICES[ic]);
        subdivide_face(a, b, c, cols, &mut positions);
    }

    let projected = VertexBuffer::from_vertices(positions.iter().map(|v| v.normalize() * radius));
    let normals = VertexBuffer::from_vertices(projected.iter().map(Vec3::normalize_or_zero));
    Mesh { positions: projected, normals, indices: Vec::new() }
}

fn subdivide_face(a: Vec3, b: Vec3, c: Vec3, cols: usize, out: &mut VertexBuffer) {
    // v[i][j]: row i walks from edge ab towards c, row i has cols - i + 1 points
    let mut v: Vec<Vec<Vec3>> = Vec::with_capacity(cols + 1);
    for i in 0..=cols {
        let t = i as f32 / cols as f32;
        let aj = a.lerp(c, t);
        let bj = b.lerp(c, t);
        let rows = cols - i;
        let row = (0..=rows)
            .map(|j| if rows == 0 { aj } else { aj.lerp(bj, j as f32 / rows as f32) })
            .collect();
        v.push(row);
    }

    for i in 0..cols {
        for j in 0..2 * (cols - i) - 1 {
            let k = j / 2;
            if j % 2 == 0 {
                out.push(v[i][k + 1]);
                out.push(v[i + 1][k]);
                out.push(v[i][k]);
            } else {
                out.push(v[i][k + 1]);
                out.push(v[i + 1][k + 1]);
                out.push(v[i + 1][k]);
            }
        }
    }
}

// ============================================================================
// Torus knot
// ============================================================================

/// (p, q) torus knot swept by a circular tube
pub fn torus_knot(radius: f32, tube: f32, tubular: u32, radial: u32, p: u32, q: u32) -> Mesh {
    let (tubular, radial) = (tubular.max(3) as usize, radial.max(3) as usize);
    let (p, q) = (p as f32, q as f32);
    let count = (tubular + 1) * (radial + 1);

    let mut positions = VertexBuffer::with_capacity(count);
    let mut normals = VertexBuffer::with_capacity(count);

    for i in 0..=tubular {
        let u = i as f32 / tubular as f32 * p * TAU;
        let p1 = knot_point(u, p, q, radius);
        let p2 = knot_point(u + 0.01, p, q, radius);

        // Frenet-like frame along the curve
        let t = p2 - p1;
        let n = p2 + p1;
        let b = t.cross(n);
        let n = b.cross(t).normalize_or_zero();
        let b = b.normalize_or_zero();

        for j in 0..=radial {
            let v = j as f32 / radial as f32 * TAU;
            let cx = -tube * v.cos();
            let cy = tube * v.sin();
            let vertex = p1 + n * cx + b * cy;
            positions.push(vertex);
            normals.push((vertex - p1).normalize_or_zero());
        }
    }

    let stride = (radial + 1) as u32;
    let mut indices = Vec::with_capacity(tubular * radial * 6);
    for j in 1..=tubular as u32 {
        for i in 1..=radial as u32 {
            let a = stride * (j - 1) + (i - 1);
            let b = stride * j + (i - 1);
            let c = stride * j + i;
            let d = stride * (j - 1) + i;
            indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }

    Mesh { positions, normals, indices }
}

#[inline]
fn knot_point(u: f32, p: f32, q: f32, radius: f32) -> Vec3 {
    let qu_over_p = q / p * u;
    let cs = qu_over_p.cos();
    Vec3::new(
        radius * (2.0 + cs) * 0.5 * u.cos(),
        radius * (2.0 + cs) * 0.5 * u.sin(),
        radius * qu_over_p.sin() * 0.5,
    )
}

// ============================================================================
// Plane grid
// ============================================================================

/// Flat grid centred on the origin in the xy plane
pub fn plane_grid(width: f32, height: f32, width_segments: u32, height_segments: u32) -> Mesh {
    let (gx, gy) = (width_segments.max(1), height_segments.max(1));
    let (gx1, gy1) = (gx + 1, gy + 1);
    let seg_w = width / gx as f32;
    let seg_h = height / gy as f32;

    let count = (gx1 * gy1) as usize;
    let mut positions = VertexBuffer::with_capacity(count);
    for iy in 0..gy1 {
        let y = iy as f32 * seg_h - height / 2.0;
        for ix in 0..gx1 {
            let x = ix as f32 * seg_w - width / 2.0;
            positions.push(Vec3::new(x, -y, 0.0));
        }
    }
    let normals = VertexBuffer::from_vertices(std::iter::repeat_n(Vec3::Z, count));

    let mut indices = Vec::with_capacity((gx * gy * 6) as usize);
    for iy in 0..gy {
        for ix in 0..gx {
            let a = ix + gx1 * iy;
            let b = ix + gx1 * (iy + 1);
            let c = ix + 1 + gx1 * (iy + 1);
            let d = ix + 1 + gx1 * iy;
            indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }

    Mesh { positions, normals, indices }
}

// ============================================================================
// Polyline
// ============================================================================

/// `points` vertices evenly spaced on x in [-span / 2, span / 2), y = z = 0
pub fn polyline(points: usize, span: f32) -> VertexBuffer {
    VertexBuffer::from_vertices(
        (0..points).map(|i| Vec3::new(i as f32 / points as f32 * span - span / 2.0, 0.0, 0.0)),
    )
}
