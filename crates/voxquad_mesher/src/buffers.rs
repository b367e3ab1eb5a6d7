//! # Mesh Buffers
//!
//! Output of one meshing call: parallel position/normal arrays plus a
//! triangle index list. Quads are the only unit of growth, so the buffers
//! always hold `4 * n` vertices and `6 * n` indices.

use bytemuck::{Pod, Zeroable};

/// Triangle order for the four corners of a quad.
pub const QUAD_INDICES: [u32; 6] = [0, 1, 2, 1, 3, 2];

/// Interleaved vertex for GPU upload.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    /// Position in mesh space [x, y, z]
    pub position: [f32; 3],
    /// Normal direction [nx, ny, nz]
    pub normal: [f32; 3],
}

/// Axis-aligned bounds of a mesh.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    /// Minimum corner.
    pub min: [f32; 3],
    /// Maximum corner.
    pub max: [f32; 3],
}

impl Bounds {
    /// Size along each axis.
    #[must_use]
    pub fn extents(&self) -> [f32; 3] {
        [
            self.max[0] - self.min[0],
            self.max[1] - self.min[1],
            self.max[2] - self.min[2],
        ]
    }
}

/// Vertex, normal and index buffers for one mesh.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshBuffers {
    positions: Vec<[f32; 3]>,
    normals: Vec<[f32; 3]>,
    indices: Vec<u32>,
}

impl MeshBuffers {
    /// Creates empty buffers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates empty buffers with room for `quads` quads.
    #[must_use]
    pub fn with_quad_capacity(quads: usize) -> Self {
        Self {
            positions: Vec::with_capacity(quads * 4),
            normals: Vec::with_capacity(quads * 4),
            indices: Vec::with_capacity(quads * 6),
        }
    }

    /// Appends one quad.
    ///
    /// Corners are taken in the order `(origin, origin+u, origin+v,
    /// origin+u+v)` and triangulated as [`QUAD_INDICES`].
    pub fn push_quad(&mut self, corners: [[f32; 3]; 4], normal: [f32; 3]) {
        debug_assert!(self.positions.len() <= (u32::MAX - 4) as usize);
        #[allow(clippy::cast_possible_truncation)]
        let start = self.positions.len() as u32;

        self.positions.extend_from_slice(&corners);
        self.normals.extend_from_slice(&[normal; 4]);
        self.indices.extend(QUAD_INDICES.iter().map(|i| start + i));
    }

    /// Multiplies every position by `factor`.
    pub fn scale_positions(&mut self, factor: f32) {
        for p in &mut self.positions {
            p[0] *= factor;
            p[1] *= factor;
            p[2] *= factor;
        }
    }

    /// Vertex positions.
    #[inline]
    #[must_use]
    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    /// Per-vertex normals, parallel to [`positions`](Self::positions).
    #[inline]
    #[must_use]
    pub fn normals(&self) -> &[[f32; 3]] {
        &self.normals
    }

    /// Triangle indices, three per triangle.
    #[inline]
    #[must_use]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Consumes the buffers, returning `(positions, normals, indices)`.
    #[must_use]
    pub fn into_parts(self) -> (Vec<[f32; 3]>, Vec<[f32; 3]>, Vec<u32>) {
        (self.positions, self.normals, self.indices)
    }

    /// True when the mesh has no geometry.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Number of quads.
    #[inline]
    #[must_use]
    pub fn quad_count(&self) -> usize {
        self.positions.len() / 4
    }

    /// Number of vertices.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles.
    #[inline]
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Bounds of all positions, or `None` for an empty mesh.
    #[must_use]
    pub fn bounds(&self) -> Option<Bounds> {
        let first = *self.positions.first()?;
        let mut bounds = Bounds {
            min: first,
            max: first,
        };
        for p in &self.positions[1..] {
            for axis in 0..3 {
                bounds.min[axis] = bounds.min[axis].min(p[axis]);
                bounds.max[axis] = bounds.max[axis].max(p[axis]);
            }
        }
        Some(bounds)
    }

    /// Builds an interleaved vertex buffer.
    #[must_use]
    pub fn interleaved(&self) -> Vec<MeshVertex> {
        self.positions
            .iter()
            .zip(&self.normals)
            .map(|(&position, &normal)| MeshVertex { position, normal })
            .collect()
    }

    /// Index buffer as raw bytes.
    #[must_use]
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_quad() -> [[f32; 3]; 4] {
        [
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [1.0, 1.0, 0.0],
        ]
    }

    #[test]
    fn test_empty() {
        let mesh = MeshBuffers::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.quad_count(), 0);
        assert!(mesh.bounds().is_none());
        assert!(mesh.index_bytes().is_empty());
    }

    #[test]
    fn test_push_quad_offsets_indices() {
        let mut mesh = MeshBuffers::with_quad_capacity(2);
        mesh.push_quad(unit_quad(), [0.0, 0.0, 1.0]);
        mesh.push_quad(unit_quad(), [0.0, 0.0, -1.0]);

        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.normals().len(), 8);
        assert_eq!(mesh.triangle_count(), 4);
        assert_eq!(mesh.indices(), &[0, 1, 2, 1, 3, 2, 4, 5, 6, 5, 7, 6]);
        assert_eq!(mesh.normals()[4], [0.0, 0.0, -1.0]);
    }

    #[test]
    fn test_scale_and_bounds() {
        let mut mesh = MeshBuffers::new();
        mesh.push_quad(unit_quad(), [0.0, 0.0, 1.0]);
        mesh.scale_positions(4.0);

        let bounds = mesh.bounds().unwrap();
        assert_eq!(bounds.min, [0.0, 0.0, 0.0]);
        assert_eq!(bounds.max, [4.0, 4.0, 0.0]);
        assert_eq!(bounds.extents(), [4.0, 4.0, 0.0]);
    }

    #[test]
    fn test_interleaved_matches_parallel_arrays() {
        let mut mesh = MeshBuffers::new();
        mesh.push_quad(unit_quad(), [1.0, 0.0, 0.0]);

        let vertices = mesh.interleaved();
        assert_eq!(vertices.len(), 4);
        assert_eq!(vertices[3].position, [1.0, 1.0, 0.0]);
        assert_eq!(vertices[3].normal, [1.0, 0.0, 0.0]);

        let bytes: &[u8] = bytemuck::cast_slice(&vertices);
        assert_eq!(bytes.len(), 4 * std::mem::size_of::<MeshVertex>());
        assert_eq!(mesh.index_bytes().len(), 6 * 4);
    }
}
