//! # Greedy Mesher
//!
//! Binary greedy meshing over a dense occupancy grid.
//!
//! For each axis `d` with `u = (d + 1) % 3` and `v = (d + 2) % 3`, every
//! plane between layer `x` and `x + 1` (for `x` in `-1..size[d]`) gets a
//! boundary mask over `(u, v)`. Each maximal same-sign rectangle in the mask
//! becomes one quad on that plane.
//!
//! Quads facing `+d` use corners `(o, o+u·w, o+v·h, o+u·w+v·h)`. Quads facing
//! `-d` swap the `u`/`v` roles, so both orientations wind outward under the
//! same [`QUAD_INDICES`](crate::QUAD_INDICES) order.

use std::time::{Duration, Instant};

use crate::buffers::MeshBuffers;
use crate::grid::VoxelGrid;
use crate::mask::{MaskCell, MergedRect, SliceMask};

/// Meshes slower than this are reported at `warn`.
const SLOW_MESH_THRESHOLD: Duration = Duration::from_millis(10);

/// Uniform scale applied to output positions for a LOD level: `2^lod`.
///
/// This only magnifies the mesh. The sampled voxels are the same at
/// every level.
#[inline]
#[must_use]
pub fn lod_scale(lod: u32) -> f32 {
    2f32.powi(i32::try_from(lod).unwrap_or(i32::MAX))
}

/// Meshes a grid with a fresh scratch mask.
///
/// Returns an empty mesh for a degenerate grid (empty buffer or any zero
/// extent). Never fails.
#[must_use]
pub fn mesh(grid: &VoxelGrid<'_>, lod: u32) -> MeshBuffers {
    GreedyMesher::new().mesh(grid, lod)
}

/// Greedy meshing engine.
///
/// Holds the slice mask between calls so a long-lived worker does not
/// reallocate it for every grid. Carries no other state.
#[derive(Debug, Default)]
pub struct GreedyMesher {
    mask: SliceMask,
}

impl GreedyMesher {
    /// Creates a mesher with an empty scratch mask.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Meshes a grid, scaling positions by [`lod_scale`].
    #[must_use]
    pub fn mesh(&mut self, grid: &VoxelGrid<'_>, lod: u32) -> MeshBuffers {
        let size = grid.size();
        if grid.is_degenerate() {
            tracing::trace!(
                "degenerate grid {}x{}x{} ({} bytes) - empty mesh",
                size.x,
                size.y,
                size.z,
                grid.data().len()
            );
            return MeshBuffers::new();
        }

        let start = Instant::now();
        let mut out = MeshBuffers::new();

        for axis in 0..3 {
            self.sweep_axis(grid, axis, &mut out);
        }

        if lod != 0 {
            out.scale_positions(lod_scale(lod));
        }

        let elapsed = start.elapsed();
        tracing::debug!(
            "meshed {}x{}x{} lod {}: {} quads in {:?}",
            size.x,
            size.y,
            size.z,
            lod,
            out.quad_count(),
            elapsed
        );
        if elapsed > SLOW_MESH_THRESHOLD {
            tracing::warn!(
                "slow mesh: {:?} for {}x{}x{} grid ({} quads)",
                elapsed,
                size.x,
                size.y,
                size.z,
                out.quad_count()
            );
        }

        out
    }

    /// Emits every quad whose normal lies on `d`.
    #[allow(clippy::cast_possible_wrap)]
    fn sweep_axis(&mut self, grid: &VoxelGrid<'_>, d: usize, out: &mut MeshBuffers) {
        let dims = grid.size().as_array();
        let (u, v) = ((d + 1) % 3, (d + 2) % 3);
        let mut pos = [0isize; 3];

        self.mask.resize(dims[u], dims[v]);

        // Extents fit in isize: the buffer backing them does.
        let layers = dims[d] as isize;

        for layer in -1..layers {
            for j in 0..dims[v] {
                for i in 0..dims[u] {
                    pos[d] = layer;
                    pos[u] = i as isize;
                    pos[v] = j as isize;
                    let near = grid.is_solid(pos);
                    pos[d] = layer + 1;
                    let far = grid.is_solid(pos);
                    self.mask.set(i, j, MaskCell::from_pair(near, far));
                }
            }

            #[allow(clippy::cast_precision_loss)]
            let plane = (layer + 1) as f32;
            self.mask
                .drain_rects(|rect| emit_quad(out, [d, u, v], plane, rect));
        }
    }
}

/// Appends the quad for one merged rectangle on plane `plane` of axis `d`.
#[allow(clippy::cast_precision_loss)]
fn emit_quad(out: &mut MeshBuffers, [d, u, v]: [usize; 3], plane: f32, rect: MergedRect) {
    let mut origin = [0.0f32; 3];
    origin[d] = plane;
    origin[u] = rect.u as f32;
    origin[v] = rect.v as f32;

    let mut du = [0.0f32; 3];
    du[u] = rect.width as f32;
    let mut dv = [0.0f32; 3];
    dv[v] = rect.height as f32;

    let mut normal = [0.0f32; 3];
    normal[d] = rect.cell.sign();

    let (first, second) = match rect.cell {
        MaskCell::Back => (dv, du),
        _ => (du, dv),
    };

    out.push_quad(
        [
            origin,
            add(origin, first),
            add(origin, second),
            add(add(origin, du), dv),
        ],
        normal,
    );
}

#[inline]
fn add(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}
