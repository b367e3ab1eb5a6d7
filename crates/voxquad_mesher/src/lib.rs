//! # VOXQUAD Mesher
//!
//! Converts a dense boolean voxel field into a triangle surface mesh by
//! merging coplanar boundary faces into rectangles.
//!
//! ## Algorithm
//!
//! 1. For each axis `d` (X, Y, Z), sweep the boundary planes `-1..size[d]`
//! 2. Build a 2D mask of solid/empty transitions, signed by orientation
//! 3. Greedily merge same-sign cells into maximal rectangles (row-major)
//! 4. Emit one quad (4 vertices, 6 indices) per rectangle
//! 5. Scale all positions by `2^lod`
//!
//! ```text
//!   VoxelGrid ──> SliceMask (per plane) ──> MergedRect ──> MeshBuffers
//!      (&[u8])        {-1, 0, +1}            (u, v, w, h)    (pos/nrm/idx)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use voxquad_mesher::{mesh, GridSize, VoxelGrid};
//!
//! let voxels = [1u8];
//! let grid = VoxelGrid::new(&voxels, GridSize::new(1, 1, 1));
//! let buffers = mesh(&grid, 0);
//! assert_eq!(buffers.quad_count(), 6);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod buffers;
pub mod error;
pub mod greedy;
pub mod grid;
pub mod mask;

pub use buffers::{Bounds, MeshBuffers, MeshVertex, QUAD_INDICES};
pub use error::{GridError, GridResult};
pub use greedy::{lod_scale, mesh, GreedyMesher};
pub use grid::{GridSize, VoxelBuffer, VoxelGrid};
pub use mask::{MaskCell, MergedRect, SliceMask};
