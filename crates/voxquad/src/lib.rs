//! # VOXQUAD
//!
//! Greedy voxel meshing for engine hosts.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                          HOST                             │
//! │     build_mesh()            AsyncMesher                   │
//! └──────────┬─────────────────────────┬──────────────────────┘
//!            │                         │ schedule / pop
//!            │              ┌──────────▼──────────┐
//!            │              │  voxquad_scheduler  │
//!            │              │  one worker thread  │
//!            │              └──────────┬──────────┘
//!            │                         │
//!     ┌──────▼─────────────────────────▼──────┐
//!     │            voxquad_mesher             │
//!     │   occupancy grid -> merged quads      │
//!     └───────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - `host`: entry points taking signed host dimensions
//!
//! ## Example
//!
//! ```rust
//! let voxels = [1u8; 8];
//! let mesh = voxquad::build_mesh(&voxels, [2, 2, 2], 0);
//! assert_eq!(mesh.quad_count(), 6);
//!
//! // Negative sizes are treated as empty
//! assert!(voxquad::build_mesh(&voxels, [2, -2, 2], 0).is_empty());
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod host;

pub use voxquad_mesher as mesher;
pub use voxquad_scheduler as scheduler;

pub use host::{build_mesh, AsyncMesher};
pub use voxquad_mesher::{GridSize, MeshBuffers, MeshVertex, VoxelGrid};
pub use voxquad_scheduler::{SchedulerConfig, SchedulerError};
