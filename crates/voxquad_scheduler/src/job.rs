//! # Jobs and Results
//!
//! A job owns a snapshot of the voxels it meshes. The token is an opaque
//! caller value (typically a chunk coordinate) carried from job to result
//! untouched.

use std::time::Duration;

use voxquad_mesher::{MeshBuffers, VoxelBuffer};

/// Sequence number assigned at submit, in submission order.
pub type JobId = u64;

/// A pending meshing request.
#[derive(Clone, Debug)]
pub struct MeshJob<T> {
    /// Sequence number.
    pub job_id: JobId,
    /// Owned copy of the voxel grid.
    pub voxels: VoxelBuffer,
    /// Level of detail (output scale `2^lod`).
    pub lod: u32,
    /// Caller correlation token.
    pub token: T,
}

/// A finished mesh, ready to be polled.
#[derive(Clone, Debug)]
pub struct MeshResult<T> {
    /// Sequence number of the job that produced this result.
    pub job_id: JobId,
    /// Caller correlation token, as submitted.
    pub token: T,
    /// The generated mesh. Empty for degenerate input.
    pub mesh: MeshBuffers,
    /// Time spent meshing on the worker.
    pub mesh_time: Duration,
}

impl<T> MeshResult<T> {
    /// Splits the result into `(token, mesh)`.
    #[must_use]
    pub fn into_parts(self) -> (T, MeshBuffers) {
        (self.token, self.mesh)
    }
}
