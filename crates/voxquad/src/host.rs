//! # Host Entry Points
//!
//! Engine bindings pass grid sizes as signed integers and expect calls
//! that cannot fail. These wrappers map non-positive extents to an empty
//! mesh and turn scheduler rejections into log events.

use voxquad_mesher::{GridSize, MeshBuffers, VoxelBuffer, VoxelGrid};
use voxquad_scheduler::{MeshScheduler, SchedulerConfig, SchedulerResult, SchedulerStats};

/// Meshes a grid on the calling thread.
///
/// Any extent `<= 0`, or an empty buffer, yields an empty mesh.
#[must_use]
pub fn build_mesh(voxels: &[u8], size: [i32; 3], lod: u32) -> MeshBuffers {
    let size = GridSize::from_signed(size[0], size[1], size[2]);
    voxquad_mesher::mesh(&VoxelGrid::new(voxels, size), lod)
}

/// Background mesher for per-frame polling.
///
/// `T` is the host's correlation value, usually a chunk handle.
///
/// ```rust
/// use voxquad::AsyncMesher;
///
/// let mesher = AsyncMesher::new()?;
/// mesher.schedule_mesh(&[1u8; 8], [2, 2, 2], 1, "chunk");
///
/// let (chunk, mesh) = loop {
///     if let Some(done) = mesher.pop_completed() {
///         break done;
///     }
///     std::thread::yield_now();
/// };
/// assert_eq!(chunk, "chunk");
/// assert_eq!(mesh.bounds().map(|b| b.max), Some([4.0, 4.0, 4.0]));
/// # Ok::<(), voxquad::SchedulerError>(())
/// ```
#[derive(Debug)]
pub struct AsyncMesher<T: Send + 'static> {
    scheduler: MeshScheduler<T>,
}

impl<T: Send + 'static> AsyncMesher<T> {
    /// Starts the worker with the default config.
    ///
    /// # Errors
    ///
    /// Fails if the worker thread cannot be spawned.
    pub fn new() -> SchedulerResult<Self> {
        Self::with_config(SchedulerConfig::default())
    }

    /// Starts the worker with the given config.
    ///
    /// # Errors
    ///
    /// Fails if the worker thread cannot be spawned.
    pub fn with_config(config: SchedulerConfig) -> SchedulerResult<Self> {
        Ok(Self {
            scheduler: MeshScheduler::with_config(config)?,
        })
    }

    /// Copies the voxels and queues them for meshing.
    ///
    /// Never blocks and never fails. A rejected job (after `stop`, or with
    /// a full bounded queue) is logged and produces no result.
    pub fn schedule_mesh(&self, voxels: &[u8], size: [i32; 3], lod: u32, token: T) {
        let size = GridSize::from_signed(size[0], size[1], size[2]);
        let snapshot = VoxelBuffer::from_slice(voxels, size);
        if let Err(e) = self.scheduler.submit_buffer(snapshot, lod, token) {
            tracing::warn!("mesh job rejected: {}", e);
        }
    }

    /// Takes the oldest finished mesh with its token, if any.
    #[must_use]
    pub fn pop_completed(&self) -> Option<(T, MeshBuffers)> {
        self.scheduler.poll().map(voxquad_scheduler::MeshResult::into_parts)
    }

    /// Stops the worker. Queued jobs are discarded, finished results stay
    /// poppable. Also runs on drop.
    pub fn stop(&self) {
        self.scheduler.stop();
    }

    /// Scheduler counters.
    #[must_use]
    pub fn stats(&self) -> SchedulerStats {
        self.scheduler.stats()
    }

    /// The underlying scheduler.
    #[must_use]
    pub fn scheduler(&self) -> &MeshScheduler<T> {
        &self.scheduler
    }
}
