//! # Mesh Scheduler
//!
//! Owns one background worker thread for its entire lifetime.
//!
//! ## Lifecycle
//!
//! 1. `new` / `with_config` spawns the worker, which blocks on the job queue
//! 2. `submit` snapshots the grid, enqueues it and wakes the worker
//! 3. The worker meshes jobs one at a time and publishes results
//! 4. `poll` takes finished results without touching the job lock
//! 5. `stop` (or drop) discards queued jobs, lets the in-flight job finish
//!    and joins the worker

use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use parking_lot::Mutex;
use voxquad_mesher::{VoxelBuffer, VoxelGrid};

use crate::config::SchedulerConfig;
use crate::error::{SchedulerError, SchedulerResult};
use crate::job::{JobId, MeshResult};
use crate::queue::{JobQueue, ResultQueue};
use crate::worker;

/// Scheduler counters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SchedulerStats {
    /// Jobs accepted by submit.
    pub submitted: u64,
    /// Jobs meshed and published.
    pub completed: u64,
    /// Submits rejected (stopped or queue full).
    pub rejected: u64,
    /// Queued jobs discarded by stop.
    pub dropped_on_stop: u64,
    /// Quads across all completed meshes.
    pub total_quads: u64,
    /// Worker time spent meshing.
    pub total_mesh_time: Duration,
}

impl SchedulerStats {
    /// Mean meshing time per completed job.
    #[must_use]
    pub fn average_mesh_time(&self) -> Duration {
        let n = u32::try_from(self.completed).unwrap_or(u32::MAX);
        self.total_mesh_time.checked_div(n).unwrap_or_default()
    }
}

/// State shared between the scheduler handle and its worker.
pub(crate) struct Shared<T> {
    pub(crate) jobs: JobQueue<T>,
    pub(crate) results: ResultQueue<T>,
    pub(crate) stats: Mutex<SchedulerStats>,
}

/// Asynchronous mesh scheduler.
///
/// `T` is an opaque correlation token returned with each result.
pub struct MeshScheduler<T: Send + 'static> {
    config: SchedulerConfig,
    shared: Arc<Shared<T>>,
    /// Taken by the first `stop`.
    worker: Mutex<Option<JoinHandle<()>>>,
}

impl<T: Send + 'static> MeshScheduler<T> {
    /// Starts a scheduler with the default config.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulerError::Spawn`] if the worker thread cannot start.
    pub fn new() -> SchedulerResult<Self> {
        Self::with_config(SchedulerConfig::default())
    }

    /// Starts a scheduler with the given config.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulerError::Spawn`] if the worker thread cannot start.
    pub fn with_config(config: SchedulerConfig) -> SchedulerResult<Self> {
        let shared = Arc::new(Shared {
            jobs: JobQueue::new(config.queue_capacity, config.max_pending_jobs),
            results: ResultQueue::new(config.queue_capacity),
            stats: Mutex::new(SchedulerStats::default()),
        });

        let worker_shared = Arc::clone(&shared);
        let handle = thread::Builder::new()
            .name(config.worker_name.clone())
            .spawn(move || worker::run(&worker_shared))
            .map_err(SchedulerError::Spawn)?;

        tracing::debug!(
            "mesh scheduler started: worker '{}', max pending {}",
            config.worker_name,
            config.max_pending_jobs
        );

        Ok(Self {
            config,
            shared,
            worker: Mutex::new(Some(handle)),
        })
    }

    /// Copies the grid and enqueues a meshing job. Never blocks on meshing.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulerError::Stopped`] after [`stop`](Self::stop), or
    /// [`SchedulerError::QueueFull`] when a limit is configured and reached.
    pub fn submit(&self, grid: &VoxelGrid<'_>, lod: u32, token: T) -> SchedulerResult<JobId> {
        self.submit_buffer(grid.to_buffer(), lod, token)
    }

    /// Enqueues an owned grid without copying it.
    ///
    /// # Errors
    ///
    /// Same as [`submit`](Self::submit).
    pub fn submit_buffer(&self, voxels: VoxelBuffer, lod: u32, token: T) -> SchedulerResult<JobId> {
        match self.shared.jobs.push(voxels, lod, token) {
            Ok(job_id) => {
                self.shared.stats.lock().submitted += 1;
                Ok(job_id)
            }
            Err(e) => {
                self.shared.stats.lock().rejected += 1;
                Err(e)
            }
        }
    }

    /// Takes the oldest finished result, if any.
    #[must_use]
    pub fn poll(&self) -> Option<MeshResult<T>> {
        self.shared.results.pop()
    }

    /// Stops the worker and waits for it to exit.
    ///
    /// The job being meshed finishes and its result stays pollable. Jobs
    /// still queued are discarded. Calling this again is a no-op; a
    /// concurrent second call waits for the first join to finish.
    pub fn stop(&self) {
        let dropped = self.shared.jobs.close();
        // Held across the join so every caller returns after the worker exits
        let mut worker = self.worker.lock();
        let Some(handle) = worker.take() else {
            return;
        };

        if dropped > 0 {
            self.shared.stats.lock().dropped_on_stop += dropped as u64;
            tracing::debug!("mesh scheduler stopping: {} queued jobs dropped", dropped);
        }

        if handle.join().is_err() {
            tracing::error!("mesh worker '{}' panicked", self.config.worker_name);
        }
    }

    /// True until [`stop`](Self::stop) is called.
    #[must_use]
    pub fn is_running(&self) -> bool {
        !self.shared.jobs.is_closed()
    }

    /// Jobs waiting for the worker. Excludes the one being meshed.
    #[must_use]
    pub fn pending_jobs(&self) -> usize {
        self.shared.jobs.len()
    }

    /// Results waiting to be polled.
    #[must_use]
    pub fn ready_results(&self) -> usize {
        self.shared.results.len()
    }

    /// Snapshot of the counters.
    #[must_use]
    pub fn stats(&self) -> SchedulerStats {
        self.shared.stats.lock().clone()
    }

    /// Config the scheduler was started with.
    #[must_use]
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }
}

impl<T: Send + 'static> Drop for MeshScheduler<T> {
    fn drop(&mut self) {
        self.stop();
    }
}

impl<T: Send + 'static> std::fmt::Debug for MeshScheduler<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MeshScheduler")
            .field("worker", &self.config.worker_name)
            .field("running", &self.is_running())
            .field("pending_jobs", &self.pending_jobs())
            .field("ready_results", &self.ready_results())
            .finish()
    }
}
