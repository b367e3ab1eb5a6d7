//! Job and result queues.
//!
//! The stop flag lives under the job lock, next to the jobs it guards, so
//! the worker's wait predicate cannot miss a wakeup between checking the
//! flag and going to sleep.

use std::collections::VecDeque;

use parking_lot::{Condvar, Mutex};

use voxquad_mesher::VoxelBuffer;

use crate::error::{SchedulerError, SchedulerResult};
use crate::job::{JobId, MeshJob, MeshResult};

struct JobState<T> {
    jobs: VecDeque<MeshJob<T>>,
    next_id: JobId,
    stopping: bool,
}

/// FIFO of pending jobs with a blocking pop for the worker.
pub(crate) struct JobQueue<T> {
    state: Mutex<JobState<T>>,
    available: Condvar,
    /// Maximum queued jobs, `0` for unbounded.
    limit: usize,
}

impl<T> JobQueue<T> {
    pub(crate) fn new(capacity: usize, limit: usize) -> Self {
        Self {
            state: Mutex::new(JobState {
                jobs: VecDeque::with_capacity(capacity),
                next_id: 0,
                stopping: false,
            }),
            available: Condvar::new(),
            limit,
        }
    }

    /// Enqueues a job and wakes the worker.
    ///
    /// Ids are assigned under the lock, so id order is queue order. A
    /// rejected push does not consume an id.
    pub(crate) fn push(&self, voxels: VoxelBuffer, lod: u32, token: T) -> SchedulerResult<JobId> {
        let mut state = self.state.lock();
        if state.stopping {
            return Err(SchedulerError::Stopped);
        }
        if self.limit > 0 && state.jobs.len() >= self.limit {
            return Err(SchedulerError::QueueFull {
                pending: state.jobs.len(),
                limit: self.limit,
            });
        }
        let job_id = state.next_id;
        state.next_id += 1;
        state.jobs.push_back(MeshJob {
            job_id,
            voxels,
            lod,
            token,
        });
        drop(state);
        self.available.notify_one();
        Ok(job_id)
    }

    /// Blocks until a job is available. Returns `None` once the queue is
    /// closed, even if jobs were still waiting.
    pub(crate) fn wait_pop(&self) -> Option<MeshJob<T>> {
        let mut state = self.state.lock();
        loop {
            if state.stopping {
                return None;
            }
            if let Some(job) = state.jobs.pop_front() {
                return Some(job);
            }
            self.available.wait(&mut state);
        }
    }

    /// Stops accepting jobs, discards the queued ones and wakes the worker.
    /// Returns how many jobs were discarded.
    pub(crate) fn close(&self) -> usize {
        let mut state = self.state.lock();
        state.stopping = true;
        let dropped = state.jobs.len();
        state.jobs.clear();
        drop(state);
        self.available.notify_all();
        dropped
    }

    pub(crate) fn is_closed(&self) -> bool {
        self.state.lock().stopping
    }

    pub(crate) fn len(&self) -> usize {
        self.state.lock().jobs.len()
    }
}

/// FIFO of finished results.
pub(crate) struct ResultQueue<T> {
    results: Mutex<VecDeque<MeshResult<T>>>,
}

impl<T> ResultQueue<T> {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            results: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    pub(crate) fn push(&self, result: MeshResult<T>) {
        self.results.lock().push_back(result);
    }

    pub(crate) fn pop(&self) -> Option<MeshResult<T>> {
        self.results.lock().pop_front()
    }

    pub(crate) fn len(&self) -> usize {
        self.results.lock().len()
    }
}
