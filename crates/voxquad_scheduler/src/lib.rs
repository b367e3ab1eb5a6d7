//! # VOXQUAD Scheduler
//!
//! Runs greedy meshing on a dedicated worker thread so the caller can
//! submit grids and poll for finished meshes without blocking.
//!
//! ## Architecture
//!
//! ```text
//!   caller ── submit ──> [JobQueue]  ──> worker ──> GreedyMesher
//!                        Mutex+Condvar      │
//!   caller <── poll ──── [ResultQueue] <────┘
//!                        Mutex
//! ```
//!
//! The two queues are locked independently: polling never contends with
//! submitting. The worker sleeps on the job queue's condition variable and
//! is woken by a submit or by [`MeshScheduler::stop`].
//!
//! ## Ordering
//!
//! One worker processes jobs strictly in submission order, so results come
//! back in submission order. Jobs still queued when `stop` is called are
//! dropped and never produce a result.
//!
//! ## Example
//!
//! ```rust
//! use voxquad_mesher::{GridSize, VoxelGrid};
//! use voxquad_scheduler::MeshScheduler;
//!
//! let scheduler = MeshScheduler::<(i32, i32)>::new()?;
//! let voxels = vec![1u8; 8];
//! scheduler.submit(&VoxelGrid::new(&voxels, GridSize::cube(2)), 0, (0, 0))?;
//!
//! let result = loop {
//!     if let Some(result) = scheduler.poll() {
//!         break result;
//!     }
//!     std::thread::yield_now();
//! };
//! assert_eq!(result.token, (0, 0));
//! assert_eq!(result.mesh.quad_count(), 6);
//! scheduler.stop();
//! # Ok::<(), voxquad_scheduler::SchedulerError>(())
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod error;
pub mod job;
mod queue;
pub mod scheduler;
mod worker;

pub use config::SchedulerConfig;
pub use error::{SchedulerError, SchedulerResult};
pub use job::{JobId, MeshJob, MeshResult};
pub use scheduler::{MeshScheduler, SchedulerStats};
