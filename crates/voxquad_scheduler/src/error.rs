//! # Scheduler Error Types

use thiserror::Error;

/// Errors that can occur in the mesh scheduler.
#[derive(Error, Debug)]
pub enum SchedulerError {
    /// Submitted after `stop`.
    #[error("mesh scheduler is stopped")]
    Stopped,

    /// Job queue hit the configured limit (backpressure).
    #[error("job queue full: {pending} jobs pending (limit {limit})")]
    QueueFull {
        /// Jobs waiting when the submit was rejected.
        pending: usize,
        /// Configured limit.
        limit: usize,
    },

    /// The worker thread could not be started.
    #[error("failed to spawn mesh worker thread: {0}")]
    Spawn(#[source] std::io::Error),

    /// Config file could not be read.
    #[error("failed to read scheduler config: {0}")]
    ConfigIo(#[source] std::io::Error),

    /// Config file could not be parsed.
    #[error("invalid scheduler config: {0}")]
    Config(#[from] toml::de::Error),
}

/// Result type for scheduler operations.
pub type SchedulerResult<T> = Result<T, SchedulerError>;
