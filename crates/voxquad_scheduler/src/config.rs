//! # Scheduler Configuration
//!
//! Defaults match the fire-and-forget contract: an unbounded job queue and
//! a single named worker. Configs can be loaded from TOML once at startup.
//!
//! ```toml
//! worker_name = "chunk-mesher"
//! max_pending_jobs = 256
//! queue_capacity = 128
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{SchedulerError, SchedulerResult};

/// Configuration for a [`MeshScheduler`](crate::MeshScheduler).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SchedulerConfig {
    /// Name given to the worker thread.
    pub worker_name: String,
    /// Maximum queued jobs before submit is rejected. `0` means unbounded.
    pub max_pending_jobs: usize,
    /// Initial capacity of both queues.
    pub queue_capacity: usize,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            worker_name: "voxquad-mesh-worker".to_string(),
            max_pending_jobs: 0,
            queue_capacity: 64,
        }
    }
}

impl SchedulerConfig {
    /// Chunk streaming preset: bounded queue so a camera sweep cannot pile
    /// up an unbounded backlog of stale chunks.
    #[must_use]
    pub fn streaming() -> Self {
        Self {
            worker_name: "voxquad-stream-mesher".to_string(),
            max_pending_jobs: 1024,
            queue_capacity: 256,
        }
    }

    /// Parses a config from TOML text. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulerError::Config`] on malformed TOML or unknown keys.
    pub fn from_toml_str(text: &str) -> SchedulerResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a TOML config file.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulerError::ConfigIo`] if the file cannot be read, or
    /// [`SchedulerError::Config`] if it cannot be parsed.
    pub fn from_toml_file(path: impl AsRef<Path>) -> SchedulerResult<Self> {
        let text = std::fs::read_to_string(path).map_err(SchedulerError::ConfigIo)?;
        Self::from_toml_str(&text)
    }

    /// True when submit never rejects for capacity.
    #[must_use]
    pub const fn is_unbounded(&self) -> bool {
        self.max_pending_jobs == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unbounded() {
        let config = SchedulerConfig::default();
        assert!(config.is_unbounded());
        assert_eq!(config.worker_name, "voxquad-mesh-worker");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = SchedulerConfig::from_toml_str("max_pending_jobs = 8").unwrap();
        assert_eq!(config.max_pending_jobs, 8);
        assert_eq!(config.queue_capacity, 64);
        assert!(!config.is_unbounded());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = SchedulerConfig::from_toml_str("workers = 4").unwrap_err();
        assert!(matches!(err, SchedulerError::Config(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = SchedulerConfig::from_toml_file("/nonexistent/voxquad.toml").unwrap_err();
        assert!(matches!(err, SchedulerError::ConfigIo(_)));
    }

    #[test]
    fn test_roundtrip_through_toml() {
        let config = SchedulerConfig::streaming();
        let text = toml::to_string(&config).unwrap();
        assert_eq!(SchedulerConfig::from_toml_str(&text).unwrap(), config);
    }
}
