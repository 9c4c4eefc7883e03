use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Run parameters, fixed for the lifetime of a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    pub duration_secs: u64,
    pub interval_secs: f64,
    pub log_path: PathBuf,
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("duration must be greater than zero")]
    ZeroDuration,
    #[error("interval must be a positive number of seconds, got {0}")]
    BadInterval(f64),
}

impl RunConfig {
    /// Reject configurations the loop cannot run with, before anything is
    /// opened or written.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.duration_secs == 0 {
            return Err(ConfigError::ZeroDuration);
        }
        if !self.interval_secs.is_finite() || self.interval_secs <= 0.0 {
            return Err(ConfigError::BadInterval(self.interval_secs));
        }
        Ok(())
    }

    /// Target spacing between samples.
    pub fn interval(&self) -> Duration {
        Duration::from_secs_f64(self.interval_secs)
    }
}
