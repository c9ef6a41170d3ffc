//! Configuration for the dispatch worker

use plumb_core::{Error, Result, DEFAULT_WORKER_NAME, PLUMB_WORKER_NAME_VAR};
use serde::{Deserialize, Serialize};

/// Configuration for a [`super::Dispatcher`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchConfig {
    /// Name given to the background worker thread
    pub worker_name: String,
    /// Whether dropping the dispatcher waits for queued producers to finish
    pub join_on_drop: bool,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            worker_name: DEFAULT_WORKER_NAME.to_string(),
            join_on_drop: true,
        }
    }
}

impl DispatchConfig {
    /// Parse a config from JSON; missing fields take their defaults
    pub fn from_json(input: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults overridden by `PLUMB_WORKER_NAME` when it is set and non-empty
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        if let Ok(name) = std::env::var(PLUMB_WORKER_NAME_VAR) {
            if !name.is_empty() {
                config.worker_name = name;
            }
        }
        config.validate()?;
        Ok(config)
    }

    /// Check the config can be used to spawn a worker
    pub fn validate(&self) -> Result<()> {
        if self.worker_name.is_empty() {
            return Err(Error::validation("worker_name", "cannot be empty"));
        }
        // std::thread::Builder panics on interior NUL bytes
        if self.worker_name.contains('\0') {
            return Err(Error::validation(
                "worker_name",
                "cannot contain NUL bytes",
            ));
        }
        Ok(())
    }
}
