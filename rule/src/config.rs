//! Engine configuration.

use serde::{Deserialize, Serialize};

use crate::DEFAULT_SIZE_LIMIT;

/// Settings applied when an engine is constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Maximum number of symbols a generation may hold.
    pub size_limit: u64,
}

impl EngineConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the size limit.
    pub fn size_limit(mut self, limit: u64) -> Self {
        self.size_limit = limit;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            size_limit: DEFAULT_SIZE_LIMIT,
        }
    }
}
