#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command};
pub use toml_config::{CubeConfig, SceneConfig};

use crate::core::{ConfigProvider, OverlapRule};
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, Validate};
use serde::{Deserialize, Serialize};

/// Query engine settings, the `[engine]` table of a scene file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    pub overlap_rule: OverlapRule,
    /// Threads used by all-vs-all queries; 1 runs them inline.
    pub workers: usize,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            overlap_rule: OverlapRule::Endpoint,
            workers: 1,
        }
    }
}

impl EngineSettings {
    /// Replaces the fields that were given on the command line.
    pub fn with_overrides(mut self, overlap_rule: Option<OverlapRule>, workers: Option<usize>) -> Self {
        if let Some(rule) = overlap_rule {
            self.overlap_rule = rule;
        }
        if let Some(workers) = workers {
            self.workers = workers;
        }
        self
    }
}

impl ConfigProvider for EngineSettings {
    fn overlap_rule(&self) -> OverlapRule {
        self.overlap_rule
    }

    fn workers(&self) -> usize {
        self.workers
    }
}

impl Validate for EngineSettings {
    fn validate(&self) -> Result<()> {
        validate_positive_number("engine.workers", self.workers, 1)
    }
}
