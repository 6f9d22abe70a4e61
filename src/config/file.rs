// src/config/file.rs
// File-based configuration from <project>/.claude/memory/config.toml

use serde::Deserialize;
use std::path::Path;
use tracing::{debug, warn};

/// Top-level config structure
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct MemConfig {
    #[serde(default)]
    pub capture: CaptureConfig,
    #[serde(default)]
    pub consolidation: ConsolidationConfig,
    #[serde(default)]
    pub inject: InjectConfig,
}

/// Observation capture settings
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct CaptureConfig {
    /// Tools that never produce an observation line (internal coordination signals)
    pub skip_tools: Vec<String>,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            skip_tools: vec![
                "TodoWrite".to_string(),
                "TodoRead".to_string(),
                "ExitPlanMode".to_string(),
            ],
        }
    }
}

impl CaptureConfig {
    pub fn is_skipped(&self, tool_name: &str) -> bool {
        self.skip_tools.iter().any(|t| t == tool_name)
    }
}

/// Consolidation trigger and compaction settings
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ConsolidationConfig {
    /// Observations since the last pass that trigger a new one
    pub observation_threshold: u32,
    /// Minutes since the last pass that trigger a new one
    pub interval_minutes: i64,
    /// Files with fewer observation lines are left untouched
    pub min_observations: usize,
    /// Observations newer than this are never consolidated
    pub recent_window_minutes: i64,
    /// Smallest same-resource group that collapses into one line
    pub min_group_size: usize,
}

impl Default for ConsolidationConfig {
    fn default() -> Self {
        Self {
            observation_threshold: 30,
            interval_minutes: 10,
            min_observations: 50,
            recent_window_minutes: 30,
            min_group_size: 3,
        }
    }
}

/// Session-start context injection settings
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct InjectConfig {
    /// Number of most recent session files to read
    pub lookback_days: usize,
    /// Observation lines taken from each file
    pub max_lines_per_day: usize,
}

impl Default for InjectConfig {
    fn default() -> Self {
        Self {
            lookback_days: 3,
            max_lines_per_day: 30,
        }
    }
}

impl MemConfig {
    /// Load config from `path`, falling back to defaults when missing or invalid
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => match Self::parse(&contents) {
                Ok(config) => {
                    debug!(path = %path.display(), "Loaded config from file");
                    config
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Failed to parse config file");
                    Self::default()
                }
            },
            Err(_) => {
                debug!(path = %path.display(), "Config file not found, using defaults");
                Self::default()
            }
        }
    }

    pub fn parse(contents: &str) -> crate::Result<Self> {
        Ok(toml::from_str(contents)?)
    }
}
