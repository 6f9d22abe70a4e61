// src/config/env.rs
// Environment-based configuration - single source of truth for all env vars

use std::path::PathBuf;
use std::str::FromStr;
use tracing::Level;

/// Overrides the project root derived from the executable location
pub const PROJECT_ROOT_VAR: &str = "MEM_HOOKS_PROJECT_ROOT";
/// When truthy, hooks emit their status object and record nothing
pub const DISABLE_VAR: &str = "MEM_HOOKS_DISABLE";
/// Log level override (trace, debug, info, warn, error)
pub const LOG_VAR: &str = "MEM_HOOKS_LOG";

/// Settings read from the process environment
#[derive(Debug, Clone, Default)]
pub struct EnvConfig {
    pub project_root: Option<PathBuf>,
    pub disabled: bool,
    pub log_level: Option<Level>,
}

impl EnvConfig {
    pub fn from_env() -> Self {
        Self {
            project_root: std::env::var(PROJECT_ROOT_VAR)
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
            disabled: parse_bool_env(DISABLE_VAR).unwrap_or(false),
            log_level: std::env::var(LOG_VAR)
                .ok()
                .and_then(|v| parse_level(&v)),
        }
    }
}

fn parse_level(value: &str) -> Option<Level> {
    Level::from_str(value.trim()).ok()
}

fn parse_bool_value(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_bool_env(name: &str) -> Option<bool> {
    parse_bool_value(&std::env::var(name).ok()?)
}
