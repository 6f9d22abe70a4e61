// src/config/mod.rs
// Configuration and shared constants

pub mod env;
pub mod file;

pub use env::EnvConfig;
pub use file::{CaptureConfig, ConsolidationConfig, InjectConfig, MemConfig};

/// Title line prefix of every session file
pub const SESSION_TITLE_PREFIX: &str = "# Session: ";

/// Instructional note written under the session title
pub const SESSION_NOTE: &str = "> Auto-captured by memory hooks. Search with /mem-search.";

/// Name of the consolidation state file inside the sessions directory
pub const STATE_FILE_NAME: &str = ".consolidation-state.json";

/// Name of the optional config file inside the memory directory
pub const CONFIG_FILE_NAME: &str = "config.toml";
