// src/error.rs
// Error types for the session observation log

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the mem-hooks library
#[derive(Error, Debug)]
pub enum MemError {
    /// The resolved memory directory falls under a shared, home-level location.
    /// This is the one error that must never be swallowed.
    #[error("refusing to use {path}: {reason}")]
    ScopeViolation { path: PathBuf, reason: String },

    #[error("could not determine project root: {0}")]
    NoProjectRoot(String),

    #[error("invalid date: {0}")]
    InvalidDate(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Convenience type alias for Result using MemError
pub type Result<T> = std::result::Result<T, MemError>;

impl MemError {
    /// Whether the hook must abort visibly instead of degrading silently
    pub fn is_fatal(&self) -> bool {
        matches!(self, MemError::ScopeViolation { .. })
    }
}
