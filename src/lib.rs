// src/lib.rs
// mem-hooks - per-project session observation log for Claude Code hooks

#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod cli;
pub mod config;
pub mod consolidate;
pub mod error;
pub mod hooks;
pub mod inject;
pub mod observation;
pub mod paths;
pub mod store;
pub mod utils;
pub use error::{MemError, Result};
