// src/cli/mod.rs
// CLI module for mem-hooks commands

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod consolidate;
pub mod search;
pub mod status;

pub use consolidate::run_consolidate;
pub use search::run_search;
pub use status::run_status;

#[derive(Parser, Debug)]
#[command(name = "mem-hooks")]
#[command(about = "Session observation log for Claude Code hooks")]
#[command(version)]
pub struct Cli {
    /// Project root (default: derived from the executable's install location)
    #[arg(long, global = true, env = crate::config::env::PROJECT_ROOT_VAR)]
    pub project_root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Claude Code hook handlers
    Hook {
        #[command(subcommand)]
        action: HookAction,
    },

    /// Search recorded sessions (case-insensitive)
    Search {
        /// Text to look for
        query: String,

        /// Only search the newest N session files
        #[arg(short, long)]
        days: Option<usize>,
    },

    /// Force a consolidation pass on one session file
    Consolidate {
        /// Session date as YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,
    },

    /// Show resolved paths and consolidation state
    Status,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookAction {
    /// Handle PostToolUse hooks - record one observation
    PostTool,
    /// Handle SessionStart hooks - inject recent session memory
    SessionStart,
    /// Handle SessionEnd hooks - append the end marker
    SessionEnd,
    /// Handle Stop hooks - acknowledge only, fires after every turn
    Stop,
}

impl Commands {
    /// Hook commands talk JSON on stdout and log quietly
    pub fn is_hook(&self) -> bool {
        matches!(self, Commands::Hook { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hook_subcommands() {
        let cli = Cli::try_parse_from(["mem-hooks", "hook", "post-tool"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Hook {
                action: HookAction::PostTool
            }
        ));
        assert!(cli.command.is_hook());

        let cli = Cli::try_parse_from(["mem-hooks", "hook", "session-start"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Hook {
                action: HookAction::SessionStart
            }
        ));
    }

    #[test]
    fn test_stop_and_session_end_are_distinct() {
        let stop = Cli::try_parse_from(["mem-hooks", "hook", "stop"]).unwrap();
        let end = Cli::try_parse_from(["mem-hooks", "hook", "session-end"]).unwrap();
        let (Commands::Hook { action: stop }, Commands::Hook { action: end }) =
            (stop.command, end.command)
        else {
            panic!("expected hook commands");
        };
        assert_eq!(stop, HookAction::Stop);
        assert_eq!(end, HookAction::SessionEnd);
    }

    #[test]
    fn test_parse_search_with_days() {
        let cli = Cli::try_parse_from(["mem-hooks", "search", "auth.rs", "--days", "2"]).unwrap();
        match cli.command {
            Commands::Search { query, days } => {
                assert_eq!(query, "auth.rs");
                assert_eq!(days, Some(2));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_project_root() {
        let cli =
            Cli::try_parse_from(["mem-hooks", "status", "--project-root", "/work/app"]).unwrap();
        assert_eq!(cli.project_root, Some(PathBuf::from("/work/app")));
        assert!(!cli.command.is_hook());
    }

    #[test]
    fn test_missing_subcommand_is_error() {
        assert!(Cli::try_parse_from(["mem-hooks"]).is_err());
    }
}
