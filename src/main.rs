// src/main.rs
// mem-hooks - session observation log for Claude Code

use anyhow::Result;
use clap::Parser;
use mem_hooks::cli::{Cli, Commands, HookAction, run_consolidate, run_search, run_status};
use mem_hooks::config::EnvConfig;
use mem_hooks::hooks::{self, HookContext, HookOutput, write_hook_output};
use std::path::Path;
use tracing::{Level, warn};
use tracing_subscriber::FmtSubscriber;

/// Run one hook. Only a scope violation is allowed to fail the process.
async fn run_hook(project_root: Option<&Path>, action: HookAction, env: &EnvConfig) -> Result<()> {
    if env.disabled {
        write_hook_output(&HookOutput::quiet());
        return Ok(());
    }

    let ctx = match HookContext::load(project_root) {
        Ok(ctx) => ctx,
        Err(e) if e.is_fatal() => {
            eprintln!("[mem-hooks] {}", e);
            std::process::exit(1);
        }
        Err(e) => {
            warn!("[mem-hooks] Could not resolve project paths: {}", e);
            write_hook_output(&HookOutput::quiet());
            return Ok(());
        }
    };

    match action {
        HookAction::PostTool => hooks::post_tool::run(&ctx).await,
        HookAction::SessionStart => hooks::session_start::run(&ctx).await,
        HookAction::SessionEnd => hooks::session_end::run(&ctx).await,
        HookAction::Stop => hooks::session_end::run_stop().await,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv(); // Load .env from current directory
    let env = EnvConfig::from_env();

    let cli = Cli::parse();

    // Hooks talk JSON on stdout, so keep logging on stderr and quiet
    let log_level = env.log_level.unwrap_or(if cli.command.is_hook() {
        Level::WARN
    } else {
        Level::INFO
    });

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let project_root = cli.project_root.or(env.project_root.clone());

    match cli.command {
        Commands::Hook { action } => {
            run_hook(project_root.as_deref(), action, &env).await?;
        }
        Commands::Search { query, days } => {
            let ctx = HookContext::load(project_root.as_deref())?;
            run_search(&ctx, &query, days)?;
        }
        Commands::Consolidate { date } => {
            let ctx = HookContext::load(project_root.as_deref())?;
            run_consolidate(&ctx, date.as_deref())?;
        }
        Commands::Status => {
            let ctx = HookContext::load(project_root.as_deref())?;
            run_status(&ctx)?;
        }
    }

    Ok(())
}
