// src/hooks/session_end.rs
// SessionEnd hook handler - closes today's session file; Stop only acknowledges

use super::{HookContext, HookOutput, HookTimer, read_hook_input, write_hook_output};
use anyhow::Result;
use chrono::{DateTime, Local};
use tracing::{debug, warn};

/// Handle SessionEnd hook
pub async fn run(ctx: &HookContext) -> Result<()> {
    let _timer = HookTimer::start("SessionEnd");

    // Drain the payload; its content does not change what is written
    let _ = read_hook_input().await;

    close_session(ctx, Local::now());
    write_hook_output(&HookOutput::quiet());
    Ok(())
}

/// Handle Stop hook.
///
/// Stop fires after every assistant turn, so it records nothing; the day is
/// closed once, by SessionEnd.
pub async fn run_stop() -> Result<()> {
    let _timer = HookTimer::start("Stop");
    let _ = read_hook_input().await;
    write_hook_output(&HookOutput::quiet());
    Ok(())
}

/// Append (or refresh) the end marker of the session file for `now`'s date
pub fn close_session(ctx: &HookContext, now: DateTime<Local>) -> Option<String> {
    match ctx.store.append_end_marker(now.date_naive(), now.time()) {
        Ok(Some(marker)) => {
            debug!("[mem-hooks] {}", marker);
            Some(marker)
        }
        Ok(None) => {
            debug!("[mem-hooks] No session file to close today");
            None
        }
        Err(e) => {
            warn!("[mem-hooks] Failed to write session end marker: {}", e);
            None
        }
    }
}
