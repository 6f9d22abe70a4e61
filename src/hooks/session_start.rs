// src/hooks/session_start.rs
// SessionStart hook handler - injects recent session memory as context

use super::{HookContext, HookOutput, HookTimer, read_hook_input, write_hook_output};
use crate::inject::{Excerpt, build_excerpt};
use anyhow::Result;
use tracing::debug;

const EVENT_NAME: &str = "SessionStart";

/// Handle SessionStart hook: drain stdin, emit the recent-activity excerpt
pub async fn run(ctx: &HookContext) -> Result<()> {
    let _timer = HookTimer::start(EVENT_NAME);

    if let Ok(Some(input)) = read_hook_input().await {
        debug!(
            "[mem-hooks] SessionStart source: {}",
            input.get("source").and_then(|v| v.as_str()).unwrap_or("startup")
        );
    }

    write_hook_output(&build_output(ctx));
    Ok(())
}

/// Hook output carrying the excerpt, or a plain status when there is none
pub fn build_output(ctx: &HookContext) -> HookOutput {
    match build_excerpt(&ctx.store, &ctx.config.inject) {
        Ok(Excerpt::Text(text)) => HookOutput::with_context(EVENT_NAME, text),
        Ok(Excerpt::Nothing) => {
            debug!("[mem-hooks] No recent observations to inject");
            HookOutput::quiet()
        }
        Err(e) => {
            debug!("[mem-hooks] Context injection failed: {}", e);
            HookOutput::quiet()
        }
    }
}
