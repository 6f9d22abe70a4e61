// src/hooks/post_tool.rs
// PostToolUse hook handler - records one observation per tool call

use super::{HookContext, HookOutput, HookTimer, read_hook_input, write_hook_output};
use crate::consolidate::{ConsolidationOutcome, ConsolidationTracker, consolidate_file};
use crate::observation::{Formatted, ToolEvent, format_observation};
use anyhow::Result;
use chrono::{DateTime, Local};
use tracing::{debug, warn};

/// What recording one tool event did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOutcome {
    /// Tool is on the skip-list
    Suppressed,
    Recorded {
        line: String,
        /// Set when this observation triggered a consolidation pass that completed
        consolidation: Option<ConsolidationOutcome>,
    },
}

/// Run PostToolUse hook
pub async fn run(ctx: &HookContext) -> Result<()> {
    let _timer = HookTimer::start("PostToolUse");

    let input = read_hook_input().await.unwrap_or_else(|e| {
        debug!("[mem-hooks] Unreadable hook input: {}", e);
        None
    });

    if let Some(json) = input {
        let event = ToolEvent::from_json(&json);
        match record_event(ctx, &event, Local::now()) {
            Ok(RecordOutcome::Recorded { line, .. }) => debug!("[mem-hooks] Recorded: {}", line),
            Ok(RecordOutcome::Suppressed) => {}
            Err(e) => warn!("[mem-hooks] Failed to record observation: {}", e),
        }
    }

    write_hook_output(&HookOutput::quiet());
    Ok(())
}

/// Format, append, and (when due) consolidate for one tool event at `now`.
///
/// Only the append can fail; consolidation errors are logged and dropped.
pub fn record_event(
    ctx: &HookContext,
    event: &ToolEvent,
    now: DateTime<Local>,
) -> crate::Result<RecordOutcome> {
    let line = match format_observation(event, now.time(), &ctx.config.capture) {
        Formatted::Line(line) => line,
        Formatted::Suppressed => return Ok(RecordOutcome::Suppressed),
    };

    let today = now.date_naive();
    ctx.store.record_line(today, &line)?;

    let tracker = ConsolidationTracker::new(ctx.paths.state_path(), ctx.config.consolidation.clone());
    let consolidation = if tracker.should_consolidate(now, today) {
        match consolidate_file(&ctx.store, today, now.time(), &ctx.config.consolidation) {
            Ok(outcome) => {
                debug!(?outcome, "[mem-hooks] Consolidation pass finished");
                Some(outcome)
            }
            Err(e) => {
                debug!("[mem-hooks] Consolidation skipped: {}", e);
                None
            }
        }
    } else {
        None
    };

    Ok(RecordOutcome::Recorded {
        line,
        consolidation,
    })
}
