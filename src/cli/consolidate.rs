// src/cli/consolidate.rs
// Force a consolidation pass outside the hook-driven schedule

use crate::consolidate::{ConsolidationOutcome, consolidate_file};
use crate::hooks::HookContext;
use crate::store::parse_date;
use anyhow::Result;
use chrono::{Local, NaiveDate, NaiveTime};
use tracing::info;

/// Consolidate `date` as seen at `now`.
///
/// Past days are treated as seen at the end of the day, so only their last
/// `recent_window_minutes` stay verbatim.
pub fn force_consolidation(
    ctx: &HookContext,
    date: NaiveDate,
    today: NaiveDate,
    now: NaiveTime,
) -> crate::Result<ConsolidationOutcome> {
    let effective_now = if date < today {
        NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(now)
    } else {
        now
    };
    consolidate_file(&ctx.store, date, effective_now, &ctx.config.consolidation)
}

pub fn describe(date: NaiveDate, outcome: &ConsolidationOutcome) -> String {
    let day = date.format("%Y-%m-%d");
    match outcome {
        ConsolidationOutcome::Missing => format!("No session file for {}", day),
        ConsolidationOutcome::Skipped { observations } => format!(
            "{}: {} observations, below the consolidation minimum",
            day, observations
        ),
        ConsolidationOutcome::Unchanged { observations } => {
            format!("{}: {} observations, nothing to consolidate", day, observations)
        }
        ConsolidationOutcome::Rewritten { before, after } => {
            format!("{}: consolidated {} -> {} lines", day, before, after)
        }
    }
}

/// Consolidate command entry point
pub fn run_consolidate(ctx: &HookContext, date: Option<&str>) -> Result<()> {
    let now = Local::now();
    let today = now.date_naive();
    let date = match date {
        Some(s) => parse_date(s)?,
        None => today,
    };

    let outcome = force_consolidation(ctx, date, today, now.time())?;
    info!(?outcome, "Forced consolidation");
    println!("{}", describe(date, &outcome));
    Ok(())
}
