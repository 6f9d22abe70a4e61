// src/cli/status.rs
// Show resolved paths, consolidation state and session file count

use crate::consolidate::ConsolidationTracker;
use crate::hooks::HookContext;
use anyhow::Result;
use chrono::{DateTime, Local};

/// Build the status report as seen at `now`. Never writes.
pub fn status_report(ctx: &HookContext, now: DateTime<Local>) -> Result<String> {
    let dates = ctx.store.list_dates()?;
    let tracker = ConsolidationTracker::new(
        ctx.paths.state_path(),
        ctx.config.consolidation.clone(),
    );

    let mut lines = vec![
        format!("Project root:   {}", ctx.paths.root.display()),
        format!("Sessions dir:   {}", ctx.paths.sessions_dir.display()),
        format!(
            "Config file:    {}{}",
            ctx.paths.config_path().display(),
            if ctx.paths.config_path().exists() { "" } else { " (defaults)" }
        ),
        format!("Session files:  {}", dates.len()),
    ];
    if let (Some(newest), Some(oldest)) = (dates.first(), dates.last()) {
        lines.push(format!("Date range:     {} .. {}", oldest, newest));
    }

    if tracker.path().exists() {
        let state = tracker.load(now, now.date_naive());
        let last = DateTime::from_timestamp_millis(state.last_consolidation_time)
            .map(|t| t.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "unknown".to_string());
        lines.push(format!(
            "Consolidation:  {} observations since {} (threshold {}, every {} min)",
            state.observations_since_consolidation,
            last,
            ctx.config.consolidation.observation_threshold,
            ctx.config.consolidation.interval_minutes
        ));
    } else {
        lines.push("Consolidation:  no state recorded yet".to_string());
    }

    Ok(lines.join("\n"))
}

/// Status command entry point
pub fn run_status(ctx: &HookContext) -> Result<()> {
    println!("=== mem-hooks status ===\n");
    println!("{}", status_report(ctx, Local::now())?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::ProjectPaths;
    use chrono::{NaiveDate, TimeZone};
    use tempfile::TempDir;

    fn setup() -> (TempDir, HookContext) {
        let dir = TempDir::new().unwrap();
        let ctx = HookContext::for_paths(ProjectPaths::for_root(dir.path(), None).unwrap());
        (dir, ctx)
    }

    #[test]
    fn test_status_empty_project() {
        let (_dir, ctx) = setup();
        let report = status_report(&ctx, Local::now()).unwrap();
        assert!(report.contains("Session files:  0"));
        assert!(report.contains("(defaults)"));
        assert!(report.contains("no state recorded yet"));
        assert!(!report.contains("Date range"));
    }

    #[test]
    fn test_status_reports_files_and_state() {
        let (_dir, ctx) = setup();
        for d in [16, 18] {
            let date = NaiveDate::from_ymd_opt(2026, 10, d).unwrap();
            ctx.store.record_line(date, "- **10:00** | 📁 LS | `src`").unwrap();
        }
        let now = Local.with_ymd_and_hms(2026, 10, 18, 10, 0, 0).unwrap();
        let tracker = ConsolidationTracker::new(ctx.paths.state_path(), ctx.config.consolidation.clone());
        tracker.should_consolidate(now, now.date_naive());

        let report = status_report(&ctx, now).unwrap();
        assert!(report.contains("Session files:  2"));
        assert!(report.contains("Date range:     2026-10-16 .. 2026-10-18"));
        assert!(report.contains("Consolidation:  1 observations since 2026-10-18 10:00"));
    }
}
