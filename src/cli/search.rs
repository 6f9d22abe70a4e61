// src/cli/search.rs
// Case-insensitive search across session files (/mem-search)

use crate::error::Result;
use crate::hooks::HookContext;
use crate::observation::{is_end_marker, is_observation_line};
use crate::store::SessionStore;
use chrono::NaiveDate;

/// One matching line from a session file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub date: NaiveDate,
    pub line: String,
}

/// Find observation and end-marker lines containing `query`, newest day first.
///
/// Lines within a day keep file order. `days` limits the search to the newest
/// N session files.
pub fn search_sessions(
    store: &SessionStore,
    query: &str,
    days: Option<usize>,
) -> Result<Vec<SearchHit>> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Ok(Vec::new());
    }

    let dates = store.list_dates()?;
    let limit = days.unwrap_or(dates.len());
    let mut hits = Vec::new();

    for date in dates.into_iter().take(limit) {
        let Some(text) = store.read_file(date)? else {
            continue;
        };
        hits.extend(
            text.lines()
                .filter(|l| is_observation_line(l) || is_end_marker(l))
                .filter(|l| l.to_lowercase().contains(&needle))
                .map(|l| SearchHit {
                    date,
                    line: l.to_string(),
                }),
        );
    }
    Ok(hits)
}

/// Render hits grouped under `### YYYY-MM-DD` headings
pub fn render_hits(query: &str, hits: &[SearchHit]) -> String {
    if hits.is_empty() {
        return format!("No session entries matching \"{}\"", query);
    }

    let mut out = format!("{} matches for \"{}\"\n", hits.len(), query);
    let mut current: Option<NaiveDate> = None;
    for hit in hits {
        if current != Some(hit.date) {
            out.push_str(&format!("\n### {}\n", hit.date.format("%Y-%m-%d")));
            current = Some(hit.date);
        }
        out.push_str(&hit.line);
        out.push('\n');
    }
    out
}

/// Search command entry point
pub fn run_search(ctx: &HookContext, query: &str, days: Option<usize>) -> anyhow::Result<()> {
    let hits = search_sessions(&ctx.store, query, days)?;
    print!("{}", render_hits(query, &hits));
    if hits.is_empty() {
        println!();
    }
    Ok(())
}
