// src/consolidate/mod.rs
// Consolidator: collapses old, repetitive observations into summary lines

pub mod state;

pub use state::{ConsolidationState, ConsolidationTracker};

use crate::config::ConsolidationConfig;
use crate::error::Result;
use crate::observation::{ConsolidatedObservation, ParsedLine, is_end_marker};
use crate::store::SessionStore;
use crate::utils::base_name;
use chrono::{NaiveDate, NaiveTime, Timelike};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// What a consolidation pass did to a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsolidationOutcome {
    /// No session file for the date
    Missing,
    /// Too few observations to be worth rewriting
    Skipped { observations: usize },
    /// Nothing changed after consolidation
    Unchanged { observations: usize },
    Rewritten { before: usize, after: usize },
}

/// A session file split into its three partitions
#[derive(Debug, Default)]
struct Partitions {
    header: Vec<String>,
    observations: Vec<ParsedLine>,
    end_markers: Vec<String>,
}

fn partition(text: &str) -> Partitions {
    let mut parts = Partitions::default();
    let mut in_header = true;

    for line in text.lines() {
        if is_end_marker(line) {
            parts.end_markers.push(line.to_string());
        } else if let Some(parsed) = ParsedLine::parse(line) {
            in_header = false;
            parts.observations.push(parsed);
        } else if in_header {
            parts.header.push(line.to_string());
        }
        // Blank lines and separators between observations are regenerated
    }

    while parts.header.last().is_some_and(|l| l.trim().is_empty()) {
        parts.header.pop();
    }
    parts
}

/// Minutes since midnight for an `HH:MM` string
fn minutes_of(hhmm: &str) -> Option<i64> {
    let (h, m) = hhmm.split_once(':')?;
    Some(h.parse::<i64>().ok()? * 60 + m.parse::<i64>().ok()?)
}

/// Collapse groups of old observations that touch the same resource.
///
/// Groups are keyed by the resource's base name. Groups of at least
/// `min_group_size` lines become one `Heavy activity` line; everything else
/// passes through. The result is stably sorted by start time.
pub fn compact_observations(old: &[ParsedLine], min_group_size: usize) -> Vec<String> {
    let mut groups: HashMap<&str, Vec<&ParsedLine>> = HashMap::new();
    for obs in old {
        if let Some(resource) = obs.resource.as_deref() {
            groups.entry(base_name(resource)).or_default().push(obs);
        }
    }

    let mut emitted: HashSet<&str> = HashSet::new();
    let mut results: Vec<(String, String)> = Vec::with_capacity(old.len());

    for obs in old {
        let Some(key) = obs.resource.as_deref().map(base_name) else {
            results.push((obs.time.clone(), obs.raw.clone()));
            continue;
        };
        let group = &groups[key];
        if group.len() < min_group_size {
            results.push((obs.time.clone(), obs.raw.clone()));
            continue;
        }
        if !emitted.insert(key) {
            continue;
        }
        let summary = summarize_group(key, group);
        results.push((summary.start.clone(), summary.render()));
    }

    results.sort_by(|a, b| a.0.cmp(&b.0));
    results.into_iter().map(|(_, line)| line).collect()
}

fn summarize_group(resource: &str, group: &[&ParsedLine]) -> ConsolidatedObservation {
    let start = group.iter().map(|o| o.time.as_str()).min().unwrap_or_default();
    let end = group.iter().map(|o| o.last_time()).max().unwrap_or_default();

    let mut touches = 0;
    let mut tools: Vec<String> = Vec::new();
    for obs in group {
        let (count, labels) = match &obs.touches {
            Some((count, labels)) if obs.is_consolidated() => (*count, labels.clone()),
            _ => (1, vec![obs.tool_label().to_string()]),
        };
        touches += count;
        for label in labels {
            if !tools.contains(&label) {
                tools.push(label);
            }
        }
    }

    ConsolidatedObservation {
        start: start.to_string(),
        end: end.to_string(),
        resource: resource.to_string(),
        touches,
        tools,
    }
}

/// Consolidate the text of one session file at local time `now`.
///
/// Returns `None` when the file has fewer than `min_observations` observation
/// lines, in which case it must be left byte-for-byte unchanged.
pub fn consolidate(text: &str, now: NaiveTime, config: &ConsolidationConfig) -> Option<String> {
    let parts = partition(text);
    if parts.observations.len() < config.min_observations {
        return None;
    }

    let now_minutes = i64::from(now.hour() * 60 + now.minute());
    let cutoff = now_minutes - config.recent_window_minutes;
    let (recent, old): (Vec<ParsedLine>, Vec<ParsedLine>) = parts
        .observations
        .into_iter()
        .partition(|obs| minutes_of(&obs.time).is_some_and(|m| m > cutoff));

    let old_lines = compact_observations(&old, config.min_group_size);

    let mut lines: Vec<String> = parts.header;
    lines.push(String::new());
    lines.extend(old_lines.iter().cloned());
    if !old_lines.is_empty() && !recent.is_empty() {
        lines.push(String::new());
        lines.push("---".to_string());
        lines.push(String::new());
    }
    lines.extend(recent.into_iter().map(|obs| obs.raw));
    for marker in parts.end_markers {
        lines.push(String::new());
        lines.push(marker);
    }

    let mut out = lines.join("\n");
    out.push('\n');
    Some(out)
}

/// Run one consolidation pass over the file for `date`
pub fn consolidate_file(
    store: &SessionStore,
    date: NaiveDate,
    now: NaiveTime,
    config: &ConsolidationConfig,
) -> Result<ConsolidationOutcome> {
    let Some(text) = store.read_file(date)? else {
        return Ok(ConsolidationOutcome::Missing);
    };
    let before = count_observations(&text);

    let Some(rewritten) = consolidate(&text, now, config) else {
        return Ok(ConsolidationOutcome::Skipped {
            observations: before,
        });
    };
    if rewritten == text {
        return Ok(ConsolidationOutcome::Unchanged {
            observations: before,
        });
    }

    store.write_file(date, &rewritten)?;
    let after = count_observations(&rewritten);
    debug!(%date, before, after, "Consolidated session file");
    Ok(ConsolidationOutcome::Rewritten { before, after })
}

fn count_observations(text: &str) -> usize {
    text.lines().filter(|l| ParsedLine::parse(l).is_some()).count()
}
