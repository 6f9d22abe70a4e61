// src/inject.rs
// Context injector: bounded excerpt of recent session files for session start

use crate::config::InjectConfig;
use crate::error::Result;
use crate::observation::is_observation_line;
use crate::store::SessionStore;

/// Heading of the injected excerpt
const EXCERPT_TITLE: &str = "## Recent session memory";

/// Result of looking for recent activity
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Excerpt {
    /// Files were checked and none held observations
    Nothing,
    Text(String),
}

impl Excerpt {
    pub fn text(&self) -> Option<&str> {
        match self {
            Excerpt::Text(t) => Some(t),
            Excerpt::Nothing => None,
        }
    }
}

/// Build the excerpt from the newest `lookback_days` session files.
///
/// Each day contributes its first `max_lines_per_day` observation lines in
/// file order. Never writes.
pub fn build_excerpt(store: &SessionStore, config: &InjectConfig) -> Result<Excerpt> {
    let mut sections: Vec<String> = Vec::new();

    for date in store.list_dates()?.into_iter().take(config.lookback_days) {
        let Some(text) = store.read_file(date)? else {
            continue;
        };
        let lines: Vec<&str> = text
            .lines()
            .filter(|l| is_observation_line(l))
            .take(config.max_lines_per_day)
            .collect();
        if lines.is_empty() {
            continue;
        }
        sections.push(format!("### {}\n{}", date.format("%Y-%m-%d"), lines.join("\n")));
    }

    if sections.is_empty() {
        return Ok(Excerpt::Nothing);
    }
    Ok(Excerpt::Text(format!(
        "{}\n\n{}",
        EXCERPT_TITLE,
        sections.join("\n\n")
    )))
}
