// src/consolidate/state.rs
// Consolidation state: persisted counters deciding when the next pass runs

use crate::config::ConsolidationConfig;
use crate::error::Result;
use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Progress toward the next consolidation pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsolidationState {
    /// Epoch milliseconds of the last pass (or of the last reset)
    pub last_consolidation_time: i64,
    pub observations_since_consolidation: u32,
    /// `YYYY-MM-DD` the counters belong to
    pub last_consolidation_date: String,
}

impl ConsolidationState {
    /// "Never consolidated": zero observations, clock starting now
    pub fn fresh(now: DateTime<Local>, today: NaiveDate) -> Self {
        Self {
            last_consolidation_time: now.timestamp_millis(),
            observations_since_consolidation: 0,
            last_consolidation_date: today.format("%Y-%m-%d").to_string(),
        }
    }

    /// Count one observation and decide whether a pass is due.
    ///
    /// A date change resets the counters before evaluation, so yesterday's
    /// count never triggers a pass on the first observation of a new day.
    pub fn advance(
        self,
        now: DateTime<Local>,
        today: NaiveDate,
        config: &ConsolidationConfig,
    ) -> (Self, bool) {
        let mut state = if self.last_consolidation_date == today.format("%Y-%m-%d").to_string() {
            self
        } else {
            debug!(previous = %self.last_consolidation_date, "Date changed, resetting consolidation counters");
            Self::fresh(now, today)
        };

        state.observations_since_consolidation =
            state.observations_since_consolidation.saturating_add(1);

        let now_ms = now.timestamp_millis();
        let elapsed_ms = now_ms - state.last_consolidation_time;
        let due = state.observations_since_consolidation >= config.observation_threshold
            || elapsed_ms >= config.interval_minutes.saturating_mul(60_000);

        if due {
            state.observations_since_consolidation = 0;
            state.last_consolidation_time = now_ms;
        }
        (state, due)
    }
}

/// Loads, advances and persists [`ConsolidationState`] in a JSON file
#[derive(Debug, Clone)]
pub struct ConsolidationTracker {
    path: PathBuf,
    config: ConsolidationConfig,
}

impl ConsolidationTracker {
    pub fn new(path: impl Into<PathBuf>, config: ConsolidationConfig) -> Self {
        Self {
            path: path.into(),
            config,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stored state, or a fresh one when the file is missing or unreadable
    pub fn load(&self, now: DateTime<Local>, today: NaiveDate) -> ConsolidationState {
        let parsed = fs::read_to_string(&self.path)
            .ok()
            .map(|s| serde_json::from_str::<ConsolidationState>(&s));
        match parsed {
            Some(Ok(state)) => state,
            Some(Err(e)) => {
                warn!(path = %self.path.display(), error = %e, "Corrupt consolidation state, resetting");
                ConsolidationState::fresh(now, today)
            }
            None => ConsolidationState::fresh(now, today),
        }
    }

    pub fn save(&self, state: &ConsolidationState) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string(state)?;
        let temp_path = self.path.with_extension("tmp");
        fs::write(&temp_path, json)?;
        fs::rename(&temp_path, &self.path)?;
        Ok(())
    }

    /// Record one observation; returns whether a consolidation pass is due now.
    ///
    /// Save failures are logged and otherwise ignored.
    pub fn should_consolidate(&self, now: DateTime<Local>, today: NaiveDate) -> bool {
        let (state, due) = self.load(now, today).advance(now, today, &self.config);
        if let Err(e) = self.save(&state) {
            warn!(path = %self.path.display(), error = %e, "Failed to save consolidation state");
        }
        due
    }
}
