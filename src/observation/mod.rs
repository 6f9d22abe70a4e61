// src/observation/mod.rs
// Observation lines: the typed record, its markdown rendering, and the parser

pub mod format;

pub use format::{Formatted, ToolEvent, format_observation};

use chrono::NaiveTime;
use regex::Regex;
use std::sync::LazyLock;

/// Category label of a consolidated observation
pub const HEAVY_ACTIVITY: &str = "Heavy activity";

/// Placeholder for fields a tool call did not provide
pub const UNKNOWN: &str = "unknown";

/// Matches one observation line: time (or time range), category, optional resource and tail.
static OBSERVATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    // SAFETY: This is a static literal regex pattern; compilation cannot fail.
    #[allow(clippy::expect_used)]
    Regex::new(r"^- \*\*(\d{2}:\d{2})(?:-(\d{2}:\d{2}))?\*\* \| ([^|]+?)(?: \| `([^`]*)`(.*))?\s*$")
        .expect("observation regex")
});

static TOUCHES_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"\((\d+) touches: ([^)]*)\)").expect("touches regex")
});

static END_MARKER_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"^\*\*Session ended at \d{2}:\d{2}\*\*").expect("end marker regex")
});

/// A single recorded tool-use event, before rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observation {
    pub time: NaiveTime,
    pub icon: Option<&'static str>,
    pub label: String,
    pub resource: Option<String>,
    pub tag: Option<String>,
    pub summary: Option<String>,
    pub error: bool,
}

impl Observation {
    /// Render as one markdown line:
    /// `- **HH:MM** | <icon> <Label> | `<resource>` [<tag>] (<summary>) [⚠️ error]`
    pub fn render(&self) -> String {
        let mut line = format!("- **{}** | ", self.time.format("%H:%M"));
        if let Some(icon) = self.icon {
            line.push_str(icon);
            line.push(' ');
        }
        line.push_str(&sanitize_field(&self.label));

        if let Some(ref resource) = self.resource {
            line.push_str(&format!(" | `{}`", sanitize_resource(resource)));
        }
        if let Some(ref tag) = self.tag {
            line.push_str(&format!(" [{}]", sanitize_field(tag)));
        }
        if let Some(ref summary) = self.summary {
            line.push_str(&format!(" ({})", summary));
        }
        if self.error {
            line.push_str(" [⚠️ error]");
        }
        line
    }
}

/// Synthetic line that replaces a run of observations about one resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsolidatedObservation {
    pub start: String,
    pub end: String,
    pub resource: String,
    pub touches: usize,
    pub tools: Vec<String>,
}

impl ConsolidatedObservation {
    pub fn render(&self) -> String {
        format!(
            "- **{}-{}** | {} | `{}` ({} touches: {})",
            self.start,
            self.end,
            HEAVY_ACTIVITY,
            sanitize_resource(&self.resource),
            self.touches,
            self.tools.join("/")
        )
    }
}

/// An observation line recovered from a session file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    /// Start time, `HH:MM`
    pub time: String,
    /// End time for consolidated ranges
    pub end_time: Option<String>,
    /// Category as written, icon included
    pub category: String,
    pub resource: Option<String>,
    /// Touch count and tool list of a consolidated line
    pub touches: Option<(usize, Vec<String>)>,
    /// The original line, verbatim
    pub raw: String,
}

impl ParsedLine {
    /// Parse a line; `None` when it is not an observation line
    pub fn parse(line: &str) -> Option<Self> {
        let caps = OBSERVATION_RE.captures(line)?;
        let time = caps.get(1)?.as_str().to_string();
        let end_time = caps.get(2).map(|m| m.as_str().to_string());
        let category = caps.get(3)?.as_str().trim().to_string();
        let resource = caps
            .get(4)
            .map(|m| m.as_str().to_string())
            .filter(|r| !r.is_empty());
        let touches = caps.get(5).and_then(|tail| {
            let t = TOUCHES_RE.captures(tail.as_str())?;
            let count = t.get(1)?.as_str().parse().ok()?;
            let tools = t
                .get(2)?
                .as_str()
                .split('/')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
            Some((count, tools))
        });

        Some(Self {
            time,
            end_time,
            category,
            resource,
            touches,
            raw: line.to_string(),
        })
    }

    /// Short tool name without the icon (`"📖 Read"` -> `"Read"`)
    pub fn tool_label(&self) -> &str {
        if self.category == HEAVY_ACTIVITY {
            return &self.category;
        }
        self.category
            .split_whitespace()
            .last()
            .unwrap_or(self.category.as_str())
    }

    /// Latest time covered by this line
    pub fn last_time(&self) -> &str {
        self.end_time.as_deref().unwrap_or(&self.time)
    }

    pub fn is_consolidated(&self) -> bool {
        self.category == HEAVY_ACTIVITY
    }
}

/// Whether `line` is an observation line
pub fn is_observation_line(line: &str) -> bool {
    OBSERVATION_RE.is_match(line)
}

/// Whether `line` is a session-end marker
pub fn is_end_marker(line: &str) -> bool {
    END_MARKER_RE.is_match(line)
}

/// Render a session-end marker
pub fn end_marker(time: NaiveTime, observations: usize) -> String {
    format!(
        "**Session ended at {}** ({} observations)",
        time.format("%H:%M"),
        observations
    )
}

/// Labels and tags also sit outside backticks, so `|` would split the columns
fn sanitize_field(field: &str) -> String {
    sanitize_resource(field).replace('|', "/")
}

/// Keep a resource on one line and out of the backtick delimiters
fn sanitize_resource(resource: &str) -> String {
    resource
        .chars()
        .map(|c| match c {
            '`' => '\'',
            '\n' | '\r' | '\t' => ' ',
            c => c,
        })
        .collect()
}
