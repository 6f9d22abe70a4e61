// src/hooks/mod.rs
// Claude Code hook handlers

pub mod post_tool;
pub mod session_end;
pub mod session_start;

use crate::config::MemConfig;
use crate::error::Result;
use crate::paths::ProjectPaths;
use crate::store::SessionStore;
use regex::Regex;
use serde::Serialize;
use serde_json::{Map, Value};
use std::io::Read;
use std::path::Path;
use std::sync::LazyLock;
use std::time::{Duration, Instant};

/// How long a hook waits for its stdin payload before giving up
pub const HOOK_INPUT_TIMEOUT: Duration = Duration::from_secs(3);

/// Upper bound on the buffered stdin payload; anything beyond is drained and dropped
pub const MAX_INPUT_BYTES: u64 = 16 * 1_048_576;

/// Top-level fields recovered from a payload that does not parse
const SALVAGED_FIELDS: &[&str] = &["hook_event_name", "session_id", "cwd", "tool_name"];

/// `tool_input` fields recovered from a payload that does not parse
const SALVAGED_INPUT_FIELDS: &[&str] = &[
    "file_path",
    "notebook_path",
    "command",
    "pattern",
    "path",
    "url",
    "query",
    "description",
    "prompt",
    "subagent_type",
];

/// A complete `"key": "string"` pair in raw JSON text
static STRING_FIELD_RE: LazyLock<Regex> = LazyLock::new(|| {
    // SAFETY: This is a static literal regex pattern; compilation cannot fail.
    #[allow(clippy::expect_used)]
    Regex::new(r#""([A-Za-z_]+)"\s*:\s*"((?:[^"\\]|\\.)*)""#).expect("string field regex")
});

/// Performance threshold in milliseconds - warn if hook exceeds this.
const HOOK_PERF_THRESHOLD_MS: u128 = 100;

/// Everything a hook needs: resolved paths, config, and the session store
#[derive(Debug, Clone)]
pub struct HookContext {
    pub paths: ProjectPaths,
    pub config: MemConfig,
    pub store: SessionStore,
}

impl HookContext {
    /// Resolve paths (enforcing the scope guard) and load the config file
    pub fn load(explicit_root: Option<&Path>) -> Result<Self> {
        let paths = ProjectPaths::resolve(explicit_root)?;
        Ok(Self::for_paths(paths))
    }

    pub fn for_paths(paths: ProjectPaths) -> Self {
        let config = MemConfig::load(&paths.config_path());
        let store = SessionStore::new(&paths.sessions_dir);
        Self {
            paths,
            config,
            store,
        }
    }
}

/// Status object written to stdout for the hook host
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HookOutput {
    #[serde(rename = "continue")]
    pub proceed: bool,
    pub suppress_output: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hook_specific_output: Option<HookSpecificOutput>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HookSpecificOutput {
    pub hook_event_name: String,
    pub additional_context: String,
}

impl HookOutput {
    /// Continue, show nothing
    pub fn quiet() -> Self {
        Self {
            proceed: true,
            suppress_output: true,
            hook_specific_output: None,
        }
    }

    /// Continue and hand `context` to the host for the given event
    pub fn with_context(event: &str, context: String) -> Self {
        Self {
            hook_specific_output: Some(HookSpecificOutput {
                hook_event_name: event.to_string(),
                additional_context: context,
            }),
            ..Self::quiet()
        }
    }
}

/// Read the hook payload from stdin, giving up after [`HOOK_INPUT_TIMEOUT`].
///
/// Returns `None` on timeout, empty input, or input with no usable fields.
pub async fn read_hook_input() -> Result<Option<Value>> {
    read_input_from(std::io::stdin(), HOOK_INPUT_TIMEOUT).await
}

/// Read a payload from `reader` with a deadline and the default size cap.
pub async fn read_input_from<R>(reader: R, timeout: Duration) -> Result<Option<Value>>
where
    R: Read + Send + 'static,
{
    read_input_capped(reader, timeout, MAX_INPUT_BYTES).await
}

/// Read at most `max_bytes` of a payload from `reader` with a deadline.
///
/// The read runs on a detached thread so a silent writer cannot hold the
/// process open past the deadline. Bytes past the cap are drained so the
/// writer never blocks, and invalid UTF-8 (such as a character cut at the cap)
/// is replaced rather than failing the read.
pub async fn read_input_capped<R>(
    mut reader: R,
    timeout: Duration,
    max_bytes: u64,
) -> Result<Option<Value>>
where
    R: Read + Send + 'static,
{
    let (tx, rx) = tokio::sync::oneshot::channel();
    std::thread::spawn(move || {
        let mut buf = Vec::new();
        let result = (&mut reader)
            .take(max_bytes)
            .read_to_end(&mut buf)
            .and_then(|_| std::io::copy(&mut reader, &mut std::io::sink()))
            .map(|dropped| (String::from_utf8_lossy(&buf).into_owned(), dropped));
        let _ = tx.send(result);
    });

    match tokio::time::timeout(timeout, rx).await {
        Ok(Ok(Ok((input, dropped)))) => {
            if dropped > 0 {
                tracing::warn!(
                    "[mem-hooks] Hook input over {} bytes, {} bytes dropped",
                    max_bytes,
                    dropped
                );
            }
            Ok(parse_hook_input(&input))
        }
        Ok(Ok(Err(e))) => Err(e.into()),
        Ok(Err(_)) => Ok(None),
        Err(_) => {
            tracing::warn!(
                "[mem-hooks] No hook input within {}s, skipping",
                timeout.as_secs()
            );
            Ok(None)
        }
    }
}

/// Parse the payload: a single JSON object, the first object line of
/// line-delimited JSON, or whatever string fields survive in a cut-off object.
pub fn parse_hook_input(input: &str) -> Option<Value> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(value) = serde_json::from_str::<Value>(trimmed)
        && value.is_object()
    {
        return Some(value);
    }
    trimmed
        .lines()
        .filter(|l| !l.trim().is_empty())
        .find_map(|l| serde_json::from_str::<Value>(l).ok().filter(|v| v.is_object()))
        .or_else(|| salvage_hook_input(trimmed))
}

/// Recover `tool_name` and the identifying `tool_input` strings from a payload
/// that does not parse. The first occurrence of each key wins, which is the
/// copy in `tool_input` since the host writes it before the tool response.
pub fn salvage_hook_input(input: &str) -> Option<Value> {
    let mut top = Map::new();
    let mut tool_input = Map::new();

    for caps in STRING_FIELD_RE.captures_iter(input) {
        let (Some(key), Some(raw)) = (caps.get(1), caps.get(2)) else {
            continue;
        };
        let key = key.as_str();
        let target = if SALVAGED_FIELDS.contains(&key) {
            &mut top
        } else if SALVAGED_INPUT_FIELDS.contains(&key) {
            &mut tool_input
        } else {
            continue;
        };
        if target.contains_key(key) {
            continue;
        }
        if let Ok(value) = serde_json::from_str::<String>(&format!("\"{}\"", raw.as_str())) {
            target.insert(key.to_string(), Value::String(value));
        }
    }

    if !top.contains_key("tool_name") {
        return None;
    }
    tracing::debug!("[mem-hooks] Salvaged fields from unparseable hook input");
    top.insert("tool_input".to_string(), Value::Object(tool_input));
    Some(Value::Object(top))
}

/// Write hook output to stdout
pub fn write_hook_output(output: &HookOutput) {
    use std::io::Write;
    match serde_json::to_string(output) {
        Ok(s) => {
            let _ = writeln!(std::io::stdout(), "{}", s);
        }
        Err(e) => {
            eprintln!("Failed to serialize hook output: {}", e);
            let _ = writeln!(std::io::stdout(), "{{\"continue\":true}}");
        }
    }
}

/// Timer guard for hook performance monitoring
/// Logs execution time to stderr on drop
pub struct HookTimer {
    hook_name: &'static str,
    start: Instant,
}

impl HookTimer {
    /// Start timing a hook
    pub fn start(hook_name: &'static str) -> Self {
        Self {
            hook_name,
            start: Instant::now(),
        }
    }
}

impl Drop for HookTimer {
    fn drop(&mut self) {
        let elapsed = self.start.elapsed().as_millis();
        if elapsed > HOOK_PERF_THRESHOLD_MS {
            tracing::warn!(
                "[mem-hooks] PERF: {} hook took {}ms (threshold: {}ms)",
                self.hook_name,
                elapsed,
                HOOK_PERF_THRESHOLD_MS
            );
        } else {
            tracing::debug!("[mem-hooks] {} hook completed in {}ms", self.hook_name, elapsed);
        }
    }
}
