// src/observation/format.rs
// Observation formatter: one tool invocation in, at most one markdown line out

use super::{Observation, UNKNOWN};
use crate::config::CaptureConfig;
use crate::utils::{base_name, first_line, truncate};
use chrono::NaiveTime;
use serde_json::Value;

/// Max characters kept from a shell command
const COMMAND_MAX_CHARS: usize = 60;
/// Max characters kept from a search pattern
const PATTERN_MAX_CHARS: usize = 40;
/// Max characters kept from a URL or web query
const WEB_MAX_CHARS: usize = 60;
/// Max characters kept from a subagent description
const TASK_MAX_CHARS: usize = 50;
/// Outputs longer than this many lines are summarized by line count
const LARGE_OUTPUT_LINES: usize = 20;

/// Case-insensitive substrings that mark an output as failed
const ERROR_PATTERNS: &[&str] = &[
    "error",
    "failed",
    "exception",
    "fatal",
    "traceback",
    "panicked",
    "command not found",
    "permission denied",
    "enoent",
];

/// Tools whose output is, or echoes, file or web content rather than a status
/// report. Their text is never scanned for error words; only explicit error
/// flags count.
const CONTENT_TOOLS: &[&str] = &[
    "Read",
    "Write",
    "Edit",
    "MultiEdit",
    "NotebookEdit",
    "Grep",
    "Glob",
    "LS",
    "WebFetch",
    "WebSearch",
];

/// Leading program -> category tag for shell commands
const COMMAND_TAGS: &[(&[&str], &str)] = &[
    (
        &["npm", "yarn", "pnpm", "npx", "bun", "pip", "pip3", "uv", "poetry", "cargo"],
        "Package",
    ),
    (&["git", "gh"], "Git"),
    (&["docker", "docker-compose", "podman"], "Docker"),
    (&["pytest", "jest", "vitest", "mocha"], "Test"),
    (&["make", "tsc", "cmake"], "Build"),
    (
        &["ls", "cat", "find", "mkdir", "rm", "cp", "mv", "touch", "chmod"],
        "FS",
    ),
];

/// One tool invocation as delivered by the hook host on stdin
#[derive(Debug, Clone, Default)]
pub struct ToolEvent {
    pub hook_event_name: Option<String>,
    pub session_id: Option<String>,
    pub cwd: Option<String>,
    pub tool_name: Option<String>,
    pub tool_input: Value,
    pub tool_output: Option<Value>,
    pub tool_response: Option<Value>,
    pub tool_result: Option<Value>,
}

impl ToolEvent {
    /// Field-by-field extraction; a mistyped field is dropped on its own
    pub fn from_json(json: &Value) -> Self {
        let text = |key: &str| json.get(key).and_then(|v| v.as_str()).map(String::from);
        let value = |key: &str| json.get(key).filter(|v| !v.is_null()).cloned();
        Self {
            hook_event_name: text("hook_event_name"),
            session_id: text("session_id"),
            cwd: text("cwd"),
            tool_name: text("tool_name"),
            tool_input: value("tool_input").unwrap_or(Value::Null),
            tool_output: value("tool_output"),
            tool_response: value("tool_response"),
            tool_result: value("tool_result"),
        }
    }

    fn input_str(&self, key: &str) -> Option<&str> {
        self.tool_input
            .get(key)
            .and_then(|v| v.as_str())
            .filter(|s| !s.trim().is_empty())
    }

    fn output_value(&self) -> Option<&Value> {
        [&self.tool_output, &self.tool_response, &self.tool_result]
            .into_iter()
            .flatten()
            .find(|v| !v.is_null())
    }

    /// Textual form of whatever the tool returned
    pub fn output_text(&self) -> Option<String> {
        self.output_value()
            .and_then(value_text)
            .filter(|s| !s.is_empty())
    }

    /// Whether the host flagged the call itself as failed
    pub fn reported_error(&self) -> bool {
        let Some(output) = self.output_value() else {
            return false;
        };
        let flag = |key: &str| output.get(key).and_then(|v| v.as_bool());
        flag("is_error") == Some(true)
            || flag("isError") == Some(true)
            || flag("success") == Some(false)
    }

    fn output_count(&self, keys: &[&str]) -> Option<u64> {
        let output = self.output_value()?;
        keys.iter().find_map(|k| match output.get(*k)? {
            Value::Number(n) => n.as_u64(),
            Value::Array(items) => Some(items.len() as u64),
            _ => None,
        })
    }
}

/// Formatter result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Formatted {
    Line(String),
    /// Category is on the skip-list; nothing is written
    Suppressed,
}

impl Formatted {
    pub fn line(&self) -> Option<&str> {
        match self {
            Formatted::Line(l) => Some(l),
            Formatted::Suppressed => None,
        }
    }
}

/// Format one tool invocation at local time `now`.
pub fn format_observation(event: &ToolEvent, now: NaiveTime, capture: &CaptureConfig) -> Formatted {
    let tool = event
        .tool_name
        .as_deref()
        .filter(|t| !t.trim().is_empty())
        .unwrap_or(UNKNOWN);

    if capture.is_skipped(tool) {
        return Formatted::Suppressed;
    }

    let mut obs = Observation {
        time: now,
        icon: None,
        label: tool.to_string(),
        resource: None,
        tag: None,
        summary: None,
        error: false,
    };

    match tool {
        "Read" | "Write" | "Edit" | "MultiEdit" | "NotebookEdit" => {
            let (icon, label) = match tool {
                "Read" => ("📖", "Read"),
                "Write" => ("📝", "Write"),
                "NotebookEdit" => ("📓", "Notebook"),
                _ => ("✏️", "Edit"),
            };
            let path = event
                .input_str("file_path")
                .or_else(|| event.input_str("notebook_path"));
            obs.icon = Some(icon);
            obs.label = label.to_string();
            obs.resource = Some(path.map(base_name).unwrap_or(UNKNOWN).to_string());
            obs.tag = path.and_then(file_tag).map(String::from);
        }
        "Bash" => {
            let command = event.input_str("command").map(first_line);
            obs.icon = Some("💻");
            obs.resource = Some(
                command
                    .map(|c| truncate(c, COMMAND_MAX_CHARS))
                    .unwrap_or_else(|| UNKNOWN.to_string()),
            );
            obs.tag = event
                .input_str("command")
                .and_then(command_tag)
                .map(String::from);
        }
        "Grep" => {
            obs.icon = Some("🔍");
            obs.resource = Some(truncated_or_unknown(event.input_str("pattern"), PATTERN_MAX_CHARS));
            obs.summary = event
                .output_count(&["numMatches", "numLines", "numFiles"])
                .or_else(|| event.output_text().map(|t| count_lines(&t) as u64))
                .map(|n| format!("{} matches", n));
        }
        "Glob" => {
            obs.icon = Some("📂");
            obs.resource = Some(truncated_or_unknown(event.input_str("pattern"), PATTERN_MAX_CHARS));
            obs.summary = event
                .output_count(&["numFiles", "filenames"])
                .or_else(|| event.output_text().map(|t| count_lines(&t) as u64))
                .map(|n| format!("{} files", n));
        }
        "LS" => {
            obs.icon = Some("📁");
            obs.resource = Some(event.input_str("path").map(base_name).unwrap_or(UNKNOWN).to_string());
        }
        "WebFetch" => {
            obs.icon = Some("🌐");
            obs.label = "Fetch".to_string();
            obs.resource = Some(
                event
                    .input_str("url")
                    .map(|u| truncate(&url_display(u), WEB_MAX_CHARS))
                    .unwrap_or_else(|| UNKNOWN.to_string()),
            );
        }
        "WebSearch" => {
            obs.icon = Some("🔎");
            obs.label = "Search".to_string();
            obs.resource = Some(truncated_or_unknown(event.input_str("query"), WEB_MAX_CHARS));
        }
        "Task" => {
            obs.icon = Some("🤖");
            let description = event
                .input_str("description")
                .or_else(|| event.input_str("prompt"))
                .map(first_line);
            obs.resource = Some(truncated_or_unknown(description, TASK_MAX_CHARS));
            obs.tag = event.input_str("subagent_type").map(String::from);
        }
        t if t.starts_with("mcp__") => {
            obs.icon = Some("🔌");
            obs.label = "MCP".to_string();
            obs.resource = Some(mcp_resource(t));
        }
        // Unrecognized categories keep only time and name
        _ => return Formatted::Line(obs.render()),
    }

    if let Some(text) = event.output_text() {
        if !CONTENT_TOOLS.contains(&tool) && has_error_pattern(&text) {
            obs.error = true;
        }
        let lines = count_lines(&text);
        if obs.summary.is_none() && lines > LARGE_OUTPUT_LINES {
            obs.summary = Some(format!("{} lines", lines));
        }
    }
    if event.reported_error() {
        obs.error = true;
    }

    Formatted::Line(obs.render())
}

fn truncated_or_unknown(value: Option<&str>, max_chars: usize) -> String {
    value
        .map(|v| truncate(first_line(v), max_chars))
        .unwrap_or_else(|| UNKNOWN.to_string())
}

/// Language/kind tag from a file extension
fn file_tag(path: &str) -> Option<&'static str> {
    let name = base_name(path);
    let (_, ext) = name.rsplit_once('.')?;
    let tag = match ext.to_ascii_lowercase().as_str() {
        "ts" => "TS",
        "tsx" => "TSX",
        "js" | "mjs" | "cjs" => "JS",
        "jsx" => "JSX",
        "rs" => "Rust",
        "py" => "Python",
        "go" => "Go",
        "md" => "Docs",
        "json" => "JSON",
        "toml" | "yaml" | "yml" => "Config",
        "css" | "scss" => "CSS",
        "html" => "HTML",
        "sh" => "Shell",
        "sql" => "SQL",
        _ => return None,
    };
    Some(tag)
}

/// Tag for the first recognized program in a (possibly chained) command
fn command_tag(command: &str) -> Option<&'static str> {
    command
        .split(['&', ';', '|', '\n'])
        .filter_map(|segment| {
            segment
                .split_whitespace()
                .find(|tok| !tok.contains('=') && *tok != "sudo")
        })
        .find_map(|program| {
            let program = base_name(program);
            COMMAND_TAGS
                .iter()
                .find(|(programs, _)| programs.contains(&program))
                .map(|(_, tag)| *tag)
        })
}

/// `host/path` for a URL, the raw string when it does not parse
fn url_display(raw: &str) -> String {
    match url::Url::parse(raw) {
        Ok(url) => match url.host_str() {
            Some(host) => format!("{}{}", host, url.path().trim_end_matches('/')),
            None => raw.to_string(),
        },
        Err(_) => raw.to_string(),
    }
}

/// `mcp__server__tool` -> `server/tool`
fn mcp_resource(tool: &str) -> String {
    let rest = tool.trim_start_matches("mcp__");
    match rest.split_once("__") {
        Some((server, name)) => format!("{}/{}", server, name),
        None => rest.to_string(),
    }
}

fn has_error_pattern(text: &str) -> bool {
    let lower = text.to_lowercase();
    ERROR_PATTERNS.iter().any(|p| lower.contains(p))
}

fn count_lines(text: &str) -> usize {
    text.lines().filter(|l| !l.trim().is_empty()).count()
}

/// Flatten a tool response into text.
///
/// Structured responses without a recognizable text field yield nothing, so
/// JSON keys such as `"is_error": false` are never mistaken for output.
fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(_) | Value::Number(_) => Some(value.to_string()),
        Value::Array(items) => {
            let texts: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("text").and_then(|t| t.as_str()))
                .collect();
            (!texts.is_empty()).then(|| texts.join("\n"))
        }
        Value::Object(obj) => {
            let parts: Vec<&str> = ["stdout", "stderr", "output", "content", "error", "result"]
                .iter()
                .filter_map(|k| obj.get(*k).and_then(|v| v.as_str()))
                .filter(|s| !s.is_empty())
                .collect();
            if !parts.is_empty() {
                return Some(parts.join("\n"));
            }
            obj.get("file")
                .and_then(|f| f.get("content"))
                .and_then(|c| c.as_str())
                .map(String::from)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn event(json: Value) -> ToolEvent {
        ToolEvent::from_json(&json)
    }

    fn format_at(json: Value, h: u32, m: u32) -> Formatted {
        format_observation(&event(json), at(h, m), &CaptureConfig::default())
    }

    // ============================================================================
    // File tools
    // ============================================================================

    #[test]
    fn test_read_typescript_file() {
        let out = format_at(
            json!({"tool_name": "Read", "tool_input": {"file_path": "/repo/src/app.ts"}}),
            14,
            3,
        );
        assert_eq!(out, Formatted::Line("- **14:03** | 📖 Read | `app.ts` [TS]".to_string()));
    }

    #[test]
    fn test_read_content_with_error_word_is_not_flagged() {
        let out = format_at(
            json!({
                "tool_name": "Read",
                "tool_input": {"file_path": "/repo/src/error.rs"},
                "tool_response": {"type": "text", "file": {"content": "pub enum Error {}"}}
            }),
            10,
            0,
        );
        let line = out.line().unwrap().to_string();
        assert_eq!(line, "- **10:00** | 📖 Read | `error.rs` [Rust]");
    }

    #[test]
    fn test_write_echoing_error_word_is_not_flagged() {
        let out = format_at(
            json!({
                "tool_name": "Write",
                "tool_input": {"file_path": "/repo/src/error.rs", "content": "pub enum Error {}"},
                "tool_response": {"type": "create", "filePath": "/repo/src/error.rs", "content": "pub enum Error {}"}
            }),
            10,
            0,
        );
        assert_eq!(out.line(), Some("- **10:00** | 📝 Write | `error.rs` [Rust]"));
    }

    #[test]
    fn test_edit_echoing_original_file_is_not_flagged() {
        let out = format_at(
            json!({
                "tool_name": "Edit",
                "tool_input": {"file_path": "handler.py", "old_string": "a", "new_string": "b"},
                "tool_response": {"filePath": "handler.py", "originalFile": "raise Exception('failed')", "content": "except Exception:"}
            }),
            10,
            1,
        );
        assert_eq!(out.line(), Some("- **10:01** | ✏️ Edit | `handler.py` [Python]"));
    }

    #[test]
    fn test_write_explicit_failure_still_flagged() {
        let out = format_at(
            json!({"tool_name": "Write", "tool_input": {"file_path": "a.rs"}, "tool_response": {"success": false}}),
            10,
            2,
        );
        assert_eq!(out.line(), Some("- **10:02** | 📝 Write | `a.rs` [Rust] [⚠️ error]"));
    }

    #[test]
    fn test_large_read_summarizes_line_count() {
        let content: String = (0..45).map(|i| format!("line {}\n", i)).collect();
        let out = format_at(
            json!({
                "tool_name": "Read",
                "tool_input": {"file_path": "/repo/README.md"},
                "tool_response": {"file": {"content": content}}
            }),
            8,
            15,
        );
        assert_eq!(out.line(), Some("- **08:15** | 📖 Read | `README.md` [Docs] (45 lines)"));
    }

    #[test]
    fn test_edit_and_multiedit_share_label() {
        let edit = format_at(json!({"tool_name": "Edit", "tool_input": {"file_path": "a/b/lib.rs"}}), 9, 0);
        let multi = format_at(json!({"tool_name": "MultiEdit", "tool_input": {"file_path": "lib.rs"}}), 9, 0);
        assert_eq!(edit, multi);
        assert_eq!(edit.line(), Some("- **09:00** | ✏️ Edit | `lib.rs` [Rust]"));
    }

    #[test]
    fn test_write_unknown_extension_has_no_tag() {
        let out = format_at(json!({"tool_name": "Write", "tool_input": {"file_path": "/x/Makefile"}}), 9, 1);
        assert_eq!(out.line(), Some("- **09:01** | 📝 Write | `Makefile`"));
    }

    #[test]
    fn test_notebook_edit_uses_notebook_path() {
        let out = format_at(
            json!({"tool_name": "NotebookEdit", "tool_input": {"notebook_path": "/nb/analysis.ipynb"}}),
            9,
            2,
        );
        assert_eq!(out.line(), Some("- **09:02** | 📓 Notebook | `analysis.ipynb`"));
    }

    #[test]
    fn test_missing_file_path_renders_unknown() {
        let out = format_at(json!({"tool_name": "Read"}), 7, 7);
        assert_eq!(out.line(), Some("- **07:07** | 📖 Read | `unknown`"));
    }

    // ============================================================================
    // Bash
    // ============================================================================

    #[test]
    fn test_bash_npm_test_passed() {
        let out = format_at(
            json!({"tool_name": "Bash", "tool_input": {"command": "npm test"}, "tool_output": "5 passed"}),
            9,
            10,
        );
        let line = out.line().unwrap();
        assert!(line.contains("Bash"));
        assert!(line.contains("`npm test`"));
        assert!(line.contains("[Package]"));
        assert!(!line.contains("error"));
        assert_eq!(line, "- **09:10** | 💻 Bash | `npm test` [Package]");
    }

    #[test]
    fn test_bash_failure_output_is_flagged() {
        let out = format_at(
            json!({
                "tool_name": "Bash",
                "tool_input": {"command": "cargo build"},
                "tool_response": {"stdout": "", "stderr": "error[E0308]: mismatched types"}
            }),
            11,
            0,
        );
        assert_eq!(out.line(), Some("- **11:00** | 💻 Bash | `cargo build` [Package] [⚠️ error]"));
    }

    #[test]
    fn test_bash_error_match_is_case_insensitive() {
        let out = format_at(
            json!({"tool_name": "Bash", "tool_input": {"command": "./run.sh"}, "tool_output": "Traceback (most recent call last)"}),
            11,
            1,
        );
        assert!(out.line().unwrap().ends_with("[⚠️ error]"));
    }

    #[test]
    fn test_bash_long_command_truncated() {
        let cmd = format!("echo {}", "x".repeat(100));
        let out = format_at(json!({"tool_name": "Bash", "tool_input": {"command": cmd}}), 12, 0);
        let line = out.line().unwrap();
        let expected = format!("`echo {}...`", "x".repeat(55));
        assert!(line.contains(&expected), "line was {}", line);
    }

    #[test]
    fn test_bash_multiline_command_keeps_first_line() {
        let out = format_at(
            json!({"tool_name": "Bash", "tool_input": {"command": "git status\ngit diff"}}),
            12,
            1,
        );
        assert_eq!(out.line(), Some("- **12:01** | 💻 Bash | `git status` [Git]"));
    }

    #[test]
    fn test_command_tag_chained() {
        assert_eq!(command_tag("cd web && npm run build"), Some("Package"));
        assert_eq!(command_tag("RUST_LOG=debug cargo test"), Some("Package"));
        assert_eq!(command_tag("sudo docker ps"), Some("Docker"));
        assert_eq!(command_tag("/usr/bin/git log"), Some("Git"));
        assert_eq!(command_tag("echo hi"), None);
    }

    #[test]
    fn test_bash_large_output_line_count() {
        let output: String = (0..30).map(|i| format!("ok {}\n", i)).collect();
        let out = format_at(
            json!({"tool_name": "Bash", "tool_input": {"command": "ls -la"}, "tool_output": output}),
            13,
            0,
        );
        assert_eq!(out.line(), Some("- **13:00** | 💻 Bash | `ls -la` [FS] (30 lines)"));
    }

    #[test]
    fn test_reported_error_flag() {
        let out = format_at(
            json!({"tool_name": "Bash", "tool_input": {"command": "true"}, "tool_response": {"is_error": true}}),
            13,
            1,
        );
        assert!(out.line().unwrap().ends_with("[⚠️ error]"));
    }

    // ============================================================================
    // Search and web tools
    // ============================================================================

    #[test]
    fn test_grep_match_count_from_output() {
        let out = format_at(
            json!({"tool_name": "Grep", "tool_input": {"pattern": "fn main"}, "tool_output": "a.rs:1\nb.rs:4\n\n"}),
            15,
            0,
        );
        assert_eq!(out.line(), Some("- **15:00** | 🔍 Grep | `fn main` (2 matches)"));
    }

    #[test]
    fn test_grep_error_word_in_matches_not_flagged() {
        let out = format_at(
            json!({"tool_name": "Grep", "tool_input": {"pattern": "Error"}, "tool_response": {"numFiles": 3, "content": "error.rs"}}),
            15,
            1,
        );
        assert_eq!(out.line(), Some("- **15:01** | 🔍 Grep | `Error` (3 matches)"));
    }

    #[test]
    fn test_glob_file_count_from_filenames() {
        let out = format_at(
            json!({"tool_name": "Glob", "tool_input": {"pattern": "**/*.rs"}, "tool_response": {"filenames": ["a.rs", "b.rs"]}}),
            15,
            2,
        );
        assert_eq!(out.line(), Some("- **15:02** | 📂 Glob | `**/*.rs` (2 files)"));
    }

    #[test]
    fn test_web_fetch_shows_host_and_path() {
        let out = format_at(
            json!({"tool_name": "WebFetch", "tool_input": {"url": "https://docs.rs/regex/latest/"}}),
            16,
            0,
        );
        assert_eq!(out.line(), Some("- **16:00** | 🌐 Fetch | `docs.rs/regex/latest`"));
    }

    #[test]
    fn test_web_search_query() {
        let out = format_at(json!({"tool_name": "WebSearch", "tool_input": {"query": "tokio timeout"}}), 16, 1);
        assert_eq!(out.line(), Some("- **16:01** | 🔎 Search | `tokio timeout`"));
    }

    #[test]
    fn test_task_with_subagent() {
        let out = format_at(
            json!({"tool_name": "Task", "tool_input": {"description": "Review auth flow", "subagent_type": "code-reviewer"}}),
            17,
            0,
        );
        assert_eq!(out.line(), Some("- **17:00** | 🤖 Task | `Review auth flow` [code-reviewer]"));
    }

    #[test]
    fn test_mcp_tool() {
        let out = format_at(json!({"tool_name": "mcp__github__create_issue", "tool_input": {}}), 17, 5);
        assert_eq!(out.line(), Some("- **17:05** | 🔌 MCP | `github/create_issue`"));
    }

    // ============================================================================
    // Fallbacks
    // ============================================================================

    #[test]
    fn test_skip_list_suppresses() {
        let out = format_at(json!({"tool_name": "TodoWrite", "tool_input": {"todos": []}}), 10, 0);
        assert_eq!(out, Formatted::Suppressed);
        assert!(out.line().is_none());
    }

    #[test]
    fn test_unrecognized_tool_minimal_line() {
        let out = format_at(json!({"tool_name": "Frobnicate", "tool_input": {"x": 1}}), 10, 0);
        assert_eq!(out.line(), Some("- **10:00** | Frobnicate"));
    }

    #[test]
    fn test_missing_tool_name_renders_unknown() {
        let out = format_at(json!({}), 10, 0);
        assert_eq!(out.line(), Some("- **10:00** | unknown"));
    }

    #[test]
    fn test_mistyped_metadata_keeps_tool_fields() {
        let out = format_at(
            json!({
                "session_id": 42,
                "cwd": ["not", "a", "string"],
                "tool_name": "Read",
                "tool_input": {"file_path": "/repo/main.go"}
            }),
            10,
            0,
        );
        assert_eq!(out.line(), Some("- **10:00** | 📖 Read | `main.go` [Go]"));
    }

    #[test]
    fn test_every_line_parses_back() {
        let events = [
            json!({"tool_name": "Read", "tool_input": {"file_path": "/a/b.py"}}),
            json!({"tool_name": "Bash", "tool_input": {"command": "ls | grep `x`"}}),
            json!({"tool_name": "Grep", "tool_input": {"pattern": "a|b"}}),
            json!({"tool_name": "Task", "tool_input": {}}),
            json!({"tool_name": "Other"}),
            json!({"tool_name": "My|Tool"}),
            json!({"tool_name": "Multi\nLine"}),
            json!({"tool_name": "Task", "tool_input": {"description": "split", "subagent_type": "a\nb|c"}}),
            json!({"tool_name": "Read", "tool_input": {"file_path": "/x/we`ird\nname.rs"}}),
        ];
        for e in events {
            let line = format_at(e, 21, 45).line().unwrap().to_string();
            assert_eq!(line.lines().count(), 1, "{:?}", line);
            let parsed = super::super::ParsedLine::parse(&line).expect(&line);
            assert_eq!(parsed.time, "21:45");
        }
    }

    #[test]
    fn test_pipe_in_tool_name_is_replaced() {
        let out = format_at(json!({"tool_name": "My|Tool"}), 10, 0);
        assert_eq!(out.line(), Some("- **10:00** | My/Tool"));
    }
}
