//! AppleScript execution against Things 3 via `osascript`.

use std::io;
use std::path::PathBuf;
use std::process::Stdio;

use serde::de::DeserializeOwned;
use tokio::process::Command;

use crate::config::AutomationConfig;
use crate::error::{AutomationError, Result};
use crate::records::{Area, CompletionOutcome, Project, Todo};

const SCRIPT_EXT: &str = ".applescript";

/// Runs AppleScript programs against Things 3.
///
/// Query methods run a named script file and parse its JSON output; any
/// failure on that path is logged and degraded to an empty list so a view
/// never surfaces a raw error. Mutation methods build an inline script with
/// fully-escaped string literals and degrade to `false` on failure.
#[derive(Debug, Clone)]
pub struct AppleScriptHandler {
    config: AutomationConfig,
}

impl AppleScriptHandler {
    pub fn new(config: AutomationConfig) -> Self {
        Self { config }
    }

    /// Execute inline AppleScript source and return its trimmed stdout.
    pub async fn run_script(&self, source: &str) -> Result<String> {
        let mut cmd = Command::new(&self.config.osascript_bin);
        cmd.arg("-e")
            .arg(source)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let output = tokio::time::timeout(self.config.script_timeout, cmd.output())
            .await
            .map_err(|_| AutomationError::Timeout(self.config.script_timeout))?
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => AutomationError::PlatformUnsupported("osascript"),
                _ => AutomationError::Io(e),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(AutomationError::ExecutionFailed { stderr });
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    /// Execute a named script file from the configured directory.
    ///
    /// The `.applescript` extension is appended when absent.
    pub async fn run_script_file(&self, name: &str) -> Result<String> {
        let path = self.resolve_script(name);
        if !path.is_file() {
            return Err(AutomationError::ScriptNotFound(path));
        }
        let source = tokio::fs::read_to_string(&path).await?;
        self.run_script(&source).await
    }

    fn resolve_script(&self, name: &str) -> PathBuf {
        let file = if name.ends_with(SCRIPT_EXT) {
            name.to_string()
        } else {
            format!("{name}{SCRIPT_EXT}")
        };
        self.config.scripts_dir.join(file)
    }

    /// Todos in the Inbox list.
    pub async fn inbox_tasks(&self) -> Vec<Todo> {
        self.query("get_inbox", "inbox tasks").await
    }

    /// Todos in the Today list.
    pub async fn today_tasks(&self) -> Vec<Todo> {
        self.query("get_today", "today's tasks").await
    }

    /// Todos in the Anytime list.
    pub async fn anytime_tasks(&self) -> Vec<Todo> {
        self.query("get_anytime", "anytime tasks").await
    }

    /// Todos in the Someday list.
    pub async fn someday_tasks(&self) -> Vec<Todo> {
        self.query("get_someday", "someday tasks").await
    }

    /// All projects.
    pub async fn projects(&self) -> Vec<Project> {
        self.query("get_projects", "projects").await
    }

    /// All areas.
    pub async fn areas(&self) -> Vec<Area> {
        self.query("get_areas", "areas").await
    }

    /// Todos currently selected in the Things 3 UI.
    pub async fn selected_todos(&self) -> Vec<Todo> {
        self.query("get_selected", "selected todos").await
    }

    /// Move every todo matching `task` into `project`. Returns false on any
    /// failure (logged).
    pub async fn assign_project(&self, task: &str, project: &str) -> bool {
        let script = format!(
            r#"tell application "Things3"
    set foundTodos to to dos where name is "{task}"
    repeat with t in foundTodos
        set project of t to project "{project}"
    end repeat
end tell"#,
            task = escape_applescript(task),
            project = escape_applescript(project),
        );
        let ok = self.mutate(&script, "assign project").await;
        if ok {
            log::info!("assigned project '{project}' to task '{task}'");
        }
        ok
    }

    /// Move every todo matching `task` into `area`. Returns false on any
    /// failure (logged).
    pub async fn assign_area(&self, task: &str, area: &str) -> bool {
        let script = format!(
            r#"tell application "Things3"
    set foundTodos to to dos where name is "{task}"
    repeat with t in foundTodos
        set area of t to area "{area}"
    end repeat
end tell"#,
            task = escape_applescript(task),
            area = escape_applescript(area),
        );
        let ok = self.mutate(&script, "assign area").await;
        if ok {
            log::info!("assigned area '{area}' to task '{task}'");
        }
        ok
    }

    /// Replace the tag set on every todo matching `task`.
    pub async fn set_tags(&self, task: &str, tags: &[String]) -> bool {
        let tag_list = tags
            .iter()
            .map(|tag| format!("\"{}\"", escape_applescript(tag)))
            .collect::<Vec<_>>()
            .join(", ");
        let script = format!(
            r#"tell application "Things3"
    set foundTodos to to dos where name is "{task}"
    repeat with t in foundTodos
        set tag names of t to {{{tag_list}}}
    end repeat
end tell"#,
            task = escape_applescript(task),
        );
        let ok = self.mutate(&script, "set tags").await;
        if ok {
            log::info!("set tags {tags:?} for task '{task}'");
        }
        ok
    }

    /// Complete every todo currently selected in the Things 3 UI.
    pub async fn complete_selected_todos(&self) -> CompletionOutcome {
        match self.try_complete_selected().await {
            Ok(outcome) => {
                if outcome.success {
                    log::info!("completed selected todos: {:?}", outcome.message);
                } else {
                    log::warn!("failed to complete selected todos: {:?}", outcome.message);
                }
                outcome
            }
            Err(err) => {
                log::error!("failed to complete selected todos: {err}");
                CompletionOutcome::failure(err.to_string())
            }
        }
    }

    async fn try_complete_selected(&self) -> Result<CompletionOutcome> {
        let raw = self.run_script_file("complete_selected").await?;
        if raw.is_empty() {
            return Ok(CompletionOutcome::no_response());
        }
        Ok(serde_json::from_str(&raw)?)
    }

    async fn query<T: DeserializeOwned>(&self, script: &str, what: &str) -> Vec<T> {
        match self.try_query(script).await {
            Ok(records) => records,
            Err(err) => {
                // Deliberate swallow-and-degrade: a view must never surface
                // a raw automation failure.
                log::error!("failed to get {what}: {err}");
                Vec::new()
            }
        }
    }

    async fn try_query<T: DeserializeOwned>(&self, script: &str) -> Result<Vec<T>> {
        let raw = self.run_script_file(script).await?;
        if raw.is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&raw)?)
    }
}

/// Escape a value for interpolation into an AppleScript string literal.
///
/// Covers every character significant to the quoted-string grammar, so an
/// interpolated task or project name cannot terminate the literal early.
pub fn escape_applescript(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\0' => {}
            _ => out.push(ch),
        }
    }
    out
}
