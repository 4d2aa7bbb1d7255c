//! Item creation through the `things:///` x-callback-url scheme.

use std::io;
use std::process::Stdio;

use tokio::process::Command;

use crate::config::AutomationConfig;
use crate::error::{AutomationError, Result};

const ADD_PROJECT_URL: &str = "things:///add-project";
const ADD_TODO_URL: &str = "things:///add";

/// Fields for a new project. Absent options are omitted from the URL
/// entirely, never sent as empty values.
#[derive(Debug, Clone, Default)]
pub struct NewProject {
    pub title: String,
    pub notes: Option<String>,
    pub area: Option<String>,
    pub when: Option<String>,
    pub deadline: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// Fields for a new todo. Same omission rule as [`NewProject`].
#[derive(Debug, Clone, Default)]
pub struct NewTodo {
    pub title: String,
    pub notes: Option<String>,
    pub when: Option<String>,
    pub deadline: Option<String>,
    pub checklist_items: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
    pub list: Option<String>,
    pub heading: Option<String>,
}

/// Triggers Things 3 create actions by handing percent-encoded
/// x-callback-urls to the OS document-open facility.
#[derive(Debug, Clone)]
pub struct XCallbackHandler {
    config: AutomationConfig,
}

impl XCallbackHandler {
    pub fn new(config: AutomationConfig) -> Self {
        Self { config }
    }

    /// Create a project. Returns false on any failure (logged).
    pub async fn create_project(&self, project: &NewProject) -> bool {
        let url = project_url(project);
        match self.call_url(&url).await {
            Ok(()) => {
                log::info!("created project: {}", project.title);
                true
            }
            Err(err) => {
                log::error!("failed to create project '{}': {err}", project.title);
                false
            }
        }
    }

    /// Create a todo. Returns false on any failure (logged).
    pub async fn create_todo(&self, todo: &NewTodo) -> bool {
        let url = todo_url(todo);
        match self.call_url(&url).await {
            Ok(()) => {
                log::info!("created todo: {}", todo.title);
                true
            }
            Err(err) => {
                log::error!("failed to create todo '{}': {err}", todo.title);
                false
            }
        }
    }

    /// Hand a URL to the document-open facility, bounded by the callback
    /// timeout. A missing `open` binary means the host is not macOS.
    pub async fn call_url(&self, url: &str) -> Result<()> {
        let mut cmd = Command::new(&self.config.open_bin);
        cmd.arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let output = tokio::time::timeout(self.config.open_timeout, cmd.output())
            .await
            .map_err(|_| AutomationError::Timeout(self.config.open_timeout))?
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => AutomationError::PlatformUnsupported("open"),
                _ => AutomationError::Io(e),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(AutomationError::ExecutionFailed { stderr });
        }
        log::debug!("opened x-callback url: {url}");
        Ok(())
    }
}

/// Join `key=value` pairs in insertion order, percent-encoding each value.
/// Returns `base` unchanged when there are no parameters.
pub fn build_url(base: &str, params: &[(&str, String)]) -> String {
    if params.is_empty() {
        return base.to_string();
    }
    let encoded: Vec<String> = params
        .iter()
        .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
        .collect();
    format!("{base}?{}", encoded.join("&"))
}

fn project_url(project: &NewProject) -> String {
    let mut params = vec![("title", project.title.clone())];
    push_opt(&mut params, "notes", &project.notes);
    push_opt(&mut params, "area", &project.area);
    push_opt(&mut params, "when", &project.when);
    push_opt(&mut params, "deadline", &project.deadline);
    push_joined(&mut params, "tags", &project.tags, ",");
    build_url(ADD_PROJECT_URL, &params)
}

fn todo_url(todo: &NewTodo) -> String {
    let mut params = vec![("title", todo.title.clone())];
    push_opt(&mut params, "notes", &todo.notes);
    push_opt(&mut params, "when", &todo.when);
    push_opt(&mut params, "deadline", &todo.deadline);
    push_joined(&mut params, "checklist-items", &todo.checklist_items, "\n");
    push_joined(&mut params, "tags", &todo.tags, ",");
    push_opt(&mut params, "list", &todo.list);
    push_opt(&mut params, "heading", &todo.heading);
    build_url(ADD_TODO_URL, &params)
}

fn push_opt(params: &mut Vec<(&'static str, String)>, key: &'static str, value: &Option<String>) {
    if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
        params.push((key, value.to_string()));
    }
}

fn push_joined(
    params: &mut Vec<(&'static str, String)>,
    key: &'static str,
    values: &Option<Vec<String>>,
    separator: &str,
) {
    if let Some(values) = values.as_deref().filter(|v| !v.is_empty()) {
        params.push((key, values.join(separator)));
    }
}
