//! Records returned by the AppleScript query programs.
//!
//! These are fetched, formatted, and discarded; nothing here is persisted.
//! Field defaults mirror what the scripts emit for missing values.

use serde::Deserialize;

/// Sentinel the scripts emit when a todo has no due date.
pub const NO_DUE_DATE: &str = "No Due Date";

/// Sentinel the scripts emit when a todo has no scheduled date.
pub const NO_SCHEDULED_DATE: &str = "No Scheduled Date";

/// A to-do as reported by Things 3.
#[derive(Debug, Clone, Deserialize)]
pub struct Todo {
    #[serde(default = "untitled_todo")]
    pub title: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub when: Option<String>,
}

impl Todo {
    /// Due date, unless missing or the script's "no date" sentinel.
    pub fn due_date(&self) -> Option<&str> {
        date_field(&self.due_date, NO_DUE_DATE)
    }

    /// Scheduled date, unless missing or the sentinel.
    pub fn scheduled(&self) -> Option<&str> {
        date_field(&self.when, NO_SCHEDULED_DATE)
    }
}

/// A project as reported by Things 3.
#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    #[serde(default = "untitled_project")]
    pub title: String,
    #[serde(default)]
    pub notes: String,
}

/// An area as reported by Things 3.
#[derive(Debug, Clone, Deserialize)]
pub struct Area {
    #[serde(default = "untitled_area")]
    pub title: String,
}

/// Result object emitted by the `complete_selected` script.
#[derive(Debug, Clone, Deserialize)]
pub struct CompletionOutcome {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl CompletionOutcome {
    /// Failed outcome carrying diagnostic text.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: None,
            error: Some(error.into()),
        }
    }

    /// Failed outcome for a script that produced no output.
    pub fn no_response() -> Self {
        Self {
            success: false,
            message: Some("No response".to_string()),
            error: None,
        }
    }
}

fn date_field<'a>(value: &'a Option<String>, sentinel: &str) -> Option<&'a str> {
    value
        .as_deref()
        .filter(|v| !v.is_empty() && *v != sentinel)
}

fn untitled_todo() -> String {
    "Untitled Todo".to_string()
}

fn untitled_project() -> String {
    "Untitled Project".to_string()
}

fn untitled_area() -> String {
    "Untitled Area".to_string()
}
