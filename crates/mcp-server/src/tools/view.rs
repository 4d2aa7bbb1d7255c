//! View tools: smart-list, project, area, and selection listings.
//!
//! The formatting here is a compatibility surface: headers, empty-list
//! sentences, and truncation limits are fixed.

use rmcp::model::CallToolResult;
use rmcp::ErrorData as McpError;
use things_automation::{Area, Project, Todo};

use super::{text, ThingsService};

const TASK_NOTES_LIMIT: usize = 50;
const PROJECT_NOTES_LIMIT: usize = 100;

/// Presentation of one smart list.
struct ListView {
    header: &'static str,
    empty: &'static str,
}

const INBOX: ListView = ListView {
    header: "📥 Todos in Things3 inbox:",
    empty: "No todos found in Things3 inbox.",
};

const TODAY: ListView = ListView {
    header: "📅 Today's todos in Things3:",
    empty: "No todos scheduled for today in Things3.",
};

const ANYTIME: ListView = ListView {
    header: "🔄 Todos in Things3 Anytime:",
    empty: "No todos found in Things3 anytime.",
};

const SOMEDAY: ListView = ListView {
    header: "📝 Todos in Things3 Someday:",
    empty: "No todos found in Things3 someday.",
};

pub(super) async fn view_inbox(service: &ThingsService) -> Result<CallToolResult, McpError> {
    let todos = service.scripts.inbox_tasks().await;
    Ok(text(render_todo_list(&INBOX, &todos)))
}

pub(super) async fn view_today(service: &ThingsService) -> Result<CallToolResult, McpError> {
    let todos = service.scripts.today_tasks().await;
    Ok(text(render_todo_list(&TODAY, &todos)))
}

pub(super) async fn view_anytime(service: &ThingsService) -> Result<CallToolResult, McpError> {
    let todos = service.scripts.anytime_tasks().await;
    Ok(text(render_todo_list(&ANYTIME, &todos)))
}

pub(super) async fn view_someday(service: &ThingsService) -> Result<CallToolResult, McpError> {
    let todos = service.scripts.someday_tasks().await;
    Ok(text(render_todo_list(&SOMEDAY, &todos)))
}

pub(super) async fn view_projects(service: &ThingsService) -> Result<CallToolResult, McpError> {
    let projects = service.scripts.projects().await;
    Ok(text(render_projects(&projects)))
}

pub(super) async fn view_areas(service: &ThingsService) -> Result<CallToolResult, McpError> {
    let areas = service.scripts.areas().await;
    Ok(text(render_areas(&areas)))
}

pub(super) async fn get_selected_todos(
    service: &ThingsService,
) -> Result<CallToolResult, McpError> {
    let todos = service.scripts.selected_todos().await;
    Ok(text(render_selected(&todos)))
}

fn render_todo_list(view: &ListView, todos: &[Todo]) -> String {
    if todos.is_empty() {
        return view.empty.to_string();
    }
    let mut lines = vec![view.header.to_string()];
    for todo in todos {
        let mut line = format!("\n• {}", todo.title.trim());
        if let Some(due) = todo.due_date() {
            line.push_str(&format!(" (Due: {due})"));
        }
        if let Some(when) = todo.scheduled() {
            line.push_str(&format!(" (When: {when})"));
        }
        if !todo.notes.is_empty() {
            line.push_str(&format!(" - {}", truncate_notes(&todo.notes, TASK_NOTES_LIMIT)));
        }
        lines.push(line);
    }
    lines.join("\n")
}

fn render_projects(projects: &[Project]) -> String {
    if projects.is_empty() {
        return "No projects found in Things3.".to_string();
    }
    let mut lines = vec!["📁 Projects in Things3:".to_string()];
    for project in projects {
        let mut line = format!("\n• {}", project.title.trim());
        if !project.notes.is_empty() {
            line.push_str(&format!(
                " - {}",
                truncate_notes(&project.notes, PROJECT_NOTES_LIMIT)
            ));
        }
        lines.push(line);
    }
    lines.join("\n")
}

fn render_areas(areas: &[Area]) -> String {
    if areas.is_empty() {
        return "No areas found in Things3.".to_string();
    }
    let mut lines = vec!["🏢 Areas in Things3:".to_string()];
    for area in areas {
        lines.push(format!("\n• {}", area.title.trim()));
    }
    lines.join("\n")
}

fn render_selected(todos: &[Todo]) -> String {
    if todos.is_empty() {
        return "No todos are currently selected in Things3.".to_string();
    }
    let mut lines = vec!["✅ Selected todos in Things3:".to_string()];
    for todo in todos {
        lines.push(format!("\n# {}", todo.title.trim()));
        if !todo.notes.is_empty() {
            lines.push(todo.notes.clone());
        }
        lines.push(String::new());
    }
    lines.join("\n")
}

/// Truncate to `limit` characters, appending an ellipsis only when cut.
fn truncate_notes(notes: &str, limit: usize) -> String {
    match notes.char_indices().nth(limit) {
        None => notes.to_string(),
        Some((cut, _)) => format!("{}...", &notes[..cut]),
    }
}
