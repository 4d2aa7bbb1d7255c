//! Creation tools, backed by the x-callback-url adapter.

use rmcp::model::CallToolResult;
use rmcp::ErrorData as McpError;
use things_automation::{NewProject, NewTodo};

use super::schemas::{CreateProjectRequest, CreateTodoRequest};
use super::{text, ThingsService};

pub(super) async fn create_project(
    service: &ThingsService,
    request: CreateProjectRequest,
) -> Result<CallToolResult, McpError> {
    let project = NewProject {
        title: request.title,
        notes: request.notes,
        area: request.area,
        when: request.when,
        deadline: request.deadline,
        tags: request.tags,
    };

    let message = if service.callback.create_project(&project).await {
        format!("Successfully created project '{}' in Things3", project.title)
    } else {
        format!("Failed to create project '{}'", project.title)
    };
    Ok(text(message))
}

pub(super) async fn create_todo(
    service: &ThingsService,
    request: CreateTodoRequest,
) -> Result<CallToolResult, McpError> {
    let todo = NewTodo {
        title: request.title,
        notes: request.notes,
        when: request.when,
        deadline: request.deadline,
        checklist_items: request.checklist_items,
        tags: request.tags,
        list: request.list,
        heading: request.heading,
    };

    let message = if service.callback.create_todo(&todo).await {
        format!("Successfully created todo '{}' in Things3", todo.title)
    } else {
        format!("Failed to create todo '{}'", todo.title)
    };
    Ok(text(message))
}
