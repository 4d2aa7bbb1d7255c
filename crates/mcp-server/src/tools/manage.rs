//! Management tools: reorganize existing todos through AppleScript.

use rmcp::model::CallToolResult;
use rmcp::ErrorData as McpError;

use super::schemas::{AssignAreaRequest, AssignProjectRequest, SetTagsRequest};
use super::{text, ThingsService};

pub(super) async fn assign_project(
    service: &ThingsService,
    request: AssignProjectRequest,
) -> Result<CallToolResult, McpError> {
    let message = if service
        .scripts
        .assign_project(&request.task, &request.project)
        .await
    {
        format!(
            "Successfully assigned project '{}' to task '{}'",
            request.project, request.task
        )
    } else {
        format!(
            "Failed to assign project '{}' to task '{}'",
            request.project, request.task
        )
    };
    Ok(text(message))
}

pub(super) async fn assign_area(
    service: &ThingsService,
    request: AssignAreaRequest,
) -> Result<CallToolResult, McpError> {
    let message = if service
        .scripts
        .assign_area(&request.task, &request.area)
        .await
    {
        format!(
            "Successfully assigned area '{}' to task '{}'",
            request.area, request.task
        )
    } else {
        format!(
            "Failed to assign area '{}' to task '{}'",
            request.area, request.task
        )
    };
    Ok(text(message))
}

pub(super) async fn set_tags(
    service: &ThingsService,
    request: SetTagsRequest,
) -> Result<CallToolResult, McpError> {
    let message = if service.scripts.set_tags(&request.task, &request.tags).await {
        format!(
            "Successfully set tags [{}] for task '{}'",
            request.tags.join(", "),
            request.task
        )
    } else {
        format!("Failed to set tags for task '{}'", request.task)
    };
    Ok(text(message))
}

pub(super) async fn complete_selected(
    service: &ThingsService,
) -> Result<CallToolResult, McpError> {
    let outcome = service.scripts.complete_selected_todos().await;
    let message = if outcome.success {
        outcome
            .message
            .unwrap_or_else(|| "Successfully completed selected todos".to_string())
    } else {
        let reason = outcome
            .error
            .or(outcome.message)
            .unwrap_or_else(|| "Unknown error".to_string());
        format!("Failed to complete selected todos: {reason}")
    };
    Ok(text(message))
}
