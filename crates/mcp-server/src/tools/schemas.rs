//! Input schemas for the tool surface.

use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CreateProjectRequest {
    #[schemars(description = "Project title")]
    pub title: String,

    #[schemars(description = "Project notes")]
    pub notes: Option<String>,

    #[schemars(description = "Area to assign project to")]
    pub area: Option<String>,

    #[schemars(description = "When to schedule the project")]
    pub when: Option<String>,

    #[schemars(description = "Project deadline")]
    pub deadline: Option<String>,

    #[schemars(description = "Tags to assign")]
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CreateTodoRequest {
    #[schemars(description = "Todo title")]
    pub title: String,

    #[schemars(description = "Todo notes")]
    pub notes: Option<String>,

    #[schemars(description = "When to schedule the todo")]
    pub when: Option<String>,

    #[schemars(description = "Todo deadline")]
    pub deadline: Option<String>,

    #[schemars(description = "Checklist items")]
    pub checklist_items: Option<Vec<String>>,

    #[schemars(description = "Tags to assign")]
    pub tags: Option<Vec<String>>,

    #[schemars(description = "Project/list to add todo to")]
    pub list: Option<String>,

    #[schemars(description = "Heading within the project")]
    pub heading: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AssignProjectRequest {
    #[schemars(description = "Name of the task")]
    pub task: String,

    #[schemars(description = "Name of the project to assign")]
    pub project: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AssignAreaRequest {
    #[schemars(description = "Name of the task")]
    pub task: String,

    #[schemars(description = "Name of the area to assign")]
    pub area: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SetTagsRequest {
    #[schemars(description = "Name of the task")]
    pub task: String,

    #[schemars(description = "List of tags to set")]
    pub tags: Vec<String>,
}
