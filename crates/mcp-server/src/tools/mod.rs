//! MCP tools for Things 3.
//!
//! Three tool groups share two automation adapters: create tools drive the
//! x-callback-url scheme, view and manage tools drive AppleScript. Every
//! handler converts adapter failures into a text response; nothing on the
//! call path propagates an error past the dispatch boundary.

mod create;
mod manage;
mod schemas;
mod view;

use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use things_automation::{AppleScriptHandler, AutomationConfig, XCallbackHandler};

pub use schemas::{
    AssignAreaRequest, AssignProjectRequest, CreateProjectRequest, CreateTodoRequest,
    SetTagsRequest,
};

/// Things 3 MCP service.
///
/// Stateless per invocation: each call spawns one subprocess through the
/// appropriate adapter and formats the result; nothing is shared between
/// requests beyond the read-only configuration inside the handlers.
#[derive(Clone)]
pub struct ThingsService {
    scripts: AppleScriptHandler,
    callback: XCallbackHandler,
    tool_router: ToolRouter<Self>,
}

impl ThingsService {
    pub fn new() -> Self {
        Self::with_config(AutomationConfig::default())
    }

    pub fn with_config(config: AutomationConfig) -> Self {
        Self {
            scripts: AppleScriptHandler::new(config.clone()),
            callback: XCallbackHandler::new(config),
            tool_router: Self::tool_router(),
        }
    }
}

impl Default for ThingsService {
    fn default() -> Self {
        Self::new()
    }
}

fn text(message: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(message)])
}

#[tool_router]
impl ThingsService {
    /// Create a project via the x-callback-url scheme.
    #[tool(name = "create-project", description = "Create a new project in Things3")]
    pub async fn create_project(
        &self,
        Parameters(request): Parameters<CreateProjectRequest>,
    ) -> Result<CallToolResult, McpError> {
        create::create_project(self, request).await
    }

    /// Create a todo via the x-callback-url scheme.
    #[tool(name = "create-todo", description = "Create a new todo in Things3")]
    pub async fn create_todo(
        &self,
        Parameters(request): Parameters<CreateTodoRequest>,
    ) -> Result<CallToolResult, McpError> {
        create::create_todo(self, request).await
    }

    /// Inbox listing.
    #[tool(name = "view-inbox", description = "View all todos in the Things3 inbox")]
    pub async fn view_inbox(&self) -> Result<CallToolResult, McpError> {
        view::view_inbox(self).await
    }

    /// Today listing.
    #[tool(name = "view-today", description = "View today's todos in Things3")]
    pub async fn view_today(&self) -> Result<CallToolResult, McpError> {
        view::view_today(self).await
    }

    /// Anytime listing.
    #[tool(name = "view-anytime", description = "View all todos in the Things3 Anytime list")]
    pub async fn view_anytime(&self) -> Result<CallToolResult, McpError> {
        view::view_anytime(self).await
    }

    /// Someday listing.
    #[tool(name = "view-someday", description = "View all todos in the Things3 Someday list")]
    pub async fn view_someday(&self) -> Result<CallToolResult, McpError> {
        view::view_someday(self).await
    }

    /// Project listing.
    #[tool(name = "view-projects", description = "View all projects in Things3")]
    pub async fn view_projects(&self) -> Result<CallToolResult, McpError> {
        view::view_projects(self).await
    }

    /// Area listing.
    #[tool(name = "view-areas", description = "View all areas in Things3")]
    pub async fn view_areas(&self) -> Result<CallToolResult, McpError> {
        view::view_areas(self).await
    }

    /// Current UI selection.
    #[tool(
        name = "get-selected-todos",
        description = "Get currently selected todos in Things3"
    )]
    pub async fn get_selected_todos(&self) -> Result<CallToolResult, McpError> {
        view::get_selected_todos(self).await
    }

    /// Move matching todos into a project.
    #[tool(name = "assign-project", description = "Assign a project to a task in Things3")]
    pub async fn assign_project(
        &self,
        Parameters(request): Parameters<AssignProjectRequest>,
    ) -> Result<CallToolResult, McpError> {
        manage::assign_project(self, request).await
    }

    /// Move matching todos into an area.
    #[tool(name = "assign-area", description = "Assign an area to a task in Things3")]
    pub async fn assign_area(
        &self,
        Parameters(request): Parameters<AssignAreaRequest>,
    ) -> Result<CallToolResult, McpError> {
        manage::assign_area(self, request).await
    }

    /// Replace the tag set on matching todos.
    #[tool(name = "set-tags", description = "Set tags for a task in Things3")]
    pub async fn set_tags(
        &self,
        Parameters(request): Parameters<SetTagsRequest>,
    ) -> Result<CallToolResult, McpError> {
        manage::set_tags(self, request).await
    }

    /// Complete the current UI selection.
    #[tool(
        name = "complete-selected",
        description = "Complete all currently selected todos in Things3"
    )]
    pub async fn complete_selected(&self) -> Result<CallToolResult, McpError> {
        manage::complete_selected(self).await
    }
}

#[tool_handler]
impl ServerHandler for ThingsService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Things3 MCP bridges the Things 3 task manager on macOS. Use the view-* tools \
                 to read smart lists, create-project/create-todo to add items, and the \
                 assign/set/complete tools to reorganize existing todos."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            ..Default::default()
        }
    }
}
