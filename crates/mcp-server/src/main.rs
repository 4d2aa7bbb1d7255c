//! Things3 MCP Server
//!
//! Exposes the Things 3 task manager to AI agents via the MCP protocol.
//!
//! ## Tools
//!
//! - `create-project` / `create-todo` - create items through the
//!   `things:///` x-callback-url scheme
//! - `view-inbox` / `view-today` / `view-anytime` / `view-someday` /
//!   `view-projects` / `view-areas` / `get-selected-todos` - read data
//!   through AppleScript
//! - `assign-project` / `assign-area` / `set-tags` / `complete-selected` -
//!   reorganize existing todos through AppleScript
//!
//! ## Usage
//!
//! Add to your MCP client configuration:
//! ```json
//! {
//!   "mcpServers": {
//!     "things": {
//!       "command": "things-mcp"
//!     }
//!   }
//! }
//! ```

use anyhow::Result;
use rmcp::transport::stdio;
use rmcp::ServiceExt;

mod tools;

use tools::ThingsService;

#[tokio::main]
async fn main() -> Result<()> {
    // Configure logging to stderr only (stdout is for MCP protocol)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    log::info!("Starting Things3 MCP server");

    let service = ThingsService::new();
    let server = service.serve(stdio()).await?;

    // Wait for shutdown
    server.waiting().await?;

    log::info!("Things3 MCP server stopped");
    Ok(())
}
