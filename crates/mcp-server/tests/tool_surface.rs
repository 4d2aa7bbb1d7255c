use anyhow::{Context, Result};
use rmcp::{model::CallToolRequestParam, service::ServiceExt, transport::TokioChildProcess};
use std::collections::HashSet;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::process::Command;

fn locate_things_mcp_bin() -> Result<PathBuf> {
    if let Some(path) = option_env!("CARGO_BIN_EXE_things-mcp") {
        return Ok(PathBuf::from(path));
    }

    // Cargo doesn't always expose CARGO_BIN_EXE_* at runtime. Derive it from
    // the test exe path: `.../target/{profile}/deps/<test>` →
    // `.../target/{profile}/things-mcp`
    if let Ok(exe) = std::env::current_exe() {
        if let Some(target_profile_dir) = exe.parent().and_then(|p| p.parent()) {
            let candidate = target_profile_dir.join("things-mcp");
            if candidate.exists() {
                return Ok(candidate);
            }
        }
    }

    anyhow::bail!("failed to locate things-mcp binary; build with: cargo build -p things-mcp")
}

fn bundled_scripts_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../automation/scripts")
}

fn write_executable(path: &Path, body: &str) -> Result<()> {
    fs::write(path, format!("#!/bin/sh\n{body}\n")).context("write stub binary")?;
    let mut perms = fs::metadata(path).context("stat stub binary")?.permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms).context("chmod stub binary")?;
    Ok(())
}

/// Stub `osascript`/`open` binaries prepended to the server's PATH so the
/// automation layer behaves deterministically off-macOS.
fn stub_automation_bins(dir: &Path) -> Result<PathBuf> {
    let urls_log = dir.join("urls.log");
    write_executable(
        &dir.join("osascript"),
        r#"echo '[{"title":"Restock pantry","notes":"whole milk, eggs","due_date":"No Due Date","when":"No Scheduled Date"}]'"#,
    )?;
    write_executable(
        &dir.join("open"),
        &format!("echo \"$1\" >> '{}'", urls_log.display()),
    )?;
    Ok(urls_log)
}

fn server_command(stub_dir: &Path) -> Result<Command> {
    let bin = locate_things_mcp_bin()?;
    let mut cmd = Command::new(bin);
    let path = std::env::var("PATH").unwrap_or_default();
    cmd.env("PATH", format!("{}:{path}", stub_dir.display()));
    cmd.env("THINGS_MCP_SCRIPTS_DIR", bundled_scripts_dir());
    cmd.env("RUST_LOG", "warn");
    Ok(cmd)
}

#[tokio::test]
async fn mcp_exposes_the_full_tool_catalog() -> Result<()> {
    let tmp = tempfile::tempdir().context("tempdir")?;
    stub_automation_bins(tmp.path())?;

    let transport =
        TokioChildProcess::new(server_command(tmp.path())?).context("spawn mcp server")?;
    let service = tokio::time::timeout(Duration::from_secs(10), ().serve(transport))
        .await
        .context("timeout starting MCP server")??;

    let tools = tokio::time::timeout(
        Duration::from_secs(10),
        service.list_tools(Default::default()),
    )
    .await
    .context("timeout listing tools")??;

    let tool_names: HashSet<&str> = tools.tools.iter().map(|t| t.name.as_ref()).collect();
    for expected in [
        "create-project",
        "create-todo",
        "view-inbox",
        "view-today",
        "view-anytime",
        "view-someday",
        "view-projects",
        "view-areas",
        "get-selected-todos",
        "assign-project",
        "assign-area",
        "set-tags",
        "complete-selected",
    ] {
        assert!(
            tool_names.contains(expected),
            "missing tool '{expected}' (available: {tool_names:?})"
        );
    }
    assert_eq!(tools.tools.len(), 13, "unexpected extra tools: {tool_names:?}");

    // Creation tools must declare their one required argument.
    for name in ["create-project", "create-todo"] {
        let tool = tools
            .tools
            .iter()
            .find(|t| t.name == name)
            .context("tool missing from catalog")?;
        let schema = serde_json::to_value(&*tool.input_schema).context("serialize schema")?;
        let required = schema
            .get("required")
            .and_then(|r| r.as_array())
            .with_context(|| format!("{name} schema missing 'required'"))?;
        assert!(
            required.iter().any(|v| v.as_str() == Some("title")),
            "{name} must require 'title'"
        );
    }

    service.cancel().await?;
    Ok(())
}

#[tokio::test]
async fn create_todo_round_trips_through_the_callback_url() -> Result<()> {
    let tmp = tempfile::tempdir().context("tempdir")?;
    let urls_log = stub_automation_bins(tmp.path())?;

    let transport =
        TokioChildProcess::new(server_command(tmp.path())?).context("spawn mcp server")?;
    let service = tokio::time::timeout(Duration::from_secs(10), ().serve(transport))
        .await
        .context("timeout starting MCP server")??;

    let args = serde_json::json!({
        "title": "Buy milk",
        "tags": ["errand", "home"],
    });
    let result = tokio::time::timeout(
        Duration::from_secs(10),
        service.call_tool(CallToolRequestParam {
            name: "create-todo".into(),
            arguments: args.as_object().cloned(),
        }),
    )
    .await
    .context("timeout calling create-todo")??;

    let text = result
        .content
        .first()
        .and_then(|c| c.as_text())
        .map(|t| t.text.as_str())
        .context("create-todo missing text output")?;
    assert!(
        text.contains("Successfully created todo 'Buy milk'"),
        "unexpected create-todo response: {text}"
    );

    let url = fs::read_to_string(urls_log).context("read recorded urls")?;
    assert!(url.starts_with("things:///add?"), "unexpected url: {url}");
    assert!(url.contains("title=Buy%20milk"), "unexpected url: {url}");
    assert!(url.contains("tags=errand%2Chome"), "unexpected url: {url}");

    service.cancel().await?;
    Ok(())
}

#[tokio::test]
async fn view_inbox_formats_the_scripted_list() -> Result<()> {
    let tmp = tempfile::tempdir().context("tempdir")?;
    stub_automation_bins(tmp.path())?;

    let transport =
        TokioChildProcess::new(server_command(tmp.path())?).context("spawn mcp server")?;
    let service = tokio::time::timeout(Duration::from_secs(10), ().serve(transport))
        .await
        .context("timeout starting MCP server")??;

    let result = tokio::time::timeout(
        Duration::from_secs(10),
        service.call_tool(CallToolRequestParam {
            name: "view-inbox".into(),
            arguments: None,
        }),
    )
    .await
    .context("timeout calling view-inbox")??;

    let text = result
        .content
        .first()
        .and_then(|c| c.as_text())
        .map(|t| t.text.as_str())
        .context("view-inbox missing text output")?;
    assert_eq!(
        text,
        "📥 Todos in Things3 inbox:\n\n• Restock pantry - whole milk, eggs"
    );

    service.cancel().await?;
    Ok(())
}

#[tokio::test]
async fn unknown_tool_is_rejected_without_crashing() -> Result<()> {
    let tmp = tempfile::tempdir().context("tempdir")?;
    stub_automation_bins(tmp.path())?;

    let transport =
        TokioChildProcess::new(server_command(tmp.path())?).context("spawn mcp server")?;
    let service = tokio::time::timeout(Duration::from_secs(10), ().serve(transport))
        .await
        .context("timeout starting MCP server")??;

    let result = tokio::time::timeout(
        Duration::from_secs(10),
        service.call_tool(CallToolRequestParam {
            name: "view-everything".into(),
            arguments: None,
        }),
    )
    .await
    .context("timeout calling unknown tool")?;
    assert!(result.is_err(), "unknown tool must be rejected");

    // The server must survive the rejection and keep answering.
    let tools = tokio::time::timeout(
        Duration::from_secs(10),
        service.list_tools(Default::default()),
    )
    .await
    .context("timeout listing tools after rejection")??;
    assert!(!tools.tools.is_empty());

    service.cancel().await?;
    Ok(())
}
