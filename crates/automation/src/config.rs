use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Environment override for the AppleScript directory.
pub const SCRIPTS_DIR_ENV: &str = "THINGS_MCP_SCRIPTS_DIR";

const SCRIPT_TIMEOUT: Duration = Duration::from_secs(30);
const OPEN_TIMEOUT: Duration = Duration::from_secs(10);

/// Read-only configuration handed to both adapters at construction.
///
/// There is no global state: every handler owns a copy of this struct and
/// nothing mutates it after startup.
#[derive(Debug, Clone)]
pub struct AutomationConfig {
    /// Directory holding the named `.applescript` query programs.
    pub scripts_dir: PathBuf,
    /// AppleScript interpreter binary. Resolved through `PATH` when relative.
    pub osascript_bin: PathBuf,
    /// Document-open binary used to trigger x-callback-urls.
    pub open_bin: PathBuf,
    /// Bound on a single `osascript` invocation.
    pub script_timeout: Duration,
    /// Bound on a single `open` invocation.
    pub open_timeout: Duration,
}

impl Default for AutomationConfig {
    fn default() -> Self {
        Self {
            scripts_dir: default_scripts_dir(),
            osascript_bin: PathBuf::from("osascript"),
            open_bin: PathBuf::from("open"),
            script_timeout: SCRIPT_TIMEOUT,
            open_timeout: OPEN_TIMEOUT,
        }
    }
}

/// Scripts directory resolution: env override, then `scripts/` next to the
/// executable (installed layout), then the crate's bundled tree (dev builds).
fn default_scripts_dir() -> PathBuf {
    if let Some(dir) = env::var_os(SCRIPTS_DIR_ENV) {
        return PathBuf::from(dir);
    }
    if let Ok(exe) = env::current_exe() {
        if let Some(dir) = exe.parent() {
            let candidate = dir.join("scripts");
            if candidate.is_dir() {
                return candidate;
            }
        }
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scripts")
}
