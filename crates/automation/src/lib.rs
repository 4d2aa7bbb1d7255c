//! # Things Automation
//!
//! Thin adapters between structured requests and the macOS automation
//! surface of the Things 3 task manager.
//!
//! Two external-call paths exist, and everything in this crate is one of
//! them:
//!
//! ```text
//! Request
//!     │
//!     ├──> AppleScriptHandler ──> osascript subprocess (30s bound)
//!     │        queries: named script file → JSON → typed records
//!     │        mutations: escaped inline script → bool
//!     │
//!     └──> XCallbackHandler ──> open subprocess (10s bound)
//!              creations: percent-encoded things:/// URL
//! ```
//!
//! Each call spawns and tears down its own subprocess; there is no shared
//! state between calls beyond the read-only [`AutomationConfig`].

pub mod callback;
pub mod config;
pub mod error;
pub mod records;
pub mod script;

pub use callback::{NewProject, NewTodo, XCallbackHandler};
pub use config::AutomationConfig;
pub use error::{AutomationError, Result};
pub use records::{Area, CompletionOutcome, Project, Todo};
pub use script::AppleScriptHandler;
