//! # Commitguard - Configurable Git Hook Pipeline
//!
//! Commitguard wires a small, fixed pipeline of checks into git's pre-commit
//! and pre-push hooks: gitignore hygiene, lowercase file/import naming,
//! affected-package builds, and commit recency reminders. Each check carries
//! its own `enabled`/`enforce` flags, so any of them can run as a blocking
//! gate or as an advisory nudge.
//!
//! ## Quick Start
//!
//! ```bash
//! # Install commitguard
//! cargo install commitguard
//!
//! # Install hooks in your repository
//! commitguard install
//!
//! # Run the pre-commit pipeline by hand
//! commitguard run pre-commit
//! ```

pub mod checks;
pub mod cli;
pub mod config;
pub mod external;
pub mod git;
pub mod hooks;
pub mod project;

pub use cli::{Cli, Output};
pub use config::HookConfig;

/// Result type alias for commitguard operations
pub type Result<T> = anyhow::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");

/// Environment variable set on child build processes. A `build` script that
/// (directly or indirectly) invokes this tool again must find this variable
/// and exit immediately, otherwise the hook would re-enter itself forever.
pub const RECURSION_GUARD_ENV: &str = "COMMITGUARD_SKIP";
