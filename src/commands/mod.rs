//! Top-level subcommand orchestration.
pub mod completions;
pub mod install;
pub mod list;
pub mod version;
