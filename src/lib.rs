//! mpv configuration installer.
//!
//! Writes a fixed set of mpv configuration files and scripts into a Windows
//! user profile (`C:\Users\<username>\AppData\Roaming\mpv`) after confirming
//! the profile directory exists.
//!
//! The public API is organised into four layers:
//!
//! - **[`config`]** - profile path convention, existence gate, embedded payloads
//! - **[`resources`]** - idempotent `check + apply` primitives (directories, payload files)
//! - **[`tasks`]** - named units of work wired to resources
//! - **[`commands`]** - top-level subcommand orchestration (`install`, `list`, …)
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod operations;
pub mod platform;
pub mod prompt;
pub mod resources;
pub mod tasks;
