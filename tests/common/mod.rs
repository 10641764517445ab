// Shared helpers for integration tests.
//
// Provides a temporary users root so each integration test can provision a
// profile in isolation without touching C:\Users.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Arc;

use mpv_setup_cli::cli::InstallOpts;
use mpv_setup_cli::commands::install::{self, Outcome};
use mpv_setup_cli::config::layout::ProfileLayout;
use mpv_setup_cli::logging::Logger;
use mpv_setup_cli::operations::SystemFileSystemOps;

/// An isolated users root backed by a [`tempfile::TempDir`].
///
/// The directory is automatically deleted when dropped.
pub struct UsersRoot {
    /// Temporary directory standing in for `C:\Users`.
    pub root: tempfile::TempDir,
}

impl UsersRoot {
    /// Create an empty users root.
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().expect("create temp dir"),
        }
    }

    /// Create an empty users root with one profile directory per name.
    pub fn with_profiles(names: &[&str]) -> Self {
        let users = Self::new();
        for name in names {
            std::fs::create_dir(users.root.path().join(name)).expect("create profile dir");
        }
        users
    }

    /// Layout resolving usernames under this root.
    pub fn layout(&self) -> ProfileLayout {
        ProfileLayout::under(self.root.path())
    }

    /// `<root>/<username>/AppData/Roaming/mpv`.
    pub fn settings_dir(&self, username: &str) -> PathBuf {
        self.root
            .path()
            .join(username)
            .join("AppData")
            .join("Roaming")
            .join("mpv")
    }

    /// Run the install workflow against the real filesystem.
    pub fn install(
        &self,
        username: &str,
        opts: &InstallOpts,
        dry_run: bool,
    ) -> (Outcome, Arc<Logger>) {
        let log = Arc::new(Logger::new("test"));
        let outcome = install::provision(
            &self.layout(),
            username,
            opts,
            dry_run,
            Arc::new(SystemFileSystemOps),
            &log,
        );
        (outcome, log)
    }

    /// Path to the users root.
    pub fn path(&self) -> &Path {
        self.root.path()
    }
}

/// Every regular file below `dir`, relative to it, sorted.
pub fn files_under(dir: &Path) -> Vec<PathBuf> {
    fn walk(base: &Path, dir: &Path, out: &mut Vec<PathBuf>) {
        let Ok(entries) = std::fs::read_dir(dir) else {
            return;
        };
        for entry in entries {
            let path = entry.expect("read dir entry").path();
            if path.is_dir() {
                walk(base, &path, out);
            } else {
                out.push(path.strip_prefix(base).expect("under base").to_path_buf());
            }
        }
    }
    let mut out = Vec::new();
    walk(dir, dir, &mut out);
    out.sort();
    out
}
