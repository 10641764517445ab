//! The [`Logger`] facade: emits `tracing` events and keeps task results for
//! the end-of-run summary.
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::event::{DRY_RUN, PROFILE, RESULT, STAGE};
use super::file::default_log_path;
use super::types::{Log, Tally, TaskEntry, TaskStatus};

/// Production [`Log`] implementation.
///
/// Rendering is left to the subscriber installed by
/// [`init_subscriber`](super::init_subscriber); the logger only knows where
/// the log file lives so the summary can point at it.
#[derive(Debug)]
pub struct Logger {
    tasks: Mutex<Vec<TaskEntry>>,
    log_file: Option<PathBuf>,
}

impl Logger {
    /// Logger for `command`, pointing at `<log dir>/<command>.log`.
    #[must_use]
    pub fn new(command: &str) -> Self {
        Self::writing_to(default_log_path(command))
    }

    pub(super) const fn writing_to(log_file: Option<PathBuf>) -> Self {
        Self {
            tasks: Mutex::new(Vec::new()),
            log_file,
        }
    }

    /// Where this run's log file is written, if anywhere.
    #[must_use]
    pub fn log_path(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }

    /// Snapshot of the recorded tasks, in execution order.
    #[must_use]
    pub fn task_entries(&self) -> Vec<TaskEntry> {
        self.tasks.lock().map_or_else(|_| Vec::new(), |g| g.clone())
    }

    /// Number of recorded tasks that failed.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.tasks.lock().map_or(0, |g| Tally::of(&g).failed)
    }

    /// Announce the verified username and its profile directory.
    ///
    /// The log file records both as header lines.
    pub fn accept_profile(&self, username: &str, dir: &Path) {
        tracing::info!(
            target: PROFILE,
            username,
            dir = %dir.display(),
            "username '{username}' accepted: {}",
            dir.display()
        );
    }

    /// Print one line per recorded task, the totals, and the log file path.
    ///
    /// Does nothing when no task ran.
    pub fn print_summary(&self) {
        let tasks = self.task_entries();
        if tasks.is_empty() {
            return;
        }

        self.stage("Summary");
        for task in &tasks {
            let detail = task
                .message
                .as_deref()
                .map_or_else(String::new, |m| format!(" ({m})"));
            tracing::info!(
                target: RESULT,
                status = task.status.label(),
                "{} {}{detail}",
                task.status.marker(),
                task.name
            );
        }
        self.info(&Tally::of(&tasks).to_string());
        if let Some(path) = self.log_path() {
            self.info(&format!("log: {}", path.display()));
        }
    }
}

impl Log for Logger {
    fn stage(&self, msg: &str) {
        tracing::info!(target: STAGE, "{msg}");
    }

    fn info(&self, msg: &str) {
        tracing::info!("{msg}");
    }

    fn debug(&self, msg: &str) {
        tracing::debug!("{msg}");
    }

    fn warn(&self, msg: &str) {
        tracing::warn!("{msg}");
    }

    fn error(&self, msg: &str) {
        tracing::error!("{msg}");
    }

    fn dry_run(&self, msg: &str) {
        tracing::info!(target: DRY_RUN, "{msg}");
    }

    fn record_task(&self, name: &str, status: TaskStatus, message: Option<&str>) {
        if let Ok(mut tasks) = self.tasks.lock() {
            tasks.push(TaskEntry {
                name: name.to_string(),
                status,
                message: message.map(String::from),
            });
        }
    }
}
