//! Task records and the [`Log`] trait tasks write through.
use std::fmt;

/// One finished task, kept for the run summary.
#[derive(Debug, Clone)]
pub struct TaskEntry {
    /// Task name, e.g. `Write mpv.conf`.
    pub name: String,
    /// How the task ended.
    pub status: TaskStatus,
    /// Error text for failed tasks.
    pub message: Option<String>,
}

/// How a task ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    /// Changes were applied.
    Ok,
    /// Changes were only previewed.
    DryRun,
    /// The task returned an error.
    Failed,
}

impl TaskStatus {
    /// Symbol shown in front of the task name in the summary.
    #[must_use]
    pub const fn marker(self) -> &'static str {
        match self {
            Self::Ok => "✓",
            Self::DryRun => "~",
            Self::Failed => "✗",
        }
    }

    /// Lowercase name carried as the `status` field of result events.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::DryRun => "dry-run",
            Self::Failed => "failed",
        }
    }
}

/// Per-status task counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(super) struct Tally {
    pub(super) ok: usize,
    pub(super) dry_run: usize,
    pub(super) failed: usize,
}

impl Tally {
    pub(super) fn of(entries: &[TaskEntry]) -> Self {
        entries.iter().fold(Self::default(), |mut tally, entry| {
            match entry.status {
                TaskStatus::Ok => tally.ok += 1,
                TaskStatus::DryRun => tally.dry_run += 1,
                TaskStatus::Failed => tally.failed += 1,
            }
            tally
        })
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.ok + self.dry_run + self.failed;
        write!(
            f,
            "{total} tasks: {} ok, {} dry-run, {} failed",
            self.ok, self.dry_run, self.failed
        )
    }
}

/// Logging sink used by tasks.
///
/// [`Logger`](super::Logger) is the production implementation; tests swap in
/// capturing sinks without installing a global subscriber.
pub trait Log: Send + Sync {
    /// Section header, e.g. the task name.
    fn stage(&self, msg: &str);
    /// Progress line.
    fn info(&self, msg: &str);
    /// Detail kept in the log file; on the console only with `--verbose`.
    fn debug(&self, msg: &str);
    /// Something the user should look at.
    fn warn(&self, msg: &str);
    /// A failure.
    fn error(&self, msg: &str);
    /// What would change without `--dry-run`.
    fn dry_run(&self, msg: &str);
    /// Remember a finished task for the summary.
    fn record_task(&self, name: &str, status: TaskStatus, message: Option<&str>);
}
