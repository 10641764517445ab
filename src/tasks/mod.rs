//! Named units of work that orchestrate resource changes.
mod context;
pub mod directories;
pub mod payloads;
mod processing;

pub use context::Context;
pub use processing::{ProcessOpts, TaskResult, TaskStats, process_resources};

use anyhow::Result;

use crate::config::payloads::PAYLOADS;
use crate::logging::TaskStatus;

/// A named, executable task.
pub trait Task: Send + Sync {
    /// Human-readable task name.
    fn name(&self) -> &str;

    /// Keyword target for `--skip`/`--only`, or `None` if the task always runs.
    fn filter_key(&self) -> Option<&str> {
        None
    }

    /// Execute the task.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory cannot be created or a file cannot be
    /// opened or written.
    fn run(&self, ctx: &Context) -> Result<TaskResult>;
}

/// The complete set of tasks run by the install command, in execution order.
#[must_use]
pub fn all_install_tasks() -> Vec<Box<dyn Task>> {
    let mut tasks: Vec<Box<dyn Task>> = vec![Box::new(directories::ProvisionDirectories)];
    tasks.extend(
        PAYLOADS
            .iter()
            .map(|p| Box::new(payloads::WritePayload::new(p)) as Box<dyn Task>),
    );
    tasks
}

/// Apply `--skip` and `--only` keyword filters (case-insensitive substring
/// match on [`Task::filter_key`]). `only` wins when both are given; tasks
/// without a filter key are always kept. Blank keywords are ignored.
#[must_use]
pub fn select<'a>(
    tasks: &'a [Box<dyn Task>],
    skip: &[String],
    only: &[String],
) -> Vec<&'a dyn Task> {
    let skip = keywords(skip);
    let only = keywords(only);
    let matches = |key: &str, words: &[String]| {
        let key = key.to_lowercase();
        words.iter().any(|k| key.contains(k.as_str()))
    };
    tasks
        .iter()
        .filter(|t| {
            let Some(key) = t.filter_key() else {
                return true;
            };
            if !only.is_empty() {
                return matches(key, &only);
            }
            !matches(key, &skip)
        })
        .map(AsRef::as_ref)
        .collect()
}

/// Lowercased, trimmed, non-empty keywords.
fn keywords(raw: &[String]) -> Vec<String> {
    raw.iter()
        .map(|k| k.trim().to_lowercase())
        .filter(|k| !k.is_empty())
        .collect()
}

/// Execute a task, recording the result in the logger.
///
/// Errors are logged and recorded as a failed task; they never abort the run.
pub fn execute(task: &dyn Task, ctx: &Context) {
    ctx.log.stage(task.name());

    match task.run(ctx) {
        Ok(TaskResult::Ok) => {
            ctx.log.record_task(task.name(), TaskStatus::Ok, None);
        }
        Ok(TaskResult::DryRun) => {
            ctx.log.record_task(task.name(), TaskStatus::DryRun, None);
        }
        Err(e) => {
            ctx.log.error(&format!("{}: {e:#}", task.name()));
            ctx.log
                .record_task(task.name(), TaskStatus::Failed, Some(&format!("{e:#}")));
        }
    }
}

/// Shared helpers for task unit tests.
#[cfg(test)]
pub mod test_helpers {
    use std::path::PathBuf;
    use std::sync::Arc;

    use crate::config::Config;
    use crate::logging::{Log, Logger};
    use crate::operations::MockFileSystemOps;

    use super::Context;

    /// Build a verified [`Config`] for user `Koby` rooted at `profile_dir`.
    #[must_use]
    pub fn test_config(profile_dir: &str) -> Config {
        Config {
            username: "Koby".to_string(),
            profile_dir: PathBuf::from(profile_dir),
        }
    }

    /// Build a [`Context`] backed by an empty [`MockFileSystemOps`].
    #[must_use]
    pub fn make_context(config: Config) -> Context {
        Context::new(
            Arc::new(config),
            Arc::new(Logger::new("test")),
            false,
            Arc::new(MockFileSystemOps::new()),
        )
    }

    /// Build a [`Context`], also returning the [`Logger`] so tests can
    /// inspect recorded task state.
    #[must_use]
    pub fn make_static_context(config: Config) -> (Context, Arc<Logger>) {
        let log = Arc::new(Logger::new("test"));
        let ctx = make_context(config).with_log(Arc::clone(&log) as Arc<dyn Log>);
        (ctx, log)
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use test_helpers::{make_static_context, test_config};

    /// A mock task for testing `execute()`.
    struct MockTask {
        name: &'static str,
        key: Option<&'static str>,
        result: Result<TaskResult, String>,
    }

    impl Task for MockTask {
        fn name(&self) -> &str {
            self.name
        }
        fn filter_key(&self) -> Option<&str> {
            self.key
        }
        fn run(&self, _ctx: &Context) -> Result<TaskResult> {
            self.result.clone().map_err(|s| anyhow::anyhow!("{s}"))
        }
    }

    fn names(tasks: &[&dyn Task]) -> Vec<String> {
        tasks.iter().map(|t| t.name().to_string()).collect()
    }

    fn strings(v: &[&str]) -> Vec<String> {
        v.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn execute_records_ok_task() {
        let (ctx, log) = make_static_context(test_config("/users/Koby"));
        let task = MockTask {
            name: "ok-task",
            key: None,
            result: Ok(TaskResult::Ok),
        };

        execute(&task, &ctx);
        assert_eq!(log.failure_count(), 0);
        assert_eq!(log.task_entries()[0].status, TaskStatus::Ok);
    }

    #[test]
    fn execute_records_failed_task_with_message() {
        let (ctx, log) = make_static_context(test_config("/users/Koby"));
        let task = MockTask {
            name: "fail-task",
            key: None,
            result: Err("kaboom".to_string()),
        };

        execute(&task, &ctx);
        assert_eq!(log.failure_count(), 1);
        assert_eq!(log.task_entries()[0].message.as_deref(), Some("kaboom"));
    }

    #[test]
    fn execute_records_dry_run_task() {
        let (ctx, log) = make_static_context(test_config("/users/Koby"));
        let task = MockTask {
            name: "dry-task",
            key: None,
            result: Ok(TaskResult::DryRun),
        };

        execute(&task, &ctx);
        assert_eq!(log.task_entries()[0].status, TaskStatus::DryRun);
    }

    #[test]
    fn install_tasks_start_with_provisioning() {
        let tasks = all_install_tasks();
        assert_eq!(tasks.len(), 6);
        assert_eq!(tasks[0].name(), "Provision directories");
        assert!(tasks[0].filter_key().is_none());
    }

    #[test]
    fn select_without_filters_keeps_everything() {
        let tasks = all_install_tasks();
        assert_eq!(select(&tasks, &[], &[]).len(), 6);
    }

    #[test]
    fn select_skip_is_case_insensitive() {
        let tasks = all_install_tasks();
        let selected = select(&tasks, &strings(&["CONF"]), &[]);
        assert_eq!(
            names(&selected),
            strings(&[
                "Provision directories",
                "Write notes.txt",
                "Write autoload.lua",
                "Write mpv_chapters.js"
            ])
        );
    }

    #[test]
    fn select_only_keeps_provisioning() {
        let tasks = all_install_tasks();
        let selected = select(&tasks, &strings(&["lua", "js"]), &strings(&["lua"]));
        assert_eq!(
            names(&selected),
            strings(&["Provision directories", "Write autoload.lua"])
        );
    }

    #[test]
    fn select_ignores_blank_keywords() {
        let tasks = all_install_tasks();
        assert_eq!(select(&tasks, &strings(&[""]), &[]).len(), 6);
        assert_eq!(
            names(&select(&tasks, &strings(&["lua", "", " "]), &[])),
            strings(&[
                "Provision directories",
                "Write mpv.conf",
                "Write input.conf",
                "Write notes.txt",
                "Write mpv_chapters.js"
            ])
        );
    }

    #[test]
    fn select_blank_only_does_not_match_everything() {
        let tasks = all_install_tasks();
        assert_eq!(
            names(&select(&tasks, &[], &strings(&["", "notes"]))),
            strings(&["Provision directories", "Write notes.txt"])
        );
        // all-blank --only behaves as if it was not given
        assert_eq!(select(&tasks, &[], &strings(&[""])).len(), 6);
    }

    #[test]
    fn select_matches_keys_not_task_names() {
        let tasks: Vec<Box<dyn Task>> = vec![Box::new(MockTask {
            name: "Write something",
            key: Some("something"),
            result: Ok(TaskResult::Ok),
        })];
        assert_eq!(select(&tasks, &strings(&["write"]), &[]).len(), 1);
    }
}
