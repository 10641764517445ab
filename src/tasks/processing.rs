//! Generic resource processing loop: check state, apply, collect stats.
use anyhow::Result;

use super::context::Context;
use crate::resources::{Resource, ResourceState};

/// Result of a single task execution.
///
/// # Examples
///
/// ```
/// use mpv_setup_cli::tasks::TaskResult;
///
/// assert!(matches!(TaskResult::Ok, TaskResult::Ok));
/// assert!(!matches!(TaskResult::DryRun, TaskResult::Ok));
/// ```
#[derive(Debug, Clone)]
pub enum TaskResult {
    /// Task completed successfully.
    Ok,
    /// Task ran in dry-run mode.
    DryRun,
}

/// Counters for tasks that process several resources.
///
/// # Examples
///
/// ```
/// use mpv_setup_cli::tasks::TaskStats;
///
/// let stats = TaskStats { changed: 1, already_ok: 1 };
/// assert_eq!(stats.summary(false), "1 changed, 1 already ok");
/// assert_eq!(stats.summary(true), "1 would change, 1 already ok");
/// ```
#[derive(Debug, Default)]
pub struct TaskStats {
    /// Number of resources created or replaced.
    pub changed: u32,
    /// Number of resources already in the desired state.
    pub already_ok: u32,
}

impl TaskStats {
    /// Create a new empty stats counter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Format the summary string (e.g. "2 changed, 0 already ok").
    #[must_use]
    pub fn summary(&self, dry_run: bool) -> String {
        let verb = if dry_run { "would change" } else { "changed" };
        format!("{} {verb}, {} already ok", self.changed, self.already_ok)
    }

    /// Log the summary and return the appropriate `TaskResult`.
    #[must_use]
    pub fn finish(self, ctx: &Context) -> TaskResult {
        ctx.log.debug(&self.summary(ctx.dry_run));
        if ctx.dry_run {
            TaskResult::DryRun
        } else {
            TaskResult::Ok
        }
    }
}

impl std::ops::AddAssign for TaskStats {
    fn add_assign(&mut self, other: Self) {
        self.changed += other.changed;
        self.already_ok += other.already_ok;
    }
}

/// Wording used when logging what happens to each resource.
///
/// # Examples
///
/// ```
/// use mpv_setup_cli::tasks::ProcessOpts;
///
/// let opts = ProcessOpts::new("write", "wrote");
/// assert_eq!(opts.verb, "write");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ProcessOpts<'a> {
    /// Imperative verb for dry-run messages (e.g. "create").
    pub verb: &'a str,
    /// Past-tense verb for applied changes (e.g. "created").
    pub done: &'a str,
}

impl<'a> ProcessOpts<'a> {
    /// Build options from the two verb forms.
    #[must_use]
    pub const fn new(verb: &'a str, done: &'a str) -> Self {
        Self { verb, done }
    }
}

/// Process resources in order by checking each one's state and applying as
/// needed.
///
/// # Errors
///
/// Returns the first error from checking or applying a resource; resources
/// after it are not attempted.
pub fn process_resources<R: Resource>(
    ctx: &Context,
    resources: impl IntoIterator<Item = R>,
    opts: &ProcessOpts,
) -> Result<TaskResult> {
    let mut stats = TaskStats::new();
    for resource in resources {
        let current = resource.current_state()?;
        stats += process_single(ctx, &resource, current, opts)?;
    }
    Ok(stats.finish(ctx))
}

/// Process a single resource given its current state, returning a stats delta.
fn process_single<R: Resource>(
    ctx: &Context,
    resource: &R,
    resource_state: ResourceState,
    opts: &ProcessOpts,
) -> Result<TaskStats> {
    let desc = resource.description();
    let mut delta = TaskStats::new();
    match resource_state {
        ResourceState::Correct => {
            ctx.log.debug(&format!("ok: {desc}"));
            delta.already_ok += 1;
        }
        resource_state @ (ResourceState::Missing | ResourceState::Incorrect { .. }) => {
            if ctx.dry_run {
                let msg = if let ResourceState::Incorrect { ref current } = resource_state {
                    format!("would {} {desc} (replacing {current})", opts.verb)
                } else {
                    format!("would {} {desc}", opts.verb)
                };
                ctx.log.dry_run(&msg);
                delta.changed += 1;
                return Ok(delta);
            }
            resource.apply()?;
            ctx.log.info(&format!("{} {desc}", opts.done));
            delta.changed += 1;
        }
    }
    Ok(delta)
}
