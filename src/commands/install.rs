//! Install subcommand.
use anyhow::Result;
use std::io;
use std::sync::Arc;

use crate::cli::{GlobalOpts, InstallOpts};
use crate::config::layout::{self, ProfileLayout};
use crate::config::profile;
use crate::error::ProfileError;
use crate::logging::{Log, Logger};
use crate::operations::{FileSystemOps, SystemFileSystemOps};
use crate::platform::Platform;
use crate::prompt;
use crate::tasks::{self, Context};

/// How an install run ended.
#[derive(Debug)]
pub enum Outcome {
    /// The profile was verified and every selected task ran.
    Done {
        /// Number of tasks that failed.
        failed: usize,
    },
    /// The username was rejected; nothing was written.
    Rejected(ProfileError),
}

/// Verify `username` and, if accepted, provision the mpv settings tree.
///
/// Every selected task runs even when an earlier one fails; failures are
/// recorded in `log` and counted in the returned [`Outcome`].
pub fn provision(
    layout: &ProfileLayout,
    username: &str,
    opts: &InstallOpts,
    dry_run: bool,
    fs_ops: Arc<dyn FileSystemOps>,
    log: &Arc<Logger>,
) -> Outcome {
    log.stage("Verifying profile");
    let config = match profile::verify(layout, username, fs_ops.as_ref()) {
        Ok(config) => config,
        Err(e) => {
            report_rejection(&e, layout, log.as_ref());
            return Outcome::Rejected(e);
        }
    };
    log.accept_profile(&config.username, &config.profile_dir);

    let ctx = Context::new(
        Arc::new(config),
        Arc::clone(log) as Arc<dyn Log>,
        dry_run,
        fs_ops,
    );
    let all = tasks::all_install_tasks();
    let selected = tasks::select(&all, &opts.skip, &opts.only);
    log.debug(&format!("{} of {} tasks selected", selected.len(), all.len()));
    for task in selected {
        tasks::execute(task, &ctx);
    }

    log.print_summary();
    Outcome::Done {
        failed: log.failure_count(),
    }
}

fn report_rejection(e: &ProfileError, layout: &ProfileLayout, log: &dyn Log) {
    log.error(&e.to_string());
    if let Some(name) = e.case_insensitive_match() {
        log.warn(&format!("did you mean '{name}'?"));
    } else if let ProfileError::NotFound { candidates, .. } = e
        && !candidates.is_empty()
    {
        log.info(&format!(
            "profiles under {}: {}",
            layout.root().display(),
            candidates.join(", ")
        ));
    }
}

/// Run the install command.
///
/// # Errors
///
/// Returns an error if the username cannot be read, the profile is rejected,
/// or any task failed.
pub fn run(global: &GlobalOpts, opts: &InstallOpts, log: &Arc<Logger>) -> Result<()> {
    log.debug(&format!("mpv-setup {}", super::version::version()));

    let platform = Platform::detect();
    let layout = layout::resolve_layout(global.users_root.as_deref(), &platform, log.as_ref())?;

    let username = match &opts.user {
        Some(user) => prompt::first_token(user).to_string(),
        None => prompt::read_username(&mut io::stdin().lock(), &mut io::stdout())?,
    };

    match provision(
        &layout,
        &username,
        opts,
        global.dry_run,
        Arc::new(SystemFileSystemOps),
        log,
    ) {
        Outcome::Rejected(_) => anyhow::bail!("no files written"),
        Outcome::Done { failed: 0 } => Ok(()),
        Outcome::Done { failed } => anyhow::bail!("{failed} task(s) failed"),
    }
}
