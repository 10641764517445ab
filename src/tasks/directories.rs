//! Directory provisioning task.
use anyhow::Result;
use std::sync::Arc;

use super::{Context, ProcessOpts, Task, TaskResult, process_resources};
use crate::resources::directory::DirectoryResource;

/// Ensure `AppData\Roaming\mpv\scripts` and every level above it exist.
#[derive(Debug)]
pub struct ProvisionDirectories;

impl Task for ProvisionDirectories {
    fn name(&self) -> &'static str {
        "Provision directories"
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        let resources = [ctx.config.settings_dir(), ctx.config.scripts_dir()]
            .into_iter()
            .map(|path| DirectoryResource::new(path, Arc::clone(&ctx.fs_ops)));
        process_resources(ctx, resources, &ProcessOpts::new("create", "created"))
    }
}
