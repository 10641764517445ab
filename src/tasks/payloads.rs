//! Payload file writing tasks.
use anyhow::Result;
use std::sync::Arc;

use super::{Context, ProcessOpts, Task, TaskResult, process_resources};
use crate::config::payloads::Payload;
use crate::resources::payload_file::PayloadFileResource;

/// Write one payload into the profile, replacing whatever is there.
#[derive(Debug)]
pub struct WritePayload {
    payload: &'static Payload,
    name: String,
}

impl WritePayload {
    /// Create the task for `payload`.
    #[must_use]
    pub fn new(payload: &'static Payload) -> Self {
        Self {
            payload,
            name: format!("Write {}", payload.name),
        }
    }
}

impl Task for WritePayload {
    fn name(&self) -> &str {
        &self.name
    }

    fn filter_key(&self) -> Option<&str> {
        Some(self.payload.name)
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        let resource = PayloadFileResource::new(
            self.payload,
            ctx.config.payload_path(self.payload),
            Arc::clone(&ctx.fs_ops),
        );
        process_resources(ctx, [resource], &ProcessOpts::new("write", "wrote"))
    }
}
