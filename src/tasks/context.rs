use std::sync::Arc;

use crate::config::Config;
use crate::logging::Log;
use crate::operations::FileSystemOps;

/// Shared context for task execution.
pub struct Context {
    /// Verified profile the tasks write into.
    pub config: Arc<Config>,
    /// Logger for output and task recording.
    pub log: Arc<dyn Log>,
    /// Whether to perform a dry run (preview changes without applying).
    pub dry_run: bool,
    /// Filesystem operation abstraction (injectable for testing).
    pub fs_ops: Arc<dyn FileSystemOps>,
}

impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("config", &self.config)
            .field("log", &"<dyn Log>")
            .field("dry_run", &self.dry_run)
            .field("fs_ops", &self.fs_ops)
            .finish()
    }
}

impl Context {
    /// Creates a new context for task execution.
    #[must_use]
    pub const fn new(
        config: Arc<Config>,
        log: Arc<dyn Log>,
        dry_run: bool,
        fs_ops: Arc<dyn FileSystemOps>,
    ) -> Self {
        Self {
            config,
            log,
            dry_run,
            fs_ops,
        }
    }

    /// Create a copy of this context with a different logger.
    #[must_use]
    pub fn with_log(&self, log: Arc<dyn Log>) -> Self {
        Self {
            config: Arc::clone(&self.config),
            log,
            dry_run: self.dry_run,
            fs_ops: Arc::clone(&self.fs_ops),
        }
    }
}
