//! Directory resource.
use anyhow::Result;
use std::path::PathBuf;
use std::sync::Arc;

use super::error::ResourceError;
use super::{Resource, ResourceState};
use crate::operations::FileSystemOps;

/// A directory that must exist, together with every missing ancestor.
#[derive(Debug, Clone)]
pub struct DirectoryResource {
    /// Directory to create.
    pub path: PathBuf,
    fs: Arc<dyn FileSystemOps>,
}

impl DirectoryResource {
    /// Create a new directory resource.
    #[must_use]
    pub fn new(path: PathBuf, fs: Arc<dyn FileSystemOps>) -> Self {
        Self { path, fs }
    }
}

impl Resource for DirectoryResource {
    fn description(&self) -> String {
        self.path.display().to_string()
    }

    fn current_state(&self) -> Result<ResourceState> {
        if self.fs.is_dir(&self.path) {
            Ok(ResourceState::Correct)
        } else if self.fs.exists(&self.path) {
            Ok(ResourceState::Incorrect {
                current: "not a directory".to_string(),
            })
        } else {
            Ok(ResourceState::Missing)
        }
    }

    fn apply(&self) -> Result<()> {
        self.fs
            .create_dir_all(&self.path)
            .map_err(|source| ResourceError::CreateDir {
                path: self.path.clone(),
                source,
            })?;
        Ok(())
    }
}
