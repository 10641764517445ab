//! Payload file resource: a literal file that is always overwritten.
use anyhow::Result;
use std::io::Write as _;
use std::path::PathBuf;
use std::sync::Arc;

use super::error::ResourceError;
use super::{Resource, ResourceState};
use crate::config::payloads::Payload;
use crate::operations::FileSystemOps;

/// One payload written to its destination path.
///
/// The existing file is never read, so its state is either `Missing` or
/// `Incorrect` and [`apply`](Resource::apply) always truncates and rewrites.
#[derive(Debug, Clone)]
pub struct PayloadFileResource {
    /// Content to write.
    pub payload: &'static Payload,
    /// Destination file.
    pub path: PathBuf,
    fs: Arc<dyn FileSystemOps>,
}

impl PayloadFileResource {
    /// Create a resource writing `payload` to `path`.
    #[must_use]
    pub fn new(payload: &'static Payload, path: PathBuf, fs: Arc<dyn FileSystemOps>) -> Self {
        Self { payload, path, fs }
    }
}

impl Resource for PayloadFileResource {
    fn description(&self) -> String {
        self.path.display().to_string()
    }

    fn current_state(&self) -> Result<ResourceState> {
        if self.fs.exists(&self.path) {
            Ok(ResourceState::Incorrect {
                current: "existing file".to_string(),
            })
        } else {
            Ok(ResourceState::Missing)
        }
    }

    fn apply(&self) -> Result<()> {
        let mut file = self
            .fs
            .open_truncate(&self.path)
            .map_err(|source| ResourceError::Open {
                path: self.path.clone(),
                source,
            })?;
        file.write_all(self.payload.content.as_bytes())
            .and_then(|()| file.flush())
            .map_err(|source| ResourceError::Write {
                path: self.path.clone(),
                source,
            })?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::config::payloads::PAYLOADS;
    use crate::operations::{MockFileSystemOps, SystemFileSystemOps};
    use std::path::Path;

    #[test]
    fn writes_payload_bytes_verbatim() {
        let fs = Arc::new(MockFileSystemOps::new().with_dir("/mpv"));
        let resource = PayloadFileResource::new(
            &PAYLOADS[0],
            PathBuf::from("/mpv/mpv.conf"),
            Arc::clone(&fs) as Arc<dyn FileSystemOps>,
        );
        assert_eq!(resource.current_state().unwrap(), ResourceState::Missing);
        resource.apply().unwrap();
        assert_eq!(
            fs.file(Path::new("/mpv/mpv.conf")).unwrap(),
            PAYLOADS[0].content.as_bytes()
        );
    }

    #[test]
    fn existing_file_is_always_rewritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.conf");
        std::fs::write(&path, "user edits that will be lost, and then some more").unwrap();
        let resource =
            PayloadFileResource::new(&PAYLOADS[1], path.clone(), Arc::new(SystemFileSystemOps));

        let existing = ResourceState::Incorrect {
            current: "existing file".to_string(),
        };
        assert_eq!(resource.current_state().unwrap(), existing);
        resource.apply().unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), PAYLOADS[1].content.as_bytes());
        assert_eq!(
            resource.current_state().unwrap(),
            existing,
            "payload files never report Correct"
        );
    }

    #[test]
    fn open_failure_is_typed() {
        let fs: Arc<dyn FileSystemOps> = Arc::new(
            MockFileSystemOps::new()
                .with_dir("/mpv")
                .with_unopenable("/mpv/input.conf"),
        );
        let resource = PayloadFileResource::new(&PAYLOADS[1], PathBuf::from("/mpv/input.conf"), fs);
        let err = resource.apply().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ResourceError>(),
            Some(ResourceError::Open { .. })
        ));
    }

    #[test]
    fn missing_parent_fails_to_open() {
        let fs: Arc<dyn FileSystemOps> = Arc::new(MockFileSystemOps::new());
        let resource =
            PayloadFileResource::new(&PAYLOADS[3], PathBuf::from("/mpv/scripts/autoload.lua"), fs);
        assert!(resource.apply().is_err());
    }
}
