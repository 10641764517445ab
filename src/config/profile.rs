//! Existence gate: a username is accepted only if its profile directory exists.
use std::path::PathBuf;

use super::Config;
use super::layout::ProfileLayout;
use crate::error::ProfileError;
use crate::operations::FileSystemOps;

/// Resolve `username` through `layout` and confirm the result is a directory.
///
/// The check is advisory: it does not prove the directory is writable.
///
/// # Errors
///
/// Returns [`ProfileError::EmptyUsername`] for an empty name and
/// [`ProfileError::NotFound`] when the resolved path is missing or is not a
/// directory. The latter lists the profiles found under the users root.
pub fn verify(
    layout: &ProfileLayout,
    username: &str,
    fs: &dyn FileSystemOps,
) -> Result<Config, ProfileError> {
    if username.is_empty() {
        return Err(ProfileError::EmptyUsername {
            convention: layout.convention(),
        });
    }

    let path = layout.resolve(username);
    let profile_dir = PathBuf::from(&path);
    if !fs.is_dir(&profile_dir) {
        return Err(ProfileError::NotFound {
            username: username.to_string(),
            path,
            convention: layout.convention(),
            candidates: fs.list_dirs(layout.root()).unwrap_or_default(),
        });
    }

    Ok(Config {
        username: username.to_string(),
        profile_dir,
    })
}
