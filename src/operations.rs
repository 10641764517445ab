//! Filesystem operation abstractions for dependency injection.
//!
//! Provides the [`FileSystemOps`] trait so that the existence gate, the
//! directory provisioner and the payload emitters can be unit-tested without
//! touching the real filesystem.  Production code uses
//! [`SystemFileSystemOps`]; tests use `MockFileSystemOps`.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Abstraction over the filesystem calls made while provisioning a profile.
pub trait FileSystemOps: Send + Sync + std::fmt::Debug {
    /// Returns `true` if `path` exists on the filesystem.
    fn exists(&self, path: &Path) -> bool;

    /// Returns `true` if `path` is an existing directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Create `path` and every missing ancestor.
    ///
    /// # Errors
    ///
    /// Returns an error if any level cannot be created.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Open `path` for writing, creating it or truncating existing content.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened for writing.
    fn open_truncate(&self, path: &Path) -> io::Result<Box<dyn Write>>;

    /// Names of the immediate subdirectories of `path`, sorted.
    ///
    /// # Errors
    ///
    /// Returns an error if `path` cannot be read as a directory.
    fn list_dirs(&self, path: &Path) -> io::Result<Vec<String>>;
}

/// Production [`FileSystemOps`] implementation that delegates to [`std::fs`].
#[derive(Debug, Default)]
pub struct SystemFileSystemOps;

impl FileSystemOps for SystemFileSystemOps {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn open_truncate(&self, path: &Path) -> io::Result<Box<dyn Write>> {
        Ok(Box::new(fs::File::create(path)?))
    }

    fn list_dirs(&self, path: &Path) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(path)? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        names.sort();
        Ok(names)
    }
}

/// Mock [`FileSystemOps`] for unit tests.
///
/// Directories and files live in memory.  Paths registered with
/// [`with_unopenable`](Self::with_unopenable) fail to open, which is how tests
/// simulate a single emitter losing write permission.
///
/// # Example
///
/// ```ignore
/// let fs = MockFileSystemOps::new()
///     .with_dir(r"C:\Users\Koby\")
///     .with_unopenable(r"C:\Users\Koby\AppData\Roaming\mpv\input.conf");
/// ```
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MockFileSystemOps {
    dirs: std::sync::Mutex<std::collections::BTreeSet<std::path::PathBuf>>,
    files: std::sync::Arc<
        std::sync::Mutex<std::collections::BTreeMap<std::path::PathBuf, Vec<u8>>>,
    >,
    unopenable: Vec<std::path::PathBuf>,
    fail_create_dir: bool,
}

#[cfg(test)]
#[allow(clippy::expect_used)]
impl MockFileSystemOps {
    /// Create an empty mock with nothing configured.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `path` as an existing directory.
    #[must_use]
    pub fn with_dir(self, path: impl Into<std::path::PathBuf>) -> Self {
        self.dirs
            .lock()
            .expect("mock dirs poisoned")
            .insert(normalize(&path.into()));
        self
    }

    /// Make every `open_truncate` call for `path` fail with permission denied.
    #[must_use]
    pub fn with_unopenable(mut self, path: impl Into<std::path::PathBuf>) -> Self {
        self.unopenable.push(normalize(&path.into()));
        self
    }

    /// Make every `create_dir_all` call fail.
    #[must_use]
    pub const fn with_failing_create_dir(mut self) -> Self {
        self.fail_create_dir = true;
        self
    }

    /// Contents written to `path`, if any.
    #[must_use]
    pub fn file(&self, path: &Path) -> Option<Vec<u8>> {
        self.files
            .lock()
            .expect("mock files poisoned")
            .get(&normalize(path))
            .cloned()
    }

    /// Number of files written so far.
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.files.lock().expect("mock files poisoned").len()
    }
}

/// Drop trailing separators so `C:\Users\Koby\` and `C:\Users\Koby` compare equal.
#[cfg(test)]
fn normalize(path: &Path) -> std::path::PathBuf {
    path.components().collect()
}

/// Writer handed out by [`MockFileSystemOps::open_truncate`].
#[cfg(test)]
#[derive(Debug)]
struct MockFile {
    path: std::path::PathBuf,
    files: std::sync::Arc<
        std::sync::Mutex<std::collections::BTreeMap<std::path::PathBuf, Vec<u8>>>,
    >,
}

#[cfg(test)]
impl Write for MockFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut files = self
            .files
            .lock()
            .map_err(|_| io::Error::other("mock files poisoned"))?;
        files.entry(self.path.clone()).or_default().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
impl FileSystemOps for MockFileSystemOps {
    fn exists(&self, path: &Path) -> bool {
        let path = normalize(path);
        self.is_dir(&path)
            || self
                .files
                .lock()
                .expect("mock files poisoned")
                .contains_key(&path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.dirs
            .lock()
            .expect("mock dirs poisoned")
            .contains(&normalize(path))
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        if self.fail_create_dir {
            return Err(io::Error::from(io::ErrorKind::PermissionDenied));
        }
        let mut dirs = self.dirs.lock().expect("mock dirs poisoned");
        for ancestor in normalize(path).ancestors() {
            if !ancestor.as_os_str().is_empty() {
                dirs.insert(ancestor.to_path_buf());
            }
        }
        Ok(())
    }

    fn open_truncate(&self, path: &Path) -> io::Result<Box<dyn Write>> {
        let path = normalize(path);
        if self.unopenable.contains(&path) {
            return Err(io::Error::from(io::ErrorKind::PermissionDenied));
        }
        let parent_exists = path.parent().is_some_and(|p| self.is_dir(p));
        if !parent_exists {
            return Err(io::Error::from(io::ErrorKind::NotFound));
        }
        self.files
            .lock()
            .expect("mock files poisoned")
            .insert(path.clone(), Vec::new());
        Ok(Box::new(MockFile {
            path,
            files: std::sync::Arc::clone(&self.files),
        }))
    }

    fn list_dirs(&self, path: &Path) -> io::Result<Vec<String>> {
        let path = normalize(path);
        if !self.is_dir(&path) {
            return Err(io::Error::from(io::ErrorKind::NotFound));
        }
        let dirs = self.dirs.lock().expect("mock dirs poisoned");
        Ok(dirs
            .iter()
            .filter(|d| d.parent() == Some(path.as_path()))
            .filter_map(|d| d.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .collect())
    }
}
