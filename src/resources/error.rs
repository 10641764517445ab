//! Typed error variants for resource operations.
//!
//! This module provides [`ResourceError`], a structured error type for
//! resource apply operations.  Resource code returns these variants and
//! callers convert to [`anyhow::Error`] via `?`.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that arise while creating directories or writing payload files.
#[derive(Error, Debug)]
pub enum ResourceError {
    /// A directory (or one of its ancestors) could not be created.
    #[error("cannot create directory {}: {source}", .path.display())]
    CreateDir {
        /// Directory that was being created.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A file could not be opened for writing.
    #[error("cannot open {} for writing: {source}", .path.display())]
    Open {
        /// File that was being opened.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A file was opened but its content could not be written.
    #[error("cannot write {}: {source}", .path.display())]
    Write {
        /// File that was being written.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}
