//! Domain-specific error types for the mpv setup engine.
//!
//! Internal modules return typed errors built with [`thiserror`] while command
//! handlers at the CLI boundary convert them to [`anyhow::Error`] via the
//! standard `?` operator.
//!
//! # Error hierarchy
//!
//! ```text
//! ProfileError  : username rejected by the existence gate
//! InputError    : the interactive username prompt could not be read
//! ResourceError : directory creation, file open and write failures
//!                 (see crate::resources::error)
//! ```

use thiserror::Error;

/// Errors that reject a username before anything is written.
#[derive(Error, Debug)]
pub enum ProfileError {
    /// The username was empty (or whitespace only).
    #[error("empty username: expected a profile name such as {convention}")]
    EmptyUsername {
        /// Expected path convention, e.g. `C:\Users\<username>\`.
        convention: String,
    },

    /// No directory exists at the resolved profile path.
    #[error("incorrect username '{username}': {path} is not a directory (expected {convention})")]
    NotFound {
        /// Username as entered.
        username: String,
        /// Resolved profile path that was checked.
        path: String,
        /// Expected path convention, e.g. `C:\Users\<username>\`.
        convention: String,
        /// Profile directory names found under the users root.
        candidates: Vec<String>,
    },
}

impl ProfileError {
    /// Return a candidate that matches `username` ignoring ASCII case.
    #[must_use]
    pub fn case_insensitive_match(&self) -> Option<&str> {
        match self {
            Self::NotFound {
                username,
                candidates,
                ..
            } => candidates
                .iter()
                .find(|c| c.eq_ignore_ascii_case(username))
                .map(String::as_str),
            Self::EmptyUsername { .. } => None,
        }
    }
}

/// Errors that arise while reading the username from the console.
#[derive(Error, Debug)]
pub enum InputError {
    /// Standard input was closed before a username was entered.
    #[error("no username entered: standard input is closed")]
    Eof,

    /// Reading from or writing to the console failed.
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
