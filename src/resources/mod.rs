//! Idempotent resource primitives (check + apply pattern).
pub mod directory;
pub mod error;
pub mod payload_file;

use anyhow::Result;

/// State of a resource on disk.
///
/// # Examples
///
/// ```
/// use mpv_setup_cli::resources::ResourceState;
///
/// let missing = ResourceState::Missing;
/// let wrong = ResourceState::Incorrect { current: "existing file".into() };
///
/// assert_ne!(missing, ResourceState::Correct);
/// assert_ne!(wrong, missing);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceState {
    /// Resource does not exist.
    Missing,
    /// Resource exists and matches the desired state.
    Correct,
    /// Something exists at the path but does not match the desired state.
    Incorrect {
        /// What currently occupies the path.
        current: String,
    },
}

/// Unified interface for resources that can be checked and applied.
///
/// # Examples
///
/// ```ignore
/// match resource.current_state()? {
///     ResourceState::Correct => {}
///     ResourceState::Missing | ResourceState::Incorrect { .. } => resource.apply()?,
/// }
/// ```
pub trait Resource {
    /// Human-readable description of this resource.
    fn description(&self) -> String;

    /// Check the current state of the resource.
    ///
    /// # Errors
    ///
    /// Returns an error if the state cannot be determined.
    fn current_state(&self) -> Result<ResourceState>;

    /// Bring the resource to its desired state.
    ///
    /// # Errors
    ///
    /// Returns an error if the change cannot be applied, typically a
    /// [`ResourceError`](error::ResourceError) converted with `?`.
    fn apply(&self) -> Result<()>;
}
