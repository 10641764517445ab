//! Profile path convention: `<prefix><username><suffix>`.
use anyhow::{Context as _, Result};
use std::ffi::OsStr;
use std::path::{MAIN_SEPARATOR, Path, PathBuf};

use crate::logging::Log;
use crate::platform::Platform;

/// Environment variable that overrides the users root.
pub const USERS_ROOT_ENV: &str = "MPV_SETUP_USERS_ROOT";

/// Users root on Windows.
const WINDOWS_USERS_ROOT: &str = r"C:\Users";

/// Where the users root was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutSource {
    /// `--users-root` on the command line.
    Flag,
    /// The [`USERS_ROOT_ENV`] environment variable.
    Env,
    /// The built-in `C:\Users` convention.
    Default,
}

/// How a username maps onto a profile directory path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileLayout {
    root: PathBuf,
    prefix: String,
    suffix: String,
}

impl ProfileLayout {
    /// The fixed Windows convention, `C:\Users\<username>\`.
    #[must_use]
    pub fn windows() -> Self {
        Self {
            root: PathBuf::from(WINDOWS_USERS_ROOT),
            prefix: format!("{WINDOWS_USERS_ROOT}\\"),
            suffix: "\\".to_string(),
        }
    }

    /// Profiles living directly under `root`, separated with the host separator.
    #[must_use]
    pub fn under(root: &Path) -> Self {
        let display = root.to_string_lossy();
        let trimmed = display.trim_end_matches(['/', '\\']);
        Self {
            root: root.to_path_buf(),
            prefix: format!("{trimmed}{MAIN_SEPARATOR}"),
            suffix: MAIN_SEPARATOR.to_string(),
        }
    }

    /// Directory holding every user profile.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Compose the profile path for `username`. Pure string composition.
    ///
    /// ```
    /// use mpv_setup_cli::config::layout::ProfileLayout;
    ///
    /// assert_eq!(ProfileLayout::windows().resolve("Koby"), r"C:\Users\Koby\");
    /// ```
    #[must_use]
    pub fn resolve(&self, username: &str) -> String {
        format!("{}{username}{}", self.prefix, self.suffix)
    }

    /// The path convention shown to the user, e.g. `C:\Users\<username>\`.
    #[must_use]
    pub fn convention(&self) -> String {
        self.resolve("<username>")
    }
}

/// Pick the layout from the CLI override, then the environment, then the
/// Windows default.
///
/// An override that exists is canonicalized; one that does not is kept as
/// given so that verification reports the path the user typed.
///
/// # Errors
///
/// Returns an error if an existing override directory cannot be canonicalized.
pub fn select_layout(
    cli_override: Option<&Path>,
    env_override: Option<&OsStr>,
) -> Result<(ProfileLayout, LayoutSource)> {
    let chosen = cli_override
        .map(|p| (p.to_path_buf(), LayoutSource::Flag))
        .or_else(|| {
            env_override
                .filter(|v| !v.is_empty())
                .map(|v| (PathBuf::from(v), LayoutSource::Env))
        });

    let Some((root, source)) = chosen else {
        return Ok((ProfileLayout::windows(), LayoutSource::Default));
    };

    let root = if root.is_dir() {
        dunce::canonicalize(&root)
            .with_context(|| format!("resolving users root {}", root.display()))?
    } else {
        root
    };
    Ok((ProfileLayout::under(&root), source))
}

/// Resolve the layout for this run, reading [`USERS_ROOT_ENV`] and warning
/// when the Windows default is used on another host.
///
/// # Errors
///
/// Returns an error if an existing override directory cannot be canonicalized.
pub fn resolve_layout(
    cli_override: Option<&Path>,
    platform: &Platform,
    log: &dyn Log,
) -> Result<ProfileLayout> {
    let env = std::env::var_os(USERS_ROOT_ENV);
    let (layout, source) = select_layout(cli_override, env.as_deref())?;
    match source {
        LayoutSource::Flag => log.debug("users root from --users-root"),
        LayoutSource::Env => log.debug(&format!("users root from {USERS_ROOT_ENV}")),
        LayoutSource::Default if !platform.is_windows() => log.warn(&format!(
            "host is {}: {WINDOWS_USERS_ROOT} will not exist here (use --users-root or {USERS_ROOT_ENV})",
            platform.os
        )),
        LayoutSource::Default => {}
    }
    log.debug(&format!("users root: {}", layout.root().display()));
    Ok(layout)
}
