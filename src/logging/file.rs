//! Per-command log file.
//!
//! The file is rewritten on every run: a `#` header naming the program,
//! command and start time, then one line per event. Once a username is
//! accepted, the user and profile directory are recorded as `#` lines too.
use std::ffi::OsString;
use std::fmt::Write as _;
use std::fs::{self, File};
use std::io::Write as _;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::layer::Context;

use super::event::{Fields, Kind};
use crate::platform::{Os, Platform};

/// Overrides the directory log files are written to.
const LOG_DIR_ENV: &str = "MPV_SETUP_LOG_DIR";

/// Directory holding the log files, looked up through `var`.
///
/// [`LOG_DIR_ENV`] wins. Windows hosts use `%LOCALAPPDATA%\mpv-setup`;
/// others use `$XDG_CACHE_HOME/mpv-setup` or `$HOME/.cache/mpv-setup`.
/// Empty variables count as unset.
pub(super) fn log_dir(os: Os, var: impl Fn(&str) -> Option<OsString>) -> Option<PathBuf> {
    let lookup = |key: &str| var(key).filter(|v| !v.is_empty()).map(PathBuf::from);
    lookup(LOG_DIR_ENV).or_else(|| {
        let base = match os {
            Os::Windows => lookup("LOCALAPPDATA"),
            Os::Other => lookup("XDG_CACHE_HOME")
                .or_else(|| lookup("HOME").map(|home| home.join(".cache"))),
        }?;
        Some(base.join("mpv-setup"))
    })
}

/// `<log dir>/<command>.log` for this host and environment.
pub(super) fn default_log_path(command: &str) -> Option<PathBuf> {
    log_dir(Platform::detect().os, |key| std::env::var_os(key))
        .map(|dir| dir.join(format!("{command}.log")))
}

/// A [`tracing_subscriber::Layer`] appending every event it receives to the
/// log file, without colour and with a UTC time stamp.
#[derive(Debug)]
pub(super) struct FileLayer {
    file: Mutex<File>,
}

impl FileLayer {
    /// Create (or truncate) `path` and write the run header for `command`.
    ///
    /// Returns `None` when the directory or file cannot be created; logging
    /// then continues on the console only.
    pub(super) fn create(path: &Path, command: &str) -> Option<Self> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).ok()?;
        }
        let mut file = File::create(path).ok()?;
        let header = format!(
            "# mpv-setup {} ({command})\n# started {}\n",
            crate::commands::version::version(),
            chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC"),
        );
        file.write_all(header.as_bytes()).ok()?;
        Some(Self {
            file: Mutex::new(file),
        })
    }
}

/// Render one event as log file text (without the trailing newline).
fn render(kind: Kind, fields: &Fields, time: &str) -> String {
    if kind == Kind::Profile {
        return format!(
            "# user {}\n# profile {}",
            fields.get("username").unwrap_or_default(),
            fields.get("dir").unwrap_or_default()
        );
    }
    let mut line = format!("{time} {} {}", kind.tag(), fields.message);
    for (key, value) in &fields.extra {
        // write! to a String is infallible
        write!(line, " {key}={value}").unwrap_or(());
    }
    line
}

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for FileLayer {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let time = chrono::Utc::now().format("%H:%M:%S").to_string();
        let line = render(Kind::of(event), &Fields::of(event), &time);
        if let Ok(mut file) = self.file.lock() {
            writeln!(file, "{line}").ok();
        }
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<OsString> {
        let map: HashMap<String, OsString> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), OsString::from(v)))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn windows_logs_under_local_app_data() {
        let dir = log_dir(
            Os::Windows,
            env(&[
                ("LOCALAPPDATA", r"C:\Users\Koby\AppData\Local"),
                ("XDG_CACHE_HOME", "/ignored"),
            ]),
        );
        assert_eq!(
            dir,
            Some(PathBuf::from(r"C:\Users\Koby\AppData\Local").join("mpv-setup"))
        );
    }

    #[test]
    fn other_hosts_prefer_xdg_cache_home() {
        let dir = log_dir(
            Os::Other,
            env(&[("XDG_CACHE_HOME", "/cache"), ("HOME", "/home/koby")]),
        );
        assert_eq!(dir, Some(PathBuf::from("/cache/mpv-setup")));
    }

    #[test]
    fn other_hosts_fall_back_to_home_cache() {
        let dir = log_dir(
            Os::Other,
            env(&[("XDG_CACHE_HOME", ""), ("HOME", "/home/koby")]),
        );
        assert_eq!(dir, Some(PathBuf::from("/home/koby/.cache/mpv-setup")));
    }

    #[test]
    fn override_wins_on_every_host() {
        for os in [Os::Windows, Os::Other] {
            let dir = log_dir(
                os,
                env(&[(LOG_DIR_ENV, "/logs"), ("LOCALAPPDATA", "/local")]),
            );
            assert_eq!(dir, Some(PathBuf::from("/logs")));
        }
    }

    #[test]
    fn no_base_directory_means_no_log() {
        assert_eq!(log_dir(Os::Windows, env(&[("HOME", "/home/koby")])), None);
        assert_eq!(log_dir(Os::Other, env(&[])), None);
    }

    #[test]
    fn create_writes_header_and_parent_dirs() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("nested/install.log");
        FileLayer::create(&path, "install").expect("log file");
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("# mpv-setup "));
        assert!(contents.contains("(install)"));
        assert!(contents.contains("# started "));
    }

    #[test]
    fn create_truncates_previous_run() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("install.log");
        fs::write(&path, "previous run\n").unwrap();
        FileLayer::create(&path, "install").expect("log file");
        assert!(!fs::read_to_string(&path).unwrap().contains("previous run"));
    }

    #[test]
    fn render_appends_extra_fields() {
        let fields = Fields {
            message: "✓ Write mpv.conf".to_string(),
            extra: vec![("status", "ok".to_string())],
        };
        assert_eq!(
            render(Kind::Result, &fields, "12:00:00"),
            "12:00:00 RESULT ✓ Write mpv.conf status=ok"
        );
    }

    #[test]
    fn render_profile_extends_header() {
        let fields = Fields {
            message: "username 'Koby' accepted".to_string(),
            extra: vec![
                ("username", "Koby".to_string()),
                ("dir", r"C:\Users\Koby".to_string()),
            ],
        };
        assert_eq!(
            render(Kind::Profile, &fields, "12:00:00"),
            "# user Koby\n# profile C:\\Users\\Koby"
        );
    }
}
