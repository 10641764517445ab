//! Profile path convention, existence gate, and embedded payloads.
pub mod layout;
pub mod payloads;
pub mod profile;

use std::path::PathBuf;

use payloads::{Location, Payload};

/// Path segments from a profile directory to the mpv settings folder.
pub const SETTINGS_PATH: [&str; 3] = ["AppData", "Roaming", "mpv"];

/// Name of the scripts folder inside the settings folder.
pub const SCRIPTS_DIR: &str = "scripts";

/// A username whose profile directory has been verified to exist.
///
/// Produced only by [`profile::verify`].
#[derive(Debug, Clone)]
pub struct Config {
    /// Username as entered.
    pub username: String,
    /// Existing profile directory, e.g. `C:\Users\Koby\`.
    pub profile_dir: PathBuf,
}

impl Config {
    /// `<profile>\AppData\Roaming\mpv`.
    #[must_use]
    pub fn settings_dir(&self) -> PathBuf {
        SETTINGS_PATH
            .iter()
            .fold(self.profile_dir.clone(), |dir, seg| dir.join(seg))
    }

    /// `<profile>\AppData\Roaming\mpv\scripts`.
    #[must_use]
    pub fn scripts_dir(&self) -> PathBuf {
        self.settings_dir().join(SCRIPTS_DIR)
    }

    /// Absolute destination of `payload` inside this profile.
    #[must_use]
    pub fn payload_path(&self, payload: &Payload) -> PathBuf {
        match payload.location {
            Location::Settings => self.settings_dir().join(payload.name),
            Location::Scripts => self.scripts_dir().join(payload.name),
        }
    }
}
