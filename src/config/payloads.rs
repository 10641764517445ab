//! The five configuration files written into a profile, embedded at build time.
use std::fmt;

/// Which folder under the profile a payload is written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    /// `AppData\Roaming\mpv`
    Settings,
    /// `AppData\Roaming\mpv\scripts`
    Scripts,
}

/// What a payload configures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadKind {
    /// Player settings.
    Settings,
    /// Key bindings.
    KeyBindings,
    /// Free-form notes.
    Notes,
    /// Lua automation script.
    LuaScript,
    /// JavaScript automation script.
    JavaScript,
}

impl fmt::Display for PayloadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Settings => "settings",
            Self::KeyBindings => "key bindings",
            Self::Notes => "notes",
            Self::LuaScript => "lua script",
            Self::JavaScript => "javascript",
        };
        f.write_str(s)
    }
}

/// A literal file written verbatim into the mpv settings tree.
#[derive(Debug)]
pub struct Payload {
    /// File name, e.g. `mpv.conf`.
    pub name: &'static str,
    /// Destination folder.
    pub location: Location,
    /// What the file configures.
    pub kind: PayloadKind,
    /// Exact bytes to write.
    pub content: &'static str,
}

impl Payload {
    /// Path relative to the profile directory, in Windows notation.
    #[must_use]
    pub fn relative_display(&self) -> String {
        match self.location {
            Location::Settings => format!(r"AppData\Roaming\mpv\{}", self.name),
            Location::Scripts => format!(r"AppData\Roaming\mpv\scripts\{}", self.name),
        }
    }

    /// Size of the content in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.content.len()
    }

    /// Whether the content is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Lowercase hex SHA-256 digest of the content.
    #[must_use]
    pub fn sha256(&self) -> String {
        use sha2::{Digest, Sha256};
        use std::fmt::Write as _;

        let digest = Sha256::digest(self.content.as_bytes());
        let mut hex = String::with_capacity(64);
        for b in &digest {
            // write! to a String is infallible
            write!(hex, "{b:02x}").unwrap_or(());
        }
        hex
    }
}

/// Every payload, in the order they are written.
pub static PAYLOADS: [Payload; 5] = [
    Payload {
        name: "mpv.conf",
        location: Location::Settings,
        kind: PayloadKind::Settings,
        content: include_str!("../../payloads/mpv.conf"),
    },
    Payload {
        name: "input.conf",
        location: Location::Settings,
        kind: PayloadKind::KeyBindings,
        content: include_str!("../../payloads/input.conf"),
    },
    Payload {
        name: "notes.txt",
        location: Location::Settings,
        kind: PayloadKind::Notes,
        content: include_str!("../../payloads/notes.txt"),
    },
    Payload {
        name: "autoload.lua",
        location: Location::Scripts,
        kind: PayloadKind::LuaScript,
        content: include_str!("../../payloads/autoload.lua"),
    },
    Payload {
        name: "mpv_chapters.js",
        location: Location::Scripts,
        kind: PayloadKind::JavaScript,
        content: include_str!("../../payloads/mpv_chapters.js"),
    },
];

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn payload(name: &str) -> &'static Payload {
        PAYLOADS
            .iter()
            .find(|p| p.name == name)
            .expect("payload exists")
    }

    #[test]
    fn payload_names_in_write_order() {
        let names: Vec<&str> = PAYLOADS.iter().map(|p| p.name).collect();
        assert_eq!(
            names,
            [
                "mpv.conf",
                "input.conf",
                "notes.txt",
                "autoload.lua",
                "mpv_chapters.js"
            ]
        );
    }

    #[test]
    fn relative_paths_follow_locations() {
        assert_eq!(
            payload("mpv.conf").relative_display(),
            r"AppData\Roaming\mpv\mpv.conf"
        );
        assert_eq!(
            payload("mpv_chapters.js").relative_display(),
            r"AppData\Roaming\mpv\scripts\mpv_chapters.js"
        );
    }

    #[test]
    fn payload_digests_are_pinned() {
        let expected = [
            (
                "mpv.conf",
                7237,
                "304afb379d16f24157125a39c5ffb008b14c391cd1fc0a79919fcc4c25e4b969",
            ),
            (
                "input.conf",
                790,
                "2abe44c73f7afae274638e8425f19808854450d58d8e603ff5729eaa5b175cb3",
            ),
            (
                "notes.txt",
                3879,
                "b66232a7091010b10d9c0a1aa5f9cbc1049988e728ee5fd4006bc8a031ed84ca",
            ),
            (
                "autoload.lua",
                6773,
                "8b35cfefd8eceb1e28fb74a97ce92e722b68ad3000bc011a361020dd3bca9a9a",
            ),
            (
                "mpv_chapters.js",
                4641,
                "4053f58ce33781535da92aaec516b15c67a687f538b7afe5a7f21390a284cafb",
            ),
        ];
        for (name, len, sha) in expected {
            let p = payload(name);
            assert_eq!(p.len(), len, "{name} size");
            assert_eq!(p.sha256(), sha, "{name} digest");
        }
    }

    #[test]
    fn payloads_are_not_empty() {
        assert!(PAYLOADS.iter().all(|p| !p.is_empty()));
    }

    #[test]
    fn every_line_ends_with_crlf() {
        for p in &PAYLOADS {
            assert!(p.content.contains("\r\n"), "{}", p.name);
            assert!(
                !p.content.replace("\r\n", "").contains(['\r', '\n']),
                "{} has bare line endings",
                p.name
            );
        }
    }

    #[test]
    fn mpv_conf_keeps_non_ascii_bullet() {
        assert!(payload("mpv.conf").content.contains('•'));
    }

    #[test]
    fn scripts_end_where_the_originals_do() {
        assert!(payload("mpv_chapters.js").content.ends_with("});\r\n"));
        assert!(!payload("autoload.lua").content.ends_with('\n'));
    }

    #[test]
    fn kind_display() {
        assert_eq!(PayloadKind::KeyBindings.to_string(), "key bindings");
        assert_eq!(PayloadKind::LuaScript.to_string(), "lua script");
    }
}
