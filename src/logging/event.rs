//! Event classification and field capture shared by the console and the log file.
use std::fmt;

use tracing::field::{Field, Visit};
use tracing::{Event, Level};

/// Target of stage headers.
pub(super) const STAGE: &str = "mpv_setup::stage";
/// Target of dry-run previews.
pub(super) const DRY_RUN: &str = "mpv_setup::dry_run";
/// Target of the accepted-profile record.
pub(super) const PROFILE: &str = "mpv_setup::profile";
/// Target of per-task result lines.
pub(super) const RESULT: &str = "mpv_setup::result";

/// How an event is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Kind {
    Stage,
    DryRun,
    Profile,
    Result,
    Error,
    Warn,
    Info,
    Debug,
}

impl Kind {
    pub(super) fn of(event: &Event<'_>) -> Self {
        let meta = event.metadata();
        match (*meta.level(), meta.target()) {
            (Level::ERROR, _) => Self::Error,
            (Level::WARN, _) => Self::Warn,
            (Level::INFO, STAGE) => Self::Stage,
            (Level::INFO, DRY_RUN) => Self::DryRun,
            (Level::INFO, PROFILE) => Self::Profile,
            (Level::INFO, RESULT) => Self::Result,
            (Level::INFO, _) => Self::Info,
            _ => Self::Debug,
        }
    }

    /// Fixed-width tag written in front of each log file line.
    pub(super) const fn tag(self) -> &'static str {
        match self {
            Self::Stage => "STAGE ",
            Self::DryRun => "DRYRUN",
            Self::Profile => "USER  ",
            Self::Result => "RESULT",
            Self::Error => "ERROR ",
            Self::Warn => "WARN  ",
            Self::Info => "INFO  ",
            Self::Debug => "DEBUG ",
        }
    }
}

/// The `message` of an event plus every other field, in recording order.
#[derive(Debug, Default)]
pub(super) struct Fields {
    pub(super) message: String,
    pub(super) extra: Vec<(&'static str, String)>,
}

impl Fields {
    pub(super) fn of(event: &Event<'_>) -> Self {
        let mut fields = Self::default();
        event.record(&mut fields);
        fields
    }

    pub(super) fn get(&self, name: &str) -> Option<&str> {
        self.extra
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    fn push(&mut self, field: &Field, value: String) {
        if field.name() == "message" {
            self.message = value;
        } else {
            self.extra.push((field.name(), value));
        }
    }
}

impl Visit for Fields {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.push(field, value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.push(field, format!("{value:?}"));
    }
}
