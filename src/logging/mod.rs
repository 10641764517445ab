//! Console and log-file output built on `tracing`.
//!
//! Code logs through the [`Log`] trait. The subscriber installed by
//! [`init_subscriber`] renders events on the console and appends them to a
//! per-command log file (`%LOCALAPPDATA%\mpv-setup\<command>.log` on Windows).

mod console;
mod event;
mod file;
mod logger;
mod types;

pub use logger::Logger;
pub use types::{Log, TaskEntry, TaskStatus};

/// Install the global subscriber for a run of `command`.
///
/// Warnings and errors go to stderr, everything else to stdout; `DEBUG`
/// reaches the console only when `verbose`. The log file always records
/// `DEBUG` and above. Call once, before anything is logged.
pub fn init_subscriber(verbose: bool, command: &str) {
    use tracing_subscriber::fmt::writer::MakeWriterExt as _;
    use tracing_subscriber::{
        Layer as _, filter::LevelFilter, layer::SubscriberExt as _,
        util::SubscriberInitExt as _,
    };

    let console_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    let streams = std::io::stderr
        .with_max_level(tracing::Level::WARN)
        .and(std::io::stdout.with_min_level(tracing::Level::INFO));
    let console_layer = tracing_subscriber::fmt::layer()
        .event_format(console::ConsoleFormat)
        .with_writer(streams)
        .with_filter(console_level);

    let file_layer = file::default_log_path(command)
        .and_then(|path| file::FileLayer::create(&path, command))
        .map(|layer| layer.with_filter(LevelFilter::DEBUG));

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// A [`Logger`] whose events reach a fresh log file in a temporary
/// directory through a thread-local subscriber.
///
/// Keep the returned guard alive for the duration of the test.
#[cfg(test)]
#[allow(clippy::expect_used)]
pub(crate) fn isolated_logger() -> (Logger, tempfile::TempDir, tracing::dispatcher::DefaultGuard) {
    use tracing_subscriber::{Layer as _, filter::LevelFilter, layer::SubscriberExt as _};

    let tmp = tempfile::tempdir().expect("create temp dir");
    let path = tmp.path().join("test.log");
    let layer = file::FileLayer::create(&path, "test").expect("create log file");
    let subscriber =
        tracing_subscriber::registry().with(layer.with_filter(LevelFilter::DEBUG));
    let guard = tracing::dispatcher::set_default(&tracing::Dispatch::new(subscriber));
    (Logger::writing_to(Some(path)), tmp, guard)
}
