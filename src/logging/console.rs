//! Console rendering.
use std::fmt;

use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

use super::event::{Fields, Kind};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const BLUE: &str = "\x1b[1;34m";

/// Formats events for a Windows console window: stage arrows, indented
/// detail lines, and per-task results coloured by their `status` field.
pub(super) struct ConsoleFormat;

impl<S, N> FormatEvent<S, N> for ConsoleFormat
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &tracing::Event<'_>,
    ) -> fmt::Result {
        let fields = Fields::of(event);
        let msg = &fields.message;
        match Kind::of(event) {
            Kind::Stage => writeln!(writer, "{BLUE}==>{RESET} {BOLD}{msg}{RESET}"),
            Kind::Error => writeln!(writer, "{RED}error:{RESET} {msg}"),
            Kind::Warn => writeln!(writer, "{YELLOW}warning:{RESET} {msg}"),
            Kind::DryRun => writeln!(writer, "  {YELLOW}[DRY RUN]{RESET} {msg}"),
            Kind::Profile => writeln!(writer, "  {GREEN}{msg}{RESET}"),
            Kind::Result => {
                let colour = match fields.get("status") {
                    Some("ok") => GREEN,
                    Some("failed") => RED,
                    _ => DIM,
                };
                writeln!(writer, "  {colour}{msg}{RESET}")
            }
            Kind::Info => writeln!(writer, "  {msg}"),
            Kind::Debug => writeln!(writer, "  {DIM}{msg}{RESET}"),
        }
    }
}
