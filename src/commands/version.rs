//! Command: print version information.

/// Version string: `MPV_SETUP_VERSION` at build time, else the crate version.
#[must_use]
pub fn version() -> &'static str {
    option_env!("MPV_SETUP_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"))
}

/// Print the mpv-setup version to stdout.
#[allow(clippy::print_stdout)]
pub fn run() {
    println!("mpv-setup {}", version());
}
