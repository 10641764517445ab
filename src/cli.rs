//! Command-line argument definitions.
use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Top-level CLI entry point for the mpv configuration installer.
#[derive(Parser, Debug)]
#[command(
    name = "mpv-setup",
    about = "Write a ready-made mpv configuration into a Windows user profile",
    version
)]
pub struct Cli {
    /// Subcommand to run (defaults to `install`).
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Options shared across all subcommands.
    #[command(flatten)]
    pub global: GlobalOpts,
}

/// Options shared across all subcommands.
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOpts {
    /// Preview changes without writing
    #[arg(short = 'd', long, global = true)]
    pub dry_run: bool,

    /// Override the directory holding user profiles (default: C:\Users)
    #[arg(long, global = true, value_name = "DIR")]
    pub users_root: Option<std::path::PathBuf>,

    /// Do not wait for Enter before exiting
    #[arg(long, global = true)]
    pub no_pause: bool,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write the mpv configuration for a user (default)
    Install(InstallOpts),
    /// Show the embedded payloads (name, path, size, sha256)
    List(ListOpts),
    /// Print a shell completion script
    Completions {
        /// Target shell
        shell: Shell,
    },
    /// Print version information
    Version,
}

impl Command {
    /// Name used for the log file of this command.
    #[must_use]
    pub const fn log_name(&self) -> &'static str {
        match self {
            Self::Install(_) => "install",
            Self::List(_) => "list",
            Self::Completions { .. } => "completions",
            Self::Version => "version",
        }
    }
}

/// Options for the `install` subcommand.
#[derive(Parser, Debug, Clone, Default)]
pub struct InstallOpts {
    /// Username (prompted for when omitted)
    #[arg(short, long)]
    pub user: Option<String>,

    /// Skip payloads whose name contains any keyword
    #[arg(long, value_delimiter = ',')]
    pub skip: Vec<String>,

    /// Write only payloads whose name contains a keyword
    #[arg(long, value_delimiter = ',')]
    pub only: Vec<String>,
}

/// Options for the `list` subcommand.
#[derive(Parser, Debug, Clone, Default)]
pub struct ListOpts {
    /// Emit JSON instead of a table
    #[arg(long)]
    pub json: bool,
}
