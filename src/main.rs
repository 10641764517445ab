//! `mpv-setup` binary: parse arguments, run the command, pause, exit.
use std::io::{self, IsTerminal as _};
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;

use mpv_setup_cli::cli::{Cli, Command, InstallOpts};
use mpv_setup_cli::logging::Log as _;
use mpv_setup_cli::{commands, logging, prompt};

fn main() -> ExitCode {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = Cli::parse();
    let command = args
        .command
        .unwrap_or_else(|| Command::Install(InstallOpts::default()));

    logging::init_subscriber(args.verbose, command.log_name());
    let log = Arc::new(logging::Logger::new(command.log_name()));

    let result = match &command {
        Command::Install(opts) => commands::install::run(&args.global, opts, &log),
        Command::List(opts) => commands::list::run(opts),
        Command::Completions { shell } => {
            commands::completions::run(*shell);
            Ok(())
        }
        Command::Version => {
            commands::version::run();
            Ok(())
        }
    };

    if let Err(e) = &result {
        log.error(&format!("{e:#}"));
    }

    // Console windows opened by double-click close on exit.
    if matches!(command, Command::Install(_))
        && !args.global.no_pause
        && io::stdin().is_terminal()
    {
        prompt::pause(&mut io::stdin().lock(), &mut io::stdout()).ok();
    }

    if result.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
