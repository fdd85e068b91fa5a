//! ozz - runs one of a fixed set of declared commands.

mod cli;
mod demo;

use std::io;
use std::process::ExitCode;

use cli::Cli;
use ozz_commands::{logging, CommandList, Config, DispatchOutcome, Result};
use tracing::{debug, error};

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init_stderr_logging(cli.verbose);

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            error!("{}: {}", e.category(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let config_path = cli.config_path();
    debug!("Loading config from: {}", config_path.display());
    let config = Config::load_from_file(&config_path)?;

    let commands = demo::commands(&config, &config_path)?;
    let outcome = commands.dispatch(cli.tokens());
    exit_code(&commands, cli.tokens(), outcome)
}

/// Maps a dispatch outcome to the process exit status.
///
/// Input that selected no command prints a hint (or the full help when there
/// was no input) and exits with 2; a failing handler exits with 1.
fn exit_code(
    commands: &CommandList,
    tokens: &[String],
    outcome: DispatchOutcome,
) -> Result<ExitCode> {
    let code = match outcome {
        DispatchOutcome::Executed | DispatchOutcome::HelpShown => ExitCode::SUCCESS,
        DispatchOutcome::HandlerFailed => ExitCode::from(1),
        DispatchOutcome::EmptyInput => {
            commands.emit_help(0, &mut io::stdout().lock())?;
            ExitCode::from(2)
        }
        DispatchOutcome::NoMatch => {
            let command = tokens.first().map(String::as_str).unwrap_or_default();
            eprintln!(
                "Unknown command: {}. Run `ozz {}` for available commands.",
                command,
                commands.config().keyword
            );
            ExitCode::from(2)
        }
    };
    Ok(code)
}
