//! Command-line argument parsing for the `ozz` binary.
//!
//! clap only handles the global options; everything from the first
//! positional argument on is handed to the command list untouched.

use clap::Parser;
use ozz_commands::Config;
use std::path::PathBuf;

/// Dispatch a command to a fixed set of declared handlers.
#[derive(Parser, Debug)]
#[command(name = "ozz")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(long, value_name = "PATH", env = "OZZ_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Command followed by its arguments (try `help`)
    #[arg(
        value_name = "COMMAND",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub args: Vec<String>,
}

impl Cli {
    /// Parses command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Returns the config file path to use.
    ///
    /// Uses the --config argument if provided, otherwise the default path.
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::default_path)
    }

    /// Returns the token sequence to dispatch.
    pub fn tokens(&self) -> &[String] {
        &self.args
    }
}
