//! The command set shipped with the `ozz` binary.

use std::path::{Path, PathBuf};

use ozz_commands::{Command, CommandList, CommandSpec, Config, HelpConfig, Result};

/// Prints its arguments separated by single spaces.
struct Echo;

impl CommandSpec for Echo {
    const NAME: &'static str = "echo";
    const HELP: &'static str = "Print the arguments";

    fn execute(args: &[String]) -> bool {
        println!("{}", args.join(" "));
        true
    }
}

/// Builds the top-level command list.
pub fn commands(config: &Config, config_path: &Path) -> Result<CommandList> {
    Ok(CommandList::new(vec![
        Command::of::<Echo>(),
        Command::new("sum add", "Add up integers", sum)?.with_additional_help(
            |indent, out| writeln!(out, "{:indent$}<integer>...\n", ""),
        ),
        Command::new("count wc", "Count the arguments", |args| {
            println!("{}", args.len());
            true
        })?,
        Command::group("text", "Transform text", text_commands(&config.help)?)?,
        Command::group(
            "config",
            "Inspect the configuration",
            config_commands(config, config_path.to_path_buf())?,
        )?,
    ])
    .with_config(config.help.clone()))
}

fn text_commands(help: &HelpConfig) -> Result<CommandList> {
    Ok(CommandList::new(vec![
        Command::new("upper", "Print the arguments in upper case", |args| {
            println!("{}", args.join(" ").to_uppercase());
            true
        })?,
        Command::new("lower", "Print the arguments in lower case", |args| {
            println!("{}", args.join(" ").to_lowercase());
            true
        })?,
        Command::new("reverse rev", "Print the arguments in reverse order", |args| {
            let reversed: Vec<&str> = args.iter().rev().map(String::as_str).collect();
            println!("{}", reversed.join(" "));
            true
        })?,
        Command::new("join", "Join the arguments with the first one", join)?,
    ])
    .with_config(help.clone()))
}

fn config_commands(config: &Config, path: PathBuf) -> Result<CommandList> {
    let help = config.help.clone();
    let config = config.clone();
    Ok(CommandList::new(vec![
        Command::new("show", "Print the effective configuration", move |args| {
            if !args.is_empty() {
                eprintln!("config show takes no arguments");
                return false;
            }
            match toml::to_string(&config) {
                Ok(rendered) => {
                    print!("{rendered}");
                    true
                }
                Err(e) => {
                    tracing::error!("Could not render configuration: {e}");
                    false
                }
            }
        })?,
        Command::new("path", "Print the configuration file path", move |args| {
            if !args.is_empty() {
                eprintln!("config path takes no arguments");
                return false;
            }
            println!("{}", path.display());
            true
        })?,
    ])
    .with_config(help))
}

fn sum(args: &[String]) -> bool {
    let values = match parse_integers(args) {
        Ok(values) => values,
        Err(bad) => {
            eprintln!("Not an integer: {bad}");
            return false;
        }
    };
    match values.iter().try_fold(0i64, |acc, v| acc.checked_add(*v)) {
        Some(total) => {
            println!("{total}");
            true
        }
        None => {
            eprintln!("Sum overflows a 64-bit integer");
            false
        }
    }
}

fn join(args: &[String]) -> bool {
    let Some((separator, words)) = args.split_first() else {
        eprintln!("Usage: text join <separator> <word>...");
        return false;
    };
    println!("{}", words.join(separator.as_str()));
    true
}

/// Parses every argument as an integer, returning the first that is not one.
fn parse_integers(args: &[String]) -> std::result::Result<Vec<i64>, &str> {
    args.iter()
        .map(|arg| arg.parse::<i64>().map_err(|_| arg.as_str()))
        .collect()
}
