//! A single declared command: name, help text, handler and optional extra help.

use std::fmt;
use std::io::{self, Write};
use std::rc::Rc;

use super::help::{self, HELP_INDENT};
use super::list::CommandList;
use super::tokenizer::{aliases, has_alias};
use crate::error::{CommandError, Result};

/// Leaf behavior of a command, given the tokens after the matched alias.
pub type Handler = Box<dyn Fn(&[String]) -> bool>;

/// Extra help printer, given the indentation to print at.
pub type AdditionalHelp = Box<dyn Fn(usize, &mut dyn Write) -> io::Result<()>>;

/// Static description of a command type.
///
/// Implementors declare everything at the type level; [`Command::of`] turns
/// the type into a dispatchable [`Command`] and rejects an empty `NAME` at
/// compile time.
///
/// ```
/// use ozz_commands::{Command, CommandSpec};
///
/// struct Greet;
///
/// impl CommandSpec for Greet {
///     const NAME: &'static str = "greet hi";
///     const HELP: &'static str = "Print a greeting";
///
///     fn execute(args: &[String]) -> bool {
///         println!("hello {}", args.join(" "));
///         true
///     }
/// }
///
/// let greet = Command::of::<Greet>();
/// assert!(greet.matches("hi"));
/// ```
pub trait CommandSpec {
    /// Space-separated alias words; any one of them selects the command.
    const NAME: &'static str;
    /// One-line description shown in help output.
    const HELP: &'static str;

    /// Runs the command with the tokens following the matched alias.
    fn execute(args: &[String]) -> bool;

    /// Writes extra help (e.g. nested subcommands) at `indent`.
    fn additional_help(_indent: usize, _out: &mut dyn Write) -> io::Result<()> {
        Ok(())
    }
}

/// Result of offering a token sequence to one command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// No tokens were given.
    Empty,
    /// The leading token is not one of the command's aliases.
    NoMatch,
    /// The handler ran and returned the given result.
    Handled(bool),
}

/// A command ready for dispatch.
pub struct Command {
    name: String,
    help: String,
    aliases: Vec<String>,
    handler: Handler,
    additional_help: Option<AdditionalHelp>,
}

impl Command {
    /// Declares a command from a name, help text and handler.
    ///
    /// Fails if `name` has no non-empty alias word.
    pub fn new<F>(name: impl Into<String>, help: impl Into<String>, handler: F) -> Result<Self>
    where
        F: Fn(&[String]) -> bool + 'static,
    {
        let name = name.into();
        if !has_alias(&name) {
            return Err(CommandError::invalid_name(name));
        }
        Ok(Self::build(name, help.into(), Box::new(handler)))
    }

    /// Declares a command from a [`CommandSpec`] type.
    pub fn of<S: CommandSpec + 'static>() -> Self {
        const {
            assert!(
                has_alias(S::NAME),
                "CommandSpec::NAME must contain a non-empty word"
            )
        };
        Self::build(S::NAME.to_string(), S::HELP.to_string(), Box::new(S::execute))
            .with_additional_help(S::additional_help)
    }

    /// Declares a command that dispatches its remaining tokens into `subcommands`.
    ///
    /// The nested list's help is printed as this command's additional help.
    /// The nested list keeps its own [`HelpConfig`](crate::HelpConfig), so
    /// apply the parent's with [`CommandList::with_config`] to share it.
    pub fn group(
        name: impl Into<String>,
        help: impl Into<String>,
        subcommands: CommandList,
    ) -> Result<Self> {
        let subcommands = Rc::new(subcommands);
        let help_list = Rc::clone(&subcommands);
        Ok(Self::new(name, help, move |args| subcommands.execute(args))?
            .with_additional_help(move |indent, out| help_list.write_help(indent, out)))
    }

    fn build(name: String, help: String, handler: Handler) -> Self {
        Self {
            aliases: aliases(&name),
            name,
            help,
            handler,
            additional_help: None,
        }
    }

    /// Attaches an extra help printer, replacing any previous one.
    pub fn with_additional_help<F>(mut self, additional_help: F) -> Self
    where
        F: Fn(usize, &mut dyn Write) -> io::Result<()> + 'static,
    {
        self.additional_help = Some(Box::new(additional_help));
        self
    }

    /// Returns the declared name, unsplit.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the help text.
    pub fn help(&self) -> &str {
        &self.help
    }

    /// Returns the alias words of the name.
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Returns true if `token` is exactly one of the alias words.
    pub fn matches(&self, token: &str) -> bool {
        self.aliases.iter().any(|alias| alias == token)
    }

    /// Offers `tokens` to this command and reports what happened.
    pub fn dispatch(&self, tokens: &[String]) -> CommandOutcome {
        let Some((first, rest)) = tokens.split_first() else {
            return CommandOutcome::Empty;
        };
        if !self.matches(first) {
            return CommandOutcome::NoMatch;
        }
        CommandOutcome::Handled((self.handler)(rest))
    }

    /// Runs the handler on the tokens after the leading alias.
    ///
    /// Returns false without calling the handler when `tokens` is empty or its
    /// first element is not an alias; otherwise returns the handler's result.
    pub fn execute(&self, tokens: &[String]) -> bool {
        self.dispatch(tokens) == CommandOutcome::Handled(true)
    }

    /// Writes the name at `indent` and the help text beneath it.
    pub fn write_help(&self, indent: usize, out: &mut dyn Write) -> io::Result<()> {
        help::write_entry(out, indent, &self.name, &self.help)
    }

    /// Writes the extra help, if any, at `indent`.
    pub fn write_additional_help(&self, indent: usize, out: &mut dyn Write) -> io::Result<()> {
        match &self.additional_help {
            Some(additional_help) => additional_help(indent, out),
            None => Ok(()),
        }
    }

    /// Prints this command's help entry to stdout.
    pub fn print_help(&self, indent: usize) {
        help::to_stdout(|out| self.write_help(indent, out));
    }

    /// Prints this command's extra help to stdout.
    pub fn print_additional_help(&self, indent: usize) {
        help::to_stdout(|out| self.write_additional_help(indent, out));
    }

    /// Writes the help entry followed by the extra help one level deeper.
    pub(crate) fn write_full_help(&self, indent: usize, out: &mut dyn Write) -> io::Result<()> {
        self.write_help(indent, out)?;
        self.write_additional_help(indent + HELP_INDENT, out)
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("help", &self.help)
            .field("additional_help", &self.additional_help.is_some())
            .finish_non_exhaustive()
    }
}
