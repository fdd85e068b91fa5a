//! Ordered command lists and top-level dispatch.
//!
//! A [`CommandList`] tries its commands in declaration order and stops at the
//! first one whose handler reports success. The reserved help keyword is
//! intercepted before any command is tried.

use std::io::{self, Write};

use tracing::{debug, trace};

use super::command::{Command, CommandOutcome};
use super::help;
use super::tokenizer::args_to_tokens;
use crate::config::HelpConfig;
use crate::error::Result;

/// What a dispatch pass over a [`CommandList`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// No tokens were given.
    EmptyInput,
    /// The help keyword was given and aggregate help was printed.
    HelpShown,
    /// A command matched and its handler succeeded.
    Executed,
    /// At least one command matched, but every matching handler failed.
    HandlerFailed,
    /// No command has the leading token as an alias.
    NoMatch,
}

/// A fixed, ordered collection of commands.
///
/// Order decides both precedence (first success wins) and help order.
#[derive(Debug, Default)]
pub struct CommandList {
    commands: Vec<Command>,
    config: HelpConfig,
}

impl CommandList {
    /// Creates a list with the default help configuration.
    pub fn new(commands: Vec<Command>) -> Self {
        Self {
            commands,
            config: HelpConfig::default(),
        }
    }

    /// Replaces the help configuration.
    pub fn with_config(mut self, config: HelpConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the help configuration in use.
    pub fn config(&self) -> &HelpConfig {
        &self.config
    }

    /// Returns the number of declared commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns true if no commands are declared.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Iterates the commands in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Command> {
        self.commands.iter()
    }

    /// Finds the first command that has `token` as an alias.
    pub fn find(&self, token: &str) -> Option<&Command> {
        self.commands.iter().find(|command| command.matches(token))
    }

    /// Dispatches `tokens` and reports the outcome in detail.
    pub fn dispatch(&self, tokens: &[String]) -> DispatchOutcome {
        let Some(first) = tokens.first() else {
            debug!("Empty token sequence, nothing to dispatch");
            return DispatchOutcome::EmptyInput;
        };

        if *first == self.config.keyword {
            debug!("Help requested");
            self.print_help(0);
            return DispatchOutcome::HelpShown;
        }

        let mut matched = false;
        for command in &self.commands {
            match command.dispatch(tokens) {
                CommandOutcome::Handled(true) => {
                    debug!(token = %first, command = command.name(), "Command executed");
                    return DispatchOutcome::Executed;
                }
                CommandOutcome::Handled(false) => {
                    trace!(token = %first, command = command.name(), "Handler failed");
                    matched = true;
                }
                CommandOutcome::NoMatch | CommandOutcome::Empty => {
                    trace!(token = %first, command = command.name(), "No match");
                }
            }
        }

        let outcome = if matched {
            DispatchOutcome::HandlerFailed
        } else {
            DispatchOutcome::NoMatch
        };
        debug!(token = %first, ?outcome, "No command succeeded");
        outcome
    }

    /// Returns whether `outcome` counts as success for the boolean contract.
    ///
    /// Only [`DispatchOutcome::Executed`] does, plus
    /// [`DispatchOutcome::HelpShown`] when `help_is_success` is configured.
    pub fn is_success(&self, outcome: DispatchOutcome) -> bool {
        match outcome {
            DispatchOutcome::Executed => true,
            DispatchOutcome::HelpShown => self.config.help_is_success,
            DispatchOutcome::EmptyInput
            | DispatchOutcome::HandlerFailed
            | DispatchOutcome::NoMatch => false,
        }
    }

    /// Dispatches `tokens`, returning true only if a command succeeded.
    ///
    /// Printing help returns false unless `help_is_success` is configured.
    pub fn execute(&self, tokens: &[String]) -> bool {
        self.is_success(self.dispatch(tokens))
    }

    /// Dispatches a raw process argument vector, skipping the program path.
    pub fn execute_args<I, S>(&self, args: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.execute(&args_to_tokens(args))
    }

    /// Writes every command's help entry and extra help, in order.
    pub fn write_help(&self, indent: usize, out: &mut dyn Write) -> io::Result<()> {
        self.commands
            .iter()
            .try_for_each(|command| command.write_full_help(indent, out))
    }

    /// Writes aggregate help and flushes `out`, surfacing any write failure.
    pub fn emit_help(&self, indent: usize, out: &mut dyn Write) -> Result<()> {
        self.write_help(indent, out)?;
        out.flush()?;
        Ok(())
    }

    /// Prints aggregate help to stdout.
    ///
    /// Returns false, since printing help runs no command, unless
    /// `help_is_success` is configured.
    pub fn print_help(&self, indent: usize) -> bool {
        help::to_stdout(|out| self.write_help(indent, out));
        self.config.help_is_success
    }
}

impl FromIterator<Command> for CommandList {
    fn from_iter<T: IntoIterator<Item = Command>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a CommandList {
    type Item = &'a Command;
    type IntoIter = std::slice::Iter<'a, Command>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}
