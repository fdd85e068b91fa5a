//! ozz-commands - declarative subcommand dispatch.
//!
//! A program declares a fixed set of commands, each with a name, help text
//! and handler, and routes its arguments to the first command whose name
//! contains the leading token:
//!
//! ```
//! use ozz_commands::{Command, CommandList};
//!
//! let commands = CommandList::new(vec![
//!     Command::new("add", "Add an item", |args| !args.is_empty())?,
//!     Command::new("remove rm", "Remove an item", |args| args.len() == 1)?,
//! ]);
//!
//! assert!(commands.execute(&["rm".to_string(), "x".to_string()]));
//! assert!(!commands.execute(&["list".to_string()]));
//! # Ok::<(), ozz_commands::CommandError>(())
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod logging;

pub use commands::{Command, CommandList, CommandOutcome, CommandSpec, DispatchOutcome};
pub use config::{Config, HelpConfig};
pub use error::{CommandError, Result};
