//! Command declaration and dispatch.
//!
//! Commands are declared once, collected into an ordered [`CommandList`], and
//! matched against the leading token of each argument sequence. Nesting a
//! list inside a command gives subcommand trees of any depth.

pub mod command;
pub mod help;
pub mod list;
pub mod tokenizer;

pub use command::{AdditionalHelp, Command, CommandOutcome, CommandSpec, Handler};
pub use list::{CommandList, DispatchOutcome};
pub use tokenizer::split;
