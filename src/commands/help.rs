//! Help text formatting shared by commands and command lists.

use std::io::{self, Write};

/// Extra indentation applied to a command's help line and its additional help.
pub const HELP_INDENT: usize = 4;

/// Writes one help entry: the name at `indent`, the help text at
/// `indent + HELP_INDENT`, then a blank line.
pub fn write_entry<W: Write + ?Sized>(
    out: &mut W,
    indent: usize,
    name: &str,
    help: &str,
) -> io::Result<()> {
    write!(
        out,
        "{:indent$}{name}\n{:help_indent$}{help}\n\n",
        "",
        "",
        help_indent = indent + HELP_INDENT,
    )
}

/// Runs `write` against stdout, logging instead of failing if stdout is gone.
pub(crate) fn to_stdout<F>(write: F)
where
    F: FnOnce(&mut dyn Write) -> io::Result<()>,
{
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    if let Err(e) = write(&mut lock).and_then(|()| lock.flush()) {
        tracing::warn!("Could not write help output: {e}");
    }
}
