//! Error types for ozz-commands.
//!
//! Dispatch never fails with an error: a miss is a `false` return. These
//! errors cover declaring commands, loading configuration, and writing help.

use thiserror::Error;

/// Main error type for ozz-commands operations.
#[derive(Error, Debug)]
pub enum CommandError {
    /// A command name with no alias word (empty, or only spaces).
    #[error("Invalid command name {0:?}: expected at least one non-empty word")]
    InvalidName(String),

    /// Configuration errors (unreadable file, bad TOML, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Failure writing help output to the given sink.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CommandError {
    /// Creates an invalid-name error for the given declaration.
    pub fn invalid_name(name: impl Into<String>) -> Self {
        Self::InvalidName(name.into())
    }

    /// Creates a configuration error with the given message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Returns the error category as a string for display purposes.
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidName(_) => "Declaration Error",
            Self::Config(_) => "Configuration Error",
            Self::Io(_) => "I/O Error",
        }
    }
}

/// Result type alias using CommandError.
pub type Result<T> = std::result::Result<T, CommandError>;
