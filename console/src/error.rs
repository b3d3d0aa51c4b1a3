//! Error types for the Widgetboard console.
//!
//! The catalog itself never fails; everything here belongs to the edges of
//! the console: configuration, command parsing, and add-widget form
//! validation.

use thiserror::Error;
use widgetboard_core::ParseKindError;

use crate::config::ConfigError;

/// Errors that can occur while running the console.
///
/// This is the primary error type for the console crate. Command and form
/// errors are reported to the user and do not stop the shell; I/O and JSON
/// errors do.
#[derive(Error, Debug)]
pub enum ConsoleError {
    /// Configuration-related error.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Reading commands or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A command line could not be parsed.
    #[error("command error: {0}")]
    Command(#[from] CommandError),

    /// An add-widget form was rejected.
    #[error("form error: {0}")]
    Form(#[from] FormError),
}

impl ConsoleError {
    /// Returns `true` for errors the shell reports and then continues past.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ConsoleError::Command(_) | ConsoleError::Form(_))
    }
}

/// Errors produced while parsing a shell command line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The first word is not a known command.
    #[error("unknown command '{0}' (try 'help')")]
    UnknownCommand(String),

    /// A required argument is missing.
    #[error("{command}: missing <{argument}>")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    /// More arguments were given than the command accepts.
    #[error("{command}: unexpected argument '{argument}'")]
    UnexpectedArgument {
        command: &'static str,
        argument: String,
    },

    /// A quoted argument was not closed.
    #[error("unclosed {0} quote")]
    UnclosedQuote(char),

    /// The widget kind argument is not a known kind.
    #[error(transparent)]
    InvalidKind(#[from] ParseKindError),
}

/// Errors produced by the add-widget forms.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// Widget name is blank.
    #[error("widget name cannot be empty")]
    EmptyName,

    /// Widget text is blank.
    #[error("widget text cannot be empty")]
    EmptyText,

    /// Confirm was requested with no template selected.
    #[error("select at least one widget")]
    NothingSelected,

    /// No preset group has this key.
    #[error("unknown widget group '{0}'")]
    UnknownGroup(String),

    /// The group has no template with this name.
    #[error("group '{group}' has no widget named '{name}'")]
    UnknownTemplate { group: String, name: String },
}

/// A specialized `Result` type for console operations.
pub type Result<T> = std::result::Result<T, ConsoleError>;
