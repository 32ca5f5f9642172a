//! Error type shared by the interpreter and the I/O layer
//!
//! Every failure aborts the whole run. Callers branch on [`ErrorKind`];
//! the message is meant for the user.

use std::error::Error as StdError;
use std::io;
use thiserror::Error;

/// Discriminant of a [`PedError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The leading letter of a command is not in the alphabet
    UnknownCommand,
    /// A pattern failed to compile as a regular expression
    Pattern,
    /// A command has a missing or non-numeric argument
    MalformedCommand,
    /// Source, destination or backup path could not be read or written
    Io,
    /// Anything else surfaced while opening or reading input
    Other,
}

impl ErrorKind {
    /// Short label used when printing errors
    pub fn label(self) -> &'static str {
        match self {
            ErrorKind::UnknownCommand => "unknown command",
            ErrorKind::Pattern => "pattern error",
            ErrorKind::MalformedCommand => "malformed command",
            ErrorKind::Io => "io error",
            ErrorKind::Other => "error",
        }
    }

    /// Process exit code for this kind of failure
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorKind::Other => 1,
            ErrorKind::UnknownCommand | ErrorKind::MalformedCommand => 2,
            ErrorKind::Pattern => 3,
            ErrorKind::Io => 4,
        }
    }
}

#[derive(Debug, Error)]
#[error("{message}")]
pub struct PedError {
    pub kind: ErrorKind,
    pub message: String,
}

pub type Result<T> = std::result::Result<T, PedError>;

impl PedError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn unknown_command(command: &str) -> Self {
        Self::new(
            ErrorKind::UnknownCommand,
            format!("Unknown command: '{}'", command),
        )
    }

    pub fn malformed(command: &str, reason: impl AsRef<str>) -> Self {
        Self::new(
            ErrorKind::MalformedCommand,
            format!("Malformed command '{}': {}", command, reason.as_ref()),
        )
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io, message)
    }

    /// Wrap a failure that is not one of the known kinds
    pub fn other(err: &(dyn StdError + 'static)) -> Self {
        Self::new(ErrorKind::Other, describe_failure(err))
    }

    /// Classify an I/O error raised while reading input
    ///
    /// Undecodable input is not an access problem, so it is reported as
    /// [`ErrorKind::Other`].
    pub fn from_read_error(err: &io::Error, context: impl AsRef<str>) -> Self {
        if err.kind() == io::ErrorKind::InvalidData {
            Self::new(
                ErrorKind::Other,
                format!("{}: {}", context.as_ref(), describe_failure(err)),
            )
        } else {
            Self::io(format!("{}: {}", context.as_ref(), err))
        }
    }
}

type Describer = fn(&(dyn StdError + 'static)) -> Option<String>;

/// Accessors tried in order when extracting a message from an unexpected failure
const DESCRIBERS: &[Describer] = &[own_message, source_message, os_error_message];

const FALLBACK_DESCRIPTION: &str = "unknown error";

/// Best-effort human readable description of an arbitrary failure
pub fn describe_failure(err: &(dyn StdError + 'static)) -> String {
    DESCRIBERS
        .iter()
        .find_map(|describe| describe(err))
        .unwrap_or_else(|| FALLBACK_DESCRIPTION.to_string())
}

fn non_empty(message: String) -> Option<String> {
    let trimmed = message.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn own_message(err: &(dyn StdError + 'static)) -> Option<String> {
    non_empty(err.to_string())
}

fn source_message(err: &(dyn StdError + 'static)) -> Option<String> {
    err.source().and_then(|source| non_empty(source.to_string()))
}

fn os_error_message(err: &(dyn StdError + 'static)) -> Option<String> {
    let code = err.downcast_ref::<io::Error>()?.raw_os_error()?;
    non_empty(io::Error::from_raw_os_error(code).to_string())
}
