//! Error types for the task tracker library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all tracker operations.
///
/// Grammar, temporal, and collection errors are user-recoverable: the
/// session boundary converts them into error [`Response`]s and the process
/// keeps running. Persistence errors are surfaced to whoever invoked the
/// load or save, so that caller can decide whether to fall back or abort.
///
/// [`Response`]: crate::Response
#[derive(Error, Debug)]
pub enum TallyError {
    /// The first token of the input is not a recognized command keyword
    #[error("Unknown command: {token}")]
    UnknownCommand { token: String },

    /// A command that requires an argument received a blank one
    #[error("Command should be: \"{command} {usage}\"")]
    MissingArgument {
        command: &'static str,
        usage: &'static str,
    },

    /// An add command is missing one of its clause separators
    #[error("A {command} must include a '/{clause}' part")]
    MissingClause {
        command: &'static str,
        clause: &'static str,
    },

    /// The description of a new task is blank
    #[error("The description of a {kind} cannot be empty!")]
    EmptyDescription { kind: &'static str },

    /// An index argument is not a base-10 integer
    #[error("You must enter a valid number after '{command}'")]
    InvalidNumber { command: &'static str },

    /// A date/time does not match the accepted grammar
    #[error("Dates must look like YYYY-MM-DD or YYYY-MM-DD HH:MM, got '{text}'")]
    MalformedTemporal { text: String },

    /// A 1-based index falls outside the current list bounds
    #[error("Invalid item number: {index} (the list has {size} tasks)")]
    IndexOutOfRange { index: i64, size: usize },

    /// The find keyword is blank
    #[error("The find keyword cannot be empty!")]
    EmptyKeyword,

    /// A save-file line has fewer than the three mandatory fields
    #[error("Bad save line (need at least 3 fields): {line}")]
    MalformedLine { line: String },

    /// A save-file line carries an unrecognized type tag
    #[error("Unknown task type '{tag}' in line: {line}")]
    UnknownType { tag: String, line: String },

    /// A save-file done flag is neither `0` nor `1`
    #[error("Done flag must be 0 or 1, got: {flag}")]
    InvalidDoneFlag { flag: String },

    /// A deadline or event line is missing its date/time field
    #[error("Missing date/time field in line: {line}")]
    MissingTemporalField { line: String },

    /// Writing the save file failed; the in-memory list stays valid
    #[error("Failed to save tasks to '{path}': {source}")]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading an existing save file failed
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
}

/// Result type alias for tracker operations
pub type Result<T> = std::result::Result<T, TallyError>;
