// File: ./src/error.rs
// Error types shared by the model, storage and command layers.
// The Display text of every variant is what the user gets to read.
use std::path::PathBuf;
use thiserror::Error;

/// Failures raised by the task model itself.
#[derive(Debug, Error)]
pub enum TaskError {
    #[error("Sir, the specified deadline date is invalid. Please use the format YYYY-MM-DD.")]
    InvalidDate {
        input: String,
        /// `None` when the text is not shaped like `YYYY-MM-DD` at all.
        #[source]
        source: Option<chrono::ParseError>,
    },
    #[error("Task index {index} is out of range (the list holds {len} tasks).")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Reasons why `/by`, `/from` or `/to` arguments could not be tokenized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("A deadline must have '/by <date>'.")]
    MissingBy,
    #[error("An event must have '/from <start>'.")]
    MissingFrom,
    #[error("An event must have '/to <end>' after '/from <start>'.")]
    MissingTo,
    #[error("The description cannot be empty.")]
    EmptyDescription,
    #[error("The date of a deadline cannot be empty.")]
    EmptyDate,
    #[error("The start time of an event cannot be empty.")]
    EmptyStart,
    #[error("The end time of an event cannot be empty.")]
    EmptyEnd,
}

/// A single stored line that could not be turned back into a task.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("malformed record")]
    Malformed,
    #[error(transparent)]
    InvalidDate(TaskError),
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Unable to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Line {line} of {} holds an invalid deadline date", path.display())]
    InvalidRecord {
        path: PathBuf,
        line: usize,
        #[source]
        source: TaskError,
    },
}

/// Everything a single command can fail with. None of these end the session.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Sir, you typed an empty command. Please tell me what you need.")]
    EmptyCommand,
    #[error("I am afraid I did not understand that command.")]
    UnknownCommand,
    #[error("The description of a {0} cannot be empty.")]
    EmptyDescription(&'static str),
    #[error("{0}")]
    Syntax(#[from] SyntaxError),
    #[error("{0}")]
    InvalidDate(TaskError),
    #[error("I am afraid '|' cannot be used in a task, sir. It separates fields in the task file.")]
    ReservedCharacter,
    #[error("Please specify which task to {0}.")]
    MissingTaskNumber(&'static str),
    #[error("'{0}' is not a task number.")]
    NotANumber(String),
    #[error("Task number {number} is out of range. You have {len} tasks in the list.")]
    OutOfRange { number: i64, len: usize },
    #[error("Please tell me what to search for.")]
    EmptyKeyword,
    #[error("I am afraid I was unable to save your tasks: {0}")]
    Save(#[from] StorageError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unable to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
