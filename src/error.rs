// File: src/error.rs
//! The closed error set for the command/task core.
//!
//! Every failure a command can produce falls into one of four kinds. All of
//! them are user-facing and recoverable: the interpreter reports the message
//! and keeps accepting commands.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChoreError {
    /// The input line does not match any recognized command shape.
    #[error("{0}")]
    Parse(String),

    /// The command was well-formed but its payload is unusable
    /// (empty description, bad date/time, out-of-range task number).
    #[error("{0}")]
    Validation(String),

    /// A persisted save line could not be decoded.
    #[error("{0}")]
    Corruption(String),

    /// The save file or its directory could not be created, read, or written.
    #[error("{0}")]
    Storage(String),
}

pub type ChoreResult<T> = Result<T, ChoreError>;
