// File: src/model/parser.rs
//! Turns one raw input line into a structured [`Command`].
//!
//! Parsing is pure text work: no I/O, no clock, no collection access. Task
//! numbers are extracted but NOT range-checked here; that is the store's job.

use crate::error::{ChoreError, ChoreResult};

const ERROR_INVALID_COMMAND: &str = "Invalid command.";
const ERROR_INVALID_TASK_NUMBER: &str = "Invalid task number.";
const ERROR_DEADLINE_FORMAT: &str =
    "Invalid deadline format. Use: deadline <desc> /by yyyy-mm-dd [HHmm]";
const ERROR_EVENT_FORMAT: &str =
    "Invalid event format. Use: event <desc> /from yyyy-mm-dd [HHmm] /to yyyy-mm-dd [HHmm]";
const ERROR_EMPTY_FIND: &str = "Find command must have a search term.";

/// A structured representation of one user instruction.
///
/// Produced fresh for every input line; carries exactly the fields its
/// command shape needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Bye,
    List,
    Help,
    /// 1-based task number, exactly as typed (may be zero or negative).
    Mark(i64),
    Unmark(i64),
    Delete(i64),
    Todo(String),
    Deadline {
        description: String,
        by_raw: String,
    },
    Event {
        description: String,
        from_raw: String,
        to_raw: String,
    },
    Find(String),
}

/// Parses a raw input line into a [`Command`].
///
/// Identical input always yields an identical command or an identical error.
pub fn parse(input: &str) -> ChoreResult<Command> {
    let input = input.trim();

    match input {
        "bye" => return Ok(Command::Bye),
        "list" => return Ok(Command::List),
        "help" => return Ok(Command::Help),
        _ => {}
    }

    if let Some(rest) = input.strip_prefix("mark ") {
        return Ok(Command::Mark(parse_index(rest)?));
    }
    if let Some(rest) = input.strip_prefix("unmark ") {
        return Ok(Command::Unmark(parse_index(rest)?));
    }
    if let Some(rest) = input.strip_prefix("delete ") {
        return Ok(Command::Delete(parse_index(rest)?));
    }

    if let Some(rest) = input.strip_prefix("todo ") {
        return Ok(Command::Todo(rest.trim().to_string()));
    }

    if let Some(rest) = input.strip_prefix("deadline ") {
        let (desc, by) = rest
            .split_once("/by")
            .ok_or_else(|| ChoreError::Parse(ERROR_DEADLINE_FORMAT.to_string()))?;
        let (desc, by) = (desc.trim(), by.trim());
        if desc.is_empty() || by.is_empty() {
            return Err(ChoreError::Parse(ERROR_DEADLINE_FORMAT.to_string()));
        }
        return Ok(Command::Deadline {
            description: desc.to_string(),
            by_raw: by.to_string(),
        });
    }

    if let Some(rest) = input.strip_prefix("event ") {
        let (desc, tail) = rest
            .split_once("/from")
            .ok_or_else(|| ChoreError::Parse(ERROR_EVENT_FORMAT.to_string()))?;
        let (from, to) = tail
            .split_once("/to")
            .ok_or_else(|| ChoreError::Parse(ERROR_EVENT_FORMAT.to_string()))?;
        let (desc, from, to) = (desc.trim(), from.trim(), to.trim());
        if desc.is_empty() || from.is_empty() || to.is_empty() {
            return Err(ChoreError::Parse(ERROR_EVENT_FORMAT.to_string()));
        }
        return Ok(Command::Event {
            description: desc.to_string(),
            from_raw: from.to_string(),
            to_raw: to.to_string(),
        });
    }

    if let Some(rest) = input.strip_prefix("find ") {
        let query = rest.trim();
        if query.is_empty() {
            return Err(ChoreError::Parse(ERROR_EMPTY_FIND.to_string()));
        }
        return Ok(Command::Find(query.to_string()));
    }

    Err(ChoreError::Parse(ERROR_INVALID_COMMAND.to_string()))
}

/// Extracts the 1-based task number from commands like `mark 2`.
///
/// The number is passed through unchanged; bounds are the collection's
/// concern.
fn parse_index(rest: &str) -> ChoreResult<i64> {
    rest.trim()
        .parse::<i64>()
        .map_err(|_| ChoreError::Parse(ERROR_INVALID_TASK_NUMBER.to_string()))
}
