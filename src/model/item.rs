// File: src/model/item.rs
//! The task model: three closed variants, their display text, and the
//! pipe-delimited save-line codec.

use crate::error::{ChoreError, ChoreResult};
use chrono::NaiveDate;
use std::fmt;

const TYPE_PLAIN: &str = "T";
const TYPE_DEADLINE: &str = "D";
const TYPE_RANGED: &str = "E";

const ERROR_EMPTY_DESCRIPTION: &str = "Task description cannot be empty.";
const ERROR_INVALID_DATE: &str = "Invalid date format. Use yyyy-mm-dd [HHmm].";
const ERROR_INVALID_TIME: &str = "Invalid time format. Use HHmm (24-hour).";
const ERROR_CORRUPTED_SAVE_LINE: &str = "Corrupted save line.";
const ERROR_CORRUPTED_DEADLINE_LINE: &str = "Corrupted deadline line.";
const ERROR_CORRUPTED_RANGED_LINE: &str = "Corrupted event line.";
const ERROR_UNKNOWN_TASK_TYPE: &str = "Unknown task type in save file.";

// --- DATE STAMPS ---

/// A calendar date with an optional `HHmm` clock value.
///
/// The time is kept as the raw four-digit string ("" when absent). The digits
/// are deliberately NOT range-checked against real hours/minutes; only the
/// shape is enforced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateStamp {
    pub date: NaiveDate,
    pub time: String,
}

impl DateStamp {
    /// Parses a raw `yyyy-mm-dd [HHmm]` string.
    ///
    /// The string is split on whitespace: the first token must be an ISO
    /// calendar date, a single extra token must be exactly four digits, and
    /// any further token is a format error.
    pub fn parse(raw: &str) -> ChoreResult<Self> {
        let mut parts = raw.split_whitespace();

        let date_token = parts
            .next()
            .ok_or_else(|| ChoreError::Validation(ERROR_INVALID_DATE.to_string()))?;
        let date = NaiveDate::parse_from_str(date_token, "%Y-%m-%d")
            .map_err(|_| ChoreError::Validation(ERROR_INVALID_DATE.to_string()))?;

        let time = match (parts.next(), parts.next()) {
            (None, _) => String::new(),
            (Some(t), None) if is_clock_token(t) => t.to_string(),
            _ => return Err(ChoreError::Validation(ERROR_INVALID_TIME.to_string())),
        };

        Ok(Self { date, time })
    }

    /// Rebuilds the raw form used by `parse`, for feeding decoded save-file
    /// fields back through the same validation.
    fn join_raw(date_field: &str, time_field: &str) -> String {
        if time_field.is_empty() {
            date_field.to_string()
        } else {
            format!("{} {}", date_field, time_field)
        }
    }
}

impl fmt::Display for DateStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.time.is_empty() {
            write!(f, "{}", self.date)
        } else {
            write!(f, "{} {}", self.date, self.time)
        }
    }
}

fn is_clock_token(s: &str) -> bool {
    s.len() == 4 && s.bytes().all(|b| b.is_ascii_digit())
}

// --- TASKS ---

/// Kind-specific temporal payload of a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskKind {
    Plain,
    Deadline { due: DateStamp },
    Ranged { start: DateStamp, end: DateStamp },
}

/// A trackable to-do item.
///
/// Tasks only ever live inside a `TaskStore`; the collection owns them and
/// hands out clones for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub description: String,
    pub done: bool,
    pub kind: TaskKind,
}

impl Task {
    pub fn plain(description: &str) -> ChoreResult<Self> {
        Ok(Self {
            description: validate_description(description)?,
            done: false,
            kind: TaskKind::Plain,
        })
    }

    pub fn deadline(description: &str, by_raw: &str) -> ChoreResult<Self> {
        Ok(Self {
            description: validate_description(description)?,
            done: false,
            kind: TaskKind::Deadline {
                due: DateStamp::parse(by_raw)?,
            },
        })
    }

    pub fn ranged(description: &str, from_raw: &str, to_raw: &str) -> ChoreResult<Self> {
        Ok(Self {
            description: validate_description(description)?,
            done: false,
            kind: TaskKind::Ranged {
                start: DateStamp::parse(from_raw)?,
                end: DateStamp::parse(to_raw)?,
            },
        })
    }

    pub fn set_done(&mut self, val: bool) {
        self.done = val;
    }

    fn type_letter(&self) -> &'static str {
        match self.kind {
            TaskKind::Plain => TYPE_PLAIN,
            TaskKind::Deadline { .. } => TYPE_DEADLINE,
            TaskKind::Ranged { .. } => TYPE_RANGED,
        }
    }

    // --- SAVE-LINE CODEC ---

    /// Encodes this task as one pipe-delimited save line.
    ///
    /// Descriptions containing `|` would corrupt the format; the format does
    /// not escape them (see DESIGN.md).
    pub fn to_save_line(&self) -> String {
        let done = if self.done { 1 } else { 0 };
        match &self.kind {
            TaskKind::Plain => {
                format!("{} | {} | {}", TYPE_PLAIN, done, self.description)
            }
            TaskKind::Deadline { due } => format!(
                "{} | {} | {} | {} | {}",
                TYPE_DEADLINE, done, self.description, due.date, due.time
            ),
            TaskKind::Ranged { start, end } => format!(
                "{} | {} | {} | {} | {} | {} | {}",
                TYPE_RANGED,
                done,
                self.description,
                start.date,
                start.time,
                end.date,
                end.time
            ),
        }
    }

    /// Reconstructs a task from a single save line.
    ///
    /// Splitting keeps trailing empty fields so date-only stamps round-trip
    /// (`D | 0 | x | 2026-01-01 | ` is five fields, the last empty).
    pub fn from_save_line(line: &str) -> ChoreResult<Self> {
        if line.trim().is_empty() {
            return Err(ChoreError::Corruption(ERROR_CORRUPTED_SAVE_LINE.to_string()));
        }

        let fields: Vec<&str> = line.split('|').map(str::trim).collect();
        if fields.len() < 3 {
            return Err(ChoreError::Corruption(ERROR_CORRUPTED_SAVE_LINE.to_string()));
        }

        let done = fields[1] == "1";
        let desc = fields[2];

        let mut task = match fields[0] {
            TYPE_PLAIN => Self::plain(desc),
            TYPE_DEADLINE => {
                if fields.len() < 5 {
                    return Err(ChoreError::Corruption(
                        ERROR_CORRUPTED_DEADLINE_LINE.to_string(),
                    ));
                }
                Self::deadline(desc, &DateStamp::join_raw(fields[3], fields[4]))
            }
            TYPE_RANGED => {
                if fields.len() < 7 {
                    return Err(ChoreError::Corruption(
                        ERROR_CORRUPTED_RANGED_LINE.to_string(),
                    ));
                }
                Self::ranged(
                    desc,
                    &DateStamp::join_raw(fields[3], fields[4]),
                    &DateStamp::join_raw(fields[5], fields[6]),
                )
            }
            _ => {
                return Err(ChoreError::Corruption(ERROR_UNKNOWN_TASK_TYPE.to_string()));
            }
        }
        // A bad embedded date/time or description means the line is corrupt,
        // whatever the model calls it.
        .map_err(|e| ChoreError::Corruption(e.to_string()))?;

        task.set_done(done);
        Ok(task)
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cross = if self.done { "X" } else { " " };
        write!(f, "[{}][{}] {}", self.type_letter(), cross, self.description)?;
        match &self.kind {
            TaskKind::Plain => Ok(()),
            TaskKind::Deadline { due } => write!(f, " (by: {})", due),
            TaskKind::Ranged { start, end } => {
                write!(f, " (from: {} to: {})", start, end)
            }
        }
    }
}

fn validate_description(raw: &str) -> ChoreResult<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ChoreError::Validation(ERROR_EMPTY_DESCRIPTION.to_string()));
    }
    Ok(trimmed.to_string())
}
