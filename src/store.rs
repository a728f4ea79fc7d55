// File: src/store.rs
//! The in-memory task collection: an ordered, index-addressed sequence.
//!
//! Insertion order is display order is save order. Task numbers arriving
//! from the parser are 1-based and unchecked; every index-taking operation
//! validates them here.

use crate::error::{ChoreError, ChoreResult};
use crate::model::Task;

const ERROR_INVALID_TASK_NUMBER: &str = "Invalid task number.";

#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store initialized with already-decoded tasks (load path).
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Read-only view in insertion order.
    pub fn all(&self) -> &[Task] {
        &self.tasks
    }

    /// Appends a task. Never fails; duplicates are permitted.
    pub fn add(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Deletes and returns the task at the given 1-based position.
    pub fn delete(&mut self, one_indexed: i64) -> ChoreResult<Task> {
        let idx = self.to_zero_index(one_indexed)?;
        Ok(self.tasks.remove(idx))
    }

    /// Marks the task at the given 1-based position as done.
    pub fn mark(&mut self, one_indexed: i64) -> ChoreResult<Task> {
        self.set_done(one_indexed, true)
    }

    /// Marks the task at the given 1-based position as not done.
    pub fn unmark(&mut self, one_indexed: i64) -> ChoreResult<Task> {
        self.set_done(one_indexed, false)
    }

    /// Finds tasks whose description contains ANY whitespace-separated query
    /// term (case-insensitive substring match), preserving insertion order.
    ///
    /// An empty or all-whitespace query matches nothing; it is not an error.
    pub fn find(&self, query: &str) -> Vec<Task> {
        let terms: Vec<String> = query
            .split_whitespace()
            .map(|t| t.to_lowercase())
            .collect();
        if terms.is_empty() {
            return Vec::new();
        }

        self.tasks
            .iter()
            .filter(|task| {
                let haystack = task.description.to_lowercase();
                terms.iter().any(|term| haystack.contains(term))
            })
            .cloned()
            .collect()
    }

    fn set_done(&mut self, one_indexed: i64, val: bool) -> ChoreResult<Task> {
        let idx = self.to_zero_index(one_indexed)?;
        let task = &mut self.tasks[idx];
        task.set_done(val);
        Ok(task.clone())
    }

    fn to_zero_index(&self, one_indexed: i64) -> ChoreResult<usize> {
        if one_indexed < 1 || one_indexed as usize > self.tasks.len() {
            return Err(ChoreError::Validation(ERROR_INVALID_TASK_NUMBER.to_string()));
        }
        Ok((one_indexed - 1) as usize)
    }
}
