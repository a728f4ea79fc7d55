// File: src/reply.rs
//! User-facing reply text. Formatting only: this module never touches the
//! store, the disk, or the input stream.

use crate::model::Task;

const PREFIX_ERROR: &str = "Error: ";

const MSG_EMPTY_TASK_LIST: &str = "Your task list is empty.";
const MSG_NO_MATCHES: &str = "No matching tasks found.";
const MSG_MATCHES_HEADER: &str = "Here are the matching tasks in your list:";

pub fn welcome() -> String {
    "Hello! I'm Chore\nWhat can I do for you?".to_string()
}

pub fn goodbye() -> String {
    "Bye. Hope to see you again soon!".to_string()
}

pub fn task_added(task: &Task, task_count: usize) -> String {
    format!(
        "Got it. I've added this task:\n{}\nNow you have {} tasks in the list.",
        task, task_count
    )
}

pub fn task_removed(task: &Task, task_count: usize) -> String {
    format!(
        "Noted. I've removed this task:\n{}\nNow you have {} tasks in the list.",
        task, task_count
    )
}

pub fn task_marked(task: &Task) -> String {
    format!("Nice! I've marked this task as done:\n{}", task)
}

pub fn task_unmarked(task: &Task) -> String {
    format!("OK, I've marked this task as not done yet:\n{}", task)
}

pub fn task_list(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return MSG_EMPTY_TASK_LIST.to_string();
    }
    numbered(tasks)
}

pub fn find_results(matches: &[Task]) -> String {
    if matches.is_empty() {
        return MSG_NO_MATCHES.to_string();
    }
    format!("{}\n{}", MSG_MATCHES_HEADER, numbered(matches))
}

pub fn error(message: &str) -> String {
    format!("{}{}", PREFIX_ERROR, safe_message(message))
}

fn numbered(tasks: &[Task]) -> String {
    tasks
        .iter()
        .enumerate()
        .map(|(i, task)| format!("{}. {}", i + 1, task))
        .collect::<Vec<_>>()
        .join("\n")
}

fn safe_message(message: &str) -> &str {
    let trimmed = message.trim();
    if trimmed.is_empty() {
        "Something went wrong."
    } else {
        trimmed
    }
}
