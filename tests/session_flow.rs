// File: tests/session_flow.rs
// End-to-end interpreter behavior: command dispatch, replies, persistence.
use chore::context::{AppContext, TestContext};
use chore::controller::TaskController;

fn controller_in(ctx: &TestContext) -> TaskController {
    TaskController::new(ctx).unwrap()
}

#[test]
fn test_welcome_and_empty_list() {
    let ctx = TestContext::new();
    let mut c = controller_in(&ctx);

    assert!(c.welcome_text().contains("What can I do for you?"));
    assert_eq!(c.process_command("list"), "Your task list is empty.");
}

#[test]
fn test_add_list_mark_delete_cycle() {
    let ctx = TestContext::new();
    let mut c = controller_in(&ctx);

    let added = c.process_command("todo read book");
    assert_eq!(
        added,
        "Got it. I've added this task:\n[T][ ] read book\nNow you have 1 tasks in the list."
    );

    c.process_command("deadline return book /by 2026-03-02 1700");

    let listed = c.process_command("list");
    assert_eq!(
        listed,
        "1. [T][ ] read book\n2. [D][ ] return book (by: 2026-03-02 1700)"
    );

    let marked = c.process_command("mark 2");
    assert_eq!(
        marked,
        "Nice! I've marked this task as done:\n[D][X] return book (by: 2026-03-02 1700)"
    );

    let unmarked = c.process_command("unmark 2");
    assert_eq!(
        unmarked,
        "OK, I've marked this task as not done yet:\n[D][ ] return book (by: 2026-03-02 1700)"
    );

    let removed = c.process_command("delete 1");
    assert_eq!(
        removed,
        "Noted. I've removed this task:\n[T][ ] read book\nNow you have 1 tasks in the list."
    );
}

#[test]
fn test_find_replies() {
    let ctx = TestContext::new();
    let mut c = controller_in(&ctx);

    c.process_command("todo Return Book");
    c.process_command("todo water plants");

    assert_eq!(
        c.process_command("find book"),
        "Here are the matching tasks in your list:\n1. [T][ ] Return Book"
    );
    assert_eq!(c.process_command("find zebra"), "No matching tasks found.");
}

#[test]
fn test_error_replies_leave_collection_unchanged() {
    let ctx = TestContext::new();
    let mut c = controller_in(&ctx);

    c.process_command("todo only task");

    assert_eq!(c.process_command("mark 2"), "Error: Invalid task number.");
    assert_eq!(c.process_command("blah"), "Error: Invalid command.");
    assert_eq!(
        c.process_command("deadline oops 2026-01-01"),
        "Error: Invalid deadline format. Use: deadline <desc> /by yyyy-mm-dd [HHmm]"
    );
    assert_eq!(
        c.process_command("deadline x /by someday"),
        "Error: Invalid date format. Use yyyy-mm-dd [HHmm]."
    );

    // Still exactly the one task, untouched.
    assert_eq!(c.process_command("list"), "1. [T][ ] only task");
}

#[test]
fn test_bye_ends_session_and_persists() {
    let ctx = TestContext::new();
    let mut c = controller_in(&ctx);

    c.process_command("todo read book");
    assert!(!c.is_session_over());
    assert_eq!(c.process_command("bye"), "Bye. Hope to see you again soon!");
    assert!(c.is_session_over());

    // A fresh session over the same context sees the saved task.
    let mut next = controller_in(&ctx);
    assert_eq!(next.process_command("list"), "1. [T][ ] read book");
}

#[test]
fn test_mutations_flush_immediately() {
    let ctx = TestContext::new();
    let mut c = controller_in(&ctx);

    c.process_command("todo read book");
    c.process_command("mark 1");

    // No bye issued; the save file is already current.
    let raw = std::fs::read_to_string(ctx.get_tasks_file_path().unwrap()).unwrap();
    assert_eq!(raw, "T | 1 | read book\n");
}

#[test]
fn test_help_lists_commands() {
    let ctx = TestContext::new();
    let mut c = controller_in(&ctx);

    let text = c.process_command("help");
    for needle in ["todo", "deadline", "event", "mark", "find", "bye"] {
        assert!(text.contains(needle), "help is missing {:?}", needle);
    }
}

#[test]
fn test_corrupted_save_file_starts_empty_session() {
    let ctx = TestContext::new();
    let path = ctx.get_tasks_file_path().unwrap();
    std::fs::write(&path, "T | 0 | fine\ngarbage without pipes\n").unwrap();

    // The load is discarded wholesale; the session still starts.
    let mut c = controller_in(&ctx);
    assert_eq!(c.process_command("list"), "Your task list is empty.");

    // The corrupt file is only replaced once a mutation saves.
    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(raw.contains("garbage"));
    c.process_command("todo fresh start");
    let raw = std::fs::read_to_string(&path).unwrap();
    assert_eq!(raw, "T | 0 | fresh start\n");
}

#[test]
fn test_event_flow_without_times() {
    let ctx = TestContext::new();
    let mut c = controller_in(&ctx);

    let added = c.process_command("event trip /from 2026-01-30 /to 2026-02-03");
    assert!(added.contains("[E][ ] trip (from: 2026-01-30 to: 2026-02-03)"));

    let raw = std::fs::read_to_string(ctx.get_tasks_file_path().unwrap()).unwrap();
    assert_eq!(raw, "E | 0 | trip | 2026-01-30 |  | 2026-02-03 | \n");
}
