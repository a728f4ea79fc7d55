// File: src/help.rs
//! In-app command reference, returned by the `help` command.

pub fn command_reference() -> String {
    [
        "Available commands:",
        "  list",
        "    - Displays all tasks.",
        "",
        "  todo <description>",
        "    - Adds a plain task.",
        "",
        "  deadline <description> /by yyyy-mm-dd [HHmm]",
        "    - Adds a task with a due date.",
        "",
        "  event <description> /from yyyy-mm-dd [HHmm] /to yyyy-mm-dd [HHmm]",
        "    - Adds a task spanning a date range.",
        "",
        "  mark <task number>",
        "    - Marks a task as done.",
        "",
        "  unmark <task number>",
        "    - Marks a task as not done.",
        "",
        "  delete <task number>",
        "    - Deletes a task.",
        "",
        "  find <keyword>",
        "    - Finds tasks whose description contains any keyword.",
        "",
        "  help",
        "    - Shows this help message.",
        "",
        "  bye",
        "    - Saves and exits.",
    ]
    .join("\n")
}
