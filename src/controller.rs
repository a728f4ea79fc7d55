// File: src/controller.rs
//! Central interpreter for task commands.
//! This is the single source of truth for command dispatch: every front-end
//! (console, tests) hands raw lines to [`TaskController::process_command`]
//! and prints whatever comes back.

use crate::config::Config;
use crate::context::AppContext;
use crate::error::ChoreResult;
use crate::help;
use crate::model::parser::{self, Command};
use crate::model::Task;
use crate::reply;
use crate::storage::LocalStorage;
use crate::store::TaskStore;
use anyhow::Result;

pub struct TaskController {
    store: TaskStore,
    storage: LocalStorage,
    session_over: bool,
}

impl TaskController {
    /// Wires up storage from the context/config and loads the saved tasks.
    ///
    /// A corrupted or unreadable save file is logged and discarded; the
    /// session then starts with an empty collection rather than refusing to
    /// run. The file on disk is left untouched until the first save.
    pub fn new(ctx: &dyn AppContext) -> Result<Self> {
        let config = Config::load(ctx).unwrap_or_default();
        let storage = LocalStorage::resolve(ctx, &config)?;
        Ok(Self::with_storage(storage))
    }

    pub fn with_storage(storage: LocalStorage) -> Self {
        let tasks = match storage.load_all() {
            Ok(tasks) => tasks,
            Err(e) => {
                log::warn!(
                    "Discarding saved tasks ({}): {}",
                    storage.path().display(),
                    e
                );
                Vec::new()
            }
        };

        Self {
            store: TaskStore::with_tasks(tasks),
            storage,
            session_over: false,
        }
    }

    pub fn welcome_text(&self) -> String {
        reply::welcome()
    }

    /// True once a `bye` command has been processed.
    pub fn is_session_over(&self) -> bool {
        self.session_over
    }

    /// Processes a single command line and returns the reply to display.
    ///
    /// A failed command never leaves the collection half-changed: parsing and
    /// validation happen before any mutation. The one documented exception is
    /// a save failure after a successful mutation, which is reported while
    /// memory keeps the new state until the next successful save.
    pub fn process_command(&mut self, line: &str) -> String {
        match self.execute(line) {
            Ok(text) => text,
            Err(e) => reply::error(&e.to_string()),
        }
    }

    fn execute(&mut self, line: &str) -> ChoreResult<String> {
        match parser::parse(line)? {
            Command::Bye => {
                self.save()?;
                self.session_over = true;
                Ok(reply::goodbye())
            }

            Command::List => Ok(reply::task_list(self.store.all())),

            Command::Help => Ok(help::command_reference()),

            Command::Mark(i) => {
                let task = self.store.mark(i)?;
                self.save()?;
                Ok(reply::task_marked(&task))
            }

            Command::Unmark(i) => {
                let task = self.store.unmark(i)?;
                self.save()?;
                Ok(reply::task_unmarked(&task))
            }

            Command::Delete(i) => {
                let task = self.store.delete(i)?;
                self.save()?;
                Ok(reply::task_removed(&task, self.store.len()))
            }

            Command::Todo(description) => self.add_task(Task::plain(&description)?),

            Command::Deadline {
                description,
                by_raw,
            } => self.add_task(Task::deadline(&description, &by_raw)?),

            Command::Event {
                description,
                from_raw,
                to_raw,
            } => self.add_task(Task::ranged(&description, &from_raw, &to_raw)?),

            Command::Find(query) => Ok(reply::find_results(&self.store.find(&query))),
        }
    }

    fn add_task(&mut self, task: Task) -> ChoreResult<String> {
        self.store.add(task.clone());
        self.save()?;
        Ok(reply::task_added(&task, self.store.len()))
    }

    fn save(&self) -> ChoreResult<()> {
        self.storage.save_all(self.store.all())
    }
}
