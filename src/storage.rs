// Manages the flat-file task store on disk.
//
// The save file is plain UTF-8 text, one pipe-delimited save line per task,
// LF-terminated, rewritten in full on every save. Writes go through a
// sidecar advisory lock and a write-to-temp-then-rename so a crash mid-save
// never leaves a half-written file behind.

use crate::config::Config;
use crate::context::AppContext;
use crate::error::{ChoreError, ChoreResult};
use crate::model::Task;
use anyhow::Result;
use fs2::FileExt;
use std::fs;
use std::path::{Path, PathBuf};

pub struct LocalStorage {
    path: PathBuf,
}

impl LocalStorage {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Resolves the save-file location: the config override when present,
    /// otherwise the context's default data path.
    pub fn resolve(ctx: &dyn AppContext, config: &Config) -> Result<Self> {
        let path = match &config.data_file {
            Some(p) => p.clone(),
            None => ctx.get_tasks_file_path()?,
        };
        Ok(Self::new(path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Saves all tasks, overwriting the existing file.
    pub fn save_all(&self, tasks: &[Task]) -> ChoreResult<()> {
        self.ensure_parent_dir()?;

        let mut contents = String::new();
        for task in tasks {
            contents.push_str(&task.to_save_line());
            contents.push('\n');
        }

        Self::with_lock(&self.path, || Self::atomic_write(&self.path, contents))
            .map_err(|_| storage_error("Failed to save tasks to file", &self.path))
    }

    /// Loads all tasks from disk.
    ///
    /// A missing file is created empty and yields an empty collection. A
    /// single corrupted line aborts the entire load; there is no best-effort
    /// partial recovery.
    pub fn load_all(&self) -> ChoreResult<Vec<Task>> {
        self.ensure_parent_dir()?;
        if !self.path.exists() {
            fs::write(&self.path, "")
                .map_err(|_| storage_error("Could not create data file", &self.path))?;
            return Ok(Vec::new());
        }

        let contents = Self::with_lock(&self.path, || Ok(fs::read_to_string(&self.path)?))
            .map_err(|_| storage_error("Failed to read tasks from file", &self.path))?;

        let mut tasks = Vec::new();
        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            tasks.push(Task::from_save_line(line)?);
        }
        Ok(tasks)
    }

    fn ensure_parent_dir(&self) -> ChoreResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent)
                .map_err(|_| storage_error("Could not create data directory", parent))?;
        }
        Ok(())
    }

    /// Sidecar lock file path (`tasks.txt` -> `tasks.txt.lock`).
    fn get_lock_path(file_path: &Path) -> PathBuf {
        let mut lock_path = file_path.to_path_buf();
        if let Some(ext) = lock_path.extension() {
            let mut new_ext = ext.to_os_string();
            new_ext.push(".lock");
            lock_path.set_extension(new_ext);
        } else {
            lock_path.set_extension("lock");
        }
        lock_path
    }

    /// Runs `f` while holding an exclusive advisory lock on the sidecar
    /// file. The lock is released on every exit path, including errors.
    pub fn with_lock<F, T>(file_path: &Path, f: F) -> Result<T>
    where
        F: FnOnce() -> Result<T>,
    {
        let lock_path = Self::get_lock_path(file_path);
        let file = fs::OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;

        file.lock_exclusive()?;
        let result = f();
        file.unlock()?;
        result
    }

    /// Atomic write: write to a `.tmp` sibling, then rename over the target.
    pub fn atomic_write<P: AsRef<Path>, C: AsRef<[u8]>>(path: P, contents: C) -> Result<()> {
        let path = path.as_ref();
        let tmp_path = path.with_extension("tmp");
        fs::write(&tmp_path, contents)?;
        fs::rename(tmp_path, path)?;
        Ok(())
    }
}

fn storage_error(what: &str, path: &Path) -> ChoreError {
    ChoreError::Storage(format!("{}: {}", what, path.display()))
}
