//! Datafile persistence

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

use super::list::TaskList;
use super::parser::parse_line;

pub struct Storage {
    path: PathBuf,
    skip_malformed_lines: bool,
    backup: bool,
}

impl Storage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            skip_malformed_lines: true,
            backup: true,
        }
    }

    /// Abort loading on the first malformed line instead of skipping it
    pub fn strict(mut self, strict: bool) -> Self {
        self.skip_malformed_lines = !strict;
        self
    }

    /// Copy the datafile to `<name>.bak` before each save
    pub fn with_backup(mut self, backup: bool) -> Self {
        self.backup = backup;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<TaskList> {
        let (tasks, _) = self.load_with_skipped()?;
        Ok(tasks)
    }

    /// Load tasks together with the raw lines that could not be parsed, so a
    /// later [`Storage::save_with_skipped`] can write them back untouched
    pub fn load_with_skipped(&self) -> Result<(TaskList, Vec<String>)> {
        if !self.path.exists() {
            debug!("No datafile at {}, starting empty", self.path.display());
            return Ok((TaskList::new(), Vec::new()));
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read tasks from {}", self.path.display()))?;

        let mut tasks = TaskList::new();
        let mut skipped = Vec::new();
        for (number, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match parse_line(line) {
                Ok(task) => {
                    tasks.add(task);
                }
                Err(e) if self.skip_malformed_lines => {
                    warn!("Skipping line {} of {}: {}", number + 1, self.path.display(), e);
                    skipped.push(line.to_string());
                }
                Err(e) => {
                    return Err(e).with_context(|| {
                        format!("Line {} of {} is corrupted", number + 1, self.path.display())
                    });
                }
            }
        }

        debug!(
            "Loaded {} tasks from {} ({} skipped)",
            tasks.len(),
            self.path.display(),
            skipped.len()
        );
        Ok((tasks, skipped))
    }

    pub fn save(&self, tasks: &TaskList) -> Result<()> {
        self.save_with_skipped(tasks, &[])
    }

    /// Save `tasks`, then append `skipped` lines verbatim after them
    pub fn save_with_skipped(&self, tasks: &TaskList, skipped: &[String]) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;

        if self.backup && self.path.exists() {
            let backup_path = self.path.with_extension("bak");
            if let Err(e) = fs::copy(&self.path, &backup_path) {
                warn!("Failed to create backup: {}", e);
            }
        }

        let mut content = String::new();
        for task in tasks {
            content.push_str(&task.save());
            content.push('\n');
        }
        for line in skipped {
            content.push_str(line);
            content.push('\n');
        }

        let mut file = NamedTempFile::new_in(&dir)?;
        file.write_all(content.as_bytes())?;
        file.persist(&self.path)
            .with_context(|| format!("Failed to write tasks to {}", self.path.display()))?;

        debug!(
            "Saved {} tasks to {} ({} unreadable lines kept)",
            tasks.len(),
            self.path.display(),
            skipped.len()
        );
        Ok(())
    }
}
