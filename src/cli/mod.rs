//! CLI command implementations

pub mod add;
pub mod config;
pub mod definition;
pub mod delete;
pub mod find;
pub mod list;
pub mod mark;
pub mod sort;

pub use definition::{Cli, Commands};

use anyhow::Result;
use std::path::PathBuf;

use crate::config::{load_config, Config};
use crate::task::{Storage, TaskList};

/// Everything a command needs to touch the datafile
pub struct AppContext {
    pub config: Config,
    pub storage: Storage,
}

impl AppContext {
    /// Load config and resolve the datafile. `file` overrides the config.
    pub fn open(file: Option<PathBuf>) -> Result<Self> {
        let config = load_config()?;
        Self::with_config(config, file)
    }

    pub fn with_config(config: Config, file: Option<PathBuf>) -> Result<Self> {
        let path = match file {
            Some(path) => path,
            None => config.data_file()?,
        };
        let storage = Storage::new(path)
            .strict(!config.storage.skip_malformed_lines)
            .with_backup(config.storage.backup);
        Ok(Self { config, storage })
    }

    /// Load the task list, telling the user about lines that could not be
    /// read. Pass the returned lines back to [`AppContext::save`].
    pub fn load(&self) -> Result<(TaskList, Vec<String>)> {
        let (tasks, skipped) = self.storage.load_with_skipped()?;
        if !skipped.is_empty() {
            eprintln!(
                "Warning: {} line(s) of {} could not be read and are kept as they are.",
                skipped.len(),
                self.storage.path().display()
            );
        }
        Ok((tasks, skipped))
    }

    /// Save the task list followed by the unreadable lines from [`AppContext::load`]
    pub fn save(&self, tasks: &TaskList, skipped: &[String]) -> Result<()> {
        self.storage.save_with_skipped(tasks, skipped)
    }
}

/// Join free-form words from the command line into one description
pub(crate) fn join_words(words: &[String]) -> String {
    words.join(" ")
}
