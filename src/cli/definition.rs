//! Top-level clap definitions

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use super::add::{DeadlineArgs, EventArgs, TodoArgs};
use super::config::ConfigArgs;
use super::delete::DeleteArgs;
use super::find::FindArgs;
use super::list::ListArgs;
use super::mark::MarkArgs;
use super::sort::SortArgs;

#[derive(Parser)]
#[command(name = "td")]
#[command(about = "Track todos, deadlines and events from the terminal")]
#[command(version)]
pub struct Cli {
    /// Datafile to read and write instead of the configured one
    #[arg(long, global = true, env = "TASKDECK_FILE")]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a todo
    Todo(TodoArgs),

    /// Add a task with a deadline
    Deadline(DeadlineArgs),

    /// Add an event with a start and end time
    Event(EventArgs),

    /// Show the task list
    #[command(alias = "ls")]
    List(ListArgs),

    /// Reorder the stored task list
    Sort(SortArgs),

    /// Mark a task as done
    #[command(alias = "done")]
    Mark(MarkArgs),

    /// Delete a task
    #[command(alias = "rm")]
    Delete(DeleteArgs),

    /// Search task descriptions
    Find(FindArgs),

    /// Show or initialise the config file
    Config(ConfigArgs),

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
