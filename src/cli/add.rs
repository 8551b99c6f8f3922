//! `td todo`, `td deadline` and `td event` command implementations

use anyhow::Result;
use clap::Args;
use tracing::{info, warn};

use super::{join_words, AppContext};
use crate::task::{datetime, Task, TaskKind};

#[derive(Args)]
pub struct TodoArgs {
    /// Task description
    #[arg(required = true, num_args = 1..)]
    description: Vec<String>,
}

#[derive(Args)]
pub struct DeadlineArgs {
    /// Task description
    #[arg(required = true, num_args = 1..)]
    description: Vec<String>,

    /// Due date, DD/MM/YYYY with an optional HHMM or HH:MM time
    #[arg(short, long)]
    by: String,
}

#[derive(Args)]
pub struct EventArgs {
    /// Event description
    #[arg(required = true, num_args = 1..)]
    description: Vec<String>,

    /// Start, DD/MM/YYYY with an optional HHMM or HH:MM time
    #[arg(short, long)]
    from: String,

    /// End, DD/MM/YYYY with an optional HHMM or HH:MM time
    #[arg(short, long)]
    to: String,
}

pub fn run_todo(ctx: &AppContext, args: TodoArgs) -> Result<()> {
    let task = Task::todo(join_words(&args.description))?;
    add(ctx, task)
}

pub fn run_deadline(ctx: &AppContext, args: DeadlineArgs) -> Result<()> {
    let by = datetime::parse(&args.by)?;
    let task = Task::deadline(join_words(&args.description), by)?;
    add(ctx, task)
}

pub fn run_event(ctx: &AppContext, args: EventArgs) -> Result<()> {
    let from = datetime::parse(&args.from)?;
    let to = datetime::parse(&args.to)?;
    let task = Task::event(join_words(&args.description), from, to)?;
    add(ctx, task)
}

fn add(ctx: &AppContext, task: Task) -> Result<()> {
    if let TaskKind::Event { from, to } = task.kind() {
        if from > to {
            warn!("Event \"{}\" starts after it ends", task.description());
        }
    }

    let (mut tasks, skipped) = ctx.load()?;
    let added = tasks.add(task).to_string();
    ctx.save(&tasks, &skipped)?;
    info!("Added {} task, list now has {}", added, tasks.len());

    println!("Task added: {}", added);
    println!("You now have {} task(s) in the list.", tasks.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use tempfile::tempdir;

    fn words(text: &str) -> Vec<String> {
        text.split(' ').map(str::to_string).collect()
    }

    #[test]
    fn test_add_each_kind() -> Result<()> {
        let temp = tempdir()?;
        let ctx = AppContext::with_config(Config::default(), Some(temp.path().join("t.txt")))?;

        run_todo(
            &ctx,
            TodoArgs {
                description: words("read book"),
            },
        )?;
        run_deadline(
            &ctx,
            DeadlineArgs {
                description: words("return book"),
                by: "25/12/2024 1800".to_string(),
            },
        )?;
        run_event(
            &ctx,
            EventArgs {
                description: words("project meeting"),
                from: "01-06-2024 09:00".to_string(),
                to: "01-06-2024 1130".to_string(),
            },
        )?;

        let lines: Vec<String> = ctx.storage.load()?.iter().map(Task::save).collect();
        assert_eq!(
            lines,
            [
                "T|-|read book",
                "D|-|return book|2024-12-25T18:00:00",
                "E|-|project meeting|2024-06-01T09:00:00|2024-06-01T11:30:00",
            ]
        );
        Ok(())
    }

    #[test]
    fn test_bad_date_adds_nothing() -> Result<()> {
        let temp = tempdir()?;
        let ctx = AppContext::with_config(Config::default(), Some(temp.path().join("t.txt")))?;

        let result = run_deadline(
            &ctx,
            DeadlineArgs {
                description: words("return book"),
                by: "next friday".to_string(),
            },
        );
        assert!(result.is_err());
        assert!(ctx.storage.load()?.is_empty());
        assert!(!ctx.storage.path().exists());
        Ok(())
    }
}
