//! `td mark` command implementation

use anyhow::Result;
use clap::Args;
use tracing::info;

use super::AppContext;

#[derive(Args)]
pub struct MarkArgs {
    /// Task number as shown by `td list`
    number: usize,
}

pub fn run(ctx: &AppContext, args: MarkArgs) -> Result<()> {
    let (mut tasks, skipped) = ctx.load()?;
    let index = tasks.index_of(args.number)?;
    let (task, changed) = tasks.mark_complete(index)?;
    let shown = task.to_string();

    if !changed {
        println!("Task {} is already done: {}", args.number, shown);
        return Ok(());
    }

    ctx.save(&tasks, &skipped)?;
    info!("Marked task {} complete", args.number);
    println!("Nice! I've marked this task as done: {}", shown);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::task::{Task, TaskList};
    use tempfile::tempdir;

    #[test]
    fn test_mark_by_number() -> Result<()> {
        let temp = tempdir()?;
        let ctx = AppContext::with_config(Config::default(), Some(temp.path().join("t.txt")))?;
        let mut tasks = TaskList::new();
        tasks.add(Task::todo("one")?);
        tasks.add(Task::todo("two")?);
        ctx.storage.save(&tasks)?;

        run(&ctx, MarkArgs { number: 2 })?;
        let stored = ctx.storage.load()?;
        assert!(!stored.get(0).is_some_and(|t| t.is_completed()));
        assert!(stored.get(1).is_some_and(|t| t.is_completed()));

        run(&ctx, MarkArgs { number: 2 })?;
        assert!(run(&ctx, MarkArgs { number: 0 }).is_err());
        assert!(run(&ctx, MarkArgs { number: 3 }).is_err());
        Ok(())
    }

    #[test]
    fn test_inverted_event_stays_pending_and_loadable() -> Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("t.txt");
        let line = "E|-|party|2024-06-02T10:00:00|2024-06-01T10:00:00\n";
        std::fs::write(&path, line)?;
        let ctx = AppContext::with_config(Config::default(), Some(path.clone()))?;

        assert!(run(&ctx, MarkArgs { number: 1 }).is_err());
        assert_eq!(std::fs::read_to_string(&path)?, line);
        assert_eq!(ctx.storage.load()?.len(), 1);
        Ok(())
    }
}
