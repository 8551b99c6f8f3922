//! `td delete` command implementation

use anyhow::Result;
use clap::Args;
use tracing::info;

use super::AppContext;

#[derive(Args)]
pub struct DeleteArgs {
    /// Task number as shown by `td list`
    number: usize,
}

pub fn run(ctx: &AppContext, args: DeleteArgs) -> Result<()> {
    let (mut tasks, skipped) = ctx.load()?;
    let index = tasks.index_of(args.number)?;
    let removed = tasks.delete(index)?;
    ctx.save(&tasks, &skipped)?;
    info!("Deleted task {}, {} left", args.number, tasks.len());

    println!("Task deleted: {}", removed);
    println!("You now have {} task(s) in the list.", tasks.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::task::{Task, TaskList};
    use tempfile::tempdir;

    #[test]
    fn test_delete_by_number() -> Result<()> {
        let temp = tempdir()?;
        let ctx = AppContext::with_config(Config::default(), Some(temp.path().join("t.txt")))?;
        let mut tasks = TaskList::new();
        for name in ["one", "two", "three"] {
            tasks.add(Task::todo(name)?);
        }
        ctx.storage.save(&tasks)?;

        run(&ctx, DeleteArgs { number: 1 })?;
        let stored = ctx.storage.load()?;
        let names: Vec<_> = stored.iter().map(|t| t.description()).collect();
        assert_eq!(names, ["two", "three"]);

        assert!(run(&ctx, DeleteArgs { number: 3 }).is_err());
        assert_eq!(ctx.storage.load()?.len(), 2);
        Ok(())
    }

    #[test]
    fn test_delete_keeps_unreadable_lines() -> Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("t.txt");
        std::fs::write(&path, "T|-|one\nD|T|no date\nT|-|two\n")?;
        let ctx = AppContext::with_config(Config::default(), Some(path.clone()))?;

        run(&ctx, DeleteArgs { number: 1 })?;
        assert_eq!(std::fs::read_to_string(&path)?, "T|-|two\nD|T|no date\n");
        Ok(())
    }
}
