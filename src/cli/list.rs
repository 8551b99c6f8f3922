//! `td list` command implementation

use anyhow::Result;
use chrono::NaiveDateTime;
use clap::Args;
use serde::Serialize;
use tracing::debug;

use super::AppContext;
use crate::task::{SortKey, SortOrder, Task, TaskKind, TaskList};

#[derive(Args)]
pub struct ListArgs {
    /// Show sorted by description, start or deadline (the stored order is kept)
    #[arg(short, long)]
    sort: Option<String>,

    /// Sort direction: ascending or descending
    #[arg(short, long, requires = "sort")]
    order: Option<String>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct TaskJson<'a> {
    number: usize,
    kind: &'static str,
    description: &'a str,
    completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    by: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    from: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    to: Option<NaiveDateTime>,
}

impl<'a> TaskJson<'a> {
    fn new(number: usize, task: &'a Task) -> Self {
        let (by, from, to) = match task.kind() {
            TaskKind::Todo => (None, None, None),
            TaskKind::Deadline { by } => (Some(*by), None, None),
            TaskKind::Event { from, to } => (None, Some(*from), Some(*to)),
        };
        Self {
            number,
            kind: task.kind().label(),
            description: task.description(),
            completed: task.is_completed(),
            by,
            from,
            to,
        }
    }
}

/// Resolve the sort requested on the command line, falling back to config
fn requested_sort(ctx: &AppContext, args: &ListArgs) -> Result<Option<(SortKey, SortOrder)>> {
    match &args.sort {
        Some(key) => {
            let order = match &args.order {
                Some(order) => order.parse::<SortOrder>()?,
                None => SortOrder::default(),
            };
            Ok(Some((key.parse::<SortKey>()?, order)))
        }
        None => ctx.config.default_sort(),
    }
}

/// Tasks paired with their 1-based stored number, in display order
fn rows(tasks: &TaskList, sort: Option<(SortKey, SortOrder)>) -> Vec<(usize, &Task)> {
    let indexed = match sort {
        Some((key, order)) => {
            debug!("Listing sorted by {} ({})", key, order);
            tasks.sorted(order, key)
        }
        None => tasks.iter().enumerate().collect(),
    };
    indexed.into_iter().map(|(i, t)| (i + 1, t)).collect()
}

pub fn run(ctx: &AppContext, args: ListArgs) -> Result<()> {
    let (tasks, _) = ctx.load()?;
    let sort = requested_sort(ctx, &args)?;
    let rows = rows(&tasks, sort);

    if args.json {
        let json: Vec<TaskJson<'_>> = rows.iter().map(|(n, t)| TaskJson::new(*n, t)).collect();
        println!("{}", serde_json::to_string_pretty(&json)?);
        return Ok(());
    }

    if rows.is_empty() {
        println!("You have no tasks. Add one with `td todo <description>`.");
        return Ok(());
    }

    println!("Here are the tasks in your list:");
    for (number, task) in rows {
        println!("{}. {}", number, task);
    }

    Ok(())
}
