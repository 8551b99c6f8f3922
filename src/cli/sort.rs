//! `td sort` command implementation

use anyhow::Result;
use clap::Args;
use tracing::info;

use super::AppContext;
use crate::task::{SortKey, SortOrder};

#[derive(Args)]
pub struct SortArgs {
    /// Field to sort on: description, start or deadline
    key: String,

    /// Sort direction: ascending or descending
    #[arg(default_value = "ascending")]
    order: String,
}

pub fn run(ctx: &AppContext, args: SortArgs) -> Result<()> {
    let key: SortKey = args.key.parse()?;
    let order: SortOrder = args.order.parse()?;

    let (mut tasks, skipped) = ctx.load()?;
    tasks.sort(order, key);
    ctx.save(&tasks, &skipped)?;
    info!("Sorted {} tasks by {} ({})", tasks.len(), key, order);

    println!("Sorted your list by {} in {} order:", key, order);
    for (i, task) in tasks.iter().enumerate() {
        println!("{}. {}", i + 1, task);
    }
    Ok(())
}
