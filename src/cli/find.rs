//! `td find` command implementation

use anyhow::Result;
use clap::Args;

use super::{join_words, AppContext};

#[derive(Args)]
pub struct FindArgs {
    /// Text to look for in task descriptions
    #[arg(required = true, num_args = 1..)]
    keyword: Vec<String>,
}

pub fn run(ctx: &AppContext, args: FindArgs) -> Result<()> {
    let (tasks, _) = ctx.load()?;
    let keyword = join_words(&args.keyword);
    let found = tasks.find(&keyword);

    if found.is_empty() {
        println!("No tasks match \"{}\".", keyword);
        return Ok(());
    }

    println!("Here are the matching tasks in your list:");
    for (index, task) in found {
        println!("{}. {}", index + 1, task);
    }
    Ok(())
}
