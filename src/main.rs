//! taskdeck - command-line assistant for todos, deadlines and events

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use taskdeck::cli::{self, AppContext, Cli, Commands};

fn main() -> Result<()> {
    if std::env::var("TASKDECK_DEBUG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter("taskdeck=debug")
            .with_writer(std::io::stderr)
            .init();
    }

    let cli = Cli::parse();

    // Commands that never touch the datafile.
    match cli.command {
        Commands::Completion { shell } => {
            generate(shell, &mut Cli::command(), "td", &mut std::io::stdout());
            return Ok(());
        }
        Commands::Config(args) => return cli::config::run(args),
        _ => {}
    }

    let ctx = AppContext::open(cli.file)?;

    match cli.command {
        Commands::Todo(args) => cli::add::run_todo(&ctx, args),
        Commands::Deadline(args) => cli::add::run_deadline(&ctx, args),
        Commands::Event(args) => cli::add::run_event(&ctx, args),
        Commands::List(args) => cli::list::run(&ctx, args),
        Commands::Sort(args) => cli::sort::run(&ctx, args),
        Commands::Mark(args) => cli::mark::run(&ctx, args),
        Commands::Delete(args) => cli::delete::run(&ctx, args),
        Commands::Find(args) => cli::find::run(&ctx, args),
        Commands::Completion { .. } | Commands::Config(_) => unreachable!(),
    }
}
