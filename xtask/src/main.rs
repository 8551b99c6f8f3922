//! xtask - Development tasks for taskdeck

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development tasks for taskdeck")]
struct Xtask {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate CLI documentation from clap definitions
    GenDocs,

    /// Report every line of a datafile that fails to parse
    CheckDatafile {
        /// Datafile to check
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    let args = Xtask::parse();
    match args.command {
        Commands::GenDocs => generate_cli_docs(),
        Commands::CheckDatafile { path } => check_datafile(&path),
    }
}

fn generate_cli_docs() -> Result<()> {
    let markdown = clap_markdown::help_markdown::<taskdeck::cli::Cli>();

    let docs_dir = Path::new("docs/cli");
    fs::create_dir_all(docs_dir).context("Failed to create docs/cli directory")?;

    let output_path = docs_dir.join("reference.md");
    fs::write(&output_path, markdown).context("Failed to write CLI reference")?;

    println!("Generated CLI documentation at {}", output_path.display());
    Ok(())
}

fn check_datafile(path: &Path) -> Result<()> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;

    let mut bad = 0;
    for (number, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        if let Err(e) = taskdeck::task::parse_line(line) {
            println!("{}:{}: {}", path.display(), number + 1, e);
            bad += 1;
        }
    }

    if bad > 0 {
        bail!("{} malformed line(s) in {}", bad, path.display());
    }
    println!("{} is clean", path.display());
    Ok(())
}
