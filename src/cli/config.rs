//! `td config` command implementation

use anyhow::Result;
use clap::Args;

use crate::config::{config_path, load_config, save_config};

#[derive(Args)]
pub struct ConfigArgs {
    /// Write the current settings to config.toml, creating it if needed
    #[arg(long)]
    init: bool,
}

pub fn run(args: ConfigArgs) -> Result<()> {
    let config = load_config()?;
    let path = config_path()?;

    if args.init {
        save_config(&config)?;
        println!("Wrote {}", path.display());
        return Ok(());
    }

    println!("# {}", path.display());
    print!("{}", toml::to_string_pretty(&config)?);
    println!("# datafile: {}", config.data_file()?.display());
    Ok(())
}
