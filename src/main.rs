use std::error::Error;

use clap::Parser;
use log::error;
use packfetch::{
    cli::args::{CliArgs, Command},
    config::PackfetchConfig,
    Packfetch,
};

fn run() -> Result<(), Box<dyn Error>> {
    let args = CliArgs::parse();
    let config = PackfetchConfig::load()?;

    let mut builder = Packfetch::builder().manifest_file_name(&args.manifest_file_name);
    if let Some(directory) = &args.directory {
        builder = builder.pack_directory(directory);
    }
    if let Some(pack) = &args.pack {
        builder = builder.pack_name(pack.as_str());
    }
    if let Some(packs_directory) = config.packs_dir {
        builder = builder.packs_directory(packs_directory);
    }
    let packfetch = builder.try_build()?;

    match args.cmd {
        Command::Plan => packfetch.plan(),
        Command::Resolve => packfetch.resolve(),
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}
