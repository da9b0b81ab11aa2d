use std::path::PathBuf;

use clap::Parser;

/// Version manifest resolution and acquisition planning for game packs.
#[derive(Debug, Parser)]
#[clap(version)]
pub struct CliArgs {
    #[clap(subcommand)]
    pub cmd: Command,
    /// Root directory of the pack to resolve.
    #[clap(short, long)]
    pub directory: Option<PathBuf>,
    /// Name of a pack inside the packs directory.
    #[clap(short, long, env = "PACKFETCH_PACK")]
    pub pack: Option<String>,
    /// Name of the version manifest inside the pack bin directory.
    #[clap(short, long, default_value = "version.json")]
    pub manifest_file_name: PathBuf,
}

#[derive(Debug, Parser)]
pub enum Command {
    ///Prints the ordered acquisition task plan for the pack's version manifest
    Plan,
    ///Prints the finalized version descriptor as JSON
    Resolve,
}
