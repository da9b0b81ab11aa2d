use std::{error::Error, path::PathBuf};

use crate::cli::command_handlers::{do_plan, do_resolve};

mod builder;

pub use builder::PackfetchBuilder;

pub struct Packfetch {
    pack_directory: PathBuf,
    manifest_file_name: PathBuf,
}

impl Packfetch {
    pub fn builder() -> PackfetchBuilder {
        PackfetchBuilder::default()
    }

    /// Prints the ordered acquisition task plan for the pack's manifest
    pub fn plan(&self) -> Result<(), Box<dyn Error>> {
        do_plan(&self.pack_directory, &self.manifest_file_name)
    }

    /// Prints the finalized version descriptor as JSON
    pub fn resolve(&self) -> Result<(), Box<dyn Error>> {
        do_resolve(&self.pack_directory, &self.manifest_file_name)
    }
}
