use std::{env, error::Error, path::PathBuf};

use home::home_dir;

use crate::Packfetch;

#[derive(Default)]
pub struct PackfetchBuilder {
    pack_directory: Option<PathBuf>,
    pack_name: Option<String>,
    packs_directory: Option<PathBuf>,
    manifest_file_name: Option<PathBuf>,
}

impl PackfetchBuilder {
    /// Root directory of the pack to resolve.
    ///
    /// Takes precedence over `pack_name`; defaults to the current directory.
    pub fn pack_directory(mut self, path: impl Into<PathBuf>) -> Self {
        self.pack_directory = Some(path.into());
        self
    }

    /// Name of a pack inside the packs directory.
    pub fn pack_name(mut self, name: impl Into<String>) -> Self {
        self.pack_name = Some(name.into());
        self
    }

    /// Location packs are installed under.
    ///
    /// Defaults to `$HOME/.packfetch/packs`.
    pub fn packs_directory(mut self, path: impl Into<PathBuf>) -> Self {
        self.packs_directory = Some(path.into());
        self
    }

    /// Name of the version manifest inside the pack bin directory.
    ///
    /// Defaults to `version.json`.
    pub fn manifest_file_name(mut self, path: impl Into<PathBuf>) -> Self {
        self.manifest_file_name = Some(path.into());
        self
    }

    pub fn try_build(self) -> Result<Packfetch, Box<dyn Error>> {
        let Self {
            pack_directory,
            pack_name,
            packs_directory,
            manifest_file_name,
        } = self;

        let pack_directory = match (pack_directory, pack_name) {
            (Some(directory), _) => directory,
            (None, Some(name)) => packs_directory
                .unwrap_or_else(default_packs_directory)
                .join(name),
            (None, None) => env::current_dir()?,
        };

        let manifest_file_name =
            manifest_file_name.unwrap_or_else(|| PathBuf::from("version.json"));

        Ok(Packfetch {
            pack_directory,
            manifest_file_name,
        })
    }
}

fn default_packs_directory() -> PathBuf {
    let mut packs_directory =
        home_dir().expect("Could not find home dir. Please define $HOME env variable.");
    packs_directory.push(".packfetch/packs");
    packs_directory
}
