use std::{fs::File, io::Read, path::PathBuf};

use log::debug;
use zip::{result::ZipError, ZipArchive};

use crate::{
    model::{version::VersionDescriptor, ManifestError},
    resolver::{FileManifestSource, ManifestSource},
};

const DEFAULT_KEY: &str = "version";

/// A version manifest stored as a named JSON entry inside a zip archive.
#[derive(Debug, Clone)]
pub struct ArchiveManifestSource {
    archive: PathBuf,
}

impl ArchiveManifestSource {
    pub fn new(archive: impl Into<PathBuf>) -> ArchiveManifestSource {
        ArchiveManifestSource {
            archive: archive.into(),
        }
    }
}

impl ManifestSource for ArchiveManifestSource {
    fn resolve(&self, key: Option<&str>) -> Result<VersionDescriptor, ManifestError> {
        let entry_name = format!("{}.json", key.unwrap_or(DEFAULT_KEY));
        debug!(
            "Reading manifest entry {} from archive {}",
            entry_name,
            self.archive.display()
        );

        let file = File::open(&self.archive)?;
        let mut archive = ZipArchive::new(file)?;
        let mut entry = match archive.by_name(&entry_name) {
            Ok(entry) => entry,
            Err(ZipError::FileNotFound) => {
                return Err(ManifestError::MissingEntry(
                    entry_name,
                    self.archive.display().to_string(),
                ))
            }
            Err(err) => return Err(err.into()),
        };

        let mut contents = String::new();
        entry.read_to_string(&mut contents)?;
        VersionDescriptor::from_json_str(&contents)
    }
}

/// Prefers the manifest already extracted next to the package archive and
/// falls back to the archive entry, the way install profiles ship.
#[derive(Debug, Clone)]
pub struct PackagedManifestSource {
    file: PathBuf,
    archive: ArchiveManifestSource,
}

impl PackagedManifestSource {
    pub fn new(file: impl Into<PathBuf>, archive: impl Into<PathBuf>) -> PackagedManifestSource {
        PackagedManifestSource {
            file: file.into(),
            archive: ArchiveManifestSource::new(archive),
        }
    }
}

impl ManifestSource for PackagedManifestSource {
    fn resolve(&self, key: Option<&str>) -> Result<VersionDescriptor, ManifestError> {
        if self.file.exists() {
            return FileManifestSource::new(&self.file).resolve(key);
        }
        debug!(
            "Manifest file {} not present, falling back to the package archive",
            self.file.display()
        );
        self.archive.resolve(key)
    }
}
