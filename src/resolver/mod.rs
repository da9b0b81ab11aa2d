mod archive;
mod file;

pub use archive::{ArchiveManifestSource, PackagedManifestSource};
pub use file::FileManifestSource;

use crate::model::{version::VersionDescriptor, ManifestError};

/// Abstracts over "read a standalone manifest file" and "read a named entry
/// from within a package archive". Resolution is a pure parse step: no
/// platform filtering, no quirks.
pub trait ManifestSource {
    /// `key` selects a named manifest within the source, where the source
    /// kind supports more than one (e.g. `install_profile` inside an
    /// archive). Sources backed by a single file ignore it.
    fn resolve(&self, key: Option<&str>) -> Result<VersionDescriptor, ManifestError>;
}

impl<S: ManifestSource + ?Sized> ManifestSource for &S {
    fn resolve(&self, key: Option<&str>) -> Result<VersionDescriptor, ManifestError> {
        (*self).resolve(key)
    }
}
