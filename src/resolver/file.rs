use std::path::PathBuf;

use crate::{
    model::{version::VersionDescriptor, ManifestError},
    resolver::ManifestSource,
};

/// A standalone version manifest on disk.
#[derive(Debug, Clone)]
pub struct FileManifestSource {
    path: PathBuf,
}

impl FileManifestSource {
    pub fn new(path: impl Into<PathBuf>) -> FileManifestSource {
        FileManifestSource { path: path.into() }
    }
}

impl ManifestSource for FileManifestSource {
    fn resolve(&self, _key: Option<&str>) -> Result<VersionDescriptor, ManifestError> {
        VersionDescriptor::from_file(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn resolve_manifest_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("version.json");
        std::fs::write(&path, r#"{ "id": "1.16.5", "libraries": [] }"#).unwrap();

        let descriptor = FileManifestSource::new(&path).resolve(None).unwrap();
        assert_eq!(descriptor.id, "1.16.5");
    }

    #[test]
    fn resolve_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileManifestSource::new(dir.path().join("nope.json"));
        assert!(matches!(source.resolve(None), Err(ManifestError::Io(_))));
    }
}
