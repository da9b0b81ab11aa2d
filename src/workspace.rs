use std::path::PathBuf;

/// File name of the extracted install profile inside a package's bin dir.
pub const INSTALL_PROFILE_FILE: &str = "install_profile.json";

/// File name of the package archive the install profile may be embedded in.
pub const PACKAGE_ARCHIVE_FILE: &str = "package.zip";

/// Directory layout of an installed package, as supplied by the surrounding
/// package model.
pub trait PackageWorkspace {
    /// Location where the package's install-profile manifest and archive are
    /// expected to be found.
    fn bin_dir(&self) -> PathBuf;
}

#[derive(Debug, Clone)]
pub struct DirWorkspace {
    root: PathBuf,
}

impl DirWorkspace {
    pub fn new(root: impl Into<PathBuf>) -> DirWorkspace {
        DirWorkspace { root: root.into() }
    }
}

impl PackageWorkspace for DirWorkspace {
    fn bin_dir(&self) -> PathBuf {
        self.root.join("bin")
    }
}
