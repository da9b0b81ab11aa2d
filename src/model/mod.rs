use thiserror::Error;

pub mod version;

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("IO error reading manifest: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Missing manifest key `{0}` while parsing")]
    MissingKey(String),
    #[error("Manifest key `{0}` has the wrong type")]
    InvalidKey(String),
    #[error("Library name `{0}` is not a valid group:artifact:version[:classifier] coordinate")]
    InvalidLibraryName(String),
    #[error("Error reading package archive: {0}")]
    Archive(#[from] zip::result::ZipError),
    #[error("Entry `{0}` not found in package archive {1}")]
    MissingEntry(String, String),
}
