pub mod rules;

use std::{fmt::Display, path::Path, str::FromStr};

use log::{debug, error};
use regex_lite::Regex;
use serde::{de::Visitor, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::{
    model::ManifestError,
    model::version::rules::OsRule,
    platform::Environment,
};

/// Fully qualified library identity, conventionally rendered as
/// `group:artifact:version[:classifier]`.
///
/// The name alone identifies a dependency for deduplication; two libraries
/// with equal names are the same dependency regardless of retrieval URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub struct LibraryName {
    pub group: String,
    pub artifact: String,
    pub version: String,
    pub classifier: Option<String>,
}

impl LibraryName {
    pub fn new(
        group: impl Into<String>,
        artifact: impl Into<String>,
        version: impl Into<String>,
    ) -> LibraryName {
        LibraryName {
            group: group.into(),
            artifact: artifact.into(),
            version: version.into(),
            classifier: None,
        }
    }

    /// Same coordinate with the classifier replaced.
    pub fn with_classifier(&self, classifier: impl Into<String>) -> LibraryName {
        LibraryName {
            classifier: Some(classifier.into()),
            ..self.clone()
        }
    }

    /// Prefix match on the rendered `group:artifact:...` form, used by the
    /// coordinate-family predicates.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.to_string().starts_with(prefix)
    }
}

impl FromStr for LibraryName {
    type Err = ManifestError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let re: Regex = Regex::new(
            r"^(?P<group>[^:]+):(?P<artifact>[^:]+):(?P<version>[^:]+)(?::(?P<classifier>[^:]+))?$",
        )
        .unwrap();
        let captures = re
            .captures(value)
            .ok_or_else(|| ManifestError::InvalidLibraryName(value.to_string()))?;

        Ok(LibraryName {
            group: captures["group"].to_string(),
            artifact: captures["artifact"].to_string(),
            version: captures["version"].to_string(),
            classifier: captures.name("classifier").map(|c| c.as_str().to_string()),
        })
    }
}

impl Display for LibraryName {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.artifact, self.version)?;
        if let Some(classifier) = &self.classifier {
            write!(f, ":{}", classifier)?;
        }
        Ok(())
    }
}

impl Serialize for LibraryName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for LibraryName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct LibraryNameVisitor;

        impl Visitor<'_> for LibraryNameVisitor {
            type Value = LibraryName;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a group:artifact:version[:classifier] string")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                v.parse().map_err(serde::de::Error::custom)
            }
        }

        deserializer.deserialize_str(LibraryNameVisitor)
    }
}

/// A dependency declared by a version manifest: identity, optional retrieval
/// base URL (absent means default repository-convention resolution) and
/// platform applicability rules (absent means always applicable).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Library {
    pub name: LibraryName,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub rules: Vec<OsRule>,
}

impl Library {
    pub fn new(name: LibraryName) -> Library {
        Library {
            name,
            url: None,
            rules: Vec::new(),
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Library {
        self.url = Some(url.into());
        self
    }

    pub fn is_applicable(&self, environment: &Environment) -> bool {
        rules::evaluate(&self.rules, environment)
    }
}

/// The resolved manifest for a runnable build: runtime id, entry point and
/// the ordered dependency list. Created once by a manifest source, mutated
/// only by quirk rules, frozen once task generation begins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionDescriptor {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_class: Option<String>,
    pub libraries: Vec<Library>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub installer: bool,
}

impl VersionDescriptor {
    pub fn from_file(path: &Path) -> Result<VersionDescriptor, ManifestError> {
        debug!(
            "Attempting to read version manifest from {}",
            path.display()
        );
        let contents = std::fs::read_to_string(path)?;

        let descriptor = VersionDescriptor::from_json_str(&contents);
        if let Err(err) = &descriptor {
            error!("Could not build a valid version descriptor from {}: {err}", path.display());
        }
        descriptor
    }

    pub fn from_json_str(data: &str) -> Result<VersionDescriptor, ManifestError> {
        let mut value = serde_json::from_str::<Map<String, Value>>(data)?;

        let id = value
            .remove("id")
            .ok_or_else(|| ManifestError::MissingKey("id".to_string()))
            .and_then(|v| match v {
                Value::String(s) => Ok(s),
                _ => Err(ManifestError::InvalidKey("id".to_string())),
            })?;

        let main_class = value
            .remove("mainClass")
            .map(|v| match v {
                Value::String(s) => Ok(s),
                _ => Err(ManifestError::InvalidKey("mainClass".to_string())),
            })
            .transpose()?;

        let libraries = value
            .remove("libraries")
            .map(serde_json::from_value::<Vec<Library>>)
            .transpose()?
            .unwrap_or_default();

        let installer = value
            .remove("installer")
            .map(|v| match v {
                Value::Bool(b) => Ok(b),
                _ => Err(ManifestError::InvalidKey("installer".to_string())),
            })
            .transpose()?
            .unwrap_or(false);

        Ok(VersionDescriptor {
            id,
            main_class,
            libraries,
            installer,
        })
    }

    /// First dash-delimited segment of the id, the part version-driven quirk
    /// predicates compare against.
    pub fn base_version(&self) -> &str {
        self.id.split('-').next().unwrap_or(&self.id)
    }

    pub fn add_library(&mut self, library: Library) {
        self.libraries.push(library);
    }

    /// The subsequence of libraries applicable to `environment`, in
    /// declaration order.
    pub fn applicable_libraries(&self, environment: &Environment) -> Vec<Library> {
        self.libraries
            .iter()
            .filter(|library| library.is_applicable(environment))
            .cloned()
            .collect()
    }
}
