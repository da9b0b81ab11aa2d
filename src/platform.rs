use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Operating system identifier as spelled in version manifests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OsIdentifier {
    Windows,
    Osx,
    Linux,
}

impl OsIdentifier {
    pub fn current() -> OsIdentifier {
        if cfg!(target_os = "windows") {
            OsIdentifier::Windows
        } else if cfg!(target_os = "macos") {
            OsIdentifier::Osx
        } else {
            OsIdentifier::Linux
        }
    }
}

impl Display for OsIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            OsIdentifier::Windows => f.write_str("windows"),
            OsIdentifier::Osx => f.write_str("osx"),
            OsIdentifier::Linux => f.write_str("linux"),
        }
    }
}

/// The environment library applicability rules are evaluated against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    pub os: OsIdentifier,
    pub arch: String,
}

impl Environment {
    pub fn current() -> Environment {
        Environment {
            os: OsIdentifier::current(),
            arch: std::env::consts::ARCH.to_string(),
        }
    }

    pub fn new(os: OsIdentifier, arch: impl Into<String>) -> Environment {
        Environment {
            os,
            arch: arch.into(),
        }
    }
}
