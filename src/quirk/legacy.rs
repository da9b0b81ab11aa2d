use crate::{
    model::version::{Library, LibraryName, VersionDescriptor},
    quirk::{QuirkContext, QuirkRule},
    schedule::ResolutionError,
};

const LEGACY_WRAPPER_URL: &str = "https://mirror.packfetch.net/lib/";
const LEGACY_MAIN_CLASS: &str = "net.packfetch.legacywrapper.Launch";

/// Runtimes below this version need the legacy wrapper to launch.
const LEGACY_CUTOFF: (u32, u32) = (1, 6);

fn legacy_wrapper() -> Library {
    Library::new(LibraryName::new("net.packfetch", "legacywrapper", "1.2.1"))
        .with_url(LEGACY_WRAPPER_URL)
}

/// Pre-cutoff runtimes cannot be launched directly: append the legacy
/// wrapper library and hand the entry point over to it. The wrapper is
/// scheduled by the primary pass, so it lands last among the injected items.
pub struct LegacyRuntimeInjection;

impl QuirkRule for LegacyRuntimeInjection {
    fn name(&self) -> &'static str {
        "legacy-runtime-injection"
    }

    fn matches(&self, version: &VersionDescriptor) -> bool {
        is_legacy_version(version.base_version())
    }

    fn apply(
        &self,
        version: &mut VersionDescriptor,
        context: &mut QuirkContext,
    ) -> Result<(), ResolutionError> {
        version.add_library(legacy_wrapper());
        version.main_class = Some(LEGACY_MAIN_CLASS.to_string());
        context.legacy_injected = true;
        Ok(())
    }
}

/// Numeric comparison of `major.minor` against the cutoff. Unparseable ids
/// are treated as modern.
fn is_legacy_version(base_version: &str) -> bool {
    let mut parts = base_version.split('.');
    let major: u32 = match parts.next().and_then(|p| p.parse().ok()) {
        Some(major) => major,
        None => return false,
    };
    let minor: u32 = parts.next().and_then(|p| p.parse().ok()).unwrap_or(0);
    (major, minor) < LEGACY_CUTOFF
}
