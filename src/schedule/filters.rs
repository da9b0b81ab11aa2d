use crate::model::version::{Library, LibraryName};

/// Coordinate-prefix families the scheduler treats specially. Matches are
/// structural: they apply whether the coordinate was declared or injected.
const PLUGIN_CORE_PREFIXES: [&str; 2] = [
    "net.minecraftforge:minecraftforge",
    "net.minecraftforge:forge:",
];

/// The artifact half of the plugin-core family, the prefix installer
/// translation rewrites and derives classifier variants from.
pub const PLUGIN_CORE_ARTIFACT_PREFIX: &str = "net.minecraftforge:forge:";

/// Bootstrap classloader superseded by the legacy wrapper.
const BOOTSTRAP_LOADER_PREFIX: &str = "net.minecraft:launchwrapper";

/// Plugin-core family members are never scheduled from the primary pass;
/// they are acquired exclusively through installer translation.
pub fn is_plugin_core(name: &LibraryName) -> bool {
    PLUGIN_CORE_PREFIXES
        .iter()
        .any(|prefix| name.has_prefix(prefix))
}

pub fn is_plugin_core_artifact(name: &LibraryName) -> bool {
    name.has_prefix(PLUGIN_CORE_ARTIFACT_PREFIX)
}

pub fn is_bootstrap_loader(name: &LibraryName) -> bool {
    name.has_prefix(BOOTSTRAP_LOADER_PREFIX)
}

/// Primary-pass filter: plugin-core is always excluded, the bootstrap
/// classloader only once legacy injection has fired.
pub fn should_schedule(library: &Library, legacy_injected: bool) -> bool {
    if is_plugin_core(&library.name) {
        return false;
    }
    if legacy_injected && is_bootstrap_loader(&library.name) {
        return false;
    }
    true
}
