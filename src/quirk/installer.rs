use log::debug;

use crate::{
    model::version::{Library, LibraryName, VersionDescriptor},
    quirk::{QuirkContext, QuirkRule},
    resolver::{ManifestSource, PackagedManifestSource},
    schedule::{is_plugin_core_artifact, ResolutionError},
    workspace::{INSTALL_PROFILE_FILE, PACKAGE_ARCHIVE_FILE},
};

const INSTALL_PROFILE_KEY: &str = "install_profile";

/// The one build whose installer still ships a directly runnable plugin
/// core; everything newer goes through the wrapper installer.
const LEGACY_INSTALLER_BUILD: &str = "1.12.2";

const PLUGIN_CORE_MAVEN_URL: &str = "https://files.minecraftforge.net/maven/";
const LAUNCHER_CLASSIFIER: &str = "launcher";
const UNIVERSAL_CLASSIFIER: &str = "universal";

const WRAPPER_INSTALLER_MAIN_CLASS: &str = "io.github.zekerzhayard.forgewrapper.installer.Main";

fn wrapper_installer() -> Library {
    Library::new(LibraryName::new(
        "io.github.zekerzhayard",
        "ForgeWrapper",
        "1.4.1",
    ))
}

/// Builds whose manifest declares only an installer profile are not runnable
/// as-is. This rule resolves the embedded profile and reconciles its
/// dependency list into the primary descriptor:
///
/// - On the legacy installer build, the plugin core itself is rewritten to
///   its `universal` artifact and scheduled in place.
/// - On every other build, the core is superseded: the wrapper installer
///   takes over the entry point and the `launcher`/`universal` variants are
///   derived from the first plugin-core coordinate of the primary list.
///
/// Translation is mandatory once the installer flag is set; an unresolvable
/// profile aborts the resolution.
pub struct InstallerTranslation;

impl QuirkRule for InstallerTranslation {
    fn name(&self) -> &'static str {
        "installer-translation"
    }

    fn matches(&self, version: &VersionDescriptor) -> bool {
        version.installer
    }

    fn apply(
        &self,
        version: &mut VersionDescriptor,
        context: &mut QuirkContext,
    ) -> Result<(), ResolutionError> {
        let bin_dir = context.workspace.bin_dir();
        let source = PackagedManifestSource::new(
            bin_dir.join(INSTALL_PROFILE_FILE),
            bin_dir.join(PACKAGE_ARCHIVE_FILE),
        );
        let profile = source
            .resolve(Some(INSTALL_PROFILE_KEY))
            .map_err(ResolutionError::SecondaryManifestUnavailable)?;

        debug!(
            "Reconciling installer profile {} into version {}",
            profile.id, version.id
        );

        let legacy_installer_build = version.base_version() == LEGACY_INSTALLER_BUILD;

        for library in profile.applicable_libraries(context.environment) {
            if is_plugin_core_artifact(&library.name) {
                if legacy_installer_build {
                    let rewritten = Library {
                        name: library.name.with_classifier(UNIVERSAL_CLASSIFIER),
                        url: Some(PLUGIN_CORE_MAVEN_URL.to_string()),
                        rules: library.rules.clone(),
                    };
                    version.add_library(rewritten.clone());
                    context.schedule(rewritten);
                }
                continue;
            }
            context.schedule(library);
        }

        if !legacy_installer_build {
            version.add_library(wrapper_installer());
            version.main_class = Some(WRAPPER_INSTALLER_MAIN_CLASS.to_string());

            // Single-match semantics: only the first plugin-core coordinate
            // of the primary list contributes derived variants.
            let core = version
                .applicable_libraries(context.environment)
                .into_iter()
                .find(|library| is_plugin_core_artifact(&library.name));

            if let Some(core) = core {
                let launcher = Library::new(core.name.with_classifier(LAUNCHER_CLASSIFIER))
                    .with_url(PLUGIN_CORE_MAVEN_URL);
                version.add_library(launcher.clone());
                context.schedule(launcher);

                let universal = Library::new(core.name.with_classifier(UNIVERSAL_CLASSIFIER))
                    .with_url(PLUGIN_CORE_MAVEN_URL);
                context.schedule(universal);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        platform::{Environment, OsIdentifier},
        workspace::{DirWorkspace, PackageWorkspace},
    };
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn environment() -> Environment {
        Environment::new(OsIdentifier::Linux, "x86_64")
    }

    fn workspace_with_profile(profile: &str) -> (TempDir, DirWorkspace) {
        let dir = tempfile::tempdir().unwrap();
        let workspace = DirWorkspace::new(dir.path());
        std::fs::create_dir_all(workspace.bin_dir()).unwrap();
        std::fs::write(workspace.bin_dir().join(INSTALL_PROFILE_FILE), profile).unwrap();
        (dir, workspace)
    }

    fn scheduled_names(context: &QuirkContext) -> Vec<String> {
        context
            .scheduled
            .iter()
            .map(|library| library.name.to_string())
            .collect()
    }

    #[test]
    fn matches_only_installer_manifests() {
        let plain = VersionDescriptor::from_json_str(r#"{ "id": "1.16.5" }"#).unwrap();
        let installer =
            VersionDescriptor::from_json_str(r#"{ "id": "1.16.5", "installer": true }"#).unwrap();
        assert!(!InstallerTranslation.matches(&plain));
        assert!(InstallerTranslation.matches(&installer));
    }

    #[test]
    fn legacy_build_rewrites_plugin_core_in_place() {
        let profile = r#"
        {
            "id": "1.12.2-installer",
            "libraries": [
                { "name": "com.google.guava:guava:21.0" },
                { "name": "net.minecraftforge:forge:1.12.2-14.23.5.2847" },
                { "name": "org.ow2.asm:asm-all:5.2" }
            ]
        }"#;
        let (_dir, workspace) = workspace_with_profile(profile);
        let environment = environment();
        let mut context = QuirkContext::new(&environment, &workspace);
        let mut version = VersionDescriptor::from_json_str(
            r#"{ "id": "1.12.2-forge1.12.2-14.23.5.2847", "mainClass": "original.Main", "installer": true }"#,
        )
        .unwrap();

        InstallerTranslation.apply(&mut version, &mut context).unwrap();

        assert_eq!(
            scheduled_names(&context),
            vec![
                "com.google.guava:guava:21.0",
                "net.minecraftforge:forge:1.12.2-14.23.5.2847:universal",
                "org.ow2.asm:asm-all:5.2",
            ]
        );
        assert_eq!(version.libraries.len(), 1);
        assert_eq!(
            version.libraries[0].name.to_string(),
            "net.minecraftforge:forge:1.12.2-14.23.5.2847:universal"
        );
        assert_eq!(
            version.libraries[0].url.as_deref(),
            Some(PLUGIN_CORE_MAVEN_URL)
        );
        // The legacy installer build keeps its own entry point.
        assert_eq!(version.main_class.as_deref(), Some("original.Main"));
    }

    #[test]
    fn modern_build_injects_wrapper_and_derived_variants() {
        let profile = r#"
        {
            "id": "1.16.5-installer",
            "libraries": [
                { "name": "net.minecraftforge:forge:1.16.5-36.2.39" },
                { "name": "com.google.guava:guava:21.0" }
            ]
        }"#;
        let (_dir, workspace) = workspace_with_profile(profile);
        let environment = environment();
        let mut context = QuirkContext::new(&environment, &workspace);
        let mut version = VersionDescriptor::from_json_str(
            r#"
            {
                "id": "1.16.5-forge-36.2.39",
                "mainClass": "original.Main",
                "installer": true,
                "libraries": [
                    { "name": "net.minecraftforge:forge:1.16.5-36.2.39" },
                    { "name": "org.ow2.asm:asm-all:5.2" }
                ]
            }"#,
        )
        .unwrap();

        InstallerTranslation.apply(&mut version, &mut context).unwrap();

        // Profile core is superseded, not scheduled as-is.
        assert_eq!(
            scheduled_names(&context),
            vec![
                "com.google.guava:guava:21.0",
                "net.minecraftforge:forge:1.16.5-36.2.39:launcher",
                "net.minecraftforge:forge:1.16.5-36.2.39:universal",
            ]
        );
        assert_eq!(
            version.main_class.as_deref(),
            Some(WRAPPER_INSTALLER_MAIN_CLASS)
        );
        let names: Vec<String> = version
            .libraries
            .iter()
            .map(|library| library.name.to_string())
            .collect();
        assert_eq!(
            names,
            vec![
                "net.minecraftforge:forge:1.16.5-36.2.39",
                "org.ow2.asm:asm-all:5.2",
                "io.github.zekerzhayard:ForgeWrapper:1.4.1",
                "net.minecraftforge:forge:1.16.5-36.2.39:launcher",
            ]
        );
    }

    #[test]
    fn derived_variants_use_only_the_first_primary_match() {
        let profile = r#"{ "id": "1.16.5-installer", "libraries": [] }"#;
        let (_dir, workspace) = workspace_with_profile(profile);
        let environment = environment();
        let mut context = QuirkContext::new(&environment, &workspace);
        let mut version = VersionDescriptor::from_json_str(
            r#"
            {
                "id": "1.16.5-forge-36.2.39",
                "installer": true,
                "libraries": [
                    { "name": "net.minecraftforge:forge:1.16.5-36.2.39" },
                    { "name": "net.minecraftforge:forge:1.16.5-36.2.40" }
                ]
            }"#,
        )
        .unwrap();

        InstallerTranslation.apply(&mut version, &mut context).unwrap();

        assert_eq!(
            scheduled_names(&context),
            vec![
                "net.minecraftforge:forge:1.16.5-36.2.39:launcher",
                "net.minecraftforge:forge:1.16.5-36.2.39:universal",
            ]
        );
    }

    #[test]
    fn unresolvable_profile_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let workspace = DirWorkspace::new(dir.path());
        let environment = environment();
        let mut context = QuirkContext::new(&environment, &workspace);
        let mut version =
            VersionDescriptor::from_json_str(r#"{ "id": "1.16.5-forge-36.2.39", "installer": true }"#)
                .unwrap();

        let result = InstallerTranslation.apply(&mut version, &mut context);
        assert!(matches!(
            result,
            Err(ResolutionError::SecondaryManifestUnavailable(_))
        ));
    }
}
