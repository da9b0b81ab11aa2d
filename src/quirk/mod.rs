mod installer;
mod legacy;

pub use installer::InstallerTranslation;
pub use legacy::LegacyRuntimeInjection;

use log::debug;

use crate::{
    model::version::{Library, VersionDescriptor},
    platform::Environment,
    schedule::ResolutionError,
    workspace::PackageWorkspace,
};

/// State shared by the quirk rules of one resolution.
pub struct QuirkContext<'a> {
    pub environment: &'a Environment,
    pub workspace: &'a dyn PackageWorkspace,
    /// Libraries the rules queue ahead of the primary pass, in the order
    /// they must enter the check queue.
    pub scheduled: Vec<Library>,
    /// Read by the primary-pass filter to drop the bootstrap classloader.
    pub legacy_injected: bool,
}

impl<'a> QuirkContext<'a> {
    pub fn new(environment: &'a Environment, workspace: &'a dyn PackageWorkspace) -> QuirkContext<'a> {
        QuirkContext {
            environment,
            workspace,
            scheduled: Vec::new(),
            legacy_injected: false,
        }
    }

    pub fn schedule(&mut self, library: Library) {
        self.scheduled.push(library);
    }
}

/// A predicate-guarded transform over a version descriptor. Rules are
/// order-sensitive: later rules may observe mutations made by earlier ones,
/// so they only ever run in the order `default_rules` returns them, each at
/// most once per resolution.
pub trait QuirkRule {
    fn name(&self) -> &'static str;

    fn matches(&self, version: &VersionDescriptor) -> bool;

    fn apply(
        &self,
        version: &mut VersionDescriptor,
        context: &mut QuirkContext,
    ) -> Result<(), ResolutionError>;
}

/// The fixed rule order: legacy runtime injection, then installer
/// translation.
pub fn default_rules() -> Vec<Box<dyn QuirkRule>> {
    vec![
        Box::new(LegacyRuntimeInjection),
        Box::new(InstallerTranslation),
    ]
}

pub fn apply_rules(
    rules: &[Box<dyn QuirkRule>],
    version: &mut VersionDescriptor,
    context: &mut QuirkContext,
) -> Result<(), ResolutionError> {
    for rule in rules {
        if rule.matches(version) {
            debug!("Applying quirk rule `{}` to version {}", rule.name(), version.id);
            rule.apply(version, context)?;
        }
    }
    Ok(())
}
