use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use log::{debug, info};

use crate::{
    model::version::{Library, LibraryName, VersionDescriptor},
    platform::Environment,
    quirk,
    resolver::ManifestSource,
    schedule::{filters, queue::AcquireTask, QueueSet, ResolutionError},
    workspace::PackageWorkspace,
};

/// Resolves a version manifest into a finished task graph.
///
/// `run` is synchronous and single-shot: it resolves the primary manifest,
/// applies the quirk rules, then appends one acquisition task per surviving
/// library into the check queue, quirk-scheduled libraries first and the
/// remaining applicable primary libraries after, each side in its own
/// declaration order. The same inputs always produce the same coordinate
/// sequence.
///
/// On any error no result descriptor is published and the caller must
/// discard the queue set; there is no partial success.
pub struct ResolveVersionTask<S, W> {
    source: S,
    workspace: W,
    environment: Environment,
    cancelled: Arc<AtomicBool>,
    current_library: Option<LibraryName>,
}

impl<S, W> ResolveVersionTask<S, W>
where
    S: ManifestSource,
    W: PackageWorkspace,
{
    pub fn new(source: S, workspace: W) -> ResolveVersionTask<S, W> {
        ResolveVersionTask {
            source,
            workspace,
            environment: Environment::current(),
            cancelled: Arc::new(AtomicBool::new(false)),
            current_library: None,
        }
    }

    pub fn with_environment(mut self, environment: Environment) -> ResolveVersionTask<S, W> {
        self.environment = environment;
        self
    }

    /// Token an external timeout can trip to abandon the resolution. A
    /// tripped token surfaces as `Interrupted` before the next task is
    /// appended.
    pub fn cancellation_token(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.cancelled)
    }

    /// Human-readable progress line for the library currently being wired
    /// into the graph.
    pub fn description(&self) -> String {
        match &self.current_library {
            None => "Processing version.".to_string(),
            Some(name) => format!("Verifying {}.", name),
        }
    }

    /// Fixed sentinel: real fractional progress is reported by the
    /// downstream stages.
    pub fn progress(&self) -> f32 {
        0.0
    }

    pub fn run(&mut self, queues: &mut QueueSet) -> Result<VersionDescriptor, ResolutionError> {
        let mut version = self.source.resolve(None)?;
        info!("Resolving version {}", version.id);

        let mut context = quirk::QuirkContext::new(&self.environment, &self.workspace);
        quirk::apply_rules(&quirk::default_rules(), &mut version, &mut context)?;
        let quirk::QuirkContext {
            scheduled,
            legacy_injected,
            ..
        } = context;

        for library in scheduled {
            self.enqueue(library, queues)?;
        }

        for library in version.applicable_libraries(&self.environment) {
            if !filters::should_schedule(&library, legacy_injected) {
                debug!("Skipping {}, handled outside the primary pass", library.name);
                continue;
            }
            self.enqueue(library, queues)?;
        }

        Ok(version)
    }

    fn enqueue(&mut self, library: Library, queues: &mut QueueSet) -> Result<(), ResolutionError> {
        if self.cancelled.load(Ordering::Relaxed) {
            return Err(ResolutionError::Interrupted);
        }
        self.current_library = Some(library.name.clone());
        debug!("Scheduling acquisition of {}", library.name);
        queues.check.append(AcquireTask::new(library));
        Ok(())
    }
}
