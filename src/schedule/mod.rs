mod filters;
mod queue;
mod task;

pub use filters::{is_bootstrap_loader, is_plugin_core, is_plugin_core_artifact};
pub use queue::{AcquireTask, QueueSet, TaskQueue};
pub use task::ResolveVersionTask;

use thiserror::Error;

use crate::model::ManifestError;

#[derive(Error, Debug)]
pub enum ResolutionError {
    #[error("version manifest is invalid: {0}")]
    ManifestInvalid(#[from] ManifestError),
    #[error("installer profile manifest could not be resolved: {0}")]
    SecondaryManifestUnavailable(#[source] ManifestError),
    #[error("resolution was interrupted before the task graph was complete")]
    Interrupted,
}
