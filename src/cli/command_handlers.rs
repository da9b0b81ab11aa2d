use log::info;

use crate::{
    model::version::VersionDescriptor,
    resolver::FileManifestSource,
    schedule::{QueueSet, ResolveVersionTask},
    workspace::{DirWorkspace, PackageWorkspace},
};
use std::{error::Error, path::Path};

/// Handler to plan command
pub fn do_plan(pack_directory: &Path, manifest_file_name: &Path) -> Result<(), Box<dyn Error>> {
    let (version, queues) = resolve_pack(pack_directory, manifest_file_name)?;

    info!(
        "Planned {} acquisition tasks for version {}",
        queues.check.len(),
        version.id
    );
    for task in queues.check.iter() {
        match &task.library.url {
            Some(url) => println!("{} ({url})", task.library.name),
            None => println!("{}", task.library.name),
        }
    }

    Ok(())
}

/// Handler to resolve command
/// Prints the post-quirk descriptor, the object downstream stages launch from
pub fn do_resolve(pack_directory: &Path, manifest_file_name: &Path) -> Result<(), Box<dyn Error>> {
    let (version, _) = resolve_pack(pack_directory, manifest_file_name)?;

    println!("{}", serde_json::to_string_pretty(&version)?);

    Ok(())
}

fn resolve_pack(
    pack_directory: &Path,
    manifest_file_name: &Path,
) -> Result<(VersionDescriptor, QueueSet), Box<dyn Error>> {
    let workspace = DirWorkspace::new(pack_directory);
    let source = FileManifestSource::new(workspace.bin_dir().join(manifest_file_name));

    let mut queues = QueueSet::new();
    let version = ResolveVersionTask::new(source, workspace).run(&mut queues)?;

    Ok((version, queues))
}
