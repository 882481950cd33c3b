//! Export, profile and catalog handlers.

use super::{CliWorkshop, find_dossier};
use grimoire::catalog::{BEAST_AFFINITY, BEAST_ENVIRONMENT, BEAST_TAXONOMY};
use grimoire::{
    EntityId, ExportFormat, GrimoireResult, StorageError, StorageErrorKind, file_name,
};
use std::path::PathBuf;
use tracing::info;

/// Export one dossier to stdout or a file.
///
/// A directory `output` receives a file named after the dossier.
pub fn export_dossier(
    workshop: &CliWorkshop,
    id: &EntityId,
    format: ExportFormat,
    output: Option<PathBuf>,
) -> GrimoireResult<()> {
    let rendered = match format {
        ExportFormat::Markdown => workshop.export_markdown(id)?,
        ExportFormat::Json => workshop.export_json(id)?,
    };

    let Some(output) = output else {
        println!("{rendered}");
        return Ok(());
    };

    let target = if output.is_dir() {
        let entity = find_dossier(workshop, None, id)?;
        output.join(file_name(&entity, format))
    } else {
        output
    };
    std::fs::write(&target, rendered).map_err(|e| {
        StorageError::new(StorageErrorKind::FileWrite(format!(
            "{}: {}",
            target.display(),
            e
        )))
    })?;
    info!(path = %target.display(), %format, "Exported dossier");
    println!("Wrote {}", target.display());
    Ok(())
}

/// Print the profile, oldest first.
pub fn list_profile(workshop: &CliWorkshop) {
    let items = workshop.profile_items();
    if items.is_empty() {
        println!("Profile is empty");
    }
    for item in items {
        println!("{}\t{}\t{}", item.saved_type(), item.id(), item.display_name());
    }
}

/// Print the suggested beast constraint values.
pub fn print_catalog() {
    for (title, values) in [
        ("Taxonomy", BEAST_TAXONOMY),
        ("Affinity", BEAST_AFFINITY),
        ("Environment", BEAST_ENVIRONMENT),
    ] {
        println!("{title}: {}", values.join(", "));
    }
}
