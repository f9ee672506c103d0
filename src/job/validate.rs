use std::path::{Path, PathBuf};
use log::info;
use crate::history::History;
use crate::job::{FileStore, JobError, LocalStore};
use crate::manifest::Manifest;

pub async fn handle_validate(
    manifest_path: PathBuf,
    destination_folder: String,
) -> anyhow::Result<()> {
    let destination = PathBuf::from(&destination_folder);
    if !destination.is_dir() {
        return Err(JobError::DestinationFolderNotFound(destination_folder))?;
    }

    let manifest = Manifest::load_from(&manifest_path)?;

    let missing = missing_files(&manifest, &destination, &LocalStore);

    let mut history = History::load_default();
    history.record_file_list(&manifest_path.to_string_lossy());
    history.record_destination_folder(&destination_folder);
    history.save_default()?;

    if !missing.is_empty() {
        return Err(JobError::MissingFiles(missing))?;
    }

    info!("All files are present in the destination folder.");

    Ok(())
}

pub fn missing_files(
    manifest: &Manifest,
    destination: &Path,
    store: &impl FileStore,
) -> Vec<String> {
    manifest.file_names()
        .filter(|name| !store.file_exists(&destination.join(name)))
        .map(String::from)
        .collect()
}
