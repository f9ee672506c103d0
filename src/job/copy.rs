use std::path::{Path, PathBuf};
use indicatif::ProgressBar;
use log::{info, warn};
use crate::cli;
use crate::history::History;
use crate::job::{FileStore, JobError, LocalStore};
use crate::job::validate::missing_files;
use crate::manifest::Manifest;

pub struct CopyReport {
    pub copied: usize,
    pub skipped: Vec<String>,
    pub missing: Vec<String>,
}

pub async fn handle_copy(
    manifest_path: PathBuf,
    source_folder: String,
    destination_folder: String,
) -> anyhow::Result<()> {
    let source = PathBuf::from(&source_folder);
    if !source.is_dir() {
        return Err(JobError::SourceFolderNotFound(source_folder))?;
    }

    let manifest = Manifest::load_from(&manifest_path)?;
    let destination = PathBuf::from(&destination_folder);

    let report = copy_files(&manifest, &source, &destination, &LocalStore)?;

    info!("Copying process completed. {0} files copied.", report.copied);
    if !report.skipped.is_empty() {
        warn!("Files not found in source: {0}", report.skipped.join(", "));
    }
    if !report.missing.is_empty() {
        warn!("Missing files in destination: {0}", report.missing.join(", "));
    }

    let mut history = History::load_default();
    history.record_file_list(&manifest_path.to_string_lossy());
    history.record_source_folder(&source_folder);
    history.record_destination_folder(&destination_folder);
    history.save_default()?;

    Ok(())
}

pub fn copy_files(
    manifest: &Manifest,
    source: &Path,
    destination: &Path,
    store: &impl FileStore,
) -> anyhow::Result<CopyReport> {
    store.ensure_dir(destination)?;

    let copy_bar = ProgressBar::new(manifest.files.len() as u64)
        .with_style(cli::copy_progress_style());

    let mut copied = 0;
    let mut skipped = Vec::new();
    for name in manifest.file_names() {
        copy_bar.set_message(String::from(name));

        let src = source.join(name);
        if store.file_exists(&src) {
            store.copy_file(&src, &destination.join(name))?;
            copied += 1;
        } else {
            warn!("File '{0}' not found in '{1}'", name, source.display());
            skipped.push(String::from(name));
        }

        copy_bar.inc(1);
    }

    copy_bar.finish();

    let missing = missing_files(manifest, destination, store);

    Ok(CopyReport {
        copied,
        skipped,
        missing,
    })
}
