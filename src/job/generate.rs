use std::path::{Path, PathBuf};
use indicatif::ProgressBar;
use log::info;
use tokio::fs::read_to_string;
use crate::cli;
use crate::history::History;
use crate::job::JobError;
use crate::manifest::Manifest;

pub async fn handle_generate(
    folder: String,
    out: Option<PathBuf>,
    recursive: bool,
) -> anyhow::Result<()> {
    let folder_path = PathBuf::from(&folder);
    if !folder_path.is_dir() {
        return Err(JobError::FolderNotFound(folder))?;
    }

    let scan_bar = ProgressBar::new_spinner()
        .with_style(cli::scan_progress_style());
    scan_bar.set_prefix("Scanning");
    scan_bar.set_message(folder.clone());

    let builder = Manifest::builder();
    let builder = if recursive {
        builder.with_files_from_dir_recursive(&folder_path)?
    } else {
        builder.with_files_from_dir(&folder_path)?
    };
    let manifest = builder.finish();

    scan_bar.finish();

    let out = match out {
        Some(out) => out,
        None => default_manifest_path(&folder_path),
    };
    manifest.save_to(&out)?;

    info!("Manifest with {0} files saved to {1}", manifest.files.len(), out.display());

    let mut history = History::load_default();
    history.record_source_folder(&folder);
    history.save_default()?;

    Ok(())
}

pub async fn handle_collect(
    lists: Vec<PathBuf>,
    destination_folder: Option<String>,
    out: Option<PathBuf>,
) -> anyhow::Result<()> {
    let out = match (out, &destination_folder) {
        (Some(out), _) => out,
        (None, Some(destination)) => PathBuf::from(destination).join("dragged_files.json"),
        (None, None) => return Err(JobError::MissingDestination)?,
    };

    let mut builder = Manifest::builder();
    for list in lists {
        let contents = read_to_string(&list)
            .await?;
        builder = builder.with_paths(contents.lines().map(|line| line.trim().to_owned()));
    }
    let manifest = builder.finish();

    crate::fs_utils::ensure_parent(&out)?;
    manifest.save_to(&out)?;

    info!("Manifest with {0} files saved to {1}", manifest.files.len(), out.display());

    if let Some(destination) = destination_folder {
        let mut history = History::load_default();
        history.record_destination_folder(&destination);
        history.save_default()?;
    }

    Ok(())
}

fn default_manifest_path(folder: &Path) -> PathBuf {
    let name = folder.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| String::from("file_list"));

    folder.join(format!("{0}.json", name))
}
