use std::path::Path;
use log::info;
use thiserror::Error;
use crate::fs_utils;

pub mod copy;
pub mod generate;
pub mod validate;

/// Boundary between the job logic and the host filesystem. Copy and
/// validation only ever touch files through this trait, so tests can
/// substitute a recording store.
pub trait FileStore {
    fn copy_file(&self, src: &Path, dst: &Path) -> anyhow::Result<u64>;
    fn file_exists(&self, path: &Path) -> bool;
    fn ensure_dir(&self, dir: &Path) -> anyhow::Result<()>;
}

pub struct LocalStore;

impl FileStore for LocalStore {
    fn copy_file(&self, src: &Path, dst: &Path) -> anyhow::Result<u64> {
        fs_utils::ensure_parent(dst)?;
        let bytes = std::fs::copy(src, dst)?;

        Ok(bytes)
    }

    fn file_exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn ensure_dir(&self, dir: &Path) -> anyhow::Result<()> {
        fs_utils::ensure_dir(dir)
    }
}

pub async fn handle_list_files(folder: String) -> anyhow::Result<()> {
    let folder_path = Path::new(&folder);
    if !folder_path.is_dir() {
        return Err(JobError::FolderNotFound(folder))?;
    }

    let names = fs_utils::list_file_names(folder_path)?;
    info!("{0} files in '{1}'", names.len(), folder);
    for name in names {
        println!("{0}", name);
    }

    Ok(())
}

#[derive(Error, Debug)]
pub enum JobError {
    #[error("Folder '{0}' not found!")]
    FolderNotFound(String),
    #[error("Source folder '{0}' not found!")]
    SourceFolderNotFound(String),
    #[error("Destination folder '{0}' not found!")]
    DestinationFolderNotFound(String),
    #[error("No output path: provide --out or --destination-folder")]
    MissingDestination,
    #[error("Missing files in destination: {}", .0.join(", "))]
    MissingFiles(Vec<String>),
}
