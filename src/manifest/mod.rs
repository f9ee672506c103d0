use std::fs::{File, read, remove_file};
use std::io::Write;
use std::path::Path;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use walkdir::WalkDir;
use crate::fs_utils::{file_path_relative_to, list_file_names};

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Manifest {
    pub files: Vec<ManifestEntry>,
}

/// A manifest entry is either a bare file name or the older object form
/// carrying a description and tags. Both deserialize from the same
/// `files` array.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum ManifestEntry {
    Name(String),
    Detailed {
        filename: String,
        #[serde(default)]
        description: String,
        #[serde(default)]
        tags: Vec<String>,
    },
}

impl ManifestEntry {
    pub fn file_name(&self) -> &str {
        match self {
            ManifestEntry::Name(name) => name,
            ManifestEntry::Detailed { filename, .. } => filename,
        }
    }
}

#[derive(Debug)]
pub struct ManifestBuilder {
    files: Vec<ManifestEntry>,
}

impl Manifest {
    pub fn builder() -> ManifestBuilder {
        ManifestBuilder::new()
    }

    pub fn save_to<T: AsRef<Path>>(
        &self,
        file_path: T,
    ) -> anyhow::Result<()> {
        if file_path.as_ref().is_file() {
            remove_file(&file_path)?;
        }

        let bytes = serde_json::to_vec_pretty(&self)?;
        let mut file = File::create(file_path)?;
        file.write_all(&bytes)?;

        Ok(())
    }

    pub fn load_from<T: AsRef<Path>>(
        file_path: T,
    ) -> anyhow::Result<Self> {
        if !file_path.as_ref().is_file() {
            return Err(ManifestError::ManifestNotFound)?;
        }

        let bytes = read(file_path)?;
        let manifest = serde_json::from_slice(&bytes)
            .map_err(ManifestError::InvalidManifest)?;

        Ok(manifest)
    }

    pub fn file_names(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(|entry| entry.file_name())
    }
}

impl ManifestBuilder {
    fn new() -> Self {
        ManifestBuilder {
            files: Vec::new(),
        }
    }

    pub fn finish(self) -> Manifest {
        Manifest {
            files: self.files,
        }
    }

    pub fn with_files_from_dir<T: AsRef<Path>>(
        mut self,
        dir: T,
    ) -> anyhow::Result<Self> {
        for name in list_file_names(dir)? {
            self.files.push(ManifestEntry::Name(name));
        }

        Ok(self)
    }

    pub fn with_files_from_dir_recursive<T: AsRef<Path>>(
        mut self,
        dir: T,
    ) -> anyhow::Result<Self> {
        for entry in WalkDir::new(&dir).sort_by_file_name() {
            let entry = entry?;
            if entry.path().is_dir() {
                continue;
            }

            let relative = file_path_relative_to(entry.path(), &dir)?;

            self.files.push(ManifestEntry::Name(String::from(relative.to_string_lossy())));
        }

        Ok(self)
    }

    pub fn with_paths<I, S>(
        mut self,
        paths: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for path in paths {
            let path = path.into();
            if path.is_empty() {
                continue;
            }

            self.files.push(ManifestEntry::Name(path));
        }

        self
    }
}

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("The manifest was not found!")]
    ManifestNotFound,
    #[error("The manifest is not valid JSON: {0}")]
    InvalidManifest(serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(manifest: &Manifest) -> Vec<&str> {
        manifest.file_names().collect()
    }

    #[test]
    fn save_and_load_round_trips_the_file_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("job.json");

        let manifest = Manifest::builder()
            .with_paths(vec!["a.txt", "b.txt", "sub/c.txt"])
            .finish();
        manifest.save_to(&path).unwrap();

        let loaded = Manifest::load_from(&path).unwrap();

        assert_eq!(names(&loaded), vec!["a.txt", "b.txt", "sub/c.txt"]);
    }

    #[test]
    fn with_paths_concatenates_lists_and_drops_empty_entries() {
        let manifest = Manifest::builder()
            .with_paths(vec!["one.txt", "", "two.txt"])
            .with_paths(vec!["", "three.txt"])
            .finish();

        assert_eq!(names(&manifest), vec!["one.txt", "two.txt", "three.txt"]);
    }

    #[test]
    fn builder_lists_only_immediate_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.txt"), b"b").unwrap();
        std::fs::write(dir.path().join("a.txt"), b"a").unwrap();
        let nested = dir.path().join("nested");
        std::fs::create_dir(&nested).unwrap();
        std::fs::write(nested.join("deep.txt"), b"d").unwrap();

        let manifest = Manifest::builder()
            .with_files_from_dir(dir.path())
            .unwrap()
            .finish();

        assert_eq!(names(&manifest), vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn recursive_builder_keeps_relative_paths() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("top.txt"), b"t").unwrap();
        let nested = dir.path().join("nested");
        std::fs::create_dir(&nested).unwrap();
        std::fs::write(nested.join("deep.txt"), b"d").unwrap();

        let manifest = Manifest::builder()
            .with_files_from_dir_recursive(dir.path())
            .unwrap()
            .finish();

        let expected_deep = std::path::PathBuf::from("nested")
            .join("deep.txt");
        let listed = names(&manifest);

        assert!(listed.contains(&"top.txt"));
        assert!(listed.contains(&expected_deep.to_str().unwrap()));
        assert_eq!(listed.len(), 2);
    }

    #[test]
    fn detailed_entries_still_expose_a_file_name() {
        let json = r#"{
            "files": [
                "plain.txt",
                { "filename": "tagged.txt", "description": "report", "tags": ["q3"] },
                { "filename": "bare.txt" }
            ]
        }"#;

        let manifest: Manifest = serde_json::from_str(json).unwrap();

        assert_eq!(
            manifest.file_names().collect::<Vec<_>>(),
            vec!["plain.txt", "tagged.txt", "bare.txt"]
        );
    }

    #[test]
    fn loading_a_missing_manifest_fails() {
        let dir = tempfile::tempdir().unwrap();

        let result = Manifest::load_from(dir.path().join("nope.json"));

        assert!(result.is_err());
    }

    #[test]
    fn loading_malformed_json_reports_an_invalid_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, b"{ not json").unwrap();

        let err = Manifest::load_from(&path).unwrap_err();

        assert!(err.to_string().contains("not valid JSON"));
    }
}
