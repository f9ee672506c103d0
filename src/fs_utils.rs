use std::path::{Path, PathBuf};
use std::fs::create_dir_all;

pub fn list_file_names<T: AsRef<Path>>(dir: T) -> anyhow::Result<Vec<String>> {
    let mut names = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.path().is_file() {
            continue;
        }

        names.push(entry.file_name().to_string_lossy().into_owned());
    }

    names.sort();

    Ok(names)
}

pub fn file_path_relative_to<TFile: AsRef<Path>, TDir: AsRef<Path>>(file: TFile, dir: TDir) -> anyhow::Result<PathBuf> {
    let file = file.as_ref().canonicalize()?;
    let dir = dir.as_ref().canonicalize()?;

    let relative = file.strip_prefix(&dir)?;

    Ok(relative.to_path_buf())
}

pub fn ensure_dir<T: AsRef<Path>>(dir: T) -> anyhow::Result<()> {
    let dir = dir.as_ref();

    if !dir.is_dir() {
        create_dir_all(dir)?;
    }

    Ok(())
}

pub fn ensure_parent<T: AsRef<Path>>(path: T) -> anyhow::Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.is_dir() {
            create_dir_all(parent)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_file_names_skips_directories_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.txt"), b"b").unwrap();
        std::fs::write(dir.path().join("a.txt"), b"a").unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();

        let names = list_file_names(dir.path()).unwrap();

        assert_eq!(names, vec!["a.txt".to_string(), "b.txt".to_string()]);
    }

    #[test]
    fn relative_path_is_stripped_of_the_base_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("inner");
        create_dir_all(&nested).unwrap();
        let file = nested.join("note.txt");
        std::fs::write(&file, b"x").unwrap();

        let relative = file_path_relative_to(&file, dir.path()).unwrap();

        assert_eq!(relative, PathBuf::from("inner").join("note.txt"));
    }

    #[test]
    fn ensure_dir_creates_missing_folders() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("deep").join("er");

        ensure_dir(&target).unwrap();

        assert!(target.is_dir());
    }
}
