//! File-backed store: one pretty-printed `<collection>.json` per collection.

use std::fs;
use std::path::{Path, PathBuf};

use super::StoreBackend;
use crate::domain::error::StoreError;

#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    dir: PathBuf,
}

impl JsonFileBackend {
    /// Opens (and creates if needed) the data directory.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| StoreError::Io {
            path: dir.clone(),
            source,
        })?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, collection: &str) -> PathBuf {
        self.dir.join(format!("{collection}.json"))
    }
}

impl StoreBackend for JsonFileBackend {
    fn read(&self, collection: &'static str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(collection);
        if !path.exists() {
            return Ok(None);
        }
        fs::read_to_string(&path)
            .map(Some)
            .map_err(|source| StoreError::Io { path, source })
    }

    fn write(&self, collection: &'static str, contents: &str) -> Result<(), StoreError> {
        let path = self.path_for(collection);
        // Write next to the target and rename so a failed write never truncates it.
        let tmp = self.dir.join(format!(".{collection}.json.tmp"));
        fs::write(&tmp, contents).map_err(|source| StoreError::Io {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &path).map_err(|source| {
            let _ = fs::remove_file(&tmp);
            StoreError::Io { path, source }
        })
    }

    fn location(&self, collection: &'static str) -> String {
        self.path_for(collection).display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_reads_as_none() {
        let temp = TempDir::new().unwrap();
        let backend = JsonFileBackend::new(temp.path()).unwrap();
        assert!(backend.read("teachers").unwrap().is_none());
    }

    #[test]
    fn write_replaces_contents_and_leaves_no_temp_file() {
        let temp = TempDir::new().unwrap();
        let backend = JsonFileBackend::new(temp.path()).unwrap();
        backend.write("teachers", "[1]").unwrap();
        backend.write("teachers", "[]").unwrap();

        assert_eq!(backend.read("teachers").unwrap().as_deref(), Some("[]"));
        assert!(!temp.path().join(".teachers.json.tmp").exists());
    }

    #[test]
    fn failed_rename_removes_the_temp_file() {
        let temp = TempDir::new().unwrap();
        let backend = JsonFileBackend::new(temp.path()).unwrap();
        // A non-empty directory in place of the target makes the rename fail.
        let target = temp.path().join("teachers.json");
        fs::create_dir(&target).unwrap();
        fs::write(target.join("keep"), "x").unwrap();

        let err = backend.write("teachers", "[]").unwrap_err();

        assert!(matches!(err, StoreError::Io { .. }));
        assert!(!temp.path().join(".teachers.json.tmp").exists());
    }

    #[test]
    fn creates_nested_data_directory() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("school").join("data");
        let backend = JsonFileBackend::new(&nested).unwrap();
        assert!(nested.is_dir());
        assert_eq!(backend.path_for("classrooms"), nested.join("classrooms.json"));
    }
}
