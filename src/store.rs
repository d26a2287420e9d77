//! Show library persistence
//!
//! This module owns the local show library: one directory holding one JSON
//! file per tracked show, named by the decimal show id. The store is the
//! single source of truth for watch state across runs.

use crate::show::{ShowRecord, ShowSummary};
use log::warn;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during show library operations
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failed to determine the platform data directory location
    #[error("Failed to determine data directory location")]
    DataDirectoryNotFound,

    /// Failed to create or access the library directory
    #[error("Failed to create library directory at {path}: {source}")]
    DirectoryCreationFailed {
        path: PathBuf,
        source: io::Error,
    },

    /// No record exists for the requested show id
    #[error("No tracked show with id {0}")]
    NotFound(u64),

    /// Failed to read a show record from disk
    #[error("Failed to read show file {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        source: io::Error,
    },

    /// Failed to write a show record to disk
    #[error("Failed to write show file {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        source: io::Error,
    },

    /// Failed to delete a show record from disk
    #[error("Failed to delete show file {path}: {source}")]
    DeleteFailed {
        path: PathBuf,
        source: io::Error,
    },

    /// Failed to deserialize a show record
    #[error("Failed to decode show file {path}: {source}")]
    DecodeFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Failed to serialize a show record
    #[error("Failed to serialize show record: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}

/// The local library of tracked shows
///
/// Every operation works on whole records: a write fully replaces the show's
/// file, and a read hands the caller an independently owned copy. Records are
/// stored as two-space-indented JSON so the files stay inspectable by hand.
pub struct ShowStore {
    /// The directory where show records are stored
    dir: PathBuf,
}

impl ShowStore {
    /// Opens the show library in the platform's standard data directory.
    pub fn open_default() -> Result<Self, StoreError> {
        let proj_dirs = directories::ProjectDirs::from("", "", "wherewasi")
            .ok_or(StoreError::DataDirectoryNotFound)?;

        Self::open(proj_dirs.data_dir().join("shows"))
    }

    /// Opens the show library at the given directory, creating it if needed.
    ///
    /// Creation is idempotent; opening an existing library is a no-op apart
    /// from the directory check.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();

        fs::create_dir_all(&dir).map_err(|e| StoreError::DirectoryCreationFailed {
            path: dir.clone(),
            source: e,
        })?;

        Ok(Self { dir })
    }

    /// Returns the path of the record file for a show id.
    fn record_path(&self, id: u64) -> PathBuf {
        self.dir.join(id.to_string())
    }

    /// Lists all tracked shows as `{id, name}` summaries.
    ///
    /// Enumerates every regular file in the library directory in filesystem
    /// order (not sorted). A file that cannot be read or decoded is skipped
    /// with a warning instead of aborting the listing, so one corrupt record
    /// never hides the healthy ones.
    pub fn list(&self) -> Result<Vec<ShowSummary>, StoreError> {
        let entries = fs::read_dir(&self.dir).map_err(|e| StoreError::ReadFailed {
            path: self.dir.clone(),
            source: e,
        })?;

        let mut summaries = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|e| StoreError::ReadFailed {
                path: self.dir.clone(),
                source: e,
            })?;
            let path = entry.path();

            if !path.is_file() {
                continue;
            }

            let content = match fs::read_to_string(&path) {
                Ok(content) => content,
                Err(e) => {
                    warn!("Skipping unreadable show file {}: {}", path.display(), e);
                    continue;
                }
            };

            let record: ShowRecord = match serde_json::from_str(&content) {
                Ok(record) => record,
                Err(e) => {
                    warn!("Skipping corrupt show file {}: {}", path.display(), e);
                    continue;
                }
            };

            summaries.push(ShowSummary {
                id: record.id,
                name: record.name,
            });
        }

        Ok(summaries)
    }

    /// Reads the full record of one tracked show.
    pub fn read(&self, id: u64) -> Result<ShowRecord, StoreError> {
        let path = self.record_path(id);

        let content = fs::read_to_string(&path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                StoreError::NotFound(id)
            } else {
                StoreError::ReadFailed { path: path.clone(), source: e }
            }
        })?;

        serde_json::from_str(&content).map_err(|e| StoreError::DecodeFailed { path, source: e })
    }

    /// Persists a show record, fully replacing any previous file.
    ///
    /// The record is serialized to a temporary file in the library directory
    /// and then renamed over the target, so an interrupted write leaves the
    /// previously committed record untouched.
    pub fn write(&self, record: &ShowRecord) -> Result<(), StoreError> {
        let path = self.record_path(record.id);

        // Serialize to indented JSON
        let content = serde_json::to_string_pretty(record)?;

        let mut tmp = tempfile::NamedTempFile::new_in(&self.dir).map_err(|e| {
            StoreError::WriteFailed { path: path.clone(), source: e }
        })?;

        tmp.write_all(content.as_bytes())
            .map_err(|e| StoreError::WriteFailed { path: path.clone(), source: e })?;

        // Atomically replace the target file
        tmp.persist(&path)
            .map_err(|e| StoreError::WriteFailed { path, source: e.error })?;

        Ok(())
    }

    /// Removes a tracked show's record from the library.
    pub fn delete(&self, id: u64) -> Result<(), StoreError> {
        let path = self.record_path(id);

        fs::remove_file(&path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                StoreError::NotFound(id)
            } else {
                StoreError::DeleteFailed { path, source: e }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::show::Episode;

    fn sample_record(id: u64, name: &str) -> ShowRecord {
        ShowRecord {
            id,
            name: name.to_string(),
            description: "A show about tests".to_string(),
            start_date: "2019-01-01".to_string(),
            end_date: String::new(),
            status: "Running".to_string(),
            episodes: vec![
                Episode {
                    season: 1,
                    episode: 1,
                    name: "Pilot".to_string(),
                    air_date: "2019-01-01".to_string(),
                    seen: true,
                },
                Episode {
                    season: 1,
                    episode: 2,
                    name: "Second".to_string(),
                    air_date: "2019-01-08".to_string(),
                    seen: false,
                },
            ],
        }
    }

    #[test]
    fn test_write_read_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = ShowStore::open(dir.path()).unwrap();
        let record = sample_record(101, "Round Trip");

        store.write(&record).unwrap();
        let read_back = store.read(101).unwrap();

        assert_eq!(read_back, record);
    }

    #[test]
    fn test_record_file_is_named_by_decimal_id() {
        let dir = tempfile::tempdir().unwrap();
        let store = ShowStore::open(dir.path()).unwrap();

        store.write(&sample_record(35624, "The Flash")).unwrap();

        assert!(dir.path().join("35624").is_file());
    }

    #[test]
    fn test_write_replaces_previous_record_completely() {
        let dir = tempfile::tempdir().unwrap();
        let store = ShowStore::open(dir.path()).unwrap();

        store.write(&sample_record(7, "Before")).unwrap();

        let mut updated = sample_record(7, "After");
        updated.episodes.truncate(1);
        store.write(&updated).unwrap();

        let read_back = store.read(7).unwrap();
        assert_eq!(read_back.name, "After");
        assert_eq!(read_back.episodes.len(), 1);
    }

    #[test]
    fn test_write_leaves_no_stray_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = ShowStore::open(dir.path()).unwrap();

        store.write(&sample_record(1, "One")).unwrap();
        store.write(&sample_record(1, "One Again")).unwrap();

        let files: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_read_missing_record_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = ShowStore::open(dir.path()).unwrap();

        match store.read(404) {
            Err(StoreError::NotFound(id)) => assert_eq!(id, 404),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_delete_removes_record_and_listing() {
        let dir = tempfile::tempdir().unwrap();
        let store = ShowStore::open(dir.path()).unwrap();

        store.write(&sample_record(1, "Keep")).unwrap();
        store.write(&sample_record(2, "Drop")).unwrap();

        store.delete(2).unwrap();

        let summaries = store.list().unwrap();
        assert_eq!(summaries.len(), 1);
        assert!(summaries.iter().all(|s| s.id != 2));
        assert!(matches!(store.read(2), Err(StoreError::NotFound(2))));
    }

    #[test]
    fn test_delete_missing_record_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = ShowStore::open(dir.path()).unwrap();

        assert!(matches!(store.delete(9), Err(StoreError::NotFound(9))));
    }

    #[test]
    fn test_list_skips_corrupt_files_but_keeps_healthy_ones() {
        let dir = tempfile::tempdir().unwrap();
        let store = ShowStore::open(dir.path()).unwrap();

        store.write(&sample_record(1, "Healthy")).unwrap();
        fs::write(dir.path().join("999"), "not json at all").unwrap();

        let summaries = store.list().unwrap();
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].id, 1);
    }

    #[test]
    fn test_list_ignores_subdirectories() {
        let dir = tempfile::tempdir().unwrap();
        let store = ShowStore::open(dir.path()).unwrap();

        store.write(&sample_record(1, "Only")).unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();

        let summaries = store.list().unwrap();
        assert_eq!(summaries.len(), 1);
    }

    #[test]
    fn test_open_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("library");

        ShowStore::open(&path).unwrap();
        let store = ShowStore::open(&path).unwrap();

        assert!(store.list().unwrap().is_empty());
    }
}
