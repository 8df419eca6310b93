use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use uuid::Uuid;

use crate::persistence::domain::record_store::{RecordStore, StoredRecord};
use crate::shared::analysis_error::CollaboratorError;
use crate::shared::constants::{DATA_DIR_NAME, RECORDS_DIR_NAME};
use crate::shared::feature_record::FeatureRecord;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to create record directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write record to {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to read record from {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("record JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("could not determine data directory")]
    NoDataDir,
}

/// Stores each record as `<id>.json` in one directory.
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store rooted at the platform data directory (`<data>/facestyle/records`).
    pub fn in_default_dir() -> Result<Self, StoreError> {
        Self::default_dir().map(Self::new)
    }

    pub fn default_dir() -> Result<PathBuf, StoreError> {
        dirs::data_dir()
            .map(|d| d.join(DATA_DIR_NAME).join(RECORDS_DIR_NAME))
            .ok_or(StoreError::NoDataDir)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn record_path(&self, id: Uuid) -> PathBuf {
        self.dir.join(format!("{id}.json"))
    }

    pub fn get(&self, id: Uuid) -> Result<StoredRecord, StoreError> {
        let path = self.record_path(id);
        let json = fs::read_to_string(&path).map_err(|source| StoreError::Read { path, source })?;
        Ok(serde_json::from_str(&json)?)
    }

    fn write(&self, stored: &StoredRecord) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir).map_err(|source| StoreError::CreateDir {
            path: self.dir.clone(),
            source,
        })?;
        let path = self.record_path(stored.id);
        let json = serde_json::to_string_pretty(stored)?;
        fs::write(&path, json).map_err(|source| StoreError::Write { path, source })
    }
}

impl RecordStore for JsonFileStore {
    fn create(&self, record: FeatureRecord) -> Result<StoredRecord, CollaboratorError> {
        let stored = StoredRecord {
            id: Uuid::new_v4(),
            record,
        };
        self.write(&stored)?;
        log::debug!("Stored record {} in {}", stored.id, self.dir.display());
        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::domain::rgb_color::RgbColor;
    use crate::color::domain::skin_tone::SkinTone;
    use crate::geometry::domain::face_shapes::{EyeShape, FaceShape, NoseShape};

    fn record() -> FeatureRecord {
        FeatureRecord {
            skin_color: SkinTone::Medium,
            eye_color: RgbColor::new(60, 40, 20),
            hair_color: RgbColor::new(20, 20, 20),
            face_shape: FaceShape::Oval,
            eye_shape: EyeShape::Round,
            nose_shape: NoseShape::Straight,
            clothing_recommendations: vec!["Button-up shirts".into()],
        }
    }

    #[test]
    fn test_create_writes_file_and_returns_record_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("records"));

        let stored = store.create(record()).unwrap();

        assert_eq!(stored.record, record());
        assert!(store.record_path(stored.id).exists());
    }

    #[test]
    fn test_get_reads_back_stored_record() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());

        let stored = store.create(record()).unwrap();

        assert_eq!(store.get(stored.id).unwrap(), stored);
    }

    #[test]
    fn test_each_create_gets_a_new_id() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());

        let a = store.create(record()).unwrap();
        let b = store.create(record()).unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 2);
    }

    #[test]
    fn test_file_is_flat_json_with_id() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        let stored = store.create(record()).unwrap();

        let json = std::fs::read_to_string(store.record_path(stored.id)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["id"], stored.id.to_string());
        assert_eq!(value["skinColor"], "medium");
        assert_eq!(value["noseShape"], "straight");
    }

    #[test]
    fn test_unwritable_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"file, not a directory").unwrap();
        let store = JsonFileStore::new(blocker.join("records"));

        assert!(store.create(record()).is_err());
    }

    #[test]
    fn test_get_unknown_id_fails() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        assert!(matches!(
            store.get(Uuid::new_v4()),
            Err(StoreError::Read { .. })
        ));
    }
}
