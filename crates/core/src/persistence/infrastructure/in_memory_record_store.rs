use std::sync::Mutex;

use uuid::Uuid;

use crate::persistence::domain::record_store::{RecordStore, StoredRecord};
use crate::shared::analysis_error::CollaboratorError;
use crate::shared::feature_record::FeatureRecord;

/// Keeps records in memory for the lifetime of the process.
#[derive(Default)]
pub struct InMemoryRecordStore {
    records: Mutex<Vec<StoredRecord>>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<StoredRecord> {
        self.records
            .lock()
            .map(|records| records.clone())
            .unwrap_or_default()
    }
}

impl RecordStore for InMemoryRecordStore {
    fn create(&self, record: FeatureRecord) -> Result<StoredRecord, CollaboratorError> {
        let stored = StoredRecord {
            id: Uuid::new_v4(),
            record,
        };
        self.records
            .lock()
            .map_err(|_| "record store lock poisoned")?
            .push(stored.clone());
        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::domain::rgb_color::RgbColor;
    use crate::color::domain::skin_tone::SkinTone;
    use crate::geometry::domain::face_shapes::{EyeShape, FaceShape, NoseShape};

    #[test]
    fn test_create_appends_in_order() {
        let store = InMemoryRecordStore::new();
        let record = FeatureRecord {
            skin_color: SkinTone::Dark,
            eye_color: RgbColor::new(0, 0, 0),
            hair_color: RgbColor::new(0, 0, 0),
            face_shape: FaceShape::Square,
            eye_shape: EyeShape::Almond,
            nose_shape: NoseShape::Curved,
            clothing_recommendations: vec![],
        };

        let first = store.create(record.clone()).unwrap();
        let second = store.create(record).unwrap();

        let records = store.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, first.id);
        assert_eq!(records[1].id, second.id);
    }
}
