use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::analysis_error::CollaboratorError;
use crate::shared::feature_record::FeatureRecord;

/// A feature record as returned by the store, with its assigned id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredRecord {
    pub id: Uuid,
    #[serde(flatten)]
    pub record: FeatureRecord,
}

/// Persistence port: stores one record and returns it with an id.
pub trait RecordStore: Send + Sync {
    fn create(&self, record: FeatureRecord) -> Result<StoredRecord, CollaboratorError>;
}
