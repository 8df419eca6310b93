use std::time::Duration;

use thiserror::Error;

use crate::geometry::domain::landmark_set::LandmarkSet;
use crate::shared::analysis_error::{AnalysisError, CollaboratorError};
use crate::shared::raster::Raster;

#[derive(Debug, Error)]
pub enum DetectionError {
    #[error("detection timed out after {0:?}")]
    Timeout(Duration),
    #[error(transparent)]
    Failed(CollaboratorError),
}

impl From<DetectionError> for AnalysisError {
    fn from(err: DetectionError) -> Self {
        match err {
            DetectionError::Timeout(after) => AnalysisError::DetectionTimeout(after),
            DetectionError::Failed(source) => AnalysisError::DetectionFailed(source),
        }
    }
}

/// Domain interface for single-face landmark detection.
///
/// `Ok(None)` means no face was found. Implementations hold read-only
/// model state and are shared across worker threads, hence `&self`.
pub trait FaceDetector: Send + Sync {
    fn detect(&self, raster: &Raster) -> Result<Option<LandmarkSet>, DetectionError>;
}
