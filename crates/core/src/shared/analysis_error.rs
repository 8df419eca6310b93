use std::time::Duration;

use thiserror::Error;

use crate::geometry::domain::landmark_set::LandmarkRole;
use crate::shared::region::Region;

/// Boxed error raised by an external collaborator (decoder, store, detector).
pub type CollaboratorError = Box<dyn std::error::Error + Send + Sync>;

/// Every way a single analysis can fail.
///
/// Nothing is retried: the first failure aborts the analysis and is
/// returned whole. Collaborator errors are kept as the `source`.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Face not detected")]
    FaceNotDetected,

    #[error("sample region {region} is outside the {width}x{height} raster or empty")]
    OutOfBoundsSample {
        region: Region,
        width: u32,
        height: u32,
    },

    #[error("sample region {0} contains only fully transparent pixels")]
    EmptyRegion(Region),

    #[error("degenerate {feature} geometry: landmark span height is zero")]
    DegenerateGeometry { feature: &'static str },

    #[error("landmark set is missing required role `{0}`")]
    MissingLandmark(LandmarkRole),

    #[error("face detection timed out after {0:?}")]
    DetectionTimeout(Duration),

    #[error("face detection failed: {0}")]
    DetectionFailed(#[source] CollaboratorError),

    #[error("image decode failed: {0}")]
    ImageDecode(#[source] CollaboratorError),

    #[error("failed to persist record: {0}")]
    Persistence(#[source] CollaboratorError),

    #[error("analysis worker failed: {0}")]
    WorkerFailed(String),
}

impl AnalysisError {
    /// Short stable name of the failure kind, used in logs and by boundaries.
    pub fn kind(&self) -> &'static str {
        match self {
            AnalysisError::FaceNotDetected => "face_not_detected",
            AnalysisError::OutOfBoundsSample { .. } => "out_of_bounds_sample",
            AnalysisError::EmptyRegion(_) => "empty_region",
            AnalysisError::DegenerateGeometry { .. } => "degenerate_geometry",
            AnalysisError::MissingLandmark(_) => "missing_landmark",
            AnalysisError::DetectionTimeout(_) => "detection_timeout",
            AnalysisError::DetectionFailed(_) => "detection_failed",
            AnalysisError::ImageDecode(_) => "image_decode",
            AnalysisError::Persistence(_) => "persistence",
            AnalysisError::WorkerFailed(_) => "worker_failed",
        }
    }
}
