use std::sync::Arc;

use crate::detection::domain::face_detector::{DetectionError, FaceDetector};
use crate::geometry::domain::landmark_set::LandmarkSet;
use crate::shared::raster::Raster;

/// Immutable handle to a face detector whose model was loaded once at startup.
///
/// Cloning shares the same detector; nothing in the context is mutated
/// after construction.
#[derive(Clone)]
pub struct DetectionContext {
    detector: Arc<dyn FaceDetector>,
}

impl DetectionContext {
    pub fn new(detector: Arc<dyn FaceDetector>) -> Self {
        Self { detector }
    }

    pub fn detect(&self, raster: &Raster) -> Result<Option<LandmarkSet>, DetectionError> {
        self.detector.detect(raster)
    }
}

impl std::fmt::Debug for DetectionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DetectionContext").finish_non_exhaustive()
    }
}
