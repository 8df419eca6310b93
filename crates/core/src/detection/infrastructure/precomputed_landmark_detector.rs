use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use thiserror::Error;

use crate::detection::domain::face_detector::{DetectionError, FaceDetector};
use crate::geometry::domain::landmark_set::LandmarkSet;
use crate::shared::raster::Raster;

#[derive(Debug, Error)]
pub enum LandmarkFileError {
    #[error("failed to read landmarks from {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid landmarks JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Replays landmark sets produced ahead of time by an external face analyzer.
///
/// Results are keyed by raster index, so the n-th upload of a batch gets the
/// n-th entry. Indices without an entry report "no face".
pub struct PrecomputedLandmarkDetector {
    cache: Arc<HashMap<usize, LandmarkSet>>,
}

impl PrecomputedLandmarkDetector {
    pub fn new(cache: Arc<HashMap<usize, LandmarkSet>>) -> Self {
        Self { cache }
    }

    /// Parses a JSON array with one entry per upload; `null` marks "no face".
    pub fn from_json_str(json: &str) -> Result<Self, LandmarkFileError> {
        let entries: Vec<Option<LandmarkSet>> = serde_json::from_str(json)?;
        let cache: HashMap<usize, LandmarkSet> = entries
            .into_iter()
            .enumerate()
            .filter_map(|(index, entry)| entry.map(|set| (index, set)))
            .collect();
        log::debug!("Loaded precomputed landmarks for {} uploads", cache.len());
        Ok(Self::new(Arc::new(cache)))
    }

    pub fn load(path: &Path) -> Result<Self, LandmarkFileError> {
        let json = fs::read_to_string(path).map_err(|source| LandmarkFileError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&json)
    }
}

impl FaceDetector for PrecomputedLandmarkDetector {
    fn detect(&self, raster: &Raster) -> Result<Option<LandmarkSet>, DetectionError> {
        Ok(self.cache.get(&raster.index()).cloned())
    }
}
