use std::sync::Arc;
use std::time::Duration;

use crate::detection::domain::face_detector::{DetectionError, FaceDetector};
use crate::geometry::domain::landmark_set::LandmarkSet;
use crate::shared::raster::Raster;

/// Bounds a detector call with a caller-supplied deadline.
///
/// Each call runs the wrapped detector on its own thread. When the deadline
/// passes first, the call fails with [`DetectionError::Timeout`] and the
/// late result is dropped.
pub struct TimeoutFaceDetector {
    inner: Arc<dyn FaceDetector>,
    timeout: Duration,
}

impl TimeoutFaceDetector {
    pub fn new(inner: Arc<dyn FaceDetector>, timeout: Duration) -> Self {
        Self { inner, timeout }
    }
}

impl FaceDetector for TimeoutFaceDetector {
    fn detect(&self, raster: &Raster) -> Result<Option<LandmarkSet>, DetectionError> {
        let (result_tx, result_rx) = crossbeam_channel::bounded(1);
        let inner = self.inner.clone();
        let raster = raster.clone();

        std::thread::spawn(move || {
            // Receiver may be gone after a timeout
            let _ = result_tx.send(inner.detect(&raster));
        });

        match result_rx.recv_timeout(self.timeout) {
            Ok(result) => result,
            Err(crossbeam_channel::RecvTimeoutError::Timeout) => {
                log::warn!("Face detection exceeded {:?}", self.timeout);
                Err(DetectionError::Timeout(self.timeout))
            }
            Err(crossbeam_channel::RecvTimeoutError::Disconnected) => Err(DetectionError::Failed(
                "detector thread exited without a result".into(),
            )),
        }
    }
}
