use std::sync::Arc;
use std::time::Instant;

use crate::imaging::domain::image_decoder::ImageDecoder;
use crate::persistence::domain::record_store::{RecordStore, StoredRecord};
use crate::pipeline::analysis_executor::AnalysisExecutor;
use crate::pipeline::analysis_pipeline::AnalysisPipeline;
use crate::pipeline::pipeline_logger::PipelineLogger;
use crate::shared::analysis_error::AnalysisError;
use crate::shared::raster::Raster;

pub type UploadResult = Result<StoredRecord, AnalysisError>;

/// Upload batch pipeline: decode → analyze → persist.
///
/// Every upload gets its own result in input order. A failure at any stage
/// only affects that upload, and failed uploads are never persisted.
pub struct AnalyzeImagesUseCase {
    decoder: Box<dyn ImageDecoder>,
    pipeline: Arc<AnalysisPipeline>,
    executor: Box<dyn AnalysisExecutor>,
    store: Box<dyn RecordStore>,
}

impl AnalyzeImagesUseCase {
    pub fn new(
        decoder: Box<dyn ImageDecoder>,
        pipeline: Arc<AnalysisPipeline>,
        executor: Box<dyn AnalysisExecutor>,
        store: Box<dyn RecordStore>,
    ) -> Self {
        Self {
            decoder,
            pipeline,
            executor,
            store,
        }
    }

    /// Analyzes a single upload.
    pub fn execute_one(&self, upload: &[u8], logger: &mut dyn PipelineLogger) -> UploadResult {
        let mut results = self.execute(&[upload], logger);
        results.pop().unwrap_or_else(|| {
            Err(AnalysisError::WorkerFailed("no result for upload".into()))
        })
    }

    pub fn execute<B: AsRef<[u8]>>(
        &self,
        uploads: &[B],
        logger: &mut dyn PipelineLogger,
    ) -> Vec<UploadResult> {
        let total = uploads.len();
        logger.info(&format!("Analyzing {total} upload(s)"));

        let t0 = Instant::now();
        let mut slots: Vec<Option<UploadResult>> = (0..total).map(|_| None).collect();
        let mut rasters: Vec<Raster> = Vec::with_capacity(total);
        for (index, upload) in uploads.iter().enumerate() {
            match self.decoder.decode(upload.as_ref(), index) {
                Ok(raster) => rasters.push(raster),
                Err(e) => {
                    log::warn!("Upload {index} could not be decoded: {e}");
                    slots[index] = Some(Err(AnalysisError::ImageDecode(e)));
                }
            }
        }
        logger.timing("decode", elapsed_ms(t0));

        let positions: Vec<usize> = rasters.iter().map(Raster::index).collect();
        let t0 = Instant::now();
        let analyzed = self.executor.execute(&self.pipeline, rasters);
        logger.timing("analyze", elapsed_ms(t0));

        let t0 = Instant::now();
        for (index, result) in positions.into_iter().zip(analyzed) {
            slots[index] = Some(result.and_then(|record| {
                self.store.create(record).map_err(AnalysisError::Persistence)
            }));
        }
        logger.timing("persist", elapsed_ms(t0));

        let results: Vec<UploadResult> = slots
            .into_iter()
            .map(|slot| {
                slot.unwrap_or_else(|| {
                    Err(AnalysisError::WorkerFailed("upload was never analyzed".into()))
                })
            })
            .collect();

        for (index, result) in results.iter().enumerate() {
            match result {
                Ok(stored) => log::debug!("Upload {index} stored as {}", stored.id),
                Err(e) => log::warn!("Upload {index} failed ({}): {e}", e.kind()),
            }
            logger.progress(index + 1, total);
        }

        let failed = results.iter().filter(|r| r.is_err()).count();
        logger.metric("failed_uploads", failed as f64);
        logger.summary();

        results
    }
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}
