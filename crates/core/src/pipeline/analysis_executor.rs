use std::sync::Arc;

use crate::pipeline::analysis_pipeline::AnalysisPipeline;
use crate::shared::analysis_error::AnalysisError;
use crate::shared::feature_record::FeatureRecord;
use crate::shared::raster::Raster;

pub type AnalysisResult = Result<FeatureRecord, AnalysisError>;

/// Abstracts how a batch of independent analyses is scheduled.
///
/// Results come back in the same order as `rasters`, one per raster,
/// regardless of how the work was distributed.
pub trait AnalysisExecutor: Send + Sync {
    fn execute(
        &self,
        pipeline: &Arc<AnalysisPipeline>,
        rasters: Vec<Raster>,
    ) -> Vec<AnalysisResult>;
}
