use std::sync::Arc;

use crate::pipeline::analysis_executor::{AnalysisExecutor, AnalysisResult};
use crate::pipeline::analysis_pipeline::AnalysisPipeline;
use crate::shared::raster::Raster;

/// Runs analyses one after another on the calling thread.
#[derive(Default)]
pub struct SequentialAnalysisExecutor;

impl AnalysisExecutor for SequentialAnalysisExecutor {
    fn execute(
        &self,
        pipeline: &Arc<AnalysisPipeline>,
        rasters: Vec<Raster>,
    ) -> Vec<AnalysisResult> {
        rasters.iter().map(|raster| pipeline.analyze(raster)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::analysis_pipeline::tests::{
        pipeline_with, portrait, round_almond_curved, StubDetector,
    };

    #[test]
    fn test_one_result_per_raster_in_order() {
        let pipeline = Arc::new(pipeline_with(Arc::new(StubDetector::new(Some(
            round_almond_curved(),
        )))));
        let mut broken = portrait(1);
        broken.fill_rect(0, 0, 250, 250, [0, 0, 0, 0]);

        let results = SequentialAnalysisExecutor.execute(&pipeline, vec![portrait(0), broken]);

        assert_eq!(results.len(), 2);
        assert!(results[0].is_ok());
        assert!(results[1].is_err());
    }
}
