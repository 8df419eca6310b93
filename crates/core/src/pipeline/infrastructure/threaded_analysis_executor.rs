use std::sync::Arc;
use std::thread::JoinHandle;

use crate::pipeline::analysis_executor::{AnalysisExecutor, AnalysisResult};
use crate::pipeline::analysis_pipeline::AnalysisPipeline;
use crate::shared::analysis_error::AnalysisError;
use crate::shared::raster::Raster;

/// Fans analyses out to a fixed pool of worker threads.
///
/// Layout: `jobs → [worker × N] → results`, where each job carries its
/// batch position so results can be put back in input order.
pub struct ThreadedAnalysisExecutor {
    workers: usize,
}

impl ThreadedAnalysisExecutor {
    pub fn new(workers: usize) -> Self {
        Self {
            workers: workers.max(1),
        }
    }

    /// One worker per available CPU.
    pub fn with_available_parallelism() -> Self {
        let workers = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        Self::new(workers)
    }

    pub fn workers(&self) -> usize {
        self.workers
    }
}

impl Default for ThreadedAnalysisExecutor {
    fn default() -> Self {
        Self::with_available_parallelism()
    }
}

impl AnalysisExecutor for ThreadedAnalysisExecutor {
    fn execute(
        &self,
        pipeline: &Arc<AnalysisPipeline>,
        rasters: Vec<Raster>,
    ) -> Vec<AnalysisResult> {
        let total = rasters.len();
        if total == 0 {
            return Vec::new();
        }

        let (job_tx, job_rx) = crossbeam_channel::bounded::<(usize, Raster)>(total);
        let (result_tx, result_rx) = crossbeam_channel::bounded::<(usize, AnalysisResult)>(total);

        for job in rasters.into_iter().enumerate() {
            // Capacity equals batch size and the receiver is alive, so this cannot block
            let _ = job_tx.send(job);
        }
        drop(job_tx);

        let handles: Vec<JoinHandle<()>> = (0..self.workers.min(total))
            .map(|_| spawn_worker(pipeline.clone(), job_rx.clone(), result_tx.clone()))
            .collect();
        drop(result_tx);

        let mut results: Vec<Option<AnalysisResult>> = (0..total).map(|_| None).collect();
        for (position, result) in result_rx {
            results[position] = Some(result);
        }

        let panicked = join_workers(handles);
        if panicked > 0 {
            log::error!("{panicked} analysis worker(s) panicked");
        }

        results
            .into_iter()
            .map(|slot| {
                slot.unwrap_or_else(|| {
                    Err(AnalysisError::WorkerFailed(
                        "worker exited before producing a result".into(),
                    ))
                })
            })
            .collect()
    }
}

fn spawn_worker(
    pipeline: Arc<AnalysisPipeline>,
    job_rx: crossbeam_channel::Receiver<(usize, Raster)>,
    result_tx: crossbeam_channel::Sender<(usize, AnalysisResult)>,
) -> JoinHandle<()> {
    std::thread::spawn(move || {
        for (position, raster) in job_rx {
            let result = pipeline.analyze(&raster);
            if result_tx.send((position, result)).is_err() {
                break;
            }
        }
    })
}

/// Joins every worker and returns how many panicked.
fn join_workers(handles: Vec<JoinHandle<()>>) -> usize {
    handles
        .into_iter()
        .map(JoinHandle::join)
        .filter(Result::is_err)
        .count()
}
