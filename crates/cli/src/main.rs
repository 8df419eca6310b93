use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;

use facestyle_core::detection::domain::detection_context::DetectionContext;
use facestyle_core::detection::domain::face_detector::FaceDetector;
use facestyle_core::detection::infrastructure::precomputed_landmark_detector::PrecomputedLandmarkDetector;
use facestyle_core::detection::infrastructure::timeout_face_detector::TimeoutFaceDetector;
use facestyle_core::imaging::infrastructure::image_crate_decoder::ImageCrateDecoder;
use facestyle_core::persistence::infrastructure::json_file_store::JsonFileStore;
use facestyle_core::pipeline::analysis_pipeline::AnalysisPipeline;
use facestyle_core::pipeline::analyze_images_use_case::{AnalyzeImagesUseCase, UploadResult};
use facestyle_core::pipeline::infrastructure::threaded_analysis_executor::ThreadedAnalysisExecutor;
use facestyle_core::pipeline::pipeline_logger::LogPipelineLogger;
use facestyle_core::recommendation::domain::recommendation_engine::RecommendationEngine;
use facestyle_core::recommendation::domain::rule_tables::RuleTables;
use facestyle_core::shared::analysis_error::AnalysisError;
use facestyle_core::shared::constants::IMAGE_EXTENSIONS;

const EXIT_GENERAL: i32 = 1;
const EXIT_USAGE: i32 = 2;
const EXIT_NO_FACE: i32 = 3;
const EXIT_GEOMETRY: i32 = 4;
const EXIT_SAMPLING: i32 = 5;
const EXIT_DETECTION: i32 = 6;
const EXIT_DECODE: i32 = 7;
const EXIT_PERSISTENCE: i32 = 8;

/// Portrait analysis: colors, face/eye/nose shapes and clothing advice.
#[derive(Parser)]
#[command(name = "facestyle")]
struct Cli {
    /// Portrait images to analyze.
    #[arg(required = true)]
    images: Vec<PathBuf>,

    /// JSON array of landmark sets, one entry (or null) per image in order.
    #[arg(long)]
    landmarks: PathBuf,

    /// JSON rule tables replacing the built-in palettes and styles.
    #[arg(long)]
    rules: Option<PathBuf>,

    /// Directory for stored records (default: the user data directory).
    #[arg(long)]
    store_dir: Option<PathBuf>,

    /// Abort detection for an image after this many milliseconds.
    #[arg(long)]
    detection_timeout_ms: Option<u64>,

    /// Analysis worker threads (default: available CPUs).
    #[arg(long)]
    workers: Option<usize>,
}

fn main() {
    env_logger::init();

    match run() {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(EXIT_USAGE);
        }
    }
}

/// Configuration errors surface as `Err`; per-image failures only pick the
/// exit code.
fn run() -> Result<i32, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    let engine = match &cli.rules {
        Some(path) => RecommendationEngine::new(RuleTables::load(path)?)?,
        None => RecommendationEngine::default(),
    };
    let context = DetectionContext::new(build_detector(&cli)?);
    let pipeline = Arc::new(AnalysisPipeline::new(context, engine));

    let executor = match cli.workers {
        Some(n) => ThreadedAnalysisExecutor::new(n),
        None => ThreadedAnalysisExecutor::with_available_parallelism(),
    };
    let store = match &cli.store_dir {
        Some(dir) => JsonFileStore::new(dir),
        None => JsonFileStore::in_default_dir()?,
    };
    log::info!("Storing records in {}", store.dir().display());

    let uploads = cli
        .images
        .iter()
        .map(std::fs::read)
        .collect::<Result<Vec<_>, _>>()?;

    let use_case = AnalyzeImagesUseCase::new(
        Box::new(ImageCrateDecoder::default()),
        pipeline,
        Box::new(executor),
        Box::new(store),
    );
    let mut logger = LogPipelineLogger::new(10);
    let results = use_case.execute(&uploads, &mut logger);

    report(&cli.images, &results)
}

fn build_detector(cli: &Cli) -> Result<Arc<dyn FaceDetector>, Box<dyn std::error::Error>> {
    let base: Arc<dyn FaceDetector> =
        Arc::new(PrecomputedLandmarkDetector::load(&cli.landmarks)?);
    match cli.detection_timeout_ms {
        Some(ms) => Ok(Arc::new(TimeoutFaceDetector::new(
            base,
            Duration::from_millis(ms),
        ))),
        None => Ok(base),
    }
}

/// Prints stored records to stdout and failures to stderr. The exit code is
/// that of the first failed image.
fn report(
    images: &[PathBuf],
    results: &[UploadResult],
) -> Result<i32, Box<dyn std::error::Error>> {
    let mut code = 0;
    for (path, result) in images.iter().zip(results) {
        match result {
            Ok(stored) => println!("{}", serde_json::to_string_pretty(stored)?),
            Err(e) => {
                eprintln!("{}: {e}", path.display());
                if code == 0 {
                    code = exit_code(e);
                }
            }
        }
    }
    Ok(code)
}

fn exit_code(error: &AnalysisError) -> i32 {
    match error {
        AnalysisError::FaceNotDetected => EXIT_NO_FACE,
        AnalysisError::DegenerateGeometry { .. } | AnalysisError::MissingLandmark(_) => {
            EXIT_GEOMETRY
        }
        AnalysisError::OutOfBoundsSample { .. } | AnalysisError::EmptyRegion(_) => EXIT_SAMPLING,
        AnalysisError::DetectionTimeout(_) | AnalysisError::DetectionFailed(_) => EXIT_DETECTION,
        AnalysisError::ImageDecode(_) => EXIT_DECODE,
        AnalysisError::Persistence(_) => EXIT_PERSISTENCE,
        AnalysisError::WorkerFailed(_) => EXIT_GENERAL,
    }
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    for image in &cli.images {
        if !image.exists() {
            return Err(format!("Input file not found: {}", image.display()).into());
        }
        if !is_image(image) {
            log::warn!(
                "{} has no known image extension, decoding anyway",
                image.display()
            );
        }
    }
    if !cli.landmarks.exists() {
        return Err(format!("Landmarks file not found: {}", cli.landmarks.display()).into());
    }
    if cli.detection_timeout_ms == Some(0) {
        return Err("Detection timeout must be at least 1 ms".into());
    }
    if cli.workers == Some(0) {
        return Err("Worker count must be at least 1".into());
    }
    Ok(())
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}
