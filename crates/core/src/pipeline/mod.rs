pub mod analysis_executor;
pub mod analysis_pipeline;
pub mod analyze_images_use_case;
pub mod infrastructure;
pub mod pipeline_logger;
