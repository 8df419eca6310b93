pub mod analysis_error;
pub mod constants;
pub mod feature_record;
pub mod raster;
pub mod region;
