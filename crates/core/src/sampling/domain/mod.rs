pub mod pixel_region;
pub mod region_sampler;
