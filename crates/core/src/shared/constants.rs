use crate::shared::region::Region;

/// Side length every upload is resized to before sampling.
pub const WORKING_SIZE: u32 = 250;

/// Central face area used for skin tone.
pub const SKIN_SAMPLE_REGION: Region = Region {
    x: 50,
    y: 50,
    width: 150,
    height: 150,
};

/// Square sampled at the left-eye anchor for eye color.
pub const EYE_SAMPLE_SIZE: i32 = 20;

/// Square sampled above the left-eye anchor for hair color.
pub const HAIR_SAMPLE_SIZE: i32 = 20;
pub const HAIR_SAMPLE_OFFSET_Y: i32 = -30;

pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "tiff", "tif", "webp"];

pub const DATA_DIR_NAME: &str = "facestyle";
pub const RECORDS_DIR_NAME: &str = "records";
