use image::imageops::FilterType;

use crate::imaging::domain::image_decoder::ImageDecoder;
use crate::shared::analysis_error::CollaboratorError;
use crate::shared::constants::WORKING_SIZE;
use crate::shared::raster::Raster;

/// Decodes any format the `image` crate supports and stretches it to a fixed
/// square working size, ignoring aspect ratio.
pub struct ImageCrateDecoder {
    width: u32,
    height: u32,
}

impl ImageCrateDecoder {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for ImageCrateDecoder {
    fn default() -> Self {
        Self::new(WORKING_SIZE, WORKING_SIZE)
    }
}

impl ImageDecoder for ImageCrateDecoder {
    fn decode(&self, bytes: &[u8], index: usize) -> Result<Raster, CollaboratorError> {
        let img = image::load_from_memory(bytes)?;
        log::debug!(
            "Decoded upload {index}: {}x{} -> {}x{}",
            img.width(),
            img.height(),
            self.width,
            self.height
        );
        let rgba = img
            .resize_exact(self.width, self.height, FilterType::Triangle)
            .to_rgba8();
        Ok(Raster::new(rgba.into_raw(), self.width, self.height, index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn encode_png(width: u32, height: u32, rgba: [u8; 4]) -> Vec<u8> {
        let img = image::RgbaImage::from_pixel(width, height, image::Rgba(rgba));
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn test_decode_resizes_to_working_size() {
        let bytes = encode_png(640, 480, [10, 20, 30, 255]);
        let raster = ImageCrateDecoder::default().decode(&bytes, 3).unwrap();

        assert_eq!(raster.width(), WORKING_SIZE);
        assert_eq!(raster.height(), WORKING_SIZE);
        assert_eq!(raster.index(), 3);
        assert_eq!(raster.data().len(), (WORKING_SIZE * WORKING_SIZE * 4) as usize);
    }

    #[test]
    fn test_uniform_color_survives_resize() {
        let bytes = encode_png(100, 60, [50, 100, 200, 255]);
        let raster = ImageCrateDecoder::new(20, 20).decode(&bytes, 0).unwrap();
        assert_eq!(&raster.data()[..4], &[50, 100, 200, 255]);
    }

    #[test]
    fn test_alpha_channel_is_kept() {
        let bytes = encode_png(8, 8, [1, 2, 3, 0]);
        let raster = ImageCrateDecoder::new(8, 8).decode(&bytes, 0).unwrap();
        assert_eq!(raster.data()[3], 0);
    }

    #[test]
    fn test_garbage_bytes_fail() {
        assert!(ImageCrateDecoder::default()
            .decode(b"definitely not an image", 0)
            .is_err());
    }
}
