//! Dominant-color reduction over a sampled pixel region.
//!
//! Channels are quantized to 5 bits and counted in a dense 32x32x32
//! histogram. The winning bucket is reported at its midpoint, so every
//! color in a bucket maps to the same representative.

use crate::color::domain::rgb_color::RgbColor;
use crate::color::domain::skin_tone::SkinTone;
use crate::sampling::domain::pixel_region::PixelRegion;
use crate::shared::analysis_error::AnalysisError;

const QUANT_BITS: u32 = 5;
const DROPPED_BITS: u32 = 8 - QUANT_BITS;
const LEVELS: usize = 1 << QUANT_BITS;
const BUCKET_MIDPOINT: u8 = 1 << (DROPPED_BITS - 1);

fn quantize(channel: u8) -> usize {
    (channel >> DROPPED_BITS) as usize
}

fn dequantize(level: usize) -> u8 {
    ((level as u8) << DROPPED_BITS) | BUCKET_MIDPOINT
}

/// Index layout is R-major, so ascending index order is lexicographic (R, G, B).
fn bucket_index(r: u8, g: u8, b: u8) -> usize {
    (quantize(r) * LEVELS + quantize(g)) * LEVELS + quantize(b)
}

fn bucket_color(index: usize) -> RgbColor {
    let b = index % LEVELS;
    let g = (index / LEVELS) % LEVELS;
    let r = index / (LEVELS * LEVELS);
    RgbColor::new(dequantize(r), dequantize(g), dequantize(b))
}

fn compute_histogram(region: &PixelRegion) -> (Vec<u32>, usize) {
    let mut hist = vec![0u32; LEVELS * LEVELS * LEVELS];
    let mut counted = 0usize;

    for px in region.rgba() {
        if px[3] == 0 {
            continue;
        }
        hist[bucket_index(px[0], px[1], px[2])] += 1;
        counted += 1;
    }

    (hist, counted)
}

/// Most frequent quantized color among non-transparent pixels.
///
/// Ties go to the lexicographically lowest (R, G, B) bucket.
pub fn representative_color(region: &PixelRegion) -> Result<RgbColor, AnalysisError> {
    let (hist, counted) = compute_histogram(region);
    if counted == 0 {
        return Err(AnalysisError::EmptyRegion(region.region()));
    }

    let mut best_index = 0;
    let mut best_count = 0;
    for (index, &count) in hist.iter().enumerate() {
        if count > best_count {
            best_index = index;
            best_count = count;
        }
    }

    Ok(bucket_color(best_index))
}

/// Representative color plus its coarse tone category.
pub fn categorize_skin(region: &PixelRegion) -> Result<(RgbColor, SkinTone), AnalysisError> {
    let color = representative_color(region)?;
    Ok((color, SkinTone::from_luminance(color.luminance())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampling::domain::region_sampler::sample;
    use crate::shared::raster::Raster;
    use crate::shared::region::Region;

    fn uniform_region(rgba: [u8; 4]) -> PixelRegion {
        let raster = Raster::filled(10, 10, rgba, 0);
        sample(&raster, Region::new(0, 0, 10, 10)).unwrap()
    }

    #[test]
    fn test_uniform_region_returns_bucket_midpoint() {
        // 245>>3=30 -> 244, 220>>3=27 -> 220, 200>>3=25 -> 204
        let color = representative_color(&uniform_region([245, 220, 200, 255])).unwrap();
        assert_eq!(color, RgbColor::new(244, 220, 204));
    }

    #[test]
    fn test_near_identical_colors_share_a_bucket() {
        let mut raster = Raster::filled(10, 10, [10, 10, 10, 255], 0);
        // 60 pixels split over two shades inside one bucket beat 40 of another color
        raster.fill_rect(0, 0, 10, 3, [100, 100, 100, 255]);
        raster.fill_rect(0, 3, 10, 3, [103, 101, 97, 255]);
        let region = sample(&raster, Region::new(0, 0, 10, 10)).unwrap();

        let color = representative_color(&region).unwrap();
        assert_eq!(color, RgbColor::new(100, 100, 100));
    }

    #[test]
    fn test_majority_bucket_wins() {
        let mut raster = Raster::filled(10, 10, [200, 0, 0, 255], 0);
        raster.fill_rect(0, 0, 10, 4, [0, 0, 200, 255]);
        let region = sample(&raster, Region::new(0, 0, 10, 10)).unwrap();

        assert_eq!(representative_color(&region).unwrap(), RgbColor::new(204, 4, 4));
    }

    #[test]
    fn test_tie_breaks_to_lowest_rgb() {
        let mut raster = Raster::filled(10, 10, [200, 0, 0, 255], 0);
        raster.fill_rect(0, 0, 10, 5, [0, 0, 200, 255]);
        let region = sample(&raster, Region::new(0, 0, 10, 10)).unwrap();

        // 50/50 split: (0,0,200) sorts before (200,0,0)
        assert_eq!(representative_color(&region).unwrap(), RgbColor::new(4, 4, 204));
    }

    #[test]
    fn test_transparent_pixels_are_ignored() {
        let mut raster = Raster::filled(10, 10, [0, 0, 0, 0], 0);
        raster.fill_rect(0, 0, 2, 2, [50, 150, 250, 255]);
        let region = sample(&raster, Region::new(0, 0, 10, 10)).unwrap();

        assert_eq!(representative_color(&region).unwrap(), RgbColor::new(52, 148, 252));
    }

    #[test]
    fn test_partially_transparent_pixels_count() {
        let color = representative_color(&uniform_region([16, 16, 16, 1])).unwrap();
        assert_eq!(color, RgbColor::new(20, 20, 20));
    }

    #[test]
    fn test_fully_transparent_region_is_empty() {
        let err = representative_color(&uniform_region([255, 255, 255, 0])).unwrap_err();
        assert!(matches!(err, AnalysisError::EmptyRegion(r) if r == Region::new(0, 0, 10, 10)));
    }

    #[test]
    fn test_deterministic_for_identical_input() {
        let mut raster = Raster::filled(10, 10, [30, 60, 90, 255], 0);
        raster.fill_rect(3, 3, 4, 4, [90, 60, 30, 255]);
        let region = sample(&raster, Region::new(0, 0, 10, 10)).unwrap();

        let first = representative_color(&region).unwrap();
        for _ in 0..5 {
            assert_eq!(representative_color(&region).unwrap(), first);
        }
    }

    #[test]
    fn test_categorize_skin_fair() {
        let (color, tone) = categorize_skin(&uniform_region([245, 220, 200, 255])).unwrap();
        assert_eq!(color, RgbColor::new(244, 220, 204));
        assert_eq!(tone, SkinTone::Fair);
    }

    #[test]
    fn test_categorize_skin_medium_and_dark() {
        let (_, medium) = categorize_skin(&uniform_region([180, 130, 100, 255])).unwrap();
        assert_eq!(medium, SkinTone::Medium);
        let (_, dark) = categorize_skin(&uniform_region([80, 50, 30, 255])).unwrap();
        assert_eq!(dark, SkinTone::Dark);
    }

    #[test]
    fn test_categorize_skin_propagates_empty_region() {
        assert!(matches!(
            categorize_skin(&uniform_region([0, 0, 0, 0])),
            Err(AnalysisError::EmptyRegion(_))
        ));
    }
}
