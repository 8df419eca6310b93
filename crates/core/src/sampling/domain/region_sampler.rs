use ndarray::s;

use crate::sampling::domain::pixel_region::PixelRegion;
use crate::shared::analysis_error::AnalysisError;
use crate::shared::raster::Raster;
use crate::shared::region::Region;

/// Copies exactly `region` out of `raster`.
///
/// The rectangle must have positive size and lie fully inside the raster;
/// no clamping or padding is applied.
pub fn sample(raster: &Raster, region: Region) -> Result<PixelRegion, AnalysisError> {
    if !region.has_positive_size() || !region.fits_within(raster.width(), raster.height()) {
        return Err(AnalysisError::OutOfBoundsSample {
            region,
            width: raster.width(),
            height: raster.height(),
        });
    }

    let x = region.x as usize;
    let y = region.y as usize;
    let view = raster.as_ndarray();
    let pixels = view
        .slice(s![
            y..y + region.height as usize,
            x..x + region.width as usize,
            ..
        ])
        .to_owned();

    Ok(PixelRegion::new(region, pixels))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn gradient_raster(w: u32, h: u32) -> Raster {
        // R = column, G = row, B = 0, A = 255
        let mut data = Vec::with_capacity((w * h * 4) as usize);
        for row in 0..h {
            for col in 0..w {
                data.extend_from_slice(&[col as u8, row as u8, 0, 255]);
            }
        }
        Raster::new(data, w, h, 0)
    }

    #[test]
    fn test_sample_returns_exact_rectangle() {
        let raster = gradient_raster(10, 8);
        let sampled = sample(&raster, Region::new(2, 3, 4, 2)).unwrap();

        assert_eq!(sampled.pixels().shape(), &[2, 4, 4]);
        assert_eq!(sampled.region(), Region::new(2, 3, 4, 2));
        // top-left of the sample is raster (col=2, row=3)
        assert_eq!(sampled.pixels()[[0, 0, 0]], 2);
        assert_eq!(sampled.pixels()[[0, 0, 1]], 3);
        // bottom-right is raster (col=5, row=4)
        assert_eq!(sampled.pixels()[[1, 3, 0]], 5);
        assert_eq!(sampled.pixels()[[1, 3, 1]], 4);
    }

    #[test]
    fn test_sample_whole_raster() {
        let raster = gradient_raster(5, 5);
        let sampled = sample(&raster, Region::new(0, 0, 5, 5)).unwrap();
        assert_eq!(sampled.pixel_count(), 25);
    }

    #[rstest]
    #[case::past_right(Region::new(8, 0, 3, 3))]
    #[case::past_bottom(Region::new(0, 7, 3, 3))]
    #[case::negative_origin(Region::new(-1, 0, 3, 3))]
    #[case::above_top(Region::new(0, -30, 3, 3))]
    #[case::zero_width(Region::new(0, 0, 0, 3))]
    #[case::negative_height(Region::new(0, 0, 3, -1))]
    fn test_sample_rejects_invalid_rectangles(#[case] region: Region) {
        let raster = gradient_raster(10, 8);
        let err = sample(&raster, region).unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::OutOfBoundsSample { width: 10, height: 8, .. }
        ));
    }

    #[test]
    fn test_sample_does_not_modify_raster() {
        let raster = gradient_raster(4, 4);
        let before = raster.clone();
        let _ = sample(&raster, Region::new(1, 1, 2, 2)).unwrap();
        assert_eq!(raster, before);
    }
}
