use ndarray::{Array3, ArrayView1, Axis};

use crate::shared::raster::RGBA_CHANNELS;
use crate::shared::region::Region;

/// Owned RGBA pixels copied out of a raster rectangle.
#[derive(Clone, Debug, PartialEq)]
pub struct PixelRegion {
    region: Region,
    /// Shape is (height, width, 4).
    pixels: Array3<u8>,
}

impl PixelRegion {
    pub fn new(region: Region, pixels: Array3<u8>) -> Self {
        debug_assert_eq!(pixels.shape()[2], RGBA_CHANNELS, "pixels must be RGBA");
        Self { region, pixels }
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn pixels(&self) -> &Array3<u8> {
        &self.pixels
    }

    pub fn pixel_count(&self) -> usize {
        self.pixels.shape()[0] * self.pixels.shape()[1]
    }

    /// Iterates pixels row by row, each as a 4-element RGBA view.
    pub fn rgba(&self) -> impl Iterator<Item = ArrayView1<'_, u8>> {
        self.pixels.lanes(Axis(2)).into_iter()
    }
}
