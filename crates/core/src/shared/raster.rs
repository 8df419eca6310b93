use ndarray::ArrayView3;

pub const RGBA_CHANNELS: usize = 4;

/// A decoded image: contiguous RGBA bytes in row-major order.
///
/// Decoding and resizing happen at the imaging boundary; the domain layer
/// only reads pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct Raster {
    data: Vec<u8>,
    width: u32,
    height: u32,
    index: usize,
}

impl Raster {
    pub fn new(data: Vec<u8>, width: u32, height: u32, index: usize) -> Self {
        debug_assert_eq!(
            data.len(),
            (width as usize) * (height as usize) * RGBA_CHANNELS,
            "data length must equal width * height * 4"
        );
        Self {
            data,
            width,
            height,
            index,
        }
    }

    /// Builds a raster filled with a single RGBA color.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4], index: usize) -> Self {
        let pixels = (width as usize) * (height as usize);
        let data = rgba.iter().copied().cycle().take(pixels * RGBA_CHANNELS).collect();
        Self::new(data, width, height, index)
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Position of this raster within its batch of uploads.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Overwrites a rectangle with one color. Pixels outside the raster are skipped.
    pub fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32, rgba: [u8; 4]) {
        let x_end = x.saturating_add(width).min(self.width);
        let y_end = y.saturating_add(height).min(self.height);
        for row in y..y_end {
            for col in x..x_end {
                let offset = ((row * self.width + col) as usize) * RGBA_CHANNELS;
                self.data[offset..offset + RGBA_CHANNELS].copy_from_slice(&rgba);
            }
        }
    }

    pub fn as_ndarray(&self) -> ArrayView3<'_, u8> {
        ArrayView3::from_shape(self.shape(), &self.data)
            .expect("Raster data length must match dimensions")
    }

    fn shape(&self) -> (usize, usize, usize) {
        (self.height as usize, self.width as usize, RGBA_CHANNELS)
    }
}
