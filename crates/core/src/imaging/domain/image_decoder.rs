use crate::shared::analysis_error::CollaboratorError;
use crate::shared::raster::Raster;

/// Turns uploaded bytes into an RGBA raster at the working resolution.
pub trait ImageDecoder: Send + Sync {
    /// `index` is the upload's position in its batch and is stored on the raster.
    fn decode(&self, bytes: &[u8], index: usize) -> Result<Raster, CollaboratorError>;
}
