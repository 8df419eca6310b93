use serde::{Deserialize, Serialize};

use crate::color::domain::rgb_color::RgbColor;
use crate::color::domain::skin_tone::SkinTone;
use crate::geometry::domain::face_shapes::{EyeShape, FaceShape, NoseShape};

/// The categorical feature set produced by one analysis.
///
/// Field names serialize in camelCase (`skinColor`, `clothingRecommendations`, ...).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureRecord {
    pub skin_color: SkinTone,
    pub eye_color: RgbColor,
    pub hair_color: RgbColor,
    pub face_shape: FaceShape,
    pub eye_shape: EyeShape,
    pub nose_shape: NoseShape,
    pub clothing_recommendations: Vec<String>,
}
