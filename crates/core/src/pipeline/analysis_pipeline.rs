use crate::color::domain::color_categorizer::{categorize_skin, representative_color};
use crate::detection::domain::detection_context::DetectionContext;
use crate::geometry::domain::landmark_set::{LandmarkRole, LandmarkSet};
use crate::geometry::domain::shape_classifier::classify;
use crate::recommendation::domain::recommendation_engine::{
    CategoricalFeatures, RecommendationEngine,
};
use crate::sampling::domain::region_sampler::sample;
use crate::shared::analysis_error::AnalysisError;
use crate::shared::constants::{
    EYE_SAMPLE_SIZE, HAIR_SAMPLE_OFFSET_Y, HAIR_SAMPLE_SIZE, SKIN_SAMPLE_REGION,
};
use crate::shared::feature_record::FeatureRecord;
use crate::shared::raster::Raster;
use crate::shared::region::Region;

/// Where the pipeline samples skin, eye and hair color.
///
/// Eye and hair squares are anchored at the `leftEyeLeft` landmark; the hair
/// square is shifted vertically by `hair_offset_y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SamplingLayout {
    pub skin: Region,
    pub eye_size: i32,
    pub hair_size: i32,
    pub hair_offset_y: i32,
}

impl SamplingLayout {
    pub fn eye_region(&self, anchor_x: i32, anchor_y: i32) -> Region {
        Region::new(anchor_x, anchor_y, self.eye_size, self.eye_size)
    }

    pub fn hair_region(&self, anchor_x: i32, anchor_y: i32) -> Region {
        Region::new(anchor_x, anchor_y, self.hair_size, self.hair_size)
            .translated(0, self.hair_offset_y)
    }
}

impl Default for SamplingLayout {
    fn default() -> Self {
        Self {
            skin: SKIN_SAMPLE_REGION,
            eye_size: EYE_SAMPLE_SIZE,
            hair_size: HAIR_SAMPLE_SIZE,
            hair_offset_y: HAIR_SAMPLE_OFFSET_Y,
        }
    }
}

/// Detect → sample → classify → recommend, producing one [`FeatureRecord`].
///
/// Holds only immutable state, so one pipeline can serve any number of
/// concurrent analyses.
pub struct AnalysisPipeline {
    context: DetectionContext,
    engine: RecommendationEngine,
    layout: SamplingLayout,
}

impl AnalysisPipeline {
    pub fn new(context: DetectionContext, engine: RecommendationEngine) -> Self {
        Self {
            context,
            engine,
            layout: SamplingLayout::default(),
        }
    }

    pub fn with_layout(mut self, layout: SamplingLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn layout(&self) -> &SamplingLayout {
        &self.layout
    }

    /// Runs detection, then [`Self::analyze_landmarks`]. No face means no record.
    pub fn analyze(&self, raster: &Raster) -> Result<FeatureRecord, AnalysisError> {
        let landmarks = self
            .context
            .detect(raster)?
            .ok_or(AnalysisError::FaceNotDetected)?;
        self.analyze_landmarks(raster, &landmarks)
    }

    pub fn analyze_landmarks(
        &self,
        raster: &Raster,
        landmarks: &LandmarkSet,
    ) -> Result<FeatureRecord, AnalysisError> {
        let (skin_rgb, skin_color) = categorize_skin(&sample(raster, self.layout.skin)?)?;

        let anchor = landmarks.require(LandmarkRole::LeftEyeLeft)?;
        let eye_region = self.layout.eye_region(anchor.x, anchor.y);
        let eye_color = representative_color(&sample(raster, eye_region)?)?;
        let hair_region = self.layout.hair_region(anchor.x, anchor.y);
        let hair_color = representative_color(&sample(raster, hair_region)?)?;

        let shapes = classify(landmarks)?;

        let clothing_recommendations = self.engine.recommend(&CategoricalFeatures {
            skin_tone: skin_color,
            face_shape: shapes.face,
            eye_shape: shapes.eye,
            nose_shape: shapes.nose,
        });

        log::debug!(
            "Analyzed raster {}: skin {skin_rgb} ({skin_color}), eye {eye_color}, hair {hair_color}",
            raster.index()
        );

        Ok(FeatureRecord {
            skin_color,
            eye_color,
            hair_color,
            face_shape: shapes.face,
            eye_shape: shapes.eye,
            nose_shape: shapes.nose,
            clothing_recommendations,
        })
    }
}
