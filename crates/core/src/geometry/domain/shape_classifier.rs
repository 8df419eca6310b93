use crate::geometry::domain::face_shapes::{EyeShape, FaceShape, NoseShape};
use crate::geometry::domain::landmark_set::{LandmarkRole, LandmarkSet};
use crate::shared::analysis_error::AnalysisError;

/// Face, eye and nose shapes classified independently from one landmark set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeClassification {
    pub face: FaceShape,
    pub eye: EyeShape,
    pub nose: NoseShape,
}

/// Width-over-height ratio of the span `left..right` (x) by `top..bottom` (y).
fn span_ratio(
    landmarks: &LandmarkSet,
    feature: &'static str,
    left: LandmarkRole,
    right: LandmarkRole,
    top: LandmarkRole,
    bottom: LandmarkRole,
) -> Result<f64, AnalysisError> {
    let width = landmarks.require(right)?.x as i64 - landmarks.require(left)?.x as i64;
    let height = landmarks.require(bottom)?.y as i64 - landmarks.require(top)?.y as i64;
    if height == 0 {
        return Err(AnalysisError::DegenerateGeometry { feature });
    }
    Ok(width as f64 / height as f64)
}

pub fn face_aspect_ratio(landmarks: &LandmarkSet) -> Result<f64, AnalysisError> {
    span_ratio(
        landmarks,
        "face",
        LandmarkRole::JawLeft,
        LandmarkRole::JawRight,
        LandmarkRole::Forehead,
        LandmarkRole::JawBottom,
    )
}

pub fn eye_aspect_ratio(landmarks: &LandmarkSet) -> Result<f64, AnalysisError> {
    span_ratio(
        landmarks,
        "eye",
        LandmarkRole::RightEyeLeft,
        LandmarkRole::RightEyeRight,
        LandmarkRole::RightEyeTop,
        LandmarkRole::RightEyeBottom,
    )
}

pub fn nose_aspect_ratio(landmarks: &LandmarkSet) -> Result<f64, AnalysisError> {
    span_ratio(
        landmarks,
        "nose",
        LandmarkRole::NoseLeft,
        LandmarkRole::NoseRight,
        LandmarkRole::NoseBridge,
        LandmarkRole::NoseBottom,
    )
}

/// Classifies all three shapes; the first missing role or zero-height span aborts.
pub fn classify(landmarks: &LandmarkSet) -> Result<ShapeClassification, AnalysisError> {
    let face = FaceShape::from_aspect_ratio(face_aspect_ratio(landmarks)?);
    let eye = EyeShape::from_aspect_ratio(eye_aspect_ratio(landmarks)?);
    let nose = NoseShape::from_aspect_ratio(nose_aspect_ratio(landmarks)?);
    log::debug!("Classified shapes: face={face:?} eye={eye:?} nose={nose:?}");
    Ok(ShapeClassification { face, eye, nose })
}
