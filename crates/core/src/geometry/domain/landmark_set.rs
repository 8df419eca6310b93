//! Named facial landmarks as delivered by a face detector.

use serde::{Deserialize, Serialize};

use crate::shared::analysis_error::AnalysisError;

/// Semantic role of a landmark point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LandmarkRole {
    JawLeft,
    JawRight,
    JawBottom,
    Forehead,
    /// Outer corner of the left eye; anchors eye and hair sampling.
    LeftEyeLeft,
    RightEyeLeft,
    RightEyeRight,
    RightEyeTop,
    RightEyeBottom,
    NoseLeft,
    NoseRight,
    NoseBridge,
    NoseBottom,
}

impl LandmarkRole {
    pub const ALL: &[LandmarkRole] = &[
        LandmarkRole::JawLeft,
        LandmarkRole::JawRight,
        LandmarkRole::JawBottom,
        LandmarkRole::Forehead,
        LandmarkRole::LeftEyeLeft,
        LandmarkRole::RightEyeLeft,
        LandmarkRole::RightEyeRight,
        LandmarkRole::RightEyeTop,
        LandmarkRole::RightEyeBottom,
        LandmarkRole::NoseLeft,
        LandmarkRole::NoseRight,
        LandmarkRole::NoseBridge,
        LandmarkRole::NoseBottom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LandmarkRole::JawLeft => "jawLeft",
            LandmarkRole::JawRight => "jawRight",
            LandmarkRole::JawBottom => "jawBottom",
            LandmarkRole::Forehead => "forehead",
            LandmarkRole::LeftEyeLeft => "leftEyeLeft",
            LandmarkRole::RightEyeLeft => "rightEyeLeft",
            LandmarkRole::RightEyeRight => "rightEyeRight",
            LandmarkRole::RightEyeTop => "rightEyeTop",
            LandmarkRole::RightEyeBottom => "rightEyeBottom",
            LandmarkRole::NoseLeft => "noseLeft",
            LandmarkRole::NoseRight => "noseRight",
            LandmarkRole::NoseBridge => "noseBridge",
            LandmarkRole::NoseBottom => "noseBottom",
        }
    }
}

impl std::fmt::Display for LandmarkRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Landmark {
    pub role: LandmarkRole,
    pub x: i32,
    pub y: i32,
}

impl Landmark {
    pub fn new(role: LandmarkRole, x: i32, y: i32) -> Self {
        Self { role, x, y }
    }
}

/// Ordered landmark points for one detected face.
///
/// Serialized as a plain JSON array of `{ "role", "x", "y" }` objects.
/// If a role appears more than once, the first occurrence wins.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LandmarkSet {
    points: Vec<Landmark>,
}

impl LandmarkSet {
    pub fn new(points: Vec<Landmark>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Landmark] {
        &self.points
    }

    pub fn get(&self, role: LandmarkRole) -> Option<&Landmark> {
        self.points.iter().find(|p| p.role == role)
    }

    /// Looks up a role the caller cannot proceed without.
    pub fn require(&self, role: LandmarkRole) -> Result<&Landmark, AnalysisError> {
        self.get(role).ok_or(AnalysisError::MissingLandmark(role))
    }
}

impl FromIterator<Landmark> for LandmarkSet {
    fn from_iter<I: IntoIterator<Item = Landmark>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_returns_first_match() {
        let set = LandmarkSet::new(vec![
            Landmark::new(LandmarkRole::NoseLeft, 1, 2),
            Landmark::new(LandmarkRole::NoseLeft, 9, 9),
        ]);
        assert_eq!(set.get(LandmarkRole::NoseLeft).unwrap().x, 1);
    }

    #[test]
    fn test_require_missing_role() {
        let set = LandmarkSet::default();
        let err = set.require(LandmarkRole::Forehead).unwrap_err();
        assert!(matches!(err, AnalysisError::MissingLandmark(LandmarkRole::Forehead)));
    }

    #[test]
    fn test_preserves_order() {
        let set: LandmarkSet = [
            Landmark::new(LandmarkRole::JawRight, 0, 0),
            Landmark::new(LandmarkRole::JawLeft, 0, 0),
        ]
        .into_iter()
        .collect();
        assert_eq!(set.points()[0].role, LandmarkRole::JawRight);
        assert_eq!(set.points()[1].role, LandmarkRole::JawLeft);
    }

    #[test]
    fn test_deserializes_from_json_array() {
        let json = r#"[
            {"role": "jawLeft", "x": 10, "y": 120},
            {"role": "rightEyeBottom", "x": 160, "y": 105}
        ]"#;
        let set: LandmarkSet = serde_json::from_str(json).unwrap();
        assert_eq!(set.points().len(), 2);
        assert_eq!(
            set.get(LandmarkRole::RightEyeBottom),
            Some(&Landmark::new(LandmarkRole::RightEyeBottom, 160, 105))
        );
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        let json = r#"[{"role": "chin", "x": 1, "y": 1}]"#;
        assert!(serde_json::from_str::<LandmarkSet>(json).is_err());
    }

    #[test]
    fn test_role_display_matches_serde_name() {
        for role in LandmarkRole::ALL {
            let json = serde_json::to_string(role).unwrap();
            assert_eq!(json, format!("\"{role}\""));
        }
    }
}
