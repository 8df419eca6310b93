use serde::{Deserialize, Serialize};

pub const OVAL_MAX_RATIO: f64 = 0.8;
pub const SQUARE_MIN_RATIO: f64 = 1.1;
pub const ALMOND_MIN_EXCLUSIVE_RATIO: f64 = 1.5;
pub const STRAIGHT_MIN_EXCLUSIVE_RATIO: f64 = 0.7;

/// `Heart` and `Unknown` are valid record values but no ratio maps to them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FaceShape {
    Oval,
    Round,
    Square,
    Heart,
    Unknown,
}

impl FaceShape {
    /// Jaw width over forehead-to-chin height.
    pub fn from_aspect_ratio(ratio: f64) -> Self {
        if ratio > OVAL_MAX_RATIO && ratio < SQUARE_MIN_RATIO {
            FaceShape::Round
        } else if ratio <= OVAL_MAX_RATIO {
            FaceShape::Oval
        } else if ratio >= SQUARE_MIN_RATIO {
            FaceShape::Square
        } else {
            FaceShape::Unknown
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EyeShape {
    Almond,
    Round,
    Unknown,
}

impl EyeShape {
    pub fn from_aspect_ratio(ratio: f64) -> Self {
        if ratio > ALMOND_MIN_EXCLUSIVE_RATIO {
            EyeShape::Almond
        } else if ratio <= ALMOND_MIN_EXCLUSIVE_RATIO {
            EyeShape::Round
        } else {
            EyeShape::Unknown
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoseShape {
    Straight,
    Curved,
    Unknown,
}

impl NoseShape {
    pub fn from_aspect_ratio(ratio: f64) -> Self {
        if ratio > STRAIGHT_MIN_EXCLUSIVE_RATIO {
            NoseShape::Straight
        } else if ratio <= STRAIGHT_MIN_EXCLUSIVE_RATIO {
            NoseShape::Curved
        } else {
            NoseShape::Unknown
        }
    }
}
