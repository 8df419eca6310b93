use serde::{Deserialize, Serialize};

/// Luminance at or above which skin is `Fair`.
pub const FAIR_MIN_LUMINANCE: f64 = 180.0;
/// Luminance at or above which skin is `Medium` (below `FAIR_MIN_LUMINANCE`).
pub const MEDIUM_MIN_LUMINANCE: f64 = 100.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkinTone {
    Fair,
    Medium,
    Dark,
}

impl SkinTone {
    pub const ALL: &[SkinTone] = &[SkinTone::Fair, SkinTone::Medium, SkinTone::Dark];

    pub fn from_luminance(luminance: f64) -> Self {
        if luminance >= FAIR_MIN_LUMINANCE {
            SkinTone::Fair
        } else if luminance >= MEDIUM_MIN_LUMINANCE {
            SkinTone::Medium
        } else {
            SkinTone::Dark
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SkinTone::Fair => "fair",
            SkinTone::Medium => "medium",
            SkinTone::Dark => "dark",
        }
    }
}

impl std::fmt::Display for SkinTone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
