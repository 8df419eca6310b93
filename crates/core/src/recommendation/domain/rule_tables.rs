//! Rule tables driving clothing recommendations.
//!
//! Plain data keyed by category. The built-in defaults can be replaced
//! wholesale or per field from a JSON document; omitted fields keep their
//! defaults.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::domain::skin_tone::SkinTone;
use crate::geometry::domain::face_shapes::{EyeShape, FaceShape, NoseShape};

#[derive(Debug, Error)]
pub enum RuleTableError {
    #[error("failed to read rule tables from {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid rule tables JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("no palette defined for skin tone `{0}`")]
    MissingPalette(SkinTone),
    #[error("palette for `{tone}` needs at least 2 colors, got {len}")]
    PaletteTooSmall { tone: SkinTone, len: usize },
    #[error("no `casual` clothing style defined")]
    MissingCasualStyle,
}

/// Colors per palette consumed by the casual-garment step.
pub const MIN_PALETTE_COLORS: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleCategory {
    Casual,
    Formal,
    Sporty,
    Trendy,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleTables {
    pub palette_label: String,
    pub palettes: BTreeMap<SkinTone, Vec<String>>,
    pub face_shape_garments: BTreeMap<FaceShape, Vec<String>>,
    pub eye_shape_accessories: BTreeMap<EyeShape, Vec<String>>,
    pub nose_shape_styles: BTreeMap<NoseShape, Vec<String>>,
    /// Only `casual` feeds recommendations; the other styles are carried as data.
    pub clothing_styles: BTreeMap<StyleCategory, Vec<String>>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for RuleTables {
    fn default() -> Self {
        Self {
            palette_label: "Recommended Colors".to_string(),
            palettes: BTreeMap::from([
                (
                    SkinTone::Fair,
                    strings(&["#F0E68C", "#FFB6C1", "#ADD8E6", "#FF69B4", "#E6E6FA"]),
                ),
                (
                    SkinTone::Medium,
                    strings(&["#FFD700", "#FF6347", "#4682B4", "#DAA520", "#DDA0DD"]),
                ),
                (
                    SkinTone::Dark,
                    strings(&["#8B4513", "#B22222", "#556B2F", "#8B008B", "#483D8B"]),
                ),
            ]),
            face_shape_garments: BTreeMap::from([
                (FaceShape::Oval, strings(&["Round neck T-shirts", "V-neck dresses"])),
                (FaceShape::Round, strings(&["Boat neck tops", "A-line dresses"])),
                (FaceShape::Square, strings(&["Scoop neck tops", "Off-shoulder dresses"])),
                (FaceShape::Heart, strings(&["V-neck tops", "Peplum dresses"])),
            ]),
            eye_shape_accessories: BTreeMap::from([
                (EyeShape::Almond, strings(&["Cat-eye sunglasses", "Halter neck tops"])),
                (EyeShape::Round, strings(&["Aviator sunglasses", "Sweetheart neck tops"])),
            ]),
            nose_shape_styles: BTreeMap::from([
                (NoseShape::Straight, strings(&["Button-up shirts", "Structured jackets"])),
                (NoseShape::Curved, strings(&["Flowy blouses", "Loose cardigans"])),
            ]),
            clothing_styles: BTreeMap::from([
                (
                    StyleCategory::Casual,
                    strings(&["T-shirt", "Jeans", "Sweatshirt", "Shorts"]),
                ),
                (
                    StyleCategory::Formal,
                    strings(&["Suit", "Blazer", "Dress Shirt", "Dress Pants"]),
                ),
                (
                    StyleCategory::Sporty,
                    strings(&["Tracksuit", "Gym Shorts", "Sports Bra", "Running Shoes"]),
                ),
                (
                    StyleCategory::Trendy,
                    strings(&["Crop Top", "Ripped Jeans", "Leather Jacket", "Sneakers"]),
                ),
            ]),
        }
    }
}

impl RuleTables {
    pub fn from_json_str(json: &str) -> Result<Self, RuleTableError> {
        let tables: RuleTables = serde_json::from_str(json)?;
        tables.validate()?;
        Ok(tables)
    }

    pub fn load(path: &Path) -> Result<Self, RuleTableError> {
        let json = fs::read_to_string(path).map_err(|source| RuleTableError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Every skin tone needs a palette wide enough for the casual step.
    pub fn validate(&self) -> Result<(), RuleTableError> {
        for &tone in SkinTone::ALL {
            let palette = self
                .palettes
                .get(&tone)
                .ok_or(RuleTableError::MissingPalette(tone))?;
            if palette.len() < MIN_PALETTE_COLORS {
                return Err(RuleTableError::PaletteTooSmall {
                    tone,
                    len: palette.len(),
                });
            }
        }
        if !self.clothing_styles.contains_key(&StyleCategory::Casual) {
            return Err(RuleTableError::MissingCasualStyle);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        RuleTables::default().validate().unwrap();
    }

    #[test]
    fn test_default_fair_palette_order() {
        let tables = RuleTables::default();
        assert_eq!(
            tables.palettes[&SkinTone::Fair],
            vec!["#F0E68C", "#FFB6C1", "#ADD8E6", "#FF69B4", "#E6E6FA"]
        );
    }

    #[test]
    fn test_partial_json_keeps_other_defaults() {
        let json = r##"{ "palettes": {
            "fair": ["#111111", "#222222"],
            "medium": ["#333333", "#444444"],
            "dark": ["#555555", "#666666"]
        } }"##;
        let tables = RuleTables::from_json_str(json).unwrap();
        assert_eq!(tables.palettes[&SkinTone::Dark], vec!["#555555", "#666666"]);
        assert_eq!(
            tables.face_shape_garments,
            RuleTables::default().face_shape_garments
        );
        assert_eq!(tables.palette_label, "Recommended Colors");
    }

    #[test]
    fn test_missing_palette_is_rejected() {
        let json = r##"{ "palettes": { "fair": ["#111111", "#222222"] } }"##;
        assert!(matches!(
            RuleTables::from_json_str(json),
            Err(RuleTableError::MissingPalette(SkinTone::Medium))
        ));
    }

    #[test]
    fn test_short_palette_is_rejected() {
        let mut tables = RuleTables::default();
        tables.palettes.insert(SkinTone::Dark, vec!["#000000".into()]);
        assert!(matches!(
            tables.validate(),
            Err(RuleTableError::PaletteTooSmall { tone: SkinTone::Dark, len: 1 })
        ));
    }

    #[test]
    fn test_missing_casual_style_is_rejected() {
        let mut tables = RuleTables::default();
        tables.clothing_styles.remove(&StyleCategory::Casual);
        assert!(matches!(
            tables.validate(),
            Err(RuleTableError::MissingCasualStyle)
        ));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        assert!(matches!(
            RuleTables::from_json_str("{ not json"),
            Err(RuleTableError::Parse(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rules.json");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, r#"{{ "palette_label": "Colors" }}"#).unwrap();

        let tables = RuleTables::load(&path).unwrap();
        assert_eq!(tables.palette_label, "Colors");
    }

    #[test]
    fn test_load_missing_file_names_path() {
        let err = RuleTables::load(Path::new("/nonexistent/rules.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/rules.json"));
    }

    #[test]
    fn test_json_roundtrip_of_defaults() {
        let json = serde_json::to_string(&RuleTables::default()).unwrap();
        assert_eq!(RuleTables::from_json_str(&json).unwrap(), RuleTables::default());
    }
}
