use crate::color::domain::skin_tone::SkinTone;
use crate::geometry::domain::face_shapes::{EyeShape, FaceShape, NoseShape};
use crate::recommendation::domain::rule_tables::{RuleTableError, RuleTables, StyleCategory};

/// The features recommendations depend on. Eye and hair color are not used.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CategoricalFeatures {
    pub skin_tone: SkinTone,
    pub face_shape: FaceShape,
    pub eye_shape: EyeShape,
    pub nose_shape: NoseShape,
}

/// Deterministic rule engine over validated [`RuleTables`].
#[derive(Clone, Debug, PartialEq)]
pub struct RecommendationEngine {
    tables: RuleTables,
}

impl RecommendationEngine {
    pub fn new(tables: RuleTables) -> Result<Self, RuleTableError> {
        tables.validate()?;
        Ok(Self { tables })
    }

    pub fn tables(&self) -> &RuleTables {
        &self.tables
    }

    /// Builds the ordered list: palette line, face garments, eye accessories,
    /// nose styles, then two palette-colored entries per casual garment.
    pub fn recommend(&self, features: &CategoricalFeatures) -> Vec<String> {
        let palette = self.palette(features.skin_tone);
        let mut recommendations = Vec::new();

        recommendations.push(format!(
            "{}: {}",
            self.tables.palette_label,
            palette.join(", ")
        ));

        extend_from(
            &mut recommendations,
            self.tables.face_shape_garments.get(&features.face_shape),
        );
        extend_from(
            &mut recommendations,
            self.tables.eye_shape_accessories.get(&features.eye_shape),
        );
        extend_from(
            &mut recommendations,
            self.tables.nose_shape_styles.get(&features.nose_shape),
        );

        let casual = self
            .tables
            .clothing_styles
            .get(&StyleCategory::Casual)
            .map(Vec::as_slice)
            .unwrap_or_default();
        for garment in casual {
            recommendations.push(format!("{} {garment}", palette[0]));
            recommendations.push(format!("{} {garment}", palette[1]));
        }

        recommendations
    }

    fn palette(&self, tone: SkinTone) -> &[String] {
        // validate() guarantees every tone has a palette
        self.tables
            .palettes
            .get(&tone)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self {
            tables: RuleTables::default(),
        }
    }
}

fn extend_from(out: &mut Vec<String>, items: Option<&Vec<String>>) {
    if let Some(items) = items {
        out.extend(items.iter().cloned());
    }
}
