pub mod color_categorizer;
pub mod rgb_color;
pub mod skin_tone;
