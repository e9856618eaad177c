use std::collections::{BTreeMap, BTreeSet};

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: cuisine → Color32
// ---------------------------------------------------------------------------

/// Maps each distinct cuisine to a stable colour for the scatter chart.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl ColorMap {
    /// Build a colour map from the dataset's distinct cuisines.
    pub fn new(cuisines: &BTreeSet<String>) -> Self {
        let palette = generate_palette(cuisines.len());
        let mapping: BTreeMap<String, Color32> = cuisines
            .iter()
            .zip(palette)
            .map(|(cuisine, color)| (cuisine.clone(), color))
            .collect();

        ColorMap {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a cuisine; unmapped (e.g. empty) values
    /// fall back to gray.
    pub fn color_for(&self, cuisine: &str) -> Color32 {
        self.mapping
            .get(cuisine)
            .copied()
            .unwrap_or(self.default_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cuisines(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn palette_has_requested_size() {
        assert!(generate_palette(0).is_empty());
        assert_eq!(generate_palette(7).len(), 7);
    }

    #[test]
    fn mapping_is_deterministic_and_distinct() {
        let set = cuisines(&["Cafe", "Pizza", "Thai"]);
        let a = ColorMap::new(&set);
        let b = ColorMap::new(&set);
        assert_eq!(a.color_for("Thai"), b.color_for("Thai"));
        assert_ne!(a.color_for("Cafe"), a.color_for("Pizza"));
    }

    #[test]
    fn unknown_cuisine_gets_default_color() {
        let map = ColorMap::new(&cuisines(&["Cafe"]));
        assert_eq!(map.color_for(""), Color32::GRAY);
        assert_eq!(map.color_for("Sushi"), Color32::GRAY);
    }
}
