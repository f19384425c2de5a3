use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::Species;

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
// Color mapping: species → Color32
// ---------------------------------------------------------------------------

/// Assigns each species a distinct colour, stable across the session.
#[derive(Debug, Clone)]
pub struct SpeciesColors {
    colors: [Color32; 3],
}

impl Default for SpeciesColors {
    fn default() -> Self {
        let palette = generate_palette(Species::ALL.len());
        SpeciesColors {
            colors: [palette[0], palette[1], palette[2]],
        }
    }
}

impl SpeciesColors {
    /// Look up the colour for a species.
    pub fn color_for(&self, species: Species) -> Color32 {
        self.colors[species as usize]
    }

    /// Legend entries (species name → colour) for the UI.
    pub fn legend_entries(&self) -> Vec<(&'static str, Color32)> {
        Species::ALL
            .iter()
            .map(|&s| (s.name(), self.color_for(s)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_size_and_distinct_colors() {
        let palette = generate_palette(3);
        assert_eq!(palette.len(), 3);
        assert_ne!(palette[0], palette[1]);
        assert_ne!(palette[1], palette[2]);
    }

    #[test]
    fn every_species_gets_a_distinct_color() {
        let colors = SpeciesColors::default();
        assert_ne!(
            colors.color_for(Species::Setosa),
            colors.color_for(Species::Versicolor)
        );
        assert_ne!(
            colors.color_for(Species::Versicolor),
            colors.color_for(Species::Virginica)
        );
        assert_eq!(colors.legend_entries().len(), 3);
    }
}
