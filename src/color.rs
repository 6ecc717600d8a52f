use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::ui::json_view::TokenKind;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues,
/// starting at `hue_offset` degrees.
pub fn generate_palette(n: usize, hue_offset: f32, lightness: f32) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (hue_offset + (i as f32 / n as f32) * 360.0) % 360.0;
            let hsl = Hsl::new(hue, 0.75, lightness);
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
// JSON syntax colours: token kind → Color32
// ---------------------------------------------------------------------------

/// Colours for the JSON view, tuned for either a dark or light background.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JsonTheme {
    pub key: Color32,
    pub string: Color32,
    pub number: Color32,
    pub literal: Color32,
    pub punctuation: Color32,
}

impl JsonTheme {
    pub fn new(dark_mode: bool) -> Self {
        // Darker shades on a light background, lighter on a dark one.
        let lightness = if dark_mode { 0.68 } else { 0.38 };
        let hues = generate_palette(4, 210.0, lightness);
        JsonTheme {
            key: hues[0],
            string: hues[1],
            number: hues[2],
            literal: hues[3],
            punctuation: if dark_mode {
                Color32::LIGHT_GRAY
            } else {
                Color32::DARK_GRAY
            },
        }
    }

    pub fn color_for(&self, kind: TokenKind) -> Color32 {
        match kind {
            TokenKind::Key => self.key,
            TokenKind::String => self.string,
            TokenKind::Number => self.number,
            TokenKind::Literal => self.literal,
            TokenKind::Punctuation | TokenKind::Whitespace => self.punctuation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_size_and_distinct_entries() {
        let colors = generate_palette(4, 210.0, 0.5);
        assert_eq!(colors.len(), 4);
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert!(generate_palette(0, 0.0, 0.5).is_empty());
    }

    #[test]
    fn themes_differ_between_modes() {
        let dark = JsonTheme::new(true);
        let light = JsonTheme::new(false);
        assert_ne!(dark.key, light.key);
        assert_eq!(dark.color_for(TokenKind::Key), dark.key);
    }
}
