use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::Quadrant;

// ---------------------------------------------------------------------------
// Quadrant colors
// ---------------------------------------------------------------------------

/// Marker/label color of a quadrant. Exhaustive over the closed enum, so an
/// unmapped quadrant cannot exist past compilation.
pub fn quadrant_color(quadrant: Quadrant) -> Color32 {
    match quadrant {
        Quadrant::Dilution => Color32::from_rgb(0xE7, 0x4C, 0x3C),
        Quadrant::Maintenance => Color32::from_rgb(0xF3, 0x9C, 0x12),
        Quadrant::PurchaseOption => Color32::from_rgb(0x34, 0x98, 0xDB),
        Quadrant::EquityGain => Color32::from_rgb(0x27, 0xAE, 0x60),
    }
}

/// Translucent fill for a quadrant's background band on the chart.
pub fn band_fill(quadrant: Quadrant) -> Color32 {
    let c = quadrant_color(quadrant);
    Color32::from_rgba_unmultiplied(c.r(), c.g(), c.b(), 26)
}

/// Pale tint for the quadrant cell in the detail table, derived by lifting
/// the base color's lightness rather than keeping a second hardcoded table.
pub fn row_tint(quadrant: Quadrant) -> Color32 {
    lighten(quadrant_color(quadrant), 0.92)
}

fn lighten(color: Color32, lightness: f32) -> Color32 {
    let srgb = Srgb::new(
        color.r() as f32 / 255.0,
        color.g() as f32 / 255.0,
        color.b() as f32 / 255.0,
    );
    let mut hsl: Hsl = srgb.into_color();
    hsl.lightness = lightness;
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quadrant_colors_are_distinct() {
        let colors: Vec<Color32> = Quadrant::ALL.into_iter().map(quadrant_color).collect();
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn band_fill_keeps_hue_and_adds_transparency() {
        for q in Quadrant::ALL {
            let base = quadrant_color(q);
            let fill = band_fill(q);
            assert_eq!((fill.r(), fill.g(), fill.b()), (base.r(), base.g(), base.b()));
            assert!(fill.a() < 255);
        }
    }

    #[test]
    fn row_tint_is_pale() {
        for q in Quadrant::ALL {
            let tint = row_tint(q);
            // A high-lightness tint has every channel well above mid-gray.
            assert!(tint.r() > 180 && tint.g() > 180 && tint.b() > 180, "{q:?}: {tint:?}");
        }
    }
}
