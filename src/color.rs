use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::SeriesId;

// ---------------------------------------------------------------------------
// Series colours
// ---------------------------------------------------------------------------

/// Convert an HSL triple (hue in degrees) to an egui colour.
pub fn hsl_color(hue: f32, saturation: f32, lightness: f32) -> Color32 {
    let rgb: Srgb = Hsl::new(hue, saturation, lightness).into_color();
    Color32::from_rgb(
        (rgb.red * 255.0).round() as u8,
        (rgb.green * 255.0).round() as u8,
        (rgb.blue * 255.0).round() as u8,
    )
}

/// Colour of each data line: blue original, green moving average, red median.
pub fn series_color(id: SeriesId) -> Color32 {
    match id {
        SeriesId::Original => hsl_color(240.0, 1.0, 0.5),
        SeriesId::MovingAverage => hsl_color(120.0, 1.0, 0.25),
        SeriesId::Median => hsl_color(0.0, 1.0, 0.5),
    }
}

/// Key entries (label → colour) for the data lines, in drawing order.
pub fn legend_entries() -> Vec<(&'static str, Color32)> {
    SeriesId::ALL
        .iter()
        .map(|&id| (id.label(), series_color(id)))
        .collect()
}

/// Min / max / avg reference lines share the median's colour.
pub fn reference_color() -> Color32 {
    series_color(SeriesId::Median)
}
