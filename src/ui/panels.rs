use eframe::egui::{self, RichText, Ui};

use crate::color::legend_entries;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Plot title, acquisition summary, line key and source file.
pub fn title_bar(ui: &mut Ui, state: &AppState) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading("Voltage vs Time");
        ui.label(state.subtitle());
    });
    // Fixed key, not clickable.
    ui.horizontal(|ui: &mut Ui| {
        for (label, color) in legend_entries() {
            ui.label(RichText::new(label).color(color).strong());
            ui.add_space(12.0);
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui: &mut Ui| {
            ui.label(RichText::new(state.source.display().to_string()).weak().small());
        });
    });
}
