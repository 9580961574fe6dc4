use eframe::egui::{Align2, Pos2, RichText, Ui};
use egui_plot::{
    HLine, Line, LineStyle, Plot, PlotBounds, PlotPoint, PlotPoints, PlotTransform, Text,
};

use crate::color::{reference_color, series_color};
use crate::constants::{
    PICK_TOLERANCE_PX, REFERENCE_LABEL_SIZE, REFERENCE_LINE_WIDTH, Y_RANGE_MARGIN_V,
};
use crate::data::model::{SeriesId, Trace};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Voltage plot (central panel)
// ---------------------------------------------------------------------------

/// Render the voltage-vs-time plot and handle clicks on its data lines.
pub fn voltage_plot(ui: &mut Ui, state: &mut AppState) {
    let (y_min, y_max) = state.stats.y_range(Y_RANGE_MARGIN_V);
    // A single sample would give an empty time range.
    let x_max = if state.duration_ms > 0.0 { state.duration_ms } else { 1.0 };

    let plot_response = Plot::new("voltage_plot")
        .x_axis_label("Time (ms)")
        .y_axis_label("Voltage (V)")
        .allow_boxed_zoom(false)
        .allow_double_click_reset(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.set_plot_bounds(PlotBounds::from_min_max([0.0, y_min], [x_max, y_max]));

            for trace in &state.traces {
                let points: PlotPoints = trace.points.iter().copied().collect();
                let line = Line::new(points)
                    .name(trace.id.label())
                    .color(series_color(trace.id))
                    .width(state.line_width(trace.id));
                plot_ui.line(line);
            }

            let stats = state.stats;
            let levels = [
                ("Min", stats.min, Align2::LEFT_BOTTOM),
                ("Max", stats.max, Align2::LEFT_TOP),
                ("Avg", stats.avg, Align2::LEFT_CENTER),
            ];
            for (label, level, anchor) in levels {
                plot_ui.hline(
                    HLine::new(level)
                        .color(reference_color())
                        .width(REFERENCE_LINE_WIDTH)
                        .style(LineStyle::dashed_dense()),
                );
                let text = RichText::new(format!("{label}: {level:.2}"))
                    .color(reference_color())
                    .size(REFERENCE_LABEL_SIZE);
                plot_ui.text(Text::new(PlotPoint::new(0.0, level), text).anchor(anchor));
            }
        });

    if plot_response.response.clicked() {
        if let Some(click) = plot_response.response.interact_pointer_pos() {
            let screen_lines: Vec<(SeriesId, Vec<Pos2>)> = state
                .traces
                .iter()
                .map(|trace| (trace.id, to_screen(trace, &plot_response.transform)))
                .collect();
            for id in lines_hit(click, &screen_lines, PICK_TOLERANCE_PX) {
                state.toggle_highlight(id);
            }
        }
    }
}

fn to_screen(trace: &Trace, transform: &PlotTransform) -> Vec<Pos2> {
    trace
        .points
        .iter()
        .map(|&[t, v]| transform.position_from_point(&PlotPoint::new(t, v)))
        .collect()
}

// ---------------------------------------------------------------------------
// Hit testing
// ---------------------------------------------------------------------------

/// Every line passing within `tolerance` screen points of `click`.
///
/// Overlapping lines are all reported, so a click on a shared segment
/// toggles each of them.
pub fn lines_hit(click: Pos2, lines: &[(SeriesId, Vec<Pos2>)], tolerance: f32) -> Vec<SeriesId> {
    lines
        .iter()
        .filter(|(_, points)| distance_to_polyline(click, points) <= tolerance)
        .map(|(id, _)| *id)
        .collect()
}

fn distance_to_polyline(p: Pos2, points: &[Pos2]) -> f32 {
    match points {
        [] => f32::INFINITY,
        [single] => p.distance(*single),
        _ => points
            .windows(2)
            .map(|seg| distance_to_segment(p, seg[0], seg[1]))
            .fold(f32::INFINITY, f32::min),
    }
}

fn distance_to_segment(p: Pos2, a: Pos2, b: Pos2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_sq();
    if len_sq == 0.0 {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}
