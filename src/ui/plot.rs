use std::collections::BTreeMap;

use eframe::egui::Ui;
use egui_plot::{MarkerShape, Plot, Points};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Temperature scatter (central panel)
// ---------------------------------------------------------------------------

const POINT_RADIUS: f32 = 2.5;

/// Render the current frame's samples as a color-mapped scatter.
///
/// Only the records whose timestamp equals the current frame's value are
/// drawn; earlier frames do not accumulate. Points sharing a quantized color
/// are batched into one `Points` item, so a frame costs at most one item per
/// LUT slot rather than one per sample.
pub fn temperature_plot(ui: &mut Ui, state: &AppState) {
    let dataset = &state.dataset;
    let scale = &state.color_scale;

    let mut buckets: BTreeMap<usize, Vec<[f64; 2]>> = BTreeMap::new();
    let mut unmapped: Vec<[f64; 2]> = Vec::new();

    for sample in dataset.frame(state.frame_idx) {
        match scale.lut_index(sample.temperature) {
            Some(slot) => buckets.entry(slot).or_default().push([sample.x, sample.y]),
            None => unmapped.push([sample.x, sample.y]),
        }
    }

    let (x_lo, x_hi) = dataset.x_bounds;
    let (y_lo, y_hi) = dataset.y_bounds;

    // Whole-dataset bounds keep the viewport identical for every frame,
    // whatever subset is visible.
    Plot::new("temperature_plot")
        .x_axis_label("X")
        .y_axis_label("Y")
        .include_x(x_lo)
        .include_x(x_hi)
        .include_y(y_lo)
        .include_y(y_hi)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (slot, positions) in buckets {
                let points = Points::new(positions)
                    .color(scale.lut_color(slot))
                    .radius(POINT_RADIUS)
                    .shape(MarkerShape::Circle);
                plot_ui.points(points);
            }

            if !unmapped.is_empty() {
                let points = Points::new(unmapped)
                    .color(scale.fallback_color())
                    .radius(POINT_RADIUS)
                    .shape(MarkerShape::Circle);
                plot_ui.points(points);
            }
        });
}
