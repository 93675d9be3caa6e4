use eframe::egui::{pos2, vec2, Rect, RichText, Sense, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top bar – status line
// ---------------------------------------------------------------------------

/// Render the status bar: source file, dataset counts, current frame.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        let file_name = state
            .source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| state.source.display().to_string());
        ui.label(RichText::new(file_name).strong());

        ui.separator();

        ui.label(format!(
            "{} samples, {} frames",
            state.dataset.len(),
            state.dataset.frame_count()
        ));

        ui.separator();

        ui.label(format!(
            "t = {:.3}  (frame {}/{})",
            state.current_timestamp(),
            state.frame_idx + 1,
            state.dataset.frame_count()
        ));
    });
}

// ---------------------------------------------------------------------------
// Color bar – legend for the fixed temperature scale
// ---------------------------------------------------------------------------

const STRIP_WIDTH: f32 = 24.0;
const BAND_COUNT: usize = 64;

/// Render the color bar: the gradient strip with the fixed normalization
/// range labeled at both ends, max on top.
pub fn colorbar_panel(ui: &mut Ui, state: &AppState) {
    let (min, max) = state.color_scale.range();

    ui.heading("Temperature");
    ui.separator();
    ui.label(format!("{max:.3}"));

    let strip_height = (ui.available_height() - 24.0).max(32.0);
    let (rect, _) = ui.allocate_exact_size(vec2(STRIP_WIDTH, strip_height), Sense::hover());
    let painter = ui.painter();

    let band_height = rect.height() / BAND_COUNT as f32;
    for band in 0..BAND_COUNT {
        // Hot end on top.
        let t = 1.0 - band as f32 / (BAND_COUNT - 1) as f32;
        let top = rect.top() + band as f32 * band_height;
        let band_rect = Rect::from_min_size(
            pos2(rect.left(), top),
            vec2(rect.width(), band_height + 0.5),
        );
        painter.rect_filled(band_rect, 0.0, state.color_scale.sample(t));
    }

    ui.label(format!("{min:.3}"));
}
