use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::color::ColorScale;
use crate::data::model::HeatDataset;

/// How long each animation frame stays on screen.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(200);

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full viewer state, independent of rendering.
///
/// Playback is one index into the pre-computed frame sequence plus the
/// instant of the last advance; the dataset and color scale are read-only
/// after construction.
pub struct AppState {
    /// Loaded dataset with frame indices and fixed axis bounds.
    pub dataset: HeatDataset,

    /// Fixed temperature → color mapping over the whole dataset.
    pub color_scale: ColorScale,

    /// Path the dataset was loaded from, for the status bar.
    pub source: PathBuf,

    /// Index of the frame currently on screen.
    pub frame_idx: usize,

    last_advance: Instant,
}

impl AppState {
    /// Wrap a loaded dataset, deriving the color scale from its temperatures.
    pub fn new(dataset: HeatDataset, source: PathBuf) -> Self {
        let color_scale = ColorScale::from_values(dataset.samples.iter().map(|s| s.temperature));
        Self {
            dataset,
            color_scale,
            source,
            frame_idx: 0,
            last_advance: Instant::now(),
        }
    }

    /// Timestamp of the frame currently on screen.
    pub fn current_timestamp(&self) -> f64 {
        self.dataset.timestamps[self.frame_idx]
    }

    /// Step to the next frame, wrapping at the end of the sequence.
    pub fn advance_frame(&mut self) {
        self.frame_idx = (self.frame_idx + 1) % self.dataset.frame_count();
    }

    /// Advance if the frame interval has elapsed since the last advance.
    pub fn advance_if_due(&mut self) {
        if self.last_advance.elapsed() >= FRAME_INTERVAL {
            self.advance_frame();
            self.last_advance = Instant::now();
        }
    }

    /// Time remaining until the next frame is due.
    pub fn time_until_next_frame(&self) -> Duration {
        FRAME_INTERVAL.saturating_sub(self.last_advance.elapsed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Sample;

    fn state_with_timestamps(timestamps: &[f64]) -> AppState {
        let samples = timestamps
            .iter()
            .map(|&t| Sample {
                timestamp: t,
                x: 0.0,
                y: 0.0,
                temperature: 0.0,
            })
            .collect();
        AppState::new(HeatDataset::from_samples(samples), PathBuf::from("test.csv"))
    }

    #[test]
    fn frames_advance_in_order_and_wrap() {
        let mut state = state_with_timestamps(&[0.0, 1.0, 2.0]);

        assert_eq!(state.current_timestamp(), 0.0);
        state.advance_frame();
        assert_eq!(state.current_timestamp(), 1.0);
        state.advance_frame();
        assert_eq!(state.current_timestamp(), 2.0);
        state.advance_frame();
        assert_eq!(state.current_timestamp(), 0.0);
    }

    #[test]
    fn color_scale_covers_the_whole_dataset() {
        let state = state_with_timestamps(&[0.0, 1.0]);
        // All temperatures are 0.0 → degenerate but well-defined range.
        assert_eq!(state.color_scale.range(), (0.0, 0.0));
    }
}
