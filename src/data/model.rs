use serde::Deserialize;

// ---------------------------------------------------------------------------
// Sample – one row of the time series
// ---------------------------------------------------------------------------

/// A single spatial temperature sample (one CSV row).
///
/// Field order matches the column order of the file:
/// timestamp, x, y, temperature.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Sample {
    pub timestamp: f64,
    pub x: f64,
    pub y: f64,
    pub temperature: f64,
}

// ---------------------------------------------------------------------------
// HeatDataset – the complete loaded time series
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed frame indices and bounds.
///
/// Records sharing an exact float-equal timestamp form one animation frame.
/// Exact `==` grouping only behaves well when timestamps come from a small
/// exact rational sequence (as the bundled generator's sweep does); computed
/// timestamps may split into spurious one-record frames, and a NaN timestamp
/// yields a frame that matches nothing.
#[derive(Debug, Clone)]
pub struct HeatDataset {
    /// All samples (rows), in file order.
    pub samples: Vec<Sample>,
    /// Distinct timestamp values, strictly ascending.
    pub timestamps: Vec<f64>,
    /// Per timestamp, indices of exactly the samples with that timestamp.
    frames: Vec<Vec<usize>>,
    /// Whole-dataset x range, fixed across frames.
    pub x_bounds: (f64, f64),
    /// Whole-dataset y range, fixed across frames.
    pub y_bounds: (f64, f64),
}

impl HeatDataset {
    /// Build frame indices and bounds from the loaded samples.
    pub fn from_samples(samples: Vec<Sample>) -> Self {
        let mut timestamps: Vec<f64> = samples.iter().map(|s| s.timestamp).collect();
        timestamps.sort_by(f64::total_cmp);
        timestamps.dedup();

        let frames: Vec<Vec<usize>> = timestamps
            .iter()
            .map(|&t| {
                samples
                    .iter()
                    .enumerate()
                    .filter(|(_, s)| s.timestamp == t)
                    .map(|(i, _)| i)
                    .collect()
            })
            .collect();

        let x_bounds = finite_bounds(samples.iter().map(|s| s.x));
        let y_bounds = finite_bounds(samples.iter().map(|s| s.y));

        HeatDataset {
            samples,
            timestamps,
            frames,
            x_bounds,
            y_bounds,
        }
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Number of animation frames.
    pub fn frame_count(&self) -> usize {
        self.timestamps.len()
    }

    /// The samples belonging to the given frame.
    pub fn frame(&self, idx: usize) -> impl Iterator<Item = &Sample> + '_ {
        self.frames[idx].iter().map(move |&i| &self.samples[i])
    }
}

/// Min/max over the finite values of the iterator.
///
/// Non-finite entries are skipped so a single NaN coordinate cannot poison
/// the viewport. Yields `(inf, -inf)` when nothing is finite.
fn finite_bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        })
}
