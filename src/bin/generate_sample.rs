//! Writes a synthetic temperature time series to `./data/sample.csv`:
//! a fixed normal point cloud swept through a moving ripple field.

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, StandardNormal};
use serde::Serialize;

const POINT_COUNT: usize = 1000;
const TIME_STEPS: usize = 50;
const TIME_MAX: f64 = 10.0;
const SEED: u64 = 42;
const OUTPUT_PATH: &str = "./data/sample.csv";

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "PascalCase")]
struct Row {
    timestamp: f64,
    x: f64,
    y: f64,
    temperature: f64,
}

/// A ripple spreading from an origin that drifts with time.
/// At the exact origin the expression is 0/0 and yields NaN; the value is
/// written out unmodified.
fn temperature_at(x: f64, y: f64, t: f64) -> f64 {
    let r2 = (x + t).powi(2) + y.powi(2);
    r2.sin() / r2
}

/// Evaluate the field over a seeded point cloud across the full time sweep.
///
/// The same 1000 x/y coordinates are reused for every timestep; output is
/// the concatenation of the 50 timestep blocks. Equal seeds yield
/// bit-identical rows.
fn generate_rows(seed: u64) -> Vec<Row> {
    let mut rng = StdRng::seed_from_u64(seed);
    let xs: Vec<f64> = (0..POINT_COUNT)
        .map(|_| StandardNormal.sample(&mut rng))
        .collect();
    let ys: Vec<f64> = (0..POINT_COUNT)
        .map(|_| StandardNormal.sample(&mut rng))
        .collect();

    let mut rows = Vec::with_capacity(POINT_COUNT * TIME_STEPS);
    for step in 0..TIME_STEPS {
        let t = TIME_MAX * step as f64 / (TIME_STEPS - 1) as f64;
        for (&x, &y) in xs.iter().zip(&ys) {
            rows.push(Row {
                timestamp: t,
                x,
                y,
                temperature: temperature_at(x, y, t),
            });
        }
    }
    rows
}

fn main() -> Result<()> {
    env_logger::init();

    let rows = generate_rows(SEED);

    let mut writer = csv::Writer::from_path(OUTPUT_PATH)
        .with_context(|| format!("creating {OUTPUT_PATH} (the data/ directory must exist)"))?;
    for row in &rows {
        writer.serialize(row).context("writing row")?;
    }
    writer.flush().context("flushing output")?;

    log::info!("Wrote {} rows to {OUTPUT_PATH}", rows.len());
    Ok(())
}
