use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};

use super::model::{HeatDataset, Sample};

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Load a temperature time series from a CSV file.
///
/// Layout: one header line (skipped, any naming accepted), then rows of four
/// floats in the order timestamp, x, y, temperature.
pub fn load_csv(path: &Path) -> Result<HeatDataset> {
    let reader =
        csv::Reader::from_path(path).with_context(|| format!("opening {}", path.display()))?;
    let samples =
        read_samples(reader).with_context(|| format!("parsing {}", path.display()))?;

    if samples.is_empty() {
        bail!("{}: no data rows", path.display());
    }

    Ok(HeatDataset::from_samples(samples))
}

/// Decode every record positionally into a [`Sample`].
///
/// The reader itself rejects rows whose column count differs from the
/// header's; non-numeric fields fail deserialization. Either error aborts
/// the load with the offending row number.
fn read_samples<R: Read>(mut reader: csv::Reader<R>) -> Result<Vec<Sample>> {
    let mut samples = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        let sample: Sample = record
            .deserialize(None)
            .with_context(|| format!("CSV row {row_no}"))?;
        samples.push(sample);
    }

    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    fn read_str(data: &str) -> Result<Vec<Sample>> {
        read_samples(csv::Reader::from_reader(data.as_bytes()))
    }

    #[test]
    fn parses_header_then_four_numeric_columns() {
        let samples = read_str(
            "Timestamp,X,Y,Temperature\n0,1.0,2.0,0.5\n0,3.0,4.0,0.7\n1,1.0,2.0,0.6\n",
        )
        .unwrap();

        assert_eq!(samples.len(), 3);
        assert_eq!(samples[0].timestamp, 0.0);
        assert_eq!(samples[0].x, 1.0);
        assert_eq!(samples[0].y, 2.0);
        assert_eq!(samples[0].temperature, 0.5);
        assert_eq!(samples[2].timestamp, 1.0);
        assert_eq!(samples[2].temperature, 0.6);
    }

    #[test]
    fn header_names_are_ignored() {
        let samples = read_str("t,a,b,temp\n2.5,0.1,0.2,0.3\n").unwrap();

        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].timestamp, 2.5);
        assert_eq!(samples[0].temperature, 0.3);
    }

    #[test]
    fn rejects_non_numeric_field() {
        let err = read_str("Timestamp,X,Y,Temperature\n0,1.0,oops,0.5\n");
        assert!(err.is_err());
    }

    #[test]
    fn rejects_wrong_column_count() {
        let err = read_str("Timestamp,X,Y,Temperature\n0,1.0,2.0\n");
        assert!(err.is_err());
    }

    #[test]
    fn written_rows_round_trip_through_the_reader() {
        // Mirrors the generator's output format, header included.
        #[derive(Serialize)]
        #[serde(rename_all = "PascalCase")]
        struct Row {
            timestamp: f64,
            x: f64,
            y: f64,
            temperature: f64,
        }

        let rows = [
            Row { timestamp: 0.0, x: -1.5, y: 0.25, temperature: 0.125 },
            Row { timestamp: 0.0, x: 2.0, y: -0.5, temperature: -0.75 },
            Row { timestamp: 10.0, x: 2.0, y: -0.5, temperature: f64::NAN },
        ];

        let mut writer = csv::Writer::from_writer(Vec::new());
        for row in &rows {
            writer.serialize(row).unwrap();
        }
        let bytes = writer.into_inner().unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.starts_with("Timestamp,X,Y,Temperature\n"));

        let samples = read_str(&text).unwrap();
        assert_eq!(samples.len(), rows.len());
        for (sample, row) in samples.iter().zip(&rows) {
            assert_eq!(sample.timestamp, row.timestamp);
            assert_eq!(sample.x, row.x);
            assert_eq!(sample.y, row.y);
            assert_eq!(
                sample.temperature.to_bits(),
                row.temperature.to_bits(),
                "NaN must survive the round trip"
            );
        }
    }

    #[test]
    fn missing_file_propagates_io_error() {
        let err = load_csv(Path::new("/nonexistent/heatviz-test.csv"));
        assert!(err.is_err());
    }
}
