use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Rainbow gradient
// ---------------------------------------------------------------------------

const LUT_SIZE: usize = 256;

/// Jet-style rainbow: blue at 0 through cyan/green/yellow to red at 1,
/// realized as an HSL hue sweep.
fn rainbow(t: f32) -> Color32 {
    let hue = 240.0 * (1.0 - t);
    let hsl = Hsl::new(hue, 1.0, 0.5);
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

// ---------------------------------------------------------------------------
// Color scale: temperature → Color32 under a fixed normalization
// ---------------------------------------------------------------------------

/// Maps temperatures onto the rainbow gradient through a fixed `[min, max]`
/// normalization so the color scale is stable across animation frames.
#[derive(Debug, Clone)]
pub struct ColorScale {
    min: f64,
    max: f64,
    lut: Vec<Color32>,
    fallback: Color32,
}

impl ColorScale {
    /// Build a scale spanning the min/max of the given values.
    ///
    /// Non-finite values are excluded from the fold, so a NaN or infinite
    /// temperature cannot stretch the normalization; such values later map
    /// to the fallback color instead.
    pub fn from_values(values: impl Iterator<Item = f64>) -> Self {
        let (min, max) = values
            .filter(|v| v.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            });

        let lut = (0..LUT_SIZE)
            .map(|i| rainbow(i as f32 / (LUT_SIZE - 1) as f32))
            .collect();

        ColorScale {
            min,
            max,
            lut,
            fallback: Color32::GRAY,
        }
    }

    /// The fixed normalization range.
    pub fn range(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    /// Map a temperature into `[0, 1]` under the fixed range.
    /// A degenerate range (single value, or no finite input at all)
    /// normalizes everything to the midpoint.
    fn normalize(&self, value: f64) -> f64 {
        if self.max > self.min {
            ((value - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
        } else {
            0.5
        }
    }

    /// LUT slot for a temperature, or `None` for non-finite values.
    pub fn lut_index(&self, value: f64) -> Option<usize> {
        if !value.is_finite() {
            return None;
        }
        Some((self.normalize(value) * (LUT_SIZE - 1) as f64).round() as usize)
    }

    /// The color stored in a LUT slot.
    pub fn lut_color(&self, index: usize) -> Color32 {
        self.lut[index]
    }

    /// Look up the color for a temperature value.
    pub fn color_for(&self, value: f64) -> Color32 {
        match self.lut_index(value) {
            Some(i) => self.lut[i],
            None => self.fallback,
        }
    }

    /// Sample the gradient at `t` in `[0, 1]`, for drawing the color bar.
    pub fn sample(&self, t: f32) -> Color32 {
        let i = (t.clamp(0.0, 1.0) * (LUT_SIZE - 1) as f32).round() as usize;
        self.lut[i]
    }

    /// The color drawn for values outside the numeric domain.
    pub fn fallback_color(&self) -> Color32 {
        self.fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_spans_min_and_max_of_input() {
        let scale = ColorScale::from_values([0.7, 0.5, 0.6].into_iter());
        assert_eq!(scale.range(), (0.5, 0.7));
    }

    #[test]
    fn non_finite_values_do_not_stretch_the_range() {
        let scale =
            ColorScale::from_values([0.5, f64::NAN, 0.7, f64::INFINITY, f64::NEG_INFINITY].into_iter());
        assert_eq!(scale.range(), (0.5, 0.7));
    }

    #[test]
    fn cold_end_is_blue_and_hot_end_is_red() {
        let scale = ColorScale::from_values([0.0, 1.0].into_iter());

        let cold = scale.color_for(0.0);
        assert!(cold.b() > cold.r());

        let hot = scale.color_for(1.0);
        assert!(hot.r() > hot.b());
    }

    #[test]
    fn non_finite_temperature_maps_to_fallback() {
        let scale = ColorScale::from_values([0.0, 1.0].into_iter());
        assert_eq!(scale.color_for(f64::NAN), scale.fallback_color());
        assert_eq!(scale.color_for(f64::INFINITY), scale.fallback_color());
    }

    #[test]
    fn out_of_range_values_clamp_to_the_ends() {
        let scale = ColorScale::from_values([0.0, 1.0].into_iter());
        assert_eq!(scale.color_for(-5.0), scale.color_for(0.0));
        assert_eq!(scale.color_for(5.0), scale.color_for(1.0));
    }

    #[test]
    fn degenerate_range_does_not_panic() {
        let scale = ColorScale::from_values([0.25, 0.25].into_iter());
        let _ = scale.color_for(0.25);

        let empty = ColorScale::from_values(std::iter::empty());
        let _ = empty.color_for(0.0);
    }
}
