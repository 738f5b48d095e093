//! Pixel geometry of the line chart, independent of the canvas API.

/// Left gutter reserved for y tick labels.
pub const Y_AXIS_WIDTH: f64 = 64.0;
pub const PADDING: f64 = 10.0;
/// Fraction of the value range added above and below the data.
pub const VALUE_MARGIN: f64 = 0.05;
pub const TARGET_TICKS: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub min_value: f64,
    pub max_value: f64,
    pub count: usize,
}

impl ChartLayout {
    /// The y range hugs the data (it does not start at zero).
    pub fn new(width: f64, height: f64, values: &[f64]) -> Self {
        let (lo, hi) = values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
        let (min_value, max_value) = if values.is_empty() {
            (0.0, 1.0)
        } else if hi > lo {
            let margin = (hi - lo) * VALUE_MARGIN;
            (lo - margin, hi + margin)
        } else {
            let margin = (lo.abs() * VALUE_MARGIN).max(1.0);
            (lo - margin, hi + margin)
        };
        Self { width, height, min_value, max_value, count: values.len() }
    }

    pub fn left(&self) -> f64 {
        Y_AXIS_WIDTH
    }

    pub fn right(&self) -> f64 {
        (self.width - PADDING).max(self.left())
    }

    pub fn top(&self) -> f64 {
        PADDING
    }

    pub fn bottom(&self) -> f64 {
        (self.height - PADDING).max(self.top())
    }

    pub fn x_at(&self, index: usize) -> f64 {
        if self.count <= 1 {
            return (self.left() + self.right()) / 2.0;
        }
        let step = (self.right() - self.left()) / (self.count - 1) as f64;
        self.left() + step * index as f64
    }

    pub fn y_at(&self, value: f64) -> f64 {
        let ratio = (value - self.min_value) / (self.max_value - self.min_value);
        self.bottom() - ratio * (self.bottom() - self.top())
    }

    /// Index of the point closest to the pointer, whether or not the
    /// pointer touches it.
    pub fn nearest_index(&self, values: &[f64], x: f64, y: f64) -> Option<usize> {
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| {
                let dx = self.x_at(i) - x;
                let dy = self.y_at(v) - y;
                (i, dx * dx + dy * dy)
            })
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(i, _)| i)
    }

    /// Evenly spaced "nice" tick values (steps of 1, 2 or 5 × 10^n) inside
    /// the value range.
    pub fn y_ticks(&self) -> Vec<f64> {
        let range = self.max_value - self.min_value;
        if range.is_nan() || range <= 0.0 {
            return Vec::new();
        }
        let raw_step = range / (TARGET_TICKS - 1) as f64;
        let exponent = raw_step.log10().floor();
        let magnitude = 10f64.powf(exponent);
        let step = match raw_step / magnitude {
            f if f <= 1.0 => magnitude,
            f if f <= 2.0 => 2.0 * magnitude,
            f if f <= 5.0 => 5.0 * magnitude,
            _ => 10.0 * magnitude,
        };
        let decimals = (-exponent).max(0.0) as i32;
        let scale = 10f64.powi(decimals);

        let mut ticks = Vec::new();
        let mut k = (self.min_value / step).ceil();
        while k * step <= self.max_value {
            ticks.push((k * step * scale).round() / scale);
            k += 1.0;
        }
        ticks
    }
}
