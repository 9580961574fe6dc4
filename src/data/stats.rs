use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum StatsError {
    #[error("cannot compute voltage statistics: the median-filtered series is empty (window larger than the {0} available samples?)")]
    EmptySeries(usize),
}

/// Reference levels drawn across the plot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoltageStats {
    pub min: f64,
    pub max: f64,
    /// Midpoint of `min` and `max`, not the sample mean.
    pub avg: f64,
}

impl VoltageStats {
    /// Summarise a filtered series. `source_len` only feeds the error message.
    pub fn from_series(series: &[f64], source_len: usize) -> Result<Self, StatsError> {
        if series.is_empty() {
            return Err(StatsError::EmptySeries(source_len));
        }
        let min = series.iter().copied().fold(f64::INFINITY, f64::min);
        let max = series.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Ok(VoltageStats {
            min,
            max,
            avg: (min + max) / 2.0,
        })
    }

    /// Vertical plot range with `margin` volts of headroom on both sides.
    pub fn y_range(&self, margin: f64) -> (f64, f64) {
        (self.min - margin, self.max + margin)
    }
}
