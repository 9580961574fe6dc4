use std::fmt;

// ---------------------------------------------------------------------------
// SampleSet – the parsed contents of one voltage dump
// ---------------------------------------------------------------------------

/// Voltage samples read from a sensor debug dump, in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSet {
    /// Samples per second, taken from the first header line.
    pub sampling_frequency_hz: u32,
    /// Sample count the firmware claimed to print (second header line).
    /// Taken as written, so a bogus negative count is just a mismatch.
    pub expected_count: i64,
    /// Voltage values in volts.
    pub values: Vec<f64>,
}

impl SampleSet {
    /// Number of samples actually parsed.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no samples were parsed.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// `(expected, actual)` when the declared count disagrees with the data.
    pub fn count_mismatch(&self) -> Option<(i64, usize)> {
        let actual = self.values.len();
        let matches = usize::try_from(self.expected_count).is_ok_and(|expected| expected == actual);
        (!matches).then_some((self.expected_count, actual))
    }
}

// ---------------------------------------------------------------------------
// SeriesId – which of the plotted data lines
// ---------------------------------------------------------------------------

/// Identifies one of the three data lines drawn on the plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SeriesId {
    Original,
    MovingAverage,
    Median,
}

impl SeriesId {
    /// All series, in drawing order.
    pub const ALL: [SeriesId; 3] = [SeriesId::Original, SeriesId::MovingAverage, SeriesId::Median];

    /// Legend label.
    pub fn label(self) -> &'static str {
        match self {
            SeriesId::Original => "Original Data",
            SeriesId::MovingAverage => "Moving Average",
            SeriesId::Median => "Median Filter",
        }
    }
}

impl fmt::Display for SeriesId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Trace – a series placed on the time axis
// ---------------------------------------------------------------------------

/// One data line as `[time_ms, volts]` points.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    pub id: SeriesId,
    pub points: Vec<[f64; 2]>,
}

impl Trace {
    /// Pair `values` with the first `values.len()` timestamps.
    ///
    /// Filtered series are shorter than the source and therefore start at
    /// `t = 0` rather than at the centre of their first window.
    pub fn new(id: SeriesId, timestamps: &[f64], values: &[f64]) -> Self {
        let points = timestamps
            .iter()
            .zip(values.iter())
            .map(|(&t, &v)| [t, v])
            .collect();
        Trace { id, points }
    }
}

/// Timestamp in milliseconds of each of the first `len` samples.
pub fn timestamps_ms(sampling_frequency_hz: u32, len: usize) -> Vec<f64> {
    let period = 1000.0 / sampling_frequency_hz as f64;
    (0..len).map(|i| i as f64 * period).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_set(expected: i64, values: Vec<f64>) -> SampleSet {
        SampleSet {
            sampling_frequency_hz: 1000,
            expected_count: expected,
            values,
        }
    }

    #[test]
    fn timestamps_follow_sampling_period() {
        assert_eq!(timestamps_ms(1000, 5), vec![0.0, 1.0, 2.0, 3.0, 4.0]);
        assert_eq!(timestamps_ms(25_000, 3), vec![0.0, 0.04, 0.08]);
        assert!(timestamps_ms(1000, 0).is_empty());
    }

    #[test]
    fn trace_truncates_to_series_length() {
        let t = timestamps_ms(1000, 5);
        let trace = Trace::new(SeriesId::Median, &t, &[2.0, 3.0, 4.0]);
        assert_eq!(trace.points, vec![[0.0, 2.0], [1.0, 3.0], [2.0, 4.0]]);
    }

    #[test]
    fn count_mismatch_reports_both_counts() {
        assert_eq!(sample_set(5, vec![1.0; 5]).count_mismatch(), None);
        assert_eq!(sample_set(10, vec![1.0; 5]).count_mismatch(), Some((10, 5)));
        assert_eq!(sample_set(-5, vec![1.0; 5]).count_mismatch(), Some((-5, 5)));
    }

    #[test]
    fn series_labels_match_legend() {
        assert_eq!(SeriesId::Original.to_string(), "Original Data");
        assert_eq!(SeriesId::MovingAverage.label(), "Moving Average");
        assert_eq!(SeriesId::Median.label(), "Median Filter");
    }
}
