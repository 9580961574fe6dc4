// ---------------------------------------------------------------------------
// Sliding-window smoothing
// ---------------------------------------------------------------------------

/// Reduce every full window of `window_size` consecutive values to one output.
///
/// Produces `values.len() - window_size + 1` outputs. Windows that would run
/// past the end are skipped (no padding), so an oversized or zero window
/// yields an empty series.
pub fn sliding_window<F>(values: &[f64], window_size: usize, reduce: F) -> Vec<f64>
where
    F: Fn(&[f64]) -> f64,
{
    if window_size == 0 || window_size > values.len() {
        return Vec::new();
    }
    values.windows(window_size).map(reduce).collect()
}

/// Arithmetic mean of each window.
pub fn moving_average(values: &[f64], window_size: usize) -> Vec<f64> {
    sliding_window(values, window_size, mean)
}

/// Median of each window; even windows use the midpoint of the two central values.
pub fn median_filter(values: &[f64], window_size: usize) -> Vec<f64> {
    sliding_window(values, window_size, median)
}

fn mean(window: &[f64]) -> f64 {
    window.iter().sum::<f64>() / window.len() as f64
}

fn median(window: &[f64]) -> f64 {
    let mut sorted = window.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

// ---------------------------------------------------------------------------
// Both filters over one signal
// ---------------------------------------------------------------------------

/// The smoothed versions of a signal that get plotted next to it.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredSignals {
    pub moving_average: Vec<f64>,
    pub median: Vec<f64>,
}

impl FilteredSignals {
    pub fn compute(values: &[f64], window_size: usize) -> Self {
        let filtered = FilteredSignals {
            moving_average: moving_average(values, window_size),
            median: median_filter(values, window_size),
        };
        log::debug!(
            "Window {window_size}: {} samples -> {} filtered values",
            values.len(),
            filtered.median.len()
        );
        filtered
    }
}
