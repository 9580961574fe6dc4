use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::constants::{LINE_WIDTH_THICK, LINE_WIDTH_THIN};
use crate::data::filter::FilteredSignals;
use crate::data::model::{timestamps_ms, SampleSet, SeriesId, Trace};
use crate::data::stats::{StatsError, VoltageStats};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Everything the viewer draws, plus the per-line highlight flags.
pub struct AppState {
    /// File the samples came from (shown in the top bar).
    pub source: PathBuf,

    pub sampling_frequency_hz: u32,

    /// Number of original samples.
    pub sample_count: usize,

    /// Original, moving-average and median lines in drawing order.
    pub traces: Vec<Trace>,

    /// Reference levels from the median series.
    pub stats: VoltageStats,

    /// Time of the last original sample, in ms.
    pub duration_ms: f64,

    /// Whether each data line is drawn thick.
    highlighted: BTreeMap<SeriesId, bool>,
}

impl AppState {
    /// Lay the signals out on the time axis and compute the reference levels.
    ///
    /// Fails when the median series is empty, i.e. the filter window was
    /// larger than the number of samples.
    pub fn new(
        source: PathBuf,
        samples: &SampleSet,
        filtered: &FilteredSignals,
    ) -> Result<Self, StatsError> {
        let stats = VoltageStats::from_series(&filtered.median, samples.len())?;

        let timestamps = timestamps_ms(samples.sampling_frequency_hz, samples.len());
        let traces = vec![
            Trace::new(SeriesId::Original, &timestamps, &samples.values),
            Trace::new(SeriesId::MovingAverage, &timestamps, &filtered.moving_average),
            Trace::new(SeriesId::Median, &timestamps, &filtered.median),
        ];

        Ok(Self {
            source,
            sampling_frequency_hz: samples.sampling_frequency_hz,
            sample_count: samples.len(),
            traces,
            stats,
            duration_ms: timestamps.last().copied().unwrap_or(0.0),
            highlighted: SeriesId::ALL.iter().map(|&id| (id, false)).collect(),
        })
    }

    /// Plot subtitle: sampling rate and number of original samples.
    pub fn subtitle(&self) -> String {
        format!(
            "Discretization: {}Hz | Data Points: {}",
            self.sampling_frequency_hz, self.sample_count
        )
    }

    pub fn is_highlighted(&self, id: SeriesId) -> bool {
        self.highlighted.get(&id).copied().unwrap_or(false)
    }

    /// Flip a line between thin and thick.
    pub fn toggle_highlight(&mut self, id: SeriesId) {
        let flag = self.highlighted.entry(id).or_insert(false);
        *flag = !*flag;
        log::debug!("{id} highlighted: {flag}");
    }

    /// Stroke width for a line given its highlight flag.
    pub fn line_width(&self, id: SeriesId) -> f32 {
        if self.is_highlighted(id) {
            LINE_WIDTH_THICK
        } else {
            LINE_WIDTH_THIN
        }
    }
}
