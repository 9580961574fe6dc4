// src/constants.rs

/// Dump file looked up next to the executable.
pub const SAMPLE_FILE_NAME: &str = "sampled_voltage.txt";

/// Samples combined into one moving-average / median output.
pub const FILTER_WINDOW_SIZE: usize = 10;

// Plot styling
pub const LINE_WIDTH_THIN: f32 = 1.0;
pub const LINE_WIDTH_THICK: f32 = 3.0;
pub const REFERENCE_LINE_WIDTH: f32 = 0.75;
pub const REFERENCE_LABEL_SIZE: f32 = 13.0;

/// Headroom in volts above max and below min of the median series.
pub const Y_RANGE_MARGIN_V: f64 = 0.1;

/// Max screen distance in points between a click and a line for it to count as a hit.
pub const PICK_TOLERANCE_PX: f32 = 5.0;

// Window
pub const WINDOW_TITLE: &str = "Voltage Viewer";
pub const WINDOW_SIZE: [f32; 2] = [1000.0, 600.0];
pub const WINDOW_MIN_SIZE: [f32; 2] = [500.0, 300.0];
