use std::path::Path;

use anyhow::{Context, Result};
use thiserror::Error;

use super::model::SampleSet;

/// Separator between a header label and its value, e.g. `Samples: 1024`.
const HEADER_SEPARATOR: &str = ": ";

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("missing header line {line} ({name})")]
    MissingHeader { line: usize, name: &'static str },
    #[error("line {line}: expected '<label>: <integer>', got '{text}'")]
    MissingSeparator { line: usize, text: String },
    #[error("line {line}: '{value}' is not a valid {name}")]
    InvalidInteger {
        line: usize,
        name: &'static str,
        value: String,
    },
    #[error("sampling frequency must be greater than zero")]
    ZeroSamplingFrequency,
    #[error("line {line}: '{token}' is not a number")]
    InvalidSample { line: usize, token: String },
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a voltage dump from disk.
///
/// The whole file is read (and closed) before parsing starts.
pub fn load_file(path: &Path) -> Result<SampleSet> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading sample file {}", path.display()))?;
    let samples =
        parse_str(&text).with_context(|| format!("parsing sample file {}", path.display()))?;

    if samples.is_empty() {
        log::warn!("{} contains headers but no samples", path.display());
    }
    log::info!(
        "Loaded {} samples at {} Hz from {}",
        samples.len(),
        samples.sampling_frequency_hz,
        path.display()
    );
    Ok(samples)
}

/// Parse the textual dump format:
///
/// ```text
/// Sampling Frequency: 25000
/// Samples: 1024
/// 1.6512 1.7023 1.7640 ...
/// 1.8811 1.9320 ...
/// ```
///
/// A declared sample count that disagrees with the data only logs a warning.
pub fn parse_str(text: &str) -> Result<SampleSet, ParseError> {
    let mut lines = text.lines();

    let sampling_frequency_hz = header_value(lines.next(), 1, "sampling frequency")?;
    let expected_count = header_value(lines.next(), 2, "sample count")?;

    let sampling_frequency_hz =
        u32::try_from(sampling_frequency_hz).map_err(|_| ParseError::InvalidInteger {
            line: 1,
            name: "sampling frequency",
            value: sampling_frequency_hz.to_string(),
        })?;
    if sampling_frequency_hz == 0 {
        return Err(ParseError::ZeroSamplingFrequency);
    }

    let mut values = Vec::new();
    for (offset, line) in lines.enumerate() {
        // Blank lines yield no tokens.
        for token in line.split_whitespace() {
            let value = token.parse::<f64>().map_err(|_| ParseError::InvalidSample {
                line: offset + 3,
                token: token.to_string(),
            })?;
            values.push(value);
        }
    }

    let samples = SampleSet {
        sampling_frequency_hz,
        expected_count,
        values,
    };

    if let Some((expected, actual)) = samples.count_mismatch() {
        log::warn!("Data mismatch detected: header declares {expected} samples, file contains {actual}");
    }

    Ok(samples)
}

// -- Header helpers --

fn header_value(line: Option<&str>, line_no: usize, name: &'static str) -> Result<i64, ParseError> {
    let line = line.ok_or(ParseError::MissingHeader { line: line_no, name })?;

    let value = line
        .split(HEADER_SEPARATOR)
        .nth(1)
        .ok_or_else(|| ParseError::MissingSeparator {
            line: line_no,
            text: line.to_string(),
        })?
        .trim();

    value.parse::<i64>().map_err(|_| ParseError::InvalidInteger {
        line: line_no,
        name,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_headers_and_samples_in_order() {
        let text = "Sampling Frequency: 1000\nSamples: 5\n1.0 2.0 3.0\n4.0 5.0\n";
        let samples = parse_str(text).unwrap();
        assert_eq!(samples.sampling_frequency_hz, 1000);
        assert_eq!(samples.expected_count, 5);
        assert_eq!(samples.values, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(samples.count_mismatch(), None);
    }

    #[test]
    fn blank_lines_and_extra_whitespace_are_ignored() {
        let text = "Fs: 25000\nN: 4\n\n  1.5\t2.5  \n\n   \n-3.5 4e-1\r\n";
        let samples = parse_str(text).unwrap();
        assert_eq!(samples.values, vec![1.5, 2.5, -3.5, 0.4]);
    }

    #[test]
    fn count_mismatch_is_not_an_error() {
        let text = "Sampling Frequency: 1000\nSamples: 10\n1.0 2.0 3.0 4.0 5.0\n";
        let samples = parse_str(text).unwrap();
        assert_eq!(samples.len(), 5);
        assert_eq!(samples.count_mismatch(), Some((10, 5)));
    }

    #[test]
    fn headers_without_data_give_empty_set() {
        let samples = parse_str("Sampling Frequency: 500\nSamples: 0").unwrap();
        assert!(samples.is_empty());
        assert_eq!(samples.count_mismatch(), None);
    }

    #[test]
    fn header_without_separator_is_rejected() {
        let err = parse_str("Sampling Frequency 1000\nSamples: 5\n1.0\n").unwrap_err();
        assert_eq!(
            err,
            ParseError::MissingSeparator {
                line: 1,
                text: "Sampling Frequency 1000".to_string()
            }
        );

        let err = parse_str("Sampling Frequency: 1000\nSamples:5\n1.0\n").unwrap_err();
        assert!(matches!(err, ParseError::MissingSeparator { line: 2, .. }));
    }

    #[test]
    fn non_integer_header_is_rejected() {
        let err = parse_str("Sampling Frequency: 1k\nSamples: 5\n").unwrap_err();
        assert!(matches!(err, ParseError::InvalidInteger { line: 1, .. }));

        let err = parse_str("Sampling Frequency: 1000\nSamples: 5.0\n").unwrap_err();
        assert!(matches!(err, ParseError::InvalidInteger { line: 2, .. }));

        let err = parse_str("Sampling Frequency: -1000\nSamples: 5\n").unwrap_err();
        assert!(matches!(err, ParseError::InvalidInteger { line: 1, .. }));
    }

    #[test]
    fn negative_declared_count_is_only_a_mismatch() {
        let text = "Sampling Frequency: 1000\nSamples: -5\n1.0 2.0 3.0\n";
        let samples = parse_str(text).unwrap();
        assert_eq!(samples.expected_count, -5);
        assert_eq!(samples.values, vec![1.0, 2.0, 3.0]);
        assert_eq!(samples.count_mismatch(), Some((-5, 3)));
    }

    #[test]
    fn zero_sampling_frequency_is_rejected() {
        let err = parse_str("Sampling Frequency: 0\nSamples: 1\n1.0\n").unwrap_err();
        assert_eq!(err, ParseError::ZeroSamplingFrequency);
    }

    #[test]
    fn missing_headers_are_rejected() {
        assert_eq!(
            parse_str("").unwrap_err(),
            ParseError::MissingHeader { line: 1, name: "sampling frequency" }
        );
        assert_eq!(
            parse_str("Sampling Frequency: 1000").unwrap_err(),
            ParseError::MissingHeader { line: 2, name: "sample count" }
        );
    }

    #[test]
    fn non_numeric_sample_reports_line_and_token() {
        let text = "Sampling Frequency: 1000\nSamples: 3\n1.0 2.0\n\nabc 3.0\n";
        let err = parse_str(text).unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidSample {
                line: 5,
                token: "abc".to_string()
            }
        );
    }

    #[test]
    fn load_file_reads_from_disk() {
        let path = std::env::temp_dir().join(format!("voltage-viewer-{}.txt", std::process::id()));
        std::fs::write(&path, "Sampling Frequency: 1000\nSamples: 3\n0.5 1.5 2.5\n").unwrap();

        let samples = load_file(&path);
        std::fs::remove_file(&path).unwrap();

        assert_eq!(samples.unwrap().values, vec![0.5, 1.5, 2.5]);
    }

    #[test]
    fn load_file_surfaces_missing_file() {
        let path = std::env::temp_dir().join("voltage-viewer-does-not-exist.txt");
        let err = load_file(&path).unwrap_err();
        assert!(err.to_string().contains("reading sample file"));
        assert!(err.downcast_ref::<std::io::Error>().is_some());
    }
}
