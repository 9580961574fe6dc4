use std::path::PathBuf;

use anyhow::{Context, Result};

#[allow(dead_code)]
#[path = "../constants.rs"]
mod constants;

use constants::SAMPLE_FILE_NAME;

/// Matches the sensor component's I2S sampling rate and debug dump size.
const SAMPLING_FREQ_HZ: u32 = 25_000;
const SAMPLE_COUNT: usize = 1024;

const MAINS_FREQ_HZ: f64 = 50.0;
/// ZMPT101B output rides on half the 3.3 V supply.
const DC_OFFSET_V: f64 = 1.65;
const AMPLITUDE_V: f64 = 1.0;
const NOISE_STD_V: f64 = 0.02;
const SPIKE_PROBABILITY: f64 = 0.01;
const SPIKE_V: f64 = 0.6;

const VALUES_PER_LINE: usize = 16;

fn voltage_at(i: usize, rng: &mut SimpleRng) -> f64 {
    let t = i as f64 / SAMPLING_FREQ_HZ as f64;
    let mut v = DC_OFFSET_V
        + AMPLITUDE_V * (2.0 * std::f64::consts::PI * MAINS_FREQ_HZ * t).sin()
        + rng.gauss(0.0, NOISE_STD_V);
    // Occasional ADC glitches for the median filter to reject.
    if rng.next_f64() < SPIKE_PROBABILITY {
        v += if rng.next_f64() < 0.5 { SPIKE_V } else { -SPIKE_V };
    }
    v
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// Render samples in the firmware's debug dump layout.
fn render_dump(values: &[f64]) -> String {
    let mut lines = vec![
        format!("Sampling Frequency: {SAMPLING_FREQ_HZ}"),
        format!("Samples: {}", values.len()),
    ];
    lines.extend(values.chunks(VALUES_PER_LINE).map(|chunk| {
        chunk
            .iter()
            .map(|v| format!("{v:.4}"))
            .collect::<Vec<_>>()
            .join(" ")
    }));
    lines.join("\n") + "\n"
}

fn output_path() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("locating the running executable")?;
    let dir = exe.parent().context("executable has no parent directory")?;
    Ok(dir.join(SAMPLE_FILE_NAME))
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let values: Vec<f64> = (0..SAMPLE_COUNT).map(|i| voltage_at(i, &mut rng)).collect();

    let output_path = output_path()?;
    std::fs::write(&output_path, render_dump(&values))
        .with_context(|| format!("writing {}", output_path.display()))?;

    println!(
        "Wrote {} samples at {SAMPLING_FREQ_HZ} Hz to {}",
        values.len(),
        output_path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dump_has_headers_and_wrapped_values() {
        let dump = render_dump(&[1.0; 20]);
        let lines: Vec<&str> = dump.lines().collect();
        assert_eq!(lines[0], "Sampling Frequency: 25000");
        assert_eq!(lines[1], "Samples: 20");
        assert_eq!(lines[2].split_whitespace().count(), VALUES_PER_LINE);
        assert_eq!(lines[3], "1.0000 1.0000 1.0000 1.0000");
        assert_eq!(lines.len(), 4);
        assert!(dump.ends_with('\n'));
    }

    #[test]
    fn writes_the_file_the_viewer_reads() {
        let path = output_path().unwrap();
        assert_eq!(path.file_name().and_then(|n| n.to_str()), Some("sampled_voltage.txt"));
    }

    #[test]
    fn generator_is_reproducible() {
        let mut a = SimpleRng::new(42);
        let mut b = SimpleRng::new(42);
        for i in 0..64 {
            assert_eq!(voltage_at(i, &mut a), voltage_at(i, &mut b));
        }
    }
}
