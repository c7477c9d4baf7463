//! Chorus (modulated delay line).

use crate::effect::{Effect, FxError};
use crate::mix::mix_and_limit;
use serde::{Deserialize, Serialize};

/// Fixed base delay the modulation swings around (ms).
const BASE_DELAY_MS: f32 = 15.0;

/// Chorus: reads the signal back through a delay line whose length
/// oscillates around 15 ms, with linear interpolation between samples.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Chorus {
    /// LFO speed in Hz
    pub rate: f32,
    /// Delay modulation range in milliseconds
    pub depth_ms: f32,
    /// Dry/wet blend
    pub mix: f32,
}

impl Default for Chorus {
    fn default() -> Self {
        Self {
            rate: 1.5,
            depth_ms: 2.0,
            mix: 0.5,
        }
    }
}

impl Effect for Chorus {
    fn name(&self) -> &str {
        "Chorus"
    }

    fn apply(&self, samples: &[f32], sample_rate: u32) -> Result<Vec<f32>, FxError> {
        if samples.len() < 2 {
            // nothing to interpolate against
            return Ok(samples.to_vec());
        }

        let len = samples.len();
        let wet: Vec<f32> = (0..len)
            .map(|n| {
                let t = n as f32 / sample_rate as f32;
                let mod_ms = self.depth_ms * (2.0 * std::f32::consts::PI * self.rate * t).sin();
                let delay_samples = (BASE_DELAY_MS + mod_ms) * (sample_rate as f32 / 1000.0);
                let read = (n as f32 - delay_samples).clamp(0.0, (len - 2) as f32);

                let floor = read as usize;
                let frac = read - floor as f32;
                (1.0 - frac) * samples[floor] + frac * samples[floor + 1]
            })
            .collect();

        Ok(mix_and_limit(samples, &wet, self.mix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stompbox_core::signal;

    #[test]
    fn test_short_input_passthrough() {
        let chorus = Chorus::default();
        assert_eq!(chorus.apply(&[0.7], 44_100).unwrap(), vec![0.7]);
        assert!(chorus.apply(&[], 44_100).unwrap().is_empty());
    }

    #[test]
    fn test_output_length_matches_input() {
        let chorus = Chorus::default();
        let input = signal::sine(440.0, 0.1, 44_100, 0.4);
        let out = chorus.apply(&input.samples, 44_100).unwrap();
        assert_eq!(out.len(), input.len());
    }

    #[test]
    fn test_zero_mix_is_identity() {
        let chorus = Chorus {
            mix: 0.0,
            ..Chorus::default()
        };
        let input = signal::sine(440.0, 0.05, 44_100, 0.4);
        let out = chorus.apply(&input.samples, 44_100).unwrap();
        assert_eq!(out, input.samples);
    }

    #[test]
    fn test_wet_signal_is_delayed_copy() {
        // zero depth: constant 15 ms delay, so the wet path is a pure shift
        let chorus = Chorus {
            rate: 1.5,
            depth_ms: 0.0,
            mix: 1.0,
        };
        let sample_rate = 1000;
        let delay = 15; // 15 ms at 1 kHz
        let mut input = vec![0.0; 100];
        input[40] = 0.5;
        let out = chorus.apply(&input, sample_rate).unwrap();
        assert!((out[40 + delay] - 0.5).abs() < 1e-5);
        assert!(out[40].abs() < 1e-5);
    }
}
