//! Three-band equalizer.

use crate::effect::{Effect, FxError};
use crate::mix::mix_and_limit;
use serde::{Deserialize, Serialize};

/// Crossover between the low and mid bands (Hz).
const LOW_CUT_HZ: f32 = 400.0;
/// Crossover between the mid and high bands (Hz).
const HIGH_CUT_HZ: f32 = 3000.0;

/// Three-band EQ: Butterworth low-pass at 400 Hz and high-pass at 3 kHz
/// carve out the outer bands, the mid band is what remains
/// (`mid = x - low - high`), and each band gets its own gain.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Equalizer {
    /// Bass gain
    pub low_gain: f32,
    /// Mid gain
    pub mid_gain: f32,
    /// Treble gain
    pub high_gain: f32,
    /// Dry/wet blend
    pub mix: f32,
}

impl Default for Equalizer {
    fn default() -> Self {
        Self {
            low_gain: 1.0,
            mid_gain: 1.0,
            high_gain: 1.0,
            mix: 1.0,
        }
    }
}

impl Effect for Equalizer {
    fn name(&self) -> &str {
        "Equalizer"
    }

    fn apply(&self, samples: &[f32], sample_rate: u32) -> Result<Vec<f32>, FxError> {
        if sample_rate as f32 / 2.0 <= HIGH_CUT_HZ {
            return Err(FxError::invalid(
                "Equalizer",
                format!("sample rate {sample_rate} too low for a 3 kHz crossover"),
            ));
        }

        let low = Biquad::low_pass(LOW_CUT_HZ, sample_rate).process(samples);
        let high = Biquad::high_pass(HIGH_CUT_HZ, sample_rate).process(samples);

        let wet: Vec<f32> = samples
            .iter()
            .enumerate()
            .map(|(n, &x)| {
                let mid = x - (low[n] + high[n]);
                low[n] * self.low_gain + mid * self.mid_gain + high[n] * self.high_gain
            })
            .collect();

        Ok(mix_and_limit(samples, &wet, self.mix))
    }
}

/// Second-order Butterworth section (bilinear transform, Q = 1/sqrt(2)).
struct Biquad {
    b0: f32,
    b1: f32,
    b2: f32,
    a1: f32,
    a2: f32,
}

impl Biquad {
    fn low_pass(cutoff_hz: f32, sample_rate: u32) -> Self {
        let (cos_w, alpha) = Self::intermediates(cutoff_hz, sample_rate);
        let a0 = 1.0 + alpha;
        Self {
            b0: (1.0 - cos_w) / 2.0 / a0,
            b1: (1.0 - cos_w) / a0,
            b2: (1.0 - cos_w) / 2.0 / a0,
            a1: -2.0 * cos_w / a0,
            a2: (1.0 - alpha) / a0,
        }
    }

    fn high_pass(cutoff_hz: f32, sample_rate: u32) -> Self {
        let (cos_w, alpha) = Self::intermediates(cutoff_hz, sample_rate);
        let a0 = 1.0 + alpha;
        Self {
            b0: (1.0 + cos_w) / 2.0 / a0,
            b1: -(1.0 + cos_w) / a0,
            b2: (1.0 + cos_w) / 2.0 / a0,
            a1: -2.0 * cos_w / a0,
            a2: (1.0 - alpha) / a0,
        }
    }

    fn intermediates(cutoff_hz: f32, sample_rate: u32) -> (f32, f32) {
        let omega = 2.0 * std::f32::consts::PI * cutoff_hz / sample_rate as f32;
        (omega.cos(), omega.sin() * std::f32::consts::FRAC_1_SQRT_2)
    }

    /// Direct form II transposed.
    fn process(&self, input: &[f32]) -> Vec<f32> {
        let mut z1 = 0.0;
        let mut z2 = 0.0;
        input
            .iter()
            .map(|&x| {
                let y = self.b0 * x + z1;
                z1 = self.b1 * x - self.a1 * y + z2;
                z2 = self.b2 * x - self.a2 * y;
                y
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stompbox_core::signal;

    fn rms(samples: &[f32]) -> f32 {
        (samples.iter().map(|s| s * s).sum::<f32>() / samples.len() as f32).sqrt()
    }

    #[test]
    fn test_unity_gains_are_identity() {
        // mid = x - low - high, so unity gains reconstruct x exactly
        let eq = Equalizer::default();
        let input = signal::sine(440.0, 0.05, 44_100, 0.5);
        let out = eq.apply(&input.samples, 44_100).unwrap();
        for (a, b) in out.iter().zip(&input.samples) {
            assert!((a - b).abs() < 1e-5);
        }
    }

    #[test]
    fn test_low_pass_keeps_bass() {
        let lp = Biquad::low_pass(400.0, 44_100);
        let bass = signal::sine(50.0, 0.2, 44_100, 0.5);
        let treble = signal::sine(5000.0, 0.2, 44_100, 0.5);
        let bass_out = lp.process(&bass.samples);
        let treble_out = lp.process(&treble.samples);
        assert!(rms(&bass_out) > 0.8 * rms(&bass.samples));
        assert!(rms(&treble_out) < 0.05 * rms(&treble.samples));
    }

    #[test]
    fn test_high_pass_keeps_treble() {
        let hp = Biquad::high_pass(3000.0, 44_100);
        let bass = signal::sine(50.0, 0.2, 44_100, 0.5);
        let treble = signal::sine(10_000.0, 0.2, 44_100, 0.5);
        assert!(rms(&hp.process(&bass.samples)) < 0.05 * rms(&bass.samples));
        assert!(rms(&hp.process(&treble.samples)) > 0.8 * rms(&treble.samples));
    }

    #[test]
    fn test_zero_low_gain_cuts_bass() {
        let eq = Equalizer {
            low_gain: 0.0,
            ..Equalizer::default()
        };
        let bass = signal::sine(50.0, 0.2, 44_100, 0.5);
        let out = eq.apply(&bass.samples, 44_100).unwrap();
        assert!(rms(&out) < 0.2 * rms(&bass.samples));
    }

    #[test]
    fn test_rejects_tiny_sample_rate() {
        let eq = Equalizer::default();
        assert!(eq.apply(&[0.0; 8], 4000).is_err());
    }
}
