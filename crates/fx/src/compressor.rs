//! Hard-knee compressor.

use crate::effect::{Effect, FxError};
use crate::mix::mix_and_limit;
use serde::{Deserialize, Serialize};

/// Compressor: samples under the threshold pass, everything above is
/// scaled down by the ratio, then makeup gain is applied.
///
/// `y = sign(x) * (T + (|x| - T) / ratio)` for `|x| >= T`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Compressor {
    /// Amplitude above which compression kicks in
    pub threshold: f32,
    /// Compression ratio (1.0 = none)
    pub ratio: f32,
    /// Output gain applied after compression
    pub makeup: f32,
    /// Dry/wet blend
    pub mix: f32,
}

impl Default for Compressor {
    fn default() -> Self {
        Self {
            threshold: 0.4,
            ratio: 4.0,
            makeup: 1.0,
            mix: 1.0,
        }
    }
}

impl Effect for Compressor {
    fn name(&self) -> &str {
        "Compressor"
    }

    fn apply(&self, samples: &[f32], _sample_rate: u32) -> Result<Vec<f32>, FxError> {
        if self.threshold <= 0.0 {
            return Err(FxError::invalid("Compressor", "threshold must be > 0"));
        }
        if self.ratio < 1.0 {
            return Err(FxError::invalid("Compressor", "ratio must be >= 1"));
        }

        let wet: Vec<f32> = samples
            .iter()
            .map(|&x| {
                let mag = x.abs();
                let compressed = if mag < self.threshold {
                    x
                } else {
                    x.signum() * (self.threshold + (mag - self.threshold) / self.ratio)
                };
                compressed * self.makeup
            })
            .collect();

        Ok(mix_and_limit(samples, &wet, self.mix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_below_threshold_passes_through() {
        let comp = Compressor::default();
        let out = comp.apply(&[0.1, -0.3], 44_100).unwrap();
        assert!((out[0] - 0.1).abs() < 1e-6);
        assert!((out[1] + 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_above_threshold_is_compressed() {
        let comp = Compressor {
            threshold: 0.4,
            ratio: 4.0,
            makeup: 1.0,
            mix: 1.0,
        };
        let out = comp.apply(&[0.8, -0.8], 44_100).unwrap();
        // 0.4 + (0.8 - 0.4) / 4 = 0.5
        assert!((out[0] - 0.5).abs() < 1e-6);
        assert!((out[1] + 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_makeup_gain() {
        let comp = Compressor {
            makeup: 2.0,
            ..Compressor::default()
        };
        let out = comp.apply(&[0.2], 44_100).unwrap();
        assert!((out[0] - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_invalid_ratio_rejected() {
        let comp = Compressor {
            ratio: 0.5,
            ..Compressor::default()
        };
        assert!(matches!(
            comp.apply(&[0.1], 44_100),
            Err(FxError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_empty_input() {
        let out = Compressor::default().apply(&[], 44_100).unwrap();
        assert!(out.is_empty());
    }
}
