//! Feedback delay.

use crate::effect::{Effect, FxError};
use crate::mix::mix_and_limit;
use serde::{Deserialize, Serialize};

/// Delay: `y[n] = x[n] + feedback * y[n - D]`, echoes decaying by the
/// feedback factor every `delay_ms`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Delay {
    /// Echo spacing in milliseconds
    pub delay_ms: f32,
    /// Echo persistence, 0.0..<1.0
    pub feedback: f32,
    /// Dry/wet blend
    pub mix: f32,
}

impl Default for Delay {
    fn default() -> Self {
        Self {
            delay_ms: 300.0,
            feedback: 0.4,
            mix: 0.3,
        }
    }
}

impl Effect for Delay {
    fn name(&self) -> &str {
        "Delay"
    }

    fn apply(&self, samples: &[f32], sample_rate: u32) -> Result<Vec<f32>, FxError> {
        if self.feedback >= 1.0 || self.feedback < 0.0 {
            return Err(FxError::invalid("Delay", "feedback must be in 0..1"));
        }

        let d = ((sample_rate as f32 * self.delay_ms / 1000.0) as usize).max(1);
        let mut wet = vec![0.0_f32; samples.len()];
        for n in 0..samples.len() {
            let echo = if n >= d { wet[n - d] * self.feedback } else { 0.0 };
            wet[n] = samples[n] + echo;
        }

        Ok(mix_and_limit(samples, &wet, self.mix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_impulse_echoes_decay() {
        let delay = Delay {
            delay_ms: 10.0,
            feedback: 0.5,
            mix: 1.0,
        };
        let sample_rate = 1000;
        let d = 10;
        let mut input = vec![0.0; 40];
        input[0] = 0.5;

        let out = delay.apply(&input, sample_rate).unwrap();
        assert!((out[0] - 0.5).abs() < 1e-6);
        assert!((out[d] - 0.25).abs() < 1e-6);
        assert!((out[2 * d] - 0.125).abs() < 1e-6);
        assert!(out[1].abs() < 1e-6);
    }

    #[test]
    fn test_mix_attenuates_echoes() {
        let delay = Delay {
            delay_ms: 10.0,
            feedback: 0.5,
            mix: 0.5,
        };
        let mut input = vec![0.0; 30];
        input[0] = 0.4;
        let out = delay.apply(&input, 1000).unwrap();
        // dry 0.0 blended with wet echo 0.2
        assert!((out[10] - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_minimum_one_sample_delay() {
        let delay = Delay {
            delay_ms: 0.0,
            feedback: 0.5,
            mix: 1.0,
        };
        let out = delay.apply(&[1.0, 0.0, 0.0], 1000).unwrap();
        // D clamps to 1
        assert!((out[1] - 0.5).abs() < 1e-6);
        assert!((out[2] - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_runaway_feedback_rejected() {
        let delay = Delay {
            feedback: 1.0,
            ..Delay::default()
        };
        assert!(delay.apply(&[0.1], 44_100).is_err());
    }
}
