//! Tremolo (amplitude modulation).

use crate::effect::{Effect, FxError};
use crate::mix::mix_and_limit;
use serde::{Deserialize, Serialize};

/// Tremolo: a low-frequency sine oscillator modulates the volume.
/// Depth 0.0 leaves the signal untouched, depth 1.0 swings between
/// silence and full volume.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tremolo {
    /// LFO speed in Hz
    pub rate: f32,
    /// Modulation intensity, 0.0..=1.0
    pub depth: f32,
    /// Dry/wet blend
    pub mix: f32,
}

impl Default for Tremolo {
    fn default() -> Self {
        Self {
            rate: 5.0,
            depth: 0.5,
            mix: 1.0,
        }
    }
}

impl Effect for Tremolo {
    fn name(&self) -> &str {
        "Tremolo"
    }

    fn apply(&self, samples: &[f32], sample_rate: u32) -> Result<Vec<f32>, FxError> {
        if !(0.0..=1.0).contains(&self.depth) {
            return Err(FxError::invalid("Tremolo", "depth must be in 0..=1"));
        }

        let wet: Vec<f32> = samples
            .iter()
            .enumerate()
            .map(|(n, &x)| {
                let t = n as f32 / sample_rate as f32;
                // oscillates 0..1
                let lfo = 0.5 * (1.0 + (2.0 * std::f32::consts::PI * self.rate * t).sin());
                let gain = (1.0 - self.depth) + self.depth * lfo;
                x * gain
            })
            .collect();

        Ok(mix_and_limit(samples, &wet, self.mix))
    }
}
