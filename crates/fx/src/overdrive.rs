//! Soft-clip overdrive.

use crate::effect::{Effect, FxError};
use crate::mix::mix_and_limit;
use serde::{Deserialize, Serialize};

/// Overdrive: tanh waveshaper with an optional tone stage that emphasizes
/// the high end by blending in the first difference of the shaped signal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Overdrive {
    /// Pre-gain into the waveshaper
    pub gain: f32,
    /// Brightness emphasis, 0.0 = off
    pub tone: f32,
    /// Dry/wet blend
    pub mix: f32,
}

impl Default for Overdrive {
    fn default() -> Self {
        Self {
            gain: 3.0,
            tone: 0.2,
            mix: 1.0,
        }
    }
}

impl Effect for Overdrive {
    fn name(&self) -> &str {
        "Overdrive"
    }

    fn apply(&self, samples: &[f32], _sample_rate: u32) -> Result<Vec<f32>, FxError> {
        let mut wet: Vec<f32> = samples.iter().map(|&x| (self.gain * x).tanh()).collect();

        if self.tone != 0.0 {
            // first difference with a leading zero
            let mut previous = 0.0;
            let mut first = true;
            for sample in &mut wet {
                let shaped = *sample;
                let dx = if first { 0.0 } else { shaped - previous };
                first = false;
                previous = shaped;
                *sample = (1.0 - self.tone) * shaped + self.tone * (shaped + 0.2 * dx);
            }
        }

        Ok(mix_and_limit(samples, &wet, self.mix))
    }
}
