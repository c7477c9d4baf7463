//! Hard-clip distortion.

use crate::effect::{Effect, FxError};
use crate::mix::mix_and_limit;
use serde::{Deserialize, Serialize};

/// Distortion: pre-gain drive, hard clip at the ceiling, then makeup gain
/// back to half scale so the perceived volume stays steady.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Distortion {
    /// Input gain multiplier
    pub drive: f32,
    /// Absolute amplitude ceiling for the clip stage
    pub threshold: f32,
    /// Dry/wet blend
    pub mix: f32,
}

impl Default for Distortion {
    fn default() -> Self {
        Self {
            drive: 10.0,
            threshold: 0.3,
            mix: 1.0,
        }
    }
}

impl Effect for Distortion {
    fn name(&self) -> &str {
        "Distortion"
    }

    fn apply(&self, samples: &[f32], _sample_rate: u32) -> Result<Vec<f32>, FxError> {
        if self.threshold <= 0.0 {
            return Err(FxError::invalid("Distortion", "threshold must be > 0"));
        }

        let wet: Vec<f32> = samples
            .iter()
            .map(|&x| {
                let clipped = (x * self.drive).clamp(-self.threshold, self.threshold);
                clipped / self.threshold * 0.5
            })
            .collect();

        Ok(mix_and_limit(samples, &wet, self.mix))
    }
}
