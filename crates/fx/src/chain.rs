//! Sequential effect chain and its declarative description.

use crate::effect::{Effect, FxError};
use crate::{Chorus, Compressor, Delay, Distortion, Equalizer, Overdrive, Reverb, Tremolo};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::warn;

/// One stage of a chain description, deserializable from JSON like:
///
/// ```json
/// [
///   { "effect": "compressor", "threshold": 0.4, "ratio": 4.0 },
///   { "effect": "delay", "delay_ms": 300, "feedback": 0.4, "mix": 0.3 },
///   { "effect": "reverb", "ir": "room.wav", "mix": 0.3 }
/// ]
/// ```
///
/// Omitted parameters take each effect's defaults. The reverb stage names
/// the impulse response WAV to load instead of embedding samples.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum StageConfig {
    /// Hard-knee compressor
    Compressor(Compressor),
    /// Hard-clip distortion
    Distortion(Distortion),
    /// Soft-clip overdrive
    Overdrive(Overdrive),
    /// Three-band equalizer
    Equalizer(Equalizer),
    /// Amplitude modulation
    Tremolo(Tremolo),
    /// Modulated delay line
    Chorus(Chorus),
    /// Feedback delay
    Delay(Delay),
    /// Convolution reverb
    Reverb {
        /// Impulse response WAV path
        ir: PathBuf,
        /// Gap before the first reflections, in milliseconds
        #[serde(default)]
        pre_delay_ms: f32,
        /// Wet level
        #[serde(default = "default_reverb_mix")]
        mix: f32,
    },
}

fn default_reverb_mix() -> f32 {
    0.3
}

impl StageConfig {
    /// Build the runnable effect this stage describes.
    ///
    /// The reverb stage reads its impulse response from disk here, so a
    /// bad path surfaces at build time rather than mid-signal.
    pub fn build(&self) -> Result<Box<dyn Effect>, FxError> {
        Ok(match self {
            StageConfig::Compressor(fx) => Box::new(fx.clone()),
            StageConfig::Distortion(fx) => Box::new(fx.clone()),
            StageConfig::Overdrive(fx) => Box::new(fx.clone()),
            StageConfig::Equalizer(fx) => Box::new(fx.clone()),
            StageConfig::Tremolo(fx) => Box::new(fx.clone()),
            StageConfig::Chorus(fx) => Box::new(fx.clone()),
            StageConfig::Delay(fx) => Box::new(fx.clone()),
            StageConfig::Reverb {
                ir,
                pre_delay_ms,
                mix,
            } => Box::new(Reverb {
                ir: stompbox_core::io::read_wav(ir)?,
                pre_delay_ms: *pre_delay_ms,
                mix: *mix,
            }),
        })
    }
}

/// An ordered set of effects applied one after another.
#[derive(Default)]
pub struct SignalChain {
    stages: Vec<Box<dyn Effect>>,
}

impl SignalChain {
    /// Create an empty chain (processes signals dry).
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a chain from stage descriptions.
    ///
    /// Stages that fail to build are skipped with a warning; the rest of
    /// the chain still runs.
    pub fn from_configs(configs: &[StageConfig]) -> Self {
        let mut chain = Self::new();
        for config in configs {
            match config.build() {
                Ok(stage) => chain.push(stage),
                Err(err) => warn!("skipping chain stage: {err}"),
            }
        }
        chain
    }

    /// Append a stage.
    pub fn push(&mut self, stage: Box<dyn Effect>) {
        self.stages.push(stage);
    }

    /// Number of stages.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Whether the chain has no stages.
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Run the signal through every stage in order.
    ///
    /// A stage that fails leaves the signal unchanged for that stage; the
    /// chain never aborts mid-signal.
    pub fn process(&self, samples: &[f32], sample_rate: u32) -> Vec<f32> {
        let mut signal = samples.to_vec();
        for stage in &self.stages {
            match stage.apply(&signal, sample_rate) {
                Ok(processed) => signal = processed,
                Err(err) => warn!("{} failed, passing dry: {err}", stage.name()),
            }
        }
        signal
    }

    /// Human-readable path, e.g. `[Compressor] -> [Delay]`, or `(dry)`
    /// for an empty chain.
    pub fn signal_path(&self) -> String {
        if self.stages.is_empty() {
            return "(dry)".to_string();
        }
        self.stages
            .iter()
            .map(|stage| format!("[{}]", stage.name()))
            .collect::<Vec<_>>()
            .join(" -> ")
    }
}
