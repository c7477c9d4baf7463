//! Effect Processing
//!
//! Mono guitar-pedal style effects and the sequential chain that applies
//! them. Each effect is pure: it maps an input buffer to an output buffer
//! of the same length, then blends dry/wet and limits the peak.

pub mod chain;
mod effect;
mod mix;

mod chorus;
mod compressor;
mod delay;
mod distortion;
mod equalizer;
mod overdrive;
mod reverb;
mod tremolo;

pub use chain::{SignalChain, StageConfig};
pub use chorus::Chorus;
pub use compressor::Compressor;
pub use delay::Delay;
pub use distortion::Distortion;
pub use effect::{Effect, FxError};
pub use equalizer::Equalizer;
pub use overdrive::Overdrive;
pub use reverb::Reverb;
pub use tremolo::Tremolo;
