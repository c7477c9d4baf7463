//! Stompbox core audio primitives.
//!
//! This crate defines the mono clip type the rest of the workspace
//! processes, plus WAV file I/O and basic signal generators.

#![warn(missing_docs)]

mod clip;
mod error;

pub mod io;
pub mod signal;

pub use clip::AudioClip;
pub use error::CoreError;

/// Result type for core audio operations.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Default sample rate used when generating signals.
pub const DEFAULT_SAMPLE_RATE: u32 = 44_100;
