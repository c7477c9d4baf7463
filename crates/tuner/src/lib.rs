//! Pitch detection.
//!
//! YIN fundamental-frequency estimation over short frames, plus mapping a
//! frequency to the nearest equal-temperament note and cents offset.

#![warn(missing_docs)]

mod note;
mod yin;

pub use note::{f0_to_note, Note, NOTE_NAMES};
pub use yin::{estimate_f0, YinConfig};
