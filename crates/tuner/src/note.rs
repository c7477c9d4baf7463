//! Frequency to note-name mapping.

/// Pitch-class names, C through B.
pub const NOTE_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// A detected pitch relative to the nearest equal-temperament note.
#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    /// Name with octave, e.g. "A4"
    pub name: String,
    /// Signed offset from the note's reference pitch, in cents
    pub cents: i32,
    /// The measured frequency in Hz
    pub frequency: f32,
}

/// Map a frequency to the nearest note (A4 = 440 Hz).
///
/// Returns `None` for non-finite or non-positive input.
pub fn f0_to_note(f0: f32) -> Option<Note> {
    if !f0.is_finite() || f0 <= 0.0 {
        return None;
    }

    let midi = 69.0 + 12.0 * (f0 / 440.0).log2();
    let nearest = midi.round() as i32;
    let name = format!(
        "{}{}",
        NOTE_NAMES[nearest.rem_euclid(12) as usize],
        nearest.div_euclid(12) - 1
    );
    let reference = 440.0 * 2.0_f32.powf((nearest - 69) as f32 / 12.0);
    let cents = (1200.0 * (f0 / reference).log2()).round() as i32;

    Some(Note {
        name,
        cents,
        frequency: f0,
    })
}
