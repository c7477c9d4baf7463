//! Signal generators.

use crate::AudioClip;

/// Generate a sine wave clip.
///
/// The CLI's demo input is `sine(440.0, 2.0, 44_100, 0.4)`.
pub fn sine(freq_hz: f32, duration_secs: f32, sample_rate: u32, amplitude: f32) -> AudioClip {
    let count = (sample_rate as f32 * duration_secs) as usize;
    let samples = (0..count)
        .map(|n| {
            let t = n as f32 / sample_rate as f32;
            amplitude * (2.0 * std::f32::consts::PI * freq_hz * t).sin()
        })
        .collect();
    AudioClip::new(samples, sample_rate)
}

/// Generate a silent clip.
pub fn silence(duration_secs: f32, sample_rate: u32) -> AudioClip {
    let count = (sample_rate as f32 * duration_secs) as usize;
    AudioClip::new(vec![0.0; count], sample_rate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sine_length_and_amplitude() {
        let clip = sine(440.0, 2.0, 44_100, 0.4);
        assert_eq!(clip.len(), 88_200);
        assert_eq!(clip.sample_rate, 44_100);
        assert!(clip.peak() <= 0.4 + 1e-6);
        assert!(clip.peak() > 0.39);
    }

    #[test]
    fn test_sine_starts_at_zero() {
        let clip = sine(440.0, 0.1, 44_100, 1.0);
        assert_eq!(clip.samples[0], 0.0);
    }

    #[test]
    fn test_sine_quarter_period_is_peak() {
        // 1 Hz at 44.1 kHz: quarter period lands on sample 11025
        let clip = sine(1.0, 1.0, 44_100, 0.5);
        assert!((clip.samples[11_025] - 0.5).abs() < 1e-4);
    }

    #[test]
    fn test_silence() {
        let clip = silence(0.5, 8000);
        assert_eq!(clip.len(), 4000);
        assert_eq!(clip.peak(), 0.0);
    }
}
