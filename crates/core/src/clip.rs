//! Mono audio clip.

use serde::{Deserialize, Serialize};

/// A mono audio buffer with its sample rate.
///
/// All processing in the workspace is mono; multi-channel sources are
/// downmixed on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioClip {
    /// Samples in the range [-1.0, 1.0] (not enforced; effects may
    /// temporarily exceed it before their safety limit step)
    pub samples: Vec<f32>,

    /// Samples per second
    pub sample_rate: u32,
}

impl AudioClip {
    /// Create a clip from raw samples.
    pub fn new(samples: Vec<f32>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the clip holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Clip length in seconds.
    pub fn duration_secs(&self) -> f32 {
        self.samples.len() as f32 / self.sample_rate as f32
    }

    /// Largest absolute sample value.
    pub fn peak(&self) -> f32 {
        self.samples.iter().fold(0.0_f32, |max, s| max.max(s.abs()))
    }

    /// A copy of the leading `seconds` of the clip (the whole clip when
    /// shorter).
    pub fn leading(&self, seconds: f32) -> AudioClip {
        let count = (self.sample_rate as f32 * seconds) as usize;
        AudioClip::new(
            self.samples[..count.min(self.samples.len())].to_vec(),
            self.sample_rate,
        )
    }

    /// Resample to `target_rate` by nearest-index lookup.
    ///
    /// Nearest-index is crude but matches what the reverb needs for
    /// rate-mismatched impulse responses; it is not meant for program
    /// material.
    pub fn resampled(&self, target_rate: u32) -> AudioClip {
        if target_rate == self.sample_rate || self.samples.is_empty() {
            return AudioClip::new(self.samples.clone(), target_rate);
        }
        let ratio = target_rate as f64 / self.sample_rate as f64;
        let out_len = (self.samples.len() as f64 * ratio) as usize;
        let samples = (0..out_len)
            .map(|i| {
                let src = ((i as f64 / ratio) as usize).min(self.samples.len() - 1);
                self.samples[src]
            })
            .collect();
        AudioClip::new(samples, target_rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_and_peak() {
        let clip = AudioClip::new(vec![0.0, 0.5, -0.8, 0.2], 4);
        assert_eq!(clip.duration_secs(), 1.0);
        assert_eq!(clip.peak(), 0.8);
        assert_eq!(clip.len(), 4);
        assert!(!clip.is_empty());
    }

    #[test]
    fn test_leading_segment() {
        let clip = AudioClip::new(vec![1.0; 100], 100);
        assert_eq!(clip.leading(0.5).len(), 50);
        assert_eq!(clip.leading(2.0).len(), 100);
    }

    #[test]
    fn test_resample_same_rate_is_copy() {
        let clip = AudioClip::new(vec![0.1, 0.2, 0.3], 44_100);
        let out = clip.resampled(44_100);
        assert_eq!(out.samples, clip.samples);
    }

    #[test]
    fn test_resample_halves_length() {
        let clip = AudioClip::new((0..100).map(|i| i as f32).collect(), 1000);
        let out = clip.resampled(500);
        assert_eq!(out.len(), 50);
        assert_eq!(out.sample_rate, 500);
        // nearest-index: every second source sample survives
        assert_eq!(out.samples[1], 2.0);
        assert_eq!(out.samples[10], 20.0);
    }

    #[test]
    fn test_resample_empty() {
        let clip = AudioClip::new(vec![], 44_100);
        let out = clip.resampled(22_050);
        assert!(out.is_empty());
        assert_eq!(out.sample_rate, 22_050);
    }
}
