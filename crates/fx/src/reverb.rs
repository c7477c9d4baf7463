//! Convolution reverb.

use crate::effect::{Effect, FxError};
use crate::mix::mix_and_limit;
use rustfft::{num_complex::Complex, FftPlanner};
use stompbox_core::AudioClip;

/// Reverb: convolves the signal with a room impulse response.
///
/// The IR is resampled (nearest-index) when its rate differs from the
/// signal, and an optional pre-delay inserts silence before the first
/// reflections. Built from a [`StageConfig`](crate::StageConfig) by loading
/// the IR from a WAV file, or constructed directly with a clip.
#[derive(Debug, Clone)]
pub struct Reverb {
    /// Room impulse response
    pub ir: AudioClip,
    /// Gap before the first reflections, in milliseconds
    pub pre_delay_ms: f32,
    /// Wet level
    pub mix: f32,
}

impl Reverb {
    /// Create a reverb from an impulse response clip.
    pub fn new(ir: AudioClip) -> Self {
        Self {
            ir,
            pre_delay_ms: 0.0,
            mix: 0.3,
        }
    }
}

impl Effect for Reverb {
    fn name(&self) -> &str {
        "Reverb"
    }

    fn apply(&self, samples: &[f32], sample_rate: u32) -> Result<Vec<f32>, FxError> {
        if self.ir.is_empty() {
            return Err(FxError::EmptyImpulseResponse);
        }
        if samples.is_empty() {
            return Ok(Vec::new());
        }

        let mut ir = if self.ir.sample_rate != sample_rate {
            self.ir.resampled(sample_rate).samples
        } else {
            self.ir.samples.clone()
        };

        if self.pre_delay_ms > 0.0 {
            let gap = (sample_rate as f32 * self.pre_delay_ms / 1000.0) as usize;
            let mut padded = vec![0.0; gap];
            padded.extend_from_slice(&ir);
            ir = padded;
        }

        let mut wet = fft_convolve(samples, &ir);
        wet.truncate(samples.len());

        Ok(mix_and_limit(samples, &wet, self.mix))
    }
}

/// Full linear convolution via FFT.
fn fft_convolve(x: &[f32], h: &[f32]) -> Vec<f32> {
    let out_len = x.len() + h.len() - 1;
    let n = out_len.next_power_of_two();

    let mut planner = FftPlanner::<f32>::new();
    let forward = planner.plan_fft_forward(n);
    let inverse = planner.plan_fft_inverse(n);

    let mut a: Vec<Complex<f32>> = x
        .iter()
        .map(|&v| Complex::new(v, 0.0))
        .chain(std::iter::repeat(Complex::new(0.0, 0.0)))
        .take(n)
        .collect();
    let mut b: Vec<Complex<f32>> = h
        .iter()
        .map(|&v| Complex::new(v, 0.0))
        .chain(std::iter::repeat(Complex::new(0.0, 0.0)))
        .take(n)
        .collect();

    forward.process(&mut a);
    forward.process(&mut b);
    for (lhs, rhs) in a.iter_mut().zip(&b) {
        *lhs *= *rhs;
    }
    inverse.process(&mut a);

    // rustfft leaves the inverse unnormalized
    a.iter().take(out_len).map(|c| c.re / n as f32).collect()
}
