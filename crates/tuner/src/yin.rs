//! YIN fundamental-frequency estimation.
//!
//! Classic YIN (de Cheveigné & Kawahara 2002): squared-difference function
//! over candidate lags, cumulative-mean normalization, absolute threshold
//! with first-dip selection, parabolic interpolation of the winning lag.
//! The clip-level estimate is the median over all frames.

use stompbox_core::AudioClip;
use tracing::debug;

/// Parameters for [`estimate_f0`].
#[derive(Debug, Clone)]
pub struct YinConfig {
    /// Samples per analysis frame
    pub frame_length: usize,
    /// Hop between frame starts
    pub hop: usize,
    /// Lowest detectable frequency (Hz)
    pub fmin: f32,
    /// Highest detectable frequency (Hz)
    pub fmax: f32,
    /// Normalized-difference dip threshold
    pub threshold: f32,
}

impl Default for YinConfig {
    fn default() -> Self {
        Self {
            frame_length: 4096,
            hop: 512,
            fmin: 50.0,
            fmax: 2000.0,
            threshold: 0.1,
        }
    }
}

/// Estimate the fundamental frequency of a clip.
///
/// Returns `None` when the clip is shorter than one analysis frame.
pub fn estimate_f0(clip: &AudioClip, config: &YinConfig) -> Option<f32> {
    if clip.len() < config.frame_length || config.frame_length < 4 {
        return None;
    }

    let mut estimates: Vec<f32> = clip
        .samples
        .windows(config.frame_length)
        .step_by(config.hop.max(1))
        .filter_map(|frame| frame_f0(frame, clip.sample_rate, config))
        .collect();

    debug!(frames = estimates.len(), "yin frame estimates collected");
    if estimates.is_empty() {
        return None;
    }

    estimates.sort_by(|a, b| a.total_cmp(b));
    let mid = estimates.len() / 2;
    let median = if estimates.len() % 2 == 0 {
        (estimates[mid - 1] + estimates[mid]) / 2.0
    } else {
        estimates[mid]
    };
    Some(median)
}

/// YIN on a single frame. `None` for degenerate frames (silence).
fn frame_f0(frame: &[f32], sample_rate: u32, config: &YinConfig) -> Option<f32> {
    let window = frame.len() / 2;
    let tau_min = ((sample_rate as f32 / config.fmax) as usize).max(1);
    let tau_max = ((sample_rate as f32 / config.fmin).ceil() as usize).min(window - 1);
    if tau_min >= tau_max {
        return None;
    }

    // squared difference function
    let mut d = vec![0.0_f64; tau_max + 1];
    for (tau, value) in d.iter_mut().enumerate().skip(1) {
        let mut sum = 0.0_f64;
        for j in 0..window {
            let diff = (frame[j] - frame[j + tau]) as f64;
            sum += diff * diff;
        }
        *value = sum;
    }

    if d.iter().sum::<f64>() == 0.0 {
        // silence
        return None;
    }

    // cumulative-mean normalization
    let mut cmndf = vec![1.0_f64; tau_max + 1];
    let mut running_sum = 0.0_f64;
    for tau in 1..=tau_max {
        running_sum += d[tau];
        cmndf[tau] = if running_sum > 0.0 {
            d[tau] * tau as f64 / running_sum
        } else {
            1.0
        };
    }

    // first dip under the threshold, descended to its local minimum;
    // fall back to the global minimum when nothing dips (librosa's policy)
    let mut tau = tau_min;
    let mut best = None;
    while tau <= tau_max {
        if cmndf[tau] < config.threshold as f64 {
            while tau + 1 <= tau_max && cmndf[tau + 1] < cmndf[tau] {
                tau += 1;
            }
            best = Some(tau);
            break;
        }
        tau += 1;
    }
    let tau = best.unwrap_or_else(|| {
        (tau_min..=tau_max)
            .min_by(|&a, &b| cmndf[a].total_cmp(&cmndf[b]))
            .unwrap_or(tau_min)
    });

    let refined = parabolic_interpolation(&cmndf, tau, tau_min, tau_max);
    Some(sample_rate as f32 / refined as f32)
}

/// Refine a lag estimate by fitting a parabola through its neighbors.
fn parabolic_interpolation(cmndf: &[f64], tau: usize, tau_min: usize, tau_max: usize) -> f64 {
    if tau <= tau_min || tau >= tau_max {
        return tau as f64;
    }
    let left = cmndf[tau - 1];
    let center = cmndf[tau];
    let right = cmndf[tau + 1];
    let denominator = 2.0 * (left + right - 2.0 * center);
    if denominator.abs() < f64::EPSILON {
        return tau as f64;
    }
    tau as f64 + (left - right) / denominator
}
