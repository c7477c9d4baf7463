//! Dry/wet blend and peak safety shared by every effect.

/// Blend dry and wet buffers, then normalize only if the result would clip.
pub(crate) fn mix_and_limit(dry: &[f32], wet: &[f32], mix: f32) -> Vec<f32> {
    let mut out: Vec<f32> = dry
        .iter()
        .zip(wet)
        .map(|(d, w)| (1.0 - mix) * d + mix * w)
        .collect();

    let peak = out.iter().fold(0.0_f32, |max, s| max.max(s.abs())) + 1e-9;
    if peak > 1.0 {
        for sample in &mut out {
            *sample /= peak;
        }
    }
    out
}
