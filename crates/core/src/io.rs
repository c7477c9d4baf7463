//! WAV file reading and writing.
//!
//! Reads 16/24/32-bit integer and 32-bit float WAV files; multi-channel
//! sources are downmixed to mono by channel averaging. Writing always
//! produces 32-bit float mono.

use crate::{AudioClip, CoreError, Result};
use std::path::Path;

/// Load a WAV file as a mono clip.
pub fn read_wav(path: impl AsRef<Path>) -> Result<AudioClip> {
    let mut reader = hound::WavReader::open(path)?;
    let spec = reader.spec();

    let interleaved: Vec<f32> = match spec.sample_format {
        hound::SampleFormat::Float => reader
            .samples::<f32>()
            .collect::<std::result::Result<_, _>>()?,
        hound::SampleFormat::Int => {
            if spec.bits_per_sample == 0 || spec.bits_per_sample > 32 {
                return Err(CoreError::UnsupportedFormat(format!(
                    "{}-bit integer samples",
                    spec.bits_per_sample
                )));
            }
            let scale = (1_i64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f32 / scale))
                .collect::<std::result::Result<_, _>>()?
        }
    };

    Ok(AudioClip::new(
        downmix(&interleaved, spec.channels as usize),
        spec.sample_rate,
    ))
}

/// Write a mono clip as a 32-bit float WAV file.
pub fn write_wav(path: impl AsRef<Path>, clip: &AudioClip) -> Result<()> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: clip.sample_rate,
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    };
    let mut writer = hound::WavWriter::create(path, spec)?;
    for &sample in &clip.samples {
        writer.write_sample(sample)?;
    }
    writer.finalize()?;
    Ok(())
}

/// Average interleaved channels into a mono buffer.
fn downmix(interleaved: &[f32], channels: usize) -> Vec<f32> {
    if channels <= 1 {
        return interleaved.to_vec();
    }
    interleaved
        .chunks(channels)
        .map(|frame| frame.iter().sum::<f32>() / frame.len() as f32)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal;

    #[test]
    fn test_downmix_stereo() {
        let interleaved = [1.0, 0.0, 0.5, 0.5, -1.0, 1.0];
        assert_eq!(downmix(&interleaved, 2), vec![0.5, 0.5, 0.0]);
    }

    #[test]
    fn test_downmix_mono_passthrough() {
        let samples = [0.1, 0.2, 0.3];
        assert_eq!(downmix(&samples, 1), samples.to_vec());
    }

    #[test]
    fn test_wav_roundtrip_float() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clip.wav");
        let clip = signal::sine(440.0, 0.1, 44_100, 0.4);

        write_wav(&path, &clip).unwrap();
        let loaded = read_wav(&path).unwrap();

        assert_eq!(loaded.sample_rate, 44_100);
        assert_eq!(loaded.len(), clip.len());
        for (a, b) in loaded.samples.iter().zip(&clip.samples) {
            assert!((a - b).abs() < 1e-6);
        }
    }

    #[test]
    fn test_read_int16_wav() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("int.wav");
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: 8000,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut writer = hound::WavWriter::create(&path, spec).unwrap();
        writer.write_sample(i16::MAX).unwrap();
        writer.write_sample(0_i16).unwrap();
        writer.write_sample(i16::MIN).unwrap();
        writer.finalize().unwrap();

        let clip = read_wav(&path).unwrap();
        assert_eq!(clip.len(), 3);
        assert!((clip.samples[0] - (i16::MAX as f32 / 32768.0)).abs() < 1e-6);
        assert_eq!(clip.samples[1], 0.0);
        assert!((clip.samples[2] + 1.0).abs() < 1e-6);
    }
}
