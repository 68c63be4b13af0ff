//! Transport codec for raw little-endian signed 16-bit PCM.
//!
//! The engine's boundary format: one mono recording as a flat byte stream,
//! two bytes per sample.

use crate::buffer::SampleBuffer;
use crate::error::{AudioError, Result};

/// Decode a little-endian signed 16-bit mono PCM byte stream into a
/// normalized sample buffer at the given sample rate.
///
/// Fails with [`AudioError::Format`] if the byte length is not a multiple
/// of 2.
pub fn decode(bytes: &[u8], sample_rate: u32) -> Result<SampleBuffer> {
    if bytes.len() % 2 != 0 {
        return Err(AudioError::Format(bytes.len()));
    }

    let samples: Vec<f32> = bytes
        .chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]) as f32 / 32768.0)
        .collect();

    Ok(SampleBuffer::new(samples, sample_rate))
}

/// Encode a sample buffer back into little-endian signed 16-bit PCM bytes.
///
/// Each sample is clamped to [-1.0, 1.0] and scaled asymmetrically to match
/// the signed 16-bit range: negatives by 32768, non-negatives by 32767. The
/// asymmetry keeps round-trips with the original recording bit-exact.
pub fn encode(buffer: &SampleBuffer) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(buffer.samples.len() * 2);

    for &sample in &buffer.samples {
        let sample = sample.clamp(-1.0, 1.0);
        let value = if sample < 0.0 {
            (sample * 32768.0) as i16
        } else {
            (sample * 32767.0) as i16
        };
        bytes.extend_from_slice(&value.to_le_bytes());
    }

    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_rejects_odd_length() {
        let result = decode(&[0x00, 0x01, 0x02], 24000);
        assert!(matches!(result, Err(AudioError::Format(3))));
    }

    #[test]
    fn test_decode_scales_by_32768() {
        // i16::MIN, 0, i16::MAX
        let bytes = [0x00, 0x80, 0x00, 0x00, 0xFF, 0x7F];
        let buffer = decode(&bytes, 24000).unwrap();

        assert_eq!(buffer.samples[0], -1.0);
        assert_eq!(buffer.samples[1], 0.0);
        assert_eq!(buffer.samples[2], 32767.0 / 32768.0);
    }

    #[test]
    fn test_encode_asymmetric_extremes() {
        let buffer = SampleBuffer::new(vec![-1.0, 1.0], 24000);
        let bytes = encode(&buffer);

        assert_eq!(&bytes[0..2], &i16::MIN.to_le_bytes());
        assert_eq!(&bytes[2..4], &i16::MAX.to_le_bytes());
    }

    #[test]
    fn test_encode_clamps_out_of_range() {
        let buffer = SampleBuffer::new(vec![-2.5, 1.7], 24000);
        let bytes = encode(&buffer);

        assert_eq!(&bytes[0..2], &i16::MIN.to_le_bytes());
        assert_eq!(&bytes[2..4], &i16::MAX.to_le_bytes());
    }

    #[test]
    fn test_round_trip_within_quantization_error() {
        // Samples on the 16-bit quantization grid, as any decoded recording is
        let samples: Vec<f32> = (0..1000)
            .map(|i| (((i as f32) * 0.013).sin() * 0.8 * 32768.0).round() / 32768.0)
            .collect();
        let buffer = SampleBuffer::new(samples.clone(), 24000);

        let decoded = decode(&encode(&buffer), 24000).unwrap();

        assert_eq!(decoded.len(), samples.len());
        for (original, recovered) in samples.iter().zip(&decoded.samples) {
            assert!(
                (original - recovered).abs() <= 1.0 / 32768.0,
                "sample {} round-tripped to {}",
                original,
                recovered
            );
        }
    }
}
