//! Mono sample buffer shared by every stage of the engine.

/// A contiguous block of mono PCM samples at a known sample rate.
///
/// Samples are normalized floats in [-1.0, 1.0]. Each buffer is independently
/// owned; slicing copies into a fresh buffer rather than aliasing the source.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleBuffer {
    /// Mono f32 samples in [-1.0, 1.0].
    pub samples: Vec<f32>,
    /// Sample rate in Hz (e.g. 16000, 24000, 48000).
    pub sample_rate: u32,
}

impl SampleBuffer {
    pub fn new(samples: Vec<f32>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    /// Build a mono buffer from interleaved multi-channel samples by keeping
    /// only the first channel.
    pub fn from_interleaved(samples: &[f32], sample_rate: u32, channels: u16) -> Self {
        let channels = channels.max(1) as usize;
        let mono: Vec<f32> = samples.iter().step_by(channels).copied().collect();
        Self::new(mono, sample_rate)
    }

    /// Number of samples in the buffer.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns true if the buffer contains no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Returns the duration of this buffer in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }

    /// Copy the half-open sample range `[start_sample, end_sample)` into a new
    /// independently owned buffer at the same sample rate.
    ///
    /// Indices at or beyond the source length read as silence (0.0) instead of
    /// failing, so ranges that slightly overrun due to rounding still produce
    /// a clip of the requested length.
    pub fn slice(&self, start_sample: usize, end_sample: usize) -> SampleBuffer {
        let count = end_sample.saturating_sub(start_sample);
        let mut samples = Vec::with_capacity(count);
        for i in start_sample..start_sample + count {
            samples.push(self.samples.get(i).copied().unwrap_or(0.0));
        }
        SampleBuffer::new(samples, self.sample_rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_copies_range() {
        let buffer = SampleBuffer::new(vec![0.1, 0.2, 0.3, 0.4], 24000);
        let clip = buffer.slice(1, 3);

        assert_eq!(clip.samples, vec![0.2, 0.3]);
        assert_eq!(clip.sample_rate, 24000);
    }

    #[test]
    fn test_slice_overrun_reads_silence() {
        let buffer = SampleBuffer::new(vec![0.5, 0.5], 24000);
        let clip = buffer.slice(1, 4);

        assert_eq!(clip.samples, vec![0.5, 0.0, 0.0]);
    }

    #[test]
    fn test_slice_inverted_range_is_empty() {
        let buffer = SampleBuffer::new(vec![0.5; 10], 24000);
        let clip = buffer.slice(7, 3);

        assert!(clip.is_empty());
    }

    #[test]
    fn test_from_interleaved_keeps_first_channel() {
        // Stereo: left channel ascending, right channel constant
        let interleaved = vec![0.1, 0.9, 0.2, 0.9, 0.3, 0.9];
        let buffer = SampleBuffer::from_interleaved(&interleaved, 48000, 2);

        assert_eq!(buffer.samples, vec![0.1, 0.2, 0.3]);
    }

    #[test]
    fn test_duration() {
        let buffer = SampleBuffer::new(vec![0.0; 12000], 24000);
        assert_eq!(buffer.duration_secs(), 0.5);
    }
}
