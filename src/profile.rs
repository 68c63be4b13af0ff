//! Short-time RMS loudness profiling.
//!
//! Slides a fixed-length analysis window across a sample buffer and measures
//! the RMS energy of each frame. The segmenter classifies frames as silent or
//! voiced from this profile.

use crate::buffer::SampleBuffer;

/// Per-frame RMS energy of a buffer.
///
/// Frame `i` covers samples `[i * hop_size, i * hop_size + frame_size)` of the
/// source buffer.
#[derive(Debug, Clone)]
pub struct LoudnessProfile {
    /// RMS energy per analysis frame; higher is louder, near-zero is silence.
    pub rms: Vec<f32>,
    /// Window length in samples.
    pub frame_size: usize,
    /// Stride in samples between consecutive frame starts.
    pub hop_size: usize,
}

impl LoudnessProfile {
    /// Number of analysis frames.
    pub fn len(&self) -> usize {
        self.rms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rms.is_empty()
    }
}

/// Compute the loudness profile of a buffer with the given window and stride
/// durations in milliseconds.
///
/// Frame and hop sizes are floored to whole samples and clamped to a minimum
/// of 1 so degenerate configurations still make forward progress. The window
/// stops once a full frame no longer fits; up to `frame_size - 1` trailing
/// samples are dropped rather than padded. Downstream cut positions depend on
/// this, so the trailing remainder stays dropped.
pub fn compute_loudness_profile(
    buffer: &SampleBuffer,
    frame_ms: f32,
    hop_ms: f32,
) -> LoudnessProfile {
    let frame_size = ((buffer.sample_rate as f32 * frame_ms / 1000.0) as usize).max(1);
    let hop_size = ((buffer.sample_rate as f32 * hop_ms / 1000.0) as usize).max(1);

    let mut rms = Vec::new();
    let mut pos = 0;

    while pos + frame_size <= buffer.len() {
        rms.push(compute_rms(&buffer.samples[pos..pos + frame_size]));
        pos += hop_size;
    }

    LoudnessProfile {
        rms,
        frame_size,
        hop_size,
    }
}

/// RMS (Root Mean Square) energy of a window of samples.
fn compute_rms(samples: &[f32]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum_sq: f64 = samples.iter().map(|&s| (s as f64) * (s as f64)).sum();
    (sum_sq / samples.len() as f64).sqrt() as f32
}
