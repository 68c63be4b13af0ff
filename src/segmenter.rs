//! Silence-based segment detection.
//!
//! Scans a loudness profile for sustained low-energy runs and cuts the
//! recording at the center of each run. The number of segments found here
//! depends entirely on the signal; reconciling it with the caller's expected
//! sentence count is the normalizer's job.

use crate::buffer::SampleBuffer;
use crate::profile::compute_loudness_profile;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Candidate segments shorter than this are residual noise blips and are
/// dropped outright.
const MIN_SEGMENT_SECONDS: f32 = 0.2;

/// A half-open interval `[start, end)` over a buffer's sample index space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleRange {
    pub start: usize,
    pub end: usize,
}

impl SampleRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Duration in samples.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Duration in seconds at the given sample rate.
    pub fn duration_secs(&self, sample_rate: u32) -> f64 {
        self.len() as f64 / sample_rate as f64
    }
}

/// Configuration for silence detection.
///
/// Callers choose values appropriate to their recording's noise floor; only
/// positivity (and `hop_ms <= frame_ms`) is assumed, not validated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentationConfig {
    /// RMS threshold below which a frame counts as silence.
    pub rms_threshold: f32,
    /// Minimum silence duration in milliseconds required to emit a cut.
    pub min_silence_ms: f32,
    /// Analysis window duration in milliseconds.
    pub frame_ms: f32,
    /// Stride between analysis windows in milliseconds.
    pub hop_ms: f32,
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self {
            rms_threshold: 0.015, // RMS < 0.015 = silence
            min_silence_ms: 450.0,
            frame_ms: 20.0,
            hop_ms: 10.0,
        }
    }
}

impl SegmentationConfig {
    /// Create a config with a custom silence threshold.
    pub fn with_threshold(rms_threshold: f32) -> Self {
        Self {
            rms_threshold,
            ..Default::default()
        }
    }
}

/// Find spoken segments in a buffer by cutting at sustained silences.
///
/// A cut is emitted the instant a run of consecutive silent frames reaches
/// the minimum length, placed at the center of that minimum-length run so
/// both neighboring segments keep a symmetric silence margin. One cut per
/// silence run. Cut positions plus the buffer edges form candidate ranges;
/// trivially short candidates are dropped, which may leave small gaps in
/// sample coverage between surviving segments.
///
/// # Returns
/// Surviving ranges in original temporal order. The count is whatever the
/// signal yields, not any particular target.
pub fn find_segments(buffer: &SampleBuffer, config: &SegmentationConfig) -> Vec<SampleRange> {
    let profile = compute_loudness_profile(buffer, config.frame_ms, config.hop_ms);
    let min_silence_frames = ((config.min_silence_ms / config.hop_ms).ceil() as usize).max(1);

    let mut boundaries = Vec::new();
    let mut run = 0usize;

    for (i, &rms) in profile.rms.iter().enumerate() {
        if rms < config.rms_threshold {
            run += 1;
            // Only the first qualifying frame of a run emits a boundary
            if run == min_silence_frames {
                let boundary = (i - min_silence_frames / 2) * profile.hop_size;
                debug!(
                    "Silence run at frame {}: cut at {:.2}s",
                    i,
                    boundary as f32 / buffer.sample_rate as f32
                );
                boundaries.push(boundary);
            }
        } else {
            run = 0;
        }
    }

    let min_samples = MIN_SEGMENT_SECONDS * buffer.sample_rate as f32;
    let mut ranges = Vec::new();
    let mut start = 0usize;

    for end in boundaries.into_iter().chain(std::iter::once(buffer.len())) {
        let candidate = SampleRange::new(start, end);
        if candidate.len() as f32 > min_samples {
            ranges.push(candidate);
        } else {
            debug!(
                "Dropping {}ms candidate at sample {}",
                (candidate.duration_secs(buffer.sample_rate) * 1000.0) as i64,
                candidate.start
            );
        }
        start = end;
    }

    ranges
}
