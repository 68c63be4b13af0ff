//! Deterministic audio segmentation for narrated recordings.
//!
//! Takes one continuous mono speech recording containing N sentences
//! separated by natural pauses and splits it into exactly N clips, even when
//! the number of detected pauses disagrees with N.
//!
//! Pipeline: PCM decode -> RMS loudness profile -> silence-based candidate
//! segments -> count normalization (deterministic merge/split) -> per-clip
//! slice and PCM encode. Every stage is a pure, synchronous transformation
//! over in-memory buffers; callers on separate recordings can run in
//! parallel without coordination.

pub mod buffer;
pub mod error;
pub mod normalizer;
pub mod pcm;
pub mod pipeline;
pub mod profile;
pub mod segmenter;

pub use buffer::SampleBuffer;
pub use error::{AudioError, Result};
pub use normalizer::normalize_to_count;
pub use pipeline::split_recording;
pub use profile::{compute_loudness_profile, LoudnessProfile};
pub use segmenter::{find_segments, SampleRange, SegmentationConfig};
