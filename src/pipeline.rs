//! End-to-end split of one transport-encoded recording into per-sentence
//! clips.
//!
//! This is the engine's boundary with the orchestration layer: bytes in,
//! bytes out, in original temporal order. Wrapping clips in a container
//! format and writing them anywhere is the caller's business.

use crate::error::Result;
use crate::normalizer::normalize_to_count;
use crate::pcm;
use crate::segmenter::{find_segments, SegmentationConfig};
use tracing::info;

/// Split one mono 16-bit little-endian PCM recording into exactly
/// `target_count` clips, cut at natural pauses.
///
/// # Arguments
/// * `bytes` - Transport-encoded recording (2 bytes per sample)
/// * `sample_rate` - Sample rate of the recording in Hz
/// * `target_count` - Number of sentences the caller expects to recover
/// * `config` - Silence detection configuration
///
/// # Returns
/// One transport-encoded byte buffer per sentence, each independently a
/// valid standalone PCM clip at the source sample rate.
pub fn split_recording(
    bytes: &[u8],
    sample_rate: u32,
    target_count: usize,
    config: &SegmentationConfig,
) -> Result<Vec<Vec<u8>>> {
    let buffer = pcm::decode(bytes, sample_rate)?;

    let candidates = find_segments(&buffer, config);
    info!(
        "Found {} candidate segments in {:.2}s recording (target {})",
        candidates.len(),
        buffer.duration_secs(),
        target_count
    );

    let ranges = normalize_to_count(&candidates, target_count, sample_rate);

    let clips = ranges
        .iter()
        .map(|range| pcm::encode(&buffer.slice(range.start, range.end)))
        .collect();

    Ok(clips)
}
