//! Deterministic count normalization for detected segments.
//!
//! Detected silence gaps rarely match the number of sentences the caller
//! expects, so the candidate ranges are merged or split until the count is
//! exact. Every rule here is deterministic, ties always resolve to the lowest
//! index, so the same input always yields the same output.

use crate::segmenter::SampleRange;
use tracing::debug;

/// Ranges shorter than this are merged into a neighbor before any count
/// reconciliation.
const TINY_RANGE_SECONDS: f32 = 0.25;

/// Adjust `ranges` to contain exactly `target_count` entries.
///
/// Three phases, in order:
/// 1. Tiny ranges (under 0.25s) merge forward into their successor; chains of
///    tiny ranges collapse into one. Runs regardless of the target.
/// 2. While over the target, the first-occurring shortest range merges with
///    its successor (or into its predecessor when it is last).
/// 3. While under the target, the first-occurring longest range splits at its
///    integer midpoint.
///
/// The result is finally truncated to `target_count`, which guarantees the
/// postcondition even for pathological inputs such as a target of zero or an
/// empty input with a positive target (nothing can be split into existence;
/// callers must hand in a non-empty range list whenever they expect output).
pub fn normalize_to_count(
    ranges: &[SampleRange],
    target_count: usize,
    sample_rate: u32,
) -> Vec<SampleRange> {
    let mut ranges = ranges.to_vec();

    // Phase 1: collapse tiny ranges forward
    let tiny_samples = TINY_RANGE_SECONDS * sample_rate as f32;
    let mut i = 0;
    while i < ranges.len() {
        if (ranges[i].len() as f32) < tiny_samples && i + 1 < ranges.len() {
            // Scan index stays put so a chain of tiny ranges folds into one
            ranges[i].end = ranges[i + 1].end;
            ranges.remove(i + 1);
        } else {
            i += 1;
        }
    }

    // Phase 2: merge down to the target
    while ranges.len() > target_count && ranges.len() > 1 {
        let idx = shortest_index(&ranges);
        if idx < ranges.len() - 1 {
            ranges[idx].end = ranges[idx + 1].end;
            ranges.remove(idx + 1);
        } else {
            ranges[idx - 1].end = ranges[idx].end;
            ranges.remove(idx);
        }
        debug!("Merged shortest range at index {}, {} remain", idx, ranges.len());
    }

    // Phase 3: split up to the target
    while ranges.len() < target_count {
        let Some(idx) = longest_index(&ranges) else {
            break;
        };
        let SampleRange { start, end } = ranges[idx];
        let mid = (start + end) / 2;
        ranges[idx] = SampleRange::new(start, mid);
        ranges.insert(idx + 1, SampleRange::new(mid, end));
        debug!("Split longest range at index {}, {} now", idx, ranges.len());
    }

    ranges.truncate(target_count);
    ranges
}

/// Index of the shortest range; the lowest index wins ties.
fn shortest_index(ranges: &[SampleRange]) -> usize {
    let mut best = 0;
    for (i, range) in ranges.iter().enumerate() {
        if range.len() < ranges[best].len() {
            best = i;
        }
    }
    best
}

/// Index of the longest range, if any; the lowest index wins ties.
fn longest_index(ranges: &[SampleRange]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, range) in ranges.iter().enumerate() {
        match best {
            Some(b) if range.len() <= ranges[b].len() => {}
            _ => best = Some(i),
        }
    }
    best
}
