//! Packing serialized runs into bounded-length segments.
//!
//! Segment lengths are counted in characters, not bytes: most palette
//! symbols are outside ASCII, and the limit belongs to the text field the
//! segments are pasted into.

use crate::error::EncodeError;
use crate::rle::Run;

/// Default maximum segment length.
pub const DEFAULT_MAX_SEGMENT_LENGTH: usize = 512;

/// Greedily pack runs into segments of at most `max_len` characters.
///
/// A run's text is never split. Before appending a run, the current segment
/// is closed if the run would push it past `max_len`. The last segment is
/// always emitted, so empty input yields a single empty segment.
///
/// # Errors
///
/// Returns [`EncodeError::SegmentOverflow`] if one run's text alone is
/// longer than `max_len`.
pub fn pack_segments(runs: &[Run], max_len: usize) -> Result<Vec<String>, EncodeError> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for run in runs {
        let len = run.serialized_len();
        if len > max_len {
            return Err(EncodeError::SegmentOverflow {
                length: len,
                limit: max_len,
            });
        }

        if current_len + len > max_len {
            segments.push(std::mem::take(&mut current));
            current_len = 0;
        }

        run.write_to(&mut current);
        current_len += len;
    }

    segments.push(current);
    Ok(segments)
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::rle::serialize;
    use proptest::prelude::*;

    fn runs_strategy() -> impl Strategy<Value = Vec<Run>> {
        prop::collection::vec((1usize..=2000, prop::sample::select(vec!['A', 'Ñ', '~'])), 1..80)
            .prop_map(|pairs| pairs.into_iter().map(|(n, c)| Run::new(n, c)).collect())
    }

    proptest! {
        /// Property: segments concatenate back to the serialized runs.
        #[test]
        fn prop_segments_concatenate(runs in runs_strategy(), max_len in 5usize..=64) {
            let segments = pack_segments(&runs, max_len).unwrap();
            prop_assert_eq!(segments.concat(), serialize(&runs));
        }

        /// Property: every segment respects the limit.
        #[test]
        fn prop_segments_within_limit(runs in runs_strategy(), max_len in 5usize..=64) {
            let segments = pack_segments(&runs, max_len).unwrap();
            for segment in &segments {
                prop_assert!(segment.chars().count() <= max_len);
            }
        }

        /// Property: no segment is empty when there is input.
        #[test]
        fn prop_no_empty_segments(runs in runs_strategy(), max_len in 5usize..=64) {
            let segments = pack_segments(&runs, max_len).unwrap();
            prop_assert!(segments.iter().all(|s| !s.is_empty()));
        }
    }
}
