//! Property tests for the fixed-width output adapter.

use super::common::{candidate_strategy, oracle_top_k};
use proptest::prelude::*;
use suggestset::{
    index_to_raw, write_output, OutputBuffers, RankedResultSet, CODE_POINT_TERMINATOR,
    MAX_WORD_LENGTH, NOT_A_CONFIDENCE,
};

/// Fill value no generated code point uses, to spot untouched cells.
const CANARY: u32 = 0xFFFF;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Property: every slot holds its word, then a terminator if there is room,
    /// and cells after the terminator are untouched.
    #[test]
    fn prop_slots_hold_words_and_terminators(
        stream in prop::collection::vec(candidate_strategy(), 0..20),
        capacity in 1usize..8,
    ) {
        let expected = oracle_top_k(&stream, capacity);
        let mut set = RankedResultSet::new(capacity);
        set.extend(stream);

        let mut buffers = OutputBuffers::for_capacity(capacity).unwrap();
        buffers.code_points.fill(CANARY);
        let written = write_output(&mut set, &mut buffers).unwrap();

        prop_assert_eq!(written, expected.len());
        prop_assert_eq!(buffers.count, expected.len());
        prop_assert!(set.is_empty());

        for (i, candidate) in expected.iter().enumerate() {
            let slot = &buffers.code_points[i * MAX_WORD_LENGTH..(i + 1) * MAX_WORD_LENGTH];
            let len = candidate.code_point_count();
            prop_assert_eq!(&slot[..len], candidate.code_points.as_slice());
            if len < MAX_WORD_LENGTH {
                prop_assert_eq!(slot[len], CODE_POINT_TERMINATOR);
                prop_assert!(slot[len + 1..].iter().all(|&cp| cp == CANARY));
            }
            prop_assert_eq!(buffers.word_at(i), candidate.code_points.as_slice());

            prop_assert_eq!(buffers.scores[i], candidate.score);
            prop_assert_eq!(
                buffers.partial_commit_indices[i],
                index_to_raw(candidate.partial_commit_index)
            );
            prop_assert_eq!(buffers.types[i], candidate.wire_type());
        }

        // Unused slots are untouched
        prop_assert!(buffers.code_points[expected.len() * MAX_WORD_LENGTH..]
            .iter()
            .all(|&cp| cp == CANARY));
    }

    /// Property: the confidence cell is written iff exactly one result comes out.
    #[test]
    fn prop_confidence_cell_written_only_for_one(
        stream in prop::collection::vec(candidate_strategy(), 0..5),
        capacity in 1usize..4,
    ) {
        let expected = oracle_top_k(&stream, capacity);
        let mut set = RankedResultSet::new(capacity);
        set.extend(stream);

        let mut buffers = OutputBuffers::for_capacity(capacity).unwrap();
        buffers.auto_commit_confidence = [12_345];
        write_output(&mut set, &mut buffers).unwrap();

        if expected.len() == 1 {
            let raw = expected[0].auto_commit_confidence.unwrap_or(NOT_A_CONFIDENCE);
            prop_assert_eq!(buffers.auto_commit_confidence, [raw]);
        } else {
            prop_assert_eq!(buffers.auto_commit_confidence, [12_345]);
        }
    }
}
