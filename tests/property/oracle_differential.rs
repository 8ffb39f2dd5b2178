//! Differential testing: compare the heap against a sort-and-truncate oracle.
//!
//! The oracle is the obviously-correct way to pick the top K: sort everything
//! best-first with a stable sort, keep the first K. If the result set and the
//! oracle disagree, the oracle is right.

use super::common::{oracle_top_k, stream_strategy};
use proptest::prelude::*;
use suggestset::RankedResultSet;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Differential test: drained output equals oracle top-K, candidate for candidate.
    #[test]
    fn diff_drain_matches_oracle(stream in stream_strategy(), capacity in 0usize..16) {
        let expected = oracle_top_k(&stream, capacity);

        let mut set = RankedResultSet::new(capacity);
        set.extend(stream);

        prop_assert_eq!(set.drain().candidates, expected);
    }

    /// Differential test: scores match the oracle's scores.
    #[test]
    fn diff_scores_match_oracle(stream in stream_strategy(), capacity in 0usize..16) {
        let expected: Vec<i32> = oracle_top_k(&stream, capacity).iter().map(|c| c.score).collect();

        let mut set = RankedResultSet::new(capacity);
        set.extend(stream);

        prop_assert_eq!(set.extract_scores(), expected);
    }

    /// Differential test: splitting the stream and merging gives the oracle's keys.
    #[test]
    fn diff_merge_matches_oracle_keys(
        stream in stream_strategy(),
        split in 0usize..60,
        capacity in 1usize..16,
    ) {
        let split = split.min(stream.len());
        let expected: Vec<(i32, usize)> = oracle_top_k(&stream, capacity)
            .iter()
            .map(|c| (c.score, c.code_point_count()))
            .collect();

        let mut left = RankedResultSet::new(capacity);
        left.extend(stream[..split].iter().cloned());
        let mut right = RankedResultSet::new(capacity);
        right.extend(stream[split..].iter().cloned());
        left.merge(right);

        let actual: Vec<(i32, usize)> = left
            .drain()
            .candidates
            .iter()
            .map(|c| (c.score, c.code_point_count()))
            .collect();
        prop_assert_eq!(actual, expected);
    }
}
