//! Shared test utilities, strategies and oracles.

#![allow(dead_code)]

use proptest::prelude::*;
use suggestset::{
    compare_best_first, is_better, Candidate, RankedOutput, SuggestionKind, MAX_WORD_LENGTH,
};

// ============================================================================
// BUILDERS
// ============================================================================

/// Candidate with `len` copies of 'x' and the given score.
pub fn cand(score: i32, len: usize) -> Candidate {
    Candidate::new(vec![u32::from('x'); len], score, SuggestionKind::Correction)
}

/// `(score, count)` keys of an output, in output order.
pub fn keys(output: &RankedOutput) -> Vec<(i32, usize)> {
    output
        .candidates
        .iter()
        .map(|c| (c.score, c.code_point_count()))
        .collect()
}

pub fn words(output: &RankedOutput) -> Vec<String> {
    output.candidates.iter().map(Candidate::word).collect()
}

// ============================================================================
// ASSERTIONS
// ============================================================================

/// Panics unless `candidates` is non-increasing under the tie-break rule.
pub fn assert_best_first(candidates: &[Candidate]) {
    for (i, pair) in candidates.windows(2).enumerate() {
        assert!(
            !is_better(&pair[1], &pair[0]),
            "position {} ({}, {}) outranks position {} ({}, {})",
            i + 1,
            pair[1].score,
            pair[1].code_point_count(),
            i,
            pair[0].score,
            pair[0].code_point_count()
        );
    }
}

// ============================================================================
// ORACLE
// ============================================================================

/// Reference top-K: drop invalid candidates, stable-sort best-first, keep K.
///
/// Stable sort preserves arrival order between equal keys, which is the
/// order the result set promises.
pub fn oracle_top_k(candidates: &[Candidate], k: usize) -> Vec<Candidate> {
    let mut valid: Vec<Candidate> = candidates
        .iter()
        .filter(|c| (1..=MAX_WORD_LENGTH).contains(&c.code_point_count()))
        .cloned()
        .collect();
    valid.sort_by(compare_best_first);
    valid.truncate(k);
    valid
}

// ============================================================================
// STRATEGIES
// ============================================================================

pub fn kind_strategy() -> impl Strategy<Value = SuggestionKind> {
    prop::sample::select(SuggestionKind::ALL.to_vec())
}

/// Valid candidates with a narrow score range so ties are common.
pub fn candidate_strategy() -> impl Strategy<Value = Candidate> {
    (
        -20i32..20,
        prop::collection::vec(97u32..123, 1..=MAX_WORD_LENGTH),
        kind_strategy(),
        prop::option::of(0u32..10),
        prop::option::of(-100i32..100),
    )
        .prop_map(|(score, code_points, kind, index, confidence)| {
            Candidate::new(code_points, score, kind)
                .with_partial_commit_index(index)
                .with_auto_commit_confidence(confidence)
        })
}

/// Mostly valid candidates with some empty and some over-long ones mixed in.
pub fn mixed_candidate_strategy() -> impl Strategy<Value = Candidate> {
    prop_oneof![
        8 => candidate_strategy(),
        1 => (-20i32..20).prop_map(|score| cand(score, 0)),
        1 => (-20i32..20, MAX_WORD_LENGTH + 1..MAX_WORD_LENGTH + 8)
            .prop_map(|(score, len)| cand(score, len)),
    ]
}

pub fn stream_strategy() -> impl Strategy<Value = Vec<Candidate>> {
    prop::collection::vec(mixed_candidate_strategy(), 0..60)
}
