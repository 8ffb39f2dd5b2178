// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for bounded insertion.
//!
//! Arbitrary streams of candidates (including empty and over-long words, and
//! predictions without a probability) go into a set of arbitrary capacity.
//! The set must never exceed its capacity, and what comes out must equal a
//! stable sort of the valid input truncated to the capacity.

#![no_main]

use libfuzzer_sys::fuzz_target;
use suggestset::{compare_best_first, Candidate, RankedResultSet, SuggestionKind, MAX_WORD_LENGTH};

#[derive(Debug, arbitrary::Arbitrary)]
enum Op {
    Suggestion { len: u8, score: i32, kind: u8 },
    Prediction { len: u8, probability: Option<i32> },
}

#[derive(Debug, arbitrary::Arbitrary)]
struct InsertionInput {
    capacity: u8,
    ops: Vec<Op>,
}

fuzz_target!(|input: InsertionInput| {
    let capacity = usize::from(input.capacity % 32);
    let mut set = RankedResultSet::new(capacity);
    let mut accepted: Vec<Candidate> = Vec::new();

    for op in input.ops {
        match op {
            Op::Suggestion { len, score, kind } => {
                let kind = SuggestionKind::from_code(i32::from(kind % 11))
                    .unwrap_or(SuggestionKind::Correction);
                let candidate = Candidate::new(vec![97u32; usize::from(len)], score, kind);
                if (1..=MAX_WORD_LENGTH).contains(&usize::from(len)) {
                    accepted.push(candidate.clone());
                }
                set.insert(candidate);
            }
            Op::Prediction { len, probability } => {
                let code_points = vec![98u32; usize::from(len)];
                if let Some(p) = probability {
                    if (1..=MAX_WORD_LENGTH).contains(&usize::from(len)) {
                        accepted.push(Candidate::new(
                            code_points.clone(),
                            p,
                            SuggestionKind::Prediction,
                        ));
                    }
                }
                set.add_prediction(code_points, probability);
            }
        }
        assert!(set.len() <= capacity, "capacity exceeded");
    }

    accepted.sort_by(compare_best_first);
    accepted.truncate(capacity);

    let scores = set.extract_scores();
    assert_eq!(scores, set.extract_scores(), "extract_scores not idempotent");

    let output = set.drain();
    assert_eq!(output.candidates, accepted, "top-k differs from sorted oracle");
    assert_eq!(output.scores(), scores);
});
