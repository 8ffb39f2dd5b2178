// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the fixed-width output adapter.
//!
//! Buffers of arbitrary (possibly too small) size must either be rejected up
//! front with the set left intact, or receive exactly `len` results with
//! correct terminators. Nothing may panic either way.

#![no_main]

use libfuzzer_sys::fuzz_target;
use suggestset::{
    write_output, Candidate, OutputBuffers, RankedResultSet, SuggestionKind, CODE_POINT_TERMINATOR,
    MAX_WORD_LENGTH,
};

#[derive(Debug, arbitrary::Arbitrary)]
struct BufferInput {
    capacity: u8,
    buffer_slots: u8,
    words: Vec<(u8, i16, Option<i8>)>,
}

fuzz_target!(|input: BufferInput| {
    let capacity = usize::from(input.capacity % 16);
    let mut set = RankedResultSet::new(capacity);
    for (len, score, confidence) in input.words {
        let len = usize::from(len % 64);
        set.insert(
            Candidate::new(vec![120u32; len], i32::from(score), SuggestionKind::Typed)
                .with_auto_commit_confidence(confidence.map(i32::from)),
        );
    }

    let len = set.len();
    let mut buffers = OutputBuffers::for_capacity(usize::from(input.buffer_slots % 16))
        .expect("small buffers always allocate");

    match write_output(&mut set, &mut buffers) {
        Ok(written) => {
            assert_eq!(written, len);
            assert_eq!(buffers.count, len);
            assert!(set.is_empty());
            for i in 0..written {
                let word = buffers.word_at(i);
                assert!(!word.is_empty() && word.len() <= MAX_WORD_LENGTH);
                if word.len() < MAX_WORD_LENGTH {
                    assert_eq!(
                        buffers.code_points[i * MAX_WORD_LENGTH + word.len()],
                        CODE_POINT_TERMINATOR
                    );
                }
            }
        }
        Err(_) => {
            assert!(buffers.slots() < len);
            assert_eq!(set.len(), len, "set drained despite buffer error");
        }
    }
});
