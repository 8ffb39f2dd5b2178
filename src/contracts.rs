// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the result set.
//!
//! Debug-mode assertions for the properties the rest of the crate relies on.
//! These contracts:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Provide **early failure detection** during development
//! 3. Mirror the properties exercised by `tests/property.rs`
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function             | Property                                      |
//! |-------------------------------|-----------------------------------------------|
//! | `check_capacity_bound`        | `len <= capacity` after every insertion       |
//! | `check_candidate_retainable`  | `1 <= count <= MAX_WORD_LENGTH`               |
//! | `check_best_first`            | output non-increasing under the tie-break rule |
//!
//! # Usage
//!
//! ```ignore
//! use suggestset::contracts::*;
//!
//! // In debug builds, this panics if the ordering is broken
//! check_best_first(&output.candidates);
//!
//! // In release builds, this is a no-op
//! ```

use crate::ranking::is_better;
use crate::types::{Candidate, MAX_WORD_LENGTH};

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

const _: () = {
    // A slot must leave room for at least one code point
    assert!(MAX_WORD_LENGTH >= 1);
    // Terminator is only written when count < MAX_WORD_LENGTH, so it never
    // spills into the next slot
    assert!(crate::types::CODE_POINT_TERMINATOR == 0);
};

// ============================================================================
// SET CONTRACTS
// ============================================================================

/// Check that a set never holds more than its capacity.
///
/// # Panics (debug builds only)
/// Panics if `len > capacity`.
#[inline]
pub fn check_capacity_bound(len: usize, capacity: usize) {
    debug_assert!(
        len <= capacity,
        "Contract violation: capacity bound - len {} > capacity {}",
        len,
        capacity
    );
}

/// Check that a candidate about to be retained fits an output slot.
#[inline]
pub fn check_candidate_retainable(candidate: &Candidate) {
    let count = candidate.code_point_count();
    debug_assert!(
        (1..=MAX_WORD_LENGTH).contains(&count),
        "Contract violation: retained candidate has {} code points (allowed 1..={})",
        count,
        MAX_WORD_LENGTH
    );
}

/// Check that candidates are in best-first order.
///
/// # Panics (debug builds only)
/// Panics if any candidate is strictly better than the one before it.
#[inline]
pub fn check_best_first(candidates: &[Candidate]) {
    for (i, pair) in candidates.windows(2).enumerate() {
        debug_assert!(
            !is_better(&pair[1], &pair[0]),
            "Contract violation: best-first order broken at position {} - \
             ({}, {}) ranks above ({}, {})",
            i + 1,
            pair[1].score,
            pair[1].code_point_count(),
            pair[0].score,
            pair[0].code_point_count()
        );
    }
}
