// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for the suggestset ranking rule.
//!
//! This standalone crate extracts the tie-break rule and the bounded
//! replace-the-weakest step over a fixed array, and proves them with Kani.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **Strict order**: `is_better` is irreflexive, asymmetric and transitive
//! 2. **Totality on keys**: distinct `(score, count)` keys are always ordered
//! 3. **Bounded insert**: the fixed-array top-K never exceeds its capacity and
//!    never loses a candidate better than one it keeps

/// Capacity of the fixed array used by the proofs.
pub const CAPACITY: usize = 3;

/// Longest word a slot can hold (mirrors src/types.rs).
pub const MAX_WORD_LENGTH: usize = 48;

// ============================================================================
// TIE-BREAK RULE (mirrors src/ranking.rs)
// ============================================================================

/// `(score, code_point_count)`
pub type Key = (i32, usize);

pub fn is_better(a: Key, b: Key) -> bool {
    a.0 > b.0 || (a.0 == b.0 && a.1 < b.1)
}

// ============================================================================
// FIXED-ARRAY TOP-K (same decisions as RankedResultSet::insert)
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Added,
    Replaced,
    Discarded,
    Invalid,
}

pub struct TopK {
    slots: [Key; CAPACITY],
    len: usize,
}

impl Default for TopK {
    fn default() -> Self {
        Self::new()
    }
}

impl TopK {
    pub fn new() -> Self {
        TopK {
            slots: [(0, 0); CAPACITY],
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn keys(&self) -> &[Key] {
        &self.slots[..self.len]
    }

    /// Index of the weakest retained key.
    fn weakest(&self) -> Option<usize> {
        let mut weakest: Option<usize> = None;
        for i in 0..self.len {
            weakest = match weakest {
                Some(w) if !is_better(self.slots[w], self.slots[i]) => Some(w),
                _ => Some(i),
            };
        }
        weakest
    }

    pub fn insert(&mut self, key: Key) -> Outcome {
        if key.1 == 0 || key.1 > MAX_WORD_LENGTH {
            return Outcome::Invalid;
        }
        if self.len < CAPACITY {
            self.slots[self.len] = key;
            self.len += 1;
            return Outcome::Added;
        }
        match self.weakest() {
            Some(w) if is_better(key, self.slots[w]) => {
                self.slots[w] = key;
                Outcome::Replaced
            }
            _ => Outcome::Discarded,
        }
    }
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    fn any_key() -> Key {
        let count: usize = kani::any_where(|&n| n <= MAX_WORD_LENGTH + 1);
        (kani::any(), count)
    }

    /// Verify is_better is a strict order.
    #[kani::proof]
    fn verify_is_better_strict_order() {
        let a = any_key();
        let b = any_key();
        let c = any_key();

        kani::assert(!is_better(a, a), "is_better must be irreflexive");
        if is_better(a, b) {
            kani::assert(!is_better(b, a), "is_better must be asymmetric");
        }
        if is_better(a, b) && is_better(b, c) {
            kani::assert(is_better(a, c), "is_better must be transitive");
        }
    }

    /// Verify distinct keys are always comparable.
    #[kani::proof]
    fn verify_distinct_keys_ordered() {
        let a = any_key();
        let b = any_key();
        if a != b {
            kani::assert(
                is_better(a, b) || is_better(b, a),
                "distinct keys must be ordered",
            );
        }
    }

    /// Verify bounded insertion keeps the capacity and the best keys.
    #[kani::proof]
    #[kani::unwind(6)] // CAPACITY + 1 insertions, plus loop exit
    fn verify_bounded_insert() {
        let mut topk = TopK::new();
        let inserted: [Key; CAPACITY + 1] = [any_key(), any_key(), any_key(), any_key()];

        for &key in &inserted {
            let before = topk.len();
            let outcome = topk.insert(key);
            kani::assert(topk.len() <= CAPACITY, "capacity bound");
            if outcome == Outcome::Invalid || outcome == Outcome::Discarded {
                kani::assert(topk.len() == before, "rejected insert must not grow the set");
            }
        }

        // Every valid key left out is no better than every key kept
        for &key in &inserted {
            let valid = key.1 >= 1 && key.1 <= MAX_WORD_LENGTH;
            if valid && !topk.keys().contains(&key) {
                for &kept in topk.keys() {
                    kani::assert(!is_better(key, kept), "dropped key beats a kept key");
                }
            }
        }
    }
}
