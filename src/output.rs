// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fixed-width output buffers for the host runtime.
//!
//! The host hands over flat, preallocated arrays and expects results written
//! into them best-first. This module is that adapter and nothing more: the
//! core API is [`RankedResultSet::drain`], this just flattens its output.
//!
//! # Layout
//!
//! ```text
//! code_points  │ slot 0 (MAX_WORD_LENGTH) │ slot 1 │ ... │ slot capacity-1 │
//!              │ h  e  l  l  o  0  ?  ?  │
//!                             ▲ terminator, only when count < MAX_WORD_LENGTH
//!
//! scores                  [capacity]   i32
//! partial_commit_indices  [capacity]   i32, NOT_AN_INDEX when absent
//! types                   [capacity]   i32, kind code | flag bits
//! auto_commit_confidence  [1]          written only when exactly one result
//! weight                  f32          NOT_A_WEIGHT when unset
//! count                   usize
//! ```
//!
//! Cells past the terminator, and entries past `count`, keep whatever the
//! caller left there.

use crate::error::BufferError;
use crate::results::RankedResultSet;
use crate::types::{
    confidence_to_raw, index_to_raw, weight_to_raw, CODE_POINT_TERMINATOR, MAX_WORD_LENGTH,
    NOT_A_CONFIDENCE, NOT_AN_INDEX, NOT_A_WEIGHT,
};

/// Caller-owned output arrays.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputBuffers {
    pub code_points: Vec<u32>,
    pub scores: Vec<i32>,
    pub partial_commit_indices: Vec<i32>,
    pub types: Vec<i32>,
    pub auto_commit_confidence: [i32; 1],
    pub weight: f32,
    pub count: usize,
}

impl OutputBuffers {
    /// Zeroed buffers sized for a set of `capacity`.
    ///
    /// The confidence cell starts at `NOT_A_CONFIDENCE` so an untouched cell
    /// reads as "not applicable". Fails with [`BufferError::Oversized`] when
    /// the code-point column overflows `usize` or can't be allocated.
    pub fn for_capacity(capacity: usize) -> Result<Self, BufferError> {
        let oversized = || BufferError::Oversized { capacity };
        let code_points_len = capacity.checked_mul(MAX_WORD_LENGTH).ok_or_else(oversized)?;

        Ok(OutputBuffers {
            code_points: filled(code_points_len, 0, oversized)?,
            scores: filled(capacity, 0, oversized)?,
            partial_commit_indices: filled(capacity, NOT_AN_INDEX, oversized)?,
            types: filled(capacity, 0, oversized)?,
            auto_commit_confidence: [NOT_A_CONFIDENCE],
            weight: NOT_A_WEIGHT,
            count: 0,
        })
    }

    /// Code points of result `index` up to (not including) its terminator.
    pub fn word_at(&self, index: usize) -> &[u32] {
        let start = index * MAX_WORD_LENGTH;
        let Some(slot) = self.code_points.get(start..start + MAX_WORD_LENGTH) else {
            return &[];
        };
        let end = slot
            .iter()
            .position(|&cp| cp == CODE_POINT_TERMINATOR)
            .unwrap_or(MAX_WORD_LENGTH);
        &slot[..end]
    }

    /// How many results these buffers can hold.
    pub fn slots(&self) -> usize {
        (self.code_points.len() / MAX_WORD_LENGTH)
            .min(self.scores.len())
            .min(self.partial_commit_indices.len())
            .min(self.types.len())
    }

    fn check_fits(&self, count: usize) -> Result<(), BufferError> {
        let code_points = count * MAX_WORD_LENGTH;
        if self.code_points.len() < code_points {
            return Err(BufferError::CodePoints {
                required: code_points,
                actual: self.code_points.len(),
            });
        }
        if self.scores.len() < count {
            return Err(BufferError::Scores {
                required: count,
                actual: self.scores.len(),
            });
        }
        if self.partial_commit_indices.len() < count {
            return Err(BufferError::PartialCommitIndices {
                required: count,
                actual: self.partial_commit_indices.len(),
            });
        }
        if self.types.len() < count {
            return Err(BufferError::Types {
                required: count,
                actual: self.types.len(),
            });
        }
        Ok(())
    }
}

fn filled<T: Clone>(
    len: usize,
    value: T,
    oversized: impl Fn() -> BufferError,
) -> Result<Vec<T>, BufferError> {
    let mut column = Vec::new();
    column.try_reserve_exact(len).map_err(|_| oversized())?;
    column.resize(len, value);
    Ok(column)
}

/// Drain `set` best-first into `buffers` and return the number written.
///
/// Buffers are checked against the set's current size before anything is
/// drained; on error the set is left as it was.
pub fn write_output(
    set: &mut RankedResultSet,
    buffers: &mut OutputBuffers,
) -> Result<usize, BufferError> {
    buffers.check_fits(set.len())?;

    let output = set.drain();
    let count = output.count();

    for (index, candidate) in output.candidates.iter().enumerate() {
        let start = index * MAX_WORD_LENGTH;
        let len = candidate.code_point_count();
        buffers.code_points[start..start + len].copy_from_slice(&candidate.code_points);
        if len < MAX_WORD_LENGTH {
            buffers.code_points[start + len] = CODE_POINT_TERMINATOR;
        }

        buffers.scores[index] = candidate.score;
        buffers.partial_commit_indices[index] = index_to_raw(candidate.partial_commit_index);
        buffers.types[index] = candidate.wire_type();

        if count == 1 {
            buffers.auto_commit_confidence[0] =
                confidence_to_raw(candidate.auto_commit_confidence);
        }
    }

    buffers.count = count;
    buffers.weight = weight_to_raw(output.weight);
    Ok(count)
}
