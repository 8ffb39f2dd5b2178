// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! Insertion never fails with `Err`: a bad candidate is logged and reported back
//! through [`crate::Insertion::Invalid`]. The only fallible operations are the
//! output adapter (buffers too small) and config loading.

use std::fmt;
use std::path::PathBuf;

use crate::types::MAX_WORD_LENGTH;

/// Why a candidate was refused at insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidCandidate {
    /// No code points at all.
    Empty,
    /// More code points than an output slot can hold.
    TooLong { count: usize },
}

impl InvalidCandidate {
    /// Check a code-point count against `[1, MAX_WORD_LENGTH]`.
    pub fn check(count: usize) -> Result<(), InvalidCandidate> {
        match count {
            0 => Err(InvalidCandidate::Empty),
            n if n > MAX_WORD_LENGTH => Err(InvalidCandidate::TooLong { count: n }),
            _ => Ok(()),
        }
    }

    /// The offending code-point count.
    pub fn count(&self) -> usize {
        match self {
            InvalidCandidate::Empty => 0,
            InvalidCandidate::TooLong { count } => *count,
        }
    }
}

impl fmt::Display for InvalidCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidCandidate::Empty => write!(f, "candidate has no code points"),
            InvalidCandidate::TooLong { count } => write!(
                f,
                "candidate has {} code points, limit is {}",
                count, MAX_WORD_LENGTH
            ),
        }
    }
}

impl std::error::Error for InvalidCandidate {}

/// Output buffers too small for the retained results, or too large to allocate.
///
/// Size checks run before anything is drained, so the set is intact when this
/// comes back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    CodePoints { required: usize, actual: usize },
    Scores { required: usize, actual: usize },
    PartialCommitIndices { required: usize, actual: usize },
    Types { required: usize, actual: usize },
    /// Buffers for this many results can't be allocated.
    Oversized { capacity: usize },
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (name, required, actual) = match self {
            BufferError::Oversized { capacity } => {
                return write!(f, "cannot allocate output buffers for {} results", capacity);
            }
            BufferError::CodePoints { required, actual } => ("code point", required, actual),
            BufferError::Scores { required, actual } => ("score", required, actual),
            BufferError::PartialCommitIndices { required, actual } => {
                ("partial commit index", required, actual)
            }
            BufferError::Types { required, actual } => ("type", required, actual),
        };
        write!(
            f,
            "{} buffer holds {} entries, {} required",
            name, actual, required
        )
    }
}

impl std::error::Error for BufferError {}

/// Failure loading a [`crate::RankingConfig`].
#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: Option<PathBuf>,
        source: serde_json::Error,
    },
    /// A pass that keeps nothing is almost certainly a mistake in a config file.
    ZeroCapacity,
    /// Weight must be finite.
    InvalidWeight { weight: f32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "failed to read {}: {}", path.display(), source)
            }
            ConfigError::Parse {
                path: Some(path),
                source,
            } => write!(f, "invalid config {}: {}", path.display(), source),
            ConfigError::Parse { path: None, source } => write!(f, "invalid config: {}", source),
            ConfigError::ZeroCapacity => write!(f, "capacity must be at least 1"),
            ConfigError::InvalidWeight { weight } => {
                write!(f, "weight {} is not a finite number", weight)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse { source, .. } => Some(source),
            _ => None,
        }
    }
}
